use super::app::SiteContext;
use yew::prelude::*;

#[function_component(Partners)]
pub fn partners() -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    html! {
        <section id="partners" class="py-24 md:py-32 bg-white text-primary">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 max-w-3xl mx-auto">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">{"在地夥伴的故事"}</h2>
                    <div class="w-24 h-1.5 bg-accentOrange mx-auto mb-8 rounded-full"></div>
                    <p class="text-gray-600 text-lg leading-relaxed">
                        {"珍珠海岸的重生不僅是景觀的改善，更是連結人與土地的情感紐帶。透過在地業者的堅持與創意，我們正共同譜寫一段屬於海岸的生活新篇章。"}
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-10 max-w-6xl mx-auto">
                    { for ctx.content.businesses().iter().map(|biz| html! {
                        <div key={biz.id.clone()} class="bg-white rounded-3xl overflow-hidden border border-gray-100 transition-all group">
                            <div class="h-72 overflow-hidden relative">
                                <img src={biz.image.clone()} alt={biz.name.clone()} class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700" />
                                <div class="absolute top-6 left-6 px-4 py-1.5 bg-primary/90 text-white text-xs font-bold rounded-full backdrop-blur-sm">
                                    { biz.category.label() }
                                </div>
                            </div>
                            <div class="p-10">
                                <h4 class="text-2xl font-bold mb-4 group-hover:text-accentOrange transition-colors">{ biz.name.clone() }</h4>
                                <p class="text-gray-600 mb-8 leading-relaxed font-light">{ biz.description.clone() }</p>
                                <button class="text-sm font-bold flex items-center gap-2 text-primary group-hover:gap-3 transition-all">
                                    {"深度故事探索 "}<span class="text-accentOrange">{"›"}</span>
                                </button>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
