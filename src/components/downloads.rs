use super::app::SiteContext;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DownloadsProps {
    pub navigate: Callback<&'static str>,
}

/// Report cards (one per project) and the page footer.
#[function_component(Downloads)]
pub fn downloads(props: &DownloadsProps) -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    let site = ctx.content.site();
    let home_cb = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit("home"))
    };
    html! {
        <section id="download" class="py-24 md:py-32 bg-gray-50 text-primary relative overflow-hidden">
            <div class="container mx-auto px-6 relative z-10">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold mb-4">{"計畫詳情與完整報告"}</h2>
                    <p class="text-gray-500">{"透明公開的工程資訊，邀請您一同監督海岸的新生"}</p>
                </div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6 max-w-6xl mx-auto">
                    { for ctx.content.projects().iter().map(|p| html! {
                        <div key={p.id.clone()} class="p-8 bg-white border border-gray-100 rounded-3xl hover:border-accentOrange transition-all shadow-sm group">
                            <h5 class="font-bold mb-2 text-lg">{ p.title.clone() }</h5>
                            <p class="text-xs text-gray-400 mb-6">{"PDF Document • 12.4 MB"}</p>
                            <button class="w-full py-3 bg-gray-50 hover:bg-accentOrange hover:text-white rounded-xl text-sm font-bold transition-all">
                                {"立即下載報告"}
                            </button>
                        </div>
                    }) }
                </div>
                <footer class="mt-32 pt-16 border-t border-gray-200 text-gray-400 text-sm flex flex-col md:flex-row justify-between items-center gap-8">
                    <div class="flex items-center gap-4">
                        <img src={site.logo.clone()} alt="Logo Footer" class="h-8 opacity-50 grayscale" />
                        <p>{ site.copyright.clone() }</p>
                    </div>
                    <div class="flex gap-8 font-medium">
                        <button onclick={home_cb} class="hover:text-primary transition-colors">{"返回首頁"}</button>
                        <a href="#" class="hover:text-primary transition-colors">{"隱私權保護政策"}</a>
                        <a href="#" class="hover:text-primary transition-colors">{"聯絡我們"}</a>
                    </div>
                </footer>
            </div>
        </section>
    }
}
