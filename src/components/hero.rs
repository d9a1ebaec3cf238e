use super::app::SiteContext;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    let site = ctx.content.site();
    let start_cb = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit("transformation"))
    };
    html! {
        <section id="home" class="relative h-screen flex items-center justify-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img src={site.hero_image.clone()} class="w-full h-full object-cover opacity-70 scale-105" alt="Hero Background" />
                <div class="absolute inset-0 bg-gradient-to-b from-primary/30 via-transparent to-primary"></div>
            </div>
            <div class="relative z-10 text-center px-6 max-w-5xl">
                <h2 class="text-secondary font-bold tracking-[0.5em] mb-4 animate-fade-in-up uppercase">{ site.hero_kicker.clone() }</h2>
                <h1 class="text-5xl md:text-9xl font-serif italic mb-8 animate-fade-in-up drop-shadow-lg" style="animation-delay:0.2s;">{ site.hero_title.clone() }</h1>
                <p class="max-w-3xl mx-auto text-lg md:text-xl text-white/90 leading-relaxed mb-12 animate-fade-in-up font-light" style="animation-delay:0.4s;">{ site.hero_lead.clone() }</p>
                <div class="flex flex-col items-center gap-4 animate-fade-in-up" style="animation-delay:0.6s;">
                    <button onclick={start_cb} class="px-10 py-4 bg-accentOrange hover:bg-orange-600 text-white rounded-full font-bold transition-all transform hover:scale-105 shadow-xl">
                        {"開啟探索旅程"}
                    </button>
                    <div class="mt-16 flex flex-col items-center gap-3 opacity-60">
                        <span class="text-[10px] uppercase tracking-[0.3em]">{"Scroll to experience"}</span>
                        <div class="scroll-indicator"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
