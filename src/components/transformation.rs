use super::{app::SiteContext, coastline_map::CoastlineMap};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TransformationProps {
    pub active: usize,
    pub select: Callback<usize>,
}

#[function_component(Transformation)]
pub fn transformation(props: &TransformationProps) -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    html! {
        <section id="transformation" class="py-24 md:py-32 bg-primary relative overflow-hidden">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 md:mb-24">
                    <h2 class="text-3xl md:text-5xl font-bold mb-6">{"珍珠蛻變進行式"}</h2>
                    <p class="text-secondary tracking-widest uppercase text-sm font-bold">{"Spatial & Temporal Transformation"}</p>
                </div>
                <div class="grid lg:grid-cols-2 gap-16 items-center max-w-6xl mx-auto">
                    <div class="order-2 lg:order-1">
                        <CoastlineMap active={props.active} select={props.select.clone()} />
                    </div>
                    <div class="space-y-12 order-1 lg:order-2">
                        { for ctx.content.milestones().iter().map(|m| {
                            let color = m.accent.color();
                            html! {
                                <div key={m.year.clone()} class="relative pl-12 border-l border-white/10">
                                    <div class="absolute -left-3 top-0 w-6 h-6 rounded-full border-4 border-primary" style={format!("background:{color};")}></div>
                                    <h4 class="text-2xl font-bold mb-4 flex items-center gap-3">
                                        <span class="font-serif italic" style={format!("color:{color};")}>{ m.year.clone() }</span>
                                        { m.title.clone() }
                                    </h4>
                                    <p class="text-gray-400 leading-relaxed">{ m.body.clone() }</p>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
