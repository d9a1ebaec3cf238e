use super::app::SiteContext;
use yew::prelude::*;

const COASTLINE_PATH: &str = "M 50,50 Q 80,100 70,200 T 100,350 T 60,550";
const ACTIVE_COLOR: &str = "#EE7800";
const IDLE_COLOR: &str = "#f0ea30";

#[derive(Properties, PartialEq, Clone)]
pub struct CoastlineMapProps {
    pub active: usize,
    pub select: Callback<usize>,
}

/// SVG coastline with one marker per project plus a tooltip for the active one.
#[function_component(CoastlineMap)]
pub fn coastline_map(props: &CoastlineMapProps) -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    let content = &ctx.content;

    let markers = content.projects().iter().enumerate().filter_map(|(idx, project)| {
        let pos = content.marker(&project.id)?;
        let is_active = props.active == idx;
        let color = if is_active { ACTIVE_COLOR } else { IDLE_COLOR };
        let onclick = {
            let cb = props.select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(idx))
        };
        // Hovering selects too, same as clicking
        let onmouseenter = {
            let cb = props.select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(idx))
        };
        let ring_class = if is_active { "opacity-100 scale-125" } else { "opacity-30" };
        let label_class = if is_active { "translate-x-2" } else { "opacity-60" };
        Some(html! {
            <g key={project.id.clone()} class="cursor-pointer transition-all duration-300 group" {onclick} {onmouseenter}>
                <circle cx={pos.x.to_string()} cy={pos.y.to_string()} r={if is_active { "12" } else { "8" }}
                    fill={color} class="transition-all duration-500 animate-pulse" />
                <circle cx={pos.x.to_string()} cy={pos.y.to_string()} r={if is_active { "20" } else { "15" }}
                    fill="none" stroke={color} stroke-width="2"
                    class={classes!("transition-all", "duration-500", ring_class)} />
                <text x={(pos.x + 25.0).to_string()} y={(pos.y + 5.0).to_string()}
                    fill={if is_active { IDLE_COLOR } else { "white" }}
                    class={classes!("text-[14px]", "font-bold", "tracking-wider", "transition-all", "duration-300", "pointer-events-none", label_class)}>
                    { project.title.clone() }
                </text>
            </g>
        })
    });

    let tooltip = match content.project(props.active) {
        Some(p) => html! {
            <div class="absolute bottom-4 right-4 glass-morphism p-4 rounded-xl border border-white/10 max-w-[200px] animate-fade-in-up">
                <p class="text-xs text-secondary font-bold mb-1 uppercase tracking-widest">{"目前選取"}</p>
                <p class="text-lg font-bold text-accentYellow">{ p.title.clone() }</p>
                <p class="text-xs text-gray-400 mt-2">{ p.subtitle.clone() }</p>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="relative w-full max-w-2xl mx-auto h-[400px] md:h-[500px]">
            <svg viewBox="0 0 400 600" class="w-full h-full drop-shadow-2xl">
                <path d={COASTLINE_PATH} fill="none" stroke="#8cc280" stroke-width="6" stroke-linecap="round" class="opacity-50" />
                <path d={COASTLINE_PATH} fill="none" stroke={IDLE_COLOR} stroke-width="2" stroke-dasharray="10 5" class="opacity-80" />
                { for markers }
                <text x="30" y="30" fill="#8cc280" class="text-[10px] font-bold uppercase tracking-[4px]">{"Taoyuan Coastline"}</text>
                <text x="30" y="580" fill="#8cc280" class="text-[10px] font-bold uppercase tracking-[4px]">{"Southern Link"}</text>
            </svg>
            { tooltip }
        </div>
    }
}
