use super::app::SiteContext;
use crate::model::Project;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectPanelsProps {
    pub active: usize,
    pub select: Callback<usize>,
}

/// Full-viewport sticky panels, one per project, anchored at the project id.
#[function_component(ProjectPanels)]
pub fn project_panels(props: &ProjectPanelsProps) -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    let projects = ctx.content.projects();
    html! {
        <section id="projects" class="relative">
            { for projects.iter().enumerate().map(|(idx, project)| html! {
                <ProjectPanel
                    key={project.id.clone()}
                    index={idx}
                    project={project.clone()}
                    total={projects.len()}
                    active={props.active}
                    select={props.select.clone()}
                />
            }) }
        </section>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectPanelProps {
    pub index: usize,
    pub project: Project,
    pub total: usize,
    pub active: usize,
    pub select: Callback<usize>,
}

#[function_component(ProjectPanel)]
pub fn project_panel(props: &ProjectPanelProps) -> Html {
    let p = &props.project;
    let is_active = props.active == props.index;
    let image_class = if is_active { "scale-100 opacity-30" } else { "scale-110 opacity-0" };
    let body_class = if is_active { "translate-y-0 opacity-100" } else { "translate-y-12 opacity-0" };

    html! {
        <div id={p.id.clone()} class="project-section min-h-screen sticky top-0 bg-primary flex items-center overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img src={p.image.clone()} alt={p.title.clone()}
                    class={classes!("w-full", "h-full", "object-cover", "transition-all", "duration-1000", "transform", image_class)} />
                <div class="absolute inset-0 bg-gradient-to-r from-primary via-primary/70 to-transparent"></div>
            </div>
            <div class="container mx-auto px-6 relative z-10 py-24">
                <div class={classes!("max-w-4xl", "transition-all", "duration-700", "transform", body_class)}>
                    <div class="flex items-center gap-4 mb-6">
                        <span class="text-secondary font-serif italic text-7xl opacity-30">{ format!("{:02}", props.index + 1) }</span>
                        <div class="h-[2px] flex-grow max-w-[100px] bg-accentYellow"></div>
                    </div>
                    <h3 class="text-4xl md:text-7xl font-bold mb-4 tracking-tight">{ p.title.clone() }</h3>
                    <p class="text-xl md:text-2xl text-accentYellow mb-10 italic font-light">{ p.subtitle.clone() }</p>
                    <div class="grid md:grid-cols-2 gap-10 mb-12">
                        <div class="p-6 glass-morphism rounded-2xl border border-white/5">
                            <h5 class="font-bold text-white mb-2 text-lg">{"計畫起源與設計理念"}</h5>
                            <p class="text-sm text-gray-300 leading-relaxed">{ p.origin.clone() }</p>
                            <p class="text-sm text-gray-300 mt-4 font-medium border-t border-white/10 pt-4">{ p.design.clone() }</p>
                        </div>
                        <div class="p-6 glass-morphism rounded-2xl border border-white/5">
                            <h5 class="font-bold text-white mb-2 text-lg">{"預計成果與社會效益"}</h5>
                            <p class="text-sm text-gray-300 leading-relaxed">{ p.expected.clone() }</p>
                            <div class="mt-4 text-accentOrange text-sm font-bold">{ p.progress.clone() }</div>
                            { if let Some(budget) = &p.budget {
                                html! { <div class="mt-2 text-xs text-gray-400">{ format!("預算：{budget}") }</div> }
                            } else { html! {} } }
                        </div>
                    </div>
                    <div class="flex gap-4">
                        <button class="px-8 py-4 bg-white/5 hover:bg-white/10 border border-accentYellow/30 text-accentYellow hover:text-white rounded-full transition-all flex items-center gap-3 group">
                            {"探索本區細節 ›"}
                        </button>
                    </div>
                </div>
            </div>
            <PaginationDots total={props.total} active={props.active} select={props.select.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationDotsProps {
    pub total: usize,
    pub active: usize,
    pub select: Callback<usize>,
}

#[function_component(PaginationDots)]
pub fn pagination_dots(props: &PaginationDotsProps) -> Html {
    html! {
        <div class="absolute right-12 top-1/2 -translate-y-1/2 hidden lg:flex flex-col gap-4 z-20">
            { for (0..props.total).map(|i| {
                let cb = props.select.clone();
                let state = if props.active == i {
                    "bg-accentYellow scale-150 shadow-[0_0_10px_rgba(240,234,48,0.8)]"
                } else {
                    "bg-white/20 hover:bg-white/40"
                };
                html! {
                    <button
                        key={i.to_string()}
                        aria-label={format!("project {}", i + 1)}
                        onclick={Callback::from(move |_| cb.emit(i))}
                        class={classes!("w-3", "h-3", "rounded-full", "transition-all", "duration-500", state)}
                    />
                }
            }) }
        </div>
    }
}
