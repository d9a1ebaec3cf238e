use yew::prelude::*;

use super::app::SiteContext;

/// Fixed page anchors reachable from the nav bar, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "首頁"),
    ("transformation", "蛻變計畫"),
    ("projects", "四大建設"),
    ("partners", "在地夥伴"),
    ("download", "資料下載"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct NavBarProps {
    pub is_scrolled: bool,
    pub menu_open: bool,
    pub navigate: Callback<&'static str>,
    pub toggle_menu: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let Some(ctx) = use_context::<SiteContext>() else {
        return html! {};
    };
    let site = ctx.content.site();

    let home_cb = {
        let cb = props.navigate.clone();
        Callback::from(move |_| cb.emit("home"))
    };
    let toggle_cb = {
        let cb = props.toggle_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let bar_class = if props.is_scrolled { "glass-morphism py-3 shadow-lg" } else { "bg-transparent py-5" };

    html! {
        <nav class={classes!("fixed", "top-0", "left-0", "w-full", "z-50", "transition-all", "duration-300", bar_class)}>
            <div class="container mx-auto px-6 flex justify-between items-center">
                <div class="flex items-center gap-3 cursor-pointer" onclick={home_cb}>
                    <img src={site.logo.clone()} alt="Logo" class="h-10 md:h-12 w-auto" />
                    <div class="h-8 w-[1px] bg-white/20 hidden md:block"></div>
                    <span class="text-lg font-bold tracking-tighter hidden md:block">{ site.brand.clone() }</span>
                </div>
                <div class="hidden md:flex gap-8 text-sm font-medium uppercase tracking-widest">
                    { for NAV_LINKS.iter().map(|&(anchor, label)| {
                        let cb = props.navigate.clone();
                        html! {
                            <button onclick={Callback::from(move |_| cb.emit(anchor))} class="hover:text-accentYellow transition-colors relative group">
                                { label }
                                <span class="absolute -bottom-1 left-0 w-0 h-[2px] bg-accentYellow transition-all group-hover:w-full"></span>
                            </button>
                        }
                    }) }
                </div>
                <button class="md:hidden p-2 text-white" aria-label="menu" onclick={toggle_cb}>
                    { if props.menu_open { "✕" } else { "☰" } }
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::NAV_LINKS;
    use crate::model::RESERVED_ANCHORS;

    #[test]
    fn nav_links_cover_reserved_anchors() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|(a, _)| *a).collect();
        assert_eq!(anchors, RESERVED_ANCHORS);
    }
}
