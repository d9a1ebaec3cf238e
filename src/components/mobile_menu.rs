use super::nav_bar::NAV_LINKS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileMenuProps {
    pub open: bool,
    pub navigate: Callback<&'static str>,
    pub close: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close_cb = {
        let cb = props.close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="fixed inset-0 z-[60] bg-primary/95 backdrop-blur-xl flex flex-col items-center justify-center gap-8 text-2xl font-serif animate-fade-in-up">
            <button onclick={close_cb} class="absolute top-6 right-6 p-4" aria-label="close">{"✕"}</button>
            { for NAV_LINKS.iter().map(|&(anchor, label)| {
                let cb = props.navigate.clone();
                html! { <button onclick={Callback::from(move |_| cb.emit(anchor))} class="hover:text-accentYellow">{ label }</button> }
            }) }
        </div>
    }
}
