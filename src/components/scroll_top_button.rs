use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScrollTopButtonProps {
    pub visible: bool,
    pub on_click: Callback<()>,
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button(props: &ScrollTopButtonProps) -> Html {
    let cb = props.on_click.clone();
    let onclick = Callback::from(move |_| cb.emit(()));
    let shown = if props.visible { "translate-y-0 opacity-100" } else { "translate-y-20 opacity-0" };
    html! {
        <button
            {onclick}
            aria-label="scroll to top"
            class={classes!("fixed", "bottom-8", "right-8", "z-[70]", "p-4", "bg-accentOrange", "text-white", "rounded-full", "shadow-2xl", "transition-all", "transform", shown)}
        >
            {"↑"}
        </button>
    }
}
