use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    downloads::Downloads, hero::Hero, mobile_menu::MobileMenu, nav_bar::NavBar, partners::Partners,
    project_panels::ProjectPanels, scroll_top_button::ScrollTopButton, transformation::Transformation,
};
use crate::dom;
use crate::model::ContentStore;
use crate::state::{ViewAction, ViewState};

// Shared read-only content so sections don't need it prop-drilled
#[derive(Clone)]
pub struct SiteContext {
    pub content: Rc<ContentStore>,
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }
}

#[derive(Properties, Clone)]
pub struct AppProps {
    pub content: Rc<ContentStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let content = props.content.clone();
    let sync = content.sync_config();
    let view = {
        let count = content.projects().len();
        use_reducer(move || ViewState::new(count, sync))
    };

    // Scroll listener, coalesced to one measurement per animation frame
    {
        let dispatcher = view.dispatcher();
        let section_ids: Rc<Vec<String>> = Rc::new(content.projects().iter().map(|p| p.id.clone()).collect());
        use_effect_with(section_ids, move |section_ids| {
            let section_ids = section_ids.clone();
            let pending_frame: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

            let measure = {
                let dispatcher = dispatcher.clone();
                move || {
                    if let Some(sample) = dom::sample_scroll(section_ids.iter().map(String::as_str)) {
                        dispatcher.dispatch(ViewAction::Scrolled(sample));
                    }
                }
            };
            // Initial state for deep links / restored scroll positions
            measure();

            let frame_cb: Rc<Closure<dyn FnMut()>> = {
                let pending_frame = pending_frame.clone();
                Rc::new(Closure::wrap(Box::new(move || {
                    pending_frame.set(None);
                    measure();
                }) as Box<dyn FnMut()>))
            };

            let scroll_cb = {
                let pending_frame = pending_frame.clone();
                let frame_cb = frame_cb.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if pending_frame.get().is_some() {
                        return;
                    }
                    let Some(win) = web_sys::window() else { return };
                    match win.request_animation_frame((*frame_cb).as_ref().unchecked_ref()) {
                        Ok(id) => pending_frame.set(Some(id)),
                        Err(_) => log::debug!("requestAnimationFrame unavailable"),
                    }
                }) as Box<dyn FnMut(_)>)
            };

            let window = web_sys::window();
            if let Some(win) = &window {
                if win
                    .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("could not attach scroll listener");
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
                    if let Some(id) = pending_frame.take() {
                        let _ = win.cancel_animation_frame(id);
                    }
                }
                drop(scroll_cb);
                drop(frame_cb);
            }
        });
    }

    let select_project = {
        let dispatcher = view.dispatcher();
        let content = content.clone();
        Callback::from(move |idx: usize| {
            dispatcher.dispatch(ViewAction::SelectProject(idx));
            if let Some(project) = content.project(idx) {
                dom::scroll_to_anchor(&project.id, &sync);
            }
        })
    };
    let navigate = {
        let dispatcher = view.dispatcher();
        Callback::from(move |anchor: &'static str| {
            dispatcher.dispatch(ViewAction::Navigate);
            dom::scroll_to_anchor(anchor, &sync);
        })
    };
    let toggle_menu = {
        let dispatcher = view.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ViewAction::ToggleMobileMenu))
    };
    let close_menu = {
        let dispatcher = view.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ViewAction::CloseMobileMenu))
    };
    let scroll_top = Callback::from(|_: ()| dom::scroll_to_top());

    let ctx = SiteContext { content: content.clone() };

    html! {
        <ContextProvider<SiteContext> context={ctx}>
            <div class="relative min-h-screen">
                <NavBar
                    is_scrolled={view.is_scrolled}
                    menu_open={view.mobile_menu_open}
                    navigate={navigate.clone()}
                    toggle_menu={toggle_menu}
                />
                <MobileMenu open={view.mobile_menu_open} navigate={navigate.clone()} close={close_menu} />
                <Hero navigate={navigate.clone()} />
                <Transformation active={view.active_project} select={select_project.clone()} />
                <ProjectPanels active={view.active_project} select={select_project} />
                <Partners />
                <Downloads navigate={navigate} />
                <ScrollTopButton visible={view.is_scrolled} on_click={scroll_top} />
            </div>
        </ContextProvider<SiteContext>>
    }
}
