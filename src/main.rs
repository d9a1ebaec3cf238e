use std::rc::Rc;

mod components;
mod config;
mod dom;
mod model;
mod state;
mod util;

use components::{App, AppProps};
use model::ContentStore;

fn main() {
    util::init_logging();
    let content = match ContentStore::embedded() {
        Ok(c) => c,
        Err(e) => {
            log::error!("refusing to start: {e}");
            return;
        }
    };
    log::info!(
        "loaded {} projects and {} partner businesses",
        content.projects().len(),
        content.businesses().len()
    );
    yew::Renderer::<App>::with_props(AppProps { content: Rc::new(content) }).render();
}
