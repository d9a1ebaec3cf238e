pub mod app;
pub mod coastline_map;
pub mod downloads;
pub mod hero;
pub mod mobile_menu;
pub mod nav_bar;
pub mod partners;
pub mod project_panels;
pub mod scroll_top_button;
pub mod transformation;

pub use app::{App, AppProps};
