pub mod scroll;
pub mod view;

pub use scroll::anchor_scroll_target;
pub use view::{ScrollSample, ViewAction, ViewState};
