//! Primitive Components
//!
//! Basic building blocks: inputs, action buttons, decorators.

pub mod icon_button;
pub mod loadable;
pub mod search_input;

pub use icon_button::IconButton;
pub use loadable::{Loadable, LoadingIndicatorStyle};
pub use search_input::SearchInput;
