//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the content domain.

pub mod file;

pub use file::{FileVersion, PreviewFile};
