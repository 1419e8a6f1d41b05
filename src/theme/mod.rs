//! Theme - Colors and Visual Constants

pub mod colors;

pub use colors::DocColors;
