//! Colors - Docpane Theme Colors

use gpui::{Rgba, rgb};

/// Docpane color palette - all colors are accessed via associated functions
pub struct DocColors;

impl DocColors {
    // Primary colors
    /// Header background
    pub fn header_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Primary accent - Blue
    pub fn accent() -> Rgba {
        rgb(0x0061d5)
    }

    // Background colors
    /// Main background
    pub fn background() -> Rgba {
        rgb(0xf5f7fa)
    }
    /// Content area background
    pub fn content_bg() -> Rgba {
        rgb(0xffffff)
    }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba {
        rgb(0x222222)
    }
    /// Secondary text
    pub fn text_secondary() -> Rgba {
        rgb(0x6f6f6f)
    }
    /// Muted text
    pub fn text_muted() -> Rgba {
        rgb(0x909090)
    }
    /// Light text (on dark or accent backgrounds)
    pub fn text_light() -> Rgba {
        rgb(0xffffff)
    }

    // Border colors
    /// Default border
    pub fn border() -> Rgba {
        rgb(0xe8e8e8)
    }
    /// Focused border
    pub fn border_focus() -> Rgba {
        rgb(0x0061d5)
    }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba {
        rgb(0xffffff)
    }
    /// Input border
    pub fn input_border() -> Rgba {
        rgb(0xd3d3d3)
    }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba {
        rgb(0x909090)
    }

    // Action buttons
    /// Action button glyph color
    pub fn action_icon() -> Rgba {
        rgb(0x6f6f6f)
    }
    /// Action button hover background
    pub fn action_hover_bg() -> Rgba {
        rgb(0xf0f4f8)
    }
    /// Loading indicator color
    pub fn loading_indicator() -> Rgba {
        rgb(0x0061d5)
    }
}
