//! IconButton Component
//!
//! A small glyph-only action button with an accessible title shown as a
//! tooltip.

use gpui::{
    AnyView, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, Render,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Icon;

use crate::assets::GlyphName;
use crate::theme::colors::DocColors;

/// A glyph action button
#[derive(IntoElement)]
pub struct IconButton {
    id: ElementId,
    glyph: GlyphName,
    title: SharedString,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl IconButton {
    /// Create a new icon button
    pub fn new(id: impl Into<ElementId>, glyph: GlyphName, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            glyph,
            title: title.into(),
            disabled: false,
            on_click: None,
        }
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// The accessible title
    pub fn title(&self) -> &SharedString {
        &self.title
    }
}

/// Tooltip view displaying an accessible title
struct TextTooltip {
    text: SharedString,
}

impl Render for TextTooltip {
    fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
        div()
            .px_2()
            .py_1()
            .rounded_md()
            .bg(DocColors::text_primary())
            .text_color(DocColors::text_light())
            .text_size(px(12.0))
            .child(self.text.clone())
    }
}

impl RenderOnce for IconButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let title = self.title.clone();
        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .p_1()
            .rounded_md()
            .text_color(DocColors::action_icon())
            .opacity(opacity)
            .tooltip(move |_window, cx| {
                AnyView::from(cx.new(|_| TextTooltip {
                    text: title.clone(),
                }))
            })
            .child(Icon::from(self.glyph));

        if !self.disabled {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(DocColors::action_hover_bg()));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
