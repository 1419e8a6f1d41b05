//! SearchInput Component
//!
//! The uncontrolled text input used inside the search form. The input owns
//! its displayed value; callers that want to force a value mutate the entity
//! directly rather than re-rendering it from external state.

use gpui::{
    Context, ElementId, FocusHandle, Focusable, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::DocColors;

/// An uncontrolled search input
pub struct SearchInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    label: SharedString,
    focus_handle: FocusHandle,
    on_change: Option<Box<dyn Fn(&str, &mut Context<Self>) + 'static>>,
}

impl SearchInput {
    /// Create a new search input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            label: SharedString::default(),
            focus_handle: cx.focus_handle(),
            on_change: None,
        }
    }

    /// Force the value, without firing the change hook
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the current raw value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the accessible label
    pub fn set_label(&mut self, label: impl Into<SharedString>) {
        self.label = label.into();
    }

    /// Get the accessible label
    pub fn label(&self) -> &SharedString {
        &self.label
    }

    /// Set the change hook, fired on every keystroke with the raw value
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Handle typed text
    pub fn handle_input(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }

    /// Handle backspace
    pub fn handle_backspace(&mut self, cx: &mut Context<Self>) {
        self.value.pop();
        if let Some(ref handler) = self.on_change {
            handler(&self.value, cx);
        }
        cx.notify();
    }
}

impl Focusable for SearchInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for SearchInput {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            DocColors::border_focus()
        } else {
            DocColors::input_border()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            DocColors::input_placeholder()
        } else {
            DocColors::text_primary()
        };

        div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .flex_1()
            .px_3()
            .py_2()
            .bg(DocColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(220.0))
            .child(display_text)
    }
}
