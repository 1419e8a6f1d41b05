//! SearchForm Component
//!
//! Composes the uncontrolled search input with a loadable action area
//! (submit/clear buttons). The displayed value is owned by the inner input
//! entity; the form keeps only the derived empty state in its model and
//! recomputes it on every change, clear, and controlled-value sync.

use gpui::{
    AnyElement, App, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*,
};
use gpui_component::Icon;

use crate::assets::GlyphName;
use crate::components::composite::search_form::model::{SearchFormConfig, SearchFormModel};
use crate::components::primitives::icon_button::IconButton;
use crate::components::primitives::loadable::{Loadable, LoadingIndicatorStyle};
use crate::components::primitives::search_input::SearchInput;
use crate::i18n::Translator;
use crate::theme::colors::DocColors;

type ChangeHandler = Box<dyn Fn(&str, &mut Context<SearchForm>) + 'static>;
type SubmitHandler = Box<dyn Fn(&str, &ClickEvent, &mut Window, &mut App) + 'static>;

/// A search form with optional submit/clear actions and hidden query fields
pub struct SearchForm {
    id: ElementId,
    model: SearchFormModel,
    translator: Translator,
    input: Entity<SearchInput>,
    is_loading: bool,
    indicator_style: LoadingIndicatorStyle,
    on_change: Option<ChangeHandler>,
    on_submit: Option<SubmitHandler>,
}

impl SearchForm {
    /// Create a new search form
    pub fn new(
        id: impl Into<ElementId>,
        config: SearchFormConfig,
        translator: Translator,
        cx: &mut Context<Self>,
    ) -> Self {
        let model = SearchFormModel::new(config);
        let label = translator.msg("search_form.search_label");

        let initial = model.submit_value().to_string();
        let input = cx.new(|cx| {
            let mut input = SearchInput::new("search-input", cx);
            input.set_label(label.clone());
            input.set_placeholder(label);
            input.set_value(initial);
            input
        });

        // Route keystrokes from the inner input into the form state
        let weak = cx.weak_entity();
        input.update(cx, |input, _| {
            input.on_change(move |value, cx| {
                let value = value.to_string();
                weak.update(cx, |form, cx| form.handle_change(&value, cx))
                    .ok();
            });
        });

        Self {
            id: id.into(),
            model,
            translator,
            input,
            is_loading: false,
            indicator_style: LoadingIndicatorStyle::default(),
            on_change: None,
            on_submit: None,
        }
    }

    /// The inner input entity, for callers that need direct access (focus,
    /// forced values)
    pub fn search_input(&self) -> &Entity<SearchInput> {
        &self.input
    }

    /// The form model (read-only)
    pub fn model(&self) -> &SearchFormModel {
        &self.model
    }

    /// Set the change handler, invoked with the raw value on every keystroke
    /// and with the empty string on clear. No debouncing is applied here.
    pub fn on_change(&mut self, handler: impl Fn(&str, &mut Context<Self>) + 'static) {
        self.on_change = Some(Box::new(handler));
    }

    /// Set the submit handler, invoked with the raw value and the activating
    /// event. Without one, submission is left to the caller (see
    /// [`SearchFormModel::submission`]).
    pub fn on_submit(
        &mut self,
        handler: impl Fn(&str, &ClickEvent, &mut Window, &mut App) + 'static,
    ) {
        self.on_submit = Some(Box::new(handler));
    }

    /// Set the loading flag for the action area
    pub fn set_loading(&mut self, is_loading: bool, cx: &mut Context<Self>) {
        self.is_loading = is_loading;
        cx.notify();
    }

    /// Set the loading-indicator styling
    pub fn set_indicator_style(&mut self, style: LoadingIndicatorStyle) {
        self.indicator_style = style;
    }

    /// Swap the translator, e.g. after a locale change
    pub fn set_translator(&mut self, translator: Translator, cx: &mut Context<Self>) {
        let label = translator.msg("search_form.search_label");
        self.translator = translator;
        self.input.update(cx, |input, cx| {
            input.set_label(label.clone());
            input.set_placeholder(label);
            cx.notify();
        });
        cx.notify();
    }

    /// Synchronize with an externally controlled value. The input displays
    /// the value; the empty state follows the model's derivation rule.
    pub fn set_controlled_value(&mut self, value: Option<&str>, cx: &mut Context<Self>) {
        self.model.sync_controlled_value(value);
        if let Some(v) = value {
            let v = v.to_string();
            self.input.update(cx, |input, cx| {
                input.set_value(v);
                cx.notify();
            });
        }
        cx.notify();
    }

    fn handle_change(&mut self, raw: &str, cx: &mut Context<Self>) {
        self.model.input_changed(raw);
        if let Some(ref handler) = self.on_change {
            handler(raw, cx);
        }
        cx.notify();
    }

    fn handle_clear(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let outcome = self.model.clear();
        if outcome.stop_propagation {
            cx.stop_propagation();
        }

        // The input is uncontrolled; reset it directly
        self.input.update(cx, |input, cx| {
            input.set_value("");
            cx.notify();
        });

        if let Some(ref handler) = self.on_change {
            handler("", cx);
        }
        cx.notify();
    }

    fn handle_submit(&mut self, event: &ClickEvent, window: &mut Window, cx: &mut Context<Self>) {
        let value = self.model.submit_value().to_string();
        match self.on_submit {
            Some(ref handler) => handler(&value, event, window, cx),
            None => {
                let submission = self.model.submission();
                tracing::debug!(
                    action = %submission.action,
                    method = %submission.method,
                    fields = submission.fields.len(),
                    "no submit handler registered; submission left to the caller"
                );
            }
        }
    }
}

impl Focusable for SearchForm {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.input.read(cx).focus_handle(cx)
    }
}

impl Render for SearchForm {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let search_title = self.translator.msg("search_form.search_button_title");
        let clear_title = self.translator.msg("search_form.clear_button_title");
        let show_clear = self.model.config().use_clear_button && !self.model.is_empty();

        let submit_area: AnyElement = if self.on_submit.is_some() {
            IconButton::new("search-button", GlyphName::Search, search_title)
                .on_click(cx.listener(|this, event, window, cx| {
                    this.handle_submit(event, window, cx);
                }))
                .into_any_element()
        } else {
            // No submit handler: a non-interactive glyph placeholder
            div()
                .p_1()
                .text_color(DocColors::action_icon())
                .child(Icon::from(GlyphName::Search))
                .into_any_element()
        };

        let mut actions = div().flex().items_center().gap_1().child(submit_area);
        if show_clear {
            actions = actions.child(
                IconButton::new("clear-button", GlyphName::ClearBadge, clear_title)
                    .on_click(cx.listener(Self::handle_clear)),
            );
        }

        div()
            .id(self.id.clone())
            .flex()
            .items_center()
            .gap_2()
            .p_1()
            .rounded_md()
            .bg(DocColors::content_bg())
            .child(self.input.clone())
            .child(
                Loadable::new(actions)
                    .loading(self.is_loading)
                    .indicator(self.indicator_style),
            )
    }
}
