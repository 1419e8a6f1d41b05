//! SearchForm Model
//!
//! The pure state machine behind the search form: emptiness derivation,
//! clear/submit behavior, and the hidden submission fields. Keeping this
//! free of GPUI types makes the form logic directly unit-testable.

use hashlink::LinkedHashMap;

use crate::helpers::is_blank;

/// How the form data is sent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitMethod {
    /// Append fields to the action URL
    #[default]
    Get,
    /// Send fields in the request body
    Post,
}

impl SubmitMethod {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitMethod::Get => "get",
            SubmitMethod::Post => "post",
        }
    }
}

impl std::fmt::Display for SubmitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration bag for the search form
#[derive(Debug, Clone)]
pub struct SearchFormConfig {
    /// Submission target
    pub action: String,
    /// How to send the form data
    pub method: SubmitMethod,
    /// Name of the search field
    pub name: String,
    /// Extra fixed query parameters, submitted as hidden fields
    pub query_params: LinkedHashMap<String, String>,
    /// Show the clear button when the input is not empty
    pub use_clear_button: bool,
    /// Suppress event bubbling when the clear button is activated
    pub should_prevent_clear_event_propagation: bool,
    /// Externally controlled value
    pub value: Option<String>,
}

impl Default for SearchFormConfig {
    fn default() -> Self {
        Self {
            action: String::new(),
            method: SubmitMethod::Get,
            name: "search".to_string(),
            query_params: LinkedHashMap::new(),
            use_clear_button: false,
            should_prevent_clear_event_propagation: false,
            value: None,
        }
    }
}

/// One hidden submission field per extra query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenField {
    /// Field name (the query-parameter key)
    pub name: String,
    /// Field value
    pub value: String,
}

/// Payload for a default submission, handed to the caller when no submit
/// callback is registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSubmission {
    /// Submission target
    pub action: String,
    /// Submission method
    pub method: SubmitMethod,
    /// Ordered name/value pairs: the search field first, then one pair per
    /// extra query parameter
    pub fields: Vec<(String, String)>,
}

/// Result of a clear activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    /// The activating event must not bubble further
    pub stop_propagation: bool,
}

/// Pure state for the search form
#[derive(Debug, Clone)]
pub struct SearchFormModel {
    config: SearchFormConfig,
    input: String,
    is_empty: bool,
}

impl SearchFormModel {
    /// Create a model from its configuration
    pub fn new(config: SearchFormConfig) -> Self {
        let input = config.value.clone().unwrap_or_default();
        Self {
            config,
            input,
            is_empty: true,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &SearchFormConfig {
        &self.config
    }

    /// The visual empty state
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Handle a change event: store the raw value and recompute the empty
    /// state wholesale. Returns the raw (untrimmed) value for the caller's
    /// change callback.
    pub fn input_changed(&mut self, raw: &str) -> &str {
        self.input = raw.to_string();
        self.is_empty = is_blank(raw);
        &self.input
    }

    /// Handle a clear activation: reset the buffer and the empty state. The
    /// caller invokes its change callback with the empty string exactly once.
    pub fn clear(&mut self) -> ClearOutcome {
        self.input.clear();
        self.is_empty = true;
        ClearOutcome {
            stop_propagation: self.config.should_prevent_clear_event_propagation,
        }
    }

    /// Synchronize with the externally controlled value.
    ///
    /// A present, non-blank value forces the empty state on. This mirrors the
    /// long-standing upstream rule verbatim (see DESIGN.md); it governs only
    /// the visual empty state, not the rendered value.
    pub fn sync_controlled_value(&mut self, value: Option<&str>) {
        self.config.value = value.map(str::to_string);
        if let Some(v) = value {
            self.input = v.to_string();
            if !is_blank(v) {
                self.is_empty = true;
            }
        }
    }

    /// The raw value the submit callback receives
    pub fn submit_value(&self) -> &str {
        &self.input
    }

    /// One hidden field per extra query parameter, in insertion order
    pub fn hidden_fields(&self) -> Vec<HiddenField> {
        self.config
            .query_params
            .iter()
            .map(|(name, value)| HiddenField {
                name: name.clone(),
                value: value.clone(),
            })
            .collect()
    }

    /// Build the default-submission payload
    pub fn submission(&self) -> SearchSubmission {
        let mut fields = vec![(self.config.name.clone(), self.input.clone())];
        fields.extend(
            self.config
                .query_params
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        SearchSubmission {
            action: self.config.action.clone(),
            method: self.config.method,
            fields,
        }
    }
}

impl Default for SearchFormModel {
    fn default() -> Self {
        Self::new(SearchFormConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_params(pairs: &[(&str, &str)]) -> SearchFormConfig {
        let mut config = SearchFormConfig::default();
        for (k, v) in pairs {
            config.query_params.insert(k.to_string(), v.to_string());
        }
        config
    }

    #[test]
    fn test_defaults() {
        let config = SearchFormConfig::default();
        assert_eq!(config.action, "");
        assert_eq!(config.method, SubmitMethod::Get);
        assert_eq!(config.name, "search");
        assert!(config.query_params.is_empty());
        assert!(!config.use_clear_button);
        assert!(!config.should_prevent_clear_event_propagation);
    }

    #[test]
    fn test_starts_empty() {
        assert!(SearchFormModel::default().is_empty());
    }

    #[test]
    fn test_empty_state_tracks_trimmed_content() {
        let mut model = SearchFormModel::default();
        for (raw, expected_empty) in [
            ("a", false),
            ("", true),
            ("   ", true),
            ("  hello  ", false),
            ("\t", true),
            ("hello world", false),
        ] {
            model.input_changed(raw);
            assert_eq!(model.is_empty(), expected_empty, "for input {raw:?}");
        }
    }

    #[test]
    fn test_change_returns_raw_untrimmed_value() {
        let mut model = SearchFormModel::default();
        assert_eq!(model.input_changed("  padded  "), "  padded  ");
        assert_eq!(model.submit_value(), "  padded  ");
    }

    #[test]
    fn test_clear_resets_buffer_and_state() {
        let mut model = SearchFormModel::default();
        model.input_changed("query");
        assert!(!model.is_empty());

        let outcome = model.clear();
        assert!(model.is_empty());
        assert_eq!(model.submit_value(), "");
        assert!(!outcome.stop_propagation);
    }

    #[test]
    fn test_clear_propagation_flag() {
        let config = SearchFormConfig {
            should_prevent_clear_event_propagation: true,
            ..Default::default()
        };
        let mut model = SearchFormModel::new(config);
        model.input_changed("query");
        assert!(model.clear().stop_propagation);
    }

    #[test]
    fn test_controlled_value_forces_empty_state() {
        // Non-blank controlled value forces the empty visual state on, as
        // upstream does.
        let mut model = SearchFormModel::default();
        model.input_changed("typed");
        assert!(!model.is_empty());

        model.sync_controlled_value(Some("external"));
        assert!(model.is_empty());
        assert_eq!(model.submit_value(), "external");
    }

    #[test]
    fn test_blank_controlled_value_leaves_state_untouched() {
        let mut model = SearchFormModel::default();
        model.input_changed("typed");
        assert!(!model.is_empty());

        model.sync_controlled_value(Some("   "));
        assert!(!model.is_empty());

        model.sync_controlled_value(None);
        assert!(!model.is_empty());
    }

    #[test]
    fn test_hidden_fields_one_per_param() {
        let model = SearchFormModel::new(with_params(&[("a", "1"), ("b", "2")]));
        let fields = model.hidden_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields,
            vec![
                HiddenField {
                    name: "a".to_string(),
                    value: "1".to_string()
                },
                HiddenField {
                    name: "b".to_string(),
                    value: "2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_submission_payload() {
        let mut config = with_params(&[("folder", "42")]);
        config.action = "/search".to_string();
        config.method = SubmitMethod::Post;
        let mut model = SearchFormModel::new(config);
        model.input_changed("contract");

        let submission = model.submission();
        assert_eq!(submission.action, "/search");
        assert_eq!(submission.method, SubmitMethod::Post);
        assert_eq!(
            submission.fields,
            vec![
                ("search".to_string(), "contract".to_string()),
                ("folder".to_string(), "42".to_string()),
            ]
        );
    }

    #[test]
    fn test_submit_method_display() {
        assert_eq!(SubmitMethod::Get.to_string(), "get");
        assert_eq!(SubmitMethod::Post.to_string(), "post");
    }
}
