//! SearchForm Component
//!
//! A search input with optional submit/clear actions, hidden query-parameter
//! fields, and a loadable action area.

pub mod model;
pub mod search_form;

pub use model::{
    ClearOutcome, HiddenField, SearchFormConfig, SearchFormModel, SearchSubmission, SubmitMethod,
};
pub use search_form::SearchForm;
