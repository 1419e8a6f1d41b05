//! Docpane Component Library
//!
//! This crate provides reusable GPUI components for content applications: a
//! search form with a loadable action area, and a content-preview header
//! with conditionally composed logo/file-info, content-answers, and print
//! controls.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod theme;
