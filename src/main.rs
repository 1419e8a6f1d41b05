//! Docpane - Demo Entry Point
//!
//! Opens a window exercising the search-form and preview-header components.

use docpane::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting docpane demo...");

    // Run the GPUI application
    run_app();
}
