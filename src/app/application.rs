//! Application - App Initialization and Window Management
//!
//! Entry point for the demo GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions, actions,
    px,
};

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::i18n::{Locale, Translator};

actions!(docpane, [Quit]);

/// Run the docpane demo application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let translator = Translator::new(Locale::detect());
        let title = translator.msg("app.title");

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(960.0), px(640.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                ..Default::default()
            }),
            ..Default::default()
        };

        cx.open_window(window_options, move |_window, cx| {
            cx.new(|cx| Workspace::new(translator, cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}
