mod messages;
mod state;
mod update;
mod view;

pub use state::{App, AppStore};

use crate::config::{AppConfig, ThemeMode};
use iced::{Size, Theme, window};
use library_core::Controller;

/// Launch the window around an already-opened library.
///
/// `startup_notice` is shown above the table on the first frame, e.g. when
/// the store could not be opened and changes will not be saved.
pub fn run_app(
    config: AppConfig,
    controller: Controller<AppStore>,
    startup_notice: Option<String>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Book Library", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| match app.config.theme {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        })
        .run_with(move || App::bootstrap(config, controller, startup_notice))
}
