mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, Theme, window};

/// Open the showcase window and hand control to iced.
pub fn run_app(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Sitedeck", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_app: &App| Theme::Light)
        .run_with(move || App::bootstrap(config))
}
