#![windows_subsystem = "windows"]

mod app;
mod clipboard;
mod codec;
mod config;
mod i18n;
mod state;
mod ui;

use iced::window;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env();

    iced::application(
        move || app::App::new(&config),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .window(window::Settings {
        size: config::WINDOW_SIZE.into(),
        min_size: Some(config::MIN_WINDOW_SIZE.into()),
        ..window::Settings::default()
    })
    .run()
}
