// SPDX-License-Identifier: GPL-3.0-only

use app::Abs;
use clap::Parser;
use i18n_embed::unic_langid::LanguageIdentifier;
use iced::{Size, window::Settings};
use tracing_subscriber::EnvFilter;

use abs_core::{config::AppConfig, routes::Route};

mod abs;
mod app;
mod i18n;

const DEFAULT_LOG_FILTER: &str = "abs=info,abs_core=info";

/// Guest front-end of the advanced booking system
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Page to open, e.g. `/booking/ABS123` or `/order`
    #[arg(long, default_value = "/")]
    route: String,

    /// Interface language (overrides ABS_LOCALE and the desktop languages)
    #[arg(long)]
    locale: Option<String>,

    /// Run the content backend migrations on startup
    #[arg(long)]
    migrate: bool,
}

fn main() -> Result<(), iced::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    let locale_overridden = cli.locale.is_some() || std::env::var("ABS_LOCALE").is_ok();
    if let Some(locale) = &cli.locale {
        config.set_locale(locale);
    }

    // An explicit locale wins over the system's preferred languages.
    let requested_languages = if locale_overridden {
        match config.locale.parse::<LanguageIdentifier>() {
            Ok(language) => vec![language],
            Err(err) => {
                tracing::warn!("invalid locale {}: {err}", config.locale);
                i18n_embed::DesktopLanguageRequester::requested_languages()
            }
        }
    } else {
        i18n_embed::DesktopLanguageRequester::requested_languages()
    };

    // Enable localizations to be applied.
    i18n::init(&requested_languages);
    if !locale_overridden {
        config.locale = i18n::current_language();
    }

    let route = Route::parse(&cli.route);
    tracing::info!("starting on {route} ({})", config.locale);

    iced::application(Abs::title, Abs::update, Abs::view)
        .theme(Abs::theme)
        .subscription(Abs::subscription)
        .window(Settings {
            position: iced::window::Position::Centered,
            resizable: true,
            min_size: Some(Size::new(1000., 700.)),
            ..Default::default()
        })
        .window_size(Size::new(1280., 820.))
        .run_with(move || Abs::new(config, route, cli.migrate))
}
