// SPDX-License-Identifier: MPL-2.0
use iced_kit::app::{self, Flags};
use iced_kit::config;

fn main() -> iced::Result {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .with_colors(true)
        .with_local_timestamps()
        .init()
    {
        eprintln!("Failed to initialize logger: {err}");
    }

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("Ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("Ignoring --config-dir: {err}");
        None
    });

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    // Read by `config::load` through the path resolver.
    config::paths::init_cli_override(config_dir);

    app::run(Flags { lang })
}
