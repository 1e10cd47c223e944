//! navi-gestures - offline driver for the mouse gesture recognizer

use navi_gestures::cli::{Cli, Commands};
use navi_gestures::commands::{self, defaults, matching, replay};
use navi_gestures::settings::SettingsStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Reports go to stdout, so logs stay on stderr
    let default_filter = if cli.verbose { "navi_gestures=debug" } else { "navi_gestures=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting navi-gestures v{}", env!("CARGO_PKG_VERSION"));

    let settings = match &cli.settings {
        Some(path) => SettingsStore::load(path)?,
        None => SettingsStore::default(),
    };

    let stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Replay {
            input,
            output,
            max_distance,
        } => {
            let report = replay::replay_file(&input, output.as_deref(), &settings, max_distance)?;
            if output.is_none() {
                commands::write_json(stdout, &report)?;
            }
        }
        Commands::Match { directions } => {
            let path = matching::parse_directions(&directions)?;
            let report = matching::match_directions(&path, &settings.snapshot());
            commands::write_json(stdout, &report)?;
        }
        Commands::Defaults { write } => {
            let document = defaults::default_settings(write.as_deref())?;
            commands::write_json(stdout, &document)?;
        }
    }

    Ok(())
}
