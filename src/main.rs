//! tabletalk - voice-driven Gomoku and furniture placement
//!
//! Polls the command files written by a speech front-end and applies them to
//! an in-memory game session or furniture scene.

mod app;
mod config;
mod dispatch;
mod journal;
mod protocol;
mod watcher;

use anyhow::{Context, Result};
use app::App;
use config::AppConfig;
use dispatch::Effect;
use journal::StatusJournal;
use protocol::Mode;
use std::{env, path::PathBuf};
use tracing::info;
use watcher::{FileWatcher, Source};

fn main() -> Result<()> {
    // INFO by default; override with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting tabletalk v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    cli.apply_overrides(&mut config);

    let journal = match cli.status_log.as_deref() {
        Some(path) => Some(
            StatusJournal::open(path)
                .with_context(|| format!("failed to open status log {}", path.display()))?,
        ),
        None => None,
    };

    let watchers = vec![
        FileWatcher::new(Source::Mode, config.watch.mode_path()),
        FileWatcher::new(Source::Gomoku, config.watch.gomoku_path()),
        FileWatcher::new(Source::Furniture, config.watch.furniture_path()),
    ];
    let handle = watcher::spawn(watchers, config.watch.poll_interval(), cli.max_polls);

    let mut app = App::new(config, cli.mode.unwrap_or(Mode::Gomoku), journal);
    let effect = app.run(&handle.rx);
    handle.stop();

    match effect {
        Effect::Quit => info!("Quit requested; exiting"),
        Effect::Continue => info!("Polling finished; exiting"),
    }
    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    config: Option<PathBuf>,
    watch_dir: Option<PathBuf>,
    mode: Option<Mode>,
    status_log: Option<PathBuf>,
    poll_interval_ms: Option<u64>,
    opponent: Option<String>,
    max_polls: Option<u64>,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--config requires a file path");
                    }
                }
                "--watch-dir" => {
                    if let Some(path) = args.next() {
                        opts.watch_dir = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--watch-dir requires a directory path");
                    }
                }
                "--mode" => {
                    if let Some(raw) = args.next() {
                        match Mode::parse(&raw) {
                            Some(mode) => opts.mode = Some(mode),
                            None => {
                                tracing::error!(value = %raw, "--mode must be gomoku or furniture");
                            }
                        }
                    } else {
                        tracing::error!("--mode requires gomoku or furniture");
                    }
                }
                "--status-log" => {
                    if let Some(path) = args.next() {
                        opts.status_log = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--status-log requires a file path");
                    }
                }
                "--poll-interval-ms" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.poll_interval_ms = Some(value.max(1)),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--poll-interval-ms must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--poll-interval-ms requires an integer");
                    }
                }
                "--opponent" => {
                    if let Some(color) = args.next() {
                        opts.opponent = Some(color);
                    } else {
                        tracing::error!("--opponent requires black or white");
                    }
                }
                "--max-polls" => {
                    if let Some(raw) = args.next() {
                        match raw.parse::<u64>() {
                            Ok(value) => opts.max_polls = Some(value),
                            Err(err) => {
                                tracing::error!(%err, value = %raw, "--max-polls must be an integer");
                            }
                        }
                    } else {
                        tracing::error!("--max-polls requires an integer");
                    }
                }
                other => tracing::warn!(arg = other, "Ignoring unknown argument"),
            }
        }

        opts
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.watch_dir {
            config.watch.dir = dir.clone();
        }
        if let Some(ms) = self.poll_interval_ms {
            config.watch.poll_interval_ms = ms;
        }
        if let Some(color) = &self.opponent {
            config.gomoku.opponent = Some(color.clone());
        }
    }
}
