//! SwipeKit - swipe gesture classifier
//!
//! Reads one JSON gesture summary per line from stdin and writes the
//! classification for each as a JSON line on stdout.

use anyhow::Context;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use swipekit::input::{GestureState, SwipeDirection};
use swipekit::storage::config::{get_config_path, load_config_from};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the config file location.
const CONFIG_ENV: &str = "SWIPEKIT_CONFIG";

#[derive(Debug, Serialize)]
struct Classification {
    click: bool,
    direction: Option<SwipeDirection>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting SwipeKit v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);
    let config = load_config_from(&path)
        .and_then(|c| c.swipe_config())
        .with_context(|| format!("loading config from {}", path.display()))?;
    tracing::debug!(?config, "Using swipe config");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let state: GestureState = match serde_json::from_str(&line) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Skipping line {}: {}", index + 1, e);
                continue;
            }
        };

        let result = Classification {
            click: state.is_click(&config),
            direction: state.classify(&config),
        };
        serde_json::to_writer(&mut stdout, &result)?;
        writeln!(stdout)?;
    }

    stdout.flush()?;
    Ok(())
}
