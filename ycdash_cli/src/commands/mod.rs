//! CLI subcommand implementations.

pub mod companies;
pub mod meta;
pub mod overview;
pub mod region;
pub mod snapshot;

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ycdash_lib::{LoadState, ViewLoader};

/// Runs `fetch` behind a spinner and returns its data.
///
/// A failed load prints a generic message; the underlying error has already
/// been logged by the loader.
pub async fn load<T, F, E>(label: &'static str, fetch: F) -> Result<T>
where
    T: Clone + Send + Sync + 'static,
    F: Future<Output = Result<T, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading {}...", label));
    pb.enable_steady_tick(Duration::from_millis(100));

    let mut loader = ViewLoader::spawn(label, fetch);
    let state = loader.wait().await;
    pb.finish_and_clear();

    match state {
        LoadState::Ready(data) => Ok(data),
        LoadState::Failed(_) | LoadState::Loading => {
            eprintln!("Failed to load {}. Showing no data.", label);
            bail!("{} failed to load", label)
        }
    }
}
