//! Load state for a dashboard view and the task that fills it.

use std::fmt::Display;
use std::future::Future;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// What a view has to show: still loading, failed, or the data.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    /// Human-readable reason; the view renders a generic failure with it.
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Loaded or failed; the state will not change again.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(reason) => LoadState::Failed(reason),
            LoadState::Ready(value) => LoadState::Ready(f(value)),
        }
    }
}

/// A fetch running on behalf of one view.
///
/// The result is published through a watch channel. Dropping the loader
/// stands for the view being torn down: the task is aborted and a result
/// that arrives late is never published.
pub struct ViewLoader<T> {
    state: watch::Receiver<LoadState<T>>,
    task: JoinHandle<()>,
}

impl<T> ViewLoader<T>
where
    T: Send + Sync + 'static,
{
    /// Spawns `fetch` on the current tokio runtime.
    pub fn spawn<F, E>(label: &'static str, fetch: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let task = tokio::spawn(async move {
            let result = fetch.await;
            if let Err(e) = &result {
                tracing::error!("Failed to load {}: {}", label, e);
            }
            if tx.send(LoadState::from_result(result)).is_err() {
                tracing::debug!("{} view is gone, discarding result", label);
            }
        });
        Self { state: rx, task }
    }

    /// The state as of now.
    pub fn state(&self) -> watch::Ref<'_, LoadState<T>> {
        self.state.borrow()
    }

    /// Waits until the load finishes or fails.
    pub async fn wait(&mut self) -> LoadState<T>
    where
        T: Clone,
    {
        match self.state.wait_for(LoadState::is_terminal).await {
            Ok(state) => state.clone(),
            Err(_) => LoadState::Failed("load task ended without a result".to_string()),
        }
    }
}

impl<T> Drop for ViewLoader<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}
