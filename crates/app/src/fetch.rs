//! Guarded remote fetching.
//!
//! A screen reads one or more collections concurrently and renders only once
//! every read has succeeded. [`Remote`] holds the outcome of that join and
//! refuses to apply it after the owning screen was unmounted.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pgdesk_domain::error::BackendError;

use crate::ports::{Backend, Resource};

/// Outcome of a remote read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Request issued, no answer yet.
    Pending,
    /// Every request succeeded.
    Success(T),
    /// At least one request failed; carries a human-readable reason.
    Failure(String),
}

impl<T> FetchState<T> {
    /// The fetched value, if the read succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if the read failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failure(reason) => Some(reason),
            _ => None,
        }
    }

    /// Whether no outcome has been applied yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Shared flag telling in-flight reads whether their consumer still exists.
///
/// Clones observe the same flag; once [`unmount`](Self::unmount) is called
/// every holder sees the consumer as gone.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountGuard {
    /// A guard for a freshly mounted consumer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal that the consumer has been torn down.
    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Whether results may still be applied.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Remote state owned by a single consumer.
#[derive(Debug)]
pub struct Remote<T> {
    state: FetchState<T>,
    guard: MountGuard,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Pending,
            guard: MountGuard::new(),
        }
    }
}

impl<T> Remote<T> {
    /// Start out pending and mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// A handle that can unmount this consumer from elsewhere.
    #[must_use]
    pub fn guard(&self) -> MountGuard {
        self.guard.clone()
    }

    /// Forget any applied outcome.
    pub fn reset(&mut self) {
        self.state = FetchState::Pending;
    }

    /// Await `request` and apply its outcome unless the consumer was
    /// unmounted meanwhile, in which case the current state is kept.
    /// Failures are rendered through `describe`.
    ///
    /// Returns `true` when the outcome was applied.
    pub async fn run<F, D>(&mut self, request: F, describe: D) -> bool
    where
        F: Future<Output = Result<T, BackendError>>,
        D: FnOnce(&BackendError) -> String,
    {
        let outcome = request.await;
        if !self.guard.is_mounted() {
            tracing::debug!("consumer unmounted, discarding late response");
            return false;
        }
        self.state = match outcome {
            Ok(value) => FetchState::Success(value),
            Err(err) => {
                tracing::warn!(error = %err, "remote fetch failed");
                FetchState::Failure(describe(&err))
            }
        };
        true
    }

    /// Take the applied outcome, leaving the remote pending.
    pub fn take(&mut self) -> FetchState<T> {
        std::mem::replace(&mut self.state, FetchState::Pending)
    }
}

/// Failure text shown when loading a screen's collections fails.
#[must_use]
pub fn describe_load_failure(err: &BackendError) -> String {
    match err {
        BackendError::Status { status, detail } => match detail {
            Some(detail) if !detail.is_empty() => detail.clone(),
            _ => format!("HTTP {status}"),
        },
        BackendError::Transport(_) => "Failed to fetch data".to_string(),
        BackendError::Decode(_) => "Unexpected response from the server".to_string(),
    }
}

/// Read one collection.
///
/// # Errors
///
/// Returns the backend error of the read.
pub async fn one<B, R1>(backend: &B) -> Result<Vec<R1>, BackendError>
where
    B: Backend,
    R1: Resource,
{
    backend.list::<R1>().await
}

/// Read two collections concurrently; fails if either read fails.
///
/// # Errors
///
/// Returns the first backend error observed.
pub async fn join2<B, R1, R2>(backend: &B) -> Result<(Vec<R1>, Vec<R2>), BackendError>
where
    B: Backend,
    R1: Resource,
    R2: Resource,
{
    tokio::try_join!(backend.list::<R1>(), backend.list::<R2>())
}

/// Read three collections concurrently; fails if any read fails.
///
/// # Errors
///
/// Returns the first backend error observed.
pub async fn join3<B, R1, R2, R3>(
    backend: &B,
) -> Result<(Vec<R1>, Vec<R2>, Vec<R3>), BackendError>
where
    B: Backend,
    R1: Resource,
    R2: Resource,
    R3: Resource,
{
    tokio::try_join!(
        backend.list::<R1>(),
        backend.list::<R2>(),
        backend.list::<R3>()
    )
}

/// Read four collections concurrently; fails if any read fails.
///
/// # Errors
///
/// Returns the first backend error observed.
pub async fn join4<B, R1, R2, R3, R4>(
    backend: &B,
) -> Result<(Vec<R1>, Vec<R2>, Vec<R3>, Vec<R4>), BackendError>
where
    B: Backend,
    R1: Resource,
    R2: Resource,
    R3: Resource,
    R4: Resource,
{
    tokio::try_join!(
        backend.list::<R1>(),
        backend.list::<R2>(),
        backend.list::<R3>(),
        backend.list::<R4>()
    )
}
