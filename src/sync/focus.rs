//! Focus-triggered refetch policy.
//!
//! Every data-bearing screen re-runs its fetch when it becomes the
//! active screen, not only on first mount. [`FocusSync`] owns the
//! screen's data slot and applies the policy: loading flag up, fetch,
//! flag down on every path.
//!
//! Overlapping activations are not deduplicated or cancelled; both
//! fetches proceed and the last completion wins the data slot. The
//! loading flag is a plain boolean with the same last-write behavior.

use std::future::Future;
use std::sync::{Arc, Mutex};

use crate::error::ApiError;

/// Snapshot of a screen's data slot.
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    /// Last successfully fetched value, retained across failed fetches.
    pub data: Option<T>,
    /// Whether a fetch is in flight (last-write, see module docs).
    pub loading: bool,
    /// User-facing message of the last failed fetch, cleared when a new
    /// activation starts.
    pub error: Option<String>,
    /// Set when a fetch hit the missing-session precondition; the
    /// screen layer answers this by navigating to login.
    pub needs_login: bool,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            needs_login: false,
        }
    }
}

/// Refetch-on-activate controller for one screen's data.
///
/// Clone handles share the same slot; the screen holds one, spawned
/// activations hold another.
#[derive(Debug, Default)]
pub struct FocusSync<T> {
    state: Arc<Mutex<ViewState<T>>>,
}

impl<T> Clone for FocusSync<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T: Clone + Send + 'static> FocusSync<T> {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState::default())),
        }
    }

    /// Current state of the slot.
    pub fn snapshot(&self) -> ViewState<T> {
        self.state.lock().unwrap().clone()
    }

    /// Run one activation: raise the loading flag, run the fetch, store
    /// the outcome, and clear the flag whatever happened.
    pub async fn activate<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.error = None;
        }

        let result = fetch().await;

        let mut state = self.state.lock().unwrap();
        match result {
            Ok(data) => {
                state.data = Some(data);
            }
            Err(err) if err.requires_login() => {
                state.needs_login = true;
            }
            Err(err) => {
                state.error = Some(err.user_message());
            }
        }
        state.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn activation_loads_data_and_clears_loading() {
        let sync: FocusSync<u64> = FocusSync::new();

        sync.activate(|| async { Ok(3) }).await;

        let state = sync.snapshot();
        assert_eq!(state.data, Some(3));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(!state.needs_login);
    }

    #[tokio::test]
    async fn loading_flag_is_raised_while_fetch_is_in_flight() {
        let sync: FocusSync<u64> = FocusSync::new();
        let (release_tx, release_rx) = oneshot::channel::<()>();

        let worker = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.activate(|| async {
                    release_rx.await.ok();
                    Ok(7)
                })
                .await;
            })
        };

        // Give the activation a chance to raise the flag.
        tokio::task::yield_now().await;
        assert!(sync.snapshot().loading);

        release_tx.send(()).unwrap();
        worker.await.unwrap();

        let state = sync.snapshot();
        assert!(!state.loading);
        assert_eq!(state.data, Some(7));
    }

    #[tokio::test]
    async fn failed_fetch_clears_loading_and_keeps_stale_data() {
        let sync: FocusSync<u64> = FocusSync::new();
        sync.activate(|| async { Ok(3) }).await;

        sync.activate(|| async { Err(ApiError::Timeout("30s".into())) })
            .await;

        let state = sync.snapshot();
        assert!(!state.loading);
        assert_eq!(state.data, Some(3));
        assert!(state.error.is_some());
    }

    #[tokio::test]
    async fn auth_missing_requests_the_login_screen() {
        let sync: FocusSync<u64> = FocusSync::new();

        sync.activate(|| async { Err(ApiError::AuthMissing) }).await;

        let state = sync.snapshot();
        assert!(state.needs_login);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn overlapping_activations_last_completion_wins() {
        let sync: FocusSync<&'static str> = FocusSync::new();
        let (tx_first, rx_first) = oneshot::channel::<()>();
        let (tx_second, rx_second) = oneshot::channel::<()>();

        let first = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.activate(|| async {
                    rx_first.await.ok();
                    Ok("first activation")
                })
                .await;
            })
        };
        let second = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.activate(|| async {
                    rx_second.await.ok();
                    Ok("second activation")
                })
                .await;
            })
        };

        tokio::task::yield_now().await;

        // The second activation resolves first; the first resolves last
        // and overwrites it.
        tx_second.send(()).unwrap();
        second.await.unwrap();
        assert_eq!(sync.snapshot().data, Some("second activation"));

        tx_first.send(()).unwrap();
        first.await.unwrap();
        assert_eq!(sync.snapshot().data, Some("first activation"));
    }
}
