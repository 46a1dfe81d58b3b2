//! Optimistic notification feed.
//!
//! The unread list must react instantly to "mark as read", so the item
//! leaves the local working set before the server hears about it. A
//! failed acknowledgement is corrected by one full resync against the
//! server's truth, never by reinserting the single item.

use std::sync::{Arc, Mutex};

use tracing::warn;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::NotificationItem;

/// How an acknowledgement settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckOutcome {
    /// The server confirmed; local state was already correct.
    Confirmed,
    /// The server call failed and the working set was replaced by a
    /// fresh fetch.
    Resynced,
}

/// Local working set of unread notifications.
///
/// Acknowledged items are removed, not marked; the client never keeps
/// read notifications. Clone handles share the working set.
#[derive(Clone)]
pub struct NotificationFeed {
    api: Arc<ApiClient>,
    items: Arc<Mutex<Vec<NotificationItem>>>,
}

impl NotificationFeed {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Current working set.
    pub fn items(&self) -> Vec<NotificationItem> {
        self.items.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().unwrap().is_empty()
    }

    /// Replace the working set with the server's current truth.
    ///
    /// This is both the screen's fetch and the reconciliation step
    /// after a failed acknowledgement.
    pub async fn resync(&self) -> Result<(), ApiError> {
        let fresh = self.api.my_unread().await?;
        *self.items.lock().unwrap() = fresh;
        Ok(())
    }

    /// Unread badge count from the server.
    pub async fn unread_count(&self) -> Result<u64, ApiError> {
        self.api.my_unread_count().await
    }

    /// Acknowledge one notification.
    ///
    /// The item leaves the working set immediately, whatever the server
    /// ends up saying. A failed server call triggers one full resync;
    /// the missing-session precondition propagates so the screen can
    /// redirect to login.
    pub async fn acknowledge(&self, id: i64) -> Result<AckOutcome, ApiError> {
        self.items.lock().unwrap().retain(|n| n.id != id);

        match self.api.mark_read(id).await {
            Ok(()) => Ok(AckOutcome::Confirmed),
            Err(err) if err.requires_login() => Err(err),
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    id, "mark-read failed, resyncing unread set: {err}"
                );
                self.resync().await?;
                Ok(AckOutcome::Resynced)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    use crate::adapters::mock::{InMemoryCredentialStore, MockHttpClient, MockResponse};
    use crate::auth::{Session, UserProfile};
    use crate::traits::Response;

    const BASE: &str = "http://10.0.0.5:8080/api";

    fn feed_with(http: &MockHttpClient) -> NotificationFeed {
        let store = InMemoryCredentialStore::with_session(Session::new(
            "t1",
            UserProfile {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@x.com".to_string(),
            },
        ));
        let api = ApiClient::with_base_url(BASE, Arc::new(http.clone()), Arc::new(store));
        NotificationFeed::new(Arc::new(api))
    }

    fn unread_body(ids: &[i64]) -> Bytes {
        let items: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "title": format!("Analiz {id} hazır"),
                    "message": "Sonuçları görüntüleyin."
                })
            })
            .collect();
        Bytes::from(serde_json::to_vec(&items).unwrap())
    }

    fn script_unread(http: &MockHttpClient, ids: &[i64]) {
        http.set_response(
            &format!("{BASE}/notifications/my-unread"),
            MockResponse::Success(Response::new(200, unread_body(ids))),
        );
    }

    #[tokio::test]
    async fn resync_replaces_the_working_set_wholesale() {
        let http = MockHttpClient::new();
        script_unread(&http, &[1, 2, 3]);
        let feed = feed_with(&http);

        feed.resync().await.unwrap();
        assert_eq!(feed.len(), 3);

        script_unread(&http, &[7]);
        feed.resync().await.unwrap();

        let items = feed.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
    }

    #[tokio::test]
    async fn acknowledge_removes_immediately_and_confirms() {
        let http = MockHttpClient::new();
        script_unread(&http, &[1, 2, 3]);
        http.set_response(
            &format!("{BASE}/notifications/mark-read/2"),
            MockResponse::Success(Response::new(200, Bytes::new())),
        );
        let feed = feed_with(&http);
        feed.resync().await.unwrap();

        let outcome = feed.acknowledge(2).await.unwrap();

        assert_eq!(outcome, AckOutcome::Confirmed);
        assert!(feed.items().iter().all(|n| n.id != 2));
        assert_eq!(feed.len(), 2);
    }

    #[tokio::test]
    async fn failed_acknowledge_resyncs_with_server_truth() {
        let http = MockHttpClient::new();
        script_unread(&http, &[1, 2, 3]);
        http.set_response(
            &format!("{BASE}/notifications/mark-read/2"),
            MockResponse::Success(Response::new(500, Bytes::from("Sunucu hatası"))),
        );
        let feed = feed_with(&http);
        feed.resync().await.unwrap();

        // The server still considers 2 unread; the resync restores it.
        script_unread(&http, &[1, 2, 3]);

        let outcome = feed.acknowledge(2).await.unwrap();

        assert_eq!(outcome, AckOutcome::Resynced);
        assert!(feed.items().iter().any(|n| n.id == 2));
        assert_eq!(feed.len(), 3);
    }

    #[tokio::test]
    async fn failed_acknowledge_accepts_server_side_removal_too() {
        let http = MockHttpClient::new();
        script_unread(&http, &[1, 2]);
        http.set_response(
            &format!("{BASE}/notifications/mark-read/2"),
            MockResponse::Success(Response::new(500, Bytes::new())),
        );
        let feed = feed_with(&http);
        feed.resync().await.unwrap();

        // The server already processed the read despite the error reply.
        script_unread(&http, &[1]);

        let outcome = feed.acknowledge(2).await.unwrap();

        assert_eq!(outcome, AckOutcome::Resynced);
        assert_eq!(feed.len(), 1);
        assert!(feed.items().iter().all(|n| n.id != 2));
    }

    #[tokio::test]
    async fn acknowledge_without_session_propagates_after_local_removal() {
        let http = MockHttpClient::new();
        let store = InMemoryCredentialStore::new();
        let api = ApiClient::with_base_url(BASE, Arc::new(http.clone()), Arc::new(store.clone()));
        let feed = NotificationFeed::new(Arc::new(api));

        // Seed the working set while signed in, then sign out.
        store.set_session(Some(Session::new(
            "t1",
            UserProfile {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@x.com".to_string(),
            },
        )));
        script_unread(&http, &[1, 2]);
        feed.resync().await.unwrap();
        store.set_session(None);
        http.clear_requests();

        let result = feed.acknowledge(2).await;

        assert!(matches!(result, Err(ApiError::AuthMissing)));
        // The optimistic removal already happened.
        assert_eq!(feed.len(), 1);
        // And no network traffic was attempted.
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn badge_count_comes_from_the_count_endpoint() {
        let http = MockHttpClient::new();
        http.set_response(
            &format!("{BASE}/notifications/my-unread-count"),
            MockResponse::Success(Response::new(200, Bytes::from("3"))),
        );
        let feed = feed_with(&http);

        assert_eq!(feed.unread_count().await.unwrap(), 3);
    }
}
