//! Reply notifications
//!
//! Every subscriber of a page except the comment's author gets a
//! notification carrying a personal unsubscribe link. Delivery is left to
//! whatever mailer consumes these.

use std::fmt;

use axum::http::StatusCode;

use crate::backend::comments::db::Comment;
use crate::backend::error::BackendError;
use crate::backend::pages::db::list_subscribers;
use crate::backend::server::state::AppState;

/// A notification owed to one subscriber
///
/// `unsubscribe_url` carries a token that is enough to drop the subscription,
/// so neither `Display` nor `Debug` prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct Notification {
    pub user_id: i64,
    pub page_id: i64,
    pub unsubscribe_url: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification for user {} on page {}", self.user_id, self.page_id)
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("user_id", &self.user_id)
            .field("page_id", &self.page_id)
            .finish_non_exhaustive()
    }
}

/// Notifications caused by `comment`, one per other subscriber of its page
pub async fn pending_notifications(
    app_state: &AppState,
    comment: &Comment,
) -> Result<Vec<Notification>, BackendError> {
    let public_url = app_state.config.public_url();
    let subscribers = list_subscribers(&app_state.db_pool, comment.page_id).await?;

    let mut notifications = Vec::with_capacity(subscribers.len());
    for user_id in subscribers.into_iter().filter(|id| *id != comment.user_id) {
        let unsubscribe_url = app_state
            .unsubscribe
            .unsubscribe_link(&public_url, user_id, comment.page_id)
            .map_err(|e| {
                tracing::error!("Failed to sign unsubscribe link: {:?}", e);
                BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Failed to sign unsubscribe link")
            })?;
        notifications.push(Notification {
            user_id,
            page_id: comment.page_id,
            unsubscribe_url,
        });
    }

    Ok(notifications)
}
