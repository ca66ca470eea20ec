pub mod state;

use chrono::{DateTime, Utc};

use crate::api::{ApiResponse, JobApi};
use crate::notify::Notifier;
use crate::posting::JobPosting;
use crate::session::Session;
use crate::store::{self, KeyValueStore};

pub use state::FeedState;

const ALERT_TITLE: &str = "Error";
const MISSING_TOKEN_MESSAGE: &str = "You are not logged in. Run `planup login` first.";
const FETCH_FAILED_MESSAGE: &str = "Failed to load job postings.";

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("no authentication token")]
    AuthenticationMissing,
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("server responded with HTTP {status}")]
    FetchFailed { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

type Subscriber<'a> = Box<dyn FnMut(&FeedState) + 'a>;

/// Owns the job feed of one screen: fetches, filters, sorts and pages the
/// user's postings and tells subscribers whenever the snapshot changes.
///
/// Every operation takes `&mut self`, so refreshes on one controller never
/// overlap.
pub struct JobFeedController<'a> {
    session: &'a Session,
    api: &'a dyn JobApi,
    notifier: &'a dyn Notifier,
    state: FeedState,
    subscribers: Vec<(SubscriptionId, Subscriber<'a>)>,
    next_subscription: usize,
}

impl<'a> JobFeedController<'a> {
    pub fn new(session: &'a Session, api: &'a dyn JobApi, notifier: &'a dyn Notifier) -> Self {
        Self {
            session,
            api,
            notifier,
            state: FeedState::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&FeedState) + 'a) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn publish(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
    }

    /// Fetches `user_id`'s postings and keeps those due after `now`.
    ///
    /// On failure the previous snapshot stays in place and one alert is raised.
    pub fn refresh(
        &mut self,
        user_id: &str,
        auth_token: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), FeedError> {
        let result = self.fetch(user_id, auth_token);
        let postings = match result {
            Ok(postings) => postings,
            Err(e) => {
                tracing::error!("error fetching job postings: {e}");
                let message = match e {
                    FeedError::AuthenticationMissing => MISSING_TOKEN_MESSAGE,
                    _ => FETCH_FAILED_MESSAGE,
                };
                self.notifier.alert(ALERT_TITLE, message);
                return Err(e);
            }
        };

        let received = postings.len();
        self.state.apply_fetch(postings, now);
        tracing::info!(
            received,
            upcoming = self.state.sorted_jobs().len(),
            "fetched job postings"
        );
        self.publish();
        Ok(())
    }

    fn fetch(
        &self,
        user_id: &str,
        auth_token: Option<&str>,
    ) -> Result<Vec<JobPosting>, FeedError> {
        let token = auth_token.ok_or(FeedError::AuthenticationMissing)?;
        match self
            .api
            .fetch_postings(&self.session.base_url, user_id, token)?
        {
            ApiResponse::Ok(postings) => Ok(postings),
            ApiResponse::Status(status) => Err(FeedError::FetchFailed {
                status: status.as_u16(),
            }),
        }
    }

    /// The screen came to the foreground: reload with the stored token.
    /// Failures are reported to the user and not propagated.
    pub fn on_focus(&mut self, token_store: &dyn KeyValueStore, now: DateTime<Utc>) -> bool {
        let token = store::read_token(token_store);
        let user_id = self.session.user_id.clone();
        self.refresh(&user_id, token.as_deref(), now).is_ok()
    }

    /// Switches between the first page and the full list. Local only.
    pub fn toggle_display(&mut self) {
        self.state.toggle();
        self.publish();
    }
}
