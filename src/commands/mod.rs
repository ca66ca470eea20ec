pub mod dashboard;
pub mod login;
pub mod logout;
pub mod open;
pub mod show;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::api::HttpApi;
use crate::notify::StderrNotifier;
use crate::session::Session;
use crate::store::FileStore;

const POST_ALPHABET: [char; 34] = [
    'a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'q',
    'w', 'e', 'r', 't', 'y', 'i', 'o', 'p', 'z', 'x', 'c', 'v', 'b', 'n', 'm',
];

/// Shorthand for the posting at `n` in deadline order.
fn index_to_shorthand(mut n: usize) -> String {
    let base = POST_ALPHABET.len();
    if n == 0 {
        return POST_ALPHABET[0].to_string();
    }
    let mut chars = Vec::new();
    while n > 0 {
        chars.push(POST_ALPHABET[n % base]);
        n /= base;
    }
    chars.reverse();
    chars.into_iter().collect()
}

/// A failure the user has already seen as an alert; exit without repeating it.
#[derive(Debug, thiserror::Error)]
#[error("failure already reported")]
pub(crate) struct Reported;

/// Everything a command needs, resolved once from the command line.
pub(crate) struct AppContext {
    pub base_url: String,
    pub user_id: Option<String>,
    pub store_dir: PathBuf,
    pub now: DateTime<Utc>,
    pub api: HttpApi,
    pub notifier: StderrNotifier,
}

impl AppContext {
    pub(crate) fn session(&self) -> anyhow::Result<Session> {
        let user_id = self
            .user_id
            .as_deref()
            .filter(|u| !u.is_empty())
            .context("No user id; pass --user or set PLANUP_USER")?;
        Ok(Session::new(user_id, &self.base_url))
    }

    pub(crate) fn store(&self) -> FileStore {
        FileStore::open(&self.store_dir)
    }
}
