use anyhow::{Context, ensure};

use crate::store::{KeyValueStore, TOKEN_KEY};

use super::AppContext;

pub(crate) fn cmd_login(ctx: &AppContext, token: &str) -> anyhow::Result<()> {
    let token = token.trim();
    ensure!(!token.is_empty(), "Token must not be empty");
    let mut store = ctx.store();
    store
        .set(TOKEN_KEY, token)
        .context("could not save the auth token")?;
    println!("Logged in.");
    Ok(())
}
