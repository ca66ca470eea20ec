use std::io::{BufRead, Write};

use crate::notify::Notifier;
use crate::store::{KeyValueStore, TOKEN_KEY};

use super::{AppContext, Reported};

fn confirmed(input: &mut impl BufRead, prompt: &mut impl Write) -> anyhow::Result<bool> {
    write!(prompt, "Log out? [y/N] ")?;
    prompt.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}

pub(crate) fn logout(
    store: &mut dyn KeyValueStore,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    if let Err(e) = store.remove(TOKEN_KEY) {
        tracing::error!("logout failed: {e}");
        notifier.alert("Logout error", "Error while logging out");
        return Err(Reported.into());
    }
    tracing::info!("auth token removed");
    Ok(())
}

pub(crate) fn cmd_logout(ctx: &AppContext, yes: bool) -> anyhow::Result<()> {
    if !yes && !confirmed(&mut std::io::stdin().lock(), &mut std::io::stderr())? {
        println!("Cancelled.");
        return Ok(());
    }
    logout(&mut ctx.store(), &ctx.notifier)?;
    println!("Logged out.");
    Ok(())
}
