use anyhow::{bail, ensure};

use crate::feed::JobFeedController;
use crate::posting::JobPosting;

use super::{AppContext, Reported, index_to_shorthand};

fn resolve_posting_shorthand(jobs: &[JobPosting], shorthand: &str) -> anyhow::Result<JobPosting> {
    let found = jobs
        .iter()
        .enumerate()
        .find(|(i, _)| index_to_shorthand(*i) == shorthand);
    match found {
        Some((_, job)) => Ok(job.clone()),
        None => bail!("Unknown shorthand: {}", shorthand),
    }
}

pub(crate) fn cmd_open(ctx: &AppContext, shorthand: &str) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let mut feed = JobFeedController::new(&session, &ctx.api, &ctx.notifier);
    if !feed.on_focus(&ctx.store(), ctx.now) {
        return Err(Reported.into());
    }

    let job = resolve_posting_shorthand(feed.state().sorted_jobs(), shorthand)?;
    ensure!(!job.url.is_empty(), "Posting has no link");
    tracing::info!(id = %job.id, url = %job.url, "opening posting");
    open::that(&job.url).map_err(|e| anyhow::anyhow!("Could not open URL: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn posting(title: &str) -> JobPosting {
        JobPosting {
            id: title.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            deadline: Utc::now(),
            url: String::new(),
        }
    }

    #[test]
    fn test_resolve_by_position() {
        let jobs = vec![posting("first"), posting("second")];
        assert_eq!(resolve_posting_shorthand(&jobs, "s").unwrap().title, "second");
    }

    #[test]
    fn test_resolve_unknown() {
        let jobs = vec![posting("first")];
        let err = resolve_posting_shorthand(&jobs, "zz").unwrap_err();
        assert_eq!(err.to_string(), "Unknown shorthand: zz");
    }
}
