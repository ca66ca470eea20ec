use std::cell::RefCell;
use std::fmt::Write;
use std::io::IsTerminal;
use std::rc::Rc;

use unicode_width::UnicodeWidthStr;

use crate::feed::{FeedState, JobFeedController};
use crate::posting::JobPosting;

use super::{AppContext, Reported, index_to_shorthand};

fn format_posting(
    job: &JobPosting,
    shorthand: &str,
    shorthand_width: usize,
    title_width: usize,
    color: bool,
) -> String {
    let (bold, dim, italic, date_color, reset) = if color {
        ("\x1b[1m", "\x1b[2m", "\x1b[3m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "", "", "")
    };
    let sh_pad = " ".repeat(shorthand_width.saturating_sub(shorthand.width()));
    let title_pad = " ".repeat(title_width.saturating_sub(job.title.width()));
    format!(
        "{bold}{shorthand}{reset}{sh_pad} {}{title_pad} {dim}{italic}({}){reset}  {date_color}due {}{reset}",
        job.title,
        job.company,
        job.deadline_label()
    )
}

pub(crate) fn render_feed(state: &FeedState, color: bool) -> String {
    let jobs = state.displayed_jobs();
    if jobs.is_empty() {
        return "No upcoming job postings\n".to_string();
    }

    let shorthands: Vec<String> = (0..jobs.len()).map(index_to_shorthand).collect();
    let shorthand_width = shorthands.iter().map(|s| s.width()).max().unwrap_or(0);
    let title_width = jobs.iter().map(|j| j.title.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (job, sh) in jobs.iter().zip(&shorthands) {
        writeln!(
            out,
            "{}",
            format_posting(job, sh, shorthand_width, title_width, color)
        )
        .unwrap();
    }

    if state.can_toggle() {
        let total = state.sorted_jobs().len();
        if jobs.len() == total {
            writeln!(out, "(showing all {total})").unwrap();
        } else {
            let hidden = total.saturating_sub(jobs.len());
            writeln!(out, "… {hidden} more (use --all)").unwrap();
        }
    }
    out
}

pub(crate) fn cmd_show(ctx: &AppContext, all: bool) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let store = ctx.store();
    let color = std::io::stdout().is_terminal();

    let screen = Rc::new(RefCell::new(String::new()));
    let mut feed = JobFeedController::new(&session, &ctx.api, &ctx.notifier);
    let view = Rc::clone(&screen);
    let view_id = feed.subscribe(move |state| *view.borrow_mut() = render_feed(state, color));

    if !feed.on_focus(&store, ctx.now) {
        return Err(Reported.into());
    }
    if all && feed.state().can_toggle() {
        feed.toggle_display();
    }
    feed.unsubscribe(view_id);

    print!("{}", screen.borrow());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn posting(title: &str, company: &str, day: u32) -> JobPosting {
        JobPosting {
            id: format!("id-{title}"),
            title: title.to_string(),
            company: company.to_string(),
            deadline: NaiveDate::from_ymd_opt(2024, 7, day)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
            url: String::new(),
        }
    }

    fn state_with(jobs: Vec<JobPosting>) -> FeedState {
        let mut state = FeedState::default();
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        state.apply_fetch(jobs, now);
        state
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            render_feed(&FeedState::default(), false),
            "No upcoming job postings\n"
        );
    }

    #[test]
    fn test_render_aligns_titles() {
        let state = state_with(vec![
            posting("Backend", "Acme", 2),
            posting("QA", "Initech", 3),
        ]);
        assert_eq!(
            render_feed(&state, false),
            "a Backend (Acme)  due 2024-07-02\ns QA      (Initech)  due 2024-07-03\n"
        );
    }

    #[test]
    fn test_render_pads_wide_titles_by_display_width() {
        let state = state_with(vec![
            posting("개발자", "Acme", 2),
            posting("Ops", "Acme", 3),
        ]);
        let out = render_feed(&state, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a 개발자 (Acme)  due 2024-07-02");
        assert_eq!(lines[1], "s Ops    (Acme)  due 2024-07-03");
    }

    #[test]
    fn test_render_collapsed_footer() {
        let jobs = (1..=7).map(|d| posting(&format!("J{d}"), "Acme", d)).collect();
        let state = state_with(jobs);
        let out = render_feed(&state, false);
        assert_eq!(out.lines().count(), 6);
        assert_eq!(out.lines().last(), Some("… 2 more (use --all)"));
    }

    #[test]
    fn test_render_expanded_footer() {
        let jobs = (1..=7).map(|d| posting(&format!("J{d}"), "Acme", d)).collect();
        let mut state = state_with(jobs);
        state.toggle();
        let out = render_feed(&state, false);
        assert_eq!(out.lines().count(), 8);
        assert_eq!(out.lines().last(), Some("(showing all 7)"));
    }

    #[test]
    fn test_render_footer_follows_rows_not_flag() {
        let jobs = (1..=7).map(|d| posting(&format!("J{d}"), "Acme", d)).collect();
        let mut state = state_with(jobs);
        state.toggle();
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();
        let fewer = (1..=6).map(|d| posting(&format!("K{d}"), "Acme", d)).collect();
        state.apply_fetch(fewer, now);
        assert!(state.expanded());

        let out = render_feed(&state, false);
        assert_eq!(out.lines().count(), 6);
        assert_eq!(out.lines().last(), Some("… 1 more (use --all)"));
    }

    #[test]
    fn test_render_exactly_one_page_has_no_footer() {
        let jobs = (1..=5).map(|d| posting(&format!("J{d}"), "Acme", d)).collect();
        let out = render_feed(&state_with(jobs), false);
        assert_eq!(out.lines().count(), 5);
        assert!(out.lines().all(|l| l.contains("due ")));
    }

    #[test]
    fn test_render_color_wraps_shorthand() {
        let state = state_with(vec![posting("Dev", "Acme", 2)]);
        let out = render_feed(&state, true);
        assert!(out.starts_with("\x1b[1ma\x1b[0m Dev"));
    }
}
