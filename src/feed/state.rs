use chrono::{DateTime, Utc};

use crate::posting::JobPosting;

/// Number of postings shown while collapsed.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    sorted_jobs: Vec<JobPosting>,
    displayed_jobs: Vec<JobPosting>,
    expanded: bool,
}

impl FeedState {
    pub fn sorted_jobs(&self) -> &[JobPosting] {
        &self.sorted_jobs
    }

    pub fn displayed_jobs(&self) -> &[JobPosting] {
        &self.displayed_jobs
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn can_toggle(&self) -> bool {
        self.sorted_jobs.len() > PAGE_SIZE
    }

    /// Replaces the snapshot with a fresh fetch. `expanded` is left alone.
    pub(crate) fn apply_fetch(&mut self, postings: Vec<JobPosting>, now: DateTime<Utc>) {
        self.sorted_jobs = upcoming_by_deadline(postings, now);
        self.displayed_jobs = first_page(&self.sorted_jobs);
    }

    pub(crate) fn toggle(&mut self) {
        self.displayed_jobs = if self.expanded {
            first_page(&self.sorted_jobs)
        } else {
            self.sorted_jobs.clone()
        };
        self.expanded = !self.expanded;
    }
}

fn first_page(jobs: &[JobPosting]) -> Vec<JobPosting> {
    jobs.iter().take(PAGE_SIZE).cloned().collect()
}

/// Drops postings whose deadline is not strictly after `now` and orders the
/// rest by deadline. Ties keep their response order.
pub fn upcoming_by_deadline(postings: Vec<JobPosting>, now: DateTime<Utc>) -> Vec<JobPosting> {
    let mut upcoming: Vec<JobPosting> = postings
        .into_iter()
        .filter(|p| p.deadline > now)
        .collect();
    upcoming.sort_by_key(|p| p.deadline);
    upcoming
}
