use crate::api::{ApiResponse, JobApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlPanel {
    AddUrl,
    UrlOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarPanel {
    TodoCalendar,
    CalendarOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardPanels {
    pub url_panel: UrlPanel,
    pub calendar_panel: CalendarPanel,
    pub show_checklist: bool,
}

impl DashboardPanels {
    pub fn derive(has_todos: bool, has_checklist: bool) -> Self {
        let (url_panel, calendar_panel) = if has_todos {
            (UrlPanel::AddUrl, CalendarPanel::TodoCalendar)
        } else {
            (UrlPanel::UrlOnly, CalendarPanel::CalendarOnly)
        };
        Self {
            url_panel,
            calendar_panel,
            show_checklist: has_checklist,
        }
    }
}

fn has_items(what: &str, result: Result<ApiResponse<usize>, reqwest::Error>) -> bool {
    match result {
        Ok(ApiResponse::Ok(n)) => n > 0,
        Ok(ApiResponse::Status(status)) => {
            tracing::error!("error fetching {what}: HTTP {status}");
            false
        }
        Err(e) => {
            tracing::error!("error fetching {what}: {e}");
            false
        }
    }
}

/// Asks the backend which optional panels the home screen needs.
/// Failures only log and fall back to the empty-state panels.
pub fn probe(api: &dyn JobApi, base_url: &str, token: Option<&str>) -> DashboardPanels {
    let has_checklist = has_items("checklist", api.count_checklist(base_url, token));
    let has_todos = has_items("todo list", api.count_todos(base_url, token));
    DashboardPanels::derive(has_todos, has_checklist)
}
