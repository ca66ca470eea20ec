use std::fmt::Write;

use crate::dashboard::{self, CalendarPanel, DashboardPanels, UrlPanel};
use crate::store;

use super::AppContext;

fn render_panels(panels: &DashboardPanels) -> String {
    let url = match panels.url_panel {
        UrlPanel::AddUrl => "add-url",
        UrlPanel::UrlOnly => "url-only",
    };
    let calendar = match panels.calendar_panel {
        CalendarPanel::TodoCalendar => "todo-calendar",
        CalendarPanel::CalendarOnly => "calendar-only",
    };
    let checklist = if panels.show_checklist {
        "shown"
    } else {
        "hidden"
    };
    let mut out = String::new();
    writeln!(out, "url: {url}").unwrap();
    writeln!(out, "calendar: {calendar}").unwrap();
    writeln!(out, "checklist: {checklist}").unwrap();
    out
}

pub(crate) fn cmd_dashboard(ctx: &AppContext) -> anyhow::Result<()> {
    let session = ctx.session()?;
    let token = store::read_token(&ctx.store());
    let panels = dashboard::probe(&ctx.api, &session.base_url, token.as_deref());
    print!("{}", render_panels(&panels));
    Ok(())
}
