//! Panel 1 (Sessions): filterable schedule, or the open card in presentation mode.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use fourc_core::attributes;

use crate::app::AppState;
use crate::theme;
use crate::ui::session_card;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if let Some(card) = app.sessions.card.as_ref().filter(|c| c.is_expanded()) {
        session_card::render(f, area, app, card);
        return;
    }

    let s = &app.sessions;
    let mut lines: Vec<Line> = Vec::new();

    // Header
    let category = s
        .filter
        .category
        .map_or("All categories", |c| c.label());
    let day = s.filter.day.as_deref().unwrap_or("All days");
    lines.push(Line::from(vec![
        Span::styled(format!("{category} | {day} | "), theme::muted()),
        Span::styled(
            format!("{} sessions", s.visible(&app.catalog).len()),
            theme::accent(),
        ),
        Span::styled(
            "  [j/k]move [c]ategory [d]ay [l]inked articles [Enter]present",
            theme::muted(),
        ),
    ]));

    // Legend
    let mut legend = vec![Span::raw(" ")];
    for (c, count) in app.catalog.category_counts() {
        legend.push(Span::styled(
            format!("■ {} ({count})  ", c.label()),
            theme::category(Some(c)),
        ));
    }
    lines.push(Line::from(legend));
    lines.push(Line::from(""));

    let visible = s.visible(&app.catalog);
    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No sessions match the current filters.",
            theme::muted(),
        )));
    }

    for (i, session) in visible.iter().enumerate() {
        let category = session.category();
        let attrs = attributes(category);
        let is_cursor = i == s.cursor;
        let row_style = if is_cursor { theme::cursor() } else { theme::text() };

        let mut spans = vec![
            Span::styled(format!(" {} ", attrs.code), theme::category(category)),
            Span::styled(format!("{:<6}", session.id), theme::muted()),
            Span::styled(format!("{:<36}", session.name), row_style),
            Span::styled(format!("{:<8} {:<10}", session.day, session.time), theme::muted()),
        ];
        if session.is_empty_state() {
            spans.push(Span::styled("(no content)", theme::neutral()));
        } else if !session.articles.is_empty() {
            spans.push(Span::styled(
                format!("{} article(s)", session.articles.len()),
                theme::neutral(),
            ));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), area);
}
