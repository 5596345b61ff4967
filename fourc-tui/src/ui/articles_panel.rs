//! Panel 2 (Articles): library list with topic, session and text filters.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use fourc_core::ArticleOrder;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let a = &app.articles;
    let visible = a.visible(&app.catalog);
    let mut lines: Vec<Line> = Vec::new();

    let mut filters: Vec<String> = Vec::new();
    if let Some(topic) = &a.topic {
        filters.push(format!("topic={topic}"));
    }
    if let Some(session) = &a.session {
        filters.push(format!("session={session}"));
    }
    if !a.query.is_empty() {
        filters.push(format!("search=\"{}\"", a.query));
    }
    let filters = if filters.is_empty() {
        "no filters".to_string()
    } else {
        filters.join(", ")
    };
    let order = match a.order {
        ArticleOrder::Number => "by number",
        ArticleOrder::Newest => "newest first",
    };

    lines.push(Line::from(vec![
        Span::styled(format!("{filters} | {order} | "), theme::muted()),
        Span::styled(format!("{} articles", visible.len()), theme::accent()),
        Span::styled(
            "  [j/k]move [t]opic [/]search [o]rder [x]clear [Enter]detail",
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(""));

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No articles match the current filters.",
            theme::muted(),
        )));
    }

    // Keep the cursor row on screen.
    let height = area.height.saturating_sub(2) as usize;
    let start = a.cursor.saturating_sub(height.saturating_sub(1));
    for (i, article) in visible.iter().enumerate().skip(start).take(height) {
        let is_cursor = i == a.cursor;
        let title_style = if is_cursor { theme::cursor() } else { theme::text() };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>4} ", format!("#{}", article.number)), theme::muted()),
            Span::styled(format!("{:<14} ", article.date), theme::neutral()),
            Span::styled(article.title.clone(), title_style),
            Span::styled(format!("  [{}]", article.topics.join(", ")), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
