//! Overlay widgets: welcome, article detail, error history, search.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 40, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Welcome to FourC ")
        .title_style(theme::accent_bold());

    let step = |s: &'static str| Line::from(Span::styled(s, theme::muted()));
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        step("  1. Pick a session with j / k"),
        step("  2. Press Enter to present it"),
        step("  3. Reveal one item at a time with → or Space"),
        step("  4. Press 2 for the article library, 3 for Cognizance"),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(format!(
            " Error History ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(theme::negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", theme::muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for (i, err) in app.error_history.iter().enumerate().take(end).skip(start) {
        let style = if i == app.error_scroll {
            theme::negative().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                theme::muted(),
            ),
            Span::styled(err.message.as_str(), style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), theme::muted()),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Article search input.
pub fn render_search(f: &mut Frame, area: Rect, input: &str) {
    let popup = centered_rect(50, 20, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Search Articles [Enter]apply [Esc]cancel ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Title, topic or text:", theme::muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(input, theme::accent_bold()),
            Span::styled("_", theme::accent()),
        ]),
    ];

    f.render_widget(Paragraph::new(text), inner);
}

/// Article detail with its linked sessions and why each one links.
pub fn render_article(f: &mut Frame, area: Rect, app: &AppState, number: u32) {
    let popup = centered_rect(80, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(format!(" Article #{number} [Esc]close "))
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let Some(article) = app.catalog.article(number) else {
        let text = Paragraph::new(Span::styled("Article not found.", theme::muted()));
        f.render_widget(text, inner);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(article.title.as_str(), theme::accent_bold())));
    detail_line(&mut lines, "Date", &article.date);
    detail_line(&mut lines, "Topics", &article.topics.join(", "));
    lines.push(Line::from(""));

    if let Some(content) = &article.content {
        lines.push(Line::from(Span::styled(content.as_str(), theme::text())));
        lines.push(Line::from(""));
    }

    let sessions = app.catalog.sessions_for_article(article);
    lines.push(Line::from(Span::styled("Linked sessions", theme::accent_bold())));
    if sessions.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", theme::muted())));
    }
    for session in sessions {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} {} ", session.id, session.name),
                theme::category(session.category()),
            ),
            Span::styled(format!("({})", session.day), theme::muted()),
        ]));
        if let Some(why) = app.catalog.relevance(article, &session.id) {
            lines.push(Line::from(Span::styled(format!("      {why}"), theme::muted())));
        }
    }

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, inner);
}

fn detail_line<'a>(lines: &mut Vec<Line<'a>>, label: &str, value: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>8}: ", label), theme::muted()),
        Span::styled(value.to_string(), theme::accent()),
    ]));
}
