//! Session card in presentation mode: progress bar plus the revealed items.
//!
//! Invisible items are not drawn at all; past items are dimmed and the
//! current item is emphasized with a marker.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use fourc_core::{attributes, Catalog, RevealItem, Session, SessionCard, Visibility};

use crate::app::AppState;
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, card: &SessionCard) {
    let Some(session) = app.catalog.session(card.session_id()) else {
        let para = Paragraph::new(Span::styled("Session not found.", theme::muted()));
        f.render_widget(para, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    render_header(f, chunks[0], session);
    render_progress(f, chunks[1], card);

    let mut lines: Vec<Line> = Vec::new();
    if session.is_empty_state() {
        lines.push(Line::from(Span::styled(
            session.empty_reason().to_string(),
            theme::neutral(),
        )));
    } else if card.items().is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing to present for this session.",
            theme::muted(),
        )));
    } else if card.reveal().is_initial() {
        lines.push(Line::from(Span::styled(
            "Press → or Space to begin.",
            theme::muted(),
        )));
    }

    for (item, visibility) in card.tiers() {
        if !visibility.is_visible() {
            continue;
        }
        lines.extend(item_lines(item, visibility, session, &app.catalog));
        lines.push(Line::from(""));
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.sessions.card_scroll, 0));
    f.render_widget(para, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect, session: &Session) {
    let category = session.category();
    let attrs = attributes(category);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", session.name), theme::accent_bold()),
            Span::styled(format!("[{}]", attrs.label), theme::category(category)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} · {} · {}  ", session.id, session.day, session.time),
                theme::muted(),
            ),
            Span::styled(
                "[→/Space]next [←]back [a]ll [r]eset [Esc]close",
                theme::muted(),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_progress(f: &mut Frame, area: Rect, card: &SessionCard) {
    let reveal = card.reveal();
    let (step, total) = reveal.progress();
    let fraction = reveal.fraction().clamp(0.0, 1.0);
    let width = area.width.saturating_sub(16) as usize;
    let filled = (fraction * width as f64).round() as usize;
    let color = Theme::default().progress_color(fraction);

    let line = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(width - filled), theme::muted()),
        Span::styled(format!(" Step {step}/{total}"), theme::accent()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Lines for one visible item, styled by tier.
fn item_lines<'a>(
    item: &'a RevealItem,
    visibility: Visibility,
    session: &'a Session,
    catalog: &'a Catalog,
) -> Vec<Line<'a>> {
    let style = theme::reveal(visibility);
    let marker = match visibility {
        Visibility::Current => Span::styled("▶ ", theme::accent_bold()),
        _ => Span::raw("  "),
    };
    let heading = |text: String| {
        Line::from(vec![
            marker.clone(),
            Span::styled(text, style.add_modifier(Modifier::UNDERLINED)),
        ])
    };
    let body = |text: String| Line::from(vec![Span::raw("    "), Span::styled(text, style)]);

    let mut lines = Vec::new();
    match item {
        RevealItem::Description { text } => {
            lines.push(heading(item.kind_label().to_string()));
            lines.push(body(text.clone()));
        }
        RevealItem::CoreTopics { topics } => {
            lines.push(heading(item.kind_label().to_string()));
            if topics.is_empty() {
                lines.push(body("(none listed)".to_string()));
            } else {
                lines.push(body(topics.join("  ·  ")));
            }
        }
        RevealItem::DiscussionPoint {
            text,
            index,
            total,
            children,
        } => {
            if let Some(resource) = item.resolve_video_break(&session.resources) {
                let link = if visibility == Visibility::Current {
                    theme::positive().add_modifier(Modifier::UNDERLINED)
                } else {
                    style
                };
                lines.push(Line::from(vec![
                    marker.clone(),
                    Span::styled(format!("Video: {} — ", resource.title), style),
                    Span::styled(resource.url.clone(), link),
                ]));
            } else {
                lines.push(Line::from(vec![
                    marker.clone(),
                    Span::styled(format!("{}/{}  {text}", index + 1, total), style),
                ]));
            }
            for child in children {
                lines.push(body(format!("  {child}")));
            }
        }
        RevealItem::Introspection { title, prompts } => {
            lines.push(heading(format!("{}: {title}", item.kind_label())));
            for prompt in prompts {
                lines.push(body(format!("? {prompt}")));
            }
        }
        RevealItem::Resources { entries } => {
            lines.push(heading(item.kind_label().to_string()));
            for r in entries {
                let source = r
                    .source
                    .as_deref()
                    .map(|s| format!(" ({s})"))
                    .unwrap_or_default();
                lines.push(body(format!("• {}{source}  {}", r.title, r.url)));
            }
        }
        RevealItem::ArticleLinks => {
            lines.push(heading(item.kind_label().to_string()));
            for article in catalog.related_articles(session) {
                lines.push(body(format!("#{} {}", article.number, article.title)));
                if let Some(why) = article.relevance_for(&session.id) {
                    lines.push(body(format!("   {why}")));
                }
            }
        }
    }
    lines
}
