//! Panel 3 (Cognizance): section grid, and one section's detail.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use fourc_core::{attributes, CognizanceSection, DrillState, FourC, SessionFilter};

use crate::app::{AppState, CognizancePanelState};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    match app.cognizance.nav.state() {
        DrillState::Grid => render_grid(f, area, app),
        DrillState::Section(section) => render_section(f, area, app, section),
    }
}

fn render_grid(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(4)])
        .split(area);

    let attrs = attributes(Some(FourC::Cognizance));
    let header = vec![
        Line::from(Span::styled(attrs.tagline, theme::category(Some(FourC::Cognizance)))),
        Line::from(Span::styled(
            "[h/j/k/l]move [Enter]open",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(header), chunks[0]);

    let cols = CognizancePanelState::GRID_COLUMNS;
    let rows = CognizanceSection::ALL.len().div_ceil(cols);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(chunks[1]);

    for (r, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
            .split(*row_area);
        for (c, cell) in cells.iter().enumerate() {
            let idx = r * cols + c;
            let Some(section) = CognizanceSection::ALL.get(idx) else {
                continue;
            };
            let selected = idx == app.cognizance.grid_cursor;
            let summary = app
                .catalog
                .cognizance()
                .section(*section)
                .map(|s| s.summary.clone())
                .unwrap_or_else(|| "No content yet.".to_string());
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(selected))
                .title(format!(" {} ", section.label()))
                .title_style(theme::panel_title(selected));
            let para = Paragraph::new(Span::styled(summary, theme::muted()))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(para, *cell);
        }
    }
}

fn render_section(f: &mut Frame, area: Rect, app: &AppState, section: CognizanceSection) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(format!("{}  ", section.label()), theme::accent_bold()),
        Span::styled("[Esc]back [j/k]scroll", theme::muted()),
    ]));
    lines.push(Line::from(""));

    match app.catalog.cognizance().section(section) {
        Some(content) => {
            if !content.summary.is_empty() {
                lines.push(Line::from(Span::styled(content.summary.clone(), theme::text())));
                lines.push(Line::from(""));
            }
            for (i, point) in content.points.iter().enumerate() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}. ", i + 1), theme::accent()),
                    Span::styled(point.clone(), theme::text()),
                ]));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "No content yet for this section.",
            theme::muted(),
        ))),
    }

    let sessions = app.catalog.filter_sessions(&SessionFilter {
        category: Some(FourC::Cognizance),
        day: None,
    });
    if !sessions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Cognizance sessions",
            theme::category(Some(FourC::Cognizance)),
        )));
        for s in sessions {
            lines.push(Line::from(Span::styled(
                format!("  {} {} ({}, {})", s.id, s.name, s.day, s.time),
                theme::muted(),
            )));
        }
    }

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.cognizance.scroll.offset, 0));
    f.render_widget(para, area);
}
