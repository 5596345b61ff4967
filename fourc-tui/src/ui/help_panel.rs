//! Panel 4 (Help): keyboard reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use fourc_core::{attributes, FourC};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Sessions");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "c", "Cycle category filter");
    key(&mut lines, "d", "Cycle day filter");
    key(&mut lines, "l", "Show the session's articles");
    key(&mut lines, "R", "Reload the catalog from disk");
    key(&mut lines, "Enter", "Present the session");
    lines.push(Line::from(""));

    section(&mut lines, "Presentation mode");
    key(&mut lines, "→ / Space / click", "Reveal next item");
    key(&mut lines, "←", "Hide last item");
    key(&mut lines, "a", "Reveal everything");
    key(&mut lines, "r", "Start over");
    key(&mut lines, "j / k", "Scroll");
    key(&mut lines, "Esc", "Close (resets progress)");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — Articles");
    key(&mut lines, "j / k", "Move cursor");
    key(&mut lines, "t", "Cycle topic filter");
    key(&mut lines, "/", "Search titles, topics and text");
    key(&mut lines, "o", "Toggle number / newest order");
    key(&mut lines, "x", "Clear filters");
    key(&mut lines, "Enter", "Article detail with linked sessions");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Cognizance");
    key(&mut lines, "h / j / k / l", "Move in the grid");
    key(&mut lines, "Enter", "Open section");
    key(&mut lines, "Esc / Backspace", "Back to the grid");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 4 — Help (this panel)");
    key(&mut lines, "e", "Open error history overlay");
    lines.push(Line::from(""));

    section(&mut lines, "The Four Cs");
    for c in FourC::ALL {
        let attrs = attributes(Some(c));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>20}  ", attrs.label), theme::category(Some(c))),
            Span::styled(attrs.tagline, theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
