//! Top-level UI layout: one panel at a time with a status bar.

pub mod articles_panel;
pub mod cognizance_panel;
pub mod help_panel;
pub mod overlays;
pub mod session_card;
pub mod sessions_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    draw_panel(f, main_area, app);
    status_bar::render(f, status_area, app);

    match &app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::Search => overlays::render_search(f, main_area, &app.search_input),
        Overlay::ArticleDetail(number) => overlays::render_article(f, main_area, app, *number),
        Overlay::None => {}
    }
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;
    let title = match panel {
        Panel::Cognizance => format!(
            " {} [{}] ",
            app.cognizance.nav.state().description(),
            panel.index() + 1
        ),
        _ => format!(" {} [{}] ", panel.label(), panel.index() + 1),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title)
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Sessions => sessions_panel::render(f, inner, app),
        Panel::Articles => articles_panel::render(f, inner, app),
        Panel::Cognizance => cognizance_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
    }

    #[test]
    fn every_panel_renders() {
        let mut app = sample_app();
        for i in 0..Panel::COUNT {
            app.set_panel(Panel::from_index(i).unwrap());
            let screen = render_to_string(&app);
            assert!(screen.contains(Panel::from_index(i).unwrap().label()));
        }
    }

    #[test]
    fn presenting_card_hides_unrevealed_items() {
        let mut app = sample_app();
        app.open_selected_session();
        let screen = render_to_string(&app);
        assert!(screen.contains("0/9"));
        assert!(!screen.contains("How leaders turn"));

        app.sessions.card.as_mut().unwrap().handle(fourc_core::RevealCommand::Advance);
        let screen = render_to_string(&app);
        assert!(screen.contains("1/9"));
        assert!(screen.contains("How leaders turn"));
        assert!(!screen.contains("Active listening"));
    }

    #[test]
    fn video_break_renders_as_link() {
        let mut app = sample_app();
        app.open_selected_session();
        app.sessions.card.as_mut().unwrap().handle(fourc_core::RevealCommand::RevealAll);
        let screen = render_to_string(&app);
        assert!(screen.contains("youtube.com"));
    }

    #[test]
    fn empty_cognizance_section_shows_placeholder() {
        let mut app = sample_app();
        app.set_panel(Panel::Cognizance);
        app.cognizance.grid_cursor = 3;
        app.cognizance.open_selected();
        let screen = render_to_string(&app);
        assert!(screen.contains("Perspective Taking"));
        assert!(screen.contains("No content yet"));
    }
}
