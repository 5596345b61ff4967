//! Input dispatch: overlays → global keys → panel-specific handlers.
//!
//! While a session card is expanded it owns the Sessions panel's keys; once
//! it collapses, its reveal keys stop reaching it.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use fourc_core::{ArticleOrder, RevealCommand};

use crate::app::{AppState, Overlay, Panel};

/// Map a key to a reveal command for an expanded card.
pub fn reveal_command(key: &KeyEvent) -> Option<RevealCommand> {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(RevealCommand::Advance),
        KeyCode::Left => Some(RevealCommand::Retreat),
        KeyCode::Char('a') => Some(RevealCommand::RevealAll),
        KeyCode::Char('r') => Some(RevealCommand::Reset),
        _ => None,
    }
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::Search => {
            handle_search_overlay(app, key);
            return;
        }
        Overlay::ArticleDetail(_) => {
            handle_detail_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            if let Some(panel) = Panel::from_index(idx) {
                app.set_panel(panel);
            }
            return;
        }
        KeyCode::Tab => {
            let panel = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel.prev()
            } else {
                app.active_panel.next()
            };
            app.set_panel(panel);
            return;
        }
        KeyCode::BackTab => {
            app.set_panel(app.active_panel.prev());
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Sessions => handle_sessions_key(app, key),
        Panel::Articles => handle_articles_key(app, key),
        Panel::Cognizance => handle_cognizance_key(app, key),
        Panel::Help => handle_help_key(app, key),
    }
}

/// A left click on the Sessions panel advances an expanded card.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.overlay != Overlay::None || app.active_panel != Panel::Sessions {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(card) = app.sessions.card.as_mut() {
            card.handle(RevealCommand::Advance);
        }
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_search_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            app.articles.query = app.search_input.trim().to_string();
            app.articles.cursor = 0;
            let count = app.articles.visible(&app.catalog).len();
            if app.articles.query.is_empty() {
                app.set_status("Search cleared");
            } else {
                app.set_status(format!("{count} article(s) match '{}'", app.articles.query));
            }
            app.search_input.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

fn handle_detail_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_sessions_key(app: &mut AppState, key: KeyEvent) {
    if app.sessions.is_presenting() {
        handle_card_key(app, key);
        return;
    }

    let row_count = app.sessions.visible(&app.catalog).len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.sessions.cursor + 1 < row_count {
                app.sessions.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sessions.cursor = app.sessions.cursor.saturating_sub(1);
        }
        KeyCode::Char('c') => app.cycle_category_filter(),
        KeyCode::Char('d') => app.cycle_day_filter(),
        KeyCode::Char('l') => app.show_articles_for_selected_session(),
        KeyCode::Char('R') => app.reload_catalog(),
        KeyCode::Enter => app.open_selected_session(),
        _ => {}
    }
}

fn handle_card_key(app: &mut AppState, key: KeyEvent) {
    if let Some(command) = reveal_command(&key) {
        if let Some(card) = app.sessions.card.as_mut() {
            card.handle(command);
        }
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => app.sessions.collapse_card(),
        KeyCode::Char('j') | KeyCode::Down => {
            app.sessions.card_scroll = app.sessions.card_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.sessions.card_scroll = app.sessions.card_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_articles_key(app: &mut AppState, key: KeyEvent) {
    let visible: Vec<u32> = app
        .articles
        .visible(&app.catalog)
        .iter()
        .map(|a| a.number)
        .collect();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if !visible.is_empty() && app.articles.cursor + 1 < visible.len() {
                app.articles.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.articles.cursor = app.articles.cursor.saturating_sub(1);
        }
        KeyCode::Char('t') => app.cycle_topic_filter(),
        KeyCode::Char('o') => {
            app.articles.order = match app.articles.order {
                ArticleOrder::Number => ArticleOrder::Newest,
                ArticleOrder::Newest => ArticleOrder::Number,
            };
            app.articles.cursor = 0;
        }
        KeyCode::Char('x') => {
            app.articles.topic = None;
            app.articles.session = None;
            app.articles.query.clear();
            app.articles.cursor = 0;
            app.set_status("Filters cleared");
        }
        KeyCode::Char('/') => {
            app.search_input = app.articles.query.clone();
            app.overlay = Overlay::Search;
        }
        KeyCode::Enter => {
            if let Some(number) = visible.get(app.articles.cursor) {
                app.overlay = Overlay::ArticleDetail(*number);
            }
        }
        _ => {}
    }
}

fn handle_cognizance_key(app: &mut AppState, key: KeyEvent) {
    let c = &mut app.cognizance;
    if c.nav.state().is_top_level() {
        let cols = crate::app::CognizancePanelState::GRID_COLUMNS;
        let cells = fourc_core::CognizanceSection::ALL.len();
        match key.code {
            KeyCode::Char('h') | KeyCode::Left => {
                if c.grid_cursor % cols > 0 {
                    c.grid_cursor -= 1;
                }
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if c.grid_cursor % cols + 1 < cols && c.grid_cursor + 1 < cells {
                    c.grid_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if c.grid_cursor >= cols {
                    c.grid_cursor -= cols;
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if c.grid_cursor + cols < cells {
                    c.grid_cursor += cols;
                }
            }
            KeyCode::Enter => c.open_selected(),
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
                c.back();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                c.scroll.offset = c.scroll.offset.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                c.scroll.offset = c.scroll.offset.saturating_sub(1);
            }
            _ => {}
        }
    }
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('e') = key.code {
        app.overlay = Overlay::ErrorHistory;
        app.error_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use fourc_core::{CognizanceSection, DrillState, FourC};

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    #[test]
    fn quit_on_q_and_ctrl_c() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);

        let mut app = sample_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_panel, Panel::Cognizance);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_panel, Panel::Help);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_panel, Panel::Cognizance);
    }

    #[test]
    fn reveal_keys_drive_expanded_card() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.sessions.is_presenting());

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        let card = app.sessions.card.as_ref().unwrap();
        assert_eq!(card.reveal().step(), 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.sessions.card.as_ref().unwrap().reveal().step(), 1);

        press(&mut app, KeyCode::Char('a'));
        let card = app.sessions.card.as_ref().unwrap();
        assert!(card.reveal().is_complete());

        press(&mut app, KeyCode::Esc);
        let card = app.sessions.card.as_ref().unwrap();
        assert!(!card.is_expanded());
        assert_eq!(card.reveal().step(), 0);
    }

    #[test]
    fn reveal_keys_ignored_after_collapse() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.sessions.card.as_ref().unwrap().reveal().step(), 0);
    }

    #[test]
    fn mouse_click_advances_card() {
        let mut app = sample_app();
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, click);
        assert!(app.sessions.card.is_none());

        press(&mut app, KeyCode::Enter);
        handle_mouse(&mut app, click);
        assert_eq!(app.sessions.card.as_ref().unwrap().reveal().step(), 1);
    }

    #[test]
    fn category_filter_cycles() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.sessions.filter.category, Some(FourC::Communication));
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.sessions.filter.category, Some(FourC::Cognizance));
        assert_eq!(app.sessions.visible(&app.catalog).len(), 1);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut app = sample_app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.sessions.cursor, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Char('k'));
        }
        assert_eq!(app.sessions.cursor, 0);
    }

    #[test]
    fn search_sets_article_query() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.overlay, Overlay::Search);
        for c in "culture".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::None);
        let numbers: Vec<u32> = app
            .articles
            .visible(&app.catalog)
            .iter()
            .map(|a| a.number)
            .collect();
        assert_eq!(numbers, vec![4]);
    }

    #[test]
    fn article_detail_opens_and_closes() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::ArticleDetail(2));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn cognizance_grid_navigation_and_drill() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.cognizance.selected(), CognizanceSection::Perspective);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.cognizance.grid_cursor, 3);

        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('h'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.cognizance.nav.state(),
            DrillState::Section(CognizanceSection::Culture)
        );

        // Enter inside a section does not open another one.
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.cognizance.nav.state(),
            DrillState::Section(CognizanceSection::Culture)
        );

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.cognizance.nav.state(), DrillState::Grid);
        assert_eq!(app.cognizance.scroll.requests, 2);
    }

    #[test]
    fn welcome_overlay_swallows_first_key() {
        let mut app = sample_app();
        app.overlay = Overlay::Welcome;
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.overlay, Overlay::None);
    }
}
