//! Application state: single-owner, main-thread only.
//!
//! Every panel owns its own view state. The session card and the Cognizance
//! navigator are created per view and never shared.

use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use fourc_core::{
    ArticleFilter, ArticleOrder, Article, Catalog, CognizanceSection, DrillNavigator, FocusTarget,
    FourC, Session, SessionCard, SessionFilter,
};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Sessions,
    Articles,
    Cognizance,
    Help,
}

impl Panel {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Panel::Sessions => 0,
            Panel::Articles => 1,
            Panel::Cognizance => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Sessions),
            1 => Some(Panel::Articles),
            2 => Some(Panel::Cognizance),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Sessions => "Sessions",
            Panel::Articles => "Articles",
            Panel::Cognizance => "Cognizance",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Sessions => Panel::Articles,
            Panel::Articles => Panel::Cognizance,
            Panel::Cognizance => Panel::Help,
            Panel::Help => Panel::Sessions,
        }
    }

    pub fn prev(self) -> Panel {
        match self {
            Panel::Sessions => Panel::Help,
            Panel::Articles => Panel::Sessions,
            Panel::Cognizance => Panel::Articles,
            Panel::Help => Panel::Cognizance,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub context: String,
}

pub const ERROR_HISTORY_CAP: usize = 50;

/// Sessions panel: filterable list plus at most one open card.
#[derive(Debug, Default)]
pub struct SessionsPanelState {
    pub filter: SessionFilter,
    pub cursor: usize,
    /// The most recently opened card. Kept (collapsed) after Esc until
    /// another session is opened.
    pub card: Option<SessionCard>,
    pub card_scroll: u16,
}

impl SessionsPanelState {
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Session> {
        catalog.filter_sessions(&self.filter)
    }

    pub fn is_presenting(&self) -> bool {
        self.card.as_ref().is_some_and(SessionCard::is_expanded)
    }

    pub fn collapse_card(&mut self) {
        if let Some(card) = self.card.as_mut() {
            card.collapse();
        }
        self.card_scroll = 0;
    }
}

/// Articles panel: library list with topic/session/search filters.
#[derive(Debug, Default)]
pub struct ArticlesPanelState {
    pub topic: Option<String>,
    pub session: Option<String>,
    pub query: String,
    pub order: ArticleOrder,
    pub cursor: usize,
}

impl ArticlesPanelState {
    pub fn filter(&self) -> ArticleFilter {
        ArticleFilter {
            topic: self.topic.clone(),
            session: self.session.clone(),
            query: (!self.query.trim().is_empty()).then(|| self.query.clone()),
        }
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Article> {
        catalog.filter_articles(&self.filter(), self.order)
    }
}

/// Scroll offset of the Cognizance view; reset on every drill transition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollFocus {
    pub offset: u16,
    pub requests: usize,
}

impl FocusTarget for ScrollFocus {
    fn request_focus(&mut self) {
        self.offset = 0;
        self.requests += 1;
    }
}

/// Cognizance panel: 2×2 grid of sections with one-level drill-down.
#[derive(Debug, Default)]
pub struct CognizancePanelState {
    pub nav: DrillNavigator,
    pub grid_cursor: usize,
    pub scroll: ScrollFocus,
}

impl CognizancePanelState {
    pub const GRID_COLUMNS: usize = 2;

    pub fn selected(&self) -> CognizanceSection {
        CognizanceSection::ALL[self.grid_cursor.min(CognizanceSection::ALL.len() - 1)]
    }

    /// Open the selected section. No-op unless on the grid.
    pub fn open_selected(&mut self) {
        let section = self.selected();
        if let Some(grid) = self.nav.grid() {
            grid.open(section, &mut self.scroll);
        }
    }

    pub fn back(&mut self) -> bool {
        self.nav.back(&mut self.scroll)
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    /// Article number.
    ArticleDetail(u32),
    ErrorHistory,
    Search,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    pub catalog: Catalog,

    // Panel states
    pub sessions: SessionsPanelState,
    pub articles: ArticlesPanelState,
    pub cognizance: CognizancePanelState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub search_input: String,

    pub data_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog: Catalog, data_dir: PathBuf) -> Self {
        Self {
            active_panel: Panel::Sessions,
            running: true,
            catalog,
            sessions: SessionsPanelState::default(),
            articles: ArticlesPanelState::default(),
            cognizance: CognizancePanelState::default(),
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            search_input: String::new(),
            data_dir,
        }
    }

    /// Switch panels. Leaving the Sessions panel collapses an open card.
    pub fn set_panel(&mut self, panel: Panel) {
        if panel != self.active_panel {
            self.sessions.collapse_card();
            self.active_panel = panel;
        }
    }

    /// Open the session under the cursor in presentation mode.
    pub fn open_selected_session(&mut self) {
        let visible = self.sessions.visible(&self.catalog);
        let Some(session) = visible.get(self.sessions.cursor) else {
            return;
        };
        let reuse = self
            .sessions
            .card
            .as_ref()
            .is_some_and(|c| c.session_id() == session.id);
        if !reuse {
            self.sessions.card = Some(SessionCard::new(session));
        }
        self.sessions.card_scroll = 0;
        if let Some(card) = self.sessions.card.as_mut() {
            card.expand();
        }
    }

    pub fn cycle_category_filter(&mut self) {
        self.sessions.filter.category = FourC::cycle(self.sessions.filter.category);
        self.sessions.cursor = 0;
    }

    pub fn cycle_day_filter(&mut self) {
        let days = self.catalog.days();
        self.sessions.filter.day = cycle_option(&days, self.sessions.filter.day.as_deref());
        self.sessions.cursor = 0;
    }

    pub fn cycle_topic_filter(&mut self) {
        let topics = self.catalog.topics();
        self.articles.topic = cycle_option(&topics, self.articles.topic.as_deref());
        self.articles.cursor = 0;
    }

    /// Jump from the selected session to its articles in the library.
    pub fn show_articles_for_selected_session(&mut self) {
        let visible = self.sessions.visible(&self.catalog);
        let Some(session) = visible.get(self.sessions.cursor) else {
            return;
        };
        let id = session.id.clone();
        self.articles.session = Some(id.clone());
        self.articles.topic = None;
        self.articles.query.clear();
        self.articles.cursor = 0;
        self.set_panel(Panel::Articles);
        self.set_status(format!("Articles for session {id}"));
    }

    /// Re-read the catalog from `data_dir`. On failure the old catalog stays.
    pub fn reload_catalog(&mut self) {
        match Catalog::load(&self.data_dir) {
            Ok(catalog) => {
                self.catalog = catalog;
                self.sessions.collapse_card();
                self.sessions.card = None;
                self.sessions.cursor = 0;
                self.articles.cursor = 0;
                self.set_status(format!(
                    "Reloaded {} sessions, {} articles",
                    self.catalog.sessions().len(),
                    self.catalog.articles().len()
                ));
            }
            Err(e) => self.push_error(e.to_string(), "catalog reload".into()),
        }
    }

    /// Push an error to the history, capping at [`ERROR_HISTORY_CAP`].
    pub fn push_error(&mut self, message: String, context: String) {
        tracing::warn!(%message, %context, "ui error");
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

/// Step `None → values[0] → … → values[n-1] → None`.
fn cycle_option(values: &[&str], current: Option<&str>) -> Option<String> {
    let next = match current {
        None => values.first(),
        Some(c) => values
            .iter()
            .position(|v| *v == c)
            .and_then(|i| values.get(i + 1)),
    };
    next.map(|s| s.to_string())
}
