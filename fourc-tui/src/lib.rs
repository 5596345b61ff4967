//! FourC TUI: curriculum presenter for the four leadership Cs.
//!
//! Panels:
//! 1. Sessions: filterable session list; Enter presents a session one item at a time
//! 2. Articles: the article library with topic, session and text filters
//! 3. Cognizance: four-section grid with drill-down into a section
//! 4. Help: keyboard reference and error history

pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::{AppState, Panel};
pub use config::Settings;

#[cfg(test)]
mod test_helpers;
