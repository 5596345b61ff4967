//! FourC core: curriculum data, progressive reveal, and the Cognizance drill-down.
//!
//! This crate has no I/O beyond reading the static catalog files:
//! - Session/article records and the four-category enumeration
//! - Catalog lookups, filters, and session ↔ article cross-links
//! - Reveal sequencer and per-card reveal state
//! - Two-level drill-down navigator

pub mod card;
pub mod catalog;
pub mod category;
pub mod cognizance;
pub mod drill_down;
pub mod model;
pub mod reveal;

pub use card::SessionCard;
pub use catalog::{ArticleFilter, ArticleOrder, Catalog, CatalogError, SessionFilter};
pub use category::{attributes, CategoryAttributes, FourC};
pub use cognizance::{CognizanceContent, CognizanceSection, SectionContent};
pub use drill_down::{DrillNavigator, DrillState, FocusTarget, GridCursor};
pub use model::{Article, Introspection, Resource, Session};
pub use reveal::{build_sequence, RevealCommand, RevealItem, RevealState, Visibility};

#[cfg(test)]
mod send_sync_checks {
    use super::*;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn catalog_is_send_sync() {
        assert_send::<Catalog>();
        assert_sync::<Catalog>();
    }

    #[test]
    fn card_and_navigator_are_send() {
        assert_send::<SessionCard>();
        assert_send::<DrillNavigator>();
    }
}
