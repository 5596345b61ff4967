//! Session card controller: expand/collapse plus the reveal state it owns.

use crate::model::Session;
use crate::reveal::{build_sequence, RevealCommand, RevealItem, RevealState, Visibility};

/// One presented session. Each card owns its own sequence and step.
#[derive(Debug, Clone)]
pub struct SessionCard {
    session_id: String,
    items: Vec<RevealItem>,
    reveal: RevealState,
    expanded: bool,
}

impl SessionCard {
    pub fn new(session: &Session) -> Self {
        let items = build_sequence(session);
        let reveal = RevealState::new(items.len());
        Self {
            session_id: session.id.clone(),
            items,
            reveal,
            expanded: false,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn items(&self) -> &[RevealItem] {
        &self.items
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn expand(&mut self) {
        if !self.expanded {
            tracing::debug!(session = %self.session_id, items = self.items.len(), "card expanded");
            self.expanded = true;
        }
    }

    /// Collapsing always returns the reveal to its initial step.
    pub fn collapse(&mut self) {
        if self.expanded {
            tracing::debug!(session = %self.session_id, step = self.reveal.step(), "card collapsed");
            self.expanded = false;
            self.reveal.reset();
        }
    }

    pub fn toggle(&mut self) {
        if self.expanded {
            self.collapse();
        } else {
            self.expand();
        }
    }

    /// Apply a reveal command. Ignored while collapsed; returns whether it was applied.
    pub fn handle(&mut self, command: RevealCommand) -> bool {
        if !self.expanded {
            return false;
        }
        self.reveal.apply(command);
        true
    }

    /// Items paired with their visibility tier, invisible ones included.
    pub fn tiers(&self) -> impl Iterator<Item = (&RevealItem, Visibility)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (item, self.reveal.visibility(i)))
    }
}
