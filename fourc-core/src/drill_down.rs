//! Drill-down state machine for the Cognizance grid.
//!
//! Two levels only: the grid, and one section reached directly from it.
//! `open` is only callable through a [`GridCursor`], which exists only while
//! the navigator is on the grid, so there is no section → section transition.

use crate::cognizance::CognizanceSection;

/// Where the navigator currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrillState {
    #[default]
    Grid,
    Section(CognizanceSection),
}

impl DrillState {
    pub fn is_top_level(&self) -> bool {
        matches!(self, DrillState::Grid)
    }

    pub fn section(&self) -> Option<CognizanceSection> {
        match self {
            DrillState::Grid => None,
            DrillState::Section(s) => Some(*s),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DrillState::Grid => "Cognizance",
            DrillState::Section(s) => s.label(),
        }
    }
}

/// Presentation hook fired once per transition (scroll to top, move focus).
pub trait FocusTarget {
    fn request_focus(&mut self);
}

/// Navigator owned by one Cognizance view.
#[derive(Debug, Clone, Default)]
pub struct DrillNavigator {
    state: DrillState,
}

impl DrillNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DrillState {
        self.state
    }

    /// Access to `open`; `None` unless the navigator is on the grid.
    pub fn grid(&mut self) -> Option<GridCursor<'_>> {
        match self.state {
            DrillState::Grid => Some(GridCursor { nav: self }),
            DrillState::Section(_) => None,
        }
    }

    /// Return to the grid. Returns false (and fires nothing) when already there.
    pub fn back(&mut self, focus: &mut dyn FocusTarget) -> bool {
        match self.state {
            DrillState::Grid => false,
            DrillState::Section(from) => {
                tracing::debug!(section = from.slug(), "drill back to grid");
                self.state = DrillState::Grid;
                focus.request_focus();
                true
            }
        }
    }
}

/// Proof that the navigator is on the grid.
#[derive(Debug)]
pub struct GridCursor<'a> {
    nav: &'a mut DrillNavigator,
}

impl GridCursor<'_> {
    pub fn open(self, section: CognizanceSection, focus: &mut dyn FocusTarget) {
        tracing::debug!(section = section.slug(), "drill open");
        self.nav.state = DrillState::Section(section);
        focus.request_focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter(usize);

    impl FocusTarget for Counter {
        fn request_focus(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn starts_on_grid() {
        let nav = DrillNavigator::new();
        assert_eq!(nav.state(), DrillState::Grid);
        assert!(nav.state().is_top_level());
    }

    #[test]
    fn open_then_back() {
        let mut nav = DrillNavigator::new();
        let mut focus = Counter::default();

        nav.grid()
            .unwrap()
            .open(CognizanceSection::Culture, &mut focus);
        assert_eq!(nav.state(), DrillState::Section(CognizanceSection::Culture));
        assert_eq!(focus.0, 1);

        assert!(nav.back(&mut focus));
        assert_eq!(nav.state(), DrillState::Grid);
        assert_eq!(focus.0, 2);
    }

    #[test]
    fn back_on_grid_is_noop_without_focus() {
        let mut nav = DrillNavigator::new();
        let mut focus = Counter::default();
        assert!(!nav.back(&mut focus));
        assert_eq!(nav.state(), DrillState::Grid);
        assert_eq!(focus.0, 0);
    }

    #[test]
    fn open_unreachable_from_section() {
        let mut nav = DrillNavigator::new();
        let mut focus = Counter::default();
        nav.grid()
            .unwrap()
            .open(CognizanceSection::Perspective, &mut focus);
        assert!(nav.grid().is_none());
    }

    #[test]
    fn state_description() {
        assert_eq!(DrillState::Grid.description(), "Cognizance");
        assert_eq!(
            DrillState::Section(CognizanceSection::Culture).description(),
            "Culture"
        );
        assert_eq!(DrillState::Grid.section(), None);
    }
}
