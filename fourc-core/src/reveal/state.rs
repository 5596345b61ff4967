//! Step counter over a reveal sequence.
//!
//! All transitions saturate at `[0, total]`; none of them can fail.

/// Visibility tier of one item for a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Invisible,
    /// Already shown, drawn dimmed.
    Past,
    /// The most recently revealed item, drawn emphasized.
    Current,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Invisible)
    }
}

/// Discrete inputs the reveal controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealCommand {
    Advance,
    Retreat,
    RevealAll,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealState {
    step: usize,
    total: usize,
}

impl RevealState {
    pub fn new(total: usize) -> Self {
        Self { step: 0, total }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_initial(&self) -> bool {
        self.step == 0
    }

    pub fn is_complete(&self) -> bool {
        self.step == self.total
    }

    pub fn advance(&mut self) {
        if self.step < self.total {
            self.step += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    pub fn reveal_all(&mut self) {
        self.step = self.total;
    }

    pub fn reset(&mut self) {
        self.step = 0;
    }

    pub fn apply(&mut self, command: RevealCommand) {
        let before = self.step;
        match command {
            RevealCommand::Advance => self.advance(),
            RevealCommand::Retreat => self.retreat(),
            RevealCommand::RevealAll => self.reveal_all(),
            RevealCommand::Reset => self.reset(),
        }
        tracing::trace!(?command, before, after = self.step, total = self.total, "reveal");
    }

    pub fn visibility(&self, index: usize) -> Visibility {
        if index >= self.step {
            Visibility::Invisible
        } else if index + 1 == self.step {
            Visibility::Current
        } else {
            Visibility::Past
        }
    }

    /// `(step, total)` for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.step, self.total)
    }

    /// Revealed fraction in `[0.0, 1.0]`; an empty sequence counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.step as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_saturates_at_total() {
        let mut s = RevealState::new(3);
        for _ in 0..3 {
            s.advance();
        }
        assert_eq!(s.step(), 3);
        assert!(s.is_complete());
        s.advance();
        assert_eq!(s.step(), 3);
    }

    #[test]
    fn retreat_saturates_at_zero() {
        let mut s = RevealState::new(2);
        s.retreat();
        assert_eq!(s.step(), 0);
        s.advance();
        s.retreat();
        assert!(s.is_initial());
    }

    #[test]
    fn reveal_all_then_reset() {
        let mut s = RevealState::new(5);
        s.advance();
        s.apply(RevealCommand::RevealAll);
        assert_eq!(s.step(), 5);
        s.apply(RevealCommand::Reset);
        assert_eq!(s.step(), 0);
    }

    #[test]
    fn visibility_tiers() {
        let mut s = RevealState::new(4);
        assert!((0..4).all(|i| s.visibility(i) == Visibility::Invisible));

        s.advance();
        assert_eq!(s.visibility(0), Visibility::Current);
        assert!((1..4).all(|i| s.visibility(i) == Visibility::Invisible));

        s.reveal_all();
        assert!((0..3).all(|i| s.visibility(i) == Visibility::Past));
        assert_eq!(s.visibility(3), Visibility::Current);
    }

    #[test]
    fn fraction_of_empty_sequence() {
        let s = RevealState::new(0);
        assert!(s.is_complete());
        assert_eq!(s.fraction(), 1.0);
        assert_eq!(RevealState::new(4).fraction(), 0.0);
    }
}
