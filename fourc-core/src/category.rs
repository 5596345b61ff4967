//! The four leadership dimensions and their display attributes.
//!
//! Every component that needs the category set reads [`FourC::ALL`]; display
//! attributes come from [`attributes`], a total function over
//! `Option<FourC>` so that an unrecognized category string still renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four fixed leadership dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FourC {
    Communication,
    Customer,
    Cognizance,
    Charisma,
}

impl FourC {
    /// Display order used by filters, legends and counts.
    pub const ALL: [FourC; 4] = [
        FourC::Communication,
        FourC::Customer,
        FourC::Cognizance,
        FourC::Charisma,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FourC::Communication => "Communication",
            FourC::Customer => "Customer",
            FourC::Cognizance => "Cognizance",
            FourC::Charisma => "Charisma",
        }
    }

    pub fn index(self) -> usize {
        match self {
            FourC::Communication => 0,
            FourC::Customer => 1,
            FourC::Cognizance => 2,
            FourC::Charisma => 3,
        }
    }

    /// Parse a category name leniently (case and surrounding whitespace ignored).
    pub fn parse(name: &str) -> Option<FourC> {
        let name = name.trim();
        FourC::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(name))
    }

    /// Step a filter through `None → Communication → … → Charisma → None`.
    pub fn cycle(current: Option<FourC>) -> Option<FourC> {
        match current {
            None => Some(FourC::ALL[0]),
            Some(c) => FourC::ALL.get(c.index() + 1).copied(),
        }
    }
}

impl fmt::Display for FourC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for [`FourC::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of Communication, Customer, Cognizance, Charisma)")]
pub struct UnknownCategory(pub String);

impl FromStr for FourC {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FourC::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Presentation attributes attached to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAttributes {
    pub label: &'static str,
    /// Two-letter badge shown in compact lists.
    pub code: &'static str,
    pub rgb: (u8, u8, u8),
    pub tagline: &'static str,
}

/// Neutral attributes for sessions whose category string is not recognized.
pub const UNCATEGORIZED: CategoryAttributes = CategoryAttributes {
    label: "Uncategorized",
    code: "--",
    rgb: (150, 150, 160),
    tagline: "",
};

/// Display attributes for a category, with a neutral fallback for `None`.
pub fn attributes(category: Option<FourC>) -> CategoryAttributes {
    match category {
        Some(FourC::Communication) => CategoryAttributes {
            label: "Communication",
            code: "CM",
            rgb: (0, 200, 255),
            tagline: "Say what matters, hear what is meant",
        },
        Some(FourC::Customer) => CategoryAttributes {
            label: "Customer",
            code: "CU",
            rgb: (0, 230, 130),
            tagline: "Start from the people you serve",
        },
        Some(FourC::Cognizance) => CategoryAttributes {
            label: "Cognizance",
            code: "CG",
            rgb: (170, 120, 255),
            tagline: "Notice yourself, your team and the room",
        },
        Some(FourC::Charisma) => CategoryAttributes {
            label: "Charisma",
            code: "CH",
            rgb: (255, 150, 40),
            tagline: "Lead so others want to follow",
        },
        None => UNCATEGORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(FourC::parse("cognizance"), Some(FourC::Cognizance));
        assert_eq!(FourC::parse("  CHARISMA "), Some(FourC::Charisma));
        assert_eq!(FourC::parse("Leadership"), None);
        assert!("Customer".parse::<FourC>().is_ok());
        assert!("nope".parse::<FourC>().is_err());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, c) in FourC::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn cycle_visits_every_category_then_clears() {
        let mut current = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            current = FourC::cycle(current);
            seen.push(current.unwrap());
        }
        assert_eq!(seen, FourC::ALL.to_vec());
        assert_eq!(FourC::cycle(current), None);
    }

    #[test]
    fn attributes_are_total() {
        for c in FourC::ALL {
            assert_eq!(attributes(Some(c)).label, c.label());
        }
        assert_eq!(attributes(None), UNCATEGORIZED);
    }
}
