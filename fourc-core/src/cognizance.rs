//! Cognizance sub-sections shown in the drill-down grid, and their content.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of sections reachable from the Cognizance grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CognizanceSection {
    Culture,
    SelfAwareness,
    Situational,
    Perspective,
}

impl CognizanceSection {
    /// Grid order, left to right then top to bottom.
    pub const ALL: [CognizanceSection; 4] = [
        CognizanceSection::Culture,
        CognizanceSection::SelfAwareness,
        CognizanceSection::Situational,
        CognizanceSection::Perspective,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CognizanceSection::Culture => "culture",
            CognizanceSection::SelfAwareness => "self-awareness",
            CognizanceSection::Situational => "situational",
            CognizanceSection::Perspective => "perspective",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CognizanceSection::Culture => "Culture",
            CognizanceSection::SelfAwareness => "Self-Awareness",
            CognizanceSection::Situational => "Situational Awareness",
            CognizanceSection::Perspective => "Perspective Taking",
        }
    }

    pub fn from_slug(slug: &str) -> Option<CognizanceSection> {
        CognizanceSection::ALL.into_iter().find(|s| s.slug() == slug)
    }

    pub fn grid_index(self) -> usize {
        match self {
            CognizanceSection::Culture => 0,
            CognizanceSection::SelfAwareness => 1,
            CognizanceSection::Situational => 2,
            CognizanceSection::Perspective => 3,
        }
    }
}

impl fmt::Display for CognizanceSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Detail text for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// Contents of `cognizance.json`: section slug → detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CognizanceContent {
    sections: BTreeMap<CognizanceSection, SectionContent>,
}

impl CognizanceContent {
    pub fn new(sections: BTreeMap<CognizanceSection, SectionContent>) -> Self {
        Self { sections }
    }

    pub fn section(&self, section: CognizanceSection) -> Option<&SectionContent> {
        self.sections.get(&section)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_through_from_slug() {
        for s in CognizanceSection::ALL {
            assert_eq!(CognizanceSection::from_slug(s.slug()), Some(s));
        }
        assert_eq!(CognizanceSection::from_slug("Culture"), None);
        assert_eq!(CognizanceSection::from_slug("ethics"), None);
    }

    #[test]
    fn content_keys_by_slug() {
        let json = r#"{
            "culture": {"title": "Culture", "summary": "Norms", "points": ["a", "b"]},
            "perspective": {"title": "Perspective"}
        }"#;
        let content: CognizanceContent = serde_json::from_str(json).unwrap();
        let culture = content.section(CognizanceSection::Culture).unwrap();
        assert_eq!(culture.points.len(), 2);
        assert!(content
            .section(CognizanceSection::Perspective)
            .unwrap()
            .points
            .is_empty());
        assert!(content.section(CognizanceSection::Situational).is_none());
    }
}
