//! Session and article records as they appear in the static JSON files.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::FourC;

/// Shown for an empty session that carries no explanation of its own.
pub const DEFAULT_EMPTY_REASON: &str = "Content for this session is coming soon.";

/// One scheduled unit of the curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub day: String,
    pub time: String,
    /// Raw category string; see [`Session::category`].
    #[serde(rename = "fourC")]
    pub four_c: String,
    /// `None` only when the field is missing from the source record.
    #[serde(default)]
    pub core_topics: Option<Vec<String>>,
    #[serde(default)]
    pub articles: Vec<u32>,
    #[serde(default)]
    pub has_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub discussion_points: Vec<String>,
    #[serde(default)]
    pub introspections: Vec<Introspection>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Session {
    pub fn category(&self) -> Option<FourC> {
        FourC::parse(&self.four_c)
    }

    /// True when there is nothing to present: no content and no related articles.
    pub fn is_empty_state(&self) -> bool {
        !self.has_content && self.articles.is_empty()
    }

    pub fn empty_reason(&self) -> &str {
        self.empty_reason.as_deref().unwrap_or(DEFAULT_EMPTY_REASON)
    }

    /// Key under which articles store their relevance note for this session.
    pub fn relevance_key(&self) -> String {
        relevance_key(&self.id)
    }
}

/// Relevance maps are keyed by the session id with dashes replaced by underscores.
pub fn relevance_key(session_id: &str) -> String {
    session_id.replace('-', "_")
}

/// A titled block of reflection prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Introspection {
    pub title: String,
    #[serde(default)]
    pub prompts: Vec<String>,
}

/// An external link attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A library entry, optionally tied to one or more sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub number: u32,
    pub title: String,
    /// Free text, e.g. "March 2021" or "2021-03-14".
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub sessions: Vec<String>,
    #[serde(default)]
    pub relevance: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Article {
    pub fn relevance_for(&self, session_id: &str) -> Option<&str> {
        self.relevance
            .get(&relevance_key(session_id))
            .map(String::as_str)
    }

    /// Best-effort parse of the free-text date, used only for ordering.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_loose_date(&self.date)
    }

    pub fn matches_query(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self
                .topics
                .iter()
                .any(|t| t.to_lowercase().contains(needle_lower))
            || self
                .content
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle_lower))
    }
}

/// Month-only dates resolve to the first of the month; year-only to January 1.
fn parse_loose_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for fmt in ["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(raw, fmt) {
            return Some(d);
        }
    }
    for fmt in ["%B %Y", "%b %Y", "%Y-%m"] {
        let padded = format!("1 {raw}");
        let padded_fmt = format!("%d {fmt}");
        if let Ok(d) = NaiveDate::parse_from_str(&padded, &padded_fmt) {
            return Some(d);
        }
    }
    raw.parse::<i32>()
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_json() -> &'static str {
        r#"{
            "id": "1-2",
            "name": "Listening Deeply",
            "day": "Day 1",
            "time": "10:00",
            "fourC": "Communication",
            "coreTopics": ["Active listening"],
            "articles": [3],
            "hasContent": true,
            "discussionPoints": ["Why listening fails"]
        }"#
    }

    #[test]
    fn session_deserializes_with_missing_optionals() {
        let s: Session = serde_json::from_str(session_json()).unwrap();
        assert_eq!(s.category(), Some(FourC::Communication));
        assert_eq!(s.core_topics.as_deref().map(<[String]>::len), Some(1));
        assert!(s.description.is_none());
        assert!(s.introspections.is_empty());
        assert!(s.resources.is_empty());
        assert!(!s.is_empty_state());
    }

    #[test]
    fn absent_core_topics_stay_absent() {
        let s: Session = serde_json::from_str(
            r#"{"id":"2-1","name":"x","day":"Day 2","time":"9:00","fourC":"Charisma"}"#,
        )
        .unwrap();
        assert!(s.core_topics.is_none());
        assert!(s.is_empty_state());
        assert_eq!(s.empty_reason(), DEFAULT_EMPTY_REASON);
    }

    #[test]
    fn relevance_uses_underscore_key() {
        let mut relevance = BTreeMap::new();
        relevance.insert("1_2".to_string(), "Builds on listening".to_string());
        let article = Article {
            number: 3,
            title: "On Listening".into(),
            date: "March 2021".into(),
            topics: vec![],
            sessions: vec!["1-2".into()],
            relevance,
            content: None,
        };
        assert_eq!(article.relevance_for("1-2"), Some("Builds on listening"));
        assert_eq!(article.relevance_for("1-3"), None);
    }

    #[test]
    fn loose_dates() {
        let d = |s: &str| parse_loose_date(s);
        assert_eq!(d("2021-03-14"), NaiveDate::from_ymd_opt(2021, 3, 14));
        assert_eq!(d("March 14, 2021"), NaiveDate::from_ymd_opt(2021, 3, 14));
        assert_eq!(d("March 2021"), NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(d("2019"), NaiveDate::from_ymd_opt(2019, 1, 1));
        assert_eq!(d("sometime"), None);
        assert_eq!(d(""), None);
    }
}
