//! Session → ordered list of disclosable items.

use serde::Serialize;

use crate::model::{Introspection, Resource, Session};

/// Discussion points starting with this marker link to a resource of the same title.
pub const VIDEO_BREAK_PREFIX: &str = "Video Break:";

/// One disclosable unit of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealItem {
    Description {
        text: String,
    },
    CoreTopics {
        topics: Vec<String>,
    },
    /// `index` is zero-based among top-level points; `children` are the
    /// numbered sub-points grouped under this one.
    DiscussionPoint {
        text: String,
        index: usize,
        total: usize,
        children: Vec<String>,
    },
    Introspection {
        title: String,
        prompts: Vec<String>,
    },
    Resources {
        entries: Vec<Resource>,
    },
    /// Render the session's related articles through a catalog lookup.
    ArticleLinks,
}

impl RevealItem {
    pub fn kind_label(&self) -> &'static str {
        match self {
            RevealItem::Description { .. } => "Overview",
            RevealItem::CoreTopics { .. } => "Core Topics",
            RevealItem::DiscussionPoint { .. } => "Discussion",
            RevealItem::Introspection { .. } => "Introspection",
            RevealItem::Resources { .. } => "Resources",
            RevealItem::ArticleLinks => "Related Articles",
        }
    }

    /// Title a video-break point refers to, with the marker stripped.
    pub fn video_break_title(&self) -> Option<&str> {
        match self {
            RevealItem::DiscussionPoint { text, .. } => text
                .strip_prefix(VIDEO_BREAK_PREFIX)
                .map(str::trim),
            _ => None,
        }
    }

    /// Resolve a video-break point against a session's resources by exact title.
    pub fn resolve_video_break<'a>(&self, resources: &'a [Resource]) -> Option<&'a Resource> {
        let title = self.video_break_title()?;
        resources.iter().find(|r| r.title == title)
    }
}

/// A top-level discussion point with the numbered points that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointGroup {
    pub text: String,
    pub children: Vec<String>,
}

/// True for strings that start with one or more digits, a dot and a space ("12. ").
pub fn is_numbered(point: &str) -> bool {
    let digits = point.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && point[digits..].starts_with(". ")
}

/// Group numbered points under the nearest preceding non-numbered point.
///
/// A numbered point with nothing before it to attach to becomes its own group.
pub fn group_points(points: &[String]) -> Vec<PointGroup> {
    let mut groups: Vec<PointGroup> = Vec::new();
    let mut has_parent = false;
    for point in points {
        if is_numbered(point) && has_parent {
            if let Some(parent) = groups.last_mut() {
                parent.children.push(point.clone());
                continue;
            }
        }
        has_parent = !is_numbered(point);
        groups.push(PointGroup {
            text: point.clone(),
            children: Vec::new(),
        });
    }
    groups
}

/// Build the reveal sequence for a session. Deterministic for equal input.
pub fn build_sequence(session: &Session) -> Vec<RevealItem> {
    let mut items = Vec::new();

    if let Some(text) = &session.description {
        items.push(RevealItem::Description { text: text.clone() });
    }

    if let Some(topics) = &session.core_topics {
        items.push(RevealItem::CoreTopics {
            topics: topics.clone(),
        });
    }

    let groups = group_points(&session.discussion_points);
    let total = groups.len();
    items.extend(
        groups
            .into_iter()
            .enumerate()
            .map(|(index, g)| RevealItem::DiscussionPoint {
                text: g.text,
                index,
                total,
                children: g.children,
            }),
    );

    items.extend(
        session
            .introspections
            .iter()
            .map(|Introspection { title, prompts }| RevealItem::Introspection {
                title: title.clone(),
                prompts: prompts.clone(),
            }),
    );

    if !session.resources.is_empty() {
        items.push(RevealItem::Resources {
            entries: session.resources.clone(),
        });
    }

    if !session.articles.is_empty() {
        items.push(RevealItem::ArticleLinks);
    }

    tracing::trace!(session = %session.id, items = items.len(), "built reveal sequence");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numbered_pattern() {
        assert!(is_numbered("1. Sub one"));
        assert!(is_numbered("12. Twelve"));
        assert!(!is_numbered("1.Sub"));
        assert!(!is_numbered("Point 1. x"));
        assert!(!is_numbered(". x"));
        assert!(!is_numbered(""));
    }

    #[test]
    fn groups_children_under_preceding_point() {
        let groups = group_points(&strings(&["Point A", "1. Sub one", "2. Sub two", "Point B"]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].text, "Point A");
        assert_eq!(groups[0].children, strings(&["1. Sub one", "2. Sub two"]));
        assert_eq!(groups[1].text, "Point B");
        assert!(groups[1].children.is_empty());
    }

    #[test]
    fn leading_numbered_points_stand_alone() {
        let groups = group_points(&strings(&["1. First", "2. Second", "Point", "1. Child"]));
        assert_eq!(groups.len(), 3);
        assert!(groups[0].children.is_empty());
        assert!(groups[1].children.is_empty());
        assert_eq!(groups[2].children, strings(&["1. Child"]));
    }

    #[test]
    fn video_break_resolution() {
        let item = RevealItem::DiscussionPoint {
            text: "Video Break: The Empty Chair".into(),
            index: 0,
            total: 1,
            children: vec![],
        };
        let resources = vec![
            Resource {
                title: "Other".into(),
                url: "https://example.org/a".into(),
                source: None,
            },
            Resource {
                title: "The Empty Chair".into(),
                url: "https://example.org/chair".into(),
                source: Some("YouTube".into()),
            },
        ];
        assert_eq!(item.video_break_title(), Some("The Empty Chair"));
        assert_eq!(
            item.resolve_video_break(&resources).map(|r| r.url.as_str()),
            Some("https://example.org/chair")
        );
        assert!(item.resolve_video_break(&resources[..1]).is_none());

        let plain = RevealItem::Description { text: "Video Break: x".into() };
        assert!(plain.video_break_title().is_none());
    }
}
