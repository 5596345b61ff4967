//! In-memory catalog of sessions and articles, loaded from static JSON.
//!
//! Lookups, filters and cross-links between sessions and articles live here.
//! Loading is the only fallible operation.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::category::FourC;
use crate::cognizance::CognizanceContent;
use crate::model::{Article, Session};

pub const SESSIONS_FILE: &str = "sessions.json";
pub const ARTICLES_FILE: &str = "articles.json";
pub const COGNIZANCE_FILE: &str = "cognizance.json";

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate session id '{0}'")]
    DuplicateSession(String),

    #[error("duplicate article number {0}")]
    DuplicateArticle(u32),
}

/// Conjunctive session filter; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    pub category: Option<FourC>,
    pub day: Option<String>,
}

impl SessionFilter {
    pub fn matches(&self, session: &Session) -> bool {
        self.category.map_or(true, |c| session.category() == Some(c))
            && self.day.as_deref().map_or(true, |d| session.day == d)
    }
}

/// Conjunctive article filter. `query` is matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub topic: Option<String>,
    pub session: Option<String>,
    pub query: Option<String>,
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(topic) = &self.topic {
            if !article.topics.iter().any(|t| t.eq_ignore_ascii_case(topic)) {
                return false;
            }
        }
        if let Some(session) = &self.session {
            if !article.sessions.iter().any(|s| s == session) {
                return false;
            }
        }
        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => article.matches_query(&q.to_lowercase()),
            _ => true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.topic.is_none()
            && self.session.is_none()
            && self.query.as_deref().map_or(true, |q| q.trim().is_empty())
    }
}

/// Article ordering for library listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArticleOrder {
    /// By article number, ascending.
    #[default]
    Number,
    /// Newest parsed date first; unparseable dates last, by number.
    Newest,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    sessions: Vec<Session>,
    articles: Vec<Article>,
    cognizance: CognizanceContent,
    session_index: HashMap<String, usize>,
    article_index: HashMap<u32, usize>,
}

impl Catalog {
    /// Load `sessions.json`, `articles.json` and, if present, `cognizance.json`.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let _span = tracing::info_span!("catalog_load", dir = %dir.display()).entered();

        let sessions: Vec<Session> = read_json(&dir.join(SESSIONS_FILE))?;
        let articles: Vec<Article> = read_json(&dir.join(ARTICLES_FILE))?;

        let cognizance_path = dir.join(COGNIZANCE_FILE);
        let cognizance = if cognizance_path.is_file() {
            read_json(&cognizance_path)?
        } else {
            tracing::debug!(path = %cognizance_path.display(), "no cognizance content");
            CognizanceContent::default()
        };

        let catalog = Self::from_parts(sessions, articles, cognizance)?;
        tracing::info!(
            sessions = catalog.sessions.len(),
            articles = catalog.articles.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_parts(
        sessions: Vec<Session>,
        articles: Vec<Article>,
        cognizance: CognizanceContent,
    ) -> Result<Self, CatalogError> {
        let mut session_index = HashMap::with_capacity(sessions.len());
        for (i, s) in sessions.iter().enumerate() {
            if session_index.insert(s.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateSession(s.id.clone()));
            }
        }
        let mut article_index = HashMap::with_capacity(articles.len());
        for (i, a) in articles.iter().enumerate() {
            if article_index.insert(a.number, i).is_some() {
                return Err(CatalogError::DuplicateArticle(a.number));
            }
        }
        Ok(Self {
            sessions,
            articles,
            cognizance,
            session_index,
            article_index,
        })
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn cognizance(&self) -> &CognizanceContent {
        &self.cognizance
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.session_index.get(id).map(|&i| &self.sessions[i])
    }

    pub fn article(&self, number: u32) -> Option<&Article> {
        self.article_index.get(&number).map(|&i| &self.articles[i])
    }

    /// A session's related articles in the session's order; unknown numbers are skipped.
    pub fn related_articles<'a>(&'a self, session: &Session) -> Vec<&'a Article> {
        session
            .articles
            .iter()
            .filter_map(|&n| {
                let found = self.article(n);
                if found.is_none() {
                    tracing::warn!(session = %session.id, article = n, "unknown article reference");
                }
                found
            })
            .collect()
    }

    /// Sessions an article links to, in the article's order; unknown ids are skipped.
    pub fn sessions_for_article<'a>(&'a self, article: &Article) -> Vec<&'a Session> {
        article
            .sessions
            .iter()
            .filter_map(|id| {
                let found = self.session(id);
                if found.is_none() {
                    tracing::warn!(article = article.number, session = %id, "unknown session reference");
                }
                found
            })
            .collect()
    }

    pub fn relevance<'a>(&self, article: &'a Article, session_id: &str) -> Option<&'a str> {
        article.relevance_for(session_id)
    }

    pub fn filter_sessions<'a>(&'a self, filter: &SessionFilter) -> Vec<&'a Session> {
        self.sessions.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn filter_articles<'a>(
        &'a self,
        filter: &ArticleFilter,
        order: ArticleOrder,
    ) -> Vec<&'a Article> {
        let mut out: Vec<&Article> = self.articles.iter().filter(|a| filter.matches(a)).collect();
        match order {
            ArticleOrder::Number => out.sort_by_key(|a| a.number),
            ArticleOrder::Newest => out.sort_by(|a, b| {
                b.parsed_date()
                    .cmp(&a.parsed_date())
                    .then(a.number.cmp(&b.number))
            }),
        }
        out
    }

    /// Distinct session days in first-seen order.
    pub fn days(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.sessions
            .iter()
            .map(|s| s.day.as_str())
            .filter(|d| seen.insert(*d))
            .collect()
    }

    /// Sorted, de-duplicated article topics.
    pub fn topics(&self) -> Vec<&str> {
        self.articles
            .iter()
            .flat_map(|a| a.topics.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Session count per category in [`FourC::ALL`] order.
    pub fn category_counts(&self) -> [(FourC, usize); 4] {
        FourC::ALL.map(|c| {
            (
                c,
                self.sessions
                    .iter()
                    .filter(|s| s.category() == Some(c))
                    .count(),
            )
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
