//! FourC CLI: list, filter and outline curriculum content.
//!
//! Commands:
//! - `sessions`: session table, filterable by category and day
//! - `articles`: article table, filterable by topic, session and text
//! - `show`: a session's full reveal sequence as a numbered outline
//! - `article`: one article with its linked sessions and why they link

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use fourc_core::{
    build_sequence, ArticleFilter, ArticleOrder, Catalog, FourC, RevealItem, SessionFilter,
};
use fourc_tui::{logging, Settings};

#[derive(Parser)]
#[command(name = "fourc", about = "FourC CLI — leadership curriculum catalog")]
struct Cli {
    /// Directory with sessions.json and articles.json. Overrides the config file.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Settings file (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity on stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sessions.
    Sessions {
        /// Only this category (Communication, Customer, Cognizance, Charisma).
        #[arg(long)]
        category: Option<FourC>,

        /// Only this day label.
        #[arg(long)]
        day: Option<String>,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List articles.
    Articles {
        /// Only articles tagged with this topic.
        #[arg(long)]
        topic: Option<String>,

        /// Only articles linked to this session id.
        #[arg(long)]
        session: Option<String>,

        /// Case-insensitive search over title, topics and text.
        #[arg(long)]
        search: Option<String>,

        /// Newest first instead of by number.
        #[arg(long, default_value_t = false)]
        newest: bool,

        /// Print JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print a session's reveal sequence as an outline.
    Show {
        /// Session id, e.g. 1-1.
        id: String,

        /// Print the sequence as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one article with its linked sessions.
    Article {
        number: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir;
    }
    let catalog = Catalog::load(&settings.data_dir)
        .with_context(|| format!("Failed to load catalog from {}", settings.data_dir.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sessions {
            category,
            day,
            json,
        } => run_sessions(&mut out, &catalog, &SessionFilter { category, day }, json),
        Commands::Articles {
            topic,
            session,
            search,
            newest,
            json,
        } => {
            let filter = ArticleFilter {
                topic,
                session,
                query: search,
            };
            let order = if newest {
                ArticleOrder::Newest
            } else {
                ArticleOrder::Number
            };
            run_articles(&mut out, &catalog, &filter, order, json)
        }
        Commands::Show { id, json } => run_show(&mut out, &catalog, &id, json),
        Commands::Article { number } => run_article(&mut out, &catalog, number),
    }
}

/// stderr subscriber; `FOURC_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(logging::filter(level))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_sessions(
    out: &mut impl Write,
    catalog: &Catalog,
    filter: &SessionFilter,
    json: bool,
) -> Result<()> {
    let sessions = catalog.filter_sessions(filter);
    if json {
        serde_json::to_writer_pretty(&mut *out, &sessions)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<6} {:<28} {:<10} {:<12} {:<14} {:>5}",
        "ID", "Name", "Day", "Time", "Category", "Items"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;
    for s in &sessions {
        let items = if s.is_empty_state() {
            "-".to_string()
        } else {
            build_sequence(s).len().to_string()
        };
        let category: &str = s.category().map_or(s.four_c.as_str(), |c| c.label());
        writeln!(
            out,
            "{:<6} {:<28} {:<10} {:<12} {:<14} {:>5}",
            s.id,
            truncate(&s.name, 28),
            s.day,
            s.time,
            category,
            items
        )?;
    }
    writeln!(out, "\n{} sessions", sessions.len())?;
    Ok(())
}

fn run_articles(
    out: &mut impl Write,
    catalog: &Catalog,
    filter: &ArticleFilter,
    order: ArticleOrder,
    json: bool,
) -> Result<()> {
    let articles = catalog.filter_articles(filter, order);
    if json {
        serde_json::to_writer_pretty(&mut *out, &articles)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:>4}  {:<14} {:<40} Topics", "#", "Date", "Title")?;
    writeln!(out, "{}", "-".repeat(80))?;
    for a in &articles {
        writeln!(
            out,
            "{:>4}  {:<14} {:<40} {}",
            a.number,
            a.date,
            truncate(&a.title, 40),
            a.topics.join(", ")
        )?;
    }
    writeln!(out, "\n{} articles", articles.len())?;
    Ok(())
}

fn run_show(out: &mut impl Write, catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let Some(session) = catalog.session(id) else {
        bail!("Unknown session: {id}");
    };
    let items = build_sequence(session);

    if json {
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} {} ({})", session.id, session.name, session.four_c)?;
    writeln!(out, "{} {}", session.day, session.time)?;
    writeln!(out)?;

    if session.is_empty_state() {
        writeln!(out, "{}", session.empty_reason())?;
        return Ok(());
    }

    for (step, item) in items.iter().enumerate() {
        write!(out, "{:>2}. [{}] ", step + 1, item.kind_label())?;
        match item {
            RevealItem::Description { text } => writeln!(out, "{text}")?,
            RevealItem::CoreTopics { topics } => writeln!(out, "{}", topics.join(", "))?,
            RevealItem::DiscussionPoint {
                text,
                index,
                total,
                children,
            } => {
                match item.resolve_video_break(&session.resources) {
                    Some(res) => writeln!(
                        out,
                        "({}/{}) Video: {} <{}>",
                        index + 1,
                        total,
                        res.title,
                        res.url
                    )?,
                    None => writeln!(out, "({}/{}) {text}", index + 1, total)?,
                }
                for child in children {
                    writeln!(out, "        {child}")?;
                }
            }
            RevealItem::Introspection { title, prompts } => {
                writeln!(out, "{title}")?;
                for prompt in prompts {
                    writeln!(out, "        - {prompt}")?;
                }
            }
            RevealItem::Resources { entries } => {
                writeln!(out)?;
                for r in entries {
                    match &r.source {
                        Some(source) => {
                            writeln!(out, "        {} ({source}) <{}>", r.title, r.url)?
                        }
                        None => writeln!(out, "        {} <{}>", r.title, r.url)?,
                    }
                }
            }
            RevealItem::ArticleLinks => {
                writeln!(out)?;
                for a in catalog.related_articles(session) {
                    write!(out, "        #{} {}", a.number, a.title)?;
                    match catalog.relevance(a, &session.id) {
                        Some(why) => writeln!(out, " — {why}")?,
                        None => writeln!(out)?,
                    }
                }
            }
        }
    }
    Ok(())
}

fn run_article(out: &mut impl Write, catalog: &Catalog, number: u32) -> Result<()> {
    let Some(article) = catalog.article(number) else {
        bail!("Unknown article: #{number}");
    };

    writeln!(out, "#{} {}", article.number, article.title)?;
    writeln!(out, "Date:   {}", article.date)?;
    writeln!(out, "Topics: {}", article.topics.join(", "))?;
    if let Some(content) = &article.content {
        writeln!(out, "\n{content}")?;
    }

    let sessions = catalog.sessions_for_article(article);
    writeln!(out, "\nLinked sessions:")?;
    if sessions.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for s in sessions {
        writeln!(out, "  {} {} ({})", s.id, s.name, s.day)?;
        if let Some(why) = catalog.relevance(article, &s.id) {
            writeln!(out, "      {why}")?;
        }
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_catalog() -> Catalog {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("data");
        Catalog::load(&dir).unwrap()
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["fourc", "sessions", "--category", "cognizance", "-vv"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Sessions { category, .. } => assert_eq!(category, Some(FourC::Cognizance)),
            _ => panic!("expected sessions"),
        }
    }

    #[test]
    fn cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["fourc", "sessions", "--category", "leadership"]).is_err());
    }

    #[test]
    fn sessions_table_marks_empty_sessions() {
        let catalog = sample_catalog();
        let text = capture(|out| run_sessions(out, &catalog, &SessionFilter::default(), false));
        assert!(text.contains("1-1"));
        assert!(text.contains("4 sessions"));
        let charisma = text.lines().find(|l| l.starts_with("2-2")).unwrap();
        assert!(charisma.trim_end().ends_with('-'));
    }

    #[test]
    fn sessions_json_is_filtered() {
        let catalog = sample_catalog();
        let filter = SessionFilter {
            category: Some(FourC::Cognizance),
            day: None,
        };
        let text = capture(|out| run_sessions(out, &catalog, &filter, true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["id"], "2-1");
    }

    #[test]
    fn articles_search_matches_content() {
        let catalog = sample_catalog();
        let filter = ArticleFilter {
            query: Some("CONCLUSION".into()),
            ..Default::default()
        };
        let text = capture(|out| {
            run_articles(out, &catalog, &filter, ArticleOrder::Number, false)
        });
        assert!(text.contains("1 articles"));
    }

    #[test]
    fn show_outline_groups_children_and_resolves_video() {
        let catalog = sample_catalog();
        let text = capture(|out| run_show(out, &catalog, "1-1", false));
        assert!(text.contains(" 1. [Overview]"));
        assert!(text.contains(" 9. [Related Articles]"));
        assert!(text.contains("Video: The Power of Listening <"));
        assert!(text.contains("(1/4)"));
        assert!(text.contains("#3 Listening as a Leadership Skill"));
    }

    #[test]
    fn show_empty_session_prints_reason() {
        let catalog = sample_catalog();
        let text = capture(|out| run_show(out, &catalog, "2-2", false));
        assert!(text.contains("delivered live"));
        assert!(!text.contains("[Overview]"));
    }

    #[test]
    fn show_json_is_tagged() {
        let catalog = sample_catalog();
        let text = capture(|out| run_show(out, &catalog, "2-1", true));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr[0]["kind"], "core_topics");
        assert_eq!(arr[1]["children"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn show_unknown_session_is_an_error() {
        let catalog = sample_catalog();
        let mut buf = Vec::new();
        let err = run_show(&mut buf, &catalog, "9-9", false).unwrap_err();
        assert!(err.to_string().contains("9-9"));
    }

    #[test]
    fn article_lists_linked_sessions_with_relevance() {
        let catalog = sample_catalog();
        let text = capture(|out| run_article(out, &catalog, 3));
        assert!(text.contains("1-1"));
        assert!(text.contains("2-1"));
        assert!(text.contains("Listening is the first step to reading the room."));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
