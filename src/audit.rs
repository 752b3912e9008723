//! Headless content audit: validates the catalog, renders the page for every
//! language and theme combination, and checks the rendered document.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::{Html, Selector};
use serde_json::json;
use thiserror::Error;
use yew::ServerRenderer;

use crate::content::{select, validate_catalog, CatalogError, Section};
use crate::frontend::{App, AppProps};
use crate::log::{log_event, set_log_level, LogLevel};
use crate::preferences::{Language, MemoryStore, PreferenceKey, Preferences, SharedStore, Theme};
use crate::reveal::RevealOptions;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const SNAPSHOT_DIR_ENV: &str = "PORTFOLIO_AUDIT_SNAPSHOT_DIR";
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{language}/{theme}: {problem}")]
    Render {
        language: &'static str,
        theme: &'static str,
        problem: String,
    },

    #[error("failed writing snapshot {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug)]
struct AuditConfig {
    snapshot_dir: Option<PathBuf>,
    log_level: LogLevel,
}

impl AuditConfig {
    fn from_env() -> Self {
        Self {
            snapshot_dir: parse_env_non_empty_string(SNAPSHOT_DIR_ENV).map(PathBuf::from),
            log_level: parse_log_level(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL),
        }
    }
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    let Some(raw) = parse_env_non_empty_string(name) else {
        return default;
    };

    LogLevel::parse(&raw).unwrap_or(default)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AuditConfig::from_env();
    set_log_level(config.log_level);

    validate_catalog().map_err(AuditError::from)?;
    log_event(LogLevel::Info, "catalog_valid", json!({}));

    let mut rendered = 0;
    for language in Language::ALL {
        for theme in [Theme::Light, Theme::Dark] {
            let prefs = Preferences { theme, language };
            let html = render_page(&[
                (PreferenceKey::Theme, theme.as_str()),
                (PreferenceKey::Language, language.as_str()),
            ])
            .await;

            check_rendered(&html, prefs).map_err(|problem| AuditError::Render {
                language: language.as_str(),
                theme: theme.as_str(),
                problem,
            })?;

            if let Some(dir) = config.snapshot_dir.as_deref() {
                write_snapshot(dir, prefs, &html)?;
            }

            log_event(
                LogLevel::Debug,
                "render_checked",
                json!({
                    "language": language.as_str(),
                    "theme": theme.as_str(),
                    "bytes": html.len(),
                }),
            );
            rendered += 1;
        }
    }

    log_event(LogLevel::Info, "audit_passed", json!({ "renders": rendered }));
    Ok(())
}

/// Renders the page as a fresh visitor whose storage holds `seed`.
pub async fn render_page(seed: &[(PreferenceKey, &'static str)]) -> String {
    let seed = seed.to_vec();

    ServerRenderer::<App>::with_props(move || AppProps {
        store: SharedStore::new(MemoryStore::seeded(&seed)),
        reveal: RevealOptions::default(),
    })
    .hydratable(false)
    .render()
    .await
}

/// Checks structural expectations of one rendered page.
pub fn check_rendered(html: &str, prefs: Preferences) -> Result<(), String> {
    let document = Html::parse_fragment(html);
    let copy = select(prefs.language);

    for section in Section::ALL {
        let count = count_matches(&document, &format!("#{}", section.id()))?;
        if count != 1 {
            return Err(format!("anchor `{}` found {count} times", section.id()));
        }
    }

    let root = parse_selector("div.page")?;
    let Some(root) = document.select(&root).next() else {
        return Err("page root missing".to_string());
    };
    if root.value().attr("data-theme") != Some(prefs.theme.as_str()) {
        return Err(format!("expected data-theme `{}`", prefs.theme.as_str()));
    }
    if root.value().attr("lang") != Some(prefs.language.as_str()) {
        return Err(format!("expected lang `{}`", prefs.language.as_str()));
    }

    let nav = parse_selector("button.nav-link")?;
    let labels: Vec<String> = document
        .select(&nav)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();
    let expected: Vec<&str> = Section::ALL
        .into_iter()
        .map(|section| section.label(copy))
        .collect();
    if labels != expected {
        return Err(format!("nav labels {labels:?} differ from {expected:?}"));
    }

    if !document.root_element().text().any(|text| text.contains(copy.footer)) {
        return Err("footer text missing".to_string());
    }

    Ok(())
}

fn parse_selector(selector: &str) -> Result<Selector, String> {
    Selector::parse(selector).map_err(|_| format!("bad selector `{selector}`"))
}

fn count_matches(document: &Html, selector: &str) -> Result<usize, String> {
    let selector = parse_selector(selector)?;
    Ok(document.select(&selector).count())
}

fn snapshot_path(dir: &Path, prefs: Preferences) -> PathBuf {
    dir.join(format!(
        "{}-{}.html",
        prefs.language.as_str(),
        prefs.theme.as_str()
    ))
}

fn write_snapshot(dir: &Path, prefs: Preferences, html: &str) -> Result<(), AuditError> {
    let path = snapshot_path(dir, prefs);

    fs::create_dir_all(dir)
        .and_then(|_| fs::write(&path, html))
        .map_err(|source| AuditError::Snapshot {
            path: path.clone(),
            source,
        })?;

    log_event(
        LogLevel::Info,
        "snapshot_written",
        json!({ "path": path.display().to_string() }),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_language_and_theme_passes_the_checks() {
        for language in Language::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                let html = render_page(&[
                    (PreferenceKey::Theme, theme.as_str()),
                    (PreferenceKey::Language, language.as_str()),
                ])
                .await;

                assert_eq!(check_rendered(&html, Preferences { theme, language }), Ok(()));
            }
        }
    }

    #[tokio::test]
    async fn mismatched_preferences_are_reported() {
        let html = render_page(&[(PreferenceKey::Theme, "dark")]).await;

        let light = Preferences::default();
        assert!(check_rendered(&html, light).is_err());

        let indonesian = Preferences {
            theme: Theme::Dark,
            language: Language::Id,
        };
        assert!(check_rendered(&html, indonesian).is_err());
    }

    #[test]
    fn missing_anchor_is_reported() {
        let html = r#"<div class="page" data-theme="light" lang="en"><section id="home"></section></div>"#;

        let problem = check_rendered(html, Preferences::default()).expect_err("anchors missing");
        assert!(problem.contains("projects"), "{problem}");
    }

    #[test]
    fn snapshot_is_named_after_language_and_theme() {
        let prefs = Preferences {
            theme: Theme::Dark,
            language: Language::Id,
        };

        assert_eq!(
            snapshot_path(Path::new("/tmp/audit"), prefs),
            PathBuf::from("/tmp/audit/id-dark.html")
        );
    }

    #[test]
    fn snapshots_are_written_to_the_configured_directory() {
        let dir = std::env::temp_dir().join(format!("portfolio-audit-{}", std::process::id()));

        write_snapshot(&dir, Preferences::default(), "<div></div>").expect("snapshot written");
        let written = fs::read_to_string(dir.join("en-light.html")).expect("snapshot readable");

        assert_eq!(written, "<div></div>");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn log_level_env_falls_back_on_unknown_values() {
        std::env::set_var("PORTFOLIO_TEST_LOG_LEVEL_VALID", "debug");
        std::env::set_var("PORTFOLIO_TEST_LOG_LEVEL_BOGUS", "loud");

        assert_eq!(
            parse_log_level("PORTFOLIO_TEST_LOG_LEVEL_VALID", LogLevel::Info),
            LogLevel::Debug
        );
        assert_eq!(
            parse_log_level("PORTFOLIO_TEST_LOG_LEVEL_BOGUS", LogLevel::Info),
            LogLevel::Info
        );
        assert_eq!(
            parse_log_level("PORTFOLIO_TEST_LOG_LEVEL_UNSET", LogLevel::Warn),
            LogLevel::Warn
        );
    }

    #[test]
    fn blank_env_values_read_as_unset() {
        std::env::set_var("PORTFOLIO_TEST_BLANK_DIR", "   ");

        assert_eq!(parse_env_non_empty_string("PORTFOLIO_TEST_BLANK_DIR"), None);
    }
}
