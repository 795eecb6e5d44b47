//! Slider content loaded from a JSON export of the site's tables.
//!
//! The hosted backend is out of the picture here: the showcase reads the same
//! records from a local file. Each slider gets a list of [`Card`]s, which the
//! carousels treat as opaque.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sitedeck_core::SliderKind;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

impl Card {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub hero: Vec<Card>,
    #[serde(default)]
    pub services: Vec<Card>,
    #[serde(default)]
    pub impact_stories: Vec<Card>,
    #[serde(default)]
    pub projects: Vec<Card>,
    #[serde(default = "default_clients")]
    pub clients: Vec<Card>,
}

impl SiteContent {
    pub fn cards_for(&self, kind: SliderKind) -> &[Card] {
        match kind {
            SliderKind::Hero => &self.hero,
            SliderKind::Services => &self.services,
            SliderKind::ImpactStories => &self.impact_stories,
            SliderKind::Projects => &self.projects,
            SliderKind::Clients => &self.clients,
        }
    }
}

/// Partner list shown when the export has none of its own.
fn default_clients() -> Vec<Card> {
    [
        "Ministry of Urban Development, Government of India",
        "Ladakh Ecological Development Group (LEDeG)",
        "Central Water Commission (CWC)",
        "Inland Waterways Authority of India (IWAI)",
        "Chhattisgarh Environment Conservation Board (CECB)",
        "Jharkhand State Pollution Control Board (JSPCB)",
        "National Thermal Power Corporation (NTPC)",
        "Oil and Natural Gas Corporation (ONGC)",
    ]
    .into_iter()
    .map(Card::titled)
    .collect()
}

pub fn parse_site_content(data: &str) -> Result<SiteContent> {
    serde_json::from_str(data).context("decoding site content JSON")
}

pub fn load_site_content(path: &Path) -> Result<SiteContent> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading site content from {}", path.display()))?;
    let content = parse_site_content(&data)
        .with_context(|| format!("in {}", path.display()))?;
    info!(
        path = %path.display(),
        hero = content.hero.len(),
        services = content.services.len(),
        impact_stories = content.impact_stories.len(),
        projects = content.projects.len(),
        clients = content.clients.len(),
        "Loaded site content"
    );
    for kind in SliderKind::ALL {
        if content.cards_for(kind).is_empty() {
            debug!(slider = %kind, "Slider has no cards");
        }
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_clients_fall_back_to_partner_list() {
        let content = parse_site_content(r#"{ "services": [{ "title": "Audits" }] }"#)
            .expect("valid content");
        assert_eq!(content.cards_for(SliderKind::Services).len(), 1);
        assert!(content.hero.is_empty());
        assert_eq!(content.clients.len(), 8);
        assert_eq!(
            content.clients[2].title,
            "Central Water Commission (CWC)".to_string()
        );
    }

    #[test]
    fn explicit_clients_replace_the_fallback() {
        let content =
            parse_site_content(r#"{ "clients": [] }"#).expect("valid content");
        assert!(content.cards_for(SliderKind::Clients).is_empty());
    }

    #[test]
    fn card_fields_are_optional_beyond_title() {
        let content = parse_site_content(
            r#"{ "projects": [{ "title": "River survey", "subtitle": "2023", "points": ["a", "b"] }] }"#,
        )
        .expect("valid content");
        let card = &content.projects[0];
        assert_eq!(card.subtitle.as_deref(), Some("2023"));
        assert_eq!(card.points, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_site_content("{ \"hero\": 3 }").is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_site_content(Path::new("/nonexistent/site.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/site.json"));
    }
}
