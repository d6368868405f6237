//! Site content bundled into the binary and validated at startup.

use serde::Deserialize;
use thiserror::Error;

use crate::config::DEFAULT_ADVANCE_INTERVAL_MS;
use crate::media::MediaKind;

const BUNDLED: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("carousel `{title}` has no media")]
    EmptyMedia { title: String },
    #[error("carousel `{title}` has a zero advance interval")]
    ZeroInterval { title: String },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub services: Vec<Service>,
    pub portfolio: Vec<PortfolioPanel>,
    pub stats: Vec<Stat>,
    pub faqs: Vec<Faq>,
    pub offices: Vec<Office>,
    pub regions: Vec<String>,
    pub contact: Contact,
    pub social: Vec<SocialLink>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub logo: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub title: String,
    /// Card heading, falls back to `title`.
    #[serde(default)]
    pub heading: Option<String>,
    pub subtitle: String,
    pub kind: MediaKind,
    pub urls: Vec<String>,
    #[serde(default = "default_interval")]
    pub interval_ms: u32,
}

impl Service {
    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Center,
    Right,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PanelHeight {
    Short,
    Tall,
}

impl PanelHeight {
    pub fn class(self) -> &'static str {
        match self {
            PanelHeight::Short => "panel-short",
            PanelHeight::Tall => "panel-tall",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PortfolioPanel {
    pub title: String,
    pub column: Column,
    pub height: PanelHeight,
    pub urls: Vec<String>,
    #[serde(default = "default_interval")]
    pub interval_ms: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub number: String,
    pub label: String,
    pub subtitle: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Office {
    pub name: String,
    pub lines: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Contact {
    pub admin_name: String,
    pub whatsapp_number: String,
    pub whatsapp_display: String,
    pub whatsapp_message: String,
    pub phone_display: String,
    pub phone_hours: String,
}

impl Contact {
    pub fn whatsapp_url(&self) -> String {
        crate::config::whatsapp_url(&self.whatsapp_number, &self.whatsapp_message)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

fn default_interval() -> u32 {
    DEFAULT_ADVANCE_INTERVAL_MS
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let services = self.services.iter().map(|s| (&s.title, &s.urls, s.interval_ms));
        let panels = self.portfolio.iter().map(|p| (&p.title, &p.urls, p.interval_ms));

        for (title, urls, interval_ms) in services.chain(panels) {
            if urls.is_empty() {
                return Err(ContentError::EmptyMedia { title: title.clone() });
            }
            if interval_ms == 0 {
                return Err(ContentError::ZeroInterval { title: title.clone() });
            }
        }
        Ok(())
    }

    pub fn panels_in(&self, column: Column) -> impl Iterator<Item = &PortfolioPanel> {
        self.portfolio.iter().filter(move |p| p.column == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(services: &str) -> String {
        format!(
            r##"{{
                "brand": {{ "name": "B", "tagline": "#T", "logo": "/logo.png" }},
                "services": {services},
                "portfolio": [],
                "stats": [],
                "faqs": [],
                "offices": [],
                "regions": [],
                "contact": {{
                    "admin_name": "A", "whatsapp_number": "1", "whatsapp_display": "+1",
                    "whatsapp_message": "hi", "phone_display": "0", "phone_hours": "always"
                }},
                "social": []
            }}"##
        )
    }

    #[test]
    fn bundled_content_is_valid() {
        let content = SiteContent::bundled().expect("bundled content should load");
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.portfolio.len(), 5);
        assert_eq!(content.stats.len(), 6);
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.offices.len(), 3);
        assert_eq!(content.regions.len(), 6);
        assert_eq!(content.social.len(), 3);
    }

    #[test]
    fn bundled_services_keep_declared_order_and_kinds() {
        let content = SiteContent::bundled().unwrap();
        let kinds: Vec<_> = content.services.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![MediaKind::Image, MediaKind::Image, MediaKind::Video]);
        assert_eq!(content.services[0].urls[0], "/yearbook1.jpg");
        assert_eq!(content.services[2].heading(), "Video");
        assert_eq!(content.services[0].heading(), "Yearbook Design");
    }

    #[test]
    fn portfolio_columns_split_two_one_two() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.panels_in(Column::Left).count(), 2);
        assert_eq!(content.panels_in(Column::Center).count(), 1);
        assert_eq!(content.panels_in(Column::Right).count(), 2);
        assert!(content.portfolio.iter().all(|p| p.interval_ms == 5000));
    }

    #[test]
    fn bundled_whatsapp_link() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(
            content.contact.whatsapp_url(),
            "https://wa.me/628111224478?text=Mau%20nanya-nanya%20min%20soal%20Happy%20Friends%20Project"
        );
    }

    #[test]
    fn interval_defaults_when_omitted() {
        let raw = minimal(r#"[{ "title": "S", "subtitle": "", "kind": "image", "urls": ["/a.jpg"] }]"#);
        let content = SiteContent::from_json(&raw).unwrap();
        assert_eq!(content.services[0].interval_ms, 5000);
    }

    #[test]
    fn empty_media_list_is_rejected() {
        let raw = minimal(r#"[{ "title": "Empty", "subtitle": "", "kind": "image", "urls": [] }]"#);
        match SiteContent::from_json(&raw) {
            Err(ContentError::EmptyMedia { title }) => assert_eq!(title, "Empty"),
            other => panic!("Expected EmptyMedia, got {:?}", other),
        }
    }

    #[test]
    fn zero_interval_is_rejected() {
        let raw = minimal(
            r#"[{ "title": "Fast", "subtitle": "", "kind": "image", "urls": ["/a.jpg"], "interval_ms": 0 }]"#,
        );
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(ContentError::ZeroInterval { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse site content"));
    }
}
