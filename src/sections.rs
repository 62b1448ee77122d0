use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Section — the editable content areas of the site
// ============================================================================

/// One editable content area. Statically enumerated; each section owns its
/// persistence endpoint and exactly one record/baseline pair at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Navbar,
    HeroSlider,
    Activities,
    Welcome,
    Services,
    Testimonials,
    TempleInfo,
    Footer,
}

impl Section {
    /// All sections, in the order the dashboard lists them.
    pub fn all() -> Vec<Section> {
        vec![
            Section::Navbar,
            Section::HeroSlider,
            Section::Activities,
            Section::Welcome,
            Section::Services,
            Section::Testimonials,
            Section::TempleInfo,
            Section::Footer,
        ]
    }

    /// Stable identifier; matches the backend's section_type values.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Navbar => "navbar",
            Section::HeroSlider => "hero_slider",
            Section::Activities => "activities",
            Section::Welcome => "welcome",
            Section::Services => "services",
            Section::Testimonials => "testimonials",
            Section::TempleInfo => "temple_info",
            Section::Footer => "footer",
        }
    }

    /// Human label shown in the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Navbar => "Navbar & Branding",
            Section::HeroSlider => "Hero Slider",
            Section::Activities => "Today's Activities",
            Section::Welcome => "Welcome Section",
            Section::Services => "Our Services",
            Section::Testimonials => "Testimonials",
            Section::TempleInfo => "Temple Information",
            Section::Footer => "Footer",
        }
    }

    /// Path the gateway POSTs saves to. The navbar has its own endpoint;
    /// everything else goes through the home-content API.
    pub fn update_path(&self) -> String {
        match self {
            Section::Navbar => "/api/v1/navbar/nav_update".to_string(),
            other => format!("/api/v1/home/{}", other.id()),
        }
    }

    /// Path the gateway GETs current content from.
    pub fn fetch_path(&self) -> String {
        match self {
            Section::Navbar => "/api/v1/navbar/".to_string(),
            other => format!("/api/v1/home/{}", other.id()),
        }
    }
}

impl FromStr for Section {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::all()
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown section: {}", s))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Section {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Section::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// SectionStatus — publish workflow state
// ============================================================================

/// Publish state of a section. Toggled by admin action; a successful save
/// moves the section to `NeedsReview`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionStatus {
    #[default]
    Published,
    Draft,
    NeedsReview,
    Inactive,
}

impl SectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::Published => "published",
            SectionStatus::Draft => "draft",
            SectionStatus::NeedsReview => "needs-review",
            SectionStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for SectionStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "published" => Ok(SectionStatus::Published),
            "draft" => Ok(SectionStatus::Draft),
            "needs-review" => Ok(SectionStatus::NeedsReview),
            "inactive" => Ok(SectionStatus::Inactive),
            other => anyhow::bail!("Unknown section status: {}", other),
        }
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for section in Section::all() {
            let parsed: Section = section.id().parse().unwrap();
            assert_eq!(section, parsed);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for section in Section::all() {
            let json = serde_json::to_string(&section).unwrap();
            let parsed: Section = serde_json::from_str(&json).unwrap();
            assert_eq!(section, parsed);
        }
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<Section, _> = "sidebar".parse();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown section"));
    }

    #[test]
    fn test_navbar_has_dedicated_endpoints() {
        assert_eq!(Section::Navbar.update_path(), "/api/v1/navbar/nav_update");
        assert_eq!(Section::Navbar.fetch_path(), "/api/v1/navbar/");
    }

    #[test]
    fn test_home_sections_share_endpoint_scheme() {
        assert_eq!(
            Section::HeroSlider.update_path(),
            "/api/v1/home/hero_slider"
        );
        assert_eq!(Section::Footer.fetch_path(), "/api/v1/home/footer");
        assert_eq!(Section::TempleInfo.update_path(), "/api/v1/home/temple_info");
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            SectionStatus::Published,
            SectionStatus::Draft,
            SectionStatus::NeedsReview,
            SectionStatus::Inactive,
        ] {
            let parsed: SectionStatus = status.as_str().parse().unwrap();
            assert_eq!(status, parsed);
        }
    }
}
