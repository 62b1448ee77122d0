//! Wire formats for the content API.
//!
//! One typed payload struct per section, so a field can never be silently
//! dropped from a save, and one parser per section for the fetch side. The
//! backend wraps responses in a `data`/`result` envelope inconsistently;
//! parsers unwrap whichever is present and substitute built-in defaults for
//! blank fields.

use crate::diff::Record as _;
use crate::records::{
    ActivitiesRecord, ActivityItem, FooterRecord, HeroSlide, HeroSliderRecord, NavbarRecord,
    QuickLink, ServiceCard, ServicesRecord, SocialMedia, Testimonial, TempleInfoRecord,
    TestimonialsRecord, WelcomeRecord,
};
use crate::uploads::ImageField;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Shared helpers
// ============================================================================

/// Image transmission parts: base64 content + filename + MIME type when a new
/// upload is staged, otherwise the prior hosted URL. The URL is carried
/// explicitly so the backend never interprets an absent field as "clear".
type ImageParts = (
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

fn image_parts(field: &ImageField) -> ImageParts {
    match &field.upload {
        Some(upload) => (
            Some(upload.base64_content()),
            Some(upload.filename.clone()),
            Some(upload.mime_type.clone()),
            None,
        ),
        None => (None, None, None, field.hosted_url.clone()),
    }
}

/// Responses are observed both bare and nested under `data` or `result`.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if let Some(inner) = map.remove("data") {
                inner
            } else if let Some(inner) = map.remove("result") {
                inner
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ============================================================================
// Navbar
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NavbarPayload {
    pub temple_name: String,
    pub tab_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon_url: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub logo_background_color: String,
}

impl NavbarPayload {
    pub(crate) fn from_record(record: &NavbarRecord) -> Self {
        let (logo, logo_filename, logo_mime_type, logo_url) = image_parts(&record.logo);
        let (favicon, favicon_filename, favicon_mime_type, favicon_url) =
            image_parts(&record.favicon);
        Self {
            temple_name: record.temple_name.clone(),
            tab_title: record.tab_title.clone(),
            logo,
            logo_filename,
            logo_mime_type,
            logo_url,
            favicon,
            favicon_filename,
            favicon_mime_type,
            favicon_url,
            primary_color: record.colors.primary.clone(),
            secondary_color: record.colors.secondary.clone(),
            accent_color: record.colors.accent.clone(),
            logo_background_color: record.colors.logo_background.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct NavbarContent {
    #[serde(default)]
    temple_name: Option<String>,
    #[serde(default)]
    tab_title: Option<String>,
    #[serde(default)]
    logo_url: Option<String>,
    #[serde(default)]
    favicon_url: Option<String>,
    #[serde(default)]
    primary_color: Option<String>,
    #[serde(default)]
    secondary_color: Option<String>,
    #[serde(default)]
    accent_color: Option<String>,
    #[serde(default)]
    logo_background_color: Option<String>,
}

pub(crate) fn parse_navbar(value: Value) -> NavbarRecord {
    let content: NavbarContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = NavbarRecord::default_content();
    if let Some(name) = non_blank(content.temple_name) {
        record.temple_name = name;
    }
    if let Some(title) = non_blank(content.tab_title) {
        record.tab_title = title;
    }
    record.logo = ImageField::hosted(content.logo_url.unwrap_or_default());
    record.favicon = ImageField::hosted(content.favicon_url.unwrap_or_default());
    if let Some(color) = non_blank(content.primary_color) {
        record.colors.primary = color;
    }
    if let Some(color) = non_blank(content.secondary_color) {
        record.colors.secondary = color;
    }
    if let Some(color) = non_blank(content.accent_color) {
        record.colors.accent = color;
    }
    if let Some(color) = non_blank(content.logo_background_color) {
        record.colors.logo_background = color;
    }
    record
}

// ============================================================================
// Hero slider
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SlidePayload {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub overlay: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroSliderPayload {
    pub section_type: &'static str,
    pub slides: Vec<SlidePayload>,
}

impl HeroSliderPayload {
    pub(crate) fn from_record(record: &HeroSliderRecord) -> Self {
        let slides = record
            .slides
            .iter()
            .map(|slide| {
                let (image, image_filename, image_mime_type, image_url) =
                    image_parts(&slide.image);
                SlidePayload {
                    title: slide.title.clone(),
                    subtitle: slide.subtitle.clone(),
                    button_text: slide.button_text.clone(),
                    overlay: slide.overlay.clone(),
                    image,
                    image_filename,
                    image_mime_type,
                    image_url,
                }
            })
            .collect();
        Self {
            section_type: HeroSliderRecord::SECTION.id(),
            slides,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SlideContent {
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    button_text: String,
    #[serde(default)]
    overlay: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct HeroSliderContent {
    #[serde(default)]
    slides: Vec<SlideContent>,
}

pub(crate) fn parse_hero_slider(value: Value) -> HeroSliderRecord {
    let content: HeroSliderContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    if content.slides.is_empty() {
        return HeroSliderRecord::default_content();
    }
    HeroSliderRecord {
        slides: content
            .slides
            .into_iter()
            .map(|slide| HeroSlide {
                title: slide.title,
                subtitle: slide.subtitle,
                button_text: slide.button_text,
                overlay: if slide.overlay.is_empty() {
                    "dark".to_string()
                } else {
                    slide.overlay
                },
                image: ImageField::hosted(
                    slide.image_url.or(slide.image).unwrap_or_default(),
                ),
            })
            .collect(),
    }
}

// ============================================================================
// Activities
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ActivitiesPayload {
    pub section_type: &'static str,
    pub title: String,
    pub date: String,
    pub activities: Vec<ActivityItem>,
}

impl ActivitiesPayload {
    pub(crate) fn from_record(record: &ActivitiesRecord) -> Self {
        Self {
            section_type: ActivitiesRecord::SECTION.id(),
            title: record.title.clone(),
            date: record.selected_date.format("%Y-%m-%d").to_string(),
            activities: record.activities.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ActivitiesContent {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    activities: Vec<ActivityItem>,
}

pub(crate) fn parse_activities(value: Value) -> ActivitiesRecord {
    let content: ActivitiesContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = ActivitiesRecord::default_content();
    if let Some(title) = non_blank(content.title) {
        record.title = title;
    }
    if let Some(date) = content
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        record.selected_date = date;
    }
    if !content.activities.is_empty() {
        record.activities = content.activities;
    }
    record
}

// ============================================================================
// Welcome
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct WelcomePayload {
    pub section_type: &'static str,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub background_color: String,
    pub text_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image_url: Option<String>,
}

impl WelcomePayload {
    pub(crate) fn from_record(record: &WelcomeRecord) -> Self {
        let (background_image, background_image_filename, background_image_mime_type, background_image_url) =
            image_parts(&record.background_image);
        Self {
            section_type: WelcomeRecord::SECTION.id(),
            title: record.title.clone(),
            subtitle: record.subtitle.clone(),
            description: record.description.clone(),
            background_color: record.background_color.clone(),
            text_color: record.text_color.clone(),
            background_image,
            background_image_filename,
            background_image_mime_type,
            background_image_url,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WelcomeContent {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    subtitle: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    background_color: Option<String>,
    #[serde(default)]
    text_color: Option<String>,
    #[serde(default)]
    background_image_url: Option<String>,
}

pub(crate) fn parse_welcome(value: Value) -> WelcomeRecord {
    let content: WelcomeContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = WelcomeRecord::default_content();
    if let Some(title) = non_blank(content.title) {
        record.title = title;
    }
    if let Some(subtitle) = non_blank(content.subtitle) {
        record.subtitle = subtitle;
    }
    if let Some(description) = non_blank(content.description) {
        record.description = description;
    }
    if let Some(color) = non_blank(content.background_color) {
        record.background_color = color;
    }
    if let Some(color) = non_blank(content.text_color) {
        record.text_color = color;
    }
    record.background_image = ImageField::hosted(content.background_image_url.unwrap_or_default());
    record
}

// ============================================================================
// Services
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ServicesPayload {
    pub section_type: &'static str,
    pub title: String,
    pub services: Vec<ServiceCard>,
}

impl ServicesPayload {
    pub(crate) fn from_record(record: &ServicesRecord) -> Self {
        Self {
            section_type: ServicesRecord::SECTION.id(),
            title: record.title.clone(),
            services: record.services.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ServicesContent {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    services: Vec<ServiceCard>,
}

pub(crate) fn parse_services(value: Value) -> ServicesRecord {
    let content: ServicesContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = ServicesRecord::default_content();
    if let Some(title) = non_blank(content.title) {
        record.title = title;
    }
    if !content.services.is_empty() {
        record.services = content.services;
    }
    record
}

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialPayload {
    pub name: String,
    pub location: String,
    pub quote: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestimonialsPayload {
    pub section_type: &'static str,
    pub title: String,
    pub testimonials: Vec<TestimonialPayload>,
}

impl TestimonialsPayload {
    pub(crate) fn from_record(record: &TestimonialsRecord) -> Self {
        let testimonials = record
            .testimonials
            .iter()
            .map(|t| {
                let (image, image_filename, image_mime_type, image_url) = image_parts(&t.photo);
                TestimonialPayload {
                    name: t.name.clone(),
                    location: t.location.clone(),
                    quote: t.quote.clone(),
                    rating: t.rating,
                    image,
                    image_filename,
                    image_mime_type,
                    image_url,
                }
            })
            .collect();
        Self {
            section_type: TestimonialsRecord::SECTION.id(),
            title: record.title.clone(),
            testimonials,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TestimonialContent {
    #[serde(default)]
    name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    quote: String,
    #[serde(default)]
    rating: u8,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct TestimonialsContent {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    testimonials: Vec<TestimonialContent>,
}

pub(crate) fn parse_testimonials(value: Value) -> TestimonialsRecord {
    let content: TestimonialsContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = TestimonialsRecord::default_content();
    if let Some(title) = non_blank(content.title) {
        record.title = title;
    }
    if !content.testimonials.is_empty() {
        record.testimonials = content
            .testimonials
            .into_iter()
            .map(|t| Testimonial {
                name: t.name,
                location: t.location,
                quote: t.quote,
                rating: t.rating,
                photo: ImageField::hosted(t.image_url.unwrap_or_default()),
            })
            .collect();
    }
    record
}

// ============================================================================
// Temple info
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TempleInfoPayload {
    pub section_type: &'static str,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub established_year: String,
    pub deity: String,
    pub priest: String,
    pub special_days: Vec<String>,
}

impl TempleInfoPayload {
    pub(crate) fn from_record(record: &TempleInfoRecord) -> Self {
        Self {
            section_type: TempleInfoRecord::SECTION.id(),
            address: record.address.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            hours: record.hours.clone(),
            established_year: record.established_year.clone(),
            deity: record.deity.clone(),
            priest: record.priest.clone(),
            special_days: record.special_days.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TempleInfoContent {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    hours: Option<String>,
    #[serde(default)]
    established_year: Option<String>,
    #[serde(default)]
    deity: Option<String>,
    #[serde(default)]
    priest: Option<String>,
    #[serde(default)]
    special_days: Vec<String>,
}

pub(crate) fn parse_temple_info(value: Value) -> TempleInfoRecord {
    let content: TempleInfoContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = TempleInfoRecord::default_content();
    if let Some(address) = non_blank(content.address) {
        record.address = address;
    }
    if let Some(phone) = non_blank(content.phone) {
        record.phone = phone;
    }
    if let Some(email) = non_blank(content.email) {
        record.email = email;
    }
    if let Some(hours) = non_blank(content.hours) {
        record.hours = hours;
    }
    if let Some(year) = non_blank(content.established_year) {
        record.established_year = year;
    }
    if let Some(deity) = non_blank(content.deity) {
        record.deity = deity;
    }
    if let Some(priest) = non_blank(content.priest) {
        record.priest = priest;
    }
    if !content.special_days.is_empty() {
        record.special_days = content.special_days;
    }
    record
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FooterPayload {
    pub section_type: &'static str,
    pub site_name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub social_media: SocialMedia,
    pub quick_links: Vec<QuickLink>,
    pub copyright: String,
}

impl FooterPayload {
    pub(crate) fn from_record(record: &FooterRecord) -> Self {
        Self {
            section_type: FooterRecord::SECTION.id(),
            site_name: record.site_name.clone(),
            description: record.description.clone(),
            address: record.address.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            social_media: record.social_media.clone(),
            quick_links: record.quick_links.clone(),
            copyright: record.copyright.clone(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FooterContent {
    #[serde(default)]
    site_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    social_media: Option<SocialMedia>,
    #[serde(default)]
    quick_links: Vec<QuickLink>,
    #[serde(default)]
    copyright: Option<String>,
}

pub(crate) fn parse_footer(value: Value) -> FooterRecord {
    let content: FooterContent =
        serde_json::from_value(unwrap_envelope(value)).unwrap_or_default();
    let mut record = FooterRecord::default_content();
    if let Some(name) = non_blank(content.site_name) {
        record.site_name = name;
    }
    if let Some(description) = non_blank(content.description) {
        record.description = description;
    }
    if let Some(address) = non_blank(content.address) {
        record.address = address;
    }
    if let Some(phone) = non_blank(content.phone) {
        record.phone = phone;
    }
    if let Some(email) = non_blank(content.email) {
        record.email = email;
    }
    if let Some(social) = content.social_media {
        record.social_media = social;
    }
    if !content.quick_links.is_empty() {
        record.quick_links = content.quick_links;
    }
    if let Some(copyright) = non_blank(content.copyright) {
        record.copyright = copyright;
    }
    record
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uploads::AssetKind;
    use serde_json::json;

    #[test]
    fn navbar_payload_preserves_hosted_logo_when_not_replaced() {
        let mut record = NavbarRecord::default_content();
        record.logo = ImageField::hosted("https://cdn.example.org/logo.png");

        let payload = serde_json::to_value(NavbarPayload::from_record(&record)).unwrap();
        assert_eq!(payload["logo_url"], "https://cdn.example.org/logo.png");
        assert!(payload.get("logo").is_none());
        assert!(payload.get("logo_filename").is_none());
    }

    #[test]
    fn navbar_payload_carries_staged_upload_as_base64() {
        let mut record = NavbarRecord::default_content();
        record.logo = ImageField::hosted("https://cdn.example.org/old.png");
        record
            .logo
            .stage(AssetKind::Logo, "new-logo.png", "image/png", vec![1, 2, 3])
            .unwrap();

        let payload = serde_json::to_value(NavbarPayload::from_record(&record)).unwrap();
        assert_eq!(payload["logo"], "AQID");
        assert_eq!(payload["logo_filename"], "new-logo.png");
        assert_eq!(payload["logo_mime_type"], "image/png");
        assert!(payload.get("logo_url").is_none());
    }

    #[test]
    fn navbar_payload_always_sends_name_title_and_colors() {
        let record = NavbarRecord::default_content();
        let payload = serde_json::to_value(NavbarPayload::from_record(&record)).unwrap();
        assert_eq!(payload["temple_name"], "Hindu Temple");
        assert_eq!(
            payload["tab_title"],
            "Hindu Temple - Sacred Space for Worship"
        );
        assert_eq!(payload["primary_color"], "#8B1538");
        assert_eq!(payload["logo_background_color"], "#8B1538");
    }

    #[test]
    fn parse_navbar_unwraps_data_envelope() {
        let record = parse_navbar(json!({
            "data": { "temple_name": "Shree Ganesh Mandir", "logo_url": "/media/logo.png" }
        }));
        assert_eq!(record.temple_name, "Shree Ganesh Mandir");
        assert_eq!(record.logo.hosted_url.as_deref(), Some("/media/logo.png"));
    }

    #[test]
    fn parse_navbar_unwraps_result_envelope() {
        let record = parse_navbar(json!({ "result": { "temple_name": "Om Shakti Temple" } }));
        assert_eq!(record.temple_name, "Om Shakti Temple");
    }

    #[test]
    fn parse_navbar_accepts_flat_body_and_fills_blanks_with_defaults() {
        let record = parse_navbar(json!({ "temple_name": "", "tab_title": "Visit Us" }));
        assert_eq!(record.temple_name, "Hindu Temple");
        assert_eq!(record.tab_title, "Visit Us");
        assert_eq!(record.colors.secondary, "#FFD700");
    }

    #[test]
    fn parse_navbar_tolerates_malformed_body() {
        let record = parse_navbar(json!("unexpected"));
        assert_eq!(record.temple_name, "Hindu Temple");
    }

    #[test]
    fn hero_slider_payload_tags_section_type() {
        let payload =
            serde_json::to_value(HeroSliderPayload::from_record(&HeroSliderRecord::default_content()))
                .unwrap();
        assert_eq!(payload["section_type"], "hero_slider");
        assert_eq!(payload["slides"].as_array().unwrap().len(), 2);
        assert_eq!(payload["slides"][0]["image_url"], "temple-main.jpg");
    }

    #[test]
    fn parse_hero_slider_empty_list_falls_back_to_defaults() {
        let record = parse_hero_slider(json!({ "slides": [] }));
        assert_eq!(record.slides.len(), 2);
    }

    #[test]
    fn activities_payload_includes_the_selected_date() {
        let mut record = ActivitiesRecord::default_content();
        record.selected_date = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        let payload = serde_json::to_value(ActivitiesPayload::from_record(&record)).unwrap();
        assert_eq!(payload["date"], "2025-06-05");
        assert_eq!(payload["activities"][0]["name"], "Morning Aarti");
    }

    #[test]
    fn parse_activities_reads_date_and_items() {
        let record = parse_activities(json!({
            "title": "Festival Day",
            "date": "2025-08-15",
            "activities": [{ "name": "Flag Hoisting", "category": "community", "time": "07:00 AM" }]
        }));
        assert_eq!(record.title, "Festival Day");
        assert_eq!(
            record.selected_date,
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
        );
        assert_eq!(record.activities.len(), 1);
    }

    #[test]
    fn testimonial_payload_preserves_hosted_photo() {
        let mut record = TestimonialsRecord::default_content();
        record.testimonials[0].photo = ImageField::hosted("/media/priya.jpg");
        let payload = serde_json::to_value(TestimonialsPayload::from_record(&record)).unwrap();
        assert_eq!(payload["testimonials"][0]["image_url"], "/media/priya.jpg");
        assert!(payload["testimonials"][1].get("image_url").is_none());
    }

    #[test]
    fn footer_payload_carries_social_and_links() {
        let payload =
            serde_json::to_value(FooterPayload::from_record(&FooterRecord::default_content()))
                .unwrap();
        assert_eq!(
            payload["social_media"]["facebook"],
            "https://facebook.com/hindutemple"
        );
        assert_eq!(payload["quick_links"][3]["url"], "/contact");
        assert_eq!(payload["section_type"], "footer");
    }

    #[test]
    fn parse_footer_keeps_server_links_in_order() {
        let record = parse_footer(json!({
            "quick_links": [
                { "name": "Donate", "url": "/donation" },
                { "name": "Events", "url": "/events" }
            ]
        }));
        assert_eq!(record.quick_links.len(), 2);
        assert_eq!(record.quick_links[0].name, "Donate");
    }
}
