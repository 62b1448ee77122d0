use crate::diff::Record;
use crate::payloads;
use crate::sections::Section;
use crate::uploads::ImageField;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Browser-tab titles are capped at input time.
pub const TAB_TITLE_MAX_CHARS: usize = 60;

// ============================================================================
// Navbar & branding
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub logo_background: String,
}

/// A named branding preset selectable in the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub logo_background: &'static str,
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "Traditional Maroon & Gold",
        primary: "#8B1538",
        secondary: "#FFD700",
        accent: "#FFFFFF",
        logo_background: "#8B1538",
    },
    ColorScheme {
        name: "Sacred Saffron",
        primary: "#FF6600",
        secondary: "#FFCC00",
        accent: "#FFFFFF",
        logo_background: "#FF6600",
    },
    ColorScheme {
        name: "Divine Blue",
        primary: "#1E3A8A",
        secondary: "#60A5FA",
        accent: "#FFFFFF",
        logo_background: "#1E3A8A",
    },
    ColorScheme {
        name: "Royal Purple",
        primary: "#6B21A8",
        secondary: "#A855F7",
        accent: "#FFFFFF",
        logo_background: "#6B21A8",
    },
    ColorScheme {
        name: "Emerald Green",
        primary: "#059669",
        secondary: "#34D399",
        accent: "#FFFFFF",
        logo_background: "#059669",
    },
    ColorScheme {
        name: "Sunset Orange",
        primary: "#EA580C",
        secondary: "#FB923C",
        accent: "#FFFFFF",
        logo_background: "#EA580C",
    },
    ColorScheme {
        name: "Deep Red",
        primary: "#DC2626",
        secondary: "#F87171",
        accent: "#FFFFFF",
        logo_background: "#DC2626",
    },
    ColorScheme {
        name: "Forest Green",
        primary: "#166534",
        secondary: "#4ADE80",
        accent: "#FFFFFF",
        logo_background: "#166534",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarRecord {
    pub temple_name: String,
    pub tab_title: String,
    pub logo: ImageField,
    pub favicon: ImageField,
    pub colors: BrandingColors,
}

impl NavbarRecord {
    /// Set the browser-tab title, truncated to the input cap.
    pub fn set_tab_title(&mut self, title: &str) {
        self.tab_title = title.chars().take(TAB_TITLE_MAX_CHARS).collect();
    }

    pub fn apply_color_scheme(&mut self, scheme: &ColorScheme) {
        self.colors = BrandingColors {
            primary: scheme.primary.to_string(),
            secondary: scheme.secondary.to_string(),
            accent: scheme.accent.to_string(),
            logo_background: scheme.logo_background.to_string(),
        };
    }
}

impl Record for NavbarRecord {
    const SECTION: Section = Section::Navbar;
    type Payload = payloads::NavbarPayload;

    fn default_content() -> Self {
        Self {
            temple_name: "Hindu Temple".to_string(),
            tab_title: "Hindu Temple - Sacred Space for Worship".to_string(),
            logo: ImageField::default(),
            favicon: ImageField::default(),
            colors: BrandingColors {
                primary: "#8B1538".to_string(),
                secondary: "#FFD700".to_string(),
                accent: "#FFFFFF".to_string(),
                logo_background: "#8B1538".to_string(),
            },
        }
    }

    fn image_fields(&self) -> Vec<&ImageField> {
        vec![&self.logo, &self.favicon]
    }

    fn image_fields_mut(&mut self) -> Vec<&mut ImageField> {
        vec![&mut self.logo, &mut self.favicon]
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::NavbarPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_navbar(value)
    }
}

// ============================================================================
// Hero slider
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub overlay: String,
    pub image: ImageField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSliderRecord {
    pub slides: Vec<HeroSlide>,
}

impl HeroSliderRecord {
    pub fn add_slide(&mut self, slide: HeroSlide) {
        self.slides.push(slide);
    }

    pub fn update_slide(&mut self, index: usize, edit: impl FnOnce(&mut HeroSlide)) {
        if let Some(slide) = self.slides.get_mut(index) {
            edit(slide);
        }
    }

    /// Remove a slide; later slides shift down to fill the gap.
    pub fn remove_slide(&mut self, index: usize) -> Option<HeroSlide> {
        (index < self.slides.len()).then(|| self.slides.remove(index))
    }
}

impl Record for HeroSliderRecord {
    const SECTION: Section = Section::HeroSlider;
    type Payload = payloads::HeroSliderPayload;

    fn default_content() -> Self {
        Self {
            slides: vec![
                HeroSlide {
                    title: "Welcome to Our Sacred Temple".to_string(),
                    subtitle: "Experience divine peace and spiritual growth".to_string(),
                    button_text: "Explore More".to_string(),
                    overlay: "dark".to_string(),
                    image: ImageField::hosted("temple-main.jpg"),
                },
                HeroSlide {
                    title: "Temple celebration".to_string(),
                    subtitle: "Experience the divine atmosphere of our sacred temple".to_string(),
                    button_text: "Join Us".to_string(),
                    overlay: "gradient".to_string(),
                    image: ImageField::hosted("temple-festival.jpg"),
                },
            ],
        }
    }

    fn image_fields(&self) -> Vec<&ImageField> {
        self.slides.iter().map(|slide| &slide.image).collect()
    }

    fn image_fields_mut(&mut self) -> Vec<&mut ImageField> {
        self.slides.iter_mut().map(|slide| &mut slide.image).collect()
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::HeroSliderPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_hero_slider(value)
    }
}

// ============================================================================
// Today's activities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub name: String,
    pub category: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitiesRecord {
    pub title: String,
    pub selected_date: NaiveDate,
    pub activities: Vec<ActivityItem>,
}

impl ActivitiesRecord {
    pub fn add_activity(&mut self, activity: ActivityItem) {
        self.activities.push(activity);
    }

    pub fn update_activity(&mut self, index: usize, edit: impl FnOnce(&mut ActivityItem)) {
        if let Some(activity) = self.activities.get_mut(index) {
            edit(activity);
        }
    }

    pub fn remove_activity(&mut self, index: usize) -> Option<ActivityItem> {
        (index < self.activities.len()).then(|| self.activities.remove(index))
    }
}

impl Record for ActivitiesRecord {
    const SECTION: Section = Section::Activities;
    type Payload = payloads::ActivitiesPayload;

    fn default_content() -> Self {
        Self {
            title: "Today's Activities".to_string(),
            selected_date: Utc::now().date_naive(),
            activities: vec![
                ActivityItem {
                    name: "Morning Aarti".to_string(),
                    category: "puja".to_string(),
                    time: "06:00 AM".to_string(),
                },
                ActivityItem {
                    name: "Abhishekam".to_string(),
                    category: "puja".to_string(),
                    time: "08:00 AM".to_string(),
                },
                ActivityItem {
                    name: "Bhajan Session".to_string(),
                    category: "community".to_string(),
                    time: "10:00 AM".to_string(),
                },
            ],
        }
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::ActivitiesPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_activities(value)
    }
}

// ============================================================================
// Welcome section
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeRecord {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub background_color: String,
    pub text_color: String,
    pub background_image: ImageField,
}

impl Record for WelcomeRecord {
    const SECTION: Section = Section::Welcome;
    type Payload = payloads::WelcomePayload;

    fn default_content() -> Self {
        Self {
            title: "Welcome to Our Sacred Temple".to_string(),
            subtitle: "सर्वे भवन्तु सुखिनः सर्वे सन्तु निरामयाः".to_string(),
            description: "Join us in our sacred journey of faith, peace, and community. Our \
                          temple has been a beacon of spiritual guidance for over 100 years."
                .to_string(),
            background_color: "#8B1538".to_string(),
            text_color: "#FFD700".to_string(),
            background_image: ImageField::default(),
        }
    }

    fn image_fields(&self) -> Vec<&ImageField> {
        vec![&self.background_image]
    }

    fn image_fields_mut(&mut self) -> Vec<&mut ImageField> {
        vec![&mut self.background_image]
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::WelcomePayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_welcome(value)
    }
}

// ============================================================================
// Services cards
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub details: Vec<String>,
    pub icon: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesRecord {
    pub title: String,
    pub services: Vec<ServiceCard>,
}

impl ServicesRecord {
    pub fn add_service(&mut self, service: ServiceCard) {
        self.services.push(service);
    }

    pub fn update_service(&mut self, index: usize, edit: impl FnOnce(&mut ServiceCard)) {
        if let Some(service) = self.services.get_mut(index) {
            edit(service);
        }
    }

    pub fn remove_service(&mut self, index: usize) -> Option<ServiceCard> {
        (index < self.services.len()).then(|| self.services.remove(index))
    }
}

impl Record for ServicesRecord {
    const SECTION: Section = Section::Services;
    type Payload = payloads::ServicesPayload;

    fn default_content() -> Self {
        Self {
            title: "Our Services".to_string(),
            services: vec![
                ServiceCard {
                    name: "Daily Pujas".to_string(),
                    description: "Join our daily rituals to seek divine blessings and spiritual \
                                  guidance. Our experienced priests perform traditional \
                                  ceremonies following ancient Vedic traditions."
                        .to_string(),
                    schedule: "Morning & Evening Ceremonies".to_string(),
                    details: vec![
                        "Morning Aarti: 6:00 AM".to_string(),
                        "Noon Aarti: 12:00 PM".to_string(),
                        "Evening Aarti: 6:30 PM".to_string(),
                    ],
                    icon: "prayer".to_string(),
                    button_text: "View All Ceremonies".to_string(),
                },
                ServiceCard {
                    name: "Community Services".to_string(),
                    description: "We offer various community services focused on education, \
                                  cultural preservation, and humanitarian aid. Our temple serves \
                                  as a center for community growth and support."
                        .to_string(),
                    schedule: "Serving Our Community".to_string(),
                    details: vec![
                        "Free Food Distribution (Sundays)".to_string(),
                        "Health Camps (Monthly)".to_string(),
                        "Youth Mentoring Programs".to_string(),
                    ],
                    icon: "community".to_string(),
                    button_text: "Join Our Services".to_string(),
                },
                ServiceCard {
                    name: "Spiritual Learning".to_string(),
                    description: "Deepen your spiritual understanding through our comprehensive \
                                  learning programs, from ancient Sanskrit texts to modern \
                                  meditation practices."
                        .to_string(),
                    schedule: "Ancient Wisdom & Modern Practice".to_string(),
                    details: vec![
                        "Sanskrit Classes (Weekends)".to_string(),
                        "Meditation Workshops".to_string(),
                        "Spiritual Discussion Groups".to_string(),
                    ],
                    icon: "education".to_string(),
                    button_text: "Start Learning".to_string(),
                },
            ],
        }
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::ServicesPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_services(value)
    }
}

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub quote: String,
    pub rating: u8,
    pub photo: ImageField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsRecord {
    pub title: String,
    pub testimonials: Vec<Testimonial>,
}

impl TestimonialsRecord {
    pub fn add_testimonial(&mut self, testimonial: Testimonial) {
        self.testimonials.push(testimonial);
    }

    pub fn update_testimonial(&mut self, index: usize, edit: impl FnOnce(&mut Testimonial)) {
        if let Some(testimonial) = self.testimonials.get_mut(index) {
            edit(testimonial);
        }
    }

    pub fn remove_testimonial(&mut self, index: usize) -> Option<Testimonial> {
        (index < self.testimonials.len()).then(|| self.testimonials.remove(index))
    }
}

impl Record for TestimonialsRecord {
    const SECTION: Section = Section::Testimonials;
    type Payload = payloads::TestimonialsPayload;

    fn default_content() -> Self {
        Self {
            title: "What Our Community Says".to_string(),
            testimonials: vec![
                Testimonial {
                    name: "Priya Sharma".to_string(),
                    location: "Local Devotee".to_string(),
                    quote: "This temple has been my spiritual home for years".to_string(),
                    rating: 5,
                    photo: ImageField::default(),
                },
                Testimonial {
                    name: "Raj Patel".to_string(),
                    location: "Community Member".to_string(),
                    quote: "The peaceful atmosphere here is unmatched".to_string(),
                    rating: 5,
                    photo: ImageField::default(),
                },
            ],
        }
    }

    fn image_fields(&self) -> Vec<&ImageField> {
        self.testimonials.iter().map(|t| &t.photo).collect()
    }

    fn image_fields_mut(&mut self) -> Vec<&mut ImageField> {
        self.testimonials.iter_mut().map(|t| &mut t.photo).collect()
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::TestimonialsPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_testimonials(value)
    }
}

// ============================================================================
// Temple information
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempleInfoRecord {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
    pub established_year: String,
    pub deity: String,
    pub priest: String,
    pub special_days: Vec<String>,
}

impl Record for TempleInfoRecord {
    const SECTION: Section = Section::TempleInfo;
    type Payload = payloads::TempleInfoPayload;

    fn default_content() -> Self {
        Self {
            address: "123 Temple Street, Sacred City, SC 12345".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "info@sacredtemple.org".to_string(),
            hours: "Daily 6:00 AM - 9:00 PM".to_string(),
            established_year: "1925".to_string(),
            deity: "Lord Ganesha".to_string(),
            priest: "Pandit Raj Kumar".to_string(),
            special_days: vec![
                "Monday: Shiva Puja".to_string(),
                "Tuesday: Hanuman Puja".to_string(),
                "Saturday: Ganesh Puja".to_string(),
            ],
        }
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::TempleInfoPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_temple_info(value)
    }
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub youtube: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterRecord {
    pub site_name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub social_media: SocialMedia,
    pub quick_links: Vec<QuickLink>,
    pub copyright: String,
}

impl FooterRecord {
    pub fn add_quick_link(&mut self, link: QuickLink) {
        self.quick_links.push(link);
    }

    pub fn update_quick_link(&mut self, index: usize, edit: impl FnOnce(&mut QuickLink)) {
        if let Some(link) = self.quick_links.get_mut(index) {
            edit(link);
        }
    }

    pub fn remove_quick_link(&mut self, index: usize) -> Option<QuickLink> {
        (index < self.quick_links.len()).then(|| self.quick_links.remove(index))
    }
}

impl Record for FooterRecord {
    const SECTION: Section = Section::Footer;
    type Payload = payloads::FooterPayload;

    fn default_content() -> Self {
        Self {
            site_name: "Hindu Temple".to_string(),
            description: "A sacred space for worship, community, and spiritual growth. Join us \
                          in our journey of faith and service."
                .to_string(),
            address: "123 Temple Street, Sacred City, SC 12345".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            email: "info@sacredtemple.org".to_string(),
            social_media: SocialMedia {
                facebook: "https://facebook.com/hindutemple".to_string(),
                twitter: "https://twitter.com/hindutemple".to_string(),
                instagram: "https://instagram.com/hindutemple".to_string(),
                youtube: "https://youtube.com/hindutemple".to_string(),
            },
            quick_links: vec![
                QuickLink {
                    name: "Home".to_string(),
                    url: "/".to_string(),
                },
                QuickLink {
                    name: "Services".to_string(),
                    url: "/services".to_string(),
                },
                QuickLink {
                    name: "Events".to_string(),
                    url: "/events".to_string(),
                },
                QuickLink {
                    name: "Contact".to_string(),
                    url: "/contact".to_string(),
                },
            ],
            copyright: "© 2024 Hindu Temple. All rights reserved.".to_string(),
        }
    }

    fn to_payload(&self) -> Self::Payload {
        payloads::FooterPayload::from_record(self)
    }

    fn from_response(value: serde_json::Value) -> Self {
        payloads::parse_footer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_title_is_capped_at_sixty_chars() {
        let mut record = NavbarRecord::default_content();
        let long = "x".repeat(90);
        record.set_tab_title(&long);
        assert_eq!(record.tab_title.chars().count(), TAB_TITLE_MAX_CHARS);

        record.set_tab_title("Shree Ganesh Mandir");
        assert_eq!(record.tab_title, "Shree Ganesh Mandir");
    }

    #[test]
    fn apply_color_scheme_replaces_all_four_colors() {
        let mut record = NavbarRecord::default_content();
        record.apply_color_scheme(&COLOR_SCHEMES[2]); // Divine Blue
        assert_eq!(record.colors.primary, "#1E3A8A");
        assert_eq!(record.colors.secondary, "#60A5FA");
        assert_eq!(record.colors.accent, "#FFFFFF");
        assert_eq!(record.colors.logo_background, "#1E3A8A");
    }

    #[test]
    fn remove_slide_shifts_later_slides_down() {
        let mut record = HeroSliderRecord::default_content();
        let second_title = record.slides[1].title.clone();
        let removed = record.remove_slide(0).unwrap();
        assert_eq!(removed.title, "Welcome to Our Sacred Temple");
        assert_eq!(record.slides[0].title, second_title);
    }

    #[test]
    fn remove_out_of_range_is_a_noop() {
        let mut record = HeroSliderRecord::default_content();
        assert!(record.remove_slide(5).is_none());
        assert_eq!(record.slides.len(), 2);
    }

    #[test]
    fn update_testimonial_edits_in_place() {
        let mut record = TestimonialsRecord::default_content();
        record.update_testimonial(1, |t| t.rating = 4);
        assert_eq!(record.testimonials[1].rating, 4);
        assert_eq!(record.testimonials[0].rating, 5);
    }

    #[test]
    fn slider_images_are_tracked_as_image_fields() {
        let record = HeroSliderRecord::default_content();
        assert_eq!(record.image_fields().len(), record.slides.len());
    }
}
