//! Copy and media for the landing page.
//!
//! Everything shown on the page lives in `content/landing.json`, which is
//! embedded at compile time and validated once on start-up.

use std::collections::HashSet;
use std::ops::Deref;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../content/landing.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("landing content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sequence `{0}` has no items")]
    EmptySequence(String),
    #[error("testimonial from `{label}` has rating {rating}, expected 1 to 5")]
    RatingOutOfRange { label: String, rating: u8 },
    #[error("gallery category `{0}` is defined more than once")]
    DuplicateCategory(String),
    #[error("sequence `{0}` has more than one video")]
    TooManyVideos(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// One displayable unit of a carousel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Item {
    pub source: String,
    pub label: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub secondary_text: Option<String>,
    #[serde(default)]
    pub kind: MediaKind,
}

impl Item {
    pub fn image(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            caption: None,
            rating: None,
            secondary_text: None,
            kind: MediaKind::Image,
        }
    }

    #[cfg(test)]
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Alt text for the media element: the caption when present, the label otherwise.
    pub fn alt(&self) -> &str {
        self.caption.as_deref().unwrap_or(&self.label)
    }
}

/// Fixed, ordered list of items. Cloning shares the underlying storage.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "Vec<Item>")]
pub struct Sequence(Rc<[Item]>);

impl Default for Sequence {
    fn default() -> Self {
        Vec::new().into()
    }
}

impl From<Vec<Item>> for Sequence {
    fn from(items: Vec<Item>) -> Self {
        Self(items.into())
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Deref for Sequence {
    type Target = [Item];

    fn deref(&self) -> &[Item] {
        &self.0
    }
}

impl Sequence {
    fn validate(&self, name: &str) -> Result<(), ContentError> {
        if self.is_empty() {
            return Err(ContentError::EmptySequence(name.to_string()));
        }
        if self.iter().filter(|item| item.is_video()).count() > 1 {
            return Err(ContentError::TooManyVideos(name.to_string()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    /// Years in business, shown in the footer.
    pub years: u16,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Badge {
    pub icon: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hero {
    pub title_highlight: String,
    pub title: String,
    pub subtitle: String,
    pub background: String,
    pub background_alt: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub badges: Vec<Badge>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Differentiator {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryCategory {
    pub key: String,
    pub label: String,
    pub items: Sequence,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Contact {
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub display_phone: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Location {
    pub query: String,
    pub display_address: String,
    pub embed_url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LandingContent {
    pub brand: Brand,
    pub hero: Hero,
    pub differentiators: Vec<Differentiator>,
    pub environments: Sequence,
    pub gallery: Vec<GalleryCategory>,
    pub testimonials: Sequence,
    pub average_rating: f32,
    pub contact: Contact,
    pub location: Location,
}

impl LandingContent {
    /// Parses and validates the content bundled with the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        self.environments.validate("environments")?;
        self.testimonials.validate("testimonials")?;

        let mut seen = HashSet::new();
        for category in &self.gallery {
            if !seen.insert(category.key.as_str()) {
                return Err(ContentError::DuplicateCategory(category.key.clone()));
            }
            category.items.validate(&category.key)?;
        }

        for testimonial in self.testimonials.iter() {
            if let Some(rating) = testimonial.rating {
                if !(1..=5).contains(&rating) {
                    return Err(ContentError::RatingOutOfRange {
                        label: testimonial.label.clone(),
                        rating,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_valid() {
        let content = LandingContent::embedded().expect("bundled content must load");
        assert_eq!(content.environments.len(), 4);
        assert_eq!(content.environments[0].label, "Cozinha");
        assert_eq!(content.brand.years, 38);
        assert!(!content.gallery.is_empty());
        assert!(content.testimonials.iter().all(|t| t.rating.is_some()));
    }

    #[test]
    fn item_defaults_to_image() {
        let item: Item = serde_json::from_str(r#"{"source": "/a.png", "label": "Sala"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.alt(), "Sala");
    }

    #[test]
    fn video_kind_is_parsed() {
        let item: Item =
            serde_json::from_str(r#"{"source": "/tour.mp4", "label": "Tour", "kind": "video"}"#)
                .unwrap();
        assert!(item.is_video());
    }

    #[test]
    fn rejects_empty_environments() {
        let mut content = LandingContent::embedded().unwrap();
        content.environments = Sequence::default();
        assert!(matches!(
            content.validate(),
            Err(ContentError::EmptySequence(name)) if name == "environments"
        ));
    }

    #[test]
    fn rejects_duplicate_category() {
        let mut content = LandingContent::embedded().unwrap();
        let first = content.gallery[0].clone();
        content.gallery.push(first);
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateCategory(_))
        ));
    }

    #[test]
    fn rejects_rating_above_five() {
        let mut content = LandingContent::embedded().unwrap();
        let mut items: Vec<Item> = content.testimonials.to_vec();
        items[0].rating = Some(6);
        content.testimonials = items.into();
        assert!(matches!(
            content.validate(),
            Err(ContentError::RatingOutOfRange { rating: 6, .. })
        ));
    }

    #[test]
    fn rejects_second_video() {
        let mut content = LandingContent::embedded().unwrap();
        let mut video = Item::image("/tour.mp4", "Tour");
        video.kind = MediaKind::Video;
        content.environments = vec![video.clone(), video].into();
        assert!(matches!(content.validate(), Err(ContentError::TooManyVideos(_))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            LandingContent::from_json("{"),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn sequences_compare_by_content() {
        let a: Sequence = vec![Item::image("/a.png", "A")].into();
        let b: Sequence = vec![Item::image("/a.png", "A")].into();
        assert_eq!(a, b);
        assert_eq!(a, a.clone());
    }
}
