//! Project and blog post records.
//!
//! # Responsibility
//! - Define the two catalog record kinds and their shared capability trait.
//! - Validate authored data once, before it enters a catalog.
//!
//! # Invariants
//! - `id` is assigned at data-authoring time and never generated at runtime.
//! - Blog `date` values are ISO `YYYY-MM-DD` strings.
//! - `content` on blog posts is authoring-time trusted HTML; every other
//!   text field is untrusted for display purposes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Authoring-time identifier, unique within one catalog.
pub type EntryId = u32;

/// Capability subset shared by every renderable catalog record.
///
/// List rendering, filtering and the navigation handoff only need this
/// surface; kind-specific fields stay on the concrete records.
pub trait CatalogEntry: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> EntryId;
    fn title(&self) -> &str;
    fn tags(&self) -> &[String];
    fn featured(&self) -> bool;

    /// Checks authored-data invariants for this record.
    fn validate(&self) -> Result<(), EntryValidationError>;
}

/// Portfolio project card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    /// Short card blurb, shown escaped.
    pub description: String,
    /// Display-ordered technology tags.
    pub tags: Vec<String>,
    /// Icon glyph class for the card header.
    pub icon: String,
    /// Optional feature image path.
    #[serde(default)]
    pub image: Option<String>,
    pub featured: bool,
}

impl CatalogEntry for Project {
    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn validate(&self) -> Result<(), EntryValidationError> {
        if self.title.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle(self.id));
        }
        Ok(())
    }
}

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntryId,
    pub title: String,
    /// Short card/header summary, shown escaped.
    pub excerpt: String,
    /// Full post body. Trusted authored HTML, inserted verbatim in detail
    /// views.
    pub content: String,
    /// Optional header image path.
    #[serde(default)]
    pub image: Option<String>,
    pub author: String,
    /// Publish date as `YYYY-MM-DD`.
    pub date: String,
    /// Human-readable estimate, e.g. `8 min read`.
    pub read_time: String,
    pub tags: Vec<String>,
    pub category: String,
    pub featured: bool,
}

impl CatalogEntry for BlogPost {
    fn id(&self) -> EntryId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn featured(&self) -> bool {
        self.featured
    }

    fn validate(&self) -> Result<(), EntryValidationError> {
        if self.title.trim().is_empty() {
            return Err(EntryValidationError::EmptyTitle(self.id));
        }
        if self.author.trim().is_empty() {
            return Err(EntryValidationError::EmptyAuthor(self.id));
        }
        if !is_iso_date(&self.date) {
            return Err(EntryValidationError::InvalidDate {
                id: self.id,
                date: self.date.clone(),
            });
        }
        Ok(())
    }
}

/// Authored-data validation errors surfaced at catalog construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyTitle(EntryId),
    EmptyAuthor(EntryId),
    InvalidDate { id: EntryId, date: String },
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle(id) => write!(f, "entry {id} has an empty title"),
            Self::EmptyAuthor(id) => write!(f, "entry {id} has an empty author"),
            Self::InvalidDate { id, date } => {
                write!(f, "entry {id} has invalid date `{date}` (expected YYYY-MM-DD)")
            }
        }
    }
}

impl Error for EntryValidationError {}

/// Returns whether `value` is a plausible `YYYY-MM-DD` calendar date.
pub fn is_iso_date(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    if parts.len() != 3 {
        return false;
    }
    let widths = [4usize, 2, 2];
    for (part, width) in parts.iter().zip(widths) {
        if part.len() != width || !part.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }
    let month: u32 = parts[1].parse().unwrap_or(0);
    let day: u32 = parts[2].parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::{is_iso_date, BlogPost, CatalogEntry, EntryValidationError, Project};

    fn sample_project() -> Project {
        Project {
            id: 7,
            title: "Weather Dashboard".to_string(),
            description: "Interactive charts.".to_string(),
            tags: vec!["JavaScript".to_string()],
            icon: "fas fa-cloud-sun".to_string(),
            image: None,
            featured: false,
        }
    }

    #[test]
    fn project_exposes_capability_subset() {
        let project = sample_project();
        assert_eq!(project.id(), 7);
        assert_eq!(project.title(), "Weather Dashboard");
        assert_eq!(project.tags().len(), 1);
        assert!(!project.featured());
    }

    #[test]
    fn project_validation_rejects_blank_title() {
        let mut project = sample_project();
        project.title = "   ".to_string();
        let err = project.validate().unwrap_err();
        assert_eq!(err, EntryValidationError::EmptyTitle(7));
    }

    #[test]
    fn blog_validation_rejects_malformed_date() {
        let post = BlogPost {
            id: 1,
            title: "Hooks".to_string(),
            excerpt: "x".to_string(),
            content: "<p>x</p>".to_string(),
            image: None,
            author: "John Carter".to_string(),
            date: "June 2023".to_string(),
            read_time: "8 min read".to_string(),
            tags: vec![],
            category: "React".to_string(),
            featured: true,
        };
        assert!(matches!(
            post.validate(),
            Err(EntryValidationError::InvalidDate { id: 1, .. })
        ));
    }

    #[test]
    fn blog_wire_format_uses_camel_case_read_time() {
        let post = BlogPost {
            id: 3,
            title: "Mobile-First".to_string(),
            excerpt: "Why it matters.".to_string(),
            content: "<p>Body.</p>".to_string(),
            image: Some("images/blog-3.jpg".to_string()),
            author: "John Carter".to_string(),
            date: "2023-04-10".to_string(),
            read_time: "12 min read".to_string(),
            tags: vec!["PWA".to_string()],
            category: "Mobile".to_string(),
            featured: false,
        };
        let json = serde_json::to_value(&post).expect("post should serialize");
        assert_eq!(json["readTime"], "12 min read");
        let decoded: BlogPost = serde_json::from_value(json).expect("post should round-trip");
        assert_eq!(decoded, post);
    }

    #[test]
    fn project_payload_without_image_key_still_decodes() {
        let raw = serde_json::json!({
            "id": 1,
            "title": "E-Commerce Website",
            "description": "Responsive storefront.",
            "tags": ["React", "Stripe"],
            "icon": "fas fa-shopping-cart",
            "featured": true
        });
        let decoded: Project = serde_json::from_value(raw).expect("payload should decode");
        assert_eq!(decoded.image, None);
        assert!(decoded.featured);
    }

    #[test]
    fn iso_date_check_accepts_calendar_shapes_only() {
        assert!(is_iso_date("2023-06-15"));
        assert!(!is_iso_date("2023-6-15"));
        assert!(!is_iso_date("2023-13-01"));
        assert!(!is_iso_date("15-06-2023"));
        assert!(!is_iso_date("soon"));
    }
}
