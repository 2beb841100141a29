//! Display-unit markup builders.
//!
//! # Responsibility
//! - Turn catalog records into card, detail, error and empty-state markup.
//! - Own HTML escaping for untrusted display fields.
//!
//! # Invariants
//! - `escape_html` covers `& < > " '`; every untrusted field passes through
//!   it, in both text and attribute positions.
//! - Blog `content` is authoring-time trusted HTML and is inserted verbatim
//!   in detail views only.

use crate::filter::registry::FilterSpec;
use crate::model::entry::{is_iso_date, BlogPost, Project};
use std::fmt::Write;

/// Tag chips shown on a compact blog card before clipping.
pub const BLOG_CARD_TAG_LIMIT: usize = 2;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Escapes text for safe insertion into markup, attribute positions
/// included.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Formats `YYYY-MM-DD` as `June 15, 2023`.
///
/// Malformed input is returned unchanged: display must never fail on
/// authored data that slipped past validation.
pub fn format_long_date(iso: &str) -> String {
    if !is_iso_date(iso) {
        return iso.to_string();
    }
    let parts: Vec<&str> = iso.split('-').collect();
    let month: usize = parts[1].parse().unwrap_or(0);
    let day: u32 = parts[2].parse().unwrap_or(0);
    match MONTH_NAMES.get(month.wrapping_sub(1)) {
        Some(name) => format!("{name} {day}, {}", parts[0]),
        None => iso.to_string(),
    }
}

/// Renders the gallery filter button bar with the active key marked.
pub fn filter_bar(specs: &[FilterSpec], active_key: &str) -> String {
    let mut bar = String::new();
    for spec in specs {
        let active = if spec.key == active_key { " active" } else { "" };
        let _ = write!(
            bar,
            "<button class=\"filter-btn{active}\" data-filter=\"{}\">{}</button>",
            escape_html(&spec.key),
            escape_html(&spec.label)
        );
    }
    bar
}

/// Renders one project card display unit.
pub fn project_card(project: &Project) -> String {
    let badge = if project.featured {
        "<span class=\"featured-badge\">Featured</span>"
    } else {
        ""
    };
    format!(
        "<div class=\"project-card fade-in\" data-entry-id=\"{id}\">\
<div class=\"project-image\"><i class=\"{icon}\"></i>{badge}</div>\
<div class=\"project-content\">\
<h3>{title}</h3>\
<p>{description}</p>\
<div class=\"project-tags\">{tags}</div>\
<div class=\"project-actions\">\
<button class=\"btn view-project-btn\" data-entry-id=\"{id}\">View Details</button>\
</div>\
</div>\
</div>",
        id = project.id,
        icon = escape_html(&project.icon),
        badge = badge,
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        tags = tag_chips(&project.tags, "project-tag", None),
    )
}

/// Renders one compact blog card display unit.
pub fn blog_card(post: &BlogPost) -> String {
    let header = match &post.image {
        Some(path) => format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            escape_html(path),
            escape_html(&post.title)
        ),
        None => "<i class=\"fas fa-file-alt\"></i>".to_string(),
    };
    let badge = if post.featured {
        "<span class=\"featured-badge\">Featured</span>"
    } else {
        ""
    };
    format!(
        "<div class=\"blog-card fade-in\" data-entry-id=\"{id}\">\
<div class=\"blog-image\">{header}{badge}</div>\
<div class=\"blog-content\">\
<div class=\"blog-meta-small\">\
<span class=\"blog-date\">{date}</span>\
<span class=\"blog-read-time\">{read_time}</span>\
</div>\
<h3>{title}</h3>\
<p>{excerpt}</p>\
<div class=\"blog-tags-small\">{tags}</div>\
<button class=\"btn read-more-btn\" data-entry-id=\"{id}\">Read More</button>\
</div>\
</div>",
        id = post.id,
        header = header,
        badge = badge,
        date = escape_html(&format_long_date(&post.date)),
        read_time = escape_html(&post.read_time),
        title = escape_html(&post.title),
        excerpt = escape_html(&post.excerpt),
        tags = tag_chips(&post.tags, "blog-tag-small", Some(BLOG_CARD_TAG_LIMIT)),
    )
}

/// Renders the full project detail view.
pub fn project_detail(project: &Project) -> String {
    let badge = if project.featured {
        "<span class=\"featured-badge large\">Featured Project</span>"
    } else {
        ""
    };
    format!(
        "<article class=\"project-detail\">\
<header class=\"project-detail-header\">{badge}\
<h1>{title}</h1>\
<p class=\"project-subtitle\">{description}</p>\
</header>\
<div class=\"project-detail-content\">\
<div class=\"project-hero\"><div class=\"project-icon-hero\"><i class=\"{icon}\"></i></div></div>\
<div class=\"project-technologies\">\
<h2>Technologies Used</h2>\
<div class=\"tech-tags\">{tags}</div>\
</div>\
<div class=\"project-links\">\
<a href=\"index.html#projects\" class=\"btn btn-accent\">Back to Projects</a>\
<a href=\"index.html\" class=\"btn btn-outline\">Go Home</a>\
</div>\
</div>\
</article>",
        badge = badge,
        title = escape_html(&project.title),
        description = escape_html(&project.description),
        icon = escape_html(&project.icon),
        tags = tag_chips(&project.tags, "tech-tag", None),
    )
}

/// Renders the full blog detail view.
///
/// The authored body is trusted HTML and goes in verbatim; everything else
/// is escaped.
pub fn blog_detail(post: &BlogPost) -> String {
    let badge = if post.featured {
        "<span class=\"featured-badge large\">Featured Post</span>"
    } else {
        ""
    };
    format!(
        "<div class=\"blog-header-content\">{badge}\
<h1>{title}</h1>\
<p class=\"blog-excerpt\">{excerpt}</p>\
<div class=\"blog-meta\">\
<div class=\"meta-item\">By {author}</div>\
<div class=\"meta-item\">{date}</div>\
<div class=\"meta-item\">{read_time}</div>\
<div class=\"meta-item\">{category}</div>\
</div>\
<div class=\"blog-tags\">{tags}</div>\
</div>\
<div class=\"blog-content\">{content}\
<div class=\"blog-navigation\">\
<a href=\"index.html#blogs\" class=\"nav-btn\">Back to Blogs</a>\
<a href=\"index.html#contact\" class=\"btn\">Get In Touch</a>\
</div>\
</div>",
        badge = badge,
        title = escape_html(&post.title),
        excerpt = escape_html(&post.excerpt),
        author = escape_html(&post.author),
        date = escape_html(&format_long_date(&post.date)),
        read_time = escape_html(&post.read_time),
        category = escape_html(&post.category),
        tags = tag_chips(&post.tags, "blog-tag", None),
        content = post.content,
    )
}

/// Corrective navigation targets for an error view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLinks {
    pub heading: String,
    pub back_label: String,
    pub back_href: String,
}

impl ErrorLinks {
    pub fn projects() -> Self {
        Self {
            heading: "Project Not Found".to_string(),
            back_label: "Back to Projects".to_string(),
            back_href: "index.html#projects".to_string(),
        }
    }

    pub fn blogs() -> Self {
        Self {
            heading: "Blog Post Not Found".to_string(),
            back_label: "Back to Blogs".to_string(),
            back_href: "index.html#blogs".to_string(),
        }
    }
}

/// Renders the recoverable error view. Always carries working navigation
/// actions; no failure path may leave the mount blank.
pub fn error_view(links: &ErrorLinks, message: &str) -> String {
    format!(
        "<div class=\"error-state\">\
<div class=\"error-icon\"><i class=\"fas fa-exclamation-triangle\"></i></div>\
<h2>{heading}</h2>\
<p>{message}</p>\
<div class=\"error-actions\">\
<a href=\"{back_href}\" class=\"btn\">{back_label}</a>\
<a href=\"index.html\" class=\"btn btn-outline\">Go Home</a>\
</div>\
</div>",
        heading = escape_html(&links.heading),
        message = escape_html(message),
        back_href = escape_html(&links.back_href),
        back_label = escape_html(&links.back_label),
    )
}

/// Renders the "nothing here yet" state for an empty selection.
pub fn no_entries_view(heading: &str, message: &str) -> String {
    format!(
        "<div class=\"no-entries-message\">\
<h3>{}</h3>\
<p>{}</p>\
</div>",
        escape_html(heading),
        escape_html(message)
    )
}

fn tag_chips(tags: &[String], chip_class: &str, limit: Option<usize>) -> String {
    let shown = match limit {
        Some(limit) => &tags[..tags.len().min(limit)],
        None => tags,
    };
    let mut chips = String::new();
    for tag in shown {
        let _ = write!(
            chips,
            "<span class=\"{chip_class}\">{}</span>",
            escape_html(tag)
        );
    }
    chips
}

#[cfg(test)]
mod tests {
    use super::{
        blog_card, blog_detail, error_view, escape_html, filter_bar, format_long_date,
        project_card, ErrorLinks, BLOG_CARD_TAG_LIMIT,
    };
    use crate::catalog::seed::{sample_blogs, sample_projects};
    use crate::filter::registry::FilterRegistry;

    #[test]
    fn escape_covers_markup_significant_characters() {
        assert_eq!(
            escape_html(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#039;chips&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn script_in_title_renders_as_literal_text() {
        let mut project = sample_projects().remove(0);
        project.title = "<script>alert(1)</script>".to_string();
        let card = project_card(&project);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn featured_badge_present_only_when_flagged() {
        let projects = sample_projects();
        assert!(project_card(&projects[0]).contains("featured-badge"));
        assert!(!project_card(&projects[2]).contains("featured-badge"));
    }

    #[test]
    fn blog_card_clips_tags_to_limit() {
        let post = sample_blogs().remove(0);
        assert!(post.tags.len() > BLOG_CARD_TAG_LIMIT);
        let card = blog_card(&post);
        let chips = card.matches("blog-tag-small\"").count();
        assert_eq!(chips, BLOG_CARD_TAG_LIMIT);
    }

    #[test]
    fn blog_detail_keeps_full_tag_list_and_verbatim_body() {
        let post = sample_blogs().remove(0);
        let detail = blog_detail(&post);
        for tag in &post.tags {
            assert!(detail.contains(&format!(">{tag}<")), "missing tag {tag}");
        }
        // Authored body must not be escaped.
        assert!(detail.contains("<h2>Introduction to React Hooks</h2>"));
    }

    #[test]
    fn long_date_formats_and_falls_back() {
        assert_eq!(format_long_date("2023-06-15"), "June 15, 2023");
        assert_eq!(format_long_date("2023-04-05"), "April 5, 2023");
        assert_eq!(format_long_date("recently"), "recently");
    }

    #[test]
    fn filter_bar_marks_active_key() {
        let registry = FilterRegistry::project_defaults();
        let bar = filter_bar(registry.specs(), "featured");
        assert!(bar.contains("class=\"filter-btn active\" data-filter=\"featured\""));
        assert!(bar.contains("class=\"filter-btn\" data-filter=\"all\""));
    }

    #[test]
    fn error_view_always_offers_navigation() {
        let view = error_view(&ErrorLinks::blogs(), "Pick a post from the main page.");
        assert!(view.contains("Back to Blogs"));
        assert!(view.contains("Go Home"));
        assert!(view.contains("Blog Post Not Found"));
    }
}
