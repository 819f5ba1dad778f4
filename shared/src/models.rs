//! Records held by the content store.
//!
//! Field names serialize in camelCase so the JSON written to browser storage
//! keeps the layout existing installs already have on disk.

use serde::{Deserialize, Serialize};

/// Links shown on an author profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSocial {
    /// Twitter profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Facebook profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl AuthorSocial {
    /// True when no link is set.
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.facebook.is_none() && self.linkedin.is_none()
    }
}

/// A staff member. Articles embed a copy of this record rather than a
/// reference, so edits here never reach already-published articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique id.
    pub id: String,
    /// Display name, also the key of the public author page.
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Short biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Job title such as `Senior Editor`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Contact address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Social profile links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social: Option<AuthorSocial>,
}

/// A news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique id.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Teaser shown on cards.
    pub excerpt: String,
    /// HTML or Markdown body.
    pub content: String,
    /// Category name. Not a reference; renaming a category leaves this as is.
    pub category: String,
    /// Author copy taken when the post was saved.
    pub author: Author,
    /// Publish date, `YYYY-MM-DD`.
    pub date: String,
    /// Featured image URL.
    pub image_url: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Detail page view counter.
    #[serde(default)]
    pub views: u64,
}

/// A section of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique id.
    pub id: String,
    /// Display name, matched against [`Article::category`].
    pub name: String,
    /// URL segment.
    pub slug: String,
}

/// Moderation state of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// Visible on the article page.
    Approved,
    /// Waiting for moderation.
    Pending,
    /// Hidden.
    Rejected,
}

impl CommentStatus {
    /// Every status, in moderation order.
    pub const ALL: [CommentStatus; 3] =
        [CommentStatus::Pending, CommentStatus::Approved, CommentStatus::Rejected];

    /// Lowercase name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentStatus::Approved => "approved",
            CommentStatus::Pending => "pending",
            CommentStatus::Rejected => "rejected",
        }
    }

    /// Parse a stored name or a CLI verb (`approve`, `reject`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "approved" | "approve" => Some(CommentStatus::Approved),
            "pending" => Some(CommentStatus::Pending),
            "rejected" | "reject" => Some(CommentStatus::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reader comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique id.
    pub id: String,
    /// Name typed by the reader.
    pub author: String,
    /// Date posted.
    pub date: String,
    /// Comment text.
    pub content: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
    /// Moderation state; absent means pending.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
}

impl Comment {
    /// Status with the stored default applied: a comment that was never
    /// moderated is pending.
    pub fn effective_status(&self) -> CommentStatus {
        self.status.unwrap_or(CommentStatus::Pending)
    }
}

/// Publication state of a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    /// Only reachable through the admin preview.
    Draft,
    /// Routable by slug.
    Published,
}

impl PageStatus {
    /// Lowercase name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
        }
    }
}

/// A free-standing CMS page (about, imprint, landing pages, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique id.
    pub id: String,
    /// Heading.
    pub title: String,
    /// URL segment under `/page/`.
    pub slug: String,
    /// HTML or Markdown body.
    pub content: String,
    /// Draft or published.
    pub status: PageStatus,
    /// Overrides the document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Meta description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Banner image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    /// RFC 3339 stamp of the last save.
    pub last_updated: String,
}

impl Page {
    /// True once the page is published.
    pub fn is_published(&self) -> bool {
        self.status == PageStatus::Published
    }

    /// Title used for the document head.
    pub fn head_title(&self) -> &str {
        self.meta_title
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(&self.title)
    }
}

/// One header menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Text shown in the menu.
    pub label: String,
    /// Site path the entry links to.
    pub path: String,
    /// Whether the path is a category page.
    pub is_category: bool,
}

/// Site-wide singleton edited from the admin settings screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Document title suffix.
    pub site_title: String,
    /// Show advertisement placeholders.
    pub show_ads: bool,
    /// Logo text in header and footer.
    pub logo_text: String,
    /// Copyright line.
    pub footer_text: String,
    /// Header menu.
    #[serde(default)]
    pub navigation: Vec<NavItem>,
}

/// An uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique id.
    pub id: String,
    /// Asset URL.
    pub url: String,
    /// File name.
    pub name: String,
    /// Asset type, `image` for now.
    #[serde(rename = "type")]
    pub kind: String,
    /// RFC 3339 stamp of the upload.
    pub date: String,
}

/// Tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    /// An action went through.
    Success,
    /// An action failed.
    Error,
    /// Neutral notice.
    Info,
}

/// A transient notification. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastMessage {
    /// Unique id.
    pub id: String,
    /// Tone.
    #[serde(rename = "type")]
    pub kind: ToastKind,
    /// Text shown to the user.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_uses_browser_field_names() {
        let raw = r#"{
            "id": "1",
            "title": "Summit",
            "excerpt": "Leaders agree",
            "content": "<p>body</p>",
            "category": "World",
            "author": { "id": "a1", "name": "Sarah Jenkins", "avatar": "a.png" },
            "date": "2023-10-24",
            "imageUrl": "https://example.com/1.jpg",
            "tags": ["Climate"],
            "views": 12500
        }"#;
        let article: Article = serde_json::from_str(raw).expect("parse article");
        assert_eq!(article.image_url, "https://example.com/1.jpg");
        assert_eq!(article.author.name, "Sarah Jenkins");
        assert_eq!(article.views, 12500);

        let value = serde_json::to_value(&article).expect("serialize article");
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("image_url").is_none());
        assert!(value["author"].get("bio").is_none());
    }

    #[test]
    fn comment_without_status_reads_as_pending() {
        let raw = r#"{"id":"1","author":"James","date":"2023-10-25T10:30:00","content":"hi","avatar":""}"#;
        let comment: Comment = serde_json::from_str(raw).expect("parse comment");
        assert_eq!(comment.status, None);
        assert_eq!(comment.effective_status(), CommentStatus::Pending);
    }

    #[test]
    fn media_and_toast_kind_serialize_as_type() {
        let item = MediaItem {
            id: "1".to_string(),
            url: "u".to_string(),
            name: "n.jpg".to_string(),
            kind: "image".to_string(),
            date: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&item).expect("serialize media");
        assert_eq!(value["type"], "image");

        let toast = ToastMessage {
            id: "t".to_string(),
            kind: ToastKind::Error,
            message: "boom".to_string(),
        };
        let value = serde_json::to_value(&toast).expect("serialize toast");
        assert_eq!(value["type"], "error");
    }

    #[test]
    fn page_head_title_prefers_meta_title() {
        let mut page = Page {
            id: "p1".to_string(),
            title: "About".to_string(),
            slug: "about-us".to_string(),
            content: String::new(),
            status: PageStatus::Draft,
            meta_title: Some("  ".to_string()),
            meta_description: None,
            hero_image: None,
            last_updated: "2024-01-01T00:00:00.000Z".to_string(),
        };
        assert_eq!(page.head_title(), "About");
        page.meta_title = Some("About OmegaNews".to_string());
        assert_eq!(page.head_title(), "About OmegaNews");
        assert!(!page.is_published());
    }

    #[test]
    fn comment_status_parses_cli_verbs() {
        assert_eq!(CommentStatus::parse("approve"), Some(CommentStatus::Approved));
        assert_eq!(CommentStatus::parse(" Rejected "), Some(CommentStatus::Rejected));
        assert_eq!(CommentStatus::parse("spam"), None);
    }
}
