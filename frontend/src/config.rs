//! Compile-time knobs of the front end.

/// Spinner time before an admin route decides between content and login.
pub const GUARD_DELAY_MS: u32 = 100;

/// Artificial wait between submitting the login form and checking it.
pub const LOGIN_DELAY_MS: u32 = 800;

/// Cards per page on the public listing pages.
pub const LIST_PAGE_SIZE: usize = 6;

/// Rows per page in admin tables.
pub const ADMIN_PAGE_SIZE: usize = 10;

pub const RELATED_ARTICLES: usize = 3;

pub const SIDEBAR_LATEST: usize = 5;

pub const SITE_TAGLINE: &str = "The Global Perspective";

/// Shortcut tags shown in the footer; each links to a search.
pub const TRENDING_TAGS: &[&str] = &["Politics", "Tech", "Travel", "Health", "Crypto", "AI", "Fashion"];

/// Placeholder hero used by new posts until an image URL is entered.
pub const DEFAULT_POST_IMAGE: &str = "https://picsum.photos/seed/new/800/600";
