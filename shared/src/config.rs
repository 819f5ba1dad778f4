//! Store configuration.

/// Prefix shared by every persisted key.
pub const KEY_PREFIX: &str = "omega_";

/// Session-scoped key holding the admin token.
pub const SESSION_TOKEN_KEY: &str = "omega_admin_token";

/// How long a toast stays on screen.
pub const TOAST_TTL_MS: i64 = 3_000;

/// Admin login accepted by default.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@omeganews.com";
/// Password paired with [`DEFAULT_ADMIN_EMAIL`].
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Names of the persisted collections. The storage key is the prefix
/// followed by the name, e.g. `omega_articles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Published and draft posts.
    Articles,
    /// Section taxonomy.
    Categories,
    /// Reader comments.
    Comments,
    /// Free-standing CMS pages.
    Pages,
    /// Site settings singleton.
    Settings,
    /// Staff registry.
    Authors,
    /// Media library.
    Media,
}

impl Collection {
    /// Every collection in persistence order.
    pub const ALL: [Collection; 7] = [
        Collection::Articles,
        Collection::Categories,
        Collection::Comments,
        Collection::Pages,
        Collection::Settings,
        Collection::Authors,
        Collection::Media,
    ];

    /// Lowercase name used in keys and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Articles => "articles",
            Collection::Categories => "categories",
            Collection::Comments => "comments",
            Collection::Pages => "pages",
            Collection::Settings => "settings",
            Collection::Authors => "authors",
            Collection::Media => "media",
        }
    }

    /// Inverse of [`Collection::name`], ignoring case and surrounding blanks.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Collection::ALL
            .into_iter()
            .find(|collection| collection.name() == normalized)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime knobs of the store and session gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prefix put in front of each collection name.
    pub key_prefix: String,
    /// Session-scoped key for the admin token.
    pub session_key: String,
    /// Toast lifetime.
    pub toast_ttl_ms: i64,
    /// Accepted admin email.
    pub admin_email: String,
    /// Accepted admin password.
    pub admin_password: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: KEY_PREFIX.to_string(),
            session_key: SESSION_TOKEN_KEY.to_string(),
            toast_ttl_ms: TOAST_TTL_MS,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl StoreConfig {
    /// Storage key for a collection.
    pub fn key(&self, collection: Collection) -> String {
        format!("{}{}", self.key_prefix, collection.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_match_browser_layout() {
        let config = StoreConfig::default();
        let keys = Collection::ALL
            .iter()
            .map(|collection| config.key(*collection))
            .collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "omega_articles",
                "omega_categories",
                "omega_comments",
                "omega_pages",
                "omega_settings",
                "omega_authors",
                "omega_media",
            ]
        );
        assert_eq!(config.session_key, "omega_admin_token");
    }

    #[test]
    fn collection_parse_is_case_insensitive() {
        assert_eq!(Collection::parse(" Articles"), Some(Collection::Articles));
        assert_eq!(Collection::parse("media"), Some(Collection::Media));
        assert_eq!(Collection::parse("users"), None);
    }
}
