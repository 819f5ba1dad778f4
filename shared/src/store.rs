//! Content collections with write-through persistence.
//!
//! Every mutation rewrites the whole affected collection under its key.
//! Collections are independent: there is no transaction spanning two of
//! them, so article author snapshots are never rewritten when an author
//! changes.

use serde::de::DeserializeOwned;

use crate::{
    clock::Clock,
    config::{Collection, StoreConfig},
    error::StoreResult,
    models::{Article, Author, Category, Comment, CommentStatus, MediaItem, Page, SiteSettings},
    seed,
    storage::{load_json, save_json, KeyValueStorage},
};

/// Records addressed by a string id unique within their collection.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($ty:ty),* $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

identified!(Article, Author, Category, Comment, MediaItem, Page);

/// Replace every element whose id matches. Returns whether anything matched.
fn replace_by_id<T: Identified + Clone>(items: &mut [T], record: T) -> bool {
    let mut matched = false;
    for item in items.iter_mut().filter(|item| item.id() == record.id()) {
        *item = record.clone();
        matched = true;
    }
    matched
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    before - items.len()
}

/// In-memory collections mirrored to a [`KeyValueStorage`] after each change.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStore<S> {
    storage: S,
    config: StoreConfig,
    articles: Vec<Article>,
    categories: Vec<Category>,
    comments: Vec<Comment>,
    pages: Vec<Page>,
    authors: Vec<Author>,
    media: Vec<MediaItem>,
    settings: SiteSettings,
}

impl<S: KeyValueStorage> ContentStore<S> {
    /// Hydrate every collection, failing on the first unreadable or corrupt
    /// entry. Absent entries fall back to the seed dataset.
    pub fn open(storage: S, config: StoreConfig, clock: &dyn Clock) -> StoreResult<Self> {
        let articles = load_strict(&storage, &config, Collection::Articles, seed::articles)?;
        let categories = load_strict(&storage, &config, Collection::Categories, seed::categories)?;
        let comments = load_strict(&storage, &config, Collection::Comments, seed::comments)?;
        let pages = load_strict(&storage, &config, Collection::Pages, seed::pages)?;
        let authors = load_strict(&storage, &config, Collection::Authors, seed::authors)?;
        let media = load_strict(&storage, &config, Collection::Media, || seed::media(clock))?;
        let settings = load_strict(&storage, &config, Collection::Settings, seed::settings)?;

        Ok(Self {
            storage,
            config,
            articles,
            categories,
            comments,
            pages,
            authors,
            media,
            settings,
        })
    }

    /// Like [`ContentStore::open`], but a collection that cannot be read is
    /// replaced by its seed value and logged instead of failing the whole
    /// store. The broken entry is left in storage until the next write.
    pub fn open_or_seed(storage: S, config: StoreConfig, clock: &dyn Clock) -> Self {
        let articles = load_lenient(&storage, &config, Collection::Articles, seed::articles);
        let categories = load_lenient(&storage, &config, Collection::Categories, seed::categories);
        let comments = load_lenient(&storage, &config, Collection::Comments, seed::comments);
        let pages = load_lenient(&storage, &config, Collection::Pages, seed::pages);
        let authors = load_lenient(&storage, &config, Collection::Authors, seed::authors);
        let media = load_lenient(&storage, &config, Collection::Media, || seed::media(clock));
        let settings = load_lenient(&storage, &config, Collection::Settings, seed::settings);

        Self {
            storage,
            config,
            articles,
            categories,
            comments,
            pages,
            authors,
            media,
            settings,
        }
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Key layout in use.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Posts, newest first as stored.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Categories in menu order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All comments.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// CMS pages.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Registered authors.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Media library.
    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    /// Site settings.
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Post by id.
    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Page by id.
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Author by id.
    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    /// Category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// True when `id` is already used in `collection`.
    pub fn contains_id(&self, collection: Collection, id: &str) -> bool {
        match collection {
            Collection::Articles => self.articles.iter().any(|item| item.id == id),
            Collection::Categories => self.categories.iter().any(|item| item.id == id),
            Collection::Comments => self.comments.iter().any(|item| item.id == id),
            Collection::Pages => self.pages.iter().any(|item| item.id == id),
            Collection::Authors => self.authors.iter().any(|item| item.id == id),
            Collection::Media => self.media.iter().any(|item| item.id == id),
            Collection::Settings => false,
        }
    }

    // ---- articles -------------------------------------------------------

    /// New posts go to the front of the list.
    pub fn add_article(&mut self, article: Article) -> StoreResult<()> {
        self.articles.insert(0, article);
        self.persist(Collection::Articles)
    }

    /// Replace the post with the same id. Returns whether one matched.
    pub fn update_article(&mut self, article: Article) -> StoreResult<bool> {
        let matched = replace_by_id(&mut self.articles, article);
        self.persist(Collection::Articles)?;
        Ok(matched)
    }

    /// Remove every post with `id` and return how many went.
    pub fn delete_article(&mut self, id: &str) -> StoreResult<usize> {
        let removed = remove_by_id(&mut self.articles, id);
        self.persist(Collection::Articles)?;
        Ok(removed)
    }

    /// Bump the view counter of one article.
    pub fn record_article_view(&mut self, id: &str) -> StoreResult<bool> {
        let Some(article) = self.articles.iter_mut().find(|article| article.id == id) else {
            return Ok(false);
        };
        article.views = article.views.saturating_add(1);
        self.persist(Collection::Articles)?;
        Ok(true)
    }

    // ---- pages ----------------------------------------------------------

    /// Prepend a page.
    pub fn add_page(&mut self, page: Page) -> StoreResult<()> {
        self.pages.insert(0, page);
        self.persist(Collection::Pages)
    }

    /// Replace the page with the same id. Returns whether one matched.
    pub fn update_page(&mut self, page: Page) -> StoreResult<bool> {
        let matched = replace_by_id(&mut self.pages, page);
        self.persist(Collection::Pages)?;
        Ok(matched)
    }

    /// Remove every page with `id` and return how many went.
    pub fn delete_page(&mut self, id: &str) -> StoreResult<usize> {
        let removed = remove_by_id(&mut self.pages, id);
        self.persist(Collection::Pages)?;
        Ok(removed)
    }

    // ---- settings -------------------------------------------------------

    /// Replace the settings singleton.
    pub fn update_settings(&mut self, settings: SiteSettings) -> StoreResult<()> {
        self.settings = settings;
        self.persist(Collection::Settings)
    }

    // ---- categories -----------------------------------------------------

    /// Categories keep insertion order, so new ones are appended.
    pub fn add_category(&mut self, category: Category) -> StoreResult<()> {
        self.categories.push(category);
        self.persist(Collection::Categories)
    }

    /// Replace the category with the same id. Returns whether one matched.
    pub fn update_category(&mut self, category: Category) -> StoreResult<bool> {
        let matched = replace_by_id(&mut self.categories, category);
        self.persist(Collection::Categories)?;
        Ok(matched)
    }

    /// Remove every category with `id` and return how many went.
    pub fn delete_category(&mut self, id: &str) -> StoreResult<usize> {
        let removed = remove_by_id(&mut self.categories, id);
        self.persist(Collection::Categories)?;
        Ok(removed)
    }

    // ---- comments -------------------------------------------------------

    /// Set one comment's status. Returns whether it exists.
    pub fn update_comment_status(&mut self, id: &str, status: CommentStatus) -> StoreResult<bool> {
        let mut matched = false;
        for comment in self.comments.iter_mut().filter(|comment| comment.id == id) {
            comment.status = Some(status);
            matched = true;
        }
        self.persist(Collection::Comments)?;
        Ok(matched)
    }

    /// Remove every comment with `id` and return how many went.
    pub fn delete_comment(&mut self, id: &str) -> StoreResult<usize> {
        let removed = remove_by_id(&mut self.comments, id);
        self.persist(Collection::Comments)?;
        Ok(removed)
    }

    // ---- authors --------------------------------------------------------

    /// Append an author.
    pub fn add_author(&mut self, author: Author) -> StoreResult<()> {
        self.authors.push(author);
        self.persist(Collection::Authors)
    }

    /// Replace the author with the same id. Returns whether one matched.
    pub fn update_author(&mut self, author: Author) -> StoreResult<bool> {
        let matched = replace_by_id(&mut self.authors, author);
        self.persist(Collection::Authors)?;
        Ok(matched)
    }

    /// Remove every author with `id` and return how many went.
    pub fn delete_author(&mut self, id: &str) -> StoreResult<usize> {
        let removed = remove_by_id(&mut self.authors, id);
        self.persist(Collection::Authors)?;
        Ok(removed)
    }

    // ---- media ----------------------------------------------------------

    /// Prepend a media item.
    pub fn add_media(&mut self, item: MediaItem) -> StoreResult<()> {
        self.media.insert(0, item);
        self.persist(Collection::Media)
    }

    /// Remove every media item with `id` and return how many went.
    pub fn delete_media(&mut self, id: &str) -> StoreResult<usize> {
        let removed = remove_by_id(&mut self.media, id);
        self.persist(Collection::Media)?;
        Ok(removed)
    }

    // ---- persistence ----------------------------------------------------

    /// Serialize one collection in full and write it under its key.
    pub fn persist(&self, collection: Collection) -> StoreResult<()> {
        let key = self.config.key(collection);
        tracing::debug!(%key, "persisting collection");
        match collection {
            Collection::Articles => save_json(&self.storage, &key, &self.articles),
            Collection::Categories => save_json(&self.storage, &key, &self.categories),
            Collection::Comments => save_json(&self.storage, &key, &self.comments),
            Collection::Pages => save_json(&self.storage, &key, &self.pages),
            Collection::Settings => save_json(&self.storage, &key, &self.settings),
            Collection::Authors => save_json(&self.storage, &key, &self.authors),
            Collection::Media => save_json(&self.storage, &key, &self.media),
        }
    }

    /// Write every collection.
    pub fn persist_all(&self) -> StoreResult<()> {
        for collection in Collection::ALL {
            self.persist(collection)?;
        }
        Ok(())
    }

    /// Throw away every collection and write the seed dataset back.
    pub fn reset_to_seed(&mut self, clock: &dyn Clock) -> StoreResult<()> {
        self.articles = seed::articles();
        self.categories = seed::categories();
        self.comments = seed::comments();
        self.pages = seed::pages();
        self.authors = seed::authors();
        self.media = seed::media(clock);
        self.settings = seed::settings();
        self.persist_all()
    }
}

fn load_strict<T, S>(
    storage: &S,
    config: &StoreConfig,
    collection: Collection,
    fallback: impl FnOnce() -> T,
) -> StoreResult<T>
where
    T: DeserializeOwned,
    S: KeyValueStorage,
{
    let key = config.key(collection);
    Ok(load_json(storage, &key)?.unwrap_or_else(fallback))
}

fn load_lenient<T, S>(
    storage: &S,
    config: &StoreConfig,
    collection: Collection,
    fallback: impl FnOnce() -> T,
) -> T
where
    T: DeserializeOwned,
    S: KeyValueStorage,
{
    let key = config.key(collection);
    match load_json(storage, &key) {
        Ok(Some(value)) => value,
        Ok(None) => fallback(),
        Err(err) => {
            tracing::warn!(%key, error = %err, "falling back to seed data");
            fallback()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::ManualClock,
        error::StoreError,
        models::PageStatus,
        storage::MemoryStorage,
    };

    fn open(storage: &MemoryStorage) -> ContentStore<MemoryStorage> {
        ContentStore::open(storage.clone(), StoreConfig::default(), &ManualClock::at(0))
            .expect("open store")
    }

    fn sample_article(id: &str) -> Article {
        let mut article = seed::articles().remove(0);
        article.id = id.to_string();
        article.title = format!("Breaking {id}");
        article.views = 0;
        article
    }

    fn stored<T: DeserializeOwned>(storage: &MemoryStorage, key: &str) -> T {
        load_json(storage, key)
            .expect("read key")
            .expect("key present")
    }

    #[test]
    fn empty_storage_hydrates_from_seed() {
        let storage = MemoryStorage::new();
        let store = open(&storage);
        assert_eq!(store.articles().len(), 12);
        assert_eq!(store.categories().len(), 8);
        assert_eq!(store.authors().len(), 3);
        assert!(store.pages().is_empty());
        assert!(storage.is_empty(), "opening must not write");
    }

    #[test]
    fn added_article_is_prepended_and_persisted() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let article = sample_article("900");
        store.add_article(article.clone()).expect("add article");

        assert_eq!(store.articles()[0], article);
        let persisted: Vec<Article> = stored(&storage, "omega_articles");
        assert_eq!(persisted.iter().filter(|a| a.id == "900").count(), 1);
        assert_eq!(persisted[0], article);

        let reopened = open(&storage);
        assert_eq!(reopened.article("900"), Some(&article));
    }

    #[test]
    fn update_replaces_only_the_matching_record() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let before = store.articles().to_vec();

        let mut edited = before[3].clone();
        edited.title = "Edited".to_string();
        assert!(store.update_article(edited.clone()).expect("update"));

        for (idx, article) in store.articles().iter().enumerate() {
            if idx == 3 {
                assert_eq!(article, &edited);
            } else {
                assert_eq!(article, &before[idx]);
            }
        }
    }

    #[test]
    fn update_of_unknown_id_is_silent() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let before = store.categories().to_vec();
        let ghost = Category {
            id: "missing".to_string(),
            name: "Ghost".to_string(),
            slug: "ghost".to_string(),
        };
        assert!(!store.update_category(ghost).expect("update"));
        assert_eq!(store.categories(), before.as_slice());
    }

    #[test]
    fn delete_removes_by_id_and_ignores_unknown() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        assert_eq!(store.delete_media("2").expect("delete"), 1);
        assert_eq!(store.media().len(), 3);
        assert!(store.media().iter().all(|item| item.id != "2"));

        let before = store.media().to_vec();
        assert_eq!(store.delete_media("nope").expect("delete"), 0);
        assert_eq!(store.media(), before.as_slice());
    }

    #[test]
    fn categories_and_authors_append_pages_and_media_prepend() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        store
            .add_category(Category {
                id: "c9".to_string(),
                name: "Travel".to_string(),
                slug: "travel".to_string(),
            })
            .expect("add category");
        assert_eq!(store.categories().last().map(|c| c.id.as_str()), Some("c9"));

        store
            .add_page(Page {
                id: "p1".to_string(),
                title: "About".to_string(),
                slug: "about-us".to_string(),
                content: "<p>hi</p>".to_string(),
                status: PageStatus::Draft,
                meta_title: None,
                meta_description: None,
                hero_image: None,
                last_updated: "2024-01-01T00:00:00.000Z".to_string(),
            })
            .expect("add page");
        store
            .add_media(MediaItem {
                id: "m9".to_string(),
                url: "u".to_string(),
                name: "n".to_string(),
                kind: "image".to_string(),
                date: "d".to_string(),
            })
            .expect("add media");
        assert_eq!(store.pages()[0].id, "p1");
        assert_eq!(store.media()[0].id, "m9");
    }

    #[test]
    fn comment_status_update_touches_one_field() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let before = store.comments()[1].clone();
        assert!(store
            .update_comment_status("2", CommentStatus::Rejected)
            .expect("update status"));
        let after = &store.comments()[1];
        assert_eq!(after.status, Some(CommentStatus::Rejected));
        assert_eq!(after.content, before.content);
        assert_eq!(after.author, before.author);

        let persisted: Vec<Comment> = stored(&storage, "omega_comments");
        assert_eq!(persisted[1].status, Some(CommentStatus::Rejected));
    }

    #[test]
    fn author_edit_does_not_touch_article_snapshots() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let mut author = store.authors()[0].clone();
        author.name = "Sarah J. Jenkins".to_string();
        store.update_author(author).expect("update author");
        assert_eq!(store.articles()[0].author.name, "Sarah Jenkins");
    }

    #[test]
    fn record_view_increments_counter() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let before = store.article("5").map(|a| a.views).unwrap_or_default();
        assert!(store.record_article_view("5").expect("record view"));
        assert_eq!(store.article("5").map(|a| a.views), Some(before + 1));
        assert!(!store.record_article_view("missing").expect("record view"));
    }

    #[test]
    fn corrupt_entry_fails_strict_open_but_not_lenient() {
        let storage = MemoryStorage::new();
        storage.set_item("omega_categories", "[{").expect("seed corrupt");

        let err = ContentStore::open(storage.clone(), StoreConfig::default(), &ManualClock::at(0))
            .expect_err("strict open must fail");
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "omega_categories"));

        let store =
            ContentStore::open_or_seed(storage.clone(), StoreConfig::default(), &ManualClock::at(0));
        assert_eq!(store.categories().len(), 8);
    }

    #[test]
    fn settings_round_trip_through_storage() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        let mut settings = store.settings().clone();
        settings.show_ads = true;
        settings.site_title = "Omega Daily".to_string();
        store.update_settings(settings.clone()).expect("update settings");

        assert_eq!(open(&storage).settings(), &settings);
    }

    #[test]
    fn reset_to_seed_overwrites_everything() {
        let storage = MemoryStorage::new();
        let mut store = open(&storage);
        store.delete_article("1").expect("delete");
        store.reset_to_seed(&ManualClock::at(0)).expect("reset");
        assert_eq!(store.articles().len(), 12);
        assert_eq!(storage.len(), 7);
    }
}
