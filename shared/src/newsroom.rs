//! The state container handed to the UI and the CLI.
//!
//! A [`Newsroom`] owns the content store, the admin session and the toast
//! queue, and turns every admin action into exactly one notification:
//! a success message when the change was written, an error message when
//! storage refused it. A failed write keeps the in-memory change.

use crate::{
    clock::Clock,
    config::{Collection, StoreConfig},
    error::{StoreError, StoreResult},
    models::{
        Article, Author, Category, CommentStatus, MediaItem, Page, SiteSettings, ToastKind,
        ToastMessage,
    },
    session::SessionGate,
    storage::KeyValueStorage,
    store::ContentStore,
    text::next_id,
    toast::ToastQueue,
};

/// Toast after a successful login.
pub const LOGIN_SUCCESS: &str = "Welcome back, Admin!";
/// Toast and inline error after a rejected login.
pub const LOGIN_FAILED: &str = "Invalid email or password";
/// Toast after logout.
pub const LOGGED_OUT: &str = "Logged out successfully.";

/// Content store, admin session and toast queue behind one handle.
#[derive(Debug, Clone, PartialEq)]
pub struct Newsroom<L, S, C> {
    store: ContentStore<L>,
    session: SessionGate<S>,
    toasts: ToastQueue,
    clock: C,
}

impl<L, S, C> Newsroom<L, S, C>
where
    L: KeyValueStorage,
    S: KeyValueStorage,
    C: Clock,
{
    /// Open with strict hydration: any unreadable entry is an error.
    pub fn open(local: L, session: S, config: StoreConfig, clock: C) -> StoreResult<Self> {
        let gate = SessionGate::open(session, &config)?;
        let toasts = ToastQueue::new(config.toast_ttl_ms);
        let store = ContentStore::open(local, config, &clock)?;
        Ok(Self {
            store,
            session: gate,
            toasts,
            clock,
        })
    }

    /// Open with seed fallbacks for anything unreadable.
    pub fn open_or_seed(local: L, session: S, config: StoreConfig, clock: C) -> Self {
        let gate = SessionGate::open_or_signed_out(session, &config);
        let toasts = ToastQueue::new(config.toast_ttl_ms);
        let store = ContentStore::open_or_seed(local, config, &clock);
        Self {
            store,
            session: gate,
            toasts,
            clock,
        }
    }

    /// Read access to the collections.
    pub fn store(&self) -> &ContentStore<L> {
        &self.store
    }

    /// The admin session.
    pub fn session(&self) -> &SessionGate<S> {
        &self.session
    }

    /// The clock every timestamp comes from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether an admin session is open.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    // ---- notifications --------------------------------------------------

    /// Queued toasts.
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Queue a toast and return its id.
    pub fn notify(&mut self, message: impl Into<String>, kind: ToastKind) -> String {
        let now = self.clock.now_ms();
        self.toasts.notify(message, kind, now)
    }

    /// Remove a toast; false when it was already gone.
    pub fn dismiss_toast(&mut self, id: &str) -> bool {
        self.toasts.dismiss(id)
    }

    /// Drop every toast older than the configured lifetime.
    pub fn expire_toasts(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.toasts.expire(now)
    }

    /// Toasts still on screen, oldest first.
    pub fn visible_toasts(&self) -> Vec<ToastMessage> {
        self.toasts.messages()
    }

    // ---- session --------------------------------------------------------

    /// Check the credentials. A mismatch raises an error toast and returns false.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<bool> {
        let now = self.clock.now_ms();
        let result = self.session.login(email, password, now);
        match result {
            Ok(true) => {
                tracing::info!("admin logged in");
                self.notify(LOGIN_SUCCESS, ToastKind::Success);
            },
            Ok(false) => {
                self.notify(LOGIN_FAILED, ToastKind::Error);
            },
            Err(ref err) => self.report_failure(err),
        }
        result
    }

    /// Close the admin session.
    pub fn logout(&mut self) -> StoreResult<()> {
        let result = self.session.logout();
        self.report(result, LOGGED_OUT)
    }

    // ---- content --------------------------------------------------------

    /// Fresh id for a record about to be added to `collection`.
    pub fn new_id(&self, collection: Collection) -> String {
        next_id(self.clock.now_ms(), |id| self.store.contains_id(collection, id))
    }

    /// Prepend a post.
    pub fn add_article(&mut self, article: Article) -> StoreResult<()> {
        let result = self.store.add_article(article);
        self.report(result, "Post created successfully!")
    }

    /// Replace the post with the same id.
    pub fn update_article(&mut self, article: Article) -> StoreResult<bool> {
        let result = self.store.update_article(article);
        self.report(result, "Post updated successfully!")
    }

    /// Remove every post with `id`.
    pub fn delete_article(&mut self, id: &str) -> StoreResult<usize> {
        let result = self.store.delete_article(id);
        self.report(result, "Post deleted.")
    }

    /// Reader-side counter; never announced.
    pub fn record_article_view(&mut self, id: &str) -> StoreResult<bool> {
        let result = self.store.record_article_view(id);
        if let Err(ref err) = result {
            tracing::warn!(%id, error = %err, "view count not saved");
        }
        result
    }

    /// Prepend a page.
    pub fn add_page(&mut self, page: Page) -> StoreResult<()> {
        let result = self.store.add_page(page);
        self.report(result, "Page created successfully!")
    }

    /// Replace the page with the same id.
    pub fn update_page(&mut self, page: Page) -> StoreResult<bool> {
        let result = self.store.update_page(page);
        self.report(result, "Page updated successfully!")
    }

    /// Remove every page with `id`.
    pub fn delete_page(&mut self, id: &str) -> StoreResult<usize> {
        let result = self.store.delete_page(id);
        self.report(result, "Page deleted.")
    }

    /// Replace the site settings.
    pub fn update_settings(&mut self, settings: SiteSettings) -> StoreResult<()> {
        let result = self.store.update_settings(settings);
        self.report(result, "Settings saved!")
    }

    /// Append a category.
    pub fn add_category(&mut self, category: Category) -> StoreResult<()> {
        let result = self.store.add_category(category);
        self.report(result, "Category added!")
    }

    /// Replace the category with the same id.
    pub fn update_category(&mut self, category: Category) -> StoreResult<bool> {
        let result = self.store.update_category(category);
        self.report(result, "Category updated!")
    }

    /// Remove every category with `id`.
    pub fn delete_category(&mut self, id: &str) -> StoreResult<usize> {
        let result = self.store.delete_category(id);
        self.report(result, "Category deleted.")
    }

    /// Set the moderation status of a comment.
    pub fn update_comment_status(&mut self, id: &str, status: CommentStatus) -> StoreResult<bool> {
        let result = self.store.update_comment_status(id, status);
        self.report(result, &format!("Comment {status}."))
    }

    /// Remove every comment with `id`.
    pub fn delete_comment(&mut self, id: &str) -> StoreResult<usize> {
        let result = self.store.delete_comment(id);
        self.report(result, "Comment deleted.")
    }

    /// Append an author.
    pub fn add_author(&mut self, author: Author) -> StoreResult<()> {
        let result = self.store.add_author(author);
        self.report(result, "Author added!")
    }

    /// Replace the author with the same id.
    pub fn update_author(&mut self, author: Author) -> StoreResult<bool> {
        let result = self.store.update_author(author);
        self.report(result, "Author updated!")
    }

    /// Remove every author with `id`.
    pub fn delete_author(&mut self, id: &str) -> StoreResult<usize> {
        let result = self.store.delete_author(id);
        self.report(result, "Author deleted.")
    }

    /// Prepend a media item.
    pub fn add_media(&mut self, item: MediaItem) -> StoreResult<()> {
        let result = self.store.add_media(item);
        self.report(result, "Media uploaded!")
    }

    /// Remove every media item with `id`.
    pub fn delete_media(&mut self, id: &str) -> StoreResult<usize> {
        let result = self.store.delete_media(id);
        self.report(result, "Media deleted.")
    }

    /// Rewrite every collection with the bundled dataset.
    pub fn reset_to_seed(&mut self) -> StoreResult<()> {
        let result = self.store.reset_to_seed(&self.clock);
        self.report(result, "Content reset to defaults.")
    }

    fn report<T>(&mut self, result: StoreResult<T>, success: &str) -> StoreResult<T> {
        match result {
            Ok(value) => {
                tracing::info!(message = success, "content change saved");
                self.notify(success, ToastKind::Success);
                Ok(value)
            },
            Err(err) => {
                self.report_failure(&err);
                Err(err)
            },
        }
    }

    fn report_failure(&mut self, err: &StoreError) {
        tracing::error!(key = err.key(), error = %err, "storage write failed");
        self.notify(format!("Could not save changes: {err}"), ToastKind::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clock::ManualClock,
        error::StoreError,
        models::Comment,
        seed,
        storage::MemoryStorage,
    };

    type TestNewsroom = Newsroom<MemoryStorage, MemoryStorage, ManualClock>;

    fn newsroom(local: &MemoryStorage, session: &MemoryStorage) -> TestNewsroom {
        Newsroom::open(
            local.clone(),
            session.clone(),
            StoreConfig::default(),
            ManualClock::at(1_700_000_000_000),
        )
        .expect("open newsroom")
    }

    fn last_toast(room: &TestNewsroom) -> (String, ToastKind) {
        let toast = room.toasts().last().cloned().expect("a toast");
        (toast.message, toast.kind)
    }

    /// Storage whose writes always fail.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::backend(key, "quota exceeded"))
        }

        fn remove_item(&self, key: &str) -> StoreResult<()> {
            Err(StoreError::backend(key, "quota exceeded"))
        }
    }

    #[test]
    fn created_article_is_announced_and_stored_once() {
        let local = MemoryStorage::new();
        let mut room = newsroom(&local, &MemoryStorage::new());
        let mut article = seed::articles().remove(3);
        article.id = room.new_id(Collection::Articles);
        room.add_article(article.clone()).expect("add article");

        let matching = room
            .store()
            .articles()
            .iter()
            .filter(|stored| stored.id == article.id)
            .collect::<Vec<_>>();
        assert_eq!(matching, vec![&article]);
        assert_eq!(
            last_toast(&room),
            ("Post created successfully!".to_string(), ToastKind::Success)
        );

        let reopened = newsroom(&local, &MemoryStorage::new());
        assert_eq!(reopened.store().articles()[0], article);
    }

    #[test]
    fn notification_is_gone_after_three_seconds() {
        let mut room = newsroom(&MemoryStorage::new(), &MemoryStorage::new());
        room.delete_category("1").expect("delete category");
        assert_eq!(room.toasts().len(), 1);

        room.clock().advance(2_999);
        assert_eq!(room.expire_toasts(), 0);
        assert_eq!(room.visible_toasts().len(), 1);

        room.clock().advance(1);
        assert_eq!(room.expire_toasts(), 1);
        assert!(room.visible_toasts().is_empty());
    }

    #[test]
    fn dismissed_toast_does_not_come_back() {
        let mut room = newsroom(&MemoryStorage::new(), &MemoryStorage::new());
        let id = room.notify("hello", ToastKind::Info);
        assert!(room.dismiss_toast(&id));
        assert!(!room.dismiss_toast(&id));
        assert!(room.toasts().is_empty());
    }

    #[test]
    fn login_flow_announces_each_outcome() {
        let session = MemoryStorage::new();
        let mut room = newsroom(&MemoryStorage::new(), &session);

        assert!(!room.login("admin@omeganews.com", "nope").expect("login"));
        assert!(!room.is_authenticated());
        assert_eq!(
            last_toast(&room),
            ("Invalid email or password".to_string(), ToastKind::Error)
        );

        assert!(room.login("admin@omeganews.com", "admin123").expect("login"));
        assert!(room.is_authenticated());
        assert_eq!(last_toast(&room).0, "Welcome back, Admin!");
        assert!(newsroom(&MemoryStorage::new(), &session).is_authenticated());

        room.logout().expect("logout");
        assert!(!room.is_authenticated());
        assert_eq!(last_toast(&room).0, "Logged out successfully.");
        assert!(session.is_empty());
    }

    #[test]
    fn moderation_message_names_the_status() {
        let mut room = newsroom(&MemoryStorage::new(), &MemoryStorage::new());
        room.update_comment_status("2", CommentStatus::Rejected)
            .expect("moderate");
        assert_eq!(last_toast(&room).0, "Comment rejected.");
        let rejected: Vec<&Comment> = room
            .store()
            .comments()
            .iter()
            .filter(|comment| comment.status == Some(CommentStatus::Rejected))
            .collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].id, "2");
    }

    #[test]
    fn update_of_missing_id_still_reports_success() {
        let mut room = newsroom(&MemoryStorage::new(), &MemoryStorage::new());
        let before = room.store().categories().to_vec();
        let ghost = Category {
            id: "ghost".to_string(),
            name: "Ghost".to_string(),
            slug: "ghost".to_string(),
        };
        assert!(!room.update_category(ghost).expect("update"));
        assert_eq!(room.store().categories(), before.as_slice());
        assert_eq!(last_toast(&room).0, "Category updated!");
    }

    #[test]
    fn failed_write_keeps_change_and_raises_error_toast() {
        let mut room = Newsroom::open(
            ReadOnlyStorage::default(),
            MemoryStorage::new(),
            StoreConfig::default(),
            ManualClock::at(0),
        )
        .expect("open newsroom");

        let err = room.delete_media("1").expect_err("write must fail");
        assert_eq!(err.key(), "omega_media");
        assert!(room.store().media().iter().all(|item| item.id != "1"));

        let toast = room.toasts().last().cloned().expect("error toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("quota exceeded"));
    }

    #[test]
    fn new_ids_skip_taken_values() {
        let local = MemoryStorage::new();
        local.set_item("omega_categories", "[]").expect("empty categories");
        local.set_item("omega_articles", "[]").expect("empty articles");
        let mut room = Newsroom::open(
            local,
            MemoryStorage::new(),
            StoreConfig::default(),
            ManualClock::at(7),
        )
        .expect("open newsroom");
        room.add_category(Category {
            id: "7".to_string(),
            name: "Seven".to_string(),
            slug: "seven".to_string(),
        })
        .expect("add category");
        assert_eq!(room.new_id(Collection::Categories), "8");
        assert_eq!(room.new_id(Collection::Articles), "7");
    }

    #[test]
    fn new_ids_step_past_the_seed_dataset() {
        let room = Newsroom::open(
            MemoryStorage::new(),
            MemoryStorage::new(),
            StoreConfig::default(),
            ManualClock::at(7),
        )
        .expect("open newsroom");
        assert_eq!(room.new_id(Collection::Categories), "9");
        assert_eq!(room.new_id(Collection::Articles), "13");
    }
}
