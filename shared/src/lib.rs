//! Content model and state for the OmegaNews site.
//!
//! Everything here is target independent: the Yew front end runs it on top
//! of browser storage, the CLI on top of a data directory, and the tests on
//! [`storage::MemoryStorage`].

/// Time sources.
pub mod clock;
pub mod config;
/// Error type.
pub mod error;
pub mod models;
pub mod newsroom;
pub mod seed;
pub mod session;
pub mod storage;
pub mod store;
/// String helpers.
pub mod text;
/// Toast queue.
pub mod toast;
pub mod views;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Collection, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use models::{
    Article, Author, AuthorSocial, Category, Comment, CommentStatus, MediaItem, NavItem, Page,
    PageStatus, SiteSettings, ToastKind, ToastMessage,
};
pub use newsroom::Newsroom;
pub use session::SessionGate;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::ContentStore;
pub use toast::ToastQueue;
