// Reusable components live here.

pub mod admin_guard;
pub mod admin_layout;
pub mod article_card;
pub mod footer;
pub mod header;
pub mod icons;
pub mod loading_spinner;
pub mod pagination;
pub mod raw_html;
pub mod sidebar;
pub mod toast;
