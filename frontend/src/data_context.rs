use std::{ops::Deref, rc::Rc};

use omega_news_shared::{
    clock::SystemClock,
    config::StoreConfig,
    error::StoreResult,
    models::{Article, Author, Category, CommentStatus, MediaItem, Page, SiteSettings, ToastKind},
    newsroom::Newsroom,
};
use yew::prelude::*;

use crate::storage::BrowserStorage;

pub type BrowserNewsroom = Newsroom<BrowserStorage, BrowserStorage, SystemClock>;

/// Everything the site renders, hydrated once from browser storage.
#[derive(Debug, Clone, PartialEq)]
pub struct DataState {
    newsroom: BrowserNewsroom,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            newsroom: Newsroom::open_or_seed(
                BrowserStorage::local(),
                BrowserStorage::session(),
                StoreConfig::default(),
                SystemClock,
            ),
        }
    }
}

impl Deref for DataState {
    type Target = BrowserNewsroom;

    fn deref(&self) -> &Self::Target {
        &self.newsroom
    }
}

pub enum DataAction {
    AddArticle(Article),
    UpdateArticle(Article),
    DeleteArticle(String),
    RecordView(String),
    AddPage(Page),
    UpdatePage(Page),
    DeletePage(String),
    UpdateSettings(SiteSettings),
    AddCategory(Category),
    UpdateCategory(Category),
    DeleteCategory(String),
    SetCommentStatus { id: String, status: CommentStatus },
    DeleteComment(String),
    AddAuthor(Author),
    UpdateAuthor(Author),
    DeleteAuthor(String),
    AddMedia(MediaItem),
    DeleteMedia(String),
    Login { email: String, password: String },
    Logout,
    Notify { message: String, kind: ToastKind },
    DismissToast(String),
}

fn done<T>(result: StoreResult<T>) -> StoreResult<()> {
    result.map(|_| ())
}

impl Reducible for DataState {
    type Action = DataAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let room = &mut next.newsroom;
        let result = match action {
            DataAction::AddArticle(article) => room.add_article(article),
            DataAction::UpdateArticle(article) => done(room.update_article(article)),
            DataAction::DeleteArticle(id) => done(room.delete_article(&id)),
            DataAction::RecordView(id) => done(room.record_article_view(&id)),
            DataAction::AddPage(page) => room.add_page(page),
            DataAction::UpdatePage(page) => done(room.update_page(page)),
            DataAction::DeletePage(id) => done(room.delete_page(&id)),
            DataAction::UpdateSettings(settings) => room.update_settings(settings),
            DataAction::AddCategory(category) => room.add_category(category),
            DataAction::UpdateCategory(category) => done(room.update_category(category)),
            DataAction::DeleteCategory(id) => done(room.delete_category(&id)),
            DataAction::SetCommentStatus {
                id,
                status,
            } => done(room.update_comment_status(&id, status)),
            DataAction::DeleteComment(id) => done(room.delete_comment(&id)),
            DataAction::AddAuthor(author) => room.add_author(author),
            DataAction::UpdateAuthor(author) => done(room.update_author(author)),
            DataAction::DeleteAuthor(id) => done(room.delete_author(&id)),
            DataAction::AddMedia(item) => room.add_media(item),
            DataAction::DeleteMedia(id) => done(room.delete_media(&id)),
            DataAction::Login {
                email,
                password,
            } => done(room.login(&email, &password)),
            DataAction::Logout => room.logout(),
            DataAction::Notify {
                message,
                kind,
            } => {
                room.notify(message, kind);
                Ok(())
            },
            DataAction::DismissToast(id) => {
                room.dismiss_toast(&id);
                Ok(())
            },
        };

        if let Err(err) = result {
            web_sys::console::error_1(&format!("Saving content failed: {err}").into());
        }
        Rc::new(next)
    }
}

pub type DataContext = UseReducerHandle<DataState>;

#[derive(Properties, PartialEq)]
pub struct DataProviderProps {
    pub children: Html,
}

#[function_component(DataProvider)]
pub fn data_provider(props: &DataProviderProps) -> Html {
    let state = use_reducer(DataState::default);
    html! {
        <ContextProvider<DataContext> context={state}>
            {props.children.clone()}
        </ContextProvider<DataContext>>
    }
}

#[hook]
pub fn use_data() -> Option<DataContext> {
    use_context::<DataContext>()
}

/// Fire-and-forget toast from a component.
pub fn notify(ctx: &DataContext, message: impl Into<String>, kind: ToastKind) {
    ctx.dispatch(DataAction::Notify {
        message: message.into(),
        kind,
    });
}
