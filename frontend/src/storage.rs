use omega_news_shared::{
    error::{StoreError, StoreResult},
    storage::KeyValueStorage,
};
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// [`KeyValueStorage`] over `window.localStorage` or
/// `window.sessionStorage`.
///
/// A browser that refuses storage (private mode, disabled cookies) reads as
/// empty and fails every write.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserStorage {
    area: StorageArea,
    inner: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            area: StorageArea::Local,
            inner: window().and_then(|win| win.local_storage().ok().flatten()),
        }
    }

    pub fn session() -> Self {
        Self {
            area: StorageArea::Session,
            inner: window().and_then(|win| win.session_storage().ok().flatten()),
        }
    }

    fn handle(&self, key: &str) -> StoreResult<&Storage> {
        self.inner.as_ref().ok_or_else(|| {
            let area = match self.area {
                StorageArea::Local => "localStorage",
                StorageArea::Session => "sessionStorage",
            };
            StoreError::backend(key, format!("{area} is unavailable"))
        })
    }
}

fn js_error(key: &str, err: JsValue) -> StoreError {
    let message = err
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|value| value.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"));
    StoreError::backend(key, message)
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match self.inner.as_ref() {
            Some(storage) => storage.get_item(key).map_err(|err| js_error(key, err)),
            None => Ok(None),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.handle(key)?
            .set_item(key, value)
            .map_err(|err| js_error(key, err))
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.handle(key)?
            .remove_item(key)
            .map_err(|err| js_error(key, err))
    }
}
