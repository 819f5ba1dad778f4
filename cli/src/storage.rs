use std::{
    fs, io,
    path::{Path, PathBuf},
};

use omega_news_shared::{
    config::{Collection, StoreConfig},
    error::{StoreError, StoreResult},
    storage::KeyValueStorage,
};

/// Key/value storage backed by one file per key: `<root>/<key>.json`.
///
/// Files hold exactly the string the browser would keep under the same key,
/// so a data directory can be pasted into `localStorage` as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStorage {
    root: PathBuf,
}

impl DirectoryStorage {
    /// Storage rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// True when at least one collection file exists.
    pub fn has_collections(&self, config: &StoreConfig) -> bool {
        Collection::ALL
            .iter()
            .any(|collection| self.path_for(&config.key(*collection)).is_file())
    }
}

impl KeyValueStorage for DirectoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::backend(key, err)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.root).map_err(|err| StoreError::backend(key, err))?;
        let path = self.path_for(key);
        // Write next to the target and rename so readers never see half a file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|err| StoreError::backend(key, err))?;
        fs::rename(&tmp, &path).map_err(|err| StoreError::backend(key, err))
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::backend(key, err)),
        }
    }
}
