#[cfg(test)]
mod tests {
    use omega_cli::storage::DirectoryStorage;
    use omega_news_shared::{
        clock::ManualClock,
        config::StoreConfig,
        error::StoreError,
        storage::KeyValueStorage,
        store::ContentStore,
    };
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().expect("create temp dir");
        let storage = DirectoryStorage::new(dir.path());
        assert_eq!(storage.get_item("omega_articles").expect("read"), None);
        storage.remove_item("omega_articles").expect("remove missing key");
    }

    #[test]
    fn values_round_trip_through_files() {
        let dir = tempdir().expect("create temp dir");
        let storage = DirectoryStorage::new(dir.path().join("nested"));
        storage.set_item("omega_settings", "{}").expect("write");

        let path = storage.path_for("omega_settings");
        assert!(path.ends_with("nested/omega_settings.json"));
        assert_eq!(std::fs::read_to_string(&path).expect("read file"), "{}");
        assert!(!path.with_extension("json.tmp").exists());

        storage.remove_item("omega_settings").expect("remove");
        assert!(!path.exists());
    }

    #[test]
    fn store_written_by_one_process_reads_back_in_another() {
        let dir = tempdir().expect("create temp dir");
        let clock = ManualClock::at(0);
        let storage = DirectoryStorage::new(dir.path());
        assert!(!storage.has_collections(&StoreConfig::default()));

        let mut store = ContentStore::open(storage.clone(), StoreConfig::default(), &clock)
            .expect("open store");
        store.delete_article("1").expect("delete article");
        assert!(storage.has_collections(&StoreConfig::default()));

        let reopened = ContentStore::open(storage, StoreConfig::default(), &clock)
            .expect("reopen store");
        assert_eq!(reopened.articles().len(), 11);
        assert!(reopened.article("1").is_none());
    }

    #[test]
    fn corrupt_file_is_reported_by_strict_open() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("omega_comments.json"), "[{").expect("write junk");
        let storage = DirectoryStorage::new(dir.path());

        let err = ContentStore::open(storage.clone(), StoreConfig::default(), &ManualClock::at(0))
            .expect_err("corrupt comments");
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "omega_comments"));

        let lenient =
            ContentStore::open_or_seed(storage, StoreConfig::default(), &ManualClock::at(0));
        assert_eq!(lenient.comments().len(), 3);
    }
}
