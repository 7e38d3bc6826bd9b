#[cfg(test)]
mod tests {
    use eco_core::{EcoError, Profile};
    use eco_store::ConnectionStore;
    use tempfile::tempdir;

    fn profile(id: u32, name: &str, ip: &str) -> Profile {
        Profile {
            id,
            name: name.into(),
            description: String::new(),
            pem_file_path: format!("/keys/{name}.pem").into(),
            ip: ip.into(),
        }
    }

    // ── Load / save tests ──────────────────────────────────────

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        let profiles = vec![
            profile(0, "box1", "10.0.0.1"),
            profile(1, "box2", "10.0.0.2"),
        ];

        store.save(&profiles).unwrap();
        assert_eq!(store.load().unwrap(), profiles);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_array_is_empty() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        std::fs::write(store.file_path(), "[]").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        std::fs::write(store.file_path(), "{not json").unwrap();
        assert!(matches!(
            store.load(),
            Err(EcoError::CorruptStore { .. })
        ));
    }

    #[test]
    fn test_save_creates_store_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join(".eco");
        let store = ConnectionStore::open(Some(&root));

        store.save(&[profile(0, "box1", "10.0.0.1")]).unwrap();
        assert!(store.file_path().is_file());
    }

    #[test]
    fn test_save_writes_pretty_two_space_json() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        store.save(&[profile(0, "box1", "10.0.0.1")]).unwrap();

        let raw = std::fs::read_to_string(store.file_path()).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": 0,"));
        assert!(raw.contains("\"pemFilePath\": \"/keys/box1.pem\""));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        store.save(&[profile(0, "box1", "10.0.0.1")]).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|n| n != "connection.json")
            .collect();
        assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
    }

    // ── Add tests ──────────────────────────────────────────────

    #[test]
    fn test_add_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));

        let list = store
            .add("box1".into(), "".into(), "/k/a.pem".into(), "10.0.0.1".into())
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 0);

        let list = store
            .add("box2".into(), "".into(), "/k/b.pem".into(), "10.0.0.2".into())
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, 1);
    }

    // ── Remove tests ───────────────────────────────────────────

    #[test]
    fn test_remove_does_not_renumber_survivors() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        store
            .save(&[
                profile(0, "a", "10.0.0.1"),
                profile(1, "b", "10.0.0.2"),
                profile(2, "c", "10.0.0.3"),
            ])
            .unwrap();

        let (removed, remaining) = store.remove(0).unwrap();
        assert_eq!(removed.name, "a");
        let ids: Vec<u32> = remaining.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_unknown_id_leaves_file_unchanged() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        store.save(&[profile(0, "a", "10.0.0.1")]).unwrap();
        let before = std::fs::read_to_string(store.file_path()).unwrap();

        assert!(matches!(
            store.remove(99),
            Err(EcoError::ProfileNotFound(99))
        ));
        let after = std::fs::read_to_string(store.file_path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_ids_collide_after_removal_and_readd() {
        // Ids are the list length at insertion. Removing from the middle
        // shrinks the list, so the next add reuses a live id and a later
        // remove of that id takes both entries out.
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        for name in ["a", "b", "c"] {
            store
                .add(name.into(), "".into(), "/k.pem".into(), "10.0.0.1".into())
                .unwrap();
        }

        store.remove(0).unwrap();
        let list = store
            .add("d".into(), "".into(), "/k.pem".into(), "10.0.0.1".into())
            .unwrap();
        assert_eq!(list.last().unwrap().id, 2);
        assert_eq!(list.iter().filter(|p| p.id == 2).count(), 2);

        let (removed, remaining) = store.remove(2).unwrap();
        assert_eq!(removed.name, "c");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "b");
    }

    // ── Find tests ─────────────────────────────────────────────

    #[test]
    fn test_find_returns_first_match() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        store
            .save(&[profile(0, "a", "10.0.0.1"), profile(1, "b", "10.0.0.2")])
            .unwrap();

        assert_eq!(store.find(1).unwrap().unwrap().name, "b");
        assert!(store.find(5).unwrap().is_none());
    }

    // ── Root resolution tests ──────────────────────────────────

    #[test]
    fn test_resolve_root_prefers_explicit_path() {
        let dir = tempdir().unwrap();
        assert_eq!(
            ConnectionStore::resolve_root(Some(dir.path())),
            dir.path().to_path_buf()
        );
    }

    #[test]
    fn test_file_path_joins_store_file() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));
        assert_eq!(store.file_path(), dir.path().join("connection.json"));
    }

    // ── Lifecycle tests ────────────────────────────────────────

    #[test]
    fn test_add_remove_lifecycle() {
        let dir = tempdir().unwrap();
        let store = ConnectionStore::open(Some(dir.path()));

        let list = store
            .add("box1".into(), "".into(), "/k/box1.pem".into(), "10.0.0.1".into())
            .unwrap();
        assert_eq!(list[0].id, 0);

        let (_, remaining) = store.remove(0).unwrap();
        assert!(remaining.is_empty());
        assert!(store.find(0).unwrap().is_none());
        assert!(matches!(
            store.remove(0),
            Err(EcoError::ProfileNotFound(0))
        ));
    }
}
