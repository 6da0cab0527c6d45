#[cfg(test)]
mod tests {
    use std::fs;
    use taskdock::libs::attachments::AttachmentStorage;
    use taskdock::libs::config::AttachmentsConfig;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AttachmentTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for AttachmentTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            AttachmentTestContext { temp_dir }
        }
    }

    #[test]
    fn test_stored_name_keeps_extension_and_is_unique() {
        let first = AttachmentStorage::stored_name_for("Quarterly Report.pdf");
        let second = AttachmentStorage::stored_name_for("Quarterly Report.pdf");

        assert!(first.ends_with(".pdf"));
        assert!(second.ends_with(".pdf"));
        assert_ne!(first, second);
        assert!(!first.contains("Quarterly"), "original name must not leak into the stored name");

        let bare = AttachmentStorage::stored_name_for("README");
        assert!(!bare.contains('.'));
    }

    #[test_context(AttachmentTestContext)]
    #[test]
    fn test_store_retrieve_and_remove(ctx: &mut AttachmentTestContext) {
        let storage = AttachmentStorage::new(AttachmentsConfig::default()).unwrap();

        let source = ctx.temp_dir.path().join("notes.txt");
        fs::write(&source, b"attachment payload").unwrap();

        let stored_name = AttachmentStorage::stored_name_for("notes.txt");
        let size = storage.store(&source, &stored_name).unwrap();
        assert_eq!(size, 18);
        assert!(storage.exists(&stored_name));

        let destination = ctx.temp_dir.path().join("downloaded.txt");
        storage.retrieve(&stored_name, &destination).unwrap();
        assert_eq!(fs::read(&destination).unwrap(), b"attachment payload");

        storage.remove(&stored_name).unwrap();
        assert!(!storage.exists(&stored_name));
        // Removing again is fine: the bytes are already gone
        storage.remove(&stored_name).unwrap();
    }

    #[test_context(AttachmentTestContext)]
    #[test]
    fn test_retrieve_missing_file_is_a_distinct_error(ctx: &mut AttachmentTestContext) {
        let storage = AttachmentStorage::new(AttachmentsConfig::default()).unwrap();

        let destination = ctx.temp_dir.path().join("never.txt");
        let err = storage.retrieve("ghost.txt", &destination).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test_context(AttachmentTestContext)]
    #[test]
    fn test_policy_rejects_oversized_files(ctx: &mut AttachmentTestContext) {
        let storage = AttachmentStorage::new(AttachmentsConfig {
            max_file_size_mb: 0,
            allowed_extensions: None,
        })
        .unwrap();

        let source = ctx.temp_dir.path().join("big.bin");
        fs::write(&source, vec![0u8; 1024]).unwrap();

        assert!(storage.check_policy(&source).is_err());
    }

    #[test_context(AttachmentTestContext)]
    #[test]
    fn test_policy_enforces_extension_whitelist(ctx: &mut AttachmentTestContext) {
        let storage = AttachmentStorage::new(AttachmentsConfig {
            max_file_size_mb: 25,
            allowed_extensions: Some(vec!["pdf".to_string(), "txt".to_string()]),
        })
        .unwrap();

        let allowed = ctx.temp_dir.path().join("fine.TXT");
        fs::write(&allowed, b"ok").unwrap();
        assert!(storage.check_policy(&allowed).is_ok());

        let rejected = ctx.temp_dir.path().join("script.exe");
        fs::write(&rejected, b"no").unwrap();
        assert!(storage.check_policy(&rejected).is_err());
    }
}
