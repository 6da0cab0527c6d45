#[cfg(test)]
mod tests {
    use taskdock::db::documents::Documents;
    use taskdock::db::tasks::Tasks;
    use taskdock::libs::document::NewDocument;
    use taskdock::libs::error::StoreError;
    use taskdock::libs::task::NewTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DocumentTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for DocumentTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DocumentTestContext { _temp_dir: temp_dir }
        }
    }

    fn new_document(task_id: i64, original_name: &str, stored_name: &str) -> NewDocument {
        NewDocument {
            task_id,
            original_name: original_name.to_string(),
            stored_name: stored_name.to_string(),
            content_type: Some("application/pdf".to_string()),
            size: 1024,
        }
    }

    #[test_context(DocumentTestContext)]
    #[test]
    fn test_create_and_get_round_trip(_ctx: &mut DocumentTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task_id = tasks.create(NewTask::new("With attachment")).unwrap().id.unwrap();

        let mut documents = Documents::new().unwrap();
        let created = documents.create(new_document(task_id, "report.pdf", "abc123.pdf")).unwrap();

        let fetched = documents.get(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched.task_id, task_id);
        assert_eq!(fetched.original_name, "report.pdf");
        assert_eq!(fetched.stored_name, "abc123.pdf");
        assert_eq!(fetched.content_type.as_deref(), Some("application/pdf"));
        assert_eq!(fetched.size, Some(1024));
        assert!(fetched.created_at.is_some());
    }

    #[test_context(DocumentTestContext)]
    #[test]
    fn test_create_rejects_missing_task(_ctx: &mut DocumentTestContext) {
        let mut documents = Documents::new().unwrap();

        let err = documents.create(new_document(42, "orphan.txt", "xyz.txt")).unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(42)));
    }

    #[test_context(DocumentTestContext)]
    #[test]
    fn test_fetch_for_task_newest_first(_ctx: &mut DocumentTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task_id = tasks.create(NewTask::new("Busy task")).unwrap().id.unwrap();

        let mut documents = Documents::new().unwrap();
        let first = documents.create(new_document(task_id, "first.txt", "a.txt")).unwrap();
        let second = documents.create(new_document(task_id, "second.txt", "b.txt")).unwrap();

        let listed = documents.fetch_for_task(task_id).unwrap();
        let ids: Vec<i64> = listed.iter().map(|d| d.id.unwrap()).collect();
        assert_eq!(ids, vec![second.id.unwrap(), first.id.unwrap()]);
    }

    #[test_context(DocumentTestContext)]
    #[test]
    fn test_delete_removes_metadata_only_for_that_document(_ctx: &mut DocumentTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task_id = tasks.create(NewTask::new("Task")).unwrap().id.unwrap();

        let mut documents = Documents::new().unwrap();
        let kept = documents.create(new_document(task_id, "keep.txt", "k.txt")).unwrap();
        let removed = documents.create(new_document(task_id, "drop.txt", "d.txt")).unwrap();

        documents.delete(removed.id.unwrap()).unwrap();

        assert!(documents.get(removed.id.unwrap()).unwrap().is_none());
        assert!(documents.get(kept.id.unwrap()).unwrap().is_some());

        let err = documents.delete(removed.id.unwrap()).unwrap_err();
        assert!(matches!(err, StoreError::DocumentNotFound(_)));
    }

    #[test_context(DocumentTestContext)]
    #[test]
    fn test_task_delete_cascades_to_documents(_ctx: &mut DocumentTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let task_id = tasks.create(NewTask::new("Doomed")).unwrap().id.unwrap();

        let mut documents = Documents::new().unwrap();
        let one = documents.create(new_document(task_id, "one.txt", "1.txt")).unwrap();
        let two = documents.create(new_document(task_id, "two.txt", "2.txt")).unwrap();

        tasks.delete(task_id).unwrap();

        assert!(documents.get(one.id.unwrap()).unwrap().is_none());
        assert!(documents.get(two.id.unwrap()).unwrap().is_none());
        assert!(documents.fetch_for_task(task_id).unwrap().is_empty());
    }
}
