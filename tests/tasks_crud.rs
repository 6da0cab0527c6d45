#[cfg(test)]
mod tests {
    use taskdock::db::tasks::Tasks;
    use taskdock::libs::error::StoreError;
    use taskdock::libs::task::{NewTask, TaskFilter, TaskPatch};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_and_get_round_trip(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks
            .create(NewTask {
                title: "Buy milk".to_string(),
                tags: Some(vec!["Home".to_string(), "home".to_string()]),
                ..Default::default()
            })
            .unwrap();

        let fetched = tasks.get(created.id.unwrap()).unwrap().unwrap();
        assert_eq!(fetched.title, "Buy milk");
        assert!(!fetched.done);
        assert_eq!(fetched.priority, 3, "default priority");
        assert_eq!(fetched.tags, vec!["home"], "tags deduplicated and lowercased");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_trims_title_and_rejects_blank(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks.create(NewTask::new("  padded  ")).unwrap();
        assert_eq!(created.title, "padded");

        let err = tasks.create(NewTask::new("   ")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_accepts_unparsable_due_date(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // Date validity is not a store concern; the value is kept verbatim
        let created = tasks
            .create(NewTask {
                title: "ok".to_string(),
                due_date: Some("not-a-date".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(created.due_date.as_deref(), Some("not-a-date"));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_partial_update_touches_only_supplied_fields(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks
            .create(NewTask {
                title: "Original".to_string(),
                priority: Some(2),
                tags: Some(vec!["work".to_string()]),
                ..Default::default()
            })
            .unwrap();
        let id = created.id.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        let updated = tasks
            .update(
                id,
                &TaskPatch {
                    notes: Some(Some("x".to_string())),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Original");
        assert_eq!(updated.priority, 2);
        assert_eq!(updated.tags, vec!["work"]);
        assert_eq!(updated.notes.as_deref(), Some("x"));
        assert!(updated.updated_at > updated.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_patch_is_a_no_op(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks.create(NewTask::new("Stable")).unwrap();
        let id = created.id.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        let after = tasks.update(id, &TaskPatch::default()).unwrap();

        assert_eq!(after.updated_at, created.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_clears_and_renormalizes_fields(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks
            .create(NewTask {
                title: "Clearable".to_string(),
                due_date: Some("2024-03-01".to_string()),
                tags: Some(vec!["old".to_string()]),
                ..Default::default()
            })
            .unwrap();
        let id = created.id.unwrap();

        let updated = tasks
            .update(
                id,
                &TaskPatch {
                    due_date: Some(None),
                    tags: Some(vec!["NEW; other".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.due_date, None);
        assert_eq!(updated.tags, vec!["new", "other"]);

        // An explicitly empty tag list clears the set
        let cleared = tasks
            .update(
                id,
                &TaskPatch {
                    tags: Some(Vec::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(cleared.tags.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let err = tasks
            .update(
                999,
                &TaskPatch {
                    priority: Some(1),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(999)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_done_bumps_updated_at(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks.create(NewTask::new("Finish me")).unwrap();
        let id = created.id.unwrap();

        std::thread::sleep(std::time::Duration::from_millis(5));
        let done = tasks.set_done(id, true).unwrap();
        assert!(done.done);
        assert!(done.updated_at > created.updated_at);

        let reopened = tasks.set_done(id, false).unwrap();
        assert!(!reopened.done);

        let err = tasks.set_done(999, true).unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(999)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let created = tasks.create(NewTask::new("Disposable")).unwrap();
        let id = created.id.unwrap();

        tasks.delete(id).unwrap();
        assert!(tasks.get(id).unwrap().is_none());
        assert!(tasks.fetch(&TaskFilter::default()).unwrap().is_empty());

        let err = tasks.delete(id).unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_never_reused(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.create(NewTask::new("First")).unwrap();
        let first_id = first.id.unwrap();
        tasks.delete(first_id).unwrap();

        let second = tasks.create(NewTask::new("Second")).unwrap();
        assert!(second.id.unwrap() > first_id);
    }
}
