#[cfg(test)]
mod tests {
    use taskdock::db::tags::Tags;
    use taskdock::db::tasks::Tasks;
    use taskdock::libs::tags;
    use taskdock::libs::task::NewTask;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TagTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TagTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TagTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_normalize_cleans_and_sorts() {
        let normalized = tags::normalize(["Work", "work", " URGENT "]);
        assert_eq!(normalized, vec!["urgent", "work"]);
    }

    #[test]
    fn test_normalize_accepts_both_separators() {
        let normalized = tags::normalize_str("home; Work,shopping");
        assert_eq!(normalized, vec!["home", "shopping", "work"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = ["Work, URGENT; work", "a,b,c", " ,; ", "", "ALL-CAPS"];
        for input in inputs {
            let once = tags::normalize_str(input);
            let twice = tags::normalize(&once);
            assert_eq!(once, twice, "normalization must be idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_empty_set_is_stored_as_null() {
        assert_eq!(tags::normalize_str(" ,; "), Vec::<String>::new());
        assert_eq!(tags::to_stored(&[]), None);
        assert_eq!(tags::from_stored(None), Vec::<String>::new());
    }

    #[test]
    fn test_stored_round_trip() {
        let normalized = tags::normalize_str("beta, Alpha");
        let stored = tags::to_stored(&normalized).unwrap();
        assert_eq!(stored, "alpha,beta");
        assert_eq!(tags::from_stored(Some(&stored)), normalized);
    }

    #[test]
    fn test_contains_matches_whole_names_only() {
        let set = tags::normalize_str("cart,work");
        assert!(tags::contains(&set, "cart"));
        assert!(tags::contains(&set, "WORK"));
        assert!(!tags::contains(&set, "art"));
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_summarize_counts_totals_and_open(_ctx: &mut TagTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks
            .create(NewTask {
                title: "Pay bills".to_string(),
                tags: Some(vec!["home,money".to_string()]),
                ..Default::default()
            })
            .unwrap();
        tasks
            .create(NewTask {
                title: "Clean kitchen".to_string(),
                tags: Some(vec!["Home".to_string()]),
                ..Default::default()
            })
            .unwrap();
        tasks
            .create(NewTask {
                title: "Untagged".to_string(),
                ..Default::default()
            })
            .unwrap();

        // Completing one "home" task moves it out of the open count
        tasks.set_done(first.id.unwrap(), true).unwrap();

        let mut tags_db = Tags::new().unwrap();
        let summaries = tags_db.summarize().unwrap();

        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["home", "money"], "output must be alphabetical");

        let home = &summaries[0];
        assert_eq!(home.total, 2);
        assert_eq!(home.open, 1);

        let money = &summaries[1];
        assert_eq!(money.total, 1);
        assert_eq!(money.open, 0);
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_summarize_empty_database(_ctx: &mut TagTestContext) {
        let mut tags_db = Tags::new().unwrap();
        assert!(tags_db.summarize().unwrap().is_empty());
    }
}
