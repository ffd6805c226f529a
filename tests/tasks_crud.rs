#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todolist::db::db::{Db, DB_FILE_NAME};
    use todolist::db::tasks::{TaskManager, TaskOutcome};
    use todolist::libs::task::{Task, TaskFilter};

    struct TaskTestContext {
        _temp_dir: TempDir,
        manager: TaskManager<Db>,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            let db = Db::open(&temp_dir.path().join(DB_FILE_NAME)).unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                manager: TaskManager::new(db),
            }
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    fn task(id: i64, title: &str) -> Task {
        Task::new(id, title, at(2025, 6, 16, 9, 0), at(2025, 6, 20, 10, 50), false, Some("This is note"))
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_twice(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;

        let outcome = manager.add_task(&task(1, "Task 1")).unwrap();
        assert_eq!(outcome, TaskOutcome::Added { title: "Task 1".into() });
        assert!(manager.is_task(1).unwrap());

        let outcome = manager.set_complete(1).unwrap();
        assert_eq!(outcome, TaskOutcome::MarkedComplete { title: "Task 1".into() });
        assert!(manager.get_task(1).unwrap().unwrap().is_complete);

        let outcome = manager.set_complete(1).unwrap();
        assert_eq!(outcome, TaskOutcome::AlreadyComplete { title: "Task 1".into() });
        assert!(manager.get_task(1).unwrap().unwrap().is_complete);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_twice(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        manager.add_task(&task(2, "Task 2")).unwrap();

        let outcome = manager.delete_task(2).unwrap();
        assert_eq!(outcome, TaskOutcome::Deleted { title: "Task 2".into() });
        assert!(!manager.is_task(2).unwrap());

        let outcome = manager.delete_task(2).unwrap();
        assert_eq!(outcome, TaskOutcome::NotFound { task_id: 2 });
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_existing_keeps_original(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        manager.add_task(&task(1, "Original")).unwrap();

        let outcome = manager.add_task(&task(1, "Duplicate")).unwrap();
        assert_eq!(outcome, TaskOutcome::AlreadyExists { title: "Duplicate".into() });
        assert_eq!(manager.count_total_tasks().unwrap(), 1);
        assert_eq!(manager.get_task(1).unwrap().unwrap().title, "Original");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_task_round_trip(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        let original = task(3, "Task 3");
        manager.add_task(&original).unwrap();

        assert_eq!(manager.get_task(3).unwrap(), Some(original));
        assert_eq!(manager.get_task(404).unwrap(), None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_overwrites_all_fields(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        manager.add_task(&task(3, "Task 3")).unwrap();

        let updated = Task::new(3, "new title", at(2025, 6, 17, 8, 15), at(2025, 7, 1, 18, 0), true, Some("This is updated note"));
        let outcome = manager.update_task(&updated).unwrap();
        assert_eq!(outcome, TaskOutcome::Updated { title: "new title".into() });
        assert_eq!(manager.get_task(3).unwrap(), Some(updated));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_keeps_completed_task_completed(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        manager.add_task(&task(1, "Task 1")).unwrap();
        manager.set_complete(1).unwrap();

        let mut edited = manager.get_task(1).unwrap().unwrap();
        edited.set_title("Task 1 edited");
        edited.set_is_complete(false);
        let outcome = manager.update_task(&edited).unwrap();
        assert_eq!(outcome, TaskOutcome::Updated { title: "Task 1 edited".into() });

        let stored = manager.get_task(1).unwrap().unwrap();
        assert!(stored.is_complete);
        assert_eq!(stored.title, "Task 1 edited");
        assert_eq!(manager.set_complete(1).unwrap(), TaskOutcome::AlreadyComplete { title: "Task 1 edited".into() });
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_can_complete_task(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        manager.add_task(&task(1, "Task 1")).unwrap();

        let mut edited = task(1, "Task 1");
        edited.set_is_complete(true);
        manager.update_task(&edited).unwrap();
        assert!(manager.get_task(1).unwrap().unwrap().is_complete);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;

        let outcome = manager.update_task(&task(9, "Ghost")).unwrap();
        assert_eq!(outcome, TaskOutcome::NotFound { task_id: 9 });
        assert!(!manager.is_task(9).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_complete_missing_task(ctx: &mut TaskTestContext) {
        let outcome = ctx.manager.set_complete(77).unwrap();
        assert_eq!(outcome, TaskOutcome::NotFound { task_id: 77 });
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_counts_and_filters(ctx: &mut TaskTestContext) {
        let manager = &mut ctx.manager;
        for id in 1..=5 {
            manager.add_task(&task(id, &format!("Task {}", id))).unwrap();
        }
        manager.set_complete(2).unwrap();
        manager.set_complete(4).unwrap();

        assert_eq!(manager.count_total_tasks().unwrap(), 5);
        assert_eq!(manager.count_completed_task().unwrap(), 2);
        assert_eq!(manager.count_incompleted_tasks().unwrap(), 3);

        let completed: Vec<i64> = manager.show_completed_task().unwrap().iter().map(|t| t.task_id).collect();
        assert_eq!(completed, vec![2, 4]);
        let incomplete: Vec<i64> = manager.show_uncompleted_task().unwrap().iter().map(|t| t.task_id).collect();
        assert_eq!(incomplete, vec![1, 3, 5]);
        assert_eq!(manager.show_all_tasks().unwrap().len(), 5);
        assert_eq!(manager.fetch(TaskFilter::All).unwrap().len(), 5);

        let summary = manager.summary().unwrap();
        assert_eq!((summary.total, summary.completed, summary.incomplete), (5, 2, 3));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_store(ctx: &mut TaskTestContext) {
        let manager = &ctx.manager;
        assert_eq!(manager.count_total_tasks().unwrap(), 0);
        assert!(manager.show_all_tasks().unwrap().is_empty());
        assert!(!manager.is_task(1).unwrap());
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join(DB_FILE_NAME);

        let mut manager = TaskManager::new(Db::open(&path).unwrap());
        manager.add_task(&task(1, "Persisted")).unwrap();
        manager.close_connection().unwrap();

        let manager = TaskManager::new(Db::open(&path).unwrap());
        assert_eq!(manager.get_task(1).unwrap().unwrap().title, "Persisted");
    }
}
