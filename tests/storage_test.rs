//! Storage-level tests for the tasks table — exercise the repository
//! directly against a temp-dir SQLite database, no HTTP involved.

use taskd::storage::Storage;
use tempfile::TempDir;

/// Helper: create a fresh Storage in a temp dir
async fn make_storage(dir: &TempDir) -> Storage {
    Storage::new(dir.path()).await.expect("storage init failed")
}

const T0: &str = "2026-08-01T10:00:00+00:00";
const T1: &str = "2026-08-02T10:00:00+00:00";
const T2: &str = "2026-08-03T10:00:00+00:00";

#[tokio::test]
async fn insert_assigns_increasing_ids_and_echoes_fields() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    let a = storage
        .insert_task("first", Some("with description"), false, T0)
        .await
        .unwrap();
    let b = storage.insert_task("second", None, true, T0).await.unwrap();

    assert!(a.id > 0);
    assert!(b.id > a.id);
    assert_eq!(a.title, "first");
    assert_eq!(a.description.as_deref(), Some("with description"));
    assert!(!a.completed);
    assert_eq!(a.created_at, T0);
    assert_eq!(a.updated_at, T0);
    assert!(b.completed);
    assert_eq!(b.description, None);
}

#[tokio::test]
async fn get_task_returns_none_for_missing_id() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    assert!(storage.get_task(999999).await.unwrap().is_none());
}

#[tokio::test]
async fn list_orders_by_created_at_descending() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    let oldest = storage.insert_task("oldest", None, false, T0).await.unwrap();
    let newest = storage.insert_task("newest", None, false, T2).await.unwrap();
    let middle = storage.insert_task("middle", None, false, T1).await.unwrap();

    let rows = storage.list_tasks().await.unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
}

#[tokio::test]
async fn list_breaks_created_at_ties_by_id() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    let a = storage.insert_task("a", None, false, T0).await.unwrap();
    let b = storage.insert_task("b", None, false, T0).await.unwrap();

    let rows = storage.list_tasks().await.unwrap();
    assert_eq!(rows[0].id, b.id);
    assert_eq!(rows[1].id, a.id);
}

#[tokio::test]
async fn list_by_completed_filters_rows() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    storage.insert_task("open 1", None, false, T0).await.unwrap();
    let done = storage.insert_task("done", None, true, T1).await.unwrap();
    storage.insert_task("open 2", None, false, T2).await.unwrap();

    let completed = storage.list_tasks_by_completed(true).await.unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);

    let open = storage.list_tasks_by_completed(false).await.unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|r| !r.completed));
}

#[tokio::test]
async fn exists_and_count_track_rows() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    assert_eq!(storage.count_tasks().await.unwrap(), 0);
    let row = storage.insert_task("t", None, false, T0).await.unwrap();
    assert_eq!(storage.count_tasks().await.unwrap(), 1);
    assert!(storage.task_exists(row.id).await.unwrap());
    assert!(!storage.task_exists(row.id + 1).await.unwrap());
}

#[tokio::test]
async fn update_preserves_id_and_created_at() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    let row = storage
        .insert_task("before", Some("old"), false, T0)
        .await
        .unwrap();

    let updated = storage
        .update_task(row.id, "after", None, true, T1)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.id, row.id);
    assert_eq!(updated.title, "after");
    assert_eq!(updated.description, None);
    assert!(updated.completed);
    assert_eq!(updated.created_at, T0);
    assert_eq!(updated.updated_at, T1);
}

#[tokio::test]
async fn update_missing_row_returns_none() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    let result = storage.update_task(12345, "t", None, false, T0).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    let row = storage.insert_task("t", None, false, T0).await.unwrap();
    assert!(storage.delete_task(row.id).await.unwrap());
    assert!(storage.get_task(row.id).await.unwrap().is_none());
    // Second delete of the same id removes nothing.
    assert!(!storage.delete_task(row.id).await.unwrap());
}

#[tokio::test]
async fn queries_fail_after_close() {
    let dir = TempDir::new().unwrap();
    let storage = make_storage(&dir).await;

    storage.insert_task("t", None, false, T0).await.unwrap();
    storage.close().await;

    assert!(storage.count_tasks().await.is_err());
    assert!(storage.get_task(1).await.is_err());
}

#[tokio::test]
async fn rows_survive_a_storage_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let storage = make_storage(&dir).await;
        storage
            .insert_task("persisted", None, false, T0)
            .await
            .unwrap();
    }

    // Simulate a restart: a new Storage over the same data dir.
    let storage = make_storage(&dir).await;
    let rows = storage.list_tasks().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "persisted");
}
