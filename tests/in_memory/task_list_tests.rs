//! End-to-end task list flows against the in-memory adapters.

use super::helpers::{repo, service_over, store};
use eyre::WrapErr;
use rstest::rstest;
use todo_core::task::{
    adapters::memory::{InMemoryTaskRepository, InMemoryTaskStore},
    domain::{Priority, Task, TaskSort},
    ports::TaskStore,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_toggle_delete_and_reload(
    repo: InMemoryTaskRepository,
    store: InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let mut service = service_over(&repo, &store);
    let milk = service
        .add_task("Buy milk", None)
        .await
        .wrap_err("add milk")?;
    let dog = service
        .add_task("Walk dog", Some("chores"))
        .await
        .wrap_err("add dog")?;

    service
        .toggle_completed(milk.id())
        .await
        .wrap_err("toggle milk")?;
    service.remove_task(dog.id()).await.wrap_err("remove dog")?;

    let fresh_repo = InMemoryTaskRepository::new();
    let mut reloaded = service_over(&fresh_repo, &store);
    let count = reloaded.load().await.wrap_err("reload")?;

    eyre::ensure!(count == 1, "expected one stored task, found {count}");
    let tasks = reloaded.tasks().wrap_err("list reloaded")?;
    let first = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("reloaded list is empty"))?;
    eyre::ensure!(first.id() == milk.id(), "reloaded task id mismatch");
    eyre::ensure!(first.is_completed(), "completion flag was not persisted");
    eyre::ensure!(
        first.created_at() == milk.created_at(),
        "creation date was not persisted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn undo_chain_walks_back_to_empty(repo: InMemoryTaskRepository, store: InMemoryTaskStore) {
    let mut service = service_over(&repo, &store);
    let task = service.add_task("Pay rent", None).await.expect("add");
    service
        .set_priority(task.id(), Priority::HIGH)
        .await
        .expect("priority");
    service
        .edit_description(task.id(), Some("before the 1st"))
        .await
        .expect("describe");

    let mut steps = 0;
    while service.undo().await.expect("undo") {
        steps += 1;
    }

    assert_eq!(steps, 3);
    assert!(service.tasks().expect("tasks").is_empty());
    assert!(store.load().await.expect("load").is_empty());
    assert_eq!(service.history().redo_len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_mutation_discards_redo(repo: InMemoryTaskRepository, store: InMemoryTaskStore) {
    let mut service = service_over(&repo, &store);
    service.add_task("A", None).await.expect("add A");
    service.undo().await.expect("undo A");

    service.add_task("B", None).await.expect("add B");

    assert!(!service.history().can_redo());
    assert!(!service.redo().await.expect("redo"));
    assert_eq!(texts(&service.tasks().expect("tasks")), ["B"]);
}

#[rstest]
#[case(TaskSort::Date, ["Older", "Newer"])]
#[case(TaskSort::Priority, ["Newer", "Older"])]
#[tokio::test(flavor = "multi_thread")]
async fn sorting_persists_the_new_order(
    repo: InMemoryTaskRepository,
    store: InMemoryTaskStore,
    #[case] strategy: TaskSort,
    #[case] expected: [&str; 2],
) {
    let mut service = service_over(&repo, &store);
    let older = service.add_task("Older", None).await.expect("add older");
    let newer = service.add_task("Newer", None).await.expect("add newer");
    service
        .set_priority(older.id(), Priority::LOW)
        .await
        .expect("priority older");
    service
        .set_priority(newer.id(), Priority::HIGH)
        .await
        .expect("priority newer");
    service
        .sort(&TaskSort::Priority)
        .await
        .expect("priority sort");

    let sorted = service.sort(&strategy).await.expect("sort");

    assert_eq!(texts(&sorted), expected);
    assert_eq!(texts(&store.load().await.expect("load")), expected);
}

fn texts(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .map(|task| task.text().as_str().to_owned())
        .collect()
}
