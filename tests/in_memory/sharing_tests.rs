//! Several services driving one shared collection.

use std::sync::Arc;

use super::helpers::{ids, repo, service_over, store};
use crate::test_helpers::SteppingClock;
use rstest::rstest;
use todo_core::task::{
    adapters::memory::{InMemoryTaskRepository, InMemoryTaskStore},
    domain::{TaskFactory, TaskText},
    ports::TaskRepository,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn services_over_one_handle_see_each_others_tasks(
    repo: InMemoryTaskRepository,
    store: InMemoryTaskStore,
) {
    let mut writer = service_over(&repo, &store);
    let reader = service_over(&repo, &store);

    let task = writer.add_task("Buy milk", None).await.expect("add");

    assert_eq!(ids(&reader.tasks().expect("reader tasks")), vec![task.id()]);
    assert!(repo.same_instance(&repo.clone()));
    assert!(!repo.same_instance(&InMemoryTaskRepository::new()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn history_stays_with_the_service_that_recorded_it(
    repo: InMemoryTaskRepository,
    store: InMemoryTaskStore,
) {
    let mut writer = service_over(&repo, &store);
    let mut other = service_over(&repo, &store);
    writer.add_task("Buy milk", None).await.expect("add");

    assert!(!other.undo().await.expect("undo on other"));
    assert_eq!(repo.len().expect("len"), 1);

    assert!(writer.undo().await.expect("undo on writer"));
    assert!(repo.is_empty().expect("is_empty"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_adds_through_clones_are_all_kept(repo: InMemoryTaskRepository) {
    let factory = TaskFactory::new(Arc::new(SteppingClock::default()));
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let shared = repo.clone();
            let text = TaskText::new(format!("task {worker}")).expect("valid task text");
            let task = factory.create_task(text, None);
            tokio::task::spawn_blocking(move || shared.add(task))
        })
        .collect();

    for handle in handles {
        handle.await.expect("join").expect("add");
    }

    assert_eq!(repo.len().expect("len"), 8);
}
