//! Then steps for task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use rstest_bdd_macros::then;
use todo_core::task::{domain::TaskDomainError, ports::TaskStore, services::TaskListError};

fn ensure_listed(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = world.service.tasks()?.len();
    eyre::ensure!(listed == count, "expected {count} tasks, found {listed}");
    Ok(())
}

#[then("the list contains {count:usize} task")]
fn the_list_contains_one(world: &mut TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    ensure_listed(world, count)
}

#[then("the list contains {count:usize} tasks")]
fn the_list_contains_many(world: &mut TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    ensure_listed(world, count)
}

#[then(r#"the task "{text}" is completed"#)]
fn the_task_is_completed(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&text)?;
    eyre::ensure!(task.is_completed(), "task '{text}' is not completed");
    Ok(())
}

#[then("the store holds {count:usize} task")]
fn the_store_holds(world: &mut TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.load())?;
    eyre::ensure!(
        stored == world.service.tasks()?,
        "store and list have diverged"
    );
    eyre::ensure!(
        stored.len() == count,
        "expected {count} stored tasks, found {}",
        stored.len()
    );
    Ok(())
}

#[then("adding fails because the text is empty")]
fn adding_fails_with_empty_text(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no add attempt recorded"))?;
    match result {
        Err(TaskListError::Domain(TaskDomainError::EmptyTaskText)) => Ok(()),
        Err(other) => Err(eyre::eyre!("expected an empty text error, got {other}")),
        Ok(task) => Err(eyre::eyre!("expected rejection, task {} was added", task.id())),
    }
}

#[then(r#"the subscriber was told about "{text}""#)]
fn the_subscriber_was_told(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let notified = world
        .notified
        .lock()
        .map_err(|err| eyre::eyre!("notification log poisoned: {err}"))?;
    eyre::ensure!(
        *notified == [text.clone()],
        "expected a single notification for '{text}', got {notified:?}"
    );
    Ok(())
}

#[then(r#"the first task is "{text}""#)]
fn the_first_task_is(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let tasks = world.service.tasks()?;
    let first = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("the list is empty"))?;
    eyre::ensure!(
        first.text().as_str() == text,
        "expected '{text}' first, found '{}'",
        first.text()
    );
    Ok(())
}
