//! Given steps for task list BDD scenarios.

use std::sync::Arc;

use super::world::TaskListWorld;
use rstest_bdd_macros::given;
use todo_core::task::{domain::Task, services::SubscriberError};

#[given("an empty task list")]
fn an_empty_task_list(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.service.tasks()?.is_empty(),
        "scenario world should start empty"
    );
    Ok(())
}

#[given("a subscriber is listening for new tasks")]
fn a_subscriber_is_listening(world: &mut TaskListWorld) {
    let notified = Arc::clone(&world.notified);
    world.service.observer_mut().subscribe(move |task: &Task| {
        notified
            .lock()
            .map_err(|err| SubscriberError::new(err.to_string()))?
            .push(task.text().as_str().to_owned());
        Ok(())
    });
}
