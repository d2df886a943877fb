//! When steps for task list BDD scenarios.

use super::world::{TaskListWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use todo_core::task::domain::{Priority, TaskSort};

#[when(r#"the task "{text}" is added"#)]
fn the_task_is_added(world: &mut TaskListWorld, text: String) {
    world.last_add_result = Some(run_async(world.service.add_task(&text, None)));
}

#[when(r#"the task "{text}" is toggled"#)]
fn the_task_is_toggled(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&text)?;
    run_async(world.service.toggle_completed(task.id())).wrap_err("toggle task")?;
    Ok(())
}

#[when(r#"the task "{text}" is deleted"#)]
fn the_task_is_deleted(world: &mut TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let task = world.task_named(&text)?;
    run_async(world.service.remove_task(task.id())).wrap_err("delete task")?;
    Ok(())
}

#[when(r#"the task "{text}" is given priority {level:u8}"#)]
fn the_task_is_given_priority(
    world: &mut TaskListWorld,
    text: String,
    level: u8,
) -> Result<(), eyre::Report> {
    let task = world.task_named(&text)?;
    let priority = Priority::new(level)?;
    run_async(world.service.set_priority(task.id(), priority)).wrap_err("set priority")?;
    Ok(())
}

#[when(r#"the list is sorted by "{name}""#)]
fn the_list_is_sorted(world: &mut TaskListWorld, name: String) -> Result<(), eyre::Report> {
    let strategy: TaskSort = name.parse()?;
    run_async(world.service.sort(&strategy)).wrap_err("sort list")?;
    Ok(())
}

#[when("the last change is undone")]
fn the_last_change_is_undone(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let undone = run_async(world.service.undo()).wrap_err("undo")?;
    eyre::ensure!(undone, "expected a change to undo");
    Ok(())
}

#[when("the last change is redone")]
fn the_last_change_is_redone(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let redone = run_async(world.service.redo()).wrap_err("redo")?;
    eyre::ensure!(redone, "expected a change to redo");
    Ok(())
}
