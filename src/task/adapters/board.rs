//! Adapter exposing a third-party card board as a remote task service.

use async_trait::async_trait;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::task::{
    domain::{Task, TaskFactory, TaskKind, TaskText},
    ports::{RemoteTaskResult, RemoteTaskService},
};

/// Card as returned by the board service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard {
    /// Board-assigned card identifier.
    pub id: String,
    /// Card title.
    pub name: String,
    /// Free-form card body.
    #[serde(default)]
    pub desc: String,
    /// Whether the card has been archived.
    #[serde(default)]
    pub closed: bool,
    /// Label names attached to the card.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// Payload for creating a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBoardCard {
    /// Card title.
    pub name: String,
    /// Free-form card body.
    pub desc: String,
    /// Label names to attach.
    pub labels: Vec<String>,
}

/// Client surface of the board service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// Lists the cards on the configured board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::RemoteTaskError`] when the call fails.
    async fn list_cards(&self) -> RemoteTaskResult<Vec<BoardCard>>;

    /// Creates a card and returns it as stored by the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::task::ports::RemoteTaskError`] when the call fails.
    async fn create_card(&self, card: NewBoardCard) -> RemoteTaskResult<BoardCard>;
}

/// Translates between board cards and tasks.
pub struct BoardTaskAdapter<A, C>
where
    A: BoardApi,
    C: Clock + Send + Sync,
{
    api: Arc<A>,
    factory: TaskFactory<C>,
}

impl<A, C> BoardTaskAdapter<A, C>
where
    A: BoardApi,
    C: Clock + Send + Sync,
{
    /// Creates an adapter over `api`, stamping imported tasks with `factory`.
    #[must_use]
    pub const fn new(api: Arc<A>, factory: TaskFactory<C>) -> Self {
        Self { api, factory }
    }

    fn card_to_task(&self, card: BoardCard) -> Option<Task> {
        let Ok(text) = TaskText::new(card.name) else {
            tracing::debug!(card_id = %card.id, "skipping board card without a title");
            return None;
        };
        let kind = card.labels.first().and_then(|label| TaskKind::non_blank(label.as_str()));
        Some(
            self.factory
                .create_task(text, kind)
                .with_completed(card.closed)
                .with_description(card.desc),
        )
    }
}

fn task_to_card(task: &Task) -> NewBoardCard {
    NewBoardCard {
        name: task.text().as_str().to_owned(),
        desc: task.description().unwrap_or_default().to_owned(),
        labels: vec![task.kind().as_str().to_owned()],
    }
}

#[async_trait]
impl<A, C> RemoteTaskService for BoardTaskAdapter<A, C>
where
    A: BoardApi,
    C: Clock + Send + Sync,
{
    async fn fetch_tasks(&self) -> RemoteTaskResult<Vec<Task>> {
        let cards = self.api.list_cards().await?;
        Ok(cards
            .into_iter()
            .filter_map(|card| self.card_to_task(card))
            .collect())
    }

    async fn push_task(&self, task: &Task) -> RemoteTaskResult<()> {
        let created = self.api.create_card(task_to_card(task)).await?;
        tracing::debug!(task_id = %task.id(), card_id = %created.id, "pushed task to board");
        Ok(())
    }
}
