//! Next action command handlers: add, complete.

use std::sync::Arc;
use tracing::info;

use crate::domain::customer::NextAction;
use crate::domain::foundation::{
    CustomerId, DomainError, ErrorCode, NextActionId, Timestamp, UserId,
};
use crate::ports::NextActionRepository;

#[derive(Debug, Clone)]
pub struct AddNextActionCommand {
    pub customer_id: CustomerId,
    pub content: String,
    pub due_date: Option<String>,
    pub assignee_id: Option<UserId>,
}

#[derive(Debug, Clone)]
pub struct CompleteNextActionCommand {
    pub next_action_id: NextActionId,
}

pub struct AddNextActionHandler {
    repository: Arc<dyn NextActionRepository>,
}

impl AddNextActionHandler {
    pub fn new(repository: Arc<dyn NextActionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddNextActionCommand) -> Result<NextAction, DomainError> {
        let action = NextAction::new(
            NextActionId::new(),
            cmd.customer_id,
            cmd.content,
            cmd.due_date,
            cmd.assignee_id,
            Timestamp::now(),
        )?;
        self.repository.insert(&action).await?;
        Ok(action)
    }
}

/// Marks an action completed. The action is kept as history.
pub struct CompleteNextActionHandler {
    repository: Arc<dyn NextActionRepository>,
}

impl CompleteNextActionHandler {
    pub fn new(repository: Arc<dyn NextActionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteNextActionCommand) -> Result<NextAction, DomainError> {
        let mut action = self
            .repository
            .find_by_id(&cmd.next_action_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::NextActionNotFound,
                    format!("Next action not found: {}", cmd.next_action_id),
                )
            })?;
        action.complete()?;
        self.repository.update(&action).await?;
        info!(next_action_id = %cmd.next_action_id, "Next action completed");
        Ok(action)
    }
}
