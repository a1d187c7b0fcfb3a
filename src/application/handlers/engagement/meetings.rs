//! Meeting command handlers: record, edit, delete.

use std::sync::Arc;
use tracing::info;

use crate::domain::customer::{Meeting, MeetingDetails};
use crate::domain::foundation::{CustomerId, DomainError, ErrorCode, MeetingId};
use crate::ports::MeetingRepository;

#[derive(Debug, Clone)]
pub struct RecordMeetingCommand {
    pub customer_id: CustomerId,
    pub details: MeetingDetails,
}

#[derive(Debug, Clone)]
pub struct EditMeetingCommand {
    pub meeting_id: MeetingId,
    pub details: MeetingDetails,
}

#[derive(Debug, Clone)]
pub struct DeleteMeetingCommand {
    pub meeting_id: MeetingId,
}

fn meeting_not_found(id: &MeetingId) -> DomainError {
    DomainError::new(ErrorCode::MeetingNotFound, format!("Meeting not found: {}", id))
}

pub struct RecordMeetingHandler {
    repository: Arc<dyn MeetingRepository>,
}

impl RecordMeetingHandler {
    pub fn new(repository: Arc<dyn MeetingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordMeetingCommand) -> Result<Meeting, DomainError> {
        let meeting = Meeting::record(MeetingId::new(), cmd.customer_id, cmd.details)?;
        self.repository.insert(&meeting).await?;
        info!(customer_id = %cmd.customer_id, meeting_id = %meeting.id(), "Meeting recorded");
        Ok(meeting)
    }
}

pub struct EditMeetingHandler {
    repository: Arc<dyn MeetingRepository>,
}

impl EditMeetingHandler {
    pub fn new(repository: Arc<dyn MeetingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EditMeetingCommand) -> Result<Meeting, DomainError> {
        let mut meeting = self
            .repository
            .find_by_id(&cmd.meeting_id)
            .await?
            .ok_or_else(|| meeting_not_found(&cmd.meeting_id))?;
        meeting.edit(cmd.details)?;
        self.repository.update(&meeting).await?;
        Ok(meeting)
    }
}

pub struct DeleteMeetingHandler {
    repository: Arc<dyn MeetingRepository>,
}

impl DeleteMeetingHandler {
    pub fn new(repository: Arc<dyn MeetingRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteMeetingCommand) -> Result<(), DomainError> {
        self.repository.delete(&cmd.meeting_id).await?;
        info!(meeting_id = %cmd.meeting_id, "Meeting deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCrmStore;
    use crate::domain::customer::{Customer, CustomerDetails};
    use crate::domain::foundation::Timestamp;
    use crate::ports::CustomerRepository;

    async fn store_with_customer() -> (Arc<InMemoryCrmStore>, CustomerId) {
        let store = Arc::new(InMemoryCrmStore::new());
        let customer = Customer::create(
            CustomerId::new(),
            CustomerDetails {
                company_name: "Acme".to_string(),
                ..Default::default()
            },
            Timestamp::now(),
        )
        .unwrap();
        CustomerRepository::insert(store.as_ref(), &customer).await.unwrap();
        (store, *customer.id())
    }

    fn details(date: &str, minutes: Option<&str>) -> MeetingDetails {
        MeetingDetails {
            meeting_date: date.to_string(),
            minutes: minutes.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn records_edits_and_deletes_a_meeting() {
        let (store, customer_id) = store_with_customer().await;

        let meeting = RecordMeetingHandler::new(store.clone())
            .handle(RecordMeetingCommand {
                customer_id,
                details: details("2024-05-01", None),
            })
            .await
            .unwrap();

        let edited = EditMeetingHandler::new(store.clone())
            .handle(EditMeetingCommand {
                meeting_id: *meeting.id(),
                details: details("2024-05-02", Some("Discussed pricing")),
            })
            .await
            .unwrap();
        assert_eq!(edited.meeting_date().as_str(), "2024-05-02");
        assert_eq!(edited.minutes(), Some("Discussed pricing"));

        DeleteMeetingHandler::new(store.clone())
            .handle(DeleteMeetingCommand {
                meeting_id: *meeting.id(),
            })
            .await
            .unwrap();
        assert!(MeetingRepository::find_by_id(store.as_ref(), meeting.id())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn missing_meeting_date_is_rejected_before_write() {
        let (store, customer_id) = store_with_customer().await;

        let err = RecordMeetingHandler::new(store)
            .handle(RecordMeetingCommand {
                customer_id,
                details: details("", Some("Notes")),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[tokio::test]
    async fn editing_unknown_meeting_is_not_found() {
        let (store, _) = store_with_customer().await;

        let err = EditMeetingHandler::new(store)
            .handle(EditMeetingCommand {
                meeting_id: MeetingId::new(),
                details: details("2024-05-02", None),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MeetingNotFound);
    }
}
