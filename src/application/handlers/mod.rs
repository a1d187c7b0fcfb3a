//! Command and query handlers.

pub mod customer;
pub mod dashboard;
pub mod engagement;
pub mod settings;

pub use customer::{
    CustomerListResult, DeleteCustomerCommand, DeleteCustomerHandler, GetCustomerListHandler,
    GetCustomerListQuery, GetCustomerTimelineHandler, GetCustomerTimelineQuery, ListUsersHandler,
    SaveCustomerCommand, SaveCustomerHandler, SaveCustomerResult,
};
pub use dashboard::{GetDashboardHandler, GetDashboardQuery};
pub use engagement::{
    AddCounterpartCommand, AddCounterpartHandler, AddNextActionCommand, AddNextActionHandler,
    CompleteNextActionCommand, CompleteNextActionHandler, DeleteMeetingCommand,
    DeleteMeetingHandler, EditMeetingCommand, EditMeetingHandler, RecordMeetingCommand,
    RecordMeetingHandler, RemoveCounterpartCommand, RemoveCounterpartHandler,
};
pub use settings::{
    SendTestNotificationHandler, SharedSettings, UpdateSlackWebhookCommand,
    UpdateSlackWebhookHandler,
};
