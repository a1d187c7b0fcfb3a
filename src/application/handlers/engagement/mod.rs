//! Handlers for the records a customer owns: meetings, counterparts and
//! next actions.

mod counterparts;
mod meetings;
mod next_actions;

pub use counterparts::{
    AddCounterpartCommand, AddCounterpartHandler, RemoveCounterpartCommand,
    RemoveCounterpartHandler,
};
pub use meetings::{
    DeleteMeetingCommand, DeleteMeetingHandler, EditMeetingCommand, EditMeetingHandler,
    RecordMeetingCommand, RecordMeetingHandler,
};
pub use next_actions::{
    AddNextActionCommand, AddNextActionHandler, CompleteNextActionCommand,
    CompleteNextActionHandler,
};
