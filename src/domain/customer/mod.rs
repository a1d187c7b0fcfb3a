//! Customer module - tracked companies and the records they own.
//!
//! - `Customer` - the tracked company and its stored pipeline status
//! - `Meeting`, `Counterpart`, `NextAction` - records owned by one customer
//! - `User` - sales team members referenced as assignee or recorder
//! - `CustomerRecord` - read-side snapshot with nested collections

mod counterpart;
#[allow(clippy::module_inception)]
mod customer;
mod meeting;
mod next_action;
mod record;
mod status;
mod user;

pub use counterpart::Counterpart;
pub use customer::{Customer, CustomerDetails};
pub use meeting::{Meeting, MeetingDetails};
pub use next_action::NextAction;
pub use record::CustomerRecord;
pub use status::{CustomerStatus, StatusDefinition, StatusValue, CUSTOMER_STATUSES};
pub use user::{assignee_display_name, User};
