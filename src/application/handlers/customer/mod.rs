//! Customer command and query handlers.

mod delete_customer;
mod get_customer_list;
mod get_customer_timeline;
mod list_users;
mod save_customer;

pub use delete_customer::{DeleteCustomerCommand, DeleteCustomerHandler};
pub use get_customer_list::{CustomerListResult, GetCustomerListHandler, GetCustomerListQuery};
pub use get_customer_timeline::{GetCustomerTimelineHandler, GetCustomerTimelineQuery};
pub use list_users::ListUsersHandler;
pub use save_customer::{SaveCustomerCommand, SaveCustomerHandler, SaveCustomerResult};
