//! ListUsersHandler - Query handler for the sales team directory.

use std::sync::Arc;

use crate::domain::customer::User;
use crate::domain::foundation::DomainError;
use crate::ports::CustomerReader;

pub struct ListUsersHandler {
    reader: Arc<dyn CustomerReader>,
}

impl ListUsersHandler {
    pub fn new(reader: Arc<dyn CustomerReader>) -> Self {
        Self { reader }
    }

    /// Users ordered by surname.
    pub async fn handle(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.reader.list_users().await?)
    }
}
