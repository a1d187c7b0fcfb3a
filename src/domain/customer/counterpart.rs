//! Contact people at customer organizations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    normalize_optional, CounterpartId, CustomerId, DomainError, Rank, ValidationError,
};

/// A named contact at a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counterpart {
    id: CounterpartId,
    customer_id: CustomerId,
    name: String,
    department: Option<String>,
    position: Option<String>,
    rank: Option<Rank>,
}

impl Counterpart {
    /// Creates a counterpart.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn new(
        id: CounterpartId,
        customer_id: CustomerId,
        name: String,
        department: Option<String>,
        position: Option<String>,
        rank: Option<Rank>,
    ) -> Result<Self, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        Ok(Self {
            id,
            customer_id,
            name,
            department: normalize_optional(department),
            position: normalize_optional(position),
            rank,
        })
    }

    /// Reconstitute a counterpart from persistence (no validation).
    pub fn reconstitute(
        id: CounterpartId,
        customer_id: CustomerId,
        name: String,
        department: Option<String>,
        position: Option<String>,
        rank: Option<Rank>,
    ) -> Self {
        Self {
            id,
            customer_id,
            name,
            department,
            position,
            rank,
        }
    }

    pub fn id(&self) -> &CounterpartId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn rank(&self) -> Option<Rank> {
        self.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn name_is_required() {
        let err = Counterpart::new(
            CounterpartId::new(),
            CustomerId::new(),
            " ".to_string(),
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyField);
    }

    #[test]
    fn optional_fields_are_trimmed() {
        let counterpart = Counterpart::new(
            CounterpartId::new(),
            CustomerId::new(),
            " Sato Hanako ".to_string(),
            Some(" Sales ".to_string()),
            Some("".to_string()),
            Some(Rank::B),
        )
        .unwrap();

        assert_eq!(counterpart.name(), "Sato Hanako");
        assert_eq!(counterpart.department(), Some("Sales"));
        assert_eq!(counterpart.position(), None);
        assert_eq!(counterpart.rank(), Some(Rank::B));
    }
}
