use serde::{Deserialize, Serialize};

/// Core User entity - owner of watchlists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i32>, // None for new users before persistence
    pub email: String,
    pub full_name: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(email: String, full_name: String) -> Self {
        Self {
            id: None,
            email,
            full_name,
            is_admin: false,
        }
    }

    pub fn new_admin(email: String, full_name: String) -> Self {
        Self {
            is_admin: true,
            ..Self::new(email, full_name)
        }
    }

    pub fn with_id(id: i32, email: String, full_name: String, is_admin: bool) -> Self {
        Self {
            id: Some(id),
            email,
            full_name,
            is_admin,
        }
    }

    pub fn validate(&self) -> Result<(), crate::DomainError> {
        if self.full_name.trim().is_empty() {
            return Err(crate::DomainError::ValidationError(
                "Full name cannot be empty".to_string(),
            ));
        }

        if self.email.trim().is_empty() {
            return Err(crate::DomainError::ValidationError(
                "Email cannot be empty".to_string(),
            ));
        }

        if !self.email.contains('@') {
            return Err(crate::DomainError::ValidationError(
                "Invalid email format".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[test]
    fn new_admin_sets_flag() {
        let user = User::new_admin("admin@tradinggrow.com".into(), "Admin User".into());
        assert!(user.is_admin);
        assert_eq!(user.id, None);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let user = User::new("not-an-email".into(), "Jane Trader".into());
        assert!(matches!(user.validate(), Err(DomainError::ValidationError(_))));

        let user = User::new("  ".into(), "Jane Trader".into());
        assert!(user.validate().is_err());
    }

    #[test]
    fn rejects_blank_full_name() {
        let user = User::new("jane@example.com".into(), "".into());
        assert!(user.validate().is_err());
    }
}
