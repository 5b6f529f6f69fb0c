use crate::entities::User;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use std::sync::Arc;

/// User Service - account lookups and creation keyed by email
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Create a new user with business validation
    pub async fn create_user(
        &self,
        email: String,
        full_name: String,
        is_admin: bool,
    ) -> Result<User, DomainError> {
        let mut user = User::new(email, full_name);
        user.is_admin = is_admin;

        user.validate()?;

        if self.user_repository.find_by_email(&user.email).await?.is_some() {
            return Err(DomainError::EmailAlreadyExists(user.email));
        }

        let saved = self.user_repository.save(&user).await?;
        tracing::info!(user_id = ?saved.id, email = %saved.email, "created user");
        Ok(saved)
    }

    /// Get user by ID
    pub async fn get_user_by_id(&self, id: i32) -> Result<User, DomainError> {
        match self.user_repository.find_by_id(id).await? {
            Some(user) => Ok(user),
            None => Err(DomainError::UserNotFound(id)),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.user_repository.find_by_email(email).await
    }
}
