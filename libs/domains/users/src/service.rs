use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUserRequest, UpdateUserRequest, User, UserResponse};
use crate::repository::UserRepository;

/// Service layer orchestrating User operations against the repository.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user. The entity construction assigns id and
    /// creation timestamp; clients never supply them.
    pub async fn create_user(&self, input: CreateUserRequest) -> UserResult<UserResponse> {
        let user = User::new(input.email, input.first_name, input.last_name);

        let created = self.repository.create(user).await?;
        Ok(created.into())
    }

    /// Get a user by ID. Absence is not an error at this layer.
    pub async fn find_user(&self, id: Uuid) -> UserResult<Option<UserResponse>> {
        let user = self.repository.find_by_id(id).await?;
        Ok(user.map(|u| u.into()))
    }

    /// List all users.
    pub async fn find_all_users(&self) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Update a user, replacing email/first_name/last_name wholesale.
    /// Fails with NotFound when the id does not exist.
    pub async fn update_user(&self, id: Uuid, input: UpdateUserRequest) -> UserResult<UserResponse> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        user.apply_update(input);

        let updated = self.repository.update(user).await?;
        Ok(updated.into())
    }

    /// Delete a user by ID. Delete-if-present: an absent id is swallowed,
    /// making the operation idempotent.
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let existed = self.repository.delete_by_id(id).await?;

        if !existed {
            tracing::debug!(user_id = %id, "Delete requested for absent user");
        }

        Ok(())
    }
}
