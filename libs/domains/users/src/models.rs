use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// User entity - matches the users table
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Unique identifier, assigned once at construction
    pub id: Uuid,
    /// User email (unique)
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Creation timestamp, never mutated afterwards
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id and creation timestamp.
    ///
    /// UUIDv7 keeps ids monotonically nonrepeating, so insertion order and
    /// id order agree.
    pub fn new(email: String, first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            email,
            first_name,
            last_name,
            created_at: Utc::now(),
        }
    }

    /// Replace the mutable fields wholesale. `id` and `created_at` are
    /// untouched.
    pub fn apply_update(&mut self, update: UpdateUserRequest) {
        self.email = update.email;
        self.first_name = update.first_name;
        self.last_name = update.last_name;
    }
}

/// User response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
///
/// `id` and `createdAt` are server-assigned and structurally absent here.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Email must be valid")
    )]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank", message = "Last name is required"))]
    pub last_name: String,
}

/// DTO for updating an existing user. Same constraints as create; all
/// three fields are replaced wholesale.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Email must be valid")
    )]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank", message = "Last name is required"))]
    pub last_name: String,
}

/// Whitespace-only counts as blank.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(email: &str, first_name: &str, last_name: &str) -> CreateUserRequest {
        CreateUserRequest {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(create_request("test@example.com", "Test", "User")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        assert!(create_request("invalid-email", "Test", "User")
            .validate()
            .is_err());
    }

    #[test]
    fn test_blank_first_name_is_rejected() {
        assert!(create_request("test@example.com", "", "User")
            .validate()
            .is_err());
        assert!(create_request("test@example.com", "   ", "User")
            .validate()
            .is_err());
    }

    #[test]
    fn test_blank_last_name_is_rejected() {
        assert!(create_request("test@example.com", "Test", "")
            .validate()
            .is_err());
    }

    #[test]
    fn test_apply_update_preserves_identity() {
        let mut user = User::new(
            "old@example.com".to_string(),
            "Old".to_string(),
            "Name".to_string(),
        );
        let id = user.id;
        let created_at = user.created_at;

        user.apply_update(UpdateUserRequest {
            email: "new@example.com".to_string(),
            first_name: "New".to_string(),
            last_name: "Person".to_string(),
        });

        assert_eq!(user.id, id);
        assert_eq!(user.created_at, created_at);
        assert_eq!(user.email, "new@example.com");
        assert_eq!(user.first_name, "New");
        assert_eq!(user.last_name, "Person");
    }
}
