use crate::error::Result;
use crate::models::user::Role;
use crate::utils::validation::validate_present;
use std::env;
use std::fmt;
use validator::Validate;

pub const EMAIL_VAR: &str = "USER_EMAIL";
pub const PASSWORD_VAR: &str = "USER_PASSWORD";
pub const FULLNAME_VAR: &str = "USER_FULLNAME";
pub const ROLE_VAR: &str = "USER_ROLE";

/// Raw user-creation parameters as found in the environment.
/// Absent variables read as empty strings.
#[derive(Clone, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub full_name: String,
    pub role: Option<String>,
}

/// Validated parameters, ready to hash and insert.
#[derive(Clone)]
pub struct CreateUserCommand {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

impl CreateUserRequest {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            email: lookup(EMAIL_VAR).unwrap_or_default(),
            password: lookup(PASSWORD_VAR).unwrap_or_default(),
            full_name: lookup(FULLNAME_VAR).unwrap_or_default(),
            role: lookup(ROLE_VAR).filter(|r| !r.is_empty()),
        }
    }

    /// Presence checks first, then the role; an unset role means `admin`.
    pub fn into_command(self) -> Result<CreateUserCommand> {
        validate_present(
            &self,
            &[
                ("email", EMAIL_VAR),
                ("password", PASSWORD_VAR),
                ("full_name", FULLNAME_VAR),
            ],
        )?;

        let role = match self.role.as_deref() {
            Some(raw) => raw.parse()?,
            None => Role::default(),
        };

        Ok(CreateUserCommand {
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            role,
        })
    }
}

impl fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .finish()
    }
}
