use crate::error::Error;
use crate::models::user::CreatedUser;
use std::fmt;

pub const USAGE: &str = "\
Usage:
  USER_EMAIL=admin@example.com USER_PASSWORD=admin123 USER_FULLNAME=\"Admin User\" USER_ROLE=admin create-user

Available roles: admin, user
If USER_ROLE is not set, 'admin' is used by default";

pub const INVALID_ROLE: &str = "Error: USER_ROLE must be 'admin' or 'user'";

/// Operator-facing text for an input error: usage for missing variables,
/// the role message otherwise.
pub fn input_error_text(err: &Error) -> &'static str {
    match err {
        Error::MissingInput(_) => USAGE,
        _ => INVALID_ROLE,
    }
}

/// Success report for the operator's terminal. The plaintext password is
/// included only when `password` is `Some`.
pub struct Confirmation<'a> {
    pub user: &'a CreatedUser,
    pub password: Option<&'a str>,
}

impl fmt::Display for Confirmation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "✅ User created successfully!")?;
        writeln!(f, "   ID: {}", self.user.id)?;
        writeln!(f, "   Email: {}", self.user.email)?;
        writeln!(f, "   Role: {}", self.user.role)?;
        writeln!(f)?;
        writeln!(f, "🔑 You can now login with:")?;
        writeln!(f, "   Email: {}", self.user.email)?;
        match self.password {
            Some(password) => writeln!(f, "   Password: {}", password),
            None => writeln!(f, "   Password: (hidden, ECHO_PASSWORD=false)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    fn created() -> CreatedUser {
        CreatedUser {
            id: "7".to_string(),
            email: "ops@example.com".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn confirmation_lists_id_email_role_and_password() {
        let user = created();
        let text = Confirmation {
            user: &user,
            password: Some("admin123"),
        }
        .to_string();

        assert!(text.contains("ID: 7"));
        assert!(text.contains("Email: ops@example.com"));
        assert!(text.contains("Role: user"));
        assert!(text.contains("Password: admin123"));
    }

    #[test]
    fn confirmation_can_hide_password() {
        let user = created();
        let text = Confirmation {
            user: &user,
            password: None,
        }
        .to_string();

        assert!(text.contains("Email: ops@example.com"));
        assert!(!text.contains("admin123"));
        assert!(text.contains("hidden"));
    }

    #[test]
    fn input_errors_map_to_usage_or_role_message() {
        let missing = Error::MissingInput(vec!["USER_EMAIL"]);
        let role = Error::InvalidRole("superuser".to_string());

        assert!(missing.is_input_error() && role.is_input_error());
        assert_eq!(input_error_text(&missing), USAGE);
        assert_eq!(input_error_text(&role), INVALID_ROLE);
    }

    #[test]
    fn usage_names_every_input_variable() {
        for var in ["USER_EMAIL", "USER_PASSWORD", "USER_FULLNAME", "USER_ROLE"] {
            assert!(USAGE.contains(var));
        }
    }
}
