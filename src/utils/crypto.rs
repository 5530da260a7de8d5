use crate::error::{Error, Result};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// bcrypt only looks at the first 72 bytes of its input.
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    Bcrypt { cost: u32 },
    Argon2,
}

impl Default for HashScheme {
    fn default() -> Self {
        HashScheme::Bcrypt {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

pub fn hash_password(plain: &str, scheme: HashScheme) -> Result<String> {
    match scheme {
        HashScheme::Bcrypt { cost } => {
            if plain.len() > BCRYPT_MAX_PASSWORD_BYTES {
                return Err(Error::Hash(format!(
                    "password is {} bytes, bcrypt accepts at most {}",
                    plain.len(),
                    BCRYPT_MAX_PASSWORD_BYTES
                )));
            }
            bcrypt::hash(plain, cost).map_err(|e| Error::Hash(e.to_string()))
        }
        HashScheme::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let password_hash = Argon2::default()
                .hash_password(plain.as_bytes(), &salt)
                .map_err(|e| Error::Hash(e.to_string()))?
                .to_string();
            Ok(password_hash)
        }
    }
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool> {
    if hashed.starts_with("$2a$") || hashed.starts_with("$2b$") || hashed.starts_with("$2y$") {
        return bcrypt::verify(plain, hashed).map_err(|e| Error::Hash(e.to_string()));
    }
    if hashed.starts_with("$argon2") {
        let parsed_hash = PasswordHash::new(hashed).map_err(|e| Error::Hash(e.to_string()))?;
        let ok = Argon2::default()
            .verify_password(plain.as_bytes(), &parsed_hash)
            .is_ok();
        return Ok(ok);
    }
    Err(Error::Hash("unrecognised password hash format".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST_BCRYPT: HashScheme = HashScheme::Bcrypt { cost: 4 };

    #[test]
    fn bcrypt_hash_verifies_only_the_original_password() {
        let hashed = hash_password("admin123", FAST_BCRYPT).unwrap();

        assert!(hashed.starts_with("$2b$04$"));
        assert!(verify_password("admin123", &hashed).unwrap());
        assert!(!verify_password("admin124", &hashed).unwrap());
    }

    #[test]
    fn bcrypt_hashes_are_salted() {
        let first = hash_password("same-secret", FAST_BCRYPT).unwrap();
        let second = hash_password("same-secret", FAST_BCRYPT).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn bcrypt_rejects_passwords_over_72_bytes() {
        let long = "x".repeat(BCRYPT_MAX_PASSWORD_BYTES + 1);
        let err = hash_password(&long, FAST_BCRYPT).unwrap_err();
        assert!(matches!(err, Error::Hash(_)));

        let limit = "x".repeat(BCRYPT_MAX_PASSWORD_BYTES);
        assert!(hash_password(&limit, FAST_BCRYPT).is_ok());
    }

    #[test]
    fn argon2_hash_verifies_only_the_original_password() {
        let hashed = hash_password("s3cret pass", HashScheme::Argon2).unwrap();

        assert!(hashed.starts_with("$argon2id$"));
        assert!(verify_password("s3cret pass", &hashed).unwrap());
        assert!(!verify_password("s3cret pas", &hashed).unwrap());
    }

    #[test]
    fn unknown_hash_format_is_an_error() {
        assert!(verify_password("pw", "plaintext").is_err());
    }

    #[test]
    fn default_scheme_is_bcrypt_default_cost() {
        assert_eq!(
            HashScheme::default(),
            HashScheme::Bcrypt {
                cost: bcrypt::DEFAULT_COST
            }
        );
    }
}
