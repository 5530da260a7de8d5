use crate::dto::user_dto::CreateUserCommand;
use crate::error::Result;
use crate::models::user::{CreatedUser, NewUser, User};
use crate::utils::crypto::{hash_password, HashScheme};
use async_trait::async_trait;
use sqlx::PgPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts the row and returns the storage-generated id.
    async fn insert(&self, user: &NewUser) -> Result<String>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &NewUser) -> Result<String> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, password_hash, full_name, role, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id::text
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id::text AS id, email, password_hash, full_name, role, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

pub struct UserService<S> {
    store: S,
    hash_scheme: HashScheme,
}

impl<S: UserStore> UserService<S> {
    pub fn new(store: S, hash_scheme: HashScheme) -> Self {
        Self { store, hash_scheme }
    }

    /// Hashes the password and inserts exactly one active user.
    pub async fn create(&self, cmd: &CreateUserCommand) -> Result<CreatedUser> {
        let password_hash = hash_password(&cmd.password, self.hash_scheme)?;

        let new_user = NewUser {
            email: cmd.email.clone(),
            password_hash,
            full_name: cmd.full_name.clone(),
            role: cmd.role,
            is_active: true,
        };

        let id = self.store.insert(&new_user).await?;
        tracing::info!(user_id = %id, email = %new_user.email, role = %new_user.role, "User created");

        Ok(CreatedUser {
            id,
            email: new_user.email,
            role: new_user.role,
        })
    }
}
