//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AppId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{
    app::App,
    auth_session::AuthSession,
    user::{NewUser, User},
};
use crate::domain::repository::{AppRepository, AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    app_name::AppName, email::Email, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// Unique constraint on (app_id, username)
const USERS_USERNAME_KEY: &str = "users_app_id_username_key";
/// Unique constraint on (app_id, email)
const USERS_EMAIL_KEY: &str = "users_app_id_email_key";

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Clean up expired sessions
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// App Repository Implementation
// ============================================================================

impl AppRepository for PgAuthRepository {
    async fn create(&self, name: &AppName) -> AuthResult<Option<App>> {
        let row = sqlx::query_as::<_, AppRow>(
            r#"
            INSERT INTO apps (name)
            VALUES ($1)
            ON CONFLICT (name) DO NOTHING
            RETURNING id, name
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AppRow::into_app))
    }

    async fn find_by_name(&self, name: &AppName) -> AuthResult<Option<App>> {
        let row = sqlx::query_as::<_, AppRow>("SELECT id, name FROM apps WHERE name = $1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(AppRow::into_app))
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut tx = self.pool.begin().await?;

        let user_name_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE app_id = $1 AND username = $2)",
        )
        .bind(user.app_id.get())
        .bind(user.user_name.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if user_name_taken {
            return Err(AuthError::UsernameTaken);
        }

        let email_taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE app_id = $1 AND email = $2)",
        )
        .bind(user.app_id.get())
        .bind(user.email.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if email_taken {
            return Err(AuthError::EmailTaken);
        }

        // The unique indexes still guard against a concurrent registration
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (app_id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user.app_id.get())
        .bind(user.user_name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_user_conflict)?;

        tx.commit().await?;

        Ok(user.into_user(UserId::new(id)))
    }

    async fn find_by_user_name(
        &self,
        app_id: AppId,
        user_name: &UserName,
    ) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                app_id,
                username,
                email,
                password_hash
            FROM users
            WHERE app_id = $1 AND username = $2
            "#,
        )
        .bind(app_id.get())
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}

fn map_user_conflict(e: sqlx::Error) -> AuthError {
    let constraint = match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            db.constraint().map(str::to_owned)
        }
        _ => None,
    };

    match constraint.as_deref() {
        Some(USERS_USERNAME_KEY) => AuthError::UsernameTaken,
        Some(USERS_EMAIL_KEY) => AuthError::EmailTaken,
        _ => AuthError::Database(e),
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.get())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let now_ms = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                expires_at_ms,
                created_at
            FROM auth_sessions
            WHERE session_id = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(session_id)
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        self.cleanup_expired().await
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AppRow {
    id: i64,
    name: String,
}

impl AppRow {
    fn into_app(self) -> App {
        App {
            id: AppId::new(self.id),
            name: AppName::from_db(self.name),
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    app_id: i64,
    username: String,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            id: UserId::new(self.id),
            app_id: AppId::new(self.app_id),
            user_name: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password_hash: UserPassword::from_db(self.password_hash)
                .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    user_id: i64,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: self.session_id,
            user_id: UserId::new(self.user_id),
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
