//! User use cases: create-or-update, lookup, pagination, soft delete, and
//! the login flow that issues bearer tokens.

use std::sync::Arc;

use tracing::{info, warn};

use coreadmin_auth::jwt::JwtEncoder;
use coreadmin_auth::password::PasswordHasher;
use coreadmin_core::error::AppError;
use coreadmin_core::result::AppResult;
use coreadmin_core::types::{LevelId, PageRequest, PageResponse, UserId};
use coreadmin_entity::store::UserStore;
use coreadmin_entity::user::{User, UserRecord};

/// Create-or-update input for a user, carrying the plaintext secret (if
/// any). The plaintext never travels past this service: it is hashed here
/// and only the hash reaches the store.
#[derive(Debug, Clone)]
pub struct UserDraft {
    /// Present for updates, absent for creates.
    pub id: Option<UserId>,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Full name.
    pub full_name: String,
    /// New plaintext secret; empty or absent keeps the stored hash on
    /// update and is rejected on create.
    pub password: Option<String>,
    /// Profile picture reference.
    pub picture: Option<String>,
    /// Assigned access level.
    pub level_id: LevelId,
}

/// User management and login.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: Arc<JwtEncoder>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: Arc<JwtEncoder>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Authenticate an email/secret pair and issue a bearer token.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. A failed verification bumps the user's failed-login counter;
    /// success resets it.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            if let Err(err) = self.users.record_failed_login(user.id).await {
                warn!(user_id = %user.id, error = %err, "failed to record login failure");
            }
            return Err(invalid_credentials());
        }

        self.users.clear_failed_logins(user.id).await?;
        info!(user_id = %user.id, "login successful");
        self.tokens.issue(user.id, &user.email, user.level_id)
    }

    /// Create a new user or update an existing one.
    ///
    /// The secret is hashed at creation and at any update that supplies a
    /// new one; an update without a secret carries the stored hash forward.
    pub async fn create_or_update(&self, draft: UserDraft) -> AppResult<User> {
        let new_password = draft.password.as_deref().filter(|p| !p.is_empty());

        match draft.id {
            Some(id) => {
                let password_hash = match new_password {
                    Some(password) => self.hasher.hash_password(password)?,
                    None => {
                        self.users
                            .find_by_id(id)
                            .await?
                            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?
                            .password_hash
                    }
                };
                self.users.update(id, &record(&draft, password_hash)).await
            }
            None => {
                let password = new_password
                    .ok_or_else(|| AppError::validation("password is required for new users"))?;
                let password_hash = self.hasher.hash_password(password)?;
                self.users.create(&record(&draft, password_hash)).await
            }
        }
    }

    /// Fetch a user by id.
    pub async fn get(&self, id: UserId) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// One page of users plus the total count.
    pub async fn paginate(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.users.paginate(page).await
    }

    /// Soft-delete a user.
    pub async fn delete(&self, id: UserId) -> AppResult<bool> {
        self.users.delete(id).await
    }
}

fn record(draft: &UserDraft, password_hash: String) -> UserRecord {
    UserRecord {
        username: draft.username.clone(),
        email: draft.email.clone(),
        full_name: draft.full_name.clone(),
        password_hash,
        picture: draft.picture.clone(),
        level_id: draft.level_id,
    }
}

fn invalid_credentials() -> AppError {
    AppError::authentication("invalid email or password")
}
