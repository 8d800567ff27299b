//! Demo authentication service
//!
//! Deliberately trivial: any well-formed email with a 4+ character
//! password is accepted and receives an opaque session token held in
//! memory. Not a security boundary; it exists so the API surface matches
//! the product's login flow.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use rand::distributions::Alphanumeric;
use rand::Rng;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::Role,
        user::{LoginRequest, LoginResponse, SignupRequest, UpdateProfile, User, UserProfile},
    },
};

const TOKEN_LENGTH: usize = 32;

#[derive(Clone)]
pub struct AuthService {
    sessions: Arc<RwLock<HashMap<String, User>>>,
    profile: Arc<RwLock<UserProfile>>,
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            profile: Arc::new(RwLock::new(UserProfile {
                name: "Admin User".to_string(),
                email: "admin@gearguard.io".to_string(),
                role: "admin".to_string(),
                team_id: String::new(),
                phone: "+1 234 567 8900".to_string(),
            })),
        }
    }

    pub fn login(&self, data: LoginRequest) -> AppResult<LoginResponse> {
        data.validate()
            .map_err(|_| AppError::Authentication("Invalid email or password".to_string()))?;

        let name = data
            .email
            .split('@')
            .next()
            .unwrap_or(&data.email)
            .to_string();
        let user = User {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            email: data.email,
            name,
            role: Role::Manager,
        };
        Ok(self.open_session(user))
    }

    pub fn signup(&self, data: SignupRequest) -> AppResult<LoginResponse> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let user = User {
            id: format!("user-{}", uuid::Uuid::new_v4()),
            email: data.email,
            name: data.name,
            role: Role::User,
        };
        Ok(self.open_session(user))
    }

    /// Resolve a bearer token to its session user
    pub fn session_user(&self, token: &str) -> Option<User> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    pub fn logout(&self, token: &str) {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }

    pub fn profile(&self) -> UserProfile {
        self.profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update_profile(&self, patch: &UpdateProfile) -> AppResult<UserProfile> {
        patch.validate()?;
        let mut profile = self
            .profile
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(name) = &patch.name {
            profile.name = name.clone();
        }
        if let Some(email) = &patch.email {
            profile.email = email.clone();
        }
        if let Some(role) = &patch.role {
            profile.role = role.clone();
        }
        if let Some(team_id) = &patch.team_id {
            profile.team_id = team_id.clone();
        }
        if let Some(phone) = &patch.phone {
            profile.phone = phone.clone();
        }
        Ok(profile.clone())
    }

    fn open_session(&self, user: User) -> LoginResponse {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), user.clone());
        tracing::debug!(user = %user.email, "session opened");
        LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            user,
        }
    }
}
