//! Authentication Handlers
//!
//! Handles user registration and login (JWT token issuance)

use std::time::Duration;

use axum::{Json, extract::State, http::StatusCode};

use crate::auth::{hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::{ApiData, AppError, AppResult, ok, time};

use shared::client::{CredentialsRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

fn extract_credentials(req: CredentialsRequest) -> AppResult<(String, String)> {
    match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
        _ => Err(AppError::validation("Username or password not provided")),
    }
}

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<CredentialsRequest>,
) -> AppResult<Json<ApiData<LoginResponse>>> {
    let (username, password) = extract_credentials(req)?;

    let found = user::find_by_username(&state.pool, &username).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let found = match found {
        Some(u) => {
            let password_valid = verify_password(&u.hash_pass, &password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(username = %username, "Login failed - invalid credentials");
                return Err(AppError::not_found(
                    "User does not exist or Password is incorrect",
                ));
            }

            u
        }
        None => {
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::not_found(
                "User does not exist or Password is incorrect",
            ));
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(found.id, &found.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = found.id, username = %found.username, "User logged in successfully");

    Ok(ok(LoginResponse {
        token,
        user: UserInfo {
            id: found.id,
            username: found.username,
        },
    }))
}

/// Register handler
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<ApiData<&'static str>>)> {
    let (username, password) = extract_credentials(req)?;

    if user::find_by_username(&state.pool, &username).await?.is_some() {
        return Err(AppError::conflict("User already exists"));
    }

    let hash = hash_password(&password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;
    let created = user::create(&state.pool, &username, &hash, time::now_millis()).await?;

    tracing::info!(user_id = created.id, username = %created.username, "User registered");

    Ok((StatusCode::CREATED, ok("User created successfully")))
}
