use axum::{
    extract::State,
    http::{
        header::{HOST, ORIGIN},
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        auth::{AuthResponseDto, ForgotPasswordDto, LoginDto, ProfileDto, RegisterDto, ResetPasswordDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::auth::{RegisterParams, RequestOrigin},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

const FORGOT_PASSWORD_MESSAGE: &str =
    "If an account with that email exists, a password reset link has been sent.";

fn request_origin(headers: &HeaderMap) -> RequestOrigin {
    let header = |name| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    RequestOrigin {
        origin: header(ORIGIN),
        host: header(HOST),
    }
}

fn auth_service(state: &AppState) -> AuthService<'_> {
    AuthService::new(&state.db, &state.tokens, &state.mailer, &state.config)
}

/// Registers a user and the restaurant named after their email.
///
/// The company slug is the email's local part. When that company already exists the user
/// joins it as a customer regardless of the requested role. A welcome email is sent in the
/// background.
///
/// # Arguments
/// - `state` - Application state containing the database connection and mailer
/// - `headers` - `Origin` and `Host`, used to build the tenant URL
/// - `payload` - Full name, email, password and optional role
///
/// # Returns
/// - `201 Created` - User, a 24 hour token and the company link
/// - `400 Bad Request` - Missing fields or email already registered
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "User registered", body = AuthResponseDto),
        (status = 400, description = "Missing fields or email already registered", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let authenticated = auth_service(&state)
        .register(params, &request_origin(&headers))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(authenticated.into_dto("User registered successfully")),
    ))
}

/// Checks credentials and returns a 30 day token.
///
/// # Returns
/// - `200 OK` - User, token and company link
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponseDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = auth_service(&state)
        .login(payload, &request_origin(&headers))
        .await?;

    Ok((StatusCode::OK, Json(authenticated.into_dto("Login successful"))))
}

/// Starts a password reset.
///
/// Always answers 200 so the response does not reveal whether the email is registered.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset link sent if the email is registered", body = MessageDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    auth_service(&state).forgot_password(&payload.email).await?;

    Ok((StatusCode::OK, Json(MessageDto::new(FORGOT_PASSWORD_MESSAGE))))
}

/// Sets a new password using a reset token from the email link.
///
/// # Returns
/// - `200 OK` - Password replaced, token consumed
/// - `400 Bad Request` - Token unknown or expired
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    auth_service(&state).reset_password(payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password has been reset successfully")),
    ))
}

/// Returns the profile of the authenticated user.
///
/// # Access Control
/// - Any valid token
///
/// # Returns
/// - `200 OK` - Profile with company and branch IDs
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Token invalid or its user deleted
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user's profile", body = DataDto<ProfileDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = auth_service(&state).me(claims.id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(ProfileDto::from(user)))))
}
