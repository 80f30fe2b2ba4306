use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::account::errors::AccountError;
use crate::account::ports::AccountServicePort;
use crate::account::ports::AccountStore;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::Username;
use crate::inbound::http::router::AppState;

pub async fn login<S: AccountStore>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // An unparseable username gets the same response as a failed lookup;
    // login never confirms which usernames exist
    let username = Username::new(body.username)
        .map_err(|_| ApiError::from(AccountError::InvalidCredentials))?;

    let token = state
        .account_service
        .authenticate(Credentials::new(username, body.password))
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: token.into_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub access_token: String,
}
