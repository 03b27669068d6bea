/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub role: Role,
    /// At least 8 characters, checked by the server
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_role: Option<Role>,
}

pub async fn post_register(
    config: &RequestConfig,
    req: &RegisterRequest,
) -> ClientResult<AuthResponse> {
    let res = get_client(config, "auth/register/", RequestType::POST, false)?
        .json(req)
        .send()
        .await?;

    let auth: AuthResponse = parse_response(res).await?;
    info!(user_id = auth.user.id, role = %auth.user.role, "Registered account");

    Ok(auth)
}

/// Logs in and, when `expected_role` is given, refuses accounts of any other
/// role even if the server accepted the credentials.
pub async fn post_login(
    config: &RequestConfig,
    email: String,
    password: String,
    expected_role: Option<Role>,
) -> ClientResult<AuthResponse> {
    let req = LoginRequest {
        email,
        password,
        expected_role,
    };

    let res = get_client(config, "auth/login/", RequestType::POST, false)?
        .json(&req)
        .send()
        .await?;

    let auth: AuthResponse = match parse_response(res).await {
        Ok(auth) => auth,
        Err(ClientError::Forbidden(err)) => return Err(ClientError::Authentication(err)),
        Err(e) => return Err(e),
    };

    if let Some(expected) = expected_role {
        if auth.user.role != expected {
            return Err(ClientError::RoleMismatch {
                expected,
                actual: auth.user.role,
            });
        }
    }

    info!(user_id = auth.user.id, role = %auth.user.role, "Logged in");

    Ok(auth)
}
