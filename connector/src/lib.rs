/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod applications;
pub mod auth;
pub mod error;
pub mod jobs;
pub mod types;

pub use error::{ApiError, ClientError, ClientResult};
pub use types::*;

use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub server_url: String,
    pub token: Option<String>,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>, token: Option<String>) -> Self {
        RequestConfig {
            server_url: server_url.into().trim_end_matches('/').to_string(),
            token: token.filter(|token| !token.is_empty()),
        }
    }
}

pub type RequestType = reqwest::Method;

async fn parse_response<T: DeserializeOwned>(res: reqwest::Response) -> ClientResult<T> {
    let status = res.status();
    let bytes = res.bytes().await?;

    if !status.is_success() {
        return Err(ClientError::from_status(status.as_u16(), &bytes));
    }

    Ok(serde_json::from_slice::<T>(&bytes)?)
}

async fn parse_empty_response(res: reqwest::Response) -> ClientResult<()> {
    let status = res.status();

    if status.is_success() {
        return Ok(());
    }

    let bytes = res.bytes().await?;
    Err(ClientError::from_status(status.as_u16(), &bytes))
}

fn get_client(
    config: &RequestConfig,
    endpoint: &str,
    request_type: RequestType,
    login: bool,
) -> ClientResult<reqwest::RequestBuilder> {
    debug!(method = %request_type, endpoint, "Preparing request");

    let client = reqwest::Client::new();
    let mut client = client.request(
        request_type,
        format!("{}/api/{}", config.server_url, endpoint),
    );

    client = client.header("Content-Type", "application/json");

    match &config.token {
        Some(token) => client = client.header("Authorization", format!("Bearer {}", token)),
        None if login => return Err(ClientError::MissingToken),
        None => {}
    }

    Ok(client)
}
