/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::types::Role;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Non-2xx response from the job board API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub payload: Value,
}

impl ApiError {
    pub fn new(status: u16, payload: Value) -> Self {
        let message = extract_message(&payload)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        ApiError {
            status,
            message,
            payload,
        }
    }

    /// First message reported for a single form field, e.g. `application_deadline`.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self.payload.get(field)? {
            Value::String(message) => Some(message),
            Value::Array(messages) => messages.first()?.as_str(),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Field errors are scanned in the order the server sent them.
fn extract_message(payload: &Value) -> Option<String> {
    let object = payload.as_object()?;

    for key in ["error", "detail"] {
        if let Some(Value::String(message)) = object.get(key) {
            return Some(message.clone());
        }
    }

    object.iter().find_map(|(field, value)| {
        let message = match value {
            Value::Array(messages) => messages.first()?.as_str()?,
            Value::String(message) => message.as_str(),
            _ => return None,
        };

        if field == "non_field_errors" {
            Some(message.to_string())
        } else {
            Some(format!("{}: {}", field, message))
        }
    })
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Not logged in. Use `jobboard login` to log in.")]
    MissingToken,
    #[error("Authentication failed: {0}")]
    Authentication(ApiError),
    #[error("This login is for {} accounts only, but this account is {}", .expected.label(), .actual.label())]
    RoleMismatch { expected: Role, actual: Role },
    #[error("{0}")]
    Validation(ApiError),
    #[error("{0}")]
    NotFound(ApiError),
    #[error("{0}")]
    Forbidden(ApiError),
    #[error("{0}")]
    Server(ApiError),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body).unwrap_or_else(|_| {
            let text = String::from_utf8_lossy(body).trim().to_string();
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text)
            }
        });

        let err = ApiError::new(status, payload);

        match status {
            400 => ClientError::Validation(err),
            401 => ClientError::Authentication(err),
            403 => ClientError::Forbidden(err),
            404 => ClientError::NotFound(err),
            _ => ClientError::Server(err),
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Authentication(err)
            | ClientError::Validation(err)
            | ClientError::NotFound(err)
            | ClientError::Forbidden(err)
            | ClientError::Server(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(
            self,
            ClientError::Authentication(_) | ClientError::RoleMismatch { .. } | ClientError::MissingToken
        )
    }
}
