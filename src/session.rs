/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Persisted login state.
//!
//! The store is opened once per process and handed to whatever needs the
//! current user or a [`RequestConfig`]. The credential and user snapshot
//! live in the configuration file next to the server URL, so they survive
//! restarts until [`SessionStore::logout`] clears them.

use crate::config::{Config, ConfigKey};
use anyhow::Result;
use connector::auth::{self, RegisterRequest};
use connector::{AuthResponse, ClientError, RequestConfig, Role, User};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    config: Config,
}

impl SessionStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = Config::load(&path)?;

        Ok(SessionStore { path, config })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Both the credential and the user snapshot must be present.
    pub fn current(&self) -> Option<&User> {
        match (&self.config.authtoken, &self.config.user) {
            (Some(_), Some(user)) => Some(user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.config.authtoken.as_deref()
    }

    pub fn request_config(&self) -> RequestConfig {
        RequestConfig::new(
            self.config.server_url(),
            self.config.authtoken.clone(),
        )
    }

    pub fn set_value(&mut self, key: ConfigKey, value: Option<String>) -> Result<()> {
        let mut config = self.config.clone();
        config.set(key, value);
        self.commit(config)
    }

    pub async fn login(
        &mut self,
        email: String,
        password: String,
        expected_role: Option<Role>,
    ) -> Result<User, SessionError> {
        let auth = auth::post_login(&self.request_config(), email, password, expected_role).await?;
        self.persist(auth)
    }

    pub async fn register(&mut self, req: &RegisterRequest) -> Result<User, SessionError> {
        let auth = auth::post_register(&self.request_config(), req).await?;
        self.persist(auth)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.commit(Config {
            authtoken: None,
            user: None,
            ..self.config.clone()
        })?;

        info!("Session cleared");
        Ok(())
    }

    fn persist(&mut self, auth: AuthResponse) -> Result<User, SessionError> {
        self.commit(Config {
            authtoken: Some(auth.access),
            user: Some(auth.user.clone()),
            ..self.config.clone()
        })?;

        info!(user_id = auth.user.id, "Session stored");
        Ok(auth.user)
    }

    /// In-memory state only changes once `config` is on disk.
    fn commit(&mut self, config: Config) -> Result<()> {
        config.save(&self.path)?;
        self.config = config;
        Ok(())
    }
}
