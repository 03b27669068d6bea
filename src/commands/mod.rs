/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod base;
pub mod employer;
pub mod seeker;

use crate::routing::require_role;
use crate::session::SessionStore;
use crate::views::ViewError;
use chrono::{DateTime, Local, Utc};
use connector::{RequestConfig, Role};

/// Request configuration for a role-specific command, or where to go instead.
pub fn require(session: &SessionStore, role: Role) -> Result<RequestConfig, ViewError> {
    require_role(session.current(), role).map_err(|destination| ViewError::WrongRole {
        required: role,
        destination,
    })?;

    Ok(session.request_config())
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
