/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::{Role, User};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Landing,
    EmployerDashboard,
    JobBoard,
}

impl Destination {
    pub fn command(&self) -> &'static str {
        match self {
            Destination::Landing => "jobboard login",
            Destination::EmployerDashboard => "jobboard employer dashboard",
            Destination::JobBoard => "jobboard jobs list",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Landing => write!(f, "landing page"),
            Destination::EmployerDashboard => write!(f, "employer dashboard"),
            Destination::JobBoard => write!(f, "job board"),
        }
    }
}

pub fn route_for(user: Option<&User>) -> Destination {
    match user.map(|user| user.role) {
        None => Destination::Landing,
        Some(Role::Employer) => Destination::EmployerDashboard,
        Some(Role::Seeker) => Destination::JobBoard,
    }
}

/// Returns where the user belongs instead when they may not enter a view for `role`.
pub fn require_role(user: Option<&User>, role: Role) -> Result<&User, Destination> {
    match user {
        Some(user) if user.role == role => Ok(user),
        other => Err(route_for(other)),
    }
}
