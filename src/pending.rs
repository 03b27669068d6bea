/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Confirmation before destructive actions.
//!
//! A view hands out a [`PendingAction`] describing what is about to happen.
//! Only [`PendingAction::confirm`] produces the [`Confirmed`] token the
//! destructive operation takes, so the call cannot fire unconfirmed.

use connector::{Application, Job};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteJob {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdraw {
    pub id: i64,
    pub job_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction<A> {
    pub title: &'static str,
    pub message: String,
    pub severity: Severity,
    action: A,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Confirmed<A>(A);

impl<A> Confirmed<A> {
    pub fn action(&self) -> &A {
        &self.0
    }

    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> PendingAction<A> {
    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn confirm(self) -> Confirmed<A> {
        Confirmed(self.action)
    }

    pub fn cancel(self) {}

    /// Confirms or cancels depending on the answer.
    pub fn resolve(self, confirmed: bool) -> Option<Confirmed<A>> {
        confirmed.then(|| self.confirm())
    }
}

impl PendingAction<DeleteJob> {
    pub fn delete_job(job: &Job) -> Self {
        PendingAction {
            title: "Delete Job",
            message: format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone and all associated applications will be permanently removed.",
                job.title
            ),
            severity: Severity::Danger,
            action: DeleteJob {
                id: job.id,
                title: job.title.clone(),
            },
        }
    }
}

impl PendingAction<Withdraw> {
    pub fn withdraw(application: &Application) -> Self {
        PendingAction {
            title: "Withdraw Application",
            message: format!(
                "Are you sure you want to withdraw your application for \"{}\"? This action cannot be undone.",
                application.job_title
            ),
            severity: Severity::Danger,
            action: Withdraw {
                id: application.id,
                job_title: application.job_title.clone(),
            },
        }
    }
}

impl PendingAction<Logout> {
    pub fn logout() -> Self {
        PendingAction {
            title: "Confirm Logout",
            message: "Are you sure you want to log out? You will need to sign in again to access your account.".to_string(),
            severity: Severity::Warning,
            action: Logout,
        }
    }
}
