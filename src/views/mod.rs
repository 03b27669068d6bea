/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Employer and seeker views.
//!
//! A view owns the collections it fetched and only replaces them after a
//! call completed successfully, so a failed call leaves it as it was.

pub mod employer;
pub mod seeker;

use crate::routing::Destination;
use connector::{ApplicationStatus, ClientError, Role};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid deadline `{0}`, expected local time as YYYY-MM-DDTHH:MM")]
    InvalidDeadline(String),
    #[error("{0}")]
    DeadlineRejected(String),
    #[error("Invalid employment type: {0}")]
    InvalidEmploymentType(String),
    #[error("\"{title}\" is no longer accepting applications")]
    JobClosed { title: String },
    #[error("Job {0} not found")]
    UnknownJob(i64),
    #[error("Application {0} not found")]
    UnknownApplication(i64),
    #[error("Applications with status {0} can no longer be withdrawn")]
    NotWithdrawable(ApplicationStatus),
    #[error("Cannot change status from {from} to {to}")]
    TransitionNotAllowed {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
    #[error("Withdrawing applications is not available yet")]
    WithdrawUnavailable,
    #[error("This command is for {} accounts. Use `{}` instead.", .required.label(), .destination.command())]
    WrongRole {
        required: Role,
        destination: Destination,
    },
}

pub type ViewResult<T> = Result<T, ViewError>;
