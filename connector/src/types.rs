/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Employer,
    Seeker,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employer => "EMPLOYER",
            Role::Seeker => "SEEKER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::Seeker => "seeker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Internship,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULL_TIME",
            EmploymentType::PartTime => "PART_TIME",
            EmploymentType::Contract => "CONTRACT",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for EmploymentType {
    type Err = String;

    /// Accepts the wire name (`FULL_TIME`) or the label (`full time`, `full-time`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");

        EmploymentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "invalid employment type `{}`, expected one of FULL_TIME, PART_TIME, CONTRACT, INTERNSHIP",
                    s
                )
            })
    }
}

/// Derived by the server from the application deadline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Open,
    Closed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Open => write!(f, "Open"),
            JobStatus::Closed => write!(f, "Closed"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    New,
    Reviewing,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "NEW",
            ApplicationStatus::Reviewing => "REVIEWING",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }

    /// Seekers may only withdraw applications that are still being processed.
    pub fn is_withdrawable(&self) -> bool {
        matches!(self, ApplicationStatus::New | ApplicationStatus::Reviewing)
    }

    /// Status changes an employer is offered for an application in this status.
    pub fn transitions(&self) -> Vec<ApplicationStatus> {
        let mut transitions = Vec::new();

        if *self != ApplicationStatus::Accepted {
            transitions.push(ApplicationStatus::Accepted);
        }

        if *self != ApplicationStatus::Rejected {
            transitions.push(ApplicationStatus::Rejected);
        }

        if *self == ApplicationStatus::New {
            transitions.push(ApplicationStatus::Reviewing);
        }

        transitions
    }

    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        self.transitions().contains(&next)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NEW" => Ok(ApplicationStatus::New),
            "REVIEWING" => Ok(ApplicationStatus::Reviewing),
            "ACCEPTED" => Ok(ApplicationStatus::Accepted),
            "REJECTED" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!(
                "invalid status `{}`, expected one of NEW, REVIEWING, ACCEPTED, REJECTED",
                s
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_employer(&self) -> bool {
        self.role == Role::Employer
    }

    pub fn is_seeker(&self) -> bool {
        self.role == Role::Seeker
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub employer: Option<i64>,
    #[serde(default)]
    pub employer_name: Option<String>,
    pub title: String,
    /// Absent from the public listing.
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub created_at: DateTime<Utc>,
    pub application_deadline: DateTime<Utc>,
    pub status: JobStatus,
    #[serde(default)]
    pub application_count: u32,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Application {
    pub id: i64,
    pub job: i64,
    #[serde(default)]
    pub job_title: String,
    pub seeker: i64,
    #[serde(default)]
    pub seeker_name: String,
    #[serde(default)]
    pub seeker_email: String,
    pub resume_url: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub jobs: u32,
    pub applications: u32,
    pub accepted: u32,
    pub rejected: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: ApplicationStatus,
}
