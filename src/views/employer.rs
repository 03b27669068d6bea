/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{ViewError, ViewResult};
use crate::listing::Query;
use crate::pending::{Confirmed, DeleteJob, PendingAction};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use connector::jobs::JobRequest;
use connector::*;
use std::fmt::Display;
use tracing::{debug, info, instrument};

const DEADLINE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Job form as entered by the employer; every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM`.
    pub application_deadline: String,
}

impl JobForm {
    pub fn from_job(job: &Job) -> Self {
        Self::from_job_in(job, &Local)
    }

    pub fn from_job_in<Tz: TimeZone>(job: &Job, tz: &Tz) -> Self
    where
        Tz::Offset: Display,
    {
        JobForm {
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            employment_type: job.employment_type.as_str().to_string(),
            application_deadline: job
                .application_deadline
                .with_timezone(tz)
                .format("%Y-%m-%dT%H:%M")
                .to_string(),
        }
    }

    pub fn to_request(&self) -> ViewResult<JobRequest> {
        self.to_request_in(&Local)
    }

    pub fn to_request_in<Tz: TimeZone>(&self, tz: &Tz) -> ViewResult<JobRequest> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;
        let location = required("location", &self.location)?;
        let employment_type = required("employment_type", &self.employment_type)?
            .parse::<EmploymentType>()
            .map_err(ViewError::InvalidEmploymentType)?;
        let deadline = required("application_deadline", &self.application_deadline)?;

        Ok(JobRequest {
            title,
            description,
            location,
            employment_type,
            application_deadline: parse_deadline(&deadline, tz)?,
        })
    }
}

fn required(name: &'static str, value: &str) -> ViewResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ViewError::MissingField(name));
    }

    Ok(value.to_string())
}

/// Interprets `value` as wall-clock time in `tz` and returns the absolute instant.
pub fn parse_deadline<Tz: TimeZone>(value: &str, tz: &Tz) -> ViewResult<DateTime<Utc>> {
    let value = value.trim();

    let naive = DEADLINE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| ViewError::InvalidDeadline(value.to_string()))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|deadline| deadline.with_timezone(&Utc))
        .ok_or_else(|| ViewError::InvalidDeadline(value.to_string()))
}

fn save_error(err: ClientError) -> ViewError {
    if let ClientError::Validation(api) = &err {
        if let Some(message) = api.field_error("application_deadline") {
            return ViewError::DeadlineRejected(message.to_string());
        }
    }

    ViewError::Client(err)
}

/// Applicants of one job.
#[derive(Debug, Clone)]
pub struct ApplicantList {
    pub job: Job,
    pub applications: Vec<Application>,
}

impl ApplicantList {
    pub fn application(&self, id: i64) -> ViewResult<&Application> {
        self.applications
            .iter()
            .find(|application| application.id == id)
            .ok_or(ViewError::UnknownApplication(id))
    }
}

#[derive(Debug, Clone)]
pub struct EmployerDashboard {
    config: RequestConfig,
    stats: DashboardStats,
    jobs: Vec<Job>,
}

impl EmployerDashboard {
    pub async fn load(config: RequestConfig) -> ClientResult<Self> {
        let (stats, jobs) = fetch(&config).await?;

        Ok(EmployerDashboard {
            config,
            stats,
            jobs,
        })
    }

    /// Refetches the aggregate and the job list together.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let (stats, jobs) = fetch(&self.config).await?;
        self.stats = stats;
        self.jobs = jobs;
        Ok(())
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: i64) -> ViewResult<&Job> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or(ViewError::UnknownJob(id))
    }

    pub fn listing(&self, query: &Query<EmploymentType>) -> Vec<&Job> {
        query.apply(&self.jobs)
    }

    #[instrument(skip_all)]
    pub async fn create_job(&mut self, form: &JobForm) -> ViewResult<Job> {
        let req = form.to_request()?;
        self.create_job_request(&req).await
    }

    pub async fn create_job_request(&mut self, req: &JobRequest) -> ViewResult<Job> {
        let job = jobs::post_employer(&self.config, req)
            .await
            .map_err(save_error)?;

        info!(job_id = job.id, "Created job");
        self.refresh().await?;
        Ok(job)
    }

    pub fn edit_form(&self, id: i64) -> ViewResult<JobForm> {
        Ok(JobForm::from_job(self.job(id)?))
    }

    #[instrument(skip(self, form))]
    pub async fn update_job(&mut self, id: i64, form: &JobForm) -> ViewResult<Job> {
        let req = form.to_request()?;
        self.update_job_request(id, &req).await
    }

    pub async fn update_job_request(&mut self, id: i64, req: &JobRequest) -> ViewResult<Job> {
        let job = jobs::put_employer(&self.config, id, req)
            .await
            .map_err(save_error)?;

        info!(job_id = job.id, "Updated job");
        self.refresh().await?;
        Ok(job)
    }

    pub fn request_delete(&self, id: i64) -> ViewResult<PendingAction<DeleteJob>> {
        Ok(PendingAction::delete_job(self.job(id)?))
    }

    pub async fn delete_job(&mut self, confirmed: Confirmed<DeleteJob>) -> ViewResult<()> {
        let action = confirmed.into_inner();
        jobs::delete_employer(&self.config, action.id).await?;

        info!(job_id = action.id, title = %action.title, "Deleted job");
        self.refresh().await?;
        Ok(())
    }

    /// Applicants are fetched on demand for a job in the current list; other ids fail with `UnknownJob`.
    pub async fn applicants(&self, job_id: i64) -> ViewResult<ApplicantList> {
        let job = self.job(job_id)?.clone();
        let applications = applications::get_job_applications(&self.config, job_id).await?;

        debug!(job_id, count = applications.len(), "Loaded applicants");
        Ok(ApplicantList { job, applications })
    }

    /// Moves an applicant to `status`, then reloads the applicant list and the dashboard.
    #[instrument(skip(self, list))]
    pub async fn set_status(
        &mut self,
        list: &mut ApplicantList,
        application_id: i64,
        status: ApplicationStatus,
    ) -> ViewResult<StatusUpdate> {
        let current = list.application(application_id)?.status;

        if !current.can_transition_to(status) {
            return Err(ViewError::TransitionNotAllowed {
                from: current,
                to: status,
            });
        }

        let update = applications::patch_status(&self.config, application_id, status).await?;
        info!(from = %current, to = %update.status, "Changed application status");

        list.applications = applications::get_job_applications(&self.config, list.job.id).await?;
        self.refresh().await?;

        Ok(update)
    }
}

async fn fetch(config: &RequestConfig) -> ClientResult<(DashboardStats, Vec<Job>)> {
    tokio::try_join!(
        applications::get_dashboard(config),
        jobs::get_employer(config)
    )
}
