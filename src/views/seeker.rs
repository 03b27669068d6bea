/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{ViewError, ViewResult};
use crate::listing::Query;
use crate::pending::{Confirmed, PendingAction, Withdraw};
use connector::*;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct JobBoard {
    config: RequestConfig,
    jobs: Vec<Job>,
    applications: Vec<Application>,
}

impl JobBoard {
    /// Loads public jobs and the seeker's own applications. Failing to load
    /// the applications leaves that list empty instead of failing the board.
    pub async fn load(config: RequestConfig) -> ClientResult<Self> {
        let jobs = jobs::get_public(&config).await?;

        let applications = match applications::get_my_applications(&config).await {
            Ok(applications) => applications,
            Err(e) => {
                warn!(error = %e, "Failed to load applications");
                Vec::new()
            }
        };

        Ok(JobBoard {
            config,
            jobs,
            applications,
        })
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn job(&self, id: i64) -> ViewResult<&Job> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or(ViewError::UnknownJob(id))
    }

    pub fn application(&self, id: i64) -> ViewResult<&Application> {
        self.applications
            .iter()
            .find(|application| application.id == id)
            .ok_or(ViewError::UnknownApplication(id))
    }

    pub fn listing(&self, query: &Query<EmploymentType>) -> Vec<&Job> {
        query.apply(&self.jobs)
    }

    pub fn application_listing(&self, query: &Query<ApplicationStatus>) -> Vec<&Application> {
        query.apply(&self.applications)
    }

    pub async fn refresh_jobs(&mut self) -> ClientResult<()> {
        self.jobs = jobs::get_public(&self.config).await?;
        Ok(())
    }

    pub async fn refresh_applications(&mut self) -> ClientResult<()> {
        self.applications = applications::get_my_applications(&self.config).await?;
        Ok(())
    }

    pub fn open_job(&self, job_id: i64) -> ViewResult<&Job> {
        let job = self.job(job_id)?;

        if !job.is_open() {
            return Err(ViewError::JobClosed {
                title: job.title.clone(),
            });
        }

        Ok(job)
    }

    /// Closed jobs and empty resume URLs are refused before anything is sent.
    pub async fn apply(&mut self, job_id: i64, resume_url: &str) -> ViewResult<Application> {
        self.open_job(job_id)?;

        let resume_url = resume_url.trim();
        if resume_url.is_empty() {
            return Err(ViewError::MissingField("resume_url"));
        }

        let application =
            applications::post_apply(&self.config, job_id, resume_url.to_string()).await?;

        info!(job_id, application_id = application.id, "Submitted application");
        self.refresh_applications().await?;

        Ok(application)
    }

    pub fn request_withdraw(&self, application_id: i64) -> ViewResult<PendingAction<Withdraw>> {
        let application = self.application(application_id)?;

        if !application.status.is_withdrawable() {
            return Err(ViewError::NotWithdrawable(application.status));
        }

        Ok(PendingAction::withdraw(application))
    }

    /// The API offers no way to delete an application, so a confirmed
    /// withdrawal only refreshes the list and reports that it is unavailable.
    pub async fn withdraw(&mut self, confirmed: Confirmed<Withdraw>) -> ViewResult<()> {
        let action = confirmed.into_inner();
        warn!(application_id = action.id, "Withdrawal requested but not supported by the server");

        self.refresh_applications().await?;
        Err(ViewError::WithdrawUnavailable)
    }
}
