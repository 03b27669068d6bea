/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use crate::listing::{Field, Query, SortKey};
use crate::views::employer::{ApplicantList, EmployerDashboard, JobForm};
use anyhow::Result;
use clap::{Args, Subcommand};
use connector::{ApplicationStatus, Job};

const FORM_FIELDS: [&str; 5] = [
    "Title",
    "Description",
    "Location",
    "Employment Type",
    "Deadline",
];

#[derive(Args, Debug, Default)]
pub struct JobFields {
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short = 'c', long)]
    description: Option<String>,
    #[arg(short, long)]
    location: Option<String>,
    /// FULL_TIME, PART_TIME, CONTRACT or INTERNSHIP
    #[arg(short = 'y', long = "type")]
    employment_type: Option<String>,
    /// Local time, YYYY-MM-DDTHH:MM
    #[arg(short, long)]
    deadline: Option<String>,
}

impl JobFields {
    /// Flags win over `base`; whatever is still missing is asked for.
    fn into_form(self, base: JobForm) -> Result<JobForm> {
        let or_base = |value: Option<String>, base: String| {
            value.or_else(|| (!base.is_empty()).then_some(base))
        };

        let values = [
            or_base(self.title, base.title),
            or_base(self.description, base.description),
            or_base(self.location, base.location),
            or_base(self.employment_type, base.employment_type),
            or_base(self.deadline, base.application_deadline),
        ];

        let input_fields = FORM_FIELDS
            .iter()
            .zip(values)
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let mut input = handle_input(input_fields)?;
        let mut take = |key: &str| input.remove(key).unwrap_or_default();

        Ok(JobForm {
            title: take("Title"),
            description: take("Description"),
            location: take("Location"),
            employment_type: take("Employment Type"),
            application_deadline: take("Deadline"),
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Dashboard,
    Jobs {
        /// Matches title or location
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t = SortKey::Latest)]
        sort: SortKey,
    },
    Create {
        #[command(flatten)]
        fields: JobFields,
    },
    Edit {
        id: i64,
        #[command(flatten)]
        fields: JobFields,
    },
    Delete {
        id: i64,
        #[arg(short, long)]
        yes: bool,
    },
    Applicants {
        job: i64,
    },
    Status {
        job: i64,
        application: i64,
        status: ApplicationStatus,
    },
}

pub async fn handle(session: &SessionStore, cmd: Commands) -> Result<()> {
    let config = require(session, Role::Employer)?;
    let mut dashboard = EmployerDashboard::load(config).await?;

    match cmd {
        Commands::Dashboard => {
            let stats = dashboard.stats();
            println!("===== Dashboard =====");
            println!("Jobs Posted: {}", stats.jobs);
            println!("Total Applications: {}", stats.applications);
            println!("Accepted: {}", stats.accepted);
            println!("Rejected: {}", stats.rejected);
            println!();

            println!("===== Recent Jobs =====");
            print_jobs(&dashboard.listing(&Query::new(SortKey::Latest)));
        }

        Commands::Jobs { search, sort } => {
            let query = Query::new(sort).search(&[Field::Title, Field::Location], search.as_deref());
            print_jobs(&dashboard.listing(&query));
        }

        Commands::Create { fields } => {
            let form = fields.into_form(JobForm::default())?;
            let job = dashboard.create_job(&form).await?;
            println!("Job \"{}\" created with ID {}.", job.title, job.id);
        }

        Commands::Edit { id, fields } => {
            let form = fields.into_form(dashboard.edit_form(id)?)?;
            let job = dashboard.update_job(id, &form).await?;
            println!("Job \"{}\" updated.", job.title);
        }

        Commands::Delete { id, yes } => {
            let pending = dashboard.request_delete(id)?;
            let confirmed = ask_for_confirmation(&pending, yes)?;

            let Some(confirmed) = pending.resolve(confirmed) else {
                println!("Cancelled.");
                return Ok(());
            };

            dashboard.delete_job(confirmed).await?;
            println!("Job deleted.");
        }

        Commands::Applicants { job } => {
            let list = dashboard.applicants(job).await?;
            print_applicants(&list);
        }

        Commands::Status {
            job,
            application,
            status,
        } => {
            let mut list = dashboard.applicants(job).await?;
            let update = dashboard.set_status(&mut list, application, status).await?;
            println!("Application {} is now {}.", update.id, update.status);

            let stats = dashboard.stats();
            println!(
                "Accepted: {} | Rejected: {} | Total: {}",
                stats.accepted, stats.rejected, stats.applications
            );
        }
    }

    Ok(())
}

fn print_jobs(jobs: &[&Job]) {
    if jobs.is_empty() {
        println!("No jobs found. Try adjusting your search or filters.");
        return;
    }

    for job in jobs {
        println!(
            "[{}] {} | {} | {} | {} | deadline {} | {} applications",
            job.id,
            job.title,
            job.location,
            job.employment_type,
            job.status,
            format_date(&job.application_deadline),
            job.application_count
        );
    }
}

fn print_applicants(list: &ApplicantList) {
    println!("===== Applicants for {} =====", list.job.title);

    if list.applications.is_empty() {
        println!("No applications yet.");
        return;
    }

    for application in &list.applications {
        println!(
            "[{}] {} <{}> ({})",
            application.id, application.seeker_name, application.seeker_email, application.status
        );
        println!("    applied {}", format_date(&application.applied_at));
        println!("    resume {}", application.resume_url);

        let actions = application
            .status
            .transitions()
            .iter()
            .map(|status| status.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("    can move to: {}", actions);
    }
}
