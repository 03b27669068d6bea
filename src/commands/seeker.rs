/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::*;
use crate::input::*;
use crate::listing::{Field, Query, SortKey};
use crate::views::seeker::JobBoard;
use anyhow::Result;
use clap::Subcommand;
use connector::{Application, ApplicationStatus, EmploymentType, Job};

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    List {
        /// Matches title or location
        #[arg(short, long)]
        search: Option<String>,
        #[arg(short = 't', long = "type")]
        employment_type: Option<EmploymentType>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(long, value_enum, default_value_t = SortKey::Latest)]
        sort: SortKey,
    },
    Apply {
        job: i64,
        #[arg(short, long)]
        resume_url: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ApplicationCommands {
    List {
        #[arg(short, long)]
        status: Option<ApplicationStatus>,
        #[arg(long, value_enum, default_value_t = SortKey::Latest)]
        sort: SortKey,
    },
    Withdraw {
        application: i64,
        #[arg(short, long)]
        yes: bool,
    },
}

async fn load_board(session: &SessionStore) -> Result<JobBoard> {
    let config = require(session, Role::Seeker)?;
    Ok(JobBoard::load(config).await?)
}

pub async fn handle_jobs(session: &SessionStore, cmd: JobCommands) -> Result<()> {
    let mut board = load_board(session).await?;

    match cmd {
        JobCommands::List {
            search,
            employment_type,
            location,
            sort,
        } => {
            let query = Query::new(sort)
                .search(&[Field::Title, Field::Location], search.as_deref())
                .category(employment_type)
                .search(&[Field::Location], location.as_deref());

            let jobs = board.listing(&query);

            if jobs.is_empty() {
                println!("No jobs found. Try adjusting your filters.");
                return Ok(());
            }

            for job in jobs {
                let applied = board
                    .applications()
                    .iter()
                    .any(|application| application.job == job.id);
                print_job(job, applied);
            }
        }

        JobCommands::Apply { job, resume_url } => {
            let title = board.open_job(job)?.title.clone();

            let resume_url = match resume_url {
                Some(resume_url) => resume_url,
                None => ask_for_input("Resume URL")?,
            };

            let application = board.apply(job, &resume_url).await?;
            println!(
                "Application {} for \"{}\" submitted ({}).",
                application.id, title, application.status
            );
        }
    }

    Ok(())
}

pub async fn handle_applications(session: &SessionStore, cmd: ApplicationCommands) -> Result<()> {
    let mut board = load_board(session).await?;

    match cmd {
        ApplicationCommands::List { status, sort } => {
            let query = Query::new(sort).category(status);
            let applications = board.application_listing(&query);

            if applications.is_empty() {
                println!("No applications yet.");
                return Ok(());
            }

            for application in applications {
                print_application(application);
            }
        }

        ApplicationCommands::Withdraw { application, yes } => {
            let pending = board.request_withdraw(application)?;
            let confirmed = ask_for_confirmation(&pending, yes)?;

            let Some(confirmed) = pending.resolve(confirmed) else {
                println!("Cancelled.");
                return Ok(());
            };

            board.withdraw(confirmed).await?;
            println!("Application withdrawn.");
        }
    }

    Ok(())
}

fn print_job(job: &Job, applied: bool) {
    println!("[{}] {}", job.id, job.title);
    println!(
        "    {} | {} | {} | deadline {}{}",
        job.location,
        job.employment_type,
        job.status,
        format_date(&job.application_deadline),
        if applied { " | applied" } else { "" }
    );

    if let Some(employer) = &job.employer_name {
        println!("    posted by {} on {}", employer, format_date(&job.created_at));
    }
}

fn print_application(application: &Application) {
    println!("[{}] {} ({})", application.id, application.job_title, application.status);
    println!("    applied {}", format_datetime(&application.applied_at));
    println!("    resume {}", application.resume_url);

    if application.status.is_withdrawable() {
        println!("    withdraw: `jobboard applications withdraw {}`", application.id);
    }
}
