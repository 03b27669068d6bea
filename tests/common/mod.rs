/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! In-process job board API used by the integration tests.
//!
//! Mirrors the server's observable behavior: role checks, ownership checks,
//! deadline-derived job status and the error payload shapes the client
//! extracts messages from. The clock is fixed at 2025-06-01T00:00Z.

#![allow(dead_code)]

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use chrono::{DateTime, Duration, TimeZone, Utc};
use connector::*;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

type Reply = Result<Response, Response>;

pub struct Board {
    pub now: DateTime<Utc>,
    /// The web client never sent the role hint, so the server may not see it.
    pub honor_expected_role: bool,
    pub users: Vec<(User, String)>,
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
    next_id: i64,
}

pub struct FakeState {
    board: Mutex<Board>,
    hits: AtomicUsize,
}

impl FakeState {
    pub fn board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub struct FakeServer {
    pub url: String,
    pub state: Arc<FakeState>,
}

impl FakeServer {
    pub fn config(&self, user: Option<&User>) -> RequestConfig {
        RequestConfig::new(&self.url, user.map(token_for))
    }

    pub fn add_user(&self, role: Role, email: &str, full_name: &str, password: &str) -> User {
        let mut board = self.state.board();
        let user = User {
            id: board.next_id(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            role,
            created_at: Some(board.now),
        };
        board.users.push((user.clone(), password.to_string()));
        user
    }

    pub fn add_job(
        &self,
        id: i64,
        employer: &User,
        title: &str,
        created_at: DateTime<Utc>,
        deadline: DateTime<Utc>,
    ) -> Job {
        let mut board = self.state.board();
        let job = Job {
            id,
            employer: Some(employer.id),
            employer_name: Some(employer.full_name.clone()),
            title: title.to_string(),
            description: format!("{} wanted", title),
            location: "Remote".to_string(),
            employment_type: EmploymentType::FullTime,
            created_at,
            application_deadline: deadline,
            status: JobStatus::Open,
            application_count: 0,
        };
        board.jobs.push(job.clone());
        job
    }

    pub fn add_application(&self, job: &Job, seeker: &User, status: ApplicationStatus) -> Application {
        let mut board = self.state.board();
        let application = Application {
            id: board.next_id(),
            job: job.id,
            job_title: job.title.clone(),
            seeker: seeker.id,
            seeker_name: seeker.full_name.clone(),
            seeker_email: seeker.email.clone(),
            resume_url: "https://cv.example/seeker.pdf".to_string(),
            status,
            applied_at: board.now,
        };
        board.applications.push(application.clone());
        application
    }
}

pub fn token_for(user: &User) -> String {
    format!("token-{}", user.id)
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

impl Board {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn authorize(&self, headers: &HeaderMap, role: Role) -> Result<User, Response> {
        let user = headers
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer token-"))
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| self.users.iter().find(|(user, _)| user.id == id))
            .map(|(user, _)| user.clone())
            .ok_or_else(|| {
                error(
                    StatusCode::UNAUTHORIZED,
                    json!({"detail": "Authentication credentials were not provided."}),
                )
            })?;

        if user.role != role {
            return Err(error(
                StatusCode::FORBIDDEN,
                json!({"detail": "You do not have permission to perform this action."}),
            ));
        }

        Ok(user)
    }

    fn status_of(&self, job: &Job) -> JobStatus {
        if job.application_deadline >= self.now {
            JobStatus::Open
        } else {
            JobStatus::Closed
        }
    }

    fn full_job(&self, job: &Job) -> Value {
        let mut job = job.clone();
        job.status = self.status_of(&job);
        job.application_count = self
            .applications
            .iter()
            .filter(|application| application.job == job.id)
            .count() as u32;
        json!(job)
    }

    fn public_job(&self, job: &Job) -> Value {
        json!({
            "id": job.id,
            "title": job.title,
            "location": job.location,
            "employment_type": job.employment_type,
            "created_at": job.created_at,
            "application_deadline": job.application_deadline,
            "status": self.status_of(job),
            "employer_name": job.employer_name,
        })
    }

    fn owned_job(&self, id: i64, employer: &User) -> Result<usize, Response> {
        let index = self
            .jobs
            .iter()
            .position(|job| job.id == id)
            .ok_or_else(|| error(StatusCode::NOT_FOUND, json!({"error": "Job not found"})))?;

        if self.jobs[index].employer != Some(employer.id) {
            return Err(error(
                StatusCode::FORBIDDEN,
                json!({"error": "You do not have permission to modify this job"}),
            ));
        }

        Ok(index)
    }

    fn auth_response(&self, user: &User) -> Value {
        json!({"user": user, "access": token_for(user), "refresh": format!("refresh-{}", user.id)})
    }
}

fn reply(status: StatusCode, body: Value) -> Reply {
    Ok((status, Json(body)).into_response())
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn text<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

async fn count(State(state): State<Arc<FakeState>>, req: Request, next: Next) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    next.run(req).await
}

async fn register(State(state): State<Arc<FakeState>>, Json(body): Json<Value>) -> Reply {
    let mut board = state.board();

    let (Some(email), Some(full_name), Some(password)) = (
        text(&body, "email"),
        text(&body, "full_name"),
        text(&body, "password"),
    ) else {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"non_field_errors": ["email, full_name and password are required"]}),
        ));
    };

    let role: Role = serde_json::from_value(body["role"].clone()).map_err(|_| {
        error(
            StatusCode::BAD_REQUEST,
            json!({"role": ["\"\" is not a valid choice."]}),
        )
    })?;

    if board.users.iter().any(|(user, _)| user.email == email) {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"email": ["user with this email already exists."]}),
        ));
    }

    if password.len() < 8 {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"password": ["Ensure this field has at least 8 characters."]}),
        ));
    }

    let user = User {
        id: board.next_id(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        role,
        created_at: Some(board.now),
    };
    board.users.push((user.clone(), password.to_string()));

    reply(StatusCode::CREATED, board.auth_response(&user))
}

async fn login(State(state): State<Arc<FakeState>>, Json(body): Json<Value>) -> Reply {
    let board = state.board();

    let (Some(email), Some(password)) = (text(&body, "email"), text(&body, "password")) else {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"error": "Email and password are required"}),
        ));
    };

    let user = board
        .users
        .iter()
        .find(|(user, secret)| user.email == email && secret == password)
        .map(|(user, _)| user.clone())
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, json!({"error": "Invalid credentials"})))?;

    if board.honor_expected_role {
        if let Some(expected) = text(&body, "expected_role") {
            if user.role.as_str() != expected {
                return Err(error(
                    StatusCode::FORBIDDEN,
                    json!({"error": format!(
                        "This login page is for {}s only. Please use the correct login page.",
                        expected.to_lowercase()
                    )}),
                ));
            }
        }
    }

    reply(StatusCode::OK, board.auth_response(&user))
}

async fn public_jobs(State(state): State<Arc<FakeState>>) -> Reply {
    let board = state.board();
    let jobs: Vec<Value> = board.jobs.iter().map(|job| board.public_job(job)).collect();
    reply(StatusCode::OK, json!(jobs))
}

async fn employer_jobs(State(state): State<Arc<FakeState>>, headers: HeaderMap) -> Reply {
    let board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;

    let jobs: Vec<Value> = board
        .jobs
        .iter()
        .filter(|job| job.employer == Some(employer.id))
        .map(|job| board.full_job(job))
        .collect();

    reply(StatusCode::OK, json!(jobs))
}

fn job_fields(board: &Board, body: &Value, base: Option<&Job>) -> Result<Job, Response> {
    let field = |name: &str, current: Option<&String>| {
        text(body, name)
            .map(str::to_string)
            .or_else(|| current.cloned())
            .ok_or_else(|| {
                error(
                    StatusCode::BAD_REQUEST,
                    json!({ name: ["This field is required."] }),
                )
            })
    };

    let title = field("title", base.map(|job| &job.title))?;
    let description = field("description", base.map(|job| &job.description))?;
    let location = field("location", base.map(|job| &job.location))?;

    let employment_type = match body.get("employment_type") {
        Some(value) => serde_json::from_value(value.clone()).map_err(|_| {
            error(
                StatusCode::BAD_REQUEST,
                json!({"employment_type": ["Not a valid choice."]}),
            )
        })?,
        None => base.map(|job| job.employment_type).ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                json!({"employment_type": ["This field is required."]}),
            )
        })?,
    };

    let deadline: DateTime<Utc> = match body.get("application_deadline") {
        Some(value) => serde_json::from_value(value.clone()).map_err(|_| {
            error(
                StatusCode::BAD_REQUEST,
                json!({"application_deadline": ["Datetime has wrong format."]}),
            )
        })?,
        None => base.map(|job| job.application_deadline).ok_or_else(|| {
            error(
                StatusCode::BAD_REQUEST,
                json!({"application_deadline": ["This field is required."]}),
            )
        })?,
    };

    if deadline <= board.now {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"application_deadline": ["Deadline must be in the future"]}),
        ));
    }

    Ok(Job {
        id: base.map(|job| job.id).unwrap_or_default(),
        employer: base.and_then(|job| job.employer),
        employer_name: base.and_then(|job| job.employer_name.clone()),
        title,
        description,
        location,
        employment_type,
        created_at: base.map(|job| job.created_at).unwrap_or(board.now),
        application_deadline: deadline,
        status: JobStatus::Open,
        application_count: 0,
    })
}

async fn create_job(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;

    let mut job = job_fields(&board, &body, None)?;
    job.id = board.next_id();
    job.employer = Some(employer.id);
    job.employer_name = Some(employer.full_name.clone());
    // Every new job is a minute younger than the last so `latest` ordering is strict.
    job.created_at = board.now + Duration::minutes(job.id);

    board.jobs.push(job.clone());
    reply(StatusCode::CREATED, board.full_job(&job))
}

async fn update_job(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;
    let index = board.owned_job(id, &employer)?;

    let job = job_fields(&board, &body, Some(&board.jobs[index]))?;
    board.jobs[index] = job.clone();

    reply(StatusCode::OK, board.full_job(&job))
}

async fn delete_job(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Reply {
    let mut board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;
    let index = board.owned_job(id, &employer)?;

    board.jobs.remove(index);
    board.applications.retain(|application| application.job != id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn apply(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    let mut board = state.board();
    let seeker = board.authorize(&headers, Role::Seeker)?;

    let (Some(job_id), Some(resume_url)) = (body["job"].as_i64(), text(&body, "resume_url")) else {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"error": "job and resume_url are required"}),
        ));
    };

    let job = board
        .jobs
        .iter()
        .find(|job| job.id == job_id)
        .cloned()
        .ok_or_else(|| error(StatusCode::NOT_FOUND, json!({"error": "Job not found"})))?;

    if board.status_of(&job) == JobStatus::Closed {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"error": "This job is no longer accepting applications"}),
        ));
    }

    if board
        .applications
        .iter()
        .any(|application| application.job == job_id && application.seeker == seeker.id)
    {
        return Err(error(
            StatusCode::BAD_REQUEST,
            json!({"error": "You have already applied for this job"}),
        ));
    }

    let application = Application {
        id: board.next_id(),
        job: job.id,
        job_title: job.title.clone(),
        seeker: seeker.id,
        seeker_name: seeker.full_name.clone(),
        seeker_email: seeker.email.clone(),
        resume_url: resume_url.to_string(),
        status: ApplicationStatus::New,
        applied_at: board.now,
    };
    board.applications.push(application.clone());

    reply(StatusCode::CREATED, json!(application))
}

async fn job_applications(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path(job_id): Path<i64>,
) -> Reply {
    let board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;
    board.owned_job(job_id, &employer)?;

    let applications: Vec<&Application> = board
        .applications
        .iter()
        .filter(|application| application.job == job_id)
        .collect();

    reply(StatusCode::OK, json!(applications))
}

async fn update_status(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Reply {
    let mut board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;

    let index = board
        .applications
        .iter()
        .position(|application| application.id == id)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, json!({"error": "Application not found"})))?;

    let job_id = board.applications[index].job;
    if !board
        .jobs
        .iter()
        .any(|job| job.id == job_id && job.employer == Some(employer.id))
    {
        return Err(error(
            StatusCode::FORBIDDEN,
            json!({"error": "You do not have permission to modify this application"}),
        ));
    }

    let status: ApplicationStatus = serde_json::from_value(body["status"].clone())
        .map_err(|_| error(StatusCode::BAD_REQUEST, json!({"status": ["Invalid status"]})))?;

    board.applications[index].status = status;
    reply(StatusCode::OK, json!({"id": id, "status": status}))
}

async fn dashboard(State(state): State<Arc<FakeState>>, headers: HeaderMap) -> Reply {
    let board = state.board();
    let employer = board.authorize(&headers, Role::Employer)?;

    let jobs: Vec<i64> = board
        .jobs
        .iter()
        .filter(|job| job.employer == Some(employer.id))
        .map(|job| job.id)
        .collect();
    let applications: Vec<&Application> = board
        .applications
        .iter()
        .filter(|application| jobs.contains(&application.job))
        .collect();
    let with_status = |status: ApplicationStatus| {
        applications
            .iter()
            .filter(|application| application.status == status)
            .count()
    };

    reply(
        StatusCode::OK,
        json!({
            "jobs": jobs.len(),
            "applications": applications.len(),
            "accepted": with_status(ApplicationStatus::Accepted),
            "rejected": with_status(ApplicationStatus::Rejected),
        }),
    )
}

async fn my_applications(State(state): State<Arc<FakeState>>, headers: HeaderMap) -> Reply {
    let board = state.board();
    let seeker = board.authorize(&headers, Role::Seeker)?;

    let applications: Vec<&Application> = board
        .applications
        .iter()
        .filter(|application| application.seeker == seeker.id)
        .collect();

    reply(StatusCode::OK, json!(applications))
}

pub async fn spawn() -> FakeServer {
    let state = Arc::new(FakeState {
        board: Mutex::new(Board {
            now: fixed_now(),
            honor_expected_role: true,
            users: Vec::new(),
            jobs: Vec::new(),
            applications: Vec::new(),
            next_id: 100,
        }),
        hits: AtomicUsize::new(0),
    });

    let app = Router::new()
        .route("/api/auth/register/", post(register))
        .route("/api/auth/login/", post(login))
        .route("/api/jobs/public/", get(public_jobs))
        .route("/api/jobs/employer/", get(employer_jobs).post(create_job))
        .route("/api/jobs/employer/{id}/", put(update_job).delete(delete_job))
        .route("/api/applications/apply/", post(apply))
        .route("/api/applications/job/{job_id}/", get(job_applications))
        .route("/api/applications/{id}/status/", patch(update_status))
        .route("/api/applications/employer/dashboard/", get(dashboard))
        .route("/api/applications/my-applications/", get(my_applications))
        .layer(middleware::from_fn_with_state(Arc::clone(&state), count))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer { url, state }
}
