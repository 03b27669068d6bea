/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub application_deadline: DateTime<Utc>,
}

pub async fn get_public(config: &RequestConfig) -> ClientResult<Vec<Job>> {
    let res = get_client(config, "jobs/public/", RequestType::GET, false)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_employer(config: &RequestConfig) -> ClientResult<Vec<Job>> {
    let res = get_client(config, "jobs/employer/", RequestType::GET, true)?
        .send()
        .await?;

    parse_response(res).await
}

pub async fn post_employer(config: &RequestConfig, req: &JobRequest) -> ClientResult<Job> {
    let res = get_client(config, "jobs/employer/", RequestType::POST, true)?
        .json(req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn put_employer(config: &RequestConfig, job: i64, req: &JobRequest) -> ClientResult<Job> {
    let res = get_client(
        config,
        &format!("jobs/employer/{}/", job),
        RequestType::PUT,
        true,
    )?
    .json(req)
    .send()
    .await?;

    parse_response(res).await
}

pub async fn delete_employer(config: &RequestConfig, job: i64) -> ClientResult<()> {
    let res = get_client(
        config,
        &format!("jobs/employer/{}/", job),
        RequestType::DELETE,
        true,
    )?
    .send()
    .await?;

    parse_empty_response(res).await
}
