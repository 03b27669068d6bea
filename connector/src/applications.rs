/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApplyRequest {
    pub job: i64,
    pub resume_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StatusRequest {
    pub status: ApplicationStatus,
}

pub async fn post_apply(
    config: &RequestConfig,
    job: i64,
    resume_url: String,
) -> ClientResult<Application> {
    let req = ApplyRequest { job, resume_url };

    let res = get_client(config, "applications/apply/", RequestType::POST, true)?
        .json(&req)
        .send()
        .await?;

    parse_response(res).await
}

pub async fn get_job_applications(
    config: &RequestConfig,
    job: i64,
) -> ClientResult<Vec<Application>> {
    let res = get_client(
        config,
        &format!("applications/job/{}/", job),
        RequestType::GET,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn patch_status(
    config: &RequestConfig,
    application: i64,
    status: ApplicationStatus,
) -> ClientResult<StatusUpdate> {
    let res = get_client(
        config,
        &format!("applications/{}/status/", application),
        RequestType::PATCH,
        true,
    )?
    .json(&StatusRequest { status })
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_dashboard(config: &RequestConfig) -> ClientResult<DashboardStats> {
    let res = get_client(
        config,
        "applications/employer/dashboard/",
        RequestType::GET,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}

pub async fn get_my_applications(config: &RequestConfig) -> ClientResult<Vec<Application>> {
    let res = get_client(
        config,
        "applications/my-applications/",
        RequestType::GET,
        true,
    )?
    .send()
    .await?;

    parse_response(res).await
}
