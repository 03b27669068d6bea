/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use jobboard::commands::base::run_cli;
use std::process::ExitCode;

#[tokio::main]
pub async fn main() -> ExitCode {
    run_cli().await
}
