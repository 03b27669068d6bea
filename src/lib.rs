/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod commands;
pub mod config;
pub mod input;
pub mod listing;
pub mod pending;
pub mod routing;
pub mod session;
pub mod views;
