/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::pending::PendingAction;
use anyhow::{Context, Result, bail};
use rpassword::read_password;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// Fills in missing form values. When any value is missing and `$EDITOR` is
/// set, the whole form is opened in the editor as `Key: value` lines;
/// otherwise each missing value is prompted for on stdin.
pub fn handle_input(values: Vec<(String, Option<String>)>) -> Result<HashMap<String, String>> {
    if values.is_empty() {
        bail!("No input fields");
    }

    if values.iter().all(|(_, v)| v.is_some()) {
        return Ok(values
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect());
    }

    match std::env::var("EDITOR") {
        Ok(editor) if !editor.is_empty() => edit_input(&std::env::temp_dir(), &editor, &values),
        _ => values
            .into_iter()
            .map(|(k, v)| match v {
                Some(v) => Ok((k, v)),
                None => ask_for_input(&k).map(|v| (k, v)),
            })
            .collect(),
    }
}

/// The form file is removed when this returns, whether or not the editor succeeded.
fn edit_input(
    dir: &Path,
    editor: &str,
    values: &[(String, Option<String>)],
) -> Result<HashMap<String, String>> {
    let input_fields: String = values
        .iter()
        .map(|(k, v)| format!("{}: {}\n", k, v.as_deref().unwrap_or_default()))
        .collect();

    let mut form = tempfile::Builder::new()
        .prefix("JOBBOARD-FORM-")
        .tempfile_in(dir)
        .context("Failed to create form file")?;
    form.write_all(input_fields.as_bytes())
        .and_then(|_| form.flush())
        .context("Failed to write form file")?;

    let status = Command::new(editor)
        .arg(form.path())
        .status()
        .with_context(|| format!("Failed to open editor {}", editor))?;

    if !status.success() {
        bail!("Editor {} exited with {}", editor, status);
    }

    let contents = fs::read_to_string(form.path()).context("Failed to read form file")?;

    let keys: Vec<&str> = values.iter().map(|(k, _)| k.as_str()).collect();
    parse_input_fields(&contents, &keys)
}

/// Parses `Key: value` lines. Values may contain colons; every key must be
/// known, present and non-empty.
pub fn parse_input_fields(contents: &str, keys: &[&str]) -> Result<HashMap<String, String>> {
    let mut result: HashMap<String, String> = HashMap::new();

    for line in contents.lines().filter(|line| !line.trim().is_empty()) {
        let (key, value) = line
            .split_once(':')
            .with_context(|| format!("Invalid input line: {}", line))?;
        let (key, value) = (key.trim(), value.trim());

        if !keys.contains(&key) {
            bail!("Invalid input field: {}", key);
        }

        if value.is_empty() {
            bail!("{} cannot be empty.", key);
        }

        result.insert(key.to_string(), value.to_string());
    }

    if let Some(missing) = keys.iter().find(|key| !result.contains_key(**key)) {
        bail!("{} cannot be empty.", missing);
    }

    Ok(result)
}

pub fn ask_for_password() -> Result<String> {
    print!("Password: ");
    io::stdout().flush()?;
    let inp = read_password().context("Failed to read password")?;

    if inp.is_empty() {
        bail!("Password cannot be empty.");
    }

    Ok(inp)
}

pub fn ask_for_input(prompt: &str) -> Result<String> {
    print!("{}: ", prompt);
    io::stdout().flush()?;

    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .with_context(|| format!("Failed to read {}.", prompt))?;
    let inp = inp.trim().to_string();

    if inp.is_empty() {
        bail!("{} cannot be empty.", prompt);
    }

    Ok(inp)
}

/// Shows the pending action and reads a `[y/N]` answer; `assume_yes` skips the prompt.
pub fn ask_for_confirmation<A>(pending: &PendingAction<A>, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    println!("{}", pending.title);
    println!("{}", pending.message);
    print!("Continue? [y/N] ");
    io::stdout().flush()?;

    let mut inp = String::new();
    io::stdin()
        .read_line(&mut inp)
        .context("Failed to read confirmation.")?;

    Ok(is_yes(&inp))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
