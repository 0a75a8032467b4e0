//! User input utilities for interactive command-line prompts.
//!
//! This module provides functions for safely collecting user input
//! including strings, secrets and confirmations.

use anyhow::{Context, Result};
use std::io::{self, Write};

/// Prompts the user for a string input.
///
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    eprint!("{prompt}: ");
    io::stderr().flush().ok();

    let mut input: String = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read user input")?;

    Ok(input.trim().to_string())
}

/// Prompts the user for a string input with a default value.
///
/// If the user just presses Enter, the default value is returned.
pub fn prompt_string_with_default(prompt: &str, default: Option<&str>) -> Result<String> {
    let input = match default {
        Some(default_val) => prompt_string(&format!("{prompt} [{default_val}]"))?,
        None => prompt_string(prompt)?,
    };
    Ok(with_default(input, default))
}

/// Prompts for a secret without echoing it.
///
/// Falls back to a plain prompt when stderr is not a terminal.
pub fn prompt_secret(prompt: &str) -> Result<String> {
    let term = console::Term::stderr();
    if !term.is_term() {
        return prompt_string(prompt);
    }
    term.write_str(&format!("{prompt}: "))
        .context("Failed to write prompt")?;
    let secret = term
        .read_secure_line()
        .context("Failed to read user input")?;
    Ok(secret.trim().to_string())
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input is treated as 'no'.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    loop {
        let input = prompt_string(&format!("{prompt} (y/N)"))?;
        match parse_confirmation(&input) {
            Some(answer) => return Ok(answer),
            None => eprintln!("Please enter 'y' or 'n'."),
        }
    }
}

fn with_default(input: String, default: Option<&str>) -> String {
    match default {
        Some(default_val) if input.is_empty() => default_val.to_string(),
        _ => input,
    }
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "" | "n" | "no" => Some(false),
        _ => None,
    }
}
