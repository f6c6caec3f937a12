//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use serde::Serialize;

use crate::models::{ShellpaneConfig, ViewOutput};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of listing the server's views
#[derive(Debug, Serialize)]
pub struct ViewListResult {
    /// Views in server order
    pub views: Vec<ViewInfo>,
}

/// Information about a view
#[derive(Debug, Serialize)]
pub struct ViewInfo {
    /// View name
    pub name: String,
    /// Command template
    pub command: String,
    /// Accepted env var names
    pub env: Vec<String>,
}

impl From<&ShellpaneConfig> for ViewListResult {
    fn from(config: &ShellpaneConfig) -> Self {
        Self {
            views: config
                .views
                .iter()
                .map(|v| ViewInfo {
                    name: v.name.clone(),
                    command: v.command.clone(),
                    env: v.env.iter().map(|e| e.name.clone()).collect(),
                })
                .collect(),
        }
    }
}

impl ViewListResult {
    /// Render in the specified mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.views.is_empty() {
            return "No views configured.\n".to_string();
        }

        let mut out = String::new();
        for view in &self.views {
            let _ = writeln!(out, "{}", view.name);
            let _ = writeln!(out, "    command: {}", view.command);
            if !view.env.is_empty() {
                let _ = writeln!(out, "    env:     {}", view.env.join(", "));
            }
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of fetching one step's output
#[derive(Debug, Serialize)]
pub struct StepOutputResult {
    /// View name
    pub view: String,
    /// Step name
    pub step: String,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Exit code of the step
    pub exit_code: i64,
}

impl StepOutputResult {
    /// Build a result for `view`/`step` from the server's output record
    #[must_use]
    pub fn new(view: &str, step: &str, output: ViewOutput) -> Self {
        Self {
            view: view.to_string(),
            step: step.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.exit_code,
        }
    }

    /// Render in the specified mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        push_block(&mut out, &self.stdout);
        if !self.stderr.is_empty() {
            out.push_str("--- stderr ---\n");
            push_block(&mut out, &self.stderr);
        }
        let _ = writeln!(out, "[{}/{}] exit code: {}", self.view, self.step, self.exit_code);
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn push_block(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        out.push('\n');
    }
}
