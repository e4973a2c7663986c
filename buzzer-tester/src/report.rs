use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Outcome of one scenario run on one target (logic or a browser) for one code.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub passed: bool,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioResult {
    pub fn from_outcome(
        scenario: &str,
        target: &str,
        code: Option<&str>,
        duration: Duration,
        outcome: &Result<()>,
    ) -> Self {
        Self {
            scenario: scenario.to_string(),
            target: target.to_string(),
            code: code.map(str::to_string),
            passed: outcome.is_ok(),
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            error: outcome.as_ref().err().map(|e| format!("{e:#}")),
        }
    }

    fn label(&self) -> String {
        match &self.code {
            Some(code) => format!("{} [{}] {code}", self.scenario, self.target),
            None => format!("{} [{}]", self.scenario, self.target),
        }
    }
}

pub fn generate_json_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, results)?;
    writeln!(writer)?;
    Ok(())
}

pub fn generate_console_report<W: Write + ?Sized>(
    writer: &mut W,
    results: &[ScenarioResult],
    total_duration: Duration,
) -> Result<()> {
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    writeln!(writer)?;
    writeln!(writer, "{}", "📊 Test Results Summary".bright_cyan().bold())?;
    writeln!(writer, "{}", "======================".cyan())?;
    writeln!(writer, "Total runs: {}", results.len())?;
    writeln!(writer, "Passed: {}", passed.to_string().green())?;
    writeln!(writer, "Failed: {}", failed.to_string().red())?;
    writeln!(writer, "Total time: {total_duration:?}")?;
    writeln!(writer)?;

    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            writer,
            "{status} {} ({} ms)",
            result.label().bold(),
            result.duration_ms
        )?;
        if let Some(error) = &result.error {
            writeln!(writer, "     • {}", error.red())?;
        }
    }
    Ok(())
}
