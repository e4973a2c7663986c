mod browser;
mod report;
mod scenario;
mod util;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, ClientPage, new_session};
use report::ScenarioResult;
use scenario::{Scenario, ScenarioCtx, expand_scenarios, get_scenario, list_scenarios};
use util::{artifacts_dir, capture_artifacts, split_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Route and form checks against the client library (fast, no browser)
    Logic,
    /// Browser automation against a running deployment (slow, captures screenshots)
    Browser,
    /// Run both logic and browser checks
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "buzzer-tester", version)]
#[command(about = "Automated QA for the Buzzer client - logic checks and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Game codes to exercise (comma-separated)
    #[arg(long, default_value = "abc123")]
    codes: String,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the client is served from
    #[arg(long, default_value = "http://localhost:5173")]
    base_url: String,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid/Appium hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenario_keys = expand_scenarios(&split_csv(&args.scenarios));
    let codes = split_csv(&args.codes);
    if codes.is_empty() {
        bail!("at least one game code is required (--codes)");
    }

    let mut results = run_logic_scenarios(&args, &scenario_keys, &codes);
    results.extend(run_browser_scenarios(&args, &scenario_keys, &codes).await);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target, "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target, "  {key:25} - {description}")?;
    }
    output_target.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🔔 Buzzer Automated Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

/// Codes a scenario runs with: every `--codes` entry, or a single codeless run.
fn codes_for<'a>(scenario: &dyn Scenario, codes: &'a [String]) -> Vec<Option<&'a str>> {
    if scenario.uses_code() {
        codes.iter().map(|c| Some(c.as_str())).collect()
    } else {
        vec![None]
    }
}

fn unknown_scenario(key: &str, target: &str) -> ScenarioResult {
    eprintln!("⚠️  Unknown scenario: {}", key.yellow());
    let outcome = Err(anyhow::anyhow!("unknown scenario {key}"));
    ScenarioResult::from_outcome(key, target, None, std::time::Duration::ZERO, &outcome)
}

fn run_logic_scenarios(args: &Args, keys: &[String], codes: &[String]) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Checks".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    for key in keys {
        let Some(scenario) = get_scenario(key) else {
            results.push(unknown_scenario(key, "logic"));
            continue;
        };
        for code in codes_for(scenario.as_ref(), codes) {
            let started = Instant::now();
            let outcome = scenario.run_logic(code.unwrap_or_default());
            log::debug!("logic {key} {code:?}: {outcome:?}");
            results.push(ScenarioResult::from_outcome(
                key,
                "logic",
                code,
                started.elapsed(),
                &outcome,
            ));
        }
    }

    results
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

async fn run_browser_scenarios(
    args: &Args,
    keys: &[String],
    codes: &[String],
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);

    for browser_name in split_csv(&args.browsers) {
        let Some(kind) = BrowserKind::parse(&browser_name) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        results.extend(run_browser_scenarios_for_driver(args, keys, codes, kind, &driver).await);
        if let Err(e) = driver.quit().await {
            log::warn!("could not close {kind:?} session: {e}");
        }
    }

    results
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    keys: &[String],
    codes: &[String],
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> Vec<ScenarioResult> {
    let label = kind.label();
    let mut results = Vec::new();

    for key in keys {
        let Some(scenario) = get_scenario(key) else {
            results.push(unknown_scenario(key, &label));
            continue;
        };
        for code in codes_for(scenario.as_ref(), codes) {
            let ctx = ScenarioCtx {
                page: ClientPage::new(driver, &args.base_url),
                code: code.unwrap_or_default().to_string(),
                verbose: args.verbose,
            };

            let started = Instant::now();
            let outcome = scenario.run_browser(&ctx).await;
            let duration = started.elapsed();
            let shown_code = code.unwrap_or("-");

            match &outcome {
                Ok(()) => println!(
                    "✅ [{} {}] {} - {:?}",
                    label.green(),
                    shown_code,
                    key,
                    duration
                ),
                Err(e) => {
                    eprintln!(
                        "❌ [{} {}] {} - {:?}: {:#}",
                        label.red(),
                        shown_code,
                        key,
                        duration,
                        e
                    );
                    let dir = artifacts_dir(&args.artifacts_dir, &label, key, shown_code);
                    if let Err(capture_err) = capture_artifacts(driver, &dir, e).await {
                        log::warn!("could not capture artifacts in {dir}: {capture_err:#}");
                    }
                }
            }

            results.push(ScenarioResult::from_outcome(
                key, &label, code, duration, &outcome,
            ));
        }
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => report::generate_json_report(&mut output_target, results)?,
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(output_target, "No scenarios executed.")?;
            } else {
                report::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(output_target)?;
            writeln!(output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            codes: "abc123".to_string(),
            report: ReportFormat::Json,
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:5173".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::parse_from(["buzzer-tester"]);
        assert!(matches!(args.mode, TestMode::Logic));
        assert_eq!(args.report, ReportFormat::Console);
        assert_eq!(args.codes, "abc123");
        assert!(args.headless.is_headless());
    }

    #[test]
    fn logic_run_expands_code_scenarios_per_code() {
        let args = base_args();
        let keys = vec!["join-game".to_string(), "smoke".to_string()];
        let codes = vec!["abc123".to_string(), "ROOM-7".to_string()];
        let results = run_logic_scenarios(&args, &keys, &codes);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
        assert_eq!(results[1].code.as_deref(), Some("ROOM-7"));
        assert!(results[2].code.is_none());
    }

    #[test]
    fn logic_run_reports_unknown_scenarios_as_failures() {
        let args = base_args();
        let results = run_logic_scenarios(&args, &["nope".to_string()], &["x".to_string()]);
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert!(results[0].error.as_deref().unwrap_or_default().contains("nope"));
    }

    #[test]
    fn browser_mode_skips_logic() {
        let mut args = base_args();
        args.mode = TestMode::Browser;
        let results = run_logic_scenarios(&args, &["smoke".to_string()], &["x".to_string()]);
        assert!(results.is_empty());
    }

    #[test]
    fn browser_config_follows_args() {
        let mut args = base_args();
        args.headless = HeadlessMode::Windowed;
        args.hub = Some("http://grid:4444".to_string());
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://grid:4444"));
        assert_eq!(cfg.implicit_wait_secs, 3);
    }

    #[test]
    fn write_reports_to_file_emits_json() {
        let path = std::env::temp_dir().join(format!(
            "buzzer-report-{}.json",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let mut args = base_args();
        args.output = Some(path.clone());
        let results = run_logic_scenarios(&args, &["admin-route".to_string()], &["x".to_string()]);
        write_reports(&args, &results, Instant::now()).expect("write report");
        let text = std::fs::read_to_string(&path).expect("read report");
        assert!(text.contains("\"admin-route\""));
    }
}
