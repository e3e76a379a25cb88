//! Console output formatter for resolution results

use chrono::{DateTime, Utc};
use colored::Colorize;
use resolver_domain::{
    BackendAnswer, CommitteeTally, OutputFormat, Prompt, ResolutionPath, ResolutionResult,
    truncate_chars,
};
use serde::Serialize;

/// Width of a backend answer in the full report
const ANSWER_PREVIEW_CHARS: usize = 75;

/// Serialized shape of `--output json`
#[derive(Debug, Serialize)]
pub struct ResolutionReport<'a> {
    pub prompt: &'a str,
    #[serde(flatten)]
    pub result: &'a ResolutionResult,
    pub resolved_at: DateTime<Utc>,
}

/// Formats resolution results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render `result` in the requested format
    pub fn render(format: OutputFormat, prompt: &Prompt, result: &ResolutionResult) -> String {
        match format {
            OutputFormat::Answer => Self::format_answer(result),
            OutputFormat::Full => Self::format(prompt, result),
            OutputFormat::Json => Self::format_json(prompt, result, Utc::now()),
        }
    }

    /// The final answer with its verification marker
    pub fn format_answer(result: &ResolutionResult) -> String {
        format!("{}\n{}\n", Self::marker(result), result.final_text)
    }

    /// Complete report: path, flags, committee agreement and every backend answer
    pub fn format(prompt: &Prompt, result: &ResolutionResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Resolution"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Prompt:".cyan().bold(), prompt));
        output.push_str(&format!(
            "{} {}\n",
            "Path:".cyan().bold(),
            result.path.as_str()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Cached for reuse:".cyan().bold(),
            if result.cacheable { "yes" } else { "no" }
        ));
        if matches!(
            result.path,
            ResolutionPath::Consensus | ResolutionPath::PrimaryFallback
        ) {
            output.push_str(&format!(
                "{} {}\n",
                "Agreement:".cyan().bold(),
                CommitteeTally::from_answers(&result.answers).vote_summary()
            ));
        }

        if !result.answers.is_empty() {
            output.push_str(&Self::section_header("Backend answers"));
            for answer in &result.answers {
                output.push_str(&Self::answer_line(answer));
                output.push('\n');
            }
        }

        output.push_str(&Self::section_header("Final answer"));
        output.push_str(&format!("{}\n{}\n", Self::marker(result), result.final_text));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(prompt: &Prompt, result: &ResolutionResult, at: DateTime<Utc>) -> String {
        let report = ResolutionReport {
            prompt: prompt.content(),
            result,
            resolved_at: at,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    fn marker(result: &ResolutionResult) -> String {
        if result.is_cache_hit() {
            format!("[{}]", "cached".green().bold())
        } else if result.verified {
            format!("[{}]", "verified".green().bold())
        } else {
            format!("[{}]", "unverified".yellow().bold())
        }
    }

    fn answer_line(answer: &BackendAnswer) -> String {
        let preview = truncate_chars(&answer.text.replace('\n', " "), ANSWER_PREVIEW_CHARS);
        if answer.is_ok() {
            format!("  {} {}: {}", "v".green(), answer.model.to_string().bold(), preview)
        } else {
            format!(
                "  {} {}: {}",
                "x".red(),
                answer.model.to_string().bold(),
                answer.error.as_deref().unwrap_or("failed").red()
            )
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
