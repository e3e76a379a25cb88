//! CLI command definitions

use clap::{Parser, ValueEnum};
use resolver_domain::ResolutionStrategy;
use std::path::PathBuf;

/// Output format for resolution results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Only the final answer and its verification marker
    Answer,
    /// Answer plus path, cache flag and every backend answer
    Full,
    /// JSON report
    Json,
}

impl From<OutputFormat> for resolver_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Answer => resolver_domain::OutputFormat::Answer,
            OutputFormat::Full => resolver_domain::OutputFormat::Full,
            OutputFormat::Json => resolver_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for prompt-resolver
#[derive(Parser, Debug)]
#[command(name = "prompt-resolver")]
#[command(author, version, about = "Answer prompts through a cached pool of local models")]
#[command(long_about = r#"
prompt-resolver answers prompts with a pool of Ollama models behind a shared
Redis cache. Cached prompts are answered without contacting any model.

Strategies:
  majority  Ask the whole committee and accept the majority answer
  routed    Simple prompts go to one cheap model, complex ones to the committee
  cascade   A scout answers first; long or failed answers escalate to the expert

Configuration is loaded from (in priority order):
1. Environment          BACKEND_HOST, CACHE_HOST, CACHE_PASSWORD, ... (and ./.env)
2. --config <path>      Explicit config file
3. ./resolver.toml      Project-level config
4. ~/.config/prompt-resolver/config.toml   Global config

Example:
  prompt-resolver "What is the capital of France?"
  prompt-resolver --strategy majority "Compare TCP and UDP"
  prompt-resolver --chat
"#)]
pub struct Cli {
    /// Prompts to resolve, in order (chat mode starts when none are given)
    pub prompts: Vec<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Resolution strategy (overrides configuration)
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<ResolutionStrategy>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files (environment is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and exit
    #[arg(long)]
    pub show_config: bool,

    /// Delete every cached answer and exit
    #[arg(long)]
    pub flush_cache: bool,

    /// Do not start the RAM monitor
    #[arg(long)]
    pub no_monitor: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Whether the interactive loop should run
    pub fn is_interactive(&self) -> bool {
        self.chat || self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_batch_prompts_keep_order() {
        let cli = Cli::parse_from(["prompt-resolver", "first", "second"]);
        assert_eq!(cli.prompts, vec!["first", "second"]);
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_no_prompt_means_chat() {
        let cli = Cli::parse_from(["prompt-resolver"]);
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_strategy_and_output_flags() {
        let cli = Cli::parse_from([
            "prompt-resolver",
            "--strategy",
            "vote",
            "-o",
            "json",
            "-vv",
            "hi",
        ]);
        assert_eq!(cli.strategy, Some(ResolutionStrategy::Majority));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["prompt-resolver", "--strategy", "random", "hi"]).is_err());
    }
}
