//! REPL (Read-Eval-Print Loop) for interactive chat

use super::input::{ReplCommand, ReplInput, parse_input};
use crate::{ConsoleFormatter, ProgressReporter};
use resolver_application::{BackendClient, CacheStore, ResolvePromptUseCase};
use resolver_domain::{OutputFormat, Prompt, ResolutionStrategy};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Interactive chat REPL
pub struct ChatRepl<B: BackendClient + 'static, S: CacheStore + 'static> {
    use_case: ResolvePromptUseCase<B, S>,
    output: OutputFormat,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl<B: BackendClient + 'static, S: CacheStore + 'static> ChatRepl<B, S> {
    /// Create a new ChatRepl
    pub fn new(use_case: ResolvePromptUseCase<B, S>) -> Self {
        Self {
            use_case,
            output: OutputFormat::Answer,
            show_progress: true,
            history_file: dirs::data_dir()
                .map(|p| p.join("prompt-resolver").join("history.txt")),
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Override the history location (`None` keeps the default)
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => match parse_input(&line) {
                    ReplInput::Empty => continue,
                    ReplInput::Exit => {
                        println!("Bye!");
                        break;
                    }
                    ReplInput::Command(command) => self.handle_command(command),
                    ReplInput::Prompt(text) => {
                        let _ = rl.add_history_entry(text.as_str());
                        self.process_prompt(text).await;
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("=== Prompt Resolver - Chat Mode ===");
        println!();
        println!("Strategy: {}", self.use_case.config().strategy);
        println!("Type 'exit' to quit, /help for commands.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?        - Show this help");
        println!("  /strategy            - Show the current strategy");
        println!("  /strategy <name>     - Switch strategy (majority, routed, cascade)");
        println!("  /quit, /exit, /q     - Exit chat (or type exit / quit)");
        println!();
    }

    fn handle_command(&mut self, command: ReplCommand) {
        match command {
            ReplCommand::Help => self.print_help(),
            ReplCommand::ShowStrategy => {
                let current = self.use_case.config().strategy;
                println!();
                for strategy in ResolutionStrategy::all() {
                    let mark = if strategy == current { "*" } else { " " };
                    println!(" {} {:<9} {}", mark, strategy.as_str(), strategy.description());
                }
                println!();
            }
            ReplCommand::SetStrategy(strategy) => {
                self.use_case.set_strategy(strategy);
                println!("Strategy set to {}", strategy);
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
    }

    async fn process_prompt(&self, text: String) {
        let Some(prompt) = Prompt::try_new(text) else {
            return;
        };
        println!();

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(&prompt, &progress).await
        } else {
            self.use_case.execute(&prompt).await
        };

        println!("{}", ConsoleFormatter::render(self.output, &prompt, &result));
    }
}
