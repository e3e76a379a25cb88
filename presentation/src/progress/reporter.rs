//! Progress reporting for prompt resolution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resolver_application::ResolutionProgress;
use resolver_domain::{Complexity, Model, ResolutionResult};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with an indicatif bar per batch of backend calls
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn batch_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn finish(&self) {
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionProgress for ProgressReporter {
    fn on_cache_hit(&self) {}

    fn on_cache_miss(&self) {}

    fn on_backend_start(&self, models: &[Model]) {
        self.finish();

        let pb = ProgressBar::new(models.len() as u64);
        pb.set_style(Self::batch_style());
        let prefix = match models {
            [single] => single.to_string(),
            _ => "Committee".to_string(),
        };
        pb.set_prefix(prefix);
        pb.set_message("Waiting...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_backend_complete(&self, model: &Model, success: bool) {
        if let Ok(slot) = self.bar.lock() {
            if let Some(pb) = slot.as_ref() {
                let status = if success {
                    format!("{} {}", "v".green(), model)
                } else {
                    format!("{} {}", "x".red(), model)
                };
                pb.set_message(status);
                pb.inc(1);
            }
        }
    }

    fn on_escalate(&self, scout: &Model, expert: &Model) {
        self.finish();
        eprintln!("{} {} -> {}", "Escalating".yellow(), scout, expert);
    }

    fn on_resolved(&self, _result: &ResolutionResult) {
        self.finish();
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ResolutionProgress for SimpleProgress {
    fn on_cache_hit(&self) {
        println!("{} hit", "[Cache]".cyan());
    }

    fn on_cache_miss(&self) {
        println!("{} miss", "[Cache]".cyan());
    }

    fn on_backend_start(&self, models: &[Model]) {
        let names = models
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{} {}", "->".cyan(), names.bold());
    }

    fn on_backend_complete(&self, model: &Model, success: bool) {
        if success {
            println!("  {} {}", "v".green(), model);
        } else {
            println!("  {} {} (failed)", "x".red(), model);
        }
    }

    fn on_route(&self, complexity: &Complexity) {
        match complexity {
            Complexity::Simple => println!("{} simple prompt", "[Router]".cyan()),
            Complexity::Complex { keyword } => {
                println!("{} complex prompt ('{}')", "[Router]".cyan(), keyword)
            }
        }
    }

    fn on_escalate(&self, scout: &Model, expert: &Model) {
        println!("{} escalating {} -> {}", "[Router]".cyan(), scout, expert);
    }

    fn on_resolved(&self, _result: &ResolutionResult) {
        println!();
    }
}
