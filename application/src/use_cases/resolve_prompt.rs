//! Resolve Prompt use case
//!
//! Cache-aside wrapper around the three resolution strategies.

use crate::cache_gateway::CacheGateway;
use crate::config::{EngineConfig, ModelTier};
use crate::ports::backend::{BackendClient, BackendError};
use crate::ports::cache_store::CacheStore;
use crate::ports::progress::{NoProgress, ResolutionProgress};
use resolver_domain::{
    BackendAnswer, CacheKey, CascadeDecision, Complexity, Model, Prompt, ResolutionResult,
    ResolutionStrategy, ScoutAcceptance, reconcile,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Use case for answering one prompt
///
/// Infallible by construction: backend and cache failures are folded into
/// the returned [`ResolutionResult`].
pub struct ResolvePromptUseCase<B: BackendClient + 'static, S: CacheStore + 'static> {
    backend: Arc<B>,
    cache: CacheGateway<S>,
    config: EngineConfig,
}

impl<B: BackendClient + 'static, S: CacheStore + 'static> ResolvePromptUseCase<B, S> {
    pub fn new(backend: Arc<B>, store: Arc<S>, config: EngineConfig) -> Self {
        Self {
            backend,
            cache: CacheGateway::new(store),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Switch strategy between prompts (used by the interactive `/strategy` command)
    pub fn set_strategy(&mut self, strategy: ResolutionStrategy) {
        self.config.strategy = strategy;
    }

    pub fn cache(&self) -> &CacheGateway<S> {
        &self.cache
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, prompt: &Prompt) -> ResolutionResult {
        self.execute_with_progress(prompt, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        prompt: &Prompt,
        progress: &dyn ResolutionProgress,
    ) -> ResolutionResult {
        let key = CacheKey::for_prompt(prompt);

        if let Some(cached) = self.cache.lookup(&key).await {
            info!("Answer served from cache");
            progress.on_cache_hit();
            let result = ResolutionResult::from_cache(cached);
            progress.on_resolved(&result);
            return result;
        }
        progress.on_cache_miss();

        info!("Resolving with {} strategy", self.config.strategy);
        let result = match self.config.strategy {
            ResolutionStrategy::Majority => self.majority(prompt, progress).await,
            ResolutionStrategy::Routed => self.routed(prompt, progress).await,
            ResolutionStrategy::Cascade => self.cascade(prompt, progress).await,
        };

        if result.cacheable {
            self.cache
                .store(&key, &result.final_text, self.config.cache_ttl)
                .await;
        } else {
            debug!("Result not cacheable ({}), skipping cache write", result.path);
        }

        info!(
            "Resolved via {} (verified: {}, failed calls: {})",
            result.path,
            result.verified,
            result.failed_calls()
        );
        progress.on_resolved(&result);
        result
    }

    /// Majority: ask the whole committee and vote
    async fn majority(&self, prompt: &Prompt, progress: &dyn ResolutionProgress) -> ResolutionResult {
        let answers = self.ask_committee(prompt, progress).await;
        let result = reconcile(answers, &self.config.primary, &self.config.rule);
        if !result.verified {
            warn!(
                "No answer reached {} ({} of {} needed); using {}'s answer",
                self.config.rule,
                self.config.rule.votes_needed(self.config.committee.len()),
                self.config.committee.len(),
                self.config.primary
            );
        }
        result
    }

    /// Routed: classify first, only complex prompts reach the committee
    async fn routed(&self, prompt: &Prompt, progress: &dyn ResolutionProgress) -> ResolutionResult {
        let complexity = self.config.classifier.classify(prompt);
        progress.on_route(&complexity);

        match complexity {
            Complexity::Complex { keyword } => {
                info!("Prompt classified complex (matched '{}')", keyword);
                self.majority(prompt, progress).await
            }
            Complexity::Simple => {
                info!("Prompt classified simple, using {}", self.config.simple_model);
                let model = &self.config.simple_model;
                progress.on_backend_start(std::slice::from_ref(model));
                let answer = self.ask_one(model, prompt, ModelTier::Light).await;
                progress.on_backend_complete(model, answer.is_ok());
                ResolutionResult::single(answer)
            }
        }
    }

    /// Cascade: scout first, escalate to the expert when needed
    async fn cascade(&self, prompt: &Prompt, progress: &dyn ResolutionProgress) -> ResolutionResult {
        let scout_model = &self.config.scout;
        progress.on_backend_start(std::slice::from_ref(scout_model));
        let scout = self.ask_one(scout_model, prompt, ModelTier::Light).await;
        progress.on_backend_complete(scout_model, scout.is_ok());

        if self.config.acceptance.decide(&scout) == CascadeDecision::Accept {
            debug!("Scout answer accepted ({} chars)", scout.char_len());
            return ScoutAcceptance::accepted(scout);
        }

        let expert_model = &self.config.expert;
        info!(
            "Escalating from {} to {} (scout ok: {}, {} chars)",
            scout_model,
            expert_model,
            scout.is_ok(),
            scout.char_len()
        );
        progress.on_escalate(scout_model, expert_model);
        progress.on_backend_start(std::slice::from_ref(expert_model));
        let expert = self.ask_one(expert_model, prompt, ModelTier::Heavy).await;
        progress.on_backend_complete(expert_model, expert.is_ok());

        ScoutAcceptance::escalated(scout, expert)
    }

    /// Query every committee member in parallel; answers come back in committee order
    async fn ask_committee(
        &self,
        prompt: &Prompt,
        progress: &dyn ResolutionProgress,
    ) -> Vec<BackendAnswer> {
        let committee = &self.config.committee;
        progress.on_backend_start(committee);

        let mut join_set = JoinSet::new();

        for (index, model) in committee.iter().enumerate() {
            let backend = Arc::clone(&self.backend);
            let model = model.clone();
            let content = prompt.content().to_string();
            let timeout = self.config.timeouts.for_model(&model, ModelTier::Light);

            join_set.spawn(async move {
                let result = Self::call(&backend, &model, &content, timeout).await;
                (index, model, result)
            });
        }

        let mut slots: Vec<Option<BackendAnswer>> = vec![None; committee.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, model, result)) => {
                    progress.on_backend_complete(&model, result.is_ok());
                    slots[index] = Some(Self::to_answer(model, result));
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        // A panicked task leaves its slot empty; that member counts as failed
        slots
            .into_iter()
            .zip(committee)
            .map(|(slot, model)| {
                slot.unwrap_or_else(|| BackendAnswer::failed(model.clone(), "task aborted"))
            })
            .collect()
    }

    async fn ask_one(&self, model: &Model, prompt: &Prompt, tier: ModelTier) -> BackendAnswer {
        let timeout = self.config.timeouts.for_model(model, tier);
        let result = Self::call(&self.backend, model, prompt.content(), timeout).await;
        Self::to_answer(model.clone(), result)
    }

    /// One bounded backend call
    ///
    /// The deadline is enforced here as well as by the client, so a client
    /// that ignores its timeout argument still cannot stall a resolution.
    async fn call(
        backend: &Arc<B>,
        model: &Model,
        prompt: &str,
        timeout: Duration,
    ) -> Result<String, BackendError> {
        match tokio::time::timeout(timeout, backend.complete(model, prompt, timeout)).await {
            Ok(result) => result,
            Err(_) => Err(BackendError::timeout(model, timeout)),
        }
    }

    fn to_answer(model: Model, result: Result<String, BackendError>) -> BackendAnswer {
        match result {
            Ok(text) => {
                debug!("Model {} responded ({} chars)", model, text.chars().count());
                BackendAnswer::ok(model, text)
            }
            Err(e) => {
                warn!("{}", e);
                BackendAnswer::failed(model, e.reason)
            }
        }
    }
}
