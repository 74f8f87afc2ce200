//! Tax advice derived from the current ledger.
//!
//! [`Advisor`] turns entries into a chat prompt, hands it to a
//! [`CompletionService`] and splits the completion into lines. An empty
//! ledger short-circuits to [`NO_ENTRIES`] without any network call.

use std::{fmt::Write as _, sync::Arc};

use engine::Entry;

pub use completion::{ChatMessage, CompletionService, Role, Unconfigured};
pub use error::AdviceError;
pub use openai::OpenAiClient;

mod completion;
mod error;
mod openai;

/// Sentinel returned for an empty ledger.
pub const NO_ENTRIES: &str = "no entries found";

/// Default cap on entries enumerated in one prompt.
pub const DEFAULT_MAX_PROMPT_ENTRIES: usize = 100;

const SYSTEM_PROMPT: &str = "You are a tax advisor. Give short, practical advice about \
the user's income, expenses and tax rate. Put every point on its own line.";

#[derive(Clone)]
pub struct Advisor {
    service: Arc<dyn CompletionService>,
    max_prompt_entries: usize,
}

impl Advisor {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service,
            max_prompt_entries: DEFAULT_MAX_PROMPT_ENTRIES,
        }
    }

    /// An advisor whose service always fails with [`AdviceError::NotConfigured`].
    pub fn unconfigured() -> Self {
        Self::new(Arc::new(Unconfigured))
    }

    pub fn max_prompt_entries(mut self, max: usize) -> Self {
        self.max_prompt_entries = max.max(1);
        self
    }

    /// Ask the completion service for advice on `entries`.
    pub async fn advise(&self, entries: &[Entry]) -> Result<Vec<String>, AdviceError> {
        if entries.is_empty() {
            return Ok(vec![NO_ENTRIES.to_string()]);
        }

        let messages = [
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(entries, self.max_prompt_entries)),
        ];
        tracing::debug!("requesting advice for {} entries", entries.len());
        let completion = self.service.complete(&messages).await?;

        Ok(split_lines(&completion))
    }
}

/// Enumerate up to `max` entries, one per line, noting how many were left out.
///
/// Descriptions are free text and never leave the server.
pub fn build_prompt(entries: &[Entry], max: usize) -> String {
    let mut prompt = String::from("Here are my tax entries:\n");
    for entry in entries.iter().take(max) {
        let _ = writeln!(
            prompt,
            "ID: {}, Income: {:.2}, Expenses: {:.2}, Tax Rate: {}%",
            entry.id, entry.income, entry.expenses, entry.tax_rate
        );
    }
    let omitted = entries.len().saturating_sub(max);
    if omitted > 0 {
        let _ = writeln!(prompt, "({omitted} more entries omitted)");
    }
    prompt.push_str("Give me tax advice for these entries.");
    prompt
}

/// Split a completion into trimmed, non-blank lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
