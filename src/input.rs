use crate::autocomplete::MAX_SUGGESTIONS;
use crate::debounce::Debouncer;
use crate::explorer;
use crate::provider::TravelProvider;
use crate::session::TripState;
use crate::types::Suggestion;
use std::time::Duration;
use tokio::sync::mpsc;

/// Quiet period before a typed destination triggers a full lookup.
pub const DEBOUNCE_DELAY: Duration = Duration::from_secs(1);

/// Suggestion requests are only issued for text longer than this.
const MIN_SUGGEST_LEN: usize = 1;

/// The debounced full lookup only fires for text longer than this.
const MIN_LOOKUP_LEN: usize = 2;

/// Owns the destination text field behavior: suggestion fetching on each
/// keystroke and the debounced full-lookup trigger.
///
/// The debounced trigger cannot call the orchestrator directly (the timer
/// task outlives the `&mut TripState` borrow), so it emits the quiesced text
/// on a channel; the embedder receives it and calls
/// [`explore`](crate::explorer::explore).
pub struct InputController {
    debouncer: Debouncer,
    lookup_tx: mpsc::UnboundedSender<String>,
}

impl InputController {
    /// Create a controller and the receiving end of its full-lookup channel.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        (
            Self {
                debouncer: Debouncer::new(),
                lookup_tx,
            },
            lookup_rx,
        )
    }

    /// Handle one keystroke's worth of text.
    ///
    /// No-op until the provider is ready (the text field is disabled before
    /// then). Stores the raw text and restarts the 1-second debounce that
    /// emits the text for a full lookup once the user goes quiet; then, for
    /// text longer than one character, fetches up to five city suggestions
    /// and shows them, clearing and hiding the list on failure or empty
    /// result. The two paths are independent: the quiet period runs from the
    /// keystroke, not from suggestion-fetch completion.
    pub async fn on_text_changed<P: TravelProvider>(
        &mut self,
        provider: &P,
        state: &mut TripState,
        text: &str,
    ) {
        if !state.provider_ready {
            return;
        }

        state.destination = text.to_string();

        let tx = self.lookup_tx.clone();
        let debounced = text.to_string();
        self.debouncer.call(DEBOUNCE_DELAY, async move {
            if debounced.chars().count() > MIN_LOOKUP_LEN {
                let _ = tx.send(debounced);
            }
        });

        if text.chars().count() > MIN_SUGGEST_LEN {
            match provider.suggest(text).await {
                Ok(suggestions) if !suggestions.is_empty() => {
                    state.suggestions = suggestions.into_iter().take(MAX_SUGGESTIONS).collect();
                    state.suggestions_visible = true;
                }
                Ok(_) => {
                    state.suggestions.clear();
                    state.suggestions_visible = false;
                }
                Err(e) => {
                    tracing::debug!("suggestion fetch failed: {e}");
                    state.suggestions.clear();
                    state.suggestions_visible = false;
                }
            }
        } else {
            state.suggestions.clear();
            state.suggestions_visible = false;
        }
    }

    /// Accept a suggestion: its full description becomes the destination
    /// text, the list is hidden, the pending debounce is cancelled, and the
    /// destination is explored immediately.
    pub async fn on_suggestion_chosen<P: TravelProvider>(
        &mut self,
        provider: &P,
        state: &mut TripState,
        suggestion: &Suggestion,
    ) {
        state.destination = suggestion.description.clone();
        state.suggestions_visible = false;
        self.debouncer.cancel();
        explorer::explore(provider, state, Some(&suggestion.description)).await;
    }

    /// Hide the suggestion list without touching the text (click-outside).
    pub fn dismiss_suggestions(&self, state: &mut TripState) {
        state.suggestions_visible = false;
    }
}
