use crate::config::{Config, ConfigError, ViewSettings};
use crate::digest::FeedDocument;
use crate::feed::{resolve_date_key, FeedLoader, FetchError, LoadedDocument};
use crate::ui::{
    apply_view, mount, Effect, Platform, UiEvent, UiState, ViewBinding, ViewModel,
    COPY_FAILED_NOTICE,
};
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::redirect::Policy;
use std::time::Duration;

// ============================================================================
// HTTP Client Configuration
// ============================================================================

/// Create a custom redirect policy with loop detection and limited hops.
///
/// - Limits redirects to 3 hops maximum
/// - Detects redirect loops (same URL appearing twice in chain)
/// - Logs redirect chain for debugging
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 3 {
            return attempt.error("Too many redirects (max 3)");
        }

        let url = attempt.url();
        for prev in attempt.previous() {
            if prev.as_str() == url.as_str() {
                return attempt.error("Redirect loop detected");
            }
        }

        tracing::debug!(
            from = %attempt.previous().last().map(|u| u.as_str()).unwrap_or("initial"),
            to = %url,
            hop = attempt.previous().len() + 1,
            "Following redirect"
        );

        attempt.follow()
    })
}

/// HTTP client shared by document and markdown fetches.
pub fn create_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .redirect(create_redirect_policy())
        .pool_max_idle_per_host(2)
        .timeout(timeout)
        .build()
}

// ============================================================================
// Application Shell
// ============================================================================

/// Holds the loaded document and UI state, and drives every re-mount.
///
/// All mutation happens through `&mut self`, so events are handled one at a
/// time in arrival order.
pub struct App<B: ViewBinding, P: Platform> {
    loader: FeedLoader,
    settings: ViewSettings,
    timezone: FixedOffset,
    loaded: LoadedDocument,
    state: UiState,
    view: ViewModel,
    binding: B,
    platform: P,
}

impl<B: ViewBinding, P: Platform> App<B, P> {
    /// Create the shell with an empty document and the configured default tab.
    ///
    /// Nothing is fetched until [`App::boot`].
    pub fn new(
        loader: FeedLoader,
        config: &Config,
        binding: B,
        platform: P,
    ) -> Result<Self, ConfigError> {
        let timezone = config.timezone()?;
        let settings = config.view.clone();
        let state = UiState::new(config.default_category);
        let loaded = LoadedDocument::empty();
        let view = mount(&loaded.document, &state, &settings);

        Ok(Self {
            loader,
            settings,
            timezone,
            loaded,
            state,
            view,
            binding,
            platform,
        })
    }

    /// Resolve the date, load the document (with the one-day fallback) and mount.
    ///
    /// Never fails: if no document can be loaded the view mounts empty.
    pub async fn boot(&mut self, explicit_date: Option<&str>) -> &LoadedDocument {
        self.boot_at(explicit_date, Utc::now()).await
    }

    /// [`App::boot`] with an explicit clock reading.
    pub async fn boot_at(
        &mut self,
        explicit_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> &LoadedDocument {
        let date_key = resolve_date_key(explicit_date, now, self.timezone);
        tracing::info!(date = %date_key, "Booting digest view");

        self.loaded = self.loader.load_with_fallback(&date_key).await;
        self.mount();
        &self.loaded
    }

    /// Re-render every category and push the result into the binding.
    pub fn mount(&mut self) {
        self.view = mount(&self.loaded.document, &self.state, &self.settings);
        apply_view(&self.view, &mut self.binding);
    }

    /// Reduce a UI event into state and run its effect.
    pub async fn dispatch(&mut self, event: UiEvent) {
        tracing::debug!(?event, "UI event");
        match self.state.reduce(event) {
            Effect::Remount => self.mount(),
            Effect::Print => self.platform.print(),
            Effect::CopyMarkdown => self.copy_markdown().await,
        }
    }

    /// Copy the loaded day's markdown to the clipboard.
    ///
    /// Every failure collapses into [`COPY_FAILED_NOTICE`]; the detail only goes to the log.
    async fn copy_markdown(&mut self) {
        if let Err(e) = self.try_copy_markdown().await {
            tracing::warn!(error = %e, "Copy markdown failed");
            self.platform.notify(COPY_FAILED_NOTICE);
        }
    }

    async fn try_copy_markdown(&mut self) -> Result<(), CopyError> {
        let date_key = self.loaded.date_key.as_deref().ok_or(CopyError::NoDocument)?;
        let text = self.loader.load_markdown(date_key).await?;
        self.platform.write_clipboard(&text)?;
        tracing::info!(date = %date_key, bytes = text.len(), "Copied markdown to clipboard");
        Ok(())
    }

    pub fn loaded(&self) -> &LoadedDocument {
        &self.loaded
    }

    pub fn document(&self) -> &FeedDocument {
        &self.loaded.document
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

/// Internal reasons a copy can fail; never shown to the user.
#[derive(Debug, thiserror::Error)]
enum CopyError {
    #[error("No document loaded")]
    NoDocument,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Clipboard(#[from] crate::ui::ClipboardError),
}
