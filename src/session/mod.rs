//! Generation orchestrator: one text call fanning out into three
//! independently-resolving image calls over shared session state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::Result;
use crate::gateway::ContentGateway;
use crate::types::{
    ContentSet, GenerationRequest, GenerationStatus, Platform, PlatformContent, SessionState,
};

/// Handle to one in-memory generation session.
///
/// Cloning is cheap; all clones share the same state. Every write goes
/// through the watch channel's `send_modify`/`send_if_modified`, so each
/// merge reads the latest state and replaces only its own platform's
/// entry: last write per key, never last write global.
#[derive(Clone)]
pub struct ContentSession {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    gateway: Arc<dyn ContentGateway>,
    state: watch::Sender<SessionState>,
    /// Monotonic image-request counter. Tickets never repeat, so a
    /// completion from a superseded request can never match a fresh entry.
    tickets: AtomicU64,
}

impl ContentSession {
    /// Create an idle session backed by `gateway`.
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            inner: Arc::new(SessionInner {
                gateway,
                state,
                tickets: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Subscribe to state updates. This is the presentation surface: a
    /// receiver sees every seeded copy set and every artwork resolution.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.inner.state.subscribe()
    }

    /// Run one full generation cycle.
    ///
    /// A whitespace-only idea, or a cycle already in flight, is a no-op:
    /// state is untouched and the gateway is never invoked. On text failure
    /// the session returns to idle with a user-visible error and zero image
    /// requests are issued. On success all three platform entries are
    /// seeded atomically before the image fan-out starts, and the session
    /// is `Complete` as soon as the copy is available; artwork resolves
    /// into each entry afterwards, in whatever order the calls finish.
    pub async fn submit(&self, request: GenerationRequest) -> Result<()> {
        if !request.has_idea() {
            debug!("submit ignored: empty idea");
            return Ok(());
        }

        let claimed = self.inner.state.send_if_modified(|state| {
            if state.status == GenerationStatus::Generating {
                return false;
            }
            state.status = GenerationStatus::Generating;
            state.error = None;
            state.results = None;
            true
        });
        if !claimed {
            debug!("submit ignored: generation already in flight");
            return Ok(());
        }

        let copy = match self
            .inner
            .gateway
            .generate_copy(request.idea.trim(), request.tone)
            .await
        {
            Ok(copy) => copy,
            Err(err) => {
                warn!(error = %err, "text generation failed");
                let message = err.user_message();
                self.inner.state.send_modify(|state| {
                    state.status = GenerationStatus::Idle;
                    state.error = Some(message);
                });
                return Err(err);
            }
        };

        let mut fan_out = Vec::with_capacity(Platform::ALL.len());
        let entries = Platform::ALL.map(|platform| {
            let ticket = self.next_ticket();
            let entry = PlatformContent::pending(platform, copy.get(platform), ticket);
            fan_out.push((platform, entry.image_prompt.clone(), ticket));
            entry
        });
        let [linkedin, twitter, instagram] = entries;

        self.inner.state.send_modify(|state| {
            state.status = GenerationStatus::Complete;
            state.results = Some(ContentSet {
                linkedin,
                twitter,
                instagram,
            });
        });

        for (platform, prompt, ticket) in fan_out {
            self.spawn_image_task(platform, prompt, ticket);
        }

        Ok(())
    }

    /// Re-run artwork generation for one platform.
    ///
    /// Marks the platform loading synchronously (its current image URL is
    /// kept until the new resolution arrives) and leaves every other entry
    /// and the overall status untouched. A no-op when no results exist.
    pub fn regenerate_image(&self, platform: Platform) {
        let ticket = self.next_ticket();
        let mut job = None;
        self.inner.state.send_if_modified(|state| {
            let Some(results) = state.results.as_mut() else {
                return false;
            };
            let entry = results.get_mut(platform);
            entry.image_loading = true;
            entry.ticket = ticket;
            job = Some(entry.image_prompt.clone());
            true
        });

        match job {
            Some(prompt) => self.spawn_image_task(platform, prompt, ticket),
            None => debug!(%platform, "regenerate ignored: no results yet"),
        }
    }

    fn next_ticket(&self) -> u64 {
        self.inner.tickets.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn spawn_image_task(&self, platform: Platform, prompt: String, ticket: u64) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            debug!(%platform, ticket, "image generation started");
            let outcome = inner
                .gateway
                .generate_image(&prompt, platform.aspect_ratio())
                .await;
            inner.merge_image_outcome(platform, ticket, outcome);
        });
    }
}

impl SessionInner {
    /// Land one image completion in its platform's slot, or drop it when a
    /// newer request has taken the slot over since this one was issued.
    fn merge_image_outcome(&self, platform: Platform, ticket: u64, outcome: Result<String>) {
        self.state.send_if_modified(|state| {
            let Some(results) = state.results.as_mut() else {
                debug!(%platform, ticket, "image resolution dropped: results cleared");
                return false;
            };
            let entry = results.get_mut(platform);
            if entry.ticket != ticket {
                debug!(
                    %platform,
                    ticket,
                    current = entry.ticket,
                    "stale image resolution dropped"
                );
                return false;
            }
            entry.image_loading = false;
            match outcome {
                Ok(url) => entry.image_url = Some(url),
                Err(err) => {
                    warn!(%platform, error = %err, "image generation failed");
                }
            }
            true
        });
    }
}
