//! Shared test helpers and mock gateway.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use socialgen::error::{Result, SocialGenError};
use socialgen::gateway::ContentGateway;
use socialgen::session::ContentSession;
use socialgen::types::{AspectRatio, CopySet, PlatformCopy, Tone};

/// Canned copy set with per-platform prompts derived from `idea`.
pub fn copy_set(idea: &str) -> CopySet {
    CopySet {
        linkedin: PlatformCopy {
            text: format!("{idea} — long-form professional take"),
            image_prompt: format!("linkedin artwork for {idea}"),
        },
        twitter: PlatformCopy {
            text: format!("{idea} in one punchy line"),
            image_prompt: format!("twitter artwork for {idea}"),
        },
        instagram: PlatformCopy {
            text: format!("{idea} as a story #idea"),
            image_prompt: format!("instagram artwork for {idea}"),
        },
    }
}

/// A mock gateway with canned copy responses and controllable image calls.
///
/// Image calls resolve immediately by default (`https://img.test/<prompt>`).
/// `hold_image` turns the next call for a specific prompt into a pending
/// one the test resolves by hand, which pins down resolution order.
pub struct MockGateway {
    copy_responses: Mutex<Vec<Result<CopySet>>>,
    copy_holds: Mutex<Vec<oneshot::Receiver<Result<CopySet>>>>,
    copy_calls: AtomicUsize,
    image_calls: AtomicUsize,
    failing_prompts: Mutex<Vec<String>>,
    held_images: Mutex<HashMap<String, Vec<oneshot::Receiver<Result<String>>>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            copy_responses: Mutex::new(Vec::new()),
            copy_holds: Mutex::new(Vec::new()),
            copy_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            failing_prompts: Mutex::new(Vec::new()),
            held_images: Mutex::new(HashMap::new()),
        }
    }

    /// Queue a copy failure.
    pub fn queue_copy_error(&self, message: &str) {
        self.copy_responses
            .lock()
            .unwrap()
            .push(Err(SocialGenError::TextGeneration(message.into())));
    }

    /// Make the next copy call wait until the returned sender fires.
    pub fn hold_copy(&self) -> oneshot::Sender<Result<CopySet>> {
        let (tx, rx) = oneshot::channel();
        self.copy_holds.lock().unwrap().push(rx);
        tx
    }

    /// Fail every image call whose prompt equals `prompt`.
    pub fn fail_image(&self, prompt: &str) {
        self.failing_prompts.lock().unwrap().push(prompt.to_string());
    }

    /// Make the next image call for `prompt` wait until the returned
    /// sender fires.
    pub fn hold_image(&self, prompt: &str) -> oneshot::Sender<Result<String>> {
        let (tx, rx) = oneshot::channel();
        self.held_images
            .lock()
            .unwrap()
            .entry(prompt.to_string())
            .or_default()
            .push(rx);
        tx
    }

    pub fn copy_calls(&self) -> usize {
        self.copy_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGateway for MockGateway {
    async fn generate_copy(&self, idea: &str, _tone: Tone) -> Result<CopySet> {
        self.copy_calls.fetch_add(1, Ordering::SeqCst);

        let hold = {
            let mut holds = self.copy_holds.lock().unwrap();
            if holds.is_empty() {
                None
            } else {
                Some(holds.remove(0))
            }
        };
        if let Some(rx) = hold {
            return rx
                .await
                .unwrap_or_else(|_| Err(SocialGenError::TextGeneration("test sender dropped".into())));
        }

        let mut responses = self.copy_responses.lock().unwrap();
        if responses.is_empty() {
            return Ok(copy_set(idea));
        }
        responses.remove(0)
    }

    async fn generate_image(&self, prompt: &str, _aspect_ratio: AspectRatio) -> Result<String> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);

        let hold = {
            let mut held = self.held_images.lock().unwrap();
            held.get_mut(prompt).and_then(|queue| {
                if queue.is_empty() {
                    None
                } else {
                    Some(queue.remove(0))
                }
            })
        };
        if let Some(rx) = hold {
            return rx
                .await
                .unwrap_or_else(|_| Err(SocialGenError::ImageGeneration("test sender dropped".into())));
        }

        if self.failing_prompts.lock().unwrap().iter().any(|p| p == prompt) {
            return Err(SocialGenError::ImageGeneration(format!(
                "image failed for {prompt}"
            )));
        }
        Ok(format!("https://img.test/{prompt}"))
    }
}

/// A session over a fresh mock gateway, plus the gateway for inspection.
pub fn mock_session() -> (ContentSession, Arc<MockGateway>) {
    let gateway = Arc::new(MockGateway::new());
    (ContentSession::new(gateway.clone()), gateway)
}
