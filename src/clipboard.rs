//! Clipboard: write-only access to the system clipboard.

use std::fmt::{self, Debug};
use std::sync::Mutex;

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard error: {0}")]
    Clip(String),
}

pub trait ClipboardBackend: Debug + Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

type Connect<P> = Box<dyn Fn() -> Result<P, ClipboardError> + Send + Sync>;

/// Holds one clipboard provider for the lifetime of the app.
///
/// On X11 the selection is served by the provider that set it, so it must
/// outlive the write.
pub struct ClipboardOwner<P> {
    connect: Connect<P>,
    provider: Mutex<Option<P>>,
}

impl<P: ClipboardProvider> ClipboardOwner<P> {
    pub fn new(connect: impl Fn() -> Result<P, ClipboardError> + Send + Sync + 'static) -> Self {
        Self {
            connect: Box::new(connect),
            provider: Mutex::new(None),
        }
    }

    pub fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut provider = self
            .provider
            .lock()
            .map_err(|e| ClipboardError::Clip(e.to_string()))?;

        if provider.is_none() {
            *provider = Some((self.connect)()?);
            tracing::debug!("clipboard connected");
        }

        let result = match provider.as_mut() {
            Some(provider) => provider
                .set_contents(text.to_string())
                .map_err(|e| ClipboardError::Clip(e.to_string())),
            None => Err(ClipboardError::Clip("no clipboard provider".into())),
        };

        // reconnect on the next write
        if result.is_err() {
            *provider = None;
        }

        result
    }
}

impl<P> Debug for ClipboardOwner<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let connected = self
            .provider
            .lock()
            .map(|provider| provider.is_some())
            .unwrap_or(false);

        f.debug_struct("ClipboardOwner")
            .field("connected", &connected)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct SystemClipboard {
    owner: ClipboardOwner<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            owner: ClipboardOwner::new(|| {
                ClipboardContext::new().map_err(|e| ClipboardError::Clip(e.to_string()))
            }),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.owner.write_text(text)
    }
}

/// In-process clipboard that can be told to refuse writes.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: std::sync::Mutex<Option<String>>,
    denied: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|contents| contents.clone())
    }
}

#[cfg(test)]
impl ClipboardBackend for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::Clip("permission denied".into()));
        }

        let mut contents = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Clip(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
