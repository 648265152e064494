pub mod flags;
pub mod language;
pub mod persistence;

use thiserror::Error;

use crate::clipboard::{ClipboardBackend, ClipboardError};
use crate::codec::{self, DecodeError};
pub use flags::CopyTarget;
use flags::UiFlags;

/// The two text buffers. They only change together when a conversion runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionState {
    pub plain_text: String,
    pub base64_text: String,
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Encoded,
    Decoded,
    Copied(CopyTarget),
    Cleared,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("nothing to convert")]
    EmptyInput,
    #[error("nothing to copy")]
    NothingToCopy,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Copy(#[from] ClipboardError),
}

/// Text to put on the clipboard, produced before the asynchronous write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    pub target: CopyTarget,
    pub text: String,
}

impl CopyRequest {
    pub fn execute(&self, clipboard: &dyn ClipboardBackend) -> Result<(), ClipboardError> {
        clipboard.write_text(&self.text)
    }
}

#[derive(Debug, Default)]
pub struct Converter {
    buffers: ConversionState,
    flags: UiFlags,
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffers(&self) -> &ConversionState {
        &self.buffers
    }

    pub fn set_plain_text(&mut self, text: String) {
        self.buffers.plain_text = text;
    }

    pub fn set_base64_text(&mut self, text: String) {
        self.buffers.base64_text = text;
    }

    pub fn can_convert_to_base64(&self) -> bool {
        !is_blank(&self.buffers.plain_text)
    }

    pub fn can_convert_to_text(&self) -> bool {
        !is_blank(&self.buffers.base64_text)
    }

    pub fn can_clear(&self) -> bool {
        self.can_convert_to_base64() || self.can_convert_to_text()
    }

    pub fn convert_to_base64(&mut self) -> Result<Outcome, ActionError> {
        if !self.can_convert_to_base64() {
            return Err(ActionError::EmptyInput);
        }

        self.buffers.base64_text = codec::encode(&self.buffers.plain_text);
        Ok(Outcome::Encoded)
    }

    /// Decodes the Base64 buffer into the plain text buffer. Both buffers
    /// are left untouched on failure.
    pub fn convert_to_text(&mut self) -> Result<Outcome, ActionError> {
        if !self.can_convert_to_text() {
            return Err(ActionError::EmptyInput);
        }

        self.buffers.plain_text = codec::decode(&self.buffers.base64_text)?;
        Ok(Outcome::Decoded)
    }

    pub fn copy_plain_text(&self) -> Result<CopyRequest, ActionError> {
        self.copy(CopyTarget::PlainText)
    }

    pub fn copy_base64(&self) -> Result<CopyRequest, ActionError> {
        self.copy(CopyTarget::Base64)
    }

    fn copy(&self, target: CopyTarget) -> Result<CopyRequest, ActionError> {
        let text = match target {
            CopyTarget::PlainText => &self.buffers.plain_text,
            CopyTarget::Base64 => &self.buffers.base64_text,
        };

        if is_blank(text) {
            return Err(ActionError::NothingToCopy);
        }

        Ok(CopyRequest {
            target,
            text: text.clone(),
        })
    }

    /// Records the result of a clipboard write. On success returns the
    /// generation to hand back to [`Converter::expire_copied`].
    pub fn finish_copy(
        &mut self,
        target: CopyTarget,
        result: Result<(), ClipboardError>,
    ) -> Result<u64, ActionError> {
        result?;
        Ok(self.flags.copied_mut(target).set())
    }

    pub fn expire_copied(&mut self, target: CopyTarget, generation: u64) {
        self.flags.copied_mut(target).expire(generation);
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        self.flags.copied(target).is_active()
    }

    pub fn clear_all(&mut self) -> Outcome {
        self.buffers = ConversionState::default();
        self.flags.copied_plain.reset();
        self.flags.copied_base64.reset();
        Outcome::Cleared
    }

    pub fn editor_height(&self) -> f32 {
        self.flags.editor_height.get()
    }

    pub fn resize_editors(&mut self, height: f32) -> bool {
        self.flags.editor_height.resize(height)
    }
}
