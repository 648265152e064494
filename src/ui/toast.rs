use std::time::Duration;

use iced::widget::{button, column, container};
use iced::Element;

use crate::app::Message;
use crate::i18n::{StringTable, TextKey};
use crate::state::{ActionError, Outcome};

use super::{label, styles};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Title, description and severity of a notification.
///
/// Keeps keys rather than strings, so visible toasts follow a language switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: TextKey,
    pub description: TextKey,
    pub severity: Severity,
}

impl Notice {
    const fn info(title: TextKey, description: TextKey) -> Self {
        Self {
            title,
            description,
            severity: Severity::Info,
        }
    }

    const fn error(title: TextKey, description: TextKey) -> Self {
        Self {
            title,
            description,
            severity: Severity::Error,
        }
    }
}

impl From<Outcome> for Notice {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Encoded => Notice::info(TextKey::ConvertSuccess, TextKey::ConvertSuccessDesc),
            Outcome::Decoded => Notice::info(TextKey::DecodeSuccess, TextKey::DecodeSuccessDesc),
            Outcome::Copied(_) => Notice::info(TextKey::CopySuccess, TextKey::CopySuccessDesc),
            Outcome::Cleared => Notice::info(TextKey::Cleared, TextKey::ClearedDesc),
        }
    }
}

impl From<&ActionError> for Notice {
    fn from(error: &ActionError) -> Self {
        match error {
            ActionError::EmptyInput => Notice::error(TextKey::EmptyInput, TextKey::EmptyInputDesc),
            ActionError::NothingToCopy => {
                Notice::error(TextKey::NoContentToCopy, TextKey::NoContentToCopyDesc)
            }
            ActionError::Decode(_) => Notice::error(TextKey::DecodeFailed, TextKey::DecodeFailedDesc),
            ActionError::Copy(_) => Notice::error(TextKey::CopyFailed, TextKey::CopyFailedDesc),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Notification stack, newest last.
#[derive(Debug, Default)]
pub struct Toasts {
    next_id: u64,
    visible: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.visible.push(Toast { id, notice });
        if self.visible.len() > MAX_VISIBLE {
            self.visible.remove(0);
        }

        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|toast| toast.id != id);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    pub fn view<'a>(&'a self, table: &StringTable) -> Element<'a, Message> {
        column(self.visible().iter().map(|toast| -> Element<'a, Message> {
            let Notice {
                title,
                description,
                severity,
            } = toast.notice;

            let content = column![
                label(table.get(title)).size(15),
                label(table.get(description)).size(13),
            ]
            .spacing(4);

            button(container(content).width(300))
                .on_press(Message::ToastDismissed(toast.id))
                .padding(12)
                .style(move |theme: &iced::Theme, status| styles::toast(theme, status, severity))
                .into()
        }))
        .spacing(8)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::codec;
    use crate::state::CopyTarget;

    #[test]
    fn outcomes_are_informational() {
        for outcome in [
            Outcome::Encoded,
            Outcome::Decoded,
            Outcome::Copied(CopyTarget::Base64),
            Outcome::Cleared,
        ] {
            assert_eq!(Notice::from(outcome).severity, Severity::Info);
        }
    }

    #[test]
    fn errors_are_destructive() {
        let decode_error = codec::decode("@@@@").unwrap_err();
        let errors = [
            ActionError::EmptyInput,
            ActionError::NothingToCopy,
            ActionError::Decode(decode_error),
            ActionError::Copy(ClipboardError::Clip("denied".into())),
        ];

        for error in &errors {
            assert_eq!(Notice::from(error).severity, Severity::Error);
        }
        assert_eq!(Notice::from(&errors[1]).title, TextKey::NoContentToCopy);
        assert_eq!(Notice::from(&errors[2]).title, TextKey::DecodeFailed);
    }

    #[test]
    fn keeps_the_newest_toasts() {
        let mut toasts = Toasts::default();
        let notice = Notice::from(Outcome::Cleared);

        let ids: Vec<u64> = (0..5).map(|_| toasts.push(notice)).collect();

        let visible: Vec<u64> = toasts.visible().iter().map(|toast| toast.id).collect();
        assert_eq!(visible, ids[2..].to_vec());
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Notice::from(Outcome::Encoded));
        let second = toasts.push(Notice::from(&ActionError::EmptyInput));

        toasts.dismiss(first);
        toasts.dismiss(first);

        assert_eq!(toasts.visible().len(), 1);
        assert_eq!(toasts.visible()[0].id, second);
    }
}
