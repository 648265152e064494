use std::sync::Arc;

use iced::widget::{column, container, row, scrollable, stack, text_editor};
use iced::{Element, Fill, Task as Command};

use crate::clipboard::{ClipboardBackend, ClipboardError, SystemClipboard};
use crate::config::Config;
use crate::i18n::{Language, TextKey};
use crate::state::flags::COPIED_RESET;
use crate::state::language::LanguageStore;
use crate::state::persistence::{FileStore, SettingsError, SettingsStore};
use crate::state::{ActionError, Converter, CopyTarget, Outcome};
use crate::ui::controls::{view_actions, view_features, view_footer, view_header, view_height_slider};
use crate::ui::panel::{editor_panel, Panel};
use crate::ui::toast::{Notice, Toasts, TOAST_LIFETIME};

pub struct App {
    converter: Converter,
    plain_editor: text_editor::Content,
    base64_editor: text_editor::Content,
    language: LanguageStore,
    clipboard: Arc<dyn ClipboardBackend>,
    toasts: Toasts,
}

#[derive(Debug, Clone)]
pub enum Message {
    PlainTextEdited(text_editor::Action),
    Base64Edited(text_editor::Action),
    ConvertToBase64,
    ConvertToText,
    Copy(CopyTarget),
    CopyFinished(CopyTarget, Result<(), ClipboardError>),
    CopiedExpired(CopyTarget, u64),
    ClearAll,
    EditorHeightChanged(f32),
    LanguageSelected(Language),
    LanguageSaved(Language, Result<(), SettingsError>),
    ToastDismissed(u64),
}

impl App {
    pub fn new(config: &Config) -> (Self, Command<Message>) {
        let settings = FileStore::new(config.settings_path());
        tracing::info!(path = %settings.path().display(), "settings file");

        (
            Self::with_backends(Arc::new(settings), Arc::new(SystemClipboard::new())),
            Command::none(),
        )
    }

    pub fn with_backends(
        settings: Arc<dyn SettingsStore>,
        clipboard: Arc<dyn ClipboardBackend>,
    ) -> Self {
        Self {
            converter: Converter::new(),
            plain_editor: text_editor::Content::new(),
            base64_editor: text_editor::Content::new(),
            language: LanguageStore::restore(settings),
            clipboard,
            toasts: Toasts::default(),
        }
    }

    pub fn title(&self) -> String {
        self.language.table().get(TextKey::Title)
    }

    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::PlainTextEdited(action) => {
                let is_edit = action.is_edit();
                self.plain_editor.perform(action);
                if is_edit {
                    self.converter.set_plain_text(self.plain_editor.text());
                }
                Command::none()
            }
            Message::Base64Edited(action) => {
                let is_edit = action.is_edit();
                self.base64_editor.perform(action);
                if is_edit {
                    self.converter.set_base64_text(self.base64_editor.text());
                }
                Command::none()
            }
            Message::ConvertToBase64 => {
                let result = self.converter.convert_to_base64();
                if result.is_ok() {
                    self.base64_editor =
                        text_editor::Content::with_text(&self.converter.buffers().base64_text);
                }
                self.report(result)
            }
            Message::ConvertToText => {
                let result = self.converter.convert_to_text();
                if result.is_ok() {
                    self.plain_editor =
                        text_editor::Content::with_text(&self.converter.buffers().plain_text);
                }
                self.report(result)
            }
            Message::Copy(target) => {
                let request = match target {
                    CopyTarget::PlainText => self.converter.copy_plain_text(),
                    CopyTarget::Base64 => self.converter.copy_base64(),
                };

                match request {
                    Ok(request) => {
                        let target = request.target;
                        let clipboard = Arc::clone(&self.clipboard);
                        Command::perform(
                            async move { request.execute(clipboard.as_ref()) },
                            move |result| Message::CopyFinished(target, result),
                        )
                    }
                    Err(error) => self.report(Err(error)),
                }
            }
            Message::CopyFinished(target, result) => {
                match self.converter.finish_copy(target, result) {
                    Ok(generation) => Command::batch(vec![
                        Command::perform(tokio::time::sleep(COPIED_RESET), move |_| {
                            Message::CopiedExpired(target, generation)
                        }),
                        self.report(Ok(Outcome::Copied(target))),
                    ]),
                    Err(error) => self.report(Err(error)),
                }
            }
            Message::CopiedExpired(target, generation) => {
                self.converter.expire_copied(target, generation);
                Command::none()
            }
            Message::ClearAll => {
                let outcome = self.converter.clear_all();
                self.plain_editor = text_editor::Content::new();
                self.base64_editor = text_editor::Content::new();
                self.report(Ok(outcome))
            }
            Message::EditorHeightChanged(height) => {
                self.converter.resize_editors(height);
                Command::none()
            }
            Message::LanguageSelected(language) => {
                tracing::info!(?language, "display language changed");
                let save = self.language.select(language);
                Command::perform(save.run(), move |result| {
                    Message::LanguageSaved(language, result)
                })
            }
            Message::LanguageSaved(language, result) => {
                if let Err(error) = result {
                    tracing::warn!(%error, ?language, "failed to persist display language");
                }
                Command::none()
            }
            Message::ToastDismissed(id) => {
                self.toasts.dismiss(id);
                Command::none()
            }
        }
    }

    /// Shows the notification for an action and schedules its dismissal.
    fn report(&mut self, result: Result<Outcome, ActionError>) -> Command<Message> {
        let notice = match &result {
            Ok(outcome) => {
                tracing::debug!(?outcome, "action completed");
                Notice::from(*outcome)
            }
            Err(error) => {
                tracing::debug!(%error, "action failed");
                Notice::from(error)
            }
        };

        let id = self.toasts.push(notice);
        Command::perform(tokio::time::sleep(TOAST_LIFETIME), move |_| {
            Message::ToastDismissed(id)
        })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let table = self.language.table();
        let height = self.converter.editor_height();

        let panels = row![
            editor_panel(
                Panel::PlainText,
                table,
                &self.plain_editor,
                height,
                self.converter.can_convert_to_base64(),
                self.converter.is_copied(CopyTarget::PlainText),
            ),
            editor_panel(
                Panel::Base64,
                table,
                &self.base64_editor,
                height,
                self.converter.can_convert_to_text(),
                self.converter.is_copied(CopyTarget::Base64),
            ),
        ]
        .spacing(24);

        let content = column![
            view_header(table, self.language.language()),
            panels,
            view_height_slider(table, height),
            view_actions(table, self.converter.can_clear()),
            view_features(table),
            view_footer(table),
        ]
        .spacing(24)
        .max_width(1100);

        let page = scrollable(container(content).center_x(Fill).padding(iced::Padding {
            top: 32.0,
            left: 24.0,
            bottom: 32.0,
            right: 24.0,
        }));

        let toasts = container(self.toasts.view(table))
            .height(Fill)
            .align_right(Fill)
            .padding(16);

        stack![page, toasts].into()
    }
}
