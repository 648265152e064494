use iced::widget::{button, column, container, row, text_editor};
use iced::{Center, Element, Fill, Font};

use crate::app::Message;
use crate::i18n::{StringTable, TextKey};
use crate::state::CopyTarget;

use super::icons::{check_icon, convert_icon, copy_icon};
use super::{label, styles};

/// One of the two side-by-side editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    PlainText,
    Base64,
}

impl Panel {
    fn title(self) -> TextKey {
        match self {
            Panel::PlainText => TextKey::PlainText,
            Panel::Base64 => TextKey::Base64Encoded,
        }
    }

    fn description(self) -> TextKey {
        match self {
            Panel::PlainText => TextKey::PlainTextDesc,
            Panel::Base64 => TextKey::Base64EncodedDesc,
        }
    }

    fn placeholder(self) -> TextKey {
        match self {
            Panel::PlainText => TextKey::TextPlaceholder,
            Panel::Base64 => TextKey::Base64Placeholder,
        }
    }

    fn convert_label(self) -> TextKey {
        match self {
            Panel::PlainText => TextKey::ConvertToBase64,
            Panel::Base64 => TextKey::ConvertToText,
        }
    }

    fn convert_message(self) -> Message {
        match self {
            Panel::PlainText => Message::ConvertToBase64,
            Panel::Base64 => Message::ConvertToText,
        }
    }

    fn edit_message(self) -> fn(text_editor::Action) -> Message {
        match self {
            Panel::PlainText => Message::PlainTextEdited,
            Panel::Base64 => Message::Base64Edited,
        }
    }

    fn target(self) -> CopyTarget {
        match self {
            Panel::PlainText => CopyTarget::PlainText,
            Panel::Base64 => CopyTarget::Base64,
        }
    }
}

/// Card with title, editor, convert button and copy button.
///
/// Both buttons are disabled while the editor holds only whitespace.
pub fn editor_panel<'a>(
    panel: Panel,
    table: &StringTable,
    content: &'a text_editor::Content,
    height: f32,
    has_input: bool,
    copied: bool,
) -> Element<'a, Message> {
    let header = column![
        label(table.get(panel.title())).size(20),
        label(table.get(panel.description())).size(14).style(styles::subtle),
    ]
    .spacing(4);

    let editor = text_editor(content)
        .placeholder(table.get(panel.placeholder()))
        .on_action(panel.edit_message())
        .font(Font::MONOSPACE)
        .size(14)
        .padding(10)
        .height(height);

    let convert = button(
        row![convert_icon(), label(table.get(panel.convert_label()))]
            .spacing(8)
            .align_y(Center),
    )
    .on_press_maybe(has_input.then(|| panel.convert_message()))
    .width(Fill)
    .padding(10)
    .style(button::primary);

    let copy_label = if copied {
        row![check_icon(), label(table.get(TextKey::Copied))]
    } else {
        row![copy_icon(), label(table.get(TextKey::Copy))]
    };

    let copy = button(copy_label.spacing(6).align_y(Center))
        .on_press_maybe(has_input.then(|| Message::Copy(panel.target())))
        .padding(10)
        .style(button::secondary);

    container(
        column![header, editor, row![convert, copy].spacing(8)]
            .spacing(16),
    )
    .padding(20)
    .width(Fill)
    .style(styles::card)
    .into()
}
