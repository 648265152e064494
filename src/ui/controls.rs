use iced::widget::{button, column, container, pick_list, row, slider, text, Column, Text};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::i18n::{Language, StringTable, TextKey};
use crate::state::flags::{MAX_EDITOR_HEIGHT, MIN_EDITOR_HEIGHT};

use super::icons::{clear_icon, convert_icon, copy_icon, hash_icon};
use super::{label, styles};

pub fn view_header<'a>(table: &StringTable, language: Language) -> Element<'a, Message> {
    let languages = pick_list(Language::ALL, Some(language), Message::LanguageSelected)
        .placeholder(table.get(TextKey::LanguageSelector))
        .text_shaping(text::Shaping::Advanced)
        .padding(iced::Padding {
            top: 5.0,
            left: 12.0,
            bottom: 5.0,
            right: 12.0,
        });

    column![
        row![
            hash_icon().size(20),
            label(table.get(TextKey::Title)).size(32).width(Fill),
            languages,
        ]
        .spacing(12)
        .align_y(Center),
        label(table.get(TextKey::Subtitle)).size(16).style(styles::subtle),
    ]
    .spacing(12)
    .into()
}

pub fn view_height_slider<'a>(table: &StringTable, height: f32) -> Element<'a, Message> {
    row![
        label(table.get(TextKey::EditorHeight)).size(14),
        slider(MIN_EDITOR_HEIGHT..=MAX_EDITOR_HEIGHT, height, Message::EditorHeightChanged)
            .step(10.0)
            .width(240),
        text(format!("{height:.0}px")).size(14).style(styles::subtle),
    ]
    .spacing(12)
    .align_y(Center)
    .into()
}

pub fn view_actions<'a>(table: &StringTable, can_clear: bool) -> Element<'a, Message> {
    let clear = button(
        row![clear_icon(), label(table.get(TextKey::ClearAll))]
            .spacing(8)
            .align_y(Center),
    )
    .on_press_maybe(can_clear.then_some(Message::ClearAll))
    .padding(iced::Padding {
        top: 8.0,
        left: 24.0,
        bottom: 8.0,
        right: 24.0,
    })
    .style(button::secondary);

    container(clear).center_x(Fill).into()
}

pub fn view_features<'a>(table: &StringTable) -> Element<'a, Message> {
    let feature = |icon: Text<'static>, title, description| -> Column<'a, Message> {
        column![
            icon.size(18),
            label(table.get(title)).size(14),
            label(table.get(description)).size(12).style(styles::subtle),
        ]
        .spacing(4)
        .align_x(Center)
        .width(Fill)
    };

    container(
        column![
            container(label(table.get(TextKey::FeaturesTitle)).size(16)).center_x(Fill),
            row![
                feature(hash_icon(), TextKey::LocalProcessing, TextKey::LocalProcessingDesc),
                feature(convert_icon(), TextKey::Bidirectional, TextKey::BidirectionalDesc),
                feature(copy_icon(), TextKey::OneClickCopy, TextKey::OneClickCopyDesc),
                feature(clear_icon(), TextKey::QuickClear, TextKey::QuickClearDesc),
            ]
            .spacing(16),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Fill)
    .style(styles::features)
    .into()
}

pub fn view_footer<'a>(table: &StringTable) -> Element<'a, Message> {
    container(label(table.get(TextKey::Footer)).size(13).style(styles::subtle))
        .center_x(Fill)
        .padding(16)
        .into()
}
