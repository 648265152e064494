use iced::widget::{text, Text};
use iced::Center;

pub fn icon(unicode: char) -> Text<'static> {
    text(unicode.to_string())
        .width(20)
        .align_x(Center)
        .shaping(text::Shaping::Advanced)
}

pub fn hash_icon() -> Text<'static> {
    icon('#')
}

pub fn convert_icon() -> Text<'static> {
    icon('⇅')
}

pub fn copy_icon() -> Text<'static> {
    icon('⧉')
}

pub fn check_icon() -> Text<'static> {
    icon('✓')
}

pub fn clear_icon() -> Text<'static> {
    icon('↺')
}
