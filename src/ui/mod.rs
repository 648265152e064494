pub mod controls;
pub mod icons;
pub mod panel;
pub mod styles;
pub mod toast;

use iced::widget::{text, Text};

/// Text with full shaping so CJK and Hangul labels render.
pub fn label<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content).shaping(text::Shaping::Advanced)
}
