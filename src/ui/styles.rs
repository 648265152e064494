use iced::widget::{button, container, text};
use iced::{Border, Theme};

use super::toast::Severity;

pub fn subtle(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strongest.color),
    }
}

pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..Default::default()
    }
}

pub fn features(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weakest.color.into()),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn toast(theme: &Theme, status: button::Status, severity: Severity) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match severity {
        Severity::Info => palette.background.strong,
        Severity::Error => palette.danger.base,
    };
    let base = button::secondary(theme, status);

    button::Style {
        background: Some(pair.color.into()),
        text_color: pair.text,
        border: Border {
            color: pair.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..base
    }
}
