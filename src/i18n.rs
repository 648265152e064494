use std::fmt;

use i18n_embed::fluent::{fluent_language_loader, FluentLanguageLoader};
use i18n_embed::unic_langid::LanguageIdentifier;
use i18n_embed_fl::fl;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n"]
struct Localizations;

/// Display language of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Chinese,
    English,
    Japanese,
    Korean,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Chinese,
        Language::English,
        Language::Japanese,
        Language::Korean,
    ];

    /// Short code written to the settings store.
    pub fn code(self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Korean => "ko",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == code.trim())
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::Chinese => "中文",
            Language::English => "English",
            Language::Japanese => "日本語",
            Language::Korean => "한국어",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::Chinese => "🇨🇳",
            Language::English => "🇺🇸",
            Language::Japanese => "🇯🇵",
            Language::Korean => "🇰🇷",
        }
    }

    fn locale(self) -> &'static str {
        match self {
            Language::Chinese => "zh-CN",
            Language::English => "en-US",
            Language::Japanese => "ja-JP",
            Language::Korean => "ko-KR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.flag(), self.native_name())
    }
}

/// Every string the interface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    Subtitle,
    PlainText,
    PlainTextDesc,
    Base64Encoded,
    Base64EncodedDesc,
    TextPlaceholder,
    Base64Placeholder,
    ConvertToBase64,
    ConvertToText,
    Copy,
    Copied,
    ClearAll,
    LanguageSelector,
    EditorHeight,
    EmptyInput,
    EmptyInputDesc,
    ConvertSuccess,
    ConvertSuccessDesc,
    DecodeSuccess,
    DecodeSuccessDesc,
    DecodeFailed,
    DecodeFailedDesc,
    NoContentToCopy,
    NoContentToCopyDesc,
    CopySuccess,
    CopySuccessDesc,
    CopyFailed,
    CopyFailedDesc,
    Cleared,
    ClearedDesc,
    FeaturesTitle,
    LocalProcessing,
    LocalProcessingDesc,
    Bidirectional,
    BidirectionalDesc,
    OneClickCopy,
    OneClickCopyDesc,
    QuickClear,
    QuickClearDesc,
    Footer,
}

impl TextKey {
    pub const ALL: [TextKey; 41] = [
        TextKey::Title,
        TextKey::Subtitle,
        TextKey::PlainText,
        TextKey::PlainTextDesc,
        TextKey::Base64Encoded,
        TextKey::Base64EncodedDesc,
        TextKey::TextPlaceholder,
        TextKey::Base64Placeholder,
        TextKey::ConvertToBase64,
        TextKey::ConvertToText,
        TextKey::Copy,
        TextKey::Copied,
        TextKey::ClearAll,
        TextKey::LanguageSelector,
        TextKey::EditorHeight,
        TextKey::EmptyInput,
        TextKey::EmptyInputDesc,
        TextKey::ConvertSuccess,
        TextKey::ConvertSuccessDesc,
        TextKey::DecodeSuccess,
        TextKey::DecodeSuccessDesc,
        TextKey::DecodeFailed,
        TextKey::DecodeFailedDesc,
        TextKey::NoContentToCopy,
        TextKey::NoContentToCopyDesc,
        TextKey::CopySuccess,
        TextKey::CopySuccessDesc,
        TextKey::CopyFailed,
        TextKey::CopyFailedDesc,
        TextKey::Cleared,
        TextKey::ClearedDesc,
        TextKey::FeaturesTitle,
        TextKey::LocalProcessing,
        TextKey::LocalProcessingDesc,
        TextKey::Bidirectional,
        TextKey::BidirectionalDesc,
        TextKey::OneClickCopy,
        TextKey::OneClickCopyDesc,
        TextKey::QuickClear,
        TextKey::QuickClearDesc,
        TextKey::Footer,
    ];
}

/// Immutable string table for a single language.
///
/// Tables are always built from the embedded Fluent resources, never
/// restored from persisted data.
pub struct StringTable {
    language: Language,
    loader: FluentLanguageLoader,
}

impl StringTable {
    pub fn load(language: Language) -> Self {
        let loader = fluent_language_loader!();

        match language.locale().parse::<LanguageIdentifier>() {
            Ok(id) => {
                if let Err(error) = i18n_embed::select(&loader, &Localizations, &[id]) {
                    tracing::warn!(%error, ?language, "falling back to default localization");
                }
            }
            Err(error) => {
                tracing::warn!(%error, ?language, "invalid locale identifier");
            }
        }

        Self { language, loader }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: TextKey) -> String {
        let loader = &self.loader;

        match key {
            TextKey::Title => fl!(loader, "title"),
            TextKey::Subtitle => fl!(loader, "subtitle"),
            TextKey::PlainText => fl!(loader, "plain-text"),
            TextKey::PlainTextDesc => fl!(loader, "plain-text-desc"),
            TextKey::Base64Encoded => fl!(loader, "base64-encoded"),
            TextKey::Base64EncodedDesc => fl!(loader, "base64-encoded-desc"),
            TextKey::TextPlaceholder => fl!(loader, "text-placeholder"),
            TextKey::Base64Placeholder => fl!(loader, "base64-placeholder"),
            TextKey::ConvertToBase64 => fl!(loader, "convert-to-base64"),
            TextKey::ConvertToText => fl!(loader, "convert-to-text"),
            TextKey::Copy => fl!(loader, "copy"),
            TextKey::Copied => fl!(loader, "copied"),
            TextKey::ClearAll => fl!(loader, "clear-all"),
            TextKey::LanguageSelector => fl!(loader, "language-selector"),
            TextKey::EditorHeight => fl!(loader, "editor-height"),
            TextKey::EmptyInput => fl!(loader, "empty-input"),
            TextKey::EmptyInputDesc => fl!(loader, "empty-input-desc"),
            TextKey::ConvertSuccess => fl!(loader, "convert-success"),
            TextKey::ConvertSuccessDesc => fl!(loader, "convert-success-desc"),
            TextKey::DecodeSuccess => fl!(loader, "decode-success"),
            TextKey::DecodeSuccessDesc => fl!(loader, "decode-success-desc"),
            TextKey::DecodeFailed => fl!(loader, "decode-failed"),
            TextKey::DecodeFailedDesc => fl!(loader, "decode-failed-desc"),
            TextKey::NoContentToCopy => fl!(loader, "no-content-to-copy"),
            TextKey::NoContentToCopyDesc => fl!(loader, "no-content-to-copy-desc"),
            TextKey::CopySuccess => fl!(loader, "copy-success"),
            TextKey::CopySuccessDesc => fl!(loader, "copy-success-desc"),
            TextKey::CopyFailed => fl!(loader, "copy-failed"),
            TextKey::CopyFailedDesc => fl!(loader, "copy-failed-desc"),
            TextKey::Cleared => fl!(loader, "cleared"),
            TextKey::ClearedDesc => fl!(loader, "cleared-desc"),
            TextKey::FeaturesTitle => fl!(loader, "features-title"),
            TextKey::LocalProcessing => fl!(loader, "local-processing"),
            TextKey::LocalProcessingDesc => fl!(loader, "local-processing-desc"),
            TextKey::Bidirectional => fl!(loader, "bidirectional"),
            TextKey::BidirectionalDesc => fl!(loader, "bidirectional-desc"),
            TextKey::OneClickCopy => fl!(loader, "one-click-copy"),
            TextKey::OneClickCopyDesc => fl!(loader, "one-click-copy-desc"),
            TextKey::QuickClear => fl!(loader, "quick-clear"),
            TextKey::QuickClearDesc => fl!(loader, "quick-clear-desc"),
            TextKey::Footer => fl!(loader, "footer"),
        }
    }
}

impl fmt::Debug for StringTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringTable")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::Chinese);
    }

    #[test]
    fn tables_resolve_their_own_language() {
        assert_eq!(StringTable::load(Language::English).get(TextKey::Title), "Base64 Converter");
        assert_eq!(StringTable::load(Language::Chinese).get(TextKey::Title), "Base64 转换工具");
        assert_eq!(StringTable::load(Language::Japanese).get(TextKey::Title), "Base64 変換ツール");
        assert_eq!(StringTable::load(Language::Korean).get(TextKey::Title), "Base64 변환기");
    }

    #[test]
    fn every_key_is_translated() {
        let english = StringTable::load(Language::English);

        for language in [Language::Chinese, Language::Japanese, Language::Korean] {
            let table = StringTable::load(language);
            for key in TextKey::ALL {
                let value = table.get(key);
                assert!(!value.is_empty(), "{key:?} is empty for {language:?}");
                assert_ne!(value, english.get(key), "{key:?} is untranslated for {language:?}");
            }
        }
    }
}
