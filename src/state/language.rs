use std::sync::{Arc, Mutex};

use crate::i18n::{Language, StringTable};

use super::persistence::{SettingsError, SettingsStore};

pub const STORAGE_KEY: &str = "base64-converter-i18n";

/// Selected display language and its string table.
#[derive(Debug)]
pub struct LanguageStore {
    settings: Arc<dyn SettingsStore>,
    table: StringTable,
    selections: u64,
    written: Arc<Mutex<u64>>,
}

/// A language choice waiting to be written to the settings store.
///
/// Saves run on the blocking pool. A save that finds a newer choice already
/// written does nothing, so the last selection always wins on disk.
#[derive(Debug)]
pub struct PendingSave {
    settings: Arc<dyn SettingsStore>,
    written: Arc<Mutex<u64>>,
    selection: u64,
    language: Language,
}

impl PendingSave {
    /// Writes the choice unless a newer one already landed.
    pub fn write(self) -> Result<(), SettingsError> {
        let mut written = self
            .written
            .lock()
            .map_err(|e| SettingsError::Write(e.to_string()))?;

        if *written > self.selection {
            tracing::debug!(language = ?self.language, "skipping superseded language save");
            return Ok(());
        }

        self.settings.store(STORAGE_KEY, self.language.code())?;
        *written = self.selection;
        Ok(())
    }

    pub async fn run(self) -> Result<(), SettingsError> {
        tokio::task::spawn_blocking(move || self.write())
            .await
            .map_err(|e| SettingsError::Write(e.to_string()))?
    }
}

impl LanguageStore {
    /// Restores the persisted language, or the default when nothing usable is
    /// stored. The table is rebuilt from the code.
    pub fn restore(settings: Arc<dyn SettingsStore>) -> Self {
        let language = match settings.load(STORAGE_KEY) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                tracing::warn!(%code, "unknown persisted language, using default");
                Language::default()
            }),
            Ok(None) => Language::default(),
            Err(error) => {
                tracing::warn!(%error, "failed to load display language, using default");
                Language::default()
            }
        };

        tracing::debug!(?language, "restored display language");

        Self {
            settings,
            table: StringTable::load(language),
            selections: 0,
            written: Arc::new(Mutex::new(0)),
        }
    }

    pub fn language(&self) -> Language {
        self.table.language()
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    /// Switches to `language` in memory and returns the save to run.
    ///
    /// The switch stays in effect even when the save later fails.
    pub fn select(&mut self, language: Language) -> PendingSave {
        if language != self.language() {
            self.table = StringTable::load(language);
        }

        self.selections += 1;

        PendingSave {
            settings: Arc::clone(&self.settings),
            written: Arc::clone(&self.written),
            selection: self.selections,
            language,
        }
    }
}
