use std::ffi::OsString;
use std::path::PathBuf;

pub const WINDOW_SIZE: (f32, f32) = (960.0, 900.0);
pub const MIN_WINDOW_SIZE: (f32, f32) = (640.0, 600.0);

const QUALIFIER: &str = "io.github";
const ORGANIZATION: &str = "base64-converter";
const APPLICATION: &str = "Base64 Converter";

/// Overrides the directory holding `settings.json`.
pub const DATA_DIR_ENV: &str = "BASE64_CONVERTER_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(DATA_DIR_ENV))
    }

    fn resolve(data_dir: Option<OsString>) -> Self {
        let data_dir = match data_dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir(),
        };

        Self { data_dir }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(project_dirs) = directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        project_dirs.data_dir().into()
    } else {
        std::env::current_dir().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let config = Config::resolve(Some(OsString::from("/tmp/b64")));

        assert_eq!(config.data_dir, PathBuf::from("/tmp/b64"));
        assert_eq!(config.settings_path(), PathBuf::from("/tmp/b64/settings.json"));
    }

    #[test]
    fn empty_override_uses_default() {
        assert_eq!(Config::resolve(Some(OsString::new())), Config::resolve(None));
        assert!(Config::resolve(None).settings_path().ends_with("settings.json"));
    }

    #[test]
    fn default_dir_belongs_to_this_app() {
        let Some(dirs) = directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) else {
            return;
        };

        let data_dir = Config::resolve(None).data_dir;
        assert_eq!(data_dir, dirs.data_dir());
        assert!(!data_dir.to_string_lossy().contains("Iced"));
        assert!(data_dir.to_string_lossy().to_lowercase().contains("base64"));
    }
}
