use crate::error::Error;
use crate::html::{MetaEntry, TagAttributes};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "sitekit.json";

/// Build configuration loaded from `sitekit.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// HTML template with `${scripts}`/`${links}`/`${metas}`/`${title}` placeholders.
    pub template: PathBuf,

    /// Output directory the external bundler emits into.
    pub out_dir: PathBuf,

    /// Prefix prepended to every asset URL in the rendered HTML.
    #[serde(default)]
    pub public_path: String,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// `<meta>` tags, emitted in order.
    #[serde(default)]
    pub meta: Vec<MetaEntry>,

    /// Attributes applied to every emitted `<script>`/`<link>` tag.
    #[serde(default)]
    pub attributes: TagAttributes,

    /// Static asset copy targets.
    #[serde(default)]
    pub copy: Vec<CopyTarget>,
}

/// One copy target: a glob over the project root plus a destination directory
/// inside the output directory.
#[derive(Debug, Clone, Deserialize)]
pub struct CopyTarget {
    pub src: String,
    /// Relative to the output directory; empty means the output directory itself.
    #[serde(default)]
    pub dest: String,
}

impl BuildConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Build mode, passed explicitly into pipeline assembly.
///
/// Never read from ambient process state: the CLI flag is the single source,
/// which keeps assembly pure and testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_minimal_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"template":"src/index.html","outDir":"dist"}"#).unwrap();

        let config = BuildConfig::load(&path).unwrap();
        assert_eq!(config.template, PathBuf::from("src/index.html"));
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.public_path, "");
        assert!(config.meta.is_empty());
        assert!(config.copy.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"{
                "template": "src/index.html",
                "outDir": "dist",
                "publicPath": "/app/",
                "title": "App",
                "meta": [{"charset": "utf-8"}],
                "attributes": {"script": {"type": "module", "defer": true}},
                "copy": [{"src": "src/assets/**/*", "dest": "assets"}]
            }"#,
        )
        .unwrap();

        let config = BuildConfig::load(&path).unwrap();
        assert_eq!(config.public_path, "/app/");
        assert_eq!(config.title, "App");
        assert_eq!(config.meta.len(), 1);
        assert_eq!(config.attributes.script.to_html(), r#" type="module" defer"#);
        assert_eq!(config.copy[0].dest, "assets");
    }

    #[test]
    fn test_missing_config_is_read_error() {
        let dir = tempdir().unwrap();
        let err = BuildConfig::load(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert_eq!(err.code(), "CONFIG_READ_ERROR");
    }

    #[test]
    fn test_malformed_config_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{not json").unwrap();

        let err = BuildConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert_eq!(err.code(), "CONFIG_PARSE_ERROR");
    }

    #[test]
    fn test_mode_as_str() {
        assert_eq!(BuildMode::Development.as_str(), "development");
        assert_eq!(BuildMode::Production.as_str(), "production");
        assert!(BuildMode::Production.is_production());
        assert!(!BuildMode::Development.is_production());
    }
}
