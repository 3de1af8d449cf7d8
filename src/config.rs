//! Plugin and build configuration
//!
//! Options come from the `adr-toc` entry of the site's `mkdocs.yml`:
//!
//! ```yaml
//! docs_dir: docs
//! plugins:
//!   - search
//!   - adr-toc:
//!       adr_path: decisions
//!       toc_file: index.md
//!       placeholder: "<!-- ADR_SUMMARY_PLACEHOLDER -->"
//!       sort: lexical
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;

use crate::adr::SortOrder;
use crate::error::{AdrTocError, Result};

/// Name of the plugin entry under `plugins:`
pub const PLUGIN_NAME: &str = "adr-toc";

/// Site config file looked up when none is given
pub const DEFAULT_CONFIG_FILE: &str = "mkdocs.yml";

/// Docs root used when the site config does not set `docs_dir`
pub const DEFAULT_DOCS_DIR: &str = "docs";

pub const DEFAULT_TOC_FILE: &str = "index.md";
pub const DEFAULT_PLACEHOLDER: &str = "<!-- ADR_SUMMARY_PLACEHOLDER -->";
pub const DEFAULT_ADR_PATH: &str = "decisions";

/// Options of the ADR summary plugin
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdrTocConfig {
    /// Document holding the placeholder, relative to the ADR directory
    pub toc_file: String,
    /// Literal token replaced by the summary
    pub placeholder: String,
    /// ADR directory relative to the docs root; also the link prefix
    pub adr_path: String,
    /// Ordering of decision numbers
    pub sort: SortOrder,
}

impl Default for AdrTocConfig {
    fn default() -> Self {
        Self {
            toc_file: DEFAULT_TOC_FILE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            adr_path: DEFAULT_ADR_PATH.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl AdrTocConfig {
    /// Directory scanned for ADRs.
    pub fn adr_dir(&self, docs_dir: &Path) -> PathBuf {
        docs_dir.join(&self.adr_path)
    }

    /// On-disk path of the table-of-contents document.
    pub fn toc_path(&self, docs_dir: &Path) -> PathBuf {
        self.adr_dir(docs_dir).join(&self.toc_file)
    }

    /// Page source path the page hook rewrites, `/` separated.
    ///
    /// Summary links are `<adr_path>/<file>`, so they resolve from a page at
    /// the docs root; the page hook therefore matches `toc_file` as given.
    pub fn toc_src_path(&self) -> String {
        normalize_src_path(&self.toc_file)
    }
}

/// Build-wide settings handed to the plugin hooks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Documentation root
    pub docs_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }
}

/// Everything read from the site config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub build: BuildConfig,
    pub plugin: AdrTocConfig,
}

impl SiteConfig {
    /// Parses site config YAML. A relative `docs_dir` is resolved against `base_dir`.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self> {
        let doc: Value = serde_yaml::from_str(content)?;

        let docs_dir = match doc.get("docs_dir") {
            None | Some(Value::Null) => PathBuf::from(DEFAULT_DOCS_DIR),
            Some(Value::String(s)) => PathBuf::from(s),
            Some(other) => {
                return Err(AdrTocError::Config(format!(
                    "docs_dir must be a string, got {:?}",
                    other
                )))
            }
        };
        let docs_dir = if docs_dir.is_absolute() {
            docs_dir
        } else {
            base_dir.join(docs_dir)
        };

        let plugin = match find_plugin_options(&doc) {
            Some(Value::Null) | None => AdrTocConfig::default(),
            Some(options) => serde_yaml::from_value(options.clone()).map_err(|e| {
                AdrTocError::Config(format!("Invalid {} options: {}", PLUGIN_NAME, e))
            })?,
        };

        Ok(Self {
            build: BuildConfig { docs_dir },
            plugin,
        })
    }

    /// Loads the site config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AdrTocError::io(path, e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base_dir)
    }

    /// Loads the site config at `path`, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No site config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

/// Command-line overrides applied on top of the site config
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub docs_dir: Option<PathBuf>,
    pub adr_path: Option<String>,
    pub toc_file: Option<String>,
    pub placeholder: Option<String>,
    pub sort: Option<SortOrder>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut SiteConfig) {
        if let Some(docs_dir) = self.docs_dir {
            config.build.docs_dir = docs_dir;
        }
        if let Some(adr_path) = self.adr_path {
            config.plugin.adr_path = adr_path;
        }
        if let Some(toc_file) = self.toc_file {
            config.plugin.toc_file = toc_file;
        }
        if let Some(placeholder) = self.placeholder {
            config.plugin.placeholder = placeholder;
        }
        if let Some(sort) = self.sort {
            config.plugin.sort = sort;
        }
    }
}

/// Normalizes a page path to `/` separators without a leading `./` or `/`.
pub fn normalize_src_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    path.split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Finds the plugin's options in `plugins:`, which may be a list or a mapping.
/// Returns `Some(Value::Null)` when the plugin is enabled without options.
fn find_plugin_options(doc: &Value) -> Option<&Value> {
    static ENABLED: Value = Value::Null;

    match doc.get("plugins")? {
        Value::Sequence(items) => items.iter().find_map(|item| match item {
            Value::String(name) if name == PLUGIN_NAME => Some(&ENABLED),
            Value::Mapping(map) => map.get(PLUGIN_NAME),
            _ => None,
        }),
        Value::Mapping(map) => map.get(PLUGIN_NAME),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AdrTocConfig::default();
        assert_eq!(config.toc_file, "index.md");
        assert_eq!(config.placeholder, "<!-- ADR_SUMMARY_PLACEHOLDER -->");
        assert_eq!(config.adr_path, "decisions");
        assert_eq!(config.sort, SortOrder::Lexical);
    }

    #[test]
    fn test_paths() {
        let config = AdrTocConfig::default();
        assert_eq!(
            config.toc_path(Path::new("docs")),
            PathBuf::from("docs/decisions/index.md")
        );
        assert_eq!(config.toc_src_path(), "index.md");
    }

    #[test]
    fn test_parse_plugin_mapping_in_list() {
        let content = r#"
site_name: Architecture
docs_dir: site-docs
plugins:
  - search
  - adr-toc:
      adr_path: adr
      sort: numeric
"#;

        let config = SiteConfig::parse(content, Path::new("/project")).unwrap();

        assert_eq!(config.build.docs_dir, PathBuf::from("/project/site-docs"));
        assert_eq!(config.plugin.adr_path, "adr");
        assert_eq!(config.plugin.sort, SortOrder::Numeric);
        assert_eq!(config.plugin.toc_file, "index.md");
    }

    #[test]
    fn test_parse_bare_plugin_name() {
        let content = "plugins:\n  - adr-toc\n";
        let config = SiteConfig::parse(content, Path::new("")).unwrap();

        assert_eq!(config.build.docs_dir, PathBuf::from("docs"));
        assert_eq!(config.plugin, AdrTocConfig::default());
    }

    #[test]
    fn test_parse_plugins_as_mapping() {
        let content = r#"
plugins:
  search: {}
  adr-toc:
    toc_file: summary.md
"#;
        let config = SiteConfig::parse(content, Path::new("")).unwrap();
        assert_eq!(config.plugin.toc_file, "summary.md");
    }

    #[test]
    fn test_parse_ignores_unknown_tags() {
        let content = r#"
site_url: !ENV SITE_URL
plugins:
  - adr-toc:
      placeholder: "<!-- ADRS -->"
"#;
        let config = SiteConfig::parse(content, Path::new("")).unwrap();
        assert_eq!(config.plugin.placeholder, "<!-- ADRS -->");
    }

    #[test]
    fn test_parse_invalid_options() {
        let content = "plugins:\n  - adr-toc:\n      sort: sideways\n";
        let result = SiteConfig::parse(content, Path::new(""));
        assert!(matches!(result, Err(AdrTocError::Config(_))));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = SiteConfig::load_or_default(&temp_dir.path().join("mkdocs.yml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = SiteConfig::load(&temp_dir.path().join("mkdocs.yml"));
        assert!(matches!(result, Err(AdrTocError::Io { .. })));
    }

    #[test]
    fn test_load_resolves_docs_dir_next_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mkdocs.yml");
        fs::write(&path, "docs_dir: content\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.build.docs_dir, temp_dir.path().join("content"));
    }

    #[test]
    fn test_overrides() {
        let mut config = SiteConfig::default();
        ConfigOverrides {
            docs_dir: Some(PathBuf::from("other")),
            placeholder: Some("{{adrs}}".to_string()),
            sort: Some(SortOrder::Numeric),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.build.docs_dir, PathBuf::from("other"));
        assert_eq!(config.plugin.placeholder, "{{adrs}}");
        assert_eq!(config.plugin.sort, SortOrder::Numeric);
        assert_eq!(config.plugin.adr_path, "decisions");
    }

    #[test]
    fn test_normalize_src_path() {
        assert_eq!(normalize_src_path("./decisions//index.md"), "decisions/index.md");
        assert_eq!(normalize_src_path("decisions\\index.md"), "decisions/index.md");
        assert_eq!(normalize_src_path("/index.md"), "index.md");
    }
}
