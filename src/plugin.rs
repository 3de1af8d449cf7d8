//! Build hooks
//!
//! A static-site host drives the summary through two hooks: once before the
//! build against the table-of-contents file on disk, and again for every page
//! whose markdown is about to be rendered.

use crate::config::{normalize_src_path, AdrTocConfig, BuildConfig};
use crate::error::Result;
use crate::summary::{build_summary, substitute, substitute_file, SubstituteOutcome};

/// A page handed to the markdown hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Source path relative to the docs root
    pub src_path: String,
}

impl Page {
    pub fn new(src_path: impl Into<String>) -> Self {
        Self {
            src_path: src_path.into(),
        }
    }
}

/// Lifecycle hooks a site generator calls into
pub trait BuildPlugin {
    /// Runs once before the build starts.
    fn before_build(&self, config: &BuildConfig) -> Result<()>;

    /// Runs for each page and returns its (possibly rewritten) markdown.
    fn on_page_markdown(&self, markdown: String, page: &Page, config: &BuildConfig)
        -> Result<String>;
}

/// Injects the ADR summary table into the table-of-contents document
pub struct AdrTocPlugin {
    config: AdrTocConfig,
}

impl AdrTocPlugin {
    pub fn new(config: AdrTocConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdrTocConfig {
        &self.config
    }

    /// Disk adapter: rewrites the table-of-contents file in place.
    pub fn update_toc_file(&self, build: &BuildConfig) -> Result<SubstituteOutcome> {
        let adr_dir = self.config.adr_dir(&build.docs_dir);
        let summary = build_summary(&adr_dir, &self.config)?;

        let toc_path = self.config.toc_path(&build.docs_dir);
        substitute_file(&toc_path, &self.config.placeholder, &summary)
    }

    /// Whether `page` is the table-of-contents document.
    pub fn is_toc_page(&self, page: &Page) -> bool {
        normalize_src_path(&page.src_path) == self.config.toc_src_path()
    }
}

impl Default for AdrTocPlugin {
    fn default() -> Self {
        Self::new(AdrTocConfig::default())
    }
}

impl BuildPlugin for AdrTocPlugin {
    fn before_build(&self, config: &BuildConfig) -> Result<()> {
        self.update_toc_file(config).map(|_| ())
    }

    fn on_page_markdown(
        &self,
        markdown: String,
        page: &Page,
        config: &BuildConfig,
    ) -> Result<String> {
        if !self.is_toc_page(page) {
            return Ok(markdown);
        }

        tracing::debug!("Injecting ADR summary into page: {}", page.src_path);
        let adr_dir = self.config.adr_dir(&config.docs_dir);
        let summary = build_summary(&adr_dir, &self.config)?;

        Ok(substitute(&markdown, &self.config.placeholder, &summary))
    }
}
