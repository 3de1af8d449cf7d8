pub mod adr;
pub mod config;
pub mod error;
pub mod plugin;
pub mod summary;

pub use adr::{AdrRecord, AdrScanner, ScanOutcome, SortOrder};
pub use config::{AdrTocConfig, BuildConfig, ConfigOverrides, SiteConfig};
pub use error::{AdrTocError, Result};
pub use plugin::{AdrTocPlugin, BuildPlugin, Page};
pub use summary::{build_summary, substitute, substitute_file, SubstituteOutcome};
