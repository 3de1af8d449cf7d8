use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use adr_toc::config::DEFAULT_CONFIG_FILE;
use adr_toc::error::{AdrTocError, Result};
use adr_toc::{
    AdrScanner, AdrTocPlugin, BuildPlugin, ConfigOverrides, Page, SiteConfig, SortOrder,
    SubstituteOutcome,
};

#[derive(Parser)]
#[command(name = "adr-toc")]
#[command(about = "Inject an Architecture Decision Record summary table into a docs site")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Replace the placeholder in docs/decisions/index.md before building
    adr-toc pre-build

    # Rewrite a single page's markdown (stdin -> stdout)
    adr-toc page --src-path index.md < docs/decisions/index.md

    # Print the summary table
    adr-toc render --docs-dir site/docs

    # List parsed ADRs as JSON, numbers sorted numerically
    adr-toc list --format json --sort numeric
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the site config (mkdocs.yml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Documentation root (overrides docs_dir from the site config)
    #[arg(long, global = true)]
    pub docs_dir: Option<PathBuf>,

    /// ADR directory relative to the docs root
    #[arg(long, global = true)]
    pub adr_path: Option<String>,

    /// Document holding the placeholder, relative to the ADR directory
    #[arg(long, global = true)]
    pub toc_file: Option<String>,

    /// Placeholder token replaced by the summary
    #[arg(long, global = true)]
    pub placeholder: Option<String>,

    /// Ordering of decision numbers (lexical or numeric)
    #[arg(long, global = true, value_parser = parse_sort_order)]
    pub sort: Option<SortOrder>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the placeholder in the table-of-contents file on disk
    PreBuild,

    /// Rewrite one page's markdown and print it
    Page {
        /// Page source path relative to the docs root
        #[arg(long)]
        src_path: String,

        /// Read the page markdown from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print the rendered summary table
    Render,

    /// List the ADRs found in the ADR directory
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn parse_sort_order(s: &str) -> std::result::Result<SortOrder, String> {
    SortOrder::from_str(s)
        .ok_or_else(|| format!("unknown sort order '{}' (expected lexical or numeric)", s))
}

impl Cli {
    /// Resolves the site config and applies command-line overrides.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let mut site = match &self.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
        };

        ConfigOverrides {
            docs_dir: self.docs_dir.clone(),
            adr_path: self.adr_path.clone(),
            toc_file: self.toc_file.clone(),
            placeholder: self.placeholder.clone(),
            sort: self.sort,
        }
        .apply(&mut site);

        Ok(site)
    }
}

pub fn pre_build(site: &SiteConfig) -> Result<()> {
    let plugin = AdrTocPlugin::new(site.plugin.clone());
    let toc_path = plugin.config().toc_path(&site.build.docs_dir);

    match plugin.update_toc_file(&site.build)? {
        SubstituteOutcome::Replaced => println!("Updated {}", toc_path.display()),
        SubstituteOutcome::PlaceholderAbsent => {
            println!("No placeholder in {}, left unchanged", toc_path.display())
        }
        SubstituteOutcome::TargetMissing => println!("Skipped: {} not found", toc_path.display()),
    }

    Ok(())
}

pub fn page(site: &SiteConfig, src_path: &str, input: Option<&Path>) -> Result<()> {
    let markdown = match input {
        Some(path) => fs::read_to_string(path).map_err(|e| AdrTocError::io(path, e))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| AdrTocError::io("<stdin>", e))?;
            buf
        }
    };

    let plugin = AdrTocPlugin::new(site.plugin.clone());
    let output = plugin.on_page_markdown(markdown, &Page::new(src_path), &site.build)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| AdrTocError::io("<stdout>", e))?;

    Ok(())
}

pub fn render(site: &SiteConfig) -> Result<()> {
    let adr_dir = site.plugin.adr_dir(&site.build.docs_dir);
    let summary = adr_toc::build_summary(&adr_dir, &site.plugin)?;
    print!("{}", summary);
    Ok(())
}

pub fn list(site: &SiteConfig, format: &str) -> Result<()> {
    let adr_dir = site.plugin.adr_dir(&site.build.docs_dir);
    let outcome = AdrScanner::new(site.plugin.sort).scan(&adr_dir)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&outcome.records)?);
        return Ok(());
    }

    if outcome.records.is_empty() {
        println!("No ADRs found in {}", adr_dir.display());
    }

    for record in &outcome.records {
        println!(
            "{} {} [{}] {} - {}",
            record.number, record.title, record.status, record.date, record.deciders
        );
    }

    for path in &outcome.skipped {
        println!("Skipped (no title): {}", path.display());
    }

    Ok(())
}
