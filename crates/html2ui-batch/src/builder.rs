//! Batch page converter.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use html2ui_core::{ConvertError, ConvertSettings, Converter};
use html2ui_markup::markdown_to_html;

/// Configuration for a batch conversion.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for pages
    pub input_dir: PathBuf,

    /// Directory the JSON trees are written to
    pub output_dir: PathBuf,

    /// Also convert `.md` pages
    pub markdown: bool,

    /// Pretty-print the JSON output
    pub pretty: bool,

    /// Conversion settings shared by every page
    pub settings: ConvertSettings,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("pages"),
            output_dir: PathBuf::from("dist"),
            markdown: false,
            pretty: true,
            settings: ConvertSettings::default(),
        }
    }
}

/// Result of a batch conversion.
#[derive(Debug)]
pub struct BatchResult {
    /// Number of pages converted
    pub documents: usize,

    /// Number of components built across all pages
    pub components: usize,

    /// Total conversion time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during a batch conversion.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Failed to read pages: {0}")]
    ReadError(String),

    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: String,
        #[source]
        source: ConvertError,
    },

    #[error("Failed to serialize {path}: {message}")]
    Serialize { path: String, message: String },

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("{first} and {second} would both be written to {output}")]
    DuplicateOutput {
        output: String,
        first: String,
        second: String,
    },
}

/// Source format of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageKind {
    Html,
    Markdown,
}

/// A page to be converted.
#[derive(Debug)]
struct PageInfo {
    source_path: PathBuf,
    output_path: PathBuf,
    kind: PageKind,
}

/// Converts every page under a directory with one shared converter.
pub struct BatchBuilder {
    config: BatchConfig,
    converter: Converter,
}

impl BatchBuilder {
    /// Create a new batch builder.
    pub fn new(config: BatchConfig) -> Self {
        let converter = Converter::new(config.settings.clone());
        Self { config, converter }
    }

    /// Convert all pages.
    pub async fn build(&self) -> Result<BatchResult, BatchError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BatchError::WriteError(e.to_string()))?;

        let pages = self.discover_pages()?;
        tracing::debug!("Discovered {} pages", pages.len());

        // The converter is shared; each page converts independently.
        let results: Vec<Result<usize, BatchError>> = pages
            .par_iter()
            .map(|page| self.convert_page(page))
            .collect();

        let mut components = 0;
        for result in results {
            components += result?;
        }

        let duration = start.elapsed();

        tracing::info!(
            "Converted {} pages ({} components) in {}ms",
            pages.len(),
            components,
            duration.as_millis()
        );

        Ok(BatchResult {
            documents: pages.len(),
            components,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Discover all pages in the input directory.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BatchError> {
        if !self.config.input_dir.exists() {
            return Err(BatchError::ReadError(format!(
                "Input directory not found: {}",
                self.config.input_dir.display()
            )));
        }

        let mut pages = Vec::new();
        let mut sources_by_output: HashMap<PathBuf, PathBuf> = HashMap::new();

        for entry in WalkDir::new(&self.config.input_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            let kind = match ext {
                "html" | "htm" => PageKind::Html,
                "md" if self.config.markdown => PageKind::Markdown,
                _ => continue,
            };

            let relative_path = path
                .strip_prefix(&self.config.input_dir)
                .unwrap_or(path);

            let output_path = self.output_path(relative_path);
            if let Some(first) = sources_by_output.insert(output_path.clone(), path.to_path_buf()) {
                return Err(BatchError::DuplicateOutput {
                    output: output_path.display().to_string(),
                    first: first.display().to_string(),
                    second: path.display().to_string(),
                });
            }

            pages.push(PageInfo {
                source_path: path.to_path_buf(),
                output_path,
                kind,
            });
        }

        Ok(pages)
    }

    /// `pages/guide/intro.html` -> `dist/guide/intro.json`
    fn output_path(&self, relative: &Path) -> PathBuf {
        self.config
            .output_dir
            .join(relative)
            .with_extension("json")
    }

    /// Convert one page and write its JSON tree. Returns the component count.
    fn convert_page(&self, page: &PageInfo) -> Result<usize, BatchError> {
        let path = page.source_path.display().to_string();

        let content = fs::read_to_string(&page.source_path)
            .map_err(|e| BatchError::ReadError(format!("{}: {}", path, e)))?;

        let html = match page.kind {
            PageKind::Html => content,
            PageKind::Markdown => markdown_to_html(&content),
        };

        let converted = self
            .converter
            .convert(&html)
            .map_err(|source| BatchError::Convert {
                path: path.clone(),
                source,
            })?;

        let json = if self.config.pretty {
            serde_json::to_string_pretty(&converted)
        } else {
            serde_json::to_string(&converted)
        }
        .map_err(|e| BatchError::Serialize {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if let Some(parent) = page.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BatchError::WriteError(e.to_string()))?;
        }
        fs::write(&page.output_path, json).map_err(|e| {
            BatchError::WriteError(format!("{}: {}", page.output_path.display(), e))
        })?;

        tracing::debug!("Wrote {}", page.output_path.display());

        Ok(converted.component_count())
    }
}
