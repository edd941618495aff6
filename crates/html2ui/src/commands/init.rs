//! Initialize html2ui in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing html2ui...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    // Sample page next to the config
    let pages_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("pages");
    fs::create_dir_all(&pages_dir).context("Failed to create pages directory")?;

    let index_path = pages_dir.join("index.html");
    if !index_path.exists() || yes {
        fs::write(&index_path, DEFAULT_INDEX).context("Failed to write index.html")?;
        tracing::info!("Created {}", index_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'html2ui build' to convert the pages.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# html2ui Configuration

[convert]
# Component modules, searched in order
modules = ["html", "core"]

# Wrap converted nodes in a root Div
parent_container = true

# warn, raise or ignore
on_missing_element = "warn"
on_missing_attribute = "warn"

# Map a tag to a specific component, with optional preset props
# [elements.h1]
# component = "core.Title"
# props = { order = 1 }

[batch]
# Directory of .html/.htm (and .md) pages
input = "pages"

# Directory the JSON trees are written to
output = "dist"

# Also convert Markdown pages
markdown = false

# Pretty-print JSON
pretty = true
"#;

const DEFAULT_INDEX: &str = r#"<div class="page">
  <h1>Welcome</h1>
  <p>This page converts to a component tree.</p>
  <dropdown id="choice" options='[{"label": "One", "value": 1}]'></dropdown>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{load_config, ConvertOverrides};
    use html2ui_core::Converter;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_loadable_config_and_page() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("html2ui.toml");

        run(&config_path, false).await.unwrap();

        let config = load_config(&config_path).unwrap();
        let settings = config.settings(ConvertOverrides::default()).unwrap();
        assert_eq!(config.batch.input, "pages");

        let page = fs::read_to_string(temp.path().join("pages").join("index.html")).unwrap();
        let converted = Converter::new(settings).convert(&page).unwrap();
        // Root, div, h1, p, dropdown
        assert_eq!(converted.component_count(), 5);
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("html2ui.toml");
        fs::write(&config_path, "# mine").unwrap();

        run(&config_path, false).await.unwrap();
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "# mine");

        run(&config_path, true).await.unwrap();
        assert!(fs::read_to_string(&config_path).unwrap().contains("[convert]"));
    }
}
