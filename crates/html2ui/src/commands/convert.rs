//! Single document conversion command.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use html2ui_core::Converter;
use html2ui_markup::markdown_to_html;

use crate::config::{load_config, ConvertOverrides};

/// What to convert and where the JSON goes.
#[derive(Debug)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub markdown: bool,
    pub compact: bool,
}

/// Run the convert command.
pub async fn run(config_path: &Path, overrides: ConvertOverrides, options: ConvertOptions) -> Result<()> {
    let settings = load_config(config_path)?.settings(overrides)?;

    let source = read_input(&options.input)?;
    let markdown = options.markdown || is_markdown(&options.input);
    let html = if markdown {
        markdown_to_html(&source)
    } else {
        source
    };

    let converted = Converter::new(settings)
        .convert(&html)
        .with_context(|| format!("Failed to convert {}", options.input.display()))?;
    tracing::debug!("Built {} components", converted.component_count());

    let json = if options.compact {
        serde_json::to_string(&converted)?
    } else {
        serde_json::to_string_pretty(&converted)?
    };

    match options.output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn is_markdown(input: &Path) -> bool {
    matches!(
        input.extension().and_then(|e| e.to_str()),
        Some("md" | "markdown")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_component_tree() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("page.md");
        let output = temp.path().join("page.json");
        fs::write(&input, "# Hello\n\n<blink>x</blink>").unwrap();

        run(
            &temp.path().join("html2ui.toml"),
            ConvertOverrides {
                parent_container: Some(false),
                ..Default::default()
            },
            ConvertOptions {
                input,
                output: Some(output.clone()),
                markdown: false,
                compact: true,
            },
        )
        .await
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value[0]["type"], "H1");
        assert_eq!(value[0]["props"]["children"][0], "Hello");
    }

    #[tokio::test]
    async fn raise_policy_fails_the_command() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("page.html");
        fs::write(&input, "<blink>x</blink>").unwrap();

        let err = run(
            &temp.path().join("html2ui.toml"),
            ConvertOverrides {
                on_missing_element: Some(html2ui_core::Policy::Raise),
                ..Default::default()
            },
            ConvertOptions {
                input,
                output: Some(temp.path().join("page.json")),
                markdown: false,
                compact: false,
            },
        )
        .await
        .unwrap_err();

        assert!(format!("{err:#}").contains("'blink'"));
    }

    #[test]
    fn detects_markdown_by_extension() {
        assert!(is_markdown(Path::new("notes.md")));
        assert!(!is_markdown(Path::new("index.html")));
        assert!(!is_markdown(Path::new("-")));
    }
}
