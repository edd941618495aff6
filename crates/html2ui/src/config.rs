//! Configuration file (html2ui.toml).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use html2ui_batch::BatchConfig;
use html2ui_core::{
    builtin_module, ComponentFactory, ComponentModule, ConvertSettings, Policy, Preset, PropValue,
    Props,
};

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub elements: BTreeMap<String, ElementConfig>,
    #[serde(default)]
    pub batch: BatchSettings,
}

#[derive(Debug, Deserialize)]
pub struct ConvertConfig {
    #[serde(default = "default_modules")]
    pub modules: Vec<String>,
    #[serde(default = "default_true")]
    pub parent_container: bool,
    #[serde(default)]
    pub on_missing_element: Policy,
    #[serde(default)]
    pub on_missing_attribute: Policy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            modules: default_modules(),
            parent_container: true,
            on_missing_element: Policy::default(),
            on_missing_attribute: Policy::default(),
        }
    }
}

/// A tag override: `component = "core.Title"`, optionally with preset props.
#[derive(Debug, Deserialize)]
pub struct ElementConfig {
    pub component: String,
    #[serde(default)]
    pub props: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct BatchSettings {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default)]
    pub markdown: bool,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            markdown: false,
            pretty: true,
        }
    }
}

fn default_modules() -> Vec<String> {
    vec!["html".to_string(), "core".to_string()]
}
fn default_true() -> bool {
    true
}
fn default_input() -> String {
    "pages".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertOverrides {
    pub parent_container: Option<bool>,
    pub on_missing_element: Option<Policy>,
    pub on_missing_attribute: Option<Policy>,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    tracing::debug!("No config at {}, using defaults", path.display());
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Build conversion settings from the file, applying `overrides`.
    pub fn settings(&self, overrides: ConvertOverrides) -> Result<ConvertSettings> {
        let modules = self
            .convert
            .modules
            .iter()
            .map(|name| {
                builtin_module(name).ok_or_else(|| anyhow!("Unknown component module '{}'", name))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut settings = ConvertSettings {
            modules,
            parent_container: overrides
                .parent_container
                .unwrap_or(self.convert.parent_container),
            on_missing_element: overrides
                .on_missing_element
                .unwrap_or(self.convert.on_missing_element),
            on_missing_attribute: overrides
                .on_missing_attribute
                .unwrap_or(self.convert.on_missing_attribute),
            ..Default::default()
        };

        for (tag, element) in &self.elements {
            let factory = element.factory(&settings.modules)?;
            settings = settings.with_element(tag.clone(), factory);
        }

        Ok(settings)
    }

    /// Batch configuration, with optional directory overrides.
    pub fn batch_config(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<BatchConfig> {
        Ok(BatchConfig {
            input_dir: input.unwrap_or_else(|| PathBuf::from(&self.batch.input)),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.batch.output)),
            markdown: self.batch.markdown,
            pretty: self.batch.pretty,
            settings: self.settings(ConvertOverrides::default())?,
        })
    }
}

impl ElementConfig {
    fn factory(&self, modules: &[Arc<dyn ComponentModule>]) -> Result<Arc<dyn ComponentFactory>> {
        let factory = resolve_component(&self.component, modules)?;
        if self.props.is_empty() {
            return Ok(factory);
        }

        let props: Props = self
            .props
            .iter()
            .map(|(key, value)| (key.clone(), PropValue::from(value.clone())))
            .collect();
        Ok(Arc::new(Preset::new(factory, props)))
    }
}

/// Resolve `module.Name`, or a bare `Name` searched through `modules` in order.
fn resolve_component(
    spec: &str,
    modules: &[Arc<dyn ComponentModule>],
) -> Result<Arc<dyn ComponentFactory>> {
    if let Some((module, name)) = spec.split_once('.') {
        let module =
            builtin_module(module).ok_or_else(|| anyhow!("Unknown component module '{}'", module))?;
        return module
            .get(name)
            .ok_or_else(|| anyhow!("Module '{}' has no component '{}'", module.name(), name));
    }

    match modules.iter().find_map(|m| m.get(spec)) {
        Some(factory) => Ok(factory),
        None => bail!("Could not find the component '{}' in any of the modules", spec),
    }
}
