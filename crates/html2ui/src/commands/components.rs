//! Component listing command.

use std::path::Path;

use anyhow::Result;
use html2ui_core::Converter;

use crate::config::{load_config, ConvertOverrides};

/// Run the components command.
pub async fn run(config_path: &Path) -> Result<()> {
    let settings = load_config(config_path)?.settings(ConvertOverrides::default())?;
    let converter = Converter::new(settings);

    for line in listing(&converter) {
        println!("{}", line);
    }

    Ok(())
}

/// Overrides first (`tag -> namespace.Name`), then module components in
/// search order (`namespace.Name`).
fn listing(converter: &Converter) -> Vec<String> {
    let registry = converter.registry();
    let mut lines = Vec::new();

    for tag in registry.override_tags() {
        if let Some(factory) = registry.resolve(tag) {
            lines.push(format!("{} -> {}.{}", tag, factory.namespace(), factory.name()));
        }
    }

    let overridden = registry.override_tags();
    for name in registry.names() {
        if overridden.contains(&name) {
            continue;
        }
        if let Some(factory) = registry.resolve(name) {
            lines.push(format!("{}.{}", factory.namespace(), factory.name()));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use html2ui_core::{ComponentModule, ConvertSettings, CoreModule};

    #[test]
    fn lists_overrides_then_modules() {
        let title = CoreModule.get("Title").unwrap();
        let converter = Converter::new(ConvertSettings::default().with_element("h1", title));
        let lines = listing(&converter);

        assert_eq!(lines[0], "h1 -> core.Title");
        assert_eq!(lines[1], "html.A");
        assert!(lines.contains(&"html.Div".to_string()));
        assert!(lines.contains(&"core.Dropdown".to_string()));
        // html wins the Input name, so the core widget is listed once.
        assert!(!lines.contains(&"core.Input".to_string()));
    }
}
