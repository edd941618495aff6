//! HTML to UI component tree conversion.
//!
//! This crate resolves HTML tags against registries of component constructors,
//! normalizes attributes into the keyword conventions component frameworks
//! expect, and builds the component tree bottom-up.

pub mod attrs;
pub mod component;
pub mod convert;
pub mod registry;
pub mod settings;
pub mod traits;
pub mod vocab;

pub use attrs::{fix_hyphenated, normalize_attrs, parse_style};
pub use component::{Child, Component, PropValue, Props};
pub use convert::{html_to_components, ConvertError, Converted, Converter};
pub use registry::ComponentRegistry;
pub use settings::{ConvertSettings, Policy, PolicyParseError};
pub use traits::{ComponentFactory, ComponentModule, ConstructError, Preset};
pub use vocab::{builtin_module, CoreModule, HtmlModule};
