//! Formatter lookup
//!
//! Every output format implements [`Formatter`]. The CLI picks one by name from a
//! [`FormatRegistry`], which keeps its formatters ordered by name so listings and
//! error messages come out the same on every run.

use super::{JsonFormatter, ListingFormatter, YamlFormatter};
use crate::diagram::Diagram;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("unknown format '{0}'")]
    UnknownFormat(String),
    #[error("cannot serialize diagram: {0}")]
    Serialization(String),
}

/// An output format for extracted diagrams.
pub trait Formatter: Send + Sync {
    /// Name the format is selected by, e.g. `json`.
    fn name(&self) -> &str;

    /// One-line summary shown by `--list-formats`.
    fn description(&self) -> &str;

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError>;
}

#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listing, json and yaml formats, all drawing on a canvas of `cell_size`.
    pub fn builtin(cell_size: f64, pretty: bool) -> Self {
        let mut registry = Self::new();
        registry.register(ListingFormatter::new(cell_size));
        registry.register(JsonFormatter::new(pretty, cell_size));
        registry.register(YamlFormatter::new(cell_size));
        registry
    }

    /// Adds `formatter`, replacing whatever was registered under its name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|formatter| formatter.as_ref())
    }

    /// Registered formats in name order.
    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.values().map(|formatter| formatter.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    pub fn serialize(&self, diagram: &Diagram, format: &str) -> Result<String, FormatError> {
        self.get(format)
            .ok_or_else(|| FormatError::UnknownFormat(format.to_string()))?
            .serialize(diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shout;

    impl Formatter for Shout {
        fn name(&self) -> &str {
            "shout"
        }

        fn description(&self) -> &str {
            "Figure count in capitals"
        }

        fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
            Ok(format!("{} FIGURES", diagram.figures().len()))
        }
    }

    #[test]
    fn test_builtin_formats_are_sorted() {
        let registry = FormatRegistry::builtin(20.0, true);
        assert_eq!(registry.names(), vec!["json", "listing", "yaml"]);

        let described: Vec<_> = registry.formatters().map(|f| f.name()).collect();
        assert_eq!(described, registry.names());
    }

    #[test]
    fn test_serialize_by_name() {
        let mut registry = FormatRegistry::new();
        registry.register(Shout);

        let diagram = Diagram::parse("-- a");
        assert_eq!(registry.serialize(&diagram, "shout").unwrap(), "2 FIGURES");
        assert_eq!(
            registry.get("shout").map(|f| f.description()),
            Some("Figure count in capitals")
        );
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::builtin(20.0, true);
        let err = registry.serialize(&Diagram::parse(""), "svg").unwrap_err();

        assert_eq!(err, FormatError::UnknownFormat("svg".to_string()));
        assert_eq!(err.to_string(), "unknown format 'svg'");
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = FormatRegistry::builtin(20.0, true);
        registry.register(JsonFormatter::new(false, 10.0));

        assert_eq!(registry.names().len(), 3);
        let json = registry.serialize(&Diagram::parse(""), "json").unwrap();
        assert!(!json.contains('\n'));
    }
}
