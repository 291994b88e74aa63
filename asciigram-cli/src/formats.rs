//! CLI-specific format setup
//!
//! Cell size and JSON layout come from the loaded configuration.

use asciigram::diagram::formats::FormatRegistry;
use asciigram::diagram::loader::DiagramLoader;
use asciigram_config::AsciigramConfig;

/// Registry with every built-in format configured from `config`
pub fn configured_registry(config: &AsciigramConfig) -> FormatRegistry {
    FormatRegistry::builtin(config.canvas.cell_size, config.output.pretty)
}

/// Load a diagram file and serialize its figures in the named format
pub fn convert_file(
    registry: &FormatRegistry,
    path: &str,
    format: &str,
) -> Result<String, String> {
    if registry.get(format).is_none() {
        return Err(format!(
            "Unknown format '{}' (available: {})",
            format,
            registry.names().join(", ")
        ));
    }

    let diagram = DiagramLoader::from_path(path)
        .map_err(|e| e.to_string())?
        .parse();
    tracing::info!(
        path,
        format,
        figures = diagram.figures().len(),
        "converted diagram"
    );

    registry
        .serialize(&diagram, format)
        .map_err(|e| format!("cannot render diagram: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_follows_config() {
        let config = asciigram_config::Loader::new()
            .set_override("output.pretty", false)
            .unwrap()
            .build()
            .unwrap();
        let registry = configured_registry(&config);
        let diagram = asciigram::Diagram::parse("--");

        let json = registry.serialize(&diagram, "json").unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_unknown_format_is_rejected_before_reading() {
        let config = asciigram_config::load_defaults().unwrap();
        let registry = configured_registry(&config);

        let err = convert_file(&registry, "/nonexistent.txt", "svg").unwrap_err();
        assert!(err.starts_with("Unknown format 'svg'"));
        assert!(err.contains("json, listing, yaml"));
    }
}
