//! JSON and YAML formatters
//!
//! Both serialize the same document: the canvas a renderer has to allocate and the
//! figure list in extraction order.
//!
//! ```json
//! {
//!   "canvas": { "width": 90.0, "height": 30.0 },
//!   "figures": [
//!     { "kind": "line", "x0": 0, "y0": 0, "start": null, "x1": 3, "y1": 0, "end": null, "color": "" }
//!   ]
//! }
//! ```

use super::registry::{FormatError, Formatter};
use crate::diagram::figure::Figure;
use crate::diagram::{CanvasSize, Diagram, DEFAULT_CELL_SIZE};
use serde::Serialize;

/// Serializable view of a diagram.
#[derive(Debug, Serialize)]
pub struct DiagramDocument<'a> {
    pub canvas: CanvasSize,
    pub figures: &'a [Figure],
}

impl<'a> DiagramDocument<'a> {
    pub fn new(diagram: &'a Diagram, cell_size: f64) -> Self {
        DiagramDocument {
            canvas: diagram.canvas(cell_size),
            figures: diagram.figures(),
        }
    }
}

/// Formatter implementation for JSON
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter {
    pretty: bool,
    cell_size: f64,
}

impl JsonFormatter {
    pub fn new(pretty: bool, cell_size: f64) -> Self {
        JsonFormatter { pretty, cell_size }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(true, DEFAULT_CELL_SIZE)
    }
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
        let document = DiagramDocument::new(diagram, self.cell_size);
        let result = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        };
        result.map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Canvas size and figures as JSON"
    }
}

/// Formatter implementation for YAML
#[derive(Debug, Clone, Copy)]
pub struct YamlFormatter {
    cell_size: f64,
}

impl YamlFormatter {
    pub fn new(cell_size: f64) -> Self {
        YamlFormatter { cell_size }
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, diagram: &Diagram) -> Result<String, FormatError> {
        serde_yaml::to_string(&DiagramDocument::new(diagram, self.cell_size))
            .map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "Canvas size and figures as YAML"
    }
}
