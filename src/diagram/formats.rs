//! Output formats for extracted diagrams
//!
//! - listing: one line per figure, for reading diagrams in a terminal
//! - json / yaml: the canvas size and figure list, for renderers in other processes

pub mod listing;
pub mod registry;
pub mod structured;

pub use listing::{to_listing_str, ListingFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{DiagramDocument, JsonFormatter, YamlFormatter};
