//! # asciigram
//!
//! Turns a monospace ASCII-art drawing into a list of figures (straight lines and
//! text labels) in grid coordinates, ready to be handed to a renderer.
//!
//! File Layout
//!
//! src/diagram
//!   ├── grid       The mutable character matrix the extractor works on
//!   ├── glyphs     Classification of the characters that carry meaning
//!   ├── figure     The output model (Line, Text, Figure)
//!   ├── lines      Line extraction (erases what it recognises)
//!   ├── text       Text extraction over whatever the lines left behind
//!   ├── canvas     Grid to canvas coordinates for renderers
//!   ├── loader     Reading diagram files, listing and saving
//!   ├── formats    Output formats (listing, json, yaml)
//!   └── testing    Fluent assertions over figure lists
//!
//! The entry point is [`extract_figures`](diagram::extract_figures), or
//! [`Diagram::parse`](diagram::Diagram::parse) when the canvas geometry is needed too.
//!
//! For testing guidelines, see the [testing module](diagram::testing).

pub mod diagram;

pub use diagram::{extract_figures, Diagram, Figure};
