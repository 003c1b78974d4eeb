//! PPTX (Office Open XML) support for certification decks.
//!
//! Writes a [`certdeck_core::Deck`] as a .pptx package (a ZIP archive of XML
//! parts) and reads written packages back into a text outline.

pub mod parser;
mod template;
pub mod writer;
pub mod xml;

pub use parser::PptxReader;
pub use writer::PptxWriter;
