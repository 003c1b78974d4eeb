//! Core deck model, units, theme palette and layout helpers for the
//! certification slide decks.

pub mod color;
pub mod error;
pub mod layout;
pub mod model;
pub mod text;
pub mod types;
pub mod units;

pub use color::{Rgb, Theme};
pub use error::{Error, Result};
pub use model::{
    Alignment, AutoShape, Deck, Fill, Font, Geometry, Layout, Line, Paragraph, PlaceholderKind,
    Shape, Slide, TextFrame,
};
pub use types::{DeckOutline, SlideOutline, SlideText};
pub use units::{inches, points, pt, Bounds, Emu, FontSize, SlideSize};
