//! The fixed French certification decks.
//!
//! Each deck is literal content: a known filename, a slide count announced
//! when it is saved, and a `build()` that lays the slides out in memory.

pub mod bloc2_enhanced;
pub mod bloc4;
pub mod bloc4_enhanced;
mod shared;

use certdeck_core::{Deck, Error};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the fixed decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckId {
    /// Bloc 4 on the standard title/content layouts.
    Bloc4Maintenance,
    /// Bloc 4 in the styled widescreen layout.
    Bloc4Enhanced,
    /// Bloc 2 in the styled widescreen layout.
    Bloc2Enhanced,
}

impl DeckId {
    /// Every deck, in generation order.
    pub const ALL: [DeckId; 3] = [
        DeckId::Bloc4Maintenance,
        DeckId::Bloc4Enhanced,
        DeckId::Bloc2Enhanced,
    ];

    /// Short name used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            DeckId::Bloc4Maintenance => "bloc4",
            DeckId::Bloc4Enhanced => "bloc4-enhanced",
            DeckId::Bloc2Enhanced => "bloc2-enhanced",
        }
    }

    /// Output filename, written to the target directory.
    pub fn filename(self) -> &'static str {
        match self {
            DeckId::Bloc4Maintenance => bloc4::FILENAME,
            DeckId::Bloc4Enhanced => bloc4_enhanced::FILENAME,
            DeckId::Bloc2Enhanced => bloc2_enhanced::FILENAME,
        }
    }

    /// Slide count announced in the banner.
    pub fn announced_slides(self) -> usize {
        match self {
            DeckId::Bloc4Maintenance => bloc4::SLIDE_COUNT,
            DeckId::Bloc4Enhanced => bloc4_enhanced::SLIDE_COUNT,
            DeckId::Bloc2Enhanced => bloc2_enhanced::SLIDE_COUNT,
        }
    }

    /// Name of the deck in the "created" message.
    pub fn success_title(self) -> &'static str {
        match self {
            DeckId::Bloc4Maintenance => "Présentation",
            DeckId::Bloc4Enhanced => "Présentation améliorée",
            DeckId::Bloc2Enhanced => "Présentation Bloc 2 améliorée",
        }
    }

    /// Lines printed after a successful save.
    pub fn banner(self) -> Vec<String> {
        let slides = self.announced_slides();
        match self {
            DeckId::Bloc4Maintenance => vec![
                "🎉 Présentation PowerPoint générée avec succès !".to_string(),
                format!("📊 Contenu : {} slides couvrant tous les critères du Bloc 4", slides),
                "🎯 Prêt pour votre présentation de certification".to_string(),
            ],
            DeckId::Bloc4Enhanced => vec![
                "🎉 Présentation PowerPoint améliorée générée avec succès !".to_string(),
                format!("📊 Contenu : {} slides avec style professionnel", slides),
                STYLE_LINE.to_string(),
                "🎯 Prêt pour votre présentation de certification".to_string(),
            ],
            DeckId::Bloc2Enhanced => vec![
                "🎉 Présentation PowerPoint Bloc 2 améliorée générée avec succès !".to_string(),
                format!("📊 Contenu : {} slides avec style professionnel", slides),
                STYLE_LINE.to_string(),
                "🎯 Prêt pour votre présentation de certification Bloc 2".to_string(),
            ],
        }
    }

    /// Build the deck in memory.
    pub fn build(self) -> Deck {
        let deck = match self {
            DeckId::Bloc4Maintenance => bloc4::build(),
            DeckId::Bloc4Enhanced => bloc4_enhanced::build(),
            DeckId::Bloc2Enhanced => bloc2_enhanced::build(),
        };
        log::debug!("Built {} with {} slides", self, deck.slide_count());
        deck
    }
}

const STYLE_LINE: &str =
    "🎨 Améliorations : Couleurs cohérentes, formes décoratives, mise en page optimisée";

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeckId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeckId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = DeckId::ALL.iter().map(|id| id.as_str()).collect();
                Error::InvalidDeck(format!(
                    "unknown deck '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certdeck_core::{Bounds, Shape, SlideSize};
    use certdeck_pptx::{PptxReader, PptxWriter};
    use std::io::Cursor;

    #[test]
    fn test_parse_deck_ids() {
        assert_eq!("bloc4".parse::<DeckId>().unwrap(), DeckId::Bloc4Maintenance);
        assert_eq!(
            "Bloc2-Enhanced".parse::<DeckId>().unwrap(),
            DeckId::Bloc2Enhanced
        );
        assert!(matches!(
            "bloc3".parse::<DeckId>(),
            Err(Error::InvalidDeck(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for id in DeckId::ALL {
            assert_eq!(id.to_string().parse::<DeckId>().unwrap(), id);
        }
    }

    #[test]
    fn test_announced_counts_match_built_decks() {
        for id in DeckId::ALL {
            assert_eq!(id.build().slide_count(), id.announced_slides(), "{}", id);
        }
    }

    #[test]
    fn test_filenames_are_distinct_pptx() {
        let names: Vec<&str> = DeckId::ALL.iter().map(|id| id.filename()).collect();
        assert!(names.iter().all(|n| n.ends_with(".pptx")));
        assert_ne!(names[0], names[1]);
        assert_ne!(names[1], names[2]);
    }

    #[test]
    fn test_banner_announces_count() {
        let banner = DeckId::Bloc2Enhanced.banner();
        assert_eq!(banner.len(), 4);
        assert_eq!(banner[1], "📊 Contenu : 13 slides avec style professionnel");
        assert_eq!(DeckId::Bloc4Maintenance.banner().len(), 3);
    }

    #[test]
    fn test_written_decks_read_back() {
        let writer = PptxWriter::new();
        for id in DeckId::ALL {
            let deck = id.build();
            let bytes = writer.to_bytes(&deck).unwrap();
            let outline = PptxReader::new()
                .read(Cursor::new(bytes), id.filename())
                .unwrap();
            assert_eq!(outline.slide_count(), id.announced_slides(), "{}", id);
            assert!(outline.contains_text("Questions et Réponses"));
        }
    }

    #[test]
    fn test_styled_decks_fit_widescreen_slides() {
        for id in [DeckId::Bloc4Enhanced, DeckId::Bloc2Enhanced] {
            let deck = id.build();
            assert_eq!(deck.slide_size, SlideSize::WIDESCREEN_16_9);

            let bounds: Vec<Bounds> = deck
                .slides
                .iter()
                .flat_map(|slide| slide.shapes.iter())
                .filter_map(|shape| match shape {
                    Shape::TextBox { bounds, .. } => Some(*bounds),
                    Shape::Auto(auto) => Some(auto.bounds),
                    Shape::Placeholder { .. } => None,
                })
                .collect();

            let right = bounds.iter().map(|b| b.x + b.width).max().unwrap();
            let bottom = bounds.iter().map(|b| b.y + b.height).max().unwrap();
            assert!(right <= deck.slide_size.width, "{}", id);
            assert!(bottom <= deck.slide_size.height, "{}", id);
            assert!(right > SlideSize::STANDARD_4_3.width, "{}", id);
        }
    }

    #[test]
    fn test_tables_survive_writing() {
        let deck = DeckId::Bloc4Enhanced.build();
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let outline = PptxReader::new().read(Cursor::new(bytes), "t.pptx").unwrap();
        assert!(outline.contains_text("│ Base de données │Trimestrielle│   Manuel    │   DevOps    │"));
    }
}
