//! Writes the styled Bloc 2 deck to
//! `Presentation_Bloc2_Enhanced.pptx` in the current directory.

use certdeck_decks::DeckId;

fn main() {
    certdeck_cli::run_fixed(DeckId::Bloc2Enhanced);
}
