//! Writes the styled Bloc 4 deck to
//! `Presentation_Bloc4_Enhanced.pptx` in the current directory.

use certdeck_decks::DeckId;

fn main() {
    certdeck_cli::run_fixed(DeckId::Bloc4Enhanced);
}
