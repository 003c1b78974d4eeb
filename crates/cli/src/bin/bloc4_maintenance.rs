//! Writes the Bloc 4 deck on the standard layouts to
//! `Presentation_Bloc4_Maintenance_Evolution.pptx` in the current directory.

use certdeck_decks::DeckId;

fn main() {
    certdeck_cli::run_fixed(DeckId::Bloc4Maintenance);
}
