//! Outline of a written deck, as read back from the package.

use serde::{Deserialize, Serialize};

/// The text of a deck file, slide by slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckOutline {
    /// Filename (without path) the outline was read from.
    pub filename: String,

    /// Slides in presentation order.
    pub slides: Vec<SlideOutline>,
}

impl DeckOutline {
    /// Create an empty outline for the given filename.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            slides: Vec::new(),
        }
    }

    /// Add a slide to the outline.
    pub fn add_slide(&mut self, slide: SlideOutline) {
        self.slides.push(slide);
    }

    /// Number of slides read.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Whether any shape on any slide contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.slides
            .iter()
            .flat_map(|s| s.lines.iter())
            .any(|l| l.text.contains(needle))
    }
}

/// Text of a single slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideOutline {
    /// 1-based slide number.
    pub number: usize,

    /// Shape texts, in reading order once sorted.
    pub lines: Vec<SlideText>,
}

impl SlideOutline {
    /// Create an empty slide outline with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            lines: Vec::new(),
        }
    }

    /// Add shape text without position information.
    pub fn add_line(&mut self, text: impl Into<String>) {
        self.lines.push(SlideText::new(text));
    }

    /// Add shape text with its offset on the slide.
    pub fn add_line_with_position(&mut self, text: impl Into<String>, y: f64, x: f64) {
        self.lines.push(SlideText::with_position(text, y, x));
    }

    /// Sort shape texts top-to-bottom, then left-to-right.
    ///
    /// Texts without a position (inherited from the layout) sort first.
    pub fn sort_by_position(&mut self) {
        self.lines.sort_by(|a, b| {
            let y_cmp = a
                .y_position
                .partial_cmp(&b.y_position)
                .unwrap_or(std::cmp::Ordering::Equal);
            if y_cmp == std::cmp::Ordering::Equal {
                a.x_position
                    .partial_cmp(&b.x_position)
                    .unwrap_or(std::cmp::Ordering::Equal)
            } else {
                y_cmp
            }
        });
    }

    /// First line of text, usually the slide title.
    pub fn heading(&self) -> Option<&str> {
        self.lines
            .iter()
            .map(|l| l.text.lines().next().unwrap_or(""))
            .find(|s| !s.trim().is_empty())
    }
}

/// Text content of one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideText {
    /// Paragraphs joined with newlines.
    pub text: String,

    /// Y offset in EMU. None if inherited from the layout.
    pub y_position: Option<f64>,

    /// X offset in EMU. None if inherited from the layout.
    pub x_position: Option<f64>,
}

impl SlideText {
    /// Create slide text without position info.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            y_position: None,
            x_position: None,
        }
    }

    /// Create slide text with position info.
    pub fn with_position(text: impl Into<String>, y: f64, x: f64) -> Self {
        Self {
            text: text.into(),
            y_position: Some(y),
            x_position: Some(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_position() {
        let mut slide = SlideOutline::new(1);
        slide.add_line_with_position("droite", 2.0, 7.0);
        slide.add_line_with_position("gauche", 2.0, 0.5);
        slide.add_line_with_position("titre", 0.5, 0.5);
        slide.sort_by_position();

        let texts: Vec<&str> = slide.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["titre", "gauche", "droite"]);
    }

    #[test]
    fn test_placeholders_sort_first() {
        let mut slide = SlideOutline::new(1);
        slide.add_line_with_position("box", 0.0, 0.0);
        slide.add_line("placeholder");
        slide.sort_by_position();
        assert_eq!(slide.lines[0].text, "placeholder");
    }

    #[test]
    fn test_heading_skips_blank() {
        let mut slide = SlideOutline::new(3);
        slide.add_line("\nC4.1.1 - Processus\nsuite");
        assert_eq!(slide.heading(), None);

        let mut slide = SlideOutline::new(3);
        slide.add_line("C4.1.1 - Processus\nsuite");
        assert_eq!(slide.heading(), Some("C4.1.1 - Processus"));
    }

    #[test]
    fn test_contains_text() {
        let mut outline = DeckOutline::new("deck.pptx");
        let mut slide = SlideOutline::new(1);
        slide.add_line("Questions et Réponses");
        outline.add_slide(slide);
        assert!(outline.contains_text("Réponses"));
        assert!(!outline.contains_text("Absent"));
        assert_eq!(outline.slide_count(), 1);
    }

    #[test]
    fn test_outline_json_round_trip() {
        let mut slide = SlideOutline::new(1);
        slide.add_line("Titre");
        slide.add_line_with_position("Corps", 1828800.0, 457200.0);
        let mut outline = DeckOutline::new("deck.pptx");
        outline.add_slide(slide);

        let json = serde_json::to_string(&outline).unwrap();
        let back: DeckOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slides[0].lines[0].y_position, None);
        assert_eq!(back.slides[0].lines[1].x_position, Some(457200.0));
    }
}
