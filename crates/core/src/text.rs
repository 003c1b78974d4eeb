//! Text splitting and monospace handling for tables and code blocks.
//!
//! Decks draw their tables with box-drawing characters and embed code between
//! Markdown fences. Those lines only line up in a fixed-width typeface.

use crate::model::{Paragraph, TextFrame};

/// Typeface applied to table and code lines.
pub const MONOSPACE_TYPEFACE: &str = "Consolas";

/// Characters that open a line of a box-drawn table or diagram.
const BOX_DRAWING_CHARS: &[char] = &[
    '┌', '┐', '└', '┘', '│', '├', '┤', '┬', '┴', '┼', '─', '▼',
];

/// Markdown code fence.
const FENCE: &str = "```";

impl TextFrame {
    /// Build a frame from text, one paragraph per line.
    ///
    /// Blank lines become empty paragraphs so spacing is preserved.
    /// `\r\n` and `\r` line endings are treated as `\n`.
    pub fn from_text(text: &str) -> Self {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            paragraphs: text.split('\n').map(Paragraph::new).collect(),
        }
    }

    /// Switch table and code lines to the monospace typeface.
    ///
    /// Returns the number of paragraphs changed.
    pub fn monospace_tables(&mut self) -> usize {
        let mut in_fence = false;
        let mut changed = 0;

        for paragraph in &mut self.paragraphs {
            let is_fence = is_fence_line(&paragraph.text);
            if in_fence || is_fence || is_table_line(&paragraph.text) {
                paragraph.typeface(MONOSPACE_TYPEFACE);
                changed += 1;
            }
            if is_fence {
                in_fence = !in_fence;
            }
        }

        changed
    }
}

/// Whether a line belongs to a box-drawn or Markdown table.
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    match trimmed.chars().next() {
        Some(c) if BOX_DRAWING_CHARS.contains(&c) => true,
        Some('|') => trimmed.trim_end().ends_with('|'),
        _ => false,
    }
}

/// Whether a line opens or closes a fenced code block.
pub fn is_fence_line(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_preserves_blank_lines() {
        let frame = TextFrame::from_text("🎯 Titre\n\n• a\n• b");
        let texts: Vec<&str> = frame.paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["🎯 Titre", "", "• a", "• b"]);
    }

    #[test]
    fn test_split_normalizes_line_endings() {
        let frame = TextFrame::from_text("a\r\nb\rc");
        assert_eq!(frame.paragraphs.len(), 3);
        assert_eq!(frame.text(), "a\nb\nc");
    }

    #[test]
    fn test_empty_text_is_one_empty_paragraph() {
        let frame = TextFrame::from_text("");
        assert_eq!(frame.paragraphs.len(), 1);
        assert!(frame.paragraphs[0].text.is_empty());
    }

    #[test]
    fn test_table_line_detection() {
        assert!(is_table_line("┌─────┬─────┐"));
        assert!(is_table_line("│ Frontend │ Hebdomadaire│"));
        assert!(is_table_line("    ┌─────────────┼─────────────┐"));
        assert!(is_table_line("| Métrique | Objectif |"));
        assert!(!is_table_line("| pas une table"));
        assert!(!is_table_line("• Temps de réponse < 200ms"));
        assert!(!is_table_line(""));
    }

    #[test]
    fn test_monospace_tables_marks_boxes_and_fences() {
        let mut frame = TextFrame::from_text(
            "🎯 Périmètre\n\n┌──┐\n│ a│\n└──┘\nTexte\n```bash\ngit log\n```\nFin",
        );
        let changed = frame.monospace_tables();
        assert_eq!(changed, 6);

        let mono: Vec<bool> = frame
            .paragraphs
            .iter()
            .map(|p| p.font.typeface.as_deref() == Some(MONOSPACE_TYPEFACE))
            .collect();
        assert_eq!(
            mono,
            vec![false, false, true, true, true, false, true, true, true, false]
        );
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let mut frame = TextFrame::from_text("```\ncode\nmore");
        assert_eq!(frame.monospace_tables(), 3);
    }
}
