//! The shared visual pattern of the styled decks.
//!
//! Styled slides are built on the blank layout: a bold title box, a thin
//! colored rule under it, then two or three text columns. Title and closing
//! slides carry decorative ovals in the theme colors.

use crate::color::{Rgb, Theme};
use crate::model::{Alignment, Deck, Geometry, Layout, Slide, TextFrame};
use crate::units::{pt, Bounds, SlideSize};

/// Left/right margin of section titles and rules.
const MARGIN: f64 = 0.5;

/// Vertical position of the decorative rule under section titles.
const RULE_Y: f64 = 1.4;

/// Thickness of the decorative rule.
const RULE_HEIGHT: f64 = 0.05;

/// Thickness of column accent bars.
const BAR_HEIGHT: f64 = 0.1;

/// Diameter of the closing ovals.
const CLOSING_DIAMETER: f64 = 0.8;

/// Content shared by every styled title slide.
#[derive(Debug, Clone, Copy)]
pub struct TitleSlide<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

impl TitleSlide<'_> {
    /// Append the title slide: light background, centered title and
    /// subtitle, and two corner ovals.
    pub fn add_to<'d>(self, deck: &'d mut Deck, theme: &Theme) -> &'d mut Slide {
        let size = deck.slide_size;
        let width = size.width.as_inches();
        let slide = deck.add_slide(Layout::Blank);

        fill_shape(slide, Geometry::Rectangle, size.full(), theme.light);

        slide
            .add_text_box(Bounds::inches(1.0, 2.0, width - 2.0, 2.0), self.title)
            .first()
            .align(Alignment::Center)
            .size(pt(48.0))
            .bold(true)
            .color(theme.primary);

        slide
            .add_text_box(Bounds::inches(1.0, 4.5, width - 2.0, 1.5), self.subtitle)
            .first()
            .align(Alignment::Center)
            .size(pt(24.0))
            .color(theme.dark);

        fill_shape(
            slide,
            Geometry::Oval,
            Bounds::inches(0.5, 0.5, 1.0, 1.0),
            theme.secondary,
        );
        fill_shape(
            slide,
            Geometry::Oval,
            Bounds::inches(width - 1.5, 6.0, 1.0, 1.0),
            theme.accent,
        );

        slide
    }
}

/// Append a blank slide with a bold primary title and no rule.
pub fn titled<'d>(
    deck: &'d mut Deck,
    theme: &Theme,
    title: &str,
    title_size: f64,
) -> &'d mut Slide {
    let width = deck.slide_size.width.as_inches();
    let slide = deck.add_slide(Layout::Blank);
    slide
        .add_text_box(
            Bounds::inches(MARGIN, MARGIN, width - 2.0 * MARGIN, 1.0),
            title,
        )
        .first()
        .size(pt(title_size))
        .bold(true)
        .color(theme.primary);
    slide
}

/// Append a section slide: title plus a decorative rule in `rule_color`.
pub fn section<'d>(
    deck: &'d mut Deck,
    theme: &Theme,
    title: &str,
    title_size: f64,
    rule_color: Rgb,
) -> &'d mut Slide {
    let width = deck.slide_size.width.as_inches();
    let slide = titled(deck, theme, title, title_size);
    fill_shape(
        slide,
        Geometry::Rectangle,
        Bounds::inches(MARGIN, RULE_Y, width - 2.0 * MARGIN, RULE_HEIGHT),
        rule_color,
    );
    slide
}

/// Add a content column. Table and code lines are set in monospace.
pub fn column<'s>(slide: &'s mut Slide, bounds: Bounds, text: &str) -> &'s mut TextFrame {
    let frame = slide.add_text_box(bounds, text);
    let mono = frame.monospace_tables();
    if mono > 0 {
        log::debug!("Column has {} monospace lines", mono);
    }
    frame
}

/// Add a thin rounded bar above a column.
pub fn accent_bar(slide: &mut Slide, x: f64, y: f64, width: f64, color: Rgb) {
    fill_shape(
        slide,
        Geometry::RoundedRectangle,
        Bounds::inches(x, y, width, BAR_HEIGHT),
        color,
    );
}

/// Add the two small ovals closing the final slide, mirrored across a
/// slide of the given size.
pub fn closing_circles(slide: &mut Slide, size: SlideSize, theme: &Theme) {
    let width = size.width.as_inches();
    fill_shape(
        slide,
        Geometry::Oval,
        Bounds::inches(MARGIN, 6.0, CLOSING_DIAMETER, CLOSING_DIAMETER),
        theme.secondary,
    );
    fill_shape(
        slide,
        Geometry::Oval,
        Bounds::inches(
            width - MARGIN - CLOSING_DIAMETER,
            6.0,
            CLOSING_DIAMETER,
            CLOSING_DIAMETER,
        ),
        theme.accent,
    );
}

/// Solid-filled shape without an outline.
pub fn fill_shape(slide: &mut Slide, geometry: Geometry, bounds: Bounds, color: Rgb) {
    slide.add_shape(geometry, bounds).solid_fill(color).hide_line();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Fill, Line, Shape};
    use crate::units::inches;

    fn deck() -> Deck {
        Deck::new("Test", SlideSize::WIDESCREEN_16_9)
    }

    #[test]
    fn test_title_slide_shapes() {
        let mut deck = deck();
        let theme = Theme::CERTIFICATION;
        let slide = TitleSlide {
            title: "Maintenance et Évolution",
            subtitle: "Plateforme\nBloc 4",
        }
        .add_to(&mut deck, &theme);

        assert_eq!(slide.layout, Layout::Blank);
        assert_eq!(slide.shape_count(), 5);

        match &slide.shapes[0] {
            Shape::Auto(bg) => {
                assert_eq!(bg.bounds, SlideSize::WIDESCREEN_16_9.full());
                assert_eq!(bg.fill, Fill::Solid(theme.light));
                assert_eq!(bg.line, Line::Hidden);
            }
            other => panic!("expected background, got {:?}", other),
        }

        let title = slide.text_frames().next().unwrap();
        assert_eq!(title.paragraphs[0].alignment, Some(Alignment::Center));
        assert_eq!(title.paragraphs[0].font.color, Some(theme.primary));

        let subtitle = slide.text_frames().nth(1).unwrap();
        assert_eq!(subtitle.paragraphs.len(), 2);
        assert_eq!(subtitle.paragraphs[1].font.color, None);
    }

    #[test]
    fn test_section_has_title_and_rule() {
        let mut deck = deck();
        let theme = Theme::CERTIFICATION;
        let slide = section(&mut deck, &theme, "C4.1.1", 28.0, theme.secondary);

        assert_eq!(slide.shape_count(), 2);
        match &slide.shapes[1] {
            Shape::Auto(rule) => {
                assert_eq!(rule.geometry, Geometry::Rectangle);
                assert_eq!(rule.bounds.y, inches(1.4));
                assert_eq!(rule.bounds.height, inches(0.05));
                assert_eq!(rule.fill, Fill::Solid(theme.secondary));
            }
            other => panic!("expected rule, got {:?}", other),
        }
    }

    #[test]
    fn test_column_uses_monospace_for_tables() {
        let mut slide = Slide::new(Layout::Blank);
        let frame = column(
            &mut slide,
            Bounds::inches(7.0, 2.0, 6.0, 4.5),
            "🎯 Titre\n\n┌──┐\n└──┘",
        );
        assert!(frame.paragraphs[0].font.typeface.is_none());
        assert!(frame.paragraphs[2].font.typeface.is_some());
    }

    #[test]
    fn test_closing_circles() {
        let mut slide = Slide::new(Layout::Blank);
        let theme = Theme::CERTIFICATION;
        closing_circles(&mut slide, SlideSize::WIDESCREEN_16_9, &theme);
        accent_bar(&mut slide, 0.5, 1.8, 6.0, theme.accent);
        assert_eq!(slide.shape_count(), 3);
        assert!(matches!(
            &slide.shapes[2],
            Shape::Auto(bar) if bar.geometry == Geometry::RoundedRectangle
        ));
    }

    #[test]
    fn test_closing_circles_stay_on_narrow_slides() {
        for size in [SlideSize::STANDARD_4_3, SlideSize::WIDESCREEN_16_9] {
            let mut slide = Slide::new(Layout::Blank);
            closing_circles(&mut slide, size, &Theme::CERTIFICATION);
            match &slide.shapes[1] {
                Shape::Auto(oval) => {
                    assert_eq!(oval.geometry, Geometry::Oval);
                    let right = size.width - oval.bounds.x - oval.bounds.width;
                    assert!((right.get() - inches(0.5).get()).abs() <= 1, "{:?}", right);
                }
                other => panic!("expected oval, got {:?}", other),
            }
        }
    }
}
