//! Write-only model of a slide deck.
//!
//! A [`Deck`] is an ordered list of [`Slide`]s; each slide holds shapes in
//! z-order. Text lives in [`TextFrame`]s made of paragraphs, one per line of
//! the source text.

use crate::color::Rgb;
use crate::units::{Bounds, FontSize, SlideSize};
use serde::Serialize;

/// An entire deck, built in memory then serialized once.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    /// Document title, written to the package core properties.
    pub title: String,

    /// Slide dimensions shared by every slide.
    pub slide_size: SlideSize,

    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty deck with the given title and slide size.
    pub fn new(title: impl Into<String>, slide_size: SlideSize) -> Self {
        Self {
            title: title.into(),
            slide_size,
            slides: Vec::new(),
        }
    }

    /// Append a slide using the given layout and return it for filling.
    pub fn add_slide(&mut self, layout: Layout) -> &mut Slide {
        self.slides.push(Slide::new(layout));
        let number = self.slides.len();
        log::debug!("Added slide {} ({:?})", number, layout);
        &mut self.slides[number - 1]
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// The slide layouts available in the built-in master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layout {
    /// Centered title and subtitle placeholders.
    Title,
    /// Title and body placeholders.
    TitleAndContent,
    /// No placeholders.
    Blank,
}

impl Layout {
    /// All layouts, in the order they appear in the master.
    pub const ALL: [Layout; 3] = [Layout::Title, Layout::TitleAndContent, Layout::Blank];

    /// 1-based index of the layout part (`slideLayoutN.xml`).
    pub fn part_number(self) -> usize {
        match self {
            Layout::Title => 1,
            Layout::TitleAndContent => 2,
            Layout::Blank => 3,
        }
    }

    /// Display name stored in the layout part.
    pub fn name(self) -> &'static str {
        match self {
            Layout::Title => "Title Slide",
            Layout::TitleAndContent => "Title and Content",
            Layout::Blank => "Blank",
        }
    }

    /// Placeholders a slide with this layout exposes.
    pub fn placeholders(self) -> &'static [PlaceholderKind] {
        match self {
            Layout::Title => &[PlaceholderKind::CenteredTitle, PlaceholderKind::Subtitle],
            Layout::TitleAndContent => &[PlaceholderKind::Title, PlaceholderKind::Body],
            Layout::Blank => &[],
        }
    }
}

/// A single slide.
#[derive(Debug, Clone, Serialize)]
pub struct Slide {
    /// Layout the slide is based on.
    pub layout: Layout,

    /// Shapes in z-order (first is at the back).
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            shapes: Vec::new(),
        }
    }

    /// Set the text of the slide's title placeholder and return its frame.
    ///
    /// On a title layout this is the centered title; on other layouts the
    /// regular title. Blank slides get a free-standing title placeholder.
    pub fn set_title(&mut self, text: &str) -> &mut TextFrame {
        let kind = if self.layout == Layout::Title {
            PlaceholderKind::CenteredTitle
        } else {
            PlaceholderKind::Title
        };
        self.placeholder(kind, text)
    }

    /// Set the text of the second placeholder (subtitle or body).
    pub fn set_body(&mut self, text: &str) -> &mut TextFrame {
        let kind = if self.layout == Layout::Title {
            PlaceholderKind::Subtitle
        } else {
            PlaceholderKind::Body
        };
        self.placeholder(kind, text)
    }

    /// Set the text of a placeholder, creating it on first use.
    pub fn placeholder(&mut self, kind: PlaceholderKind, text: &str) -> &mut TextFrame {
        let index = self
            .shapes
            .iter()
            .position(|s| matches!(s, Shape::Placeholder { kind: k, .. } if *k == kind));

        let index = match index {
            Some(i) => {
                if let Shape::Placeholder { frame, .. } = &mut self.shapes[i] {
                    frame.set_text(text);
                }
                i
            }
            None => {
                self.shapes.push(Shape::Placeholder {
                    kind,
                    frame: TextFrame::from_text(text),
                });
                self.shapes.len() - 1
            }
        };

        match &mut self.shapes[index] {
            Shape::Placeholder { frame, .. } => frame,
            _ => unreachable!("index points at a placeholder"),
        }
    }

    /// Add a free-floating text box and return its frame.
    pub fn add_text_box(&mut self, bounds: Bounds, text: &str) -> &mut TextFrame {
        self.shapes.push(Shape::TextBox {
            bounds,
            frame: TextFrame::from_text(text),
        });
        match self.shapes.last_mut() {
            Some(Shape::TextBox { frame, .. }) => frame,
            _ => unreachable!("just pushed a text box"),
        }
    }

    /// Add a preset-geometry shape and return it for styling.
    pub fn add_shape(&mut self, geometry: Geometry, bounds: Bounds) -> &mut AutoShape {
        self.shapes.push(Shape::Auto(AutoShape {
            geometry,
            bounds,
            fill: Fill::None,
            line: Line::Default,
        }));
        match self.shapes.last_mut() {
            Some(Shape::Auto(shape)) => shape,
            _ => unreachable!("just pushed an auto shape"),
        }
    }

    /// Text frames of this slide in z-order.
    pub fn text_frames(&self) -> impl Iterator<Item = &TextFrame> {
        self.shapes.iter().filter_map(Shape::text_frame)
    }

    /// Number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}

/// Placeholder roles inherited from the slide layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderKind {
    CenteredTitle,
    Subtitle,
    Title,
    Body,
}

/// A shape on a slide.
#[derive(Debug, Clone, Serialize)]
pub enum Shape {
    /// Text positioned by the layout.
    Placeholder { kind: PlaceholderKind, frame: TextFrame },
    /// Free text box.
    TextBox { bounds: Bounds, frame: TextFrame },
    /// Preset geometry (rectangle, oval, ...).
    Auto(AutoShape),
}

impl Shape {
    /// Text frame, if the shape carries text.
    pub fn text_frame(&self) -> Option<&TextFrame> {
        match self {
            Shape::Placeholder { frame, .. } | Shape::TextBox { frame, .. } => Some(frame),
            Shape::Auto(_) => None,
        }
    }
}

/// Preset geometry shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoShape {
    pub geometry: Geometry,
    pub bounds: Bounds,
    pub fill: Fill,
    pub line: Line,
}

impl AutoShape {
    /// Fill with a solid color.
    pub fn solid_fill(&mut self, color: Rgb) -> &mut Self {
        self.fill = Fill::Solid(color);
        self
    }

    /// Remove the outline.
    pub fn hide_line(&mut self) -> &mut Self {
        self.line = Line::Hidden;
        self
    }
}

/// Preset geometries used by the decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
    Oval,
}

impl Geometry {
    /// DrawingML preset name (`prst` attribute).
    pub fn preset(self) -> &'static str {
        match self {
            Geometry::Rectangle => "rect",
            Geometry::RoundedRectangle => "roundRect",
            Geometry::Oval => "ellipse",
        }
    }

    /// Base name for the shape's `cNvPr` name.
    pub fn display_name(self) -> &'static str {
        match self {
            Geometry::Rectangle => "Rectangle",
            Geometry::RoundedRectangle => "Rounded Rectangle",
            Geometry::Oval => "Oval",
        }
    }
}

/// Shape fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fill {
    /// Inherit from the theme style.
    None,
    Solid(Rgb),
}

/// Shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Line {
    /// Inherit from the theme style.
    Default,
    /// No outline.
    Hidden,
}

/// Text content of a shape: one paragraph per line.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Replace all text. Each line becomes its own paragraph.
    pub fn set_text(&mut self, text: &str) {
        *self = Self::from_text(text);
    }

    /// The first paragraph, where the decks apply their styling.
    ///
    /// A frame always has at least one paragraph.
    pub fn first(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::default());
        }
        &mut self.paragraphs[0]
    }

    /// Joined text of all paragraphs.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A paragraph holding a single run of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    pub alignment: Option<Alignment>,
    pub font: Font,
}

impl Paragraph {
    /// Create an unstyled paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the paragraph alignment.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the font size.
    pub fn size(&mut self, size: FontSize) -> &mut Self {
        self.font.size = Some(size);
        self
    }

    /// Set bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.font.bold = Some(bold);
        self
    }

    /// Set the text color.
    pub fn color(&mut self, color: Rgb) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    /// Set the latin typeface.
    pub fn typeface(&mut self, typeface: &str) -> &mut Self {
        self.font.typeface = Some(typeface.to_string());
        self
    }
}

/// Run-level character properties. `None` inherits from the master.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    pub size: Option<FontSize>,
    pub bold: Option<bool>,
    pub color: Option<Rgb>,
    pub typeface: Option<String>,
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// DrawingML `algn` value.
    pub fn as_attr(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::pt;

    #[test]
    fn test_add_slide_returns_last() {
        let mut deck = Deck::new("Test", SlideSize::STANDARD_4_3);
        deck.add_slide(Layout::Title).set_title("First");
        deck.add_slide(Layout::Blank);
        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.slides[0].shape_count(), 1);
        assert_eq!(deck.slides[1].shape_count(), 0);
    }

    #[test]
    fn test_title_placeholder_kind_follows_layout() {
        let mut slide = Slide::new(Layout::Title);
        slide.set_title("Titre");
        slide.set_body("Sous-titre");
        assert!(matches!(
            slide.shapes[0],
            Shape::Placeholder {
                kind: PlaceholderKind::CenteredTitle,
                ..
            }
        ));
        assert!(matches!(
            slide.shapes[1],
            Shape::Placeholder {
                kind: PlaceholderKind::Subtitle,
                ..
            }
        ));

        let mut slide = Slide::new(Layout::TitleAndContent);
        slide.set_title("Titre");
        slide.set_body("Corps");
        assert!(matches!(
            slide.shapes[1],
            Shape::Placeholder {
                kind: PlaceholderKind::Body,
                ..
            }
        ));
    }

    #[test]
    fn test_setting_placeholder_twice_replaces_text() {
        let mut slide = Slide::new(Layout::TitleAndContent);
        slide.set_title("Avant");
        slide.set_title("Après");
        assert_eq!(slide.shape_count(), 1);
        assert_eq!(slide.text_frames().next().unwrap().text(), "Après");
    }

    #[test]
    fn test_first_paragraph_styling_only() {
        let mut slide = Slide::new(Layout::Blank);
        let frame = slide.add_text_box(Bounds::inches(1.0, 2.0, 11.33, 2.0), "Ligne 1\nLigne 2");
        frame.first().size(pt(24.0)).bold(true);

        assert_eq!(frame.paragraphs.len(), 2);
        assert_eq!(frame.paragraphs[0].font.size, Some(pt(24.0)));
        assert_eq!(frame.paragraphs[0].font.bold, Some(true));
        assert_eq!(frame.paragraphs[1].font, Font::default());
    }

    #[test]
    fn test_first_on_empty_frame() {
        let mut frame = TextFrame::default();
        frame.first().color(Rgb::new(1, 2, 3));
        assert_eq!(frame.paragraphs.len(), 1);
    }

    #[test]
    fn test_auto_shape_styling() {
        let mut slide = Slide::new(Layout::Blank);
        slide
            .add_shape(Geometry::Oval, Bounds::inches(0.5, 0.5, 1.0, 1.0))
            .solid_fill(Rgb::new(16, 185, 129))
            .hide_line();

        match &slide.shapes[0] {
            Shape::Auto(shape) => {
                assert_eq!(shape.fill, Fill::Solid(Rgb::new(16, 185, 129)));
                assert_eq!(shape.line, Line::Hidden);
                assert_eq!(shape.geometry.preset(), "ellipse");
            }
            other => panic!("unexpected shape: {:?}", other),
        }
        assert!(slide.text_frames().next().is_none());
    }

    #[test]
    fn test_layout_part_numbers_are_distinct() {
        let numbers: Vec<usize> = Layout::ALL.iter().map(|l| l.part_number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(Layout::Blank.placeholders().is_empty());
    }

    #[test]
    fn test_deck_serializes_to_json() {
        let mut deck = Deck::new("Test", SlideSize::WIDESCREEN_16_9);
        deck.add_slide(Layout::Blank)
            .add_shape(Geometry::Oval, Bounds::inches(0.5, 0.5, 1.0, 1.0))
            .solid_fill(Rgb::new(16, 185, 129));

        let json = serde_json::to_value(&deck).unwrap();
        assert_eq!(json["slide_size"]["width"], 12_192_000);
        assert_eq!(json["slides"][0]["layout"], "Blank");
        assert_eq!(json["slides"][0]["shapes"][0]["Auto"]["geometry"], "Oval");
    }
}
