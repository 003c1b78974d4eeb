//! Outline reader for written .pptx files.

use certdeck_core::{DeckOutline, Error, Result, SlideOutline};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Reads the text outline of a .pptx package.
pub struct PptxReader;

impl PptxReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Read an outline from a file on disk.
    pub fn read_file(&self, path: &Path) -> Result<DeckOutline> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let file = File::open(path)?;
        self.read(BufReader::new(file), &filename)
    }

    /// Read an outline from any seekable reader.
    pub fn read<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<DeckOutline> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut outline = DeckOutline::new(filename);

        let slide_order = self.get_slide_order(&mut archive)?;
        log::debug!("{}: {} slides", filename, slide_order.len());

        for (idx, slide_path) in slide_order.iter().enumerate() {
            let slide = self.read_slide(&mut archive, slide_path, idx + 1)?;
            outline.add_slide(slide);
        }

        Ok(outline)
    }

    /// Re-read a written file and check it holds `expected_slides` slides.
    pub fn verify(&self, path: &Path, expected_slides: usize) -> Result<DeckOutline> {
        let outline = self.read_file(path)?;
        if outline.slide_count() != expected_slides {
            return Err(Error::VerificationFailed(format!(
                "{}: expected {} slides, found {}",
                outline.filename,
                expected_slides,
                outline.slide_count()
            )));
        }
        if let Some(empty) = outline.slides.iter().find(|s| s.lines.is_empty()) {
            return Err(Error::VerificationFailed(format!(
                "{}: slide {} has no text",
                outline.filename, empty.number
            )));
        }
        Ok(outline)
    }

    /// Ordered slide part paths, from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if local_name(e.name().as_ref()) == b"Relationship" =>
                {
                    let mut rel_type = String::new();
                    let mut target = String::new();

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Type" => rel_type = String::from_utf8_lossy(&attr.value).to_string(),
                            b"Target" => target = String::from_utf8_lossy(&attr.value).to_string(),
                            _ => {}
                        }
                    }

                    if rel_type.ends_with("/slide") {
                        // Targets are numbered slideN.xml; rIds are not
                        // guaranteed to follow presentation order.
                        let order_num = extract_slide_number(&target);
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    fn read_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
        slide_number: usize,
    ) -> Result<SlideOutline> {
        let content = read_file_from_archive(archive, slide_path)?;
        let mut slide = SlideOutline::new(slide_number);

        for shape in extract_shapes_from_xml(&content)? {
            match (shape.y, shape.x) {
                (Some(y), Some(x)) => slide.add_line_with_position(shape.text, y, x),
                _ => slide.add_line(shape.text),
            }
        }

        slide.sort_by_position();
        Ok(slide)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Text and offset of one shape.
#[derive(Debug, Default)]
struct ShapeInfo {
    text: String,
    x: Option<f64>,
    y: Option<f64>,
}

/// Collect every text-bearing shape of a slide, in document order.
///
/// Shapes without an `a:off` (layout placeholders) have no position.
fn extract_shapes_from_xml(xml_content: &str) -> Result<Vec<ShapeInfo>> {
    let mut shapes = Vec::new();
    let mut reader = Reader::from_str(xml_content);
    // Leading spaces are meaningful inside a:t (indented diagrams).
    reader.trim_text(false);

    let mut current_shape: Option<ShapeInfo> = None;
    let mut in_paragraph = false;
    let mut in_run_text = false;
    let mut current_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => current_shape = Some(ShapeInfo::default()),
                b"off" => read_offset(e, current_shape.as_mut()),
                b"p" if current_shape.is_some() => {
                    in_paragraph = true;
                    if !current_text.is_empty() {
                        current_text.push('\n');
                    }
                }
                b"t" if in_paragraph => in_run_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                if local_name(e.name().as_ref()) == b"off" {
                    read_offset(e, current_shape.as_mut());
                }
            }
            Ok(Event::Text(ref e)) if in_run_text => match e.unescape() {
                Ok(text) => current_text.push_str(&text),
                Err(err) => log::warn!("Skipping undecodable text run: {}", err),
            },
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => {
                    if let Some(mut shape) = current_shape.take() {
                        let text = current_text.trim_end();
                        if !text.trim().is_empty() {
                            shape.text = text.to_string();
                            shapes.push(shape);
                        }
                    }
                    current_text.clear();
                    in_paragraph = false;
                    in_run_text = false;
                }
                b"p" => in_paragraph = false,
                b"t" => in_run_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!("Error parsing slide: {}", e)));
            }
            _ => {}
        }
    }

    Ok(shapes)
}

fn read_offset(element: &BytesStart, shape: Option<&mut ShapeInfo>) {
    let Some(shape) = shape else {
        return;
    };
    for attr in element.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value).parse::<f64>().ok();
        match attr.key.as_ref() {
            b"x" => shape.x = value,
            b"y" => shape.y = value,
            _ => {}
        }
    }
}

/// Read a whole archive entry as UTF-8.
fn read_file_from_archive<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: &str,
) -> Result<String> {
    let mut file = archive
        .by_name(path)
        .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

    Ok(content)
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slides/slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slides/slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slides/slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_extract_shapes_keeps_paragraphs_and_indent() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:spPr><a:xfrm><a:off x="457200" y="1828800"/></a:xfrm></p:spPr>"#,
            r#"<p:txBody><a:p><a:r><a:t>🎯 Titre</a:t></a:r></a:p>"#,
            r#"<a:p><a:endParaRPr/></a:p>"#,
            r#"<a:p><a:r><a:t>    ┌──┐</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:spPr/><p:txBody><a:p><a:r><a:t>Q &amp; R</a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"<p:sp><p:spPr><a:xfrm><a:off x="0" y="0"/></a:xfrm></p:spPr>"#,
            r#"<p:txBody><a:p><a:endParaRPr/></a:p></p:txBody></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        );

        let shapes = extract_shapes_from_xml(xml).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].text, "🎯 Titre\n\n    ┌──┐");
        assert_eq!(shapes[0].y, Some(1828800.0));
        assert_eq!(shapes[1].text, "Q & R");
        assert_eq!(shapes[1].x, None);
    }

    #[test]
    fn test_malformed_slide_is_an_error() {
        let result = extract_shapes_from_xml("<p:sp><a:p></p:sp>");
        assert!(matches!(result, Err(Error::XmlError(_))));
    }
}
