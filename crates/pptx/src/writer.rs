//! .pptx package writer.

use crate::template::{self, Relationship};
use crate::xml::slide_xml;
use certdeck_core::{Deck, Error, Layout, Result, Theme};
use std::fs::{self, File};
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Writes a [`Deck`] as an Office Open XML presentation.
pub struct PptxWriter {
    theme: Theme,
}

impl PptxWriter {
    /// Create a writer using the certification palette for the package theme.
    pub fn new() -> Self {
        Self {
            theme: Theme::CERTIFICATION,
        }
    }

    /// Use a different palette for the package theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Write the whole package to `writer` and return it.
    pub fn write<W: Write + Seek>(&self, deck: &Deck, writer: W) -> Result<W> {
        ensure_slides(deck)?;

        let slide_count = deck.slide_count();
        let size = deck.slide_size;
        let mut package = Package::new(writer);

        package.add("[Content_Types].xml", &template::content_types_xml(slide_count)?)?;
        package.add_rels("_rels/.rels", &template::package_rels())?;
        package.add("docProps/core.xml", &template::core_props_xml(&deck.title)?)?;
        package.add("docProps/app.xml", &template::app_props_xml(slide_count, size)?)?;

        package.add("ppt/presentation.xml", &template::presentation_xml(slide_count, size)?)?;
        package.add_rels(
            "ppt/_rels/presentation.xml.rels",
            &template::presentation_rels(slide_count),
        )?;

        for (index, slide) in deck.slides.iter().enumerate() {
            let n = index + 1;
            package.add(&format!("ppt/slides/slide{}.xml", n), &slide_xml(slide)?)?;
            package.add_rels(
                &format!("ppt/slides/_rels/slide{}.xml.rels", n),
                &template::slide_rels(slide.layout),
            )?;
        }

        package.add(
            "ppt/slideMasters/slideMaster1.xml",
            &template::slide_master_xml(size)?,
        )?;
        package.add_rels(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &template::master_rels(),
        )?;

        for layout in Layout::ALL {
            let n = layout.part_number();
            package.add(
                &format!("ppt/slideLayouts/slideLayout{}.xml", n),
                &template::slide_layout_xml(layout, size)?,
            )?;
            package.add_rels(
                &format!("ppt/slideLayouts/_rels/slideLayout{}.xml.rels", n),
                &template::layout_rels(),
            )?;
        }

        package.add("ppt/theme/theme1.xml", &template::theme_xml(&self.theme)?)?;
        package.add("ppt/presProps.xml", &template::pres_props_xml())?;
        package.add("ppt/viewProps.xml", &template::view_props_xml())?;
        package.add("ppt/tableStyles.xml", &template::table_styles_xml())?;

        package.finish()
    }

    /// Serialize the package into memory.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let cursor = self.write(deck, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Save the package to `path`, replacing any existing file.
    ///
    /// The package is written next to the destination first and renamed into
    /// place, so a failed write leaves an existing file untouched.
    pub fn save(&self, deck: &Deck, path: &Path) -> Result<()> {
        ensure_slides(deck)?;

        let temp_path = temp_sibling(path);
        log::debug!("Writing {}", temp_path.display());

        let result = File::create(&temp_path)
            .map_err(Error::from)
            .and_then(|file| self.write(deck, BufWriter::new(file)))
            .and_then(|mut writer| writer.flush().map_err(Error::from));

        if let Err(e) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        log::info!(
            "Saved {} ({} slides) to {}",
            deck.title,
            deck.slide_count(),
            path.display()
        );
        Ok(())
    }
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_slides(deck: &Deck) -> Result<()> {
    if deck.slides.is_empty() {
        return Err(Error::InvalidDeck(format!("'{}' has no slides", deck.title)));
    }
    Ok(())
}

/// `dir/.name.tmp` next to `path`.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "presentation.pptx".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Zip container with fixed entry options.
struct Package<W: Write + Seek> {
    zip: ZipWriter<W>,
    options: FileOptions,
}

impl<W: Write + Seek> Package<W> {
    fn new(writer: W) -> Self {
        // Fixed timestamp: identical decks produce identical bytes.
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        Self {
            zip: ZipWriter::new(writer),
            options,
        }
    }

    fn add(&mut self, name: &str, content: &str) -> Result<()> {
        log::debug!("Writing part {} ({} bytes)", name, content.len());
        self.zip
            .start_file(name, self.options)
            .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn add_rels(&mut self, name: &str, rels: &[Relationship]) -> Result<()> {
        self.add(name, &template::relationships_xml(rels)?)
    }

    fn finish(mut self) -> Result<W> {
        self.zip
            .finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish package: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PptxReader;
    use certdeck_core::{Bounds, SlideSize};
    use std::io::Read;
    use zip::ZipArchive;

    fn sample_deck() -> Deck {
        let mut deck = Deck::new("Échantillon", SlideSize::WIDESCREEN_16_9);
        let slide = deck.add_slide(Layout::Title);
        slide.set_title("Maintenance et Évolution");
        slide.set_body("Plateforme de Cours en Ligne");
        let slide = deck.add_slide(Layout::Blank);
        slide.add_text_box(Bounds::inches(0.5, 0.5, 12.33, 1.0), "Vue d'Ensemble");
        slide.add_text_box(Bounds::inches(0.5, 2.0, 6.0, 4.5), "🎯 Gauche\n• a");
        deck
    }

    #[test]
    fn test_package_contains_all_parts() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide2.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout3.xml",
            "ppt/theme/theme1.xml",
            "ppt/tableStyles.xml",
        ] {
            assert!(names.contains(&part), "missing {}", part);
        }
        assert!(!names.contains(&"ppt/slides/slide3.xml"));
    }

    #[test]
    fn test_content_types_come_first() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");
    }

    #[test]
    fn test_slide_uses_its_layout() {
        let bytes = PptxWriter::new().to_bytes(&sample_deck()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut rels = String::new();
        archive
            .by_name("ppt/slides/_rels/slide2.xml.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains("../slideLayouts/slideLayout3.xml"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let deck = sample_deck();
        let writer = PptxWriter::new();
        assert_eq!(writer.to_bytes(&deck).unwrap(), writer.to_bytes(&deck).unwrap());
    }

    #[test]
    fn test_custom_theme_is_written() {
        let mut theme = Theme::CERTIFICATION;
        theme.primary = certdeck_core::Rgb::new(0x12, 0x34, 0x56);
        let bytes = PptxWriter::new()
            .with_theme(theme)
            .to_bytes(&sample_deck())
            .unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("ppt/theme/theme1.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="123456"/></a:accent1>"#));
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        let deck = Deck::new("Vide", SlideSize::default());
        let result = PptxWriter::new().to_bytes(&deck);
        assert!(matches!(result, Err(Error::InvalidDeck(_))));
    }

    #[test]
    fn test_save_replaces_file_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        fs::write(&path, b"old").unwrap();

        PptxWriter::new().save(&sample_deck(), &path).unwrap();

        let outline = PptxReader::new().verify(&path, 2).unwrap();
        assert_eq!(outline.filename, "deck.pptx");
        assert_eq!(outline.slides[0].lines[0].text, "Maintenance et Évolution");
        assert_eq!(outline.slides[1].heading(), Some("Vue d'Ensemble"));
        assert!(outline.contains_text("🎯 Gauche\n• a"));
        assert!(!dir.path().join(".deck.pptx.tmp").exists());
    }

    #[test]
    fn test_empty_deck_does_not_touch_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        fs::write(&path, b"old").unwrap();

        let deck = Deck::new("Vide", SlideSize::default());
        assert!(PptxWriter::new().save(&deck, &path).is_err());
        assert_eq!(fs::read(&path).unwrap(), b"old");
    }

    #[test]
    fn test_verify_reports_wrong_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        PptxWriter::new().save(&sample_deck(), &path).unwrap();

        let result = PptxReader::new().verify(&path, 3);
        assert!(matches!(result, Err(Error::VerificationFailed(_))));
    }
}
