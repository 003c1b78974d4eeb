//! PresentationML serialization of slides and their shapes.

use crate::template::{
    placeholder_element, placeholder_name, GROUP_HEADER, NS_A, NS_P, NS_R, XML_DECLARATION,
};
use certdeck_core::{
    AutoShape, Bounds, Fill, Line, Paragraph, PlaceholderKind, Result, Shape, Slide, TextFrame,
};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Language tag written on every run.
const LANG: &str = "fr-FR";

/// Generate `ppt/slides/slideN.xml` content.
pub fn slide_xml(slide: &Slide) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(GROUP_HEADER);

    // Group shape uses id 1.
    for (index, shape) in slide.shapes.iter().enumerate() {
        write_shape(&mut xml, shape, index as u32 + 2)?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

fn write_shape(xml: &mut String, shape: &Shape, id: u32) -> Result<()> {
    match shape {
        Shape::Placeholder { kind, frame } => write_placeholder(xml, *kind, frame, id),
        Shape::TextBox { bounds, frame } => write_text_box(xml, bounds, frame, id),
        Shape::Auto(auto) => write_auto_shape(xml, auto, id),
    }
}

fn write_placeholder(
    xml: &mut String,
    kind: PlaceholderKind,
    frame: &TextFrame,
    id: u32,
) -> Result<()> {
    let name = placeholder_name(kind);
    let ph = placeholder_element(kind);

    xml.push_str("<p:sp><p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{} {}"/>"#, id, name, id - 1)?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    write!(xml, "<p:nvPr>{}</p:nvPr>", ph)?;
    xml.push_str("</p:nvSpPr>");

    // Geometry is inherited from the layout.
    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
    write_paragraphs(xml, frame)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn write_text_box(xml: &mut String, bounds: &Bounds, frame: &TextFrame, id: u32) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="TextBox {}"/>"#, id, id - 1)?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/><p:nvPr/>"#);
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, bounds)?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
    xml.push_str("</p:spPr>");

    // Lines are laid out by hand (tables, code), so never re-wrap them.
    xml.push_str(r#"<p:txBody><a:bodyPr wrap="none" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#);
    write_paragraphs(xml, frame)?;
    xml.push_str("</p:txBody></p:sp>");
    Ok(())
}

fn write_auto_shape(xml: &mut String, shape: &AutoShape, id: u32) -> Result<()> {
    xml.push_str("<p:sp><p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        id,
        shape.geometry.display_name(),
        id - 1
    )?;
    xml.push_str("<p:cNvSpPr/><p:nvPr/></p:nvSpPr>");

    xml.push_str("<p:spPr>");
    write_xfrm(xml, &shape.bounds)?;
    write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        shape.geometry.preset()
    )?;
    if let Fill::Solid(color) = shape.fill {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
    }
    if shape.line == Line::Hidden {
        xml.push_str("<a:ln><a:noFill/></a:ln>");
    }
    xml.push_str("</p:spPr>");

    // Theme style references, used for anything not set explicitly above.
    xml.push_str(concat!(
        r#"<p:style><a:lnRef idx="1"><a:schemeClr val="accent1"><a:shade val="50000"/></a:schemeClr></a:lnRef>"#,
        r#"<a:fillRef idx="3"><a:schemeClr val="accent1"/></a:fillRef>"#,
        r#"<a:effectRef idx="2"><a:schemeClr val="accent1"/></a:effectRef>"#,
        r#"<a:fontRef idx="minor"><a:schemeClr val="lt1"/></a:fontRef></p:style>"#
    ));

    xml.push_str(r#"<p:txBody><a:bodyPr rtlCol="0" anchor="ctr"/><a:lstStyle/><a:p><a:pPr algn="ctr"/><a:endParaRPr lang="fr-FR"/></a:p></p:txBody>"#);
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_xfrm(xml: &mut String, bounds: &Bounds) -> Result<()> {
    write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        bounds.x.get(),
        bounds.y.get(),
        bounds.width.get(),
        bounds.height.get()
    )?;
    Ok(())
}

fn write_paragraphs(xml: &mut String, frame: &TextFrame) -> Result<()> {
    if frame.paragraphs.is_empty() {
        xml.push_str("<a:p/>");
        return Ok(());
    }
    for paragraph in &frame.paragraphs {
        write_paragraph(xml, paragraph)?;
    }
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");
    if let Some(alignment) = paragraph.alignment {
        write!(xml, r#"<a:pPr algn="{}"/>"#, alignment.as_attr())?;
    }

    if paragraph.text.is_empty() {
        xml.push_str("<a:endParaRPr");
        write_run_attributes(xml, paragraph)?;
        xml.push_str("/>");
    } else {
        xml.push_str("<a:r><a:rPr");
        write_run_attributes(xml, paragraph)?;
        let font = &paragraph.font;
        if font.color.is_none() && font.typeface.is_none() {
            xml.push_str("/>");
        } else {
            xml.push('>');
            if let Some(color) = font.color {
                write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color)?;
            }
            if let Some(ref typeface) = font.typeface {
                let typeface = escape(typeface.as_str());
                write!(
                    xml,
                    r#"<a:latin typeface="{0}"/><a:cs typeface="{0}"/>"#,
                    typeface
                )?;
            }
            xml.push_str("</a:rPr>");
        }
        write!(xml, "<a:t>{}</a:t>", escape(paragraph.text.as_str()))?;
        xml.push_str("</a:r>");
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_attributes(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    write!(xml, r#" lang="{}""#, LANG)?;
    if let Some(size) = paragraph.font.size {
        write!(xml, r#" sz="{}""#, size.hundredths())?;
    }
    if let Some(bold) = paragraph.font.bold {
        xml.push_str(if bold { r#" b="1""# } else { r#" b="0""# });
    }
    xml.push_str(r#" dirty="0""#);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use certdeck_core::{pt, Alignment, Geometry, Layout, Rgb};

    #[test]
    fn test_text_box_xml() {
        let mut slide = Slide::new(Layout::Blank);
        slide
            .add_text_box(Bounds::inches(0.5, 0.5, 12.33, 1.0), "Vue d'Ensemble\nsuite")
            .first()
            .size(pt(36.0))
            .bold(true)
            .color(Rgb::new(59, 130, 246));

        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="TextBox 1"/>"#));
        assert!(xml.contains(r#"<p:cNvSpPr txBox="1"/>"#));
        assert!(xml.contains(r#"<a:off x="457200" y="457200"/>"#));
        assert!(xml.contains(r#"<a:rPr lang="fr-FR" sz="3600" b="1" dirty="0"><a:solidFill><a:srgbClr val="3B82F6"/></a:solidFill></a:rPr>"#));
        assert!(xml.contains("<a:t>Vue d&apos;Ensemble</a:t>"));
        assert!(xml.contains(r#"<a:rPr lang="fr-FR" dirty="0"/><a:t>suite</a:t>"#));
        assert!(xml.contains(r#"wrap="none""#));
    }

    #[test]
    fn test_empty_paragraph_uses_end_para() {
        let mut slide = Slide::new(Layout::Blank);
        slide.add_text_box(Bounds::default(), "a\n\nb");
        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<a:p><a:endParaRPr lang="fr-FR" dirty="0"/></a:p>"#));
        assert_eq!(xml.matches("<a:t>").count(), 2);
    }

    #[test]
    fn test_alignment_and_typeface() {
        let mut slide = Slide::new(Layout::Blank);
        let frame = slide.add_text_box(Bounds::default(), "│ a < b │");
        frame.first().align(Alignment::Center).typeface("Consolas");

        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Consolas"/>"#));
        assert!(xml.contains("<a:t>│ a &lt; b │</a:t>"));
    }

    #[test]
    fn test_auto_shape_fill_and_hidden_line() {
        let mut slide = Slide::new(Layout::Blank);
        slide
            .add_shape(Geometry::Oval, Bounds::inches(0.5, 0.5, 1.0, 1.0))
            .solid_fill(Rgb::new(16, 185, 129))
            .hide_line();
        slide.add_shape(Geometry::RoundedRectangle, Bounds::default());

        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"name="Oval 1""#));
        assert!(xml.contains(r#"<a:prstGeom prst="ellipse">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="10B981"/></a:solidFill><a:ln><a:noFill/></a:ln>"#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert_eq!(xml.matches("<a:ln>").count(), 1);
    }

    #[test]
    fn test_placeholders_inherit_geometry() {
        let mut slide = Slide::new(Layout::Title);
        slide.set_title("Maintenance et Évolution");
        slide.set_body("Plateforme de Cours en Ligne\nBloc 4");

        let xml = slide_xml(&slide).unwrap();
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
        assert_eq!(xml.matches("<p:spPr/>").count(), 2);
        assert!(!xml.contains(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/></a:xfrm></p:spPr>"#));
    }

    #[test]
    fn test_shape_ids_are_unique() {
        let mut slide = Slide::new(Layout::Blank);
        for _ in 0..4 {
            slide.add_text_box(Bounds::default(), "x");
        }
        let xml = slide_xml(&slide).unwrap();
        for id in 2..=5 {
            assert!(xml.contains(&format!(r#"<p:cNvPr id="{}" "#, id)));
        }
    }
}
