//! Fixed package parts: content types, relationships, master, layouts,
//! theme and document properties.
//!
//! Placeholder geometry in the master and layouts is scaled to the deck's
//! slide size so 4:3 and 16:9 decks both get sensible title/body regions.

use certdeck_core::{Layout, PlaceholderKind, Result, SlideSize, Theme};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

pub(crate) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub(crate) const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(crate) const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Relationship types.
pub(crate) mod rt {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
    pub const TABLE_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/tableStyles";
}

/// Content types.
mod ct {
    pub const RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PRESENTATION: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const SLIDE: &str = "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const TABLE_STYLES: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml";
    pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

/// First slide id; PowerPoint requires ids >= 256.
pub(crate) const FIRST_SLIDE_ID: usize = 256;

/// Master id; master and layout ids share a space starting at 2^31.
const MASTER_ID: u64 = 2_147_483_648;

/// A single `<Relationship>` entry.
#[derive(Debug, Clone)]
pub(crate) struct Relationship {
    pub id: String,
    pub rel_type: &'static str,
    pub target: String,
}

impl Relationship {
    pub fn new(index: usize, rel_type: &'static str, target: impl Into<String>) -> Self {
        Self {
            id: format!("rId{}", index),
            rel_type,
            target: target.into(),
        }
    }
}

/// Serialize a relationships part.
pub(crate) fn relationships_xml(rels: &[Relationship]) -> Result<String> {
    let mut xml = String::with_capacity(256 + rels.len() * 160);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<Relationships xmlns="{}">"#, NS_PKG_RELS)?;
    for rel in rels {
        write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.id,
            rel.rel_type,
            escape(rel.target.as_str())
        )?;
    }
    xml.push_str("</Relationships>");
    Ok(xml)
}

/// Package-level relationships (`_rels/.rels`).
pub(crate) fn package_rels() -> Vec<Relationship> {
    vec![
        Relationship::new(1, rt::OFFICE_DOCUMENT, "ppt/presentation.xml"),
        Relationship::new(2, rt::CORE_PROPERTIES, "docProps/core.xml"),
        Relationship::new(3, rt::EXTENDED_PROPERTIES, "docProps/app.xml"),
    ]
}

/// Relationships of `ppt/presentation.xml`: master first, then slides in
/// order, then the shared parts.
pub(crate) fn presentation_rels(slide_count: usize) -> Vec<Relationship> {
    let mut rels = Vec::with_capacity(slide_count + 5);
    rels.push(Relationship::new(
        1,
        rt::SLIDE_MASTER,
        "slideMasters/slideMaster1.xml",
    ));
    for n in 1..=slide_count {
        rels.push(Relationship::new(
            n + 1,
            rt::SLIDE,
            format!("slides/slide{}.xml", n),
        ));
    }
    let next = slide_count + 2;
    rels.push(Relationship::new(next, rt::PRES_PROPS, "presProps.xml"));
    rels.push(Relationship::new(next + 1, rt::VIEW_PROPS, "viewProps.xml"));
    rels.push(Relationship::new(next + 2, rt::THEME, "theme/theme1.xml"));
    rels.push(Relationship::new(
        next + 3,
        rt::TABLE_STYLES,
        "tableStyles.xml",
    ));
    rels
}

/// Relationships of the slide master: its layouts, then the theme.
pub(crate) fn master_rels() -> Vec<Relationship> {
    let mut rels: Vec<Relationship> = Layout::ALL
        .iter()
        .map(|l| {
            Relationship::new(
                l.part_number(),
                rt::SLIDE_LAYOUT,
                format!("../slideLayouts/slideLayout{}.xml", l.part_number()),
            )
        })
        .collect();
    rels.push(Relationship::new(
        Layout::ALL.len() + 1,
        rt::THEME,
        "../theme/theme1.xml",
    ));
    rels
}

/// Relationships of a layout: its master.
pub(crate) fn layout_rels() -> Vec<Relationship> {
    vec![Relationship::new(
        1,
        rt::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )]
}

/// Relationships of a slide: its layout.
pub(crate) fn slide_rels(layout: Layout) -> Vec<Relationship> {
    vec![Relationship::new(
        1,
        rt::SLIDE_LAYOUT,
        format!("../slideLayouts/slideLayout{}.xml", layout.part_number()),
    )]
}

/// `[Content_Types].xml` for a deck with `slide_count` slides.
pub(crate) fn content_types_xml(slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(2048 + slide_count * 160);
    xml.push_str(XML_DECLARATION);
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    write!(
        xml,
        r#"<Default Extension="rels" ContentType="{}"/><Default Extension="xml" ContentType="{}"/>"#,
        ct::RELS,
        ct::XML
    )?;

    let mut overrides: Vec<(String, &str)> = vec![
        ("/ppt/presentation.xml".to_string(), ct::PRESENTATION),
        (
            "/ppt/slideMasters/slideMaster1.xml".to_string(),
            ct::SLIDE_MASTER,
        ),
    ];
    for layout in Layout::ALL {
        overrides.push((
            format!("/ppt/slideLayouts/slideLayout{}.xml", layout.part_number()),
            ct::SLIDE_LAYOUT,
        ));
    }
    for n in 1..=slide_count {
        overrides.push((format!("/ppt/slides/slide{}.xml", n), ct::SLIDE));
    }
    overrides.extend([
        ("/ppt/theme/theme1.xml".to_string(), ct::THEME),
        ("/ppt/presProps.xml".to_string(), ct::PRES_PROPS),
        ("/ppt/viewProps.xml".to_string(), ct::VIEW_PROPS),
        ("/ppt/tableStyles.xml".to_string(), ct::TABLE_STYLES),
        ("/docProps/core.xml".to_string(), ct::CORE_PROPERTIES),
        ("/docProps/app.xml".to_string(), ct::EXTENDED_PROPERTIES),
    ]);

    for (part, content_type) in overrides {
        write!(
            xml,
            r#"<Override PartName="{}" ContentType="{}"/>"#,
            part, content_type
        )?;
    }
    xml.push_str("</Types>");
    Ok(xml)
}

/// `ppt/presentation.xml`.
pub(crate) fn presentation_xml(slide_count: usize, size: SlideSize) -> Result<String> {
    let mut xml = String::with_capacity(1024 + slide_count * 48);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        NS_A, NS_R, NS_P
    )?;
    write!(
        xml,
        r#"<p:sldMasterIdLst><p:sldMasterId id="{}" r:id="rId1"/></p:sldMasterIdLst>"#,
        MASTER_ID
    )?;
    xml.push_str("<p:sldIdLst>");
    for n in 0..slide_count {
        write!(
            xml,
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            FIRST_SLIDE_ID + n,
            n + 2
        )?;
    }
    xml.push_str("</p:sldIdLst>");

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}""#,
        size.width.get(),
        size.height.get()
    )?;
    if size == SlideSize::STANDARD_4_3 {
        xml.push_str(r#" type="screen4x3""#);
    }
    xml.push_str("/>");
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    Ok(xml)
}

/// Placeholder regions, scaled to the slide size.
struct Regions {
    title: Rect,
    body: Rect,
    center_title: Rect,
    subtitle: Rect,
}

#[derive(Clone, Copy)]
struct Rect {
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
}

impl Regions {
    fn for_size(size: SlideSize) -> Self {
        let w = size.width.get();
        let h = size.height.get();
        let frac = |v: i64, f: f64| (v as f64 * f).round() as i64;

        Self {
            title: Rect {
                x: frac(w, 0.05),
                y: frac(h, 0.04),
                cx: frac(w, 0.90),
                cy: frac(h, 0.1667),
            },
            body: Rect {
                x: frac(w, 0.05),
                y: frac(h, 0.2333),
                cx: frac(w, 0.90),
                cy: frac(h, 0.66),
            },
            center_title: Rect {
                x: frac(w, 0.075),
                y: frac(h, 0.3106),
                cx: frac(w, 0.85),
                cy: frac(h, 0.2144),
            },
            subtitle: Rect {
                x: frac(w, 0.15),
                y: frac(h, 0.5667),
                cx: frac(w, 0.70),
                cy: frac(h, 0.2556),
            },
        }
    }
}

/// `<p:ph>` element binding a shape to its layout placeholder.
pub(crate) fn placeholder_element(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::CenteredTitle => r#"<p:ph type="ctrTitle"/>"#,
        PlaceholderKind::Subtitle => r#"<p:ph type="subTitle" idx="1"/>"#,
        PlaceholderKind::Title => r#"<p:ph type="title"/>"#,
        PlaceholderKind::Body => r#"<p:ph idx="1"/>"#,
    }
}

/// Base shape name PowerPoint gives a placeholder.
pub(crate) fn placeholder_name(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::CenteredTitle | PlaceholderKind::Title => "Title",
        PlaceholderKind::Subtitle => "Subtitle",
        PlaceholderKind::Body => "Content Placeholder",
    }
}

/// Required group properties opening every shape tree.
pub(crate) const GROUP_HEADER: &str = concat!(
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#
);

/// A placeholder with explicit geometry, as found in masters and layouts.
fn write_placeholder(
    xml: &mut String,
    id: usize,
    name: &str,
    ph: &str,
    rect: Rect,
    anchor: &str,
    prompt: &str,
) -> Result<()> {
    write!(
        xml,
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>{}</p:nvPr></p:nvSpPr>"#,
        id, name, ph
    )?;
    write!(
        xml,
        r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        rect.x, rect.y, rect.cx, rect.cy
    )?;
    write!(
        xml,
        r#"<p:txBody><a:bodyPr vert="horz" anchor="{}"><a:normAutofit/></a:bodyPr><a:lstStyle/><a:p><a:r><a:rPr lang="fr-FR"/><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>"#,
        anchor,
        escape(prompt)
    )?;
    Ok(())
}

/// `ppt/slideMasters/slideMaster1.xml`.
pub(crate) fn slide_master_xml(size: SlideSize) -> Result<String> {
    let regions = Regions::for_size(size);
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    xml.push_str(GROUP_HEADER);
    write_placeholder(
        &mut xml,
        2,
        "Title Placeholder 1",
        r#"<p:ph type="title"/>"#,
        regions.title,
        "ctr",
        "Titre",
    )?;
    write_placeholder(
        &mut xml,
        3,
        "Text Placeholder 2",
        r#"<p:ph type="body" idx="1"/>"#,
        regions.body,
        "t",
        "Texte",
    )?;
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
    ));

    xml.push_str("<p:sldLayoutIdLst>");
    for layout in Layout::ALL {
        write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="rId{}"/>"#,
            MASTER_ID + layout.part_number() as u64,
            layout.part_number()
        )?;
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    xml.push_str(concat!(
        r#"<p:titleStyle><a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
        r#"<a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
        r#"<a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr></p:titleStyle>"#
    ));
    xml.push_str(concat!(
        r#"<p:bodyStyle><a:lvl1pPr marL="0" indent="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
        r#"<a:spcBef><a:spcPts val="200"/></a:spcBef><a:buNone/>"#,
        r#"<a:defRPr sz="1400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:bodyStyle>"#
    ));
    xml.push_str(concat!(
        r#"<p:otherStyle><a:defPPr><a:defRPr lang="fr-FR"/></a:defPPr>"#,
        r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
        r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
        r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:otherStyle>"#
    ));
    xml.push_str("</p:txStyles></p:sldMaster>");
    Ok(xml)
}

/// `ppt/slideLayouts/slideLayoutN.xml` for the given layout.
pub(crate) fn slide_layout_xml(layout: Layout, size: SlideSize) -> Result<String> {
    let regions = Regions::for_size(size);
    let layout_type = match layout {
        Layout::Title => "title",
        Layout::TitleAndContent => "obj",
        Layout::Blank => "blank",
    };

    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="{}" preserve="1">"#,
        NS_A, NS_R, NS_P, layout_type
    )?;
    write!(xml, r#"<p:cSld name="{}"><p:spTree>"#, layout.name())?;
    xml.push_str(GROUP_HEADER);

    for (index, kind) in layout.placeholders().iter().enumerate() {
        let (rect, anchor, prompt) = match kind {
            PlaceholderKind::CenteredTitle => (regions.center_title, "ctr", "Titre"),
            PlaceholderKind::Subtitle => (regions.subtitle, "t", "Sous-titre"),
            PlaceholderKind::Title => (regions.title, "ctr", "Titre"),
            PlaceholderKind::Body => (regions.body, "t", "Texte"),
        };
        write_placeholder(
            &mut xml,
            index + 2,
            &format!("{} {}", placeholder_name(*kind), index + 1),
            placeholder_element(*kind),
            rect,
            anchor,
            prompt,
        )?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// `ppt/theme/theme1.xml`, with the accent colors taken from the palette.
pub(crate) fn theme_xml(theme: &Theme) -> Result<String> {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<a:theme xmlns:a="{}" name="Certification">"#, NS_A)?;
    xml.push_str(r#"<a:themeElements><a:clrScheme name="Certification">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    write!(xml, r#"<a:dk2><a:srgbClr val="{}"/></a:dk2>"#, theme.dark)?;
    write!(xml, r#"<a:lt2><a:srgbClr val="{}"/></a:lt2>"#, theme.light)?;
    let accents = [
        theme.primary,
        theme.secondary,
        theme.accent,
        theme.warning,
        theme.dark,
        theme.light,
    ];
    for (i, color) in accents.iter().enumerate() {
        write!(
            xml,
            r#"<a:accent{n}><a:srgbClr val="{c}"/></a:accent{n}>"#,
            n = i + 1,
            c = color
        )?;
    }
    xml.push_str(r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#);
    xml.push_str(r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#);
    xml.push_str("</a:clrScheme>");

    xml.push_str(concat!(
        r#"<a:fontScheme name="Office">"#,
        r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
        r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
        r#"</a:fontScheme>"#
    ));

    const PH_FILL: &str = r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#;
    xml.push_str(r#"<a:fmtScheme name="Office"><a:fillStyleLst>"#);
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:fillStyleLst><a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(
            xml,
            r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr">{}<a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#,
            width, PH_FILL
        )?;
    }
    xml.push_str("</a:lnStyleLst><a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst><a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(PH_FILL);
    }
    xml.push_str("</a:bgFillStyleLst></a:fmtScheme></a:themeElements>");
    xml.push_str("<a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    Ok(xml)
}

/// `ppt/presProps.xml`.
pub(crate) fn pres_props_xml() -> String {
    format!(
        r#"{}<p:presentationPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"/>"#,
        XML_DECLARATION, NS_A, NS_R, NS_P
    )
}

/// `ppt/viewProps.xml`.
pub(crate) fn view_props_xml() -> String {
    format!(
        r#"{}<p:viewPr xmlns:a="{}" xmlns:r="{}" xmlns:p="{}"><p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#,
        XML_DECLARATION, NS_A, NS_R, NS_P
    )
}

/// `ppt/tableStyles.xml`.
pub(crate) fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECLARATION, NS_A
    )
}

/// `docProps/core.xml`. No timestamps, so output is reproducible.
pub(crate) fn core_props_xml(title: &str) -> Result<String> {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));
    write!(xml, "<dc:title>{}</dc:title>", escape(title))?;
    xml.push_str("<dc:creator>certdeck</dc:creator><dc:language>fr-FR</dc:language>");
    xml.push_str("<cp:revision>1</cp:revision></cp:coreProperties>");
    Ok(xml)
}

/// `docProps/app.xml`.
pub(crate) fn app_props_xml(slide_count: usize, size: SlideSize) -> Result<String> {
    let format = if size == SlideSize::STANDARD_4_3 {
        "On-screen Show (4:3)"
    } else {
        "Widescreen"
    };
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_DECLARATION);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#
    ));
    write!(
        xml,
        "<Application>certdeck</Application><PresentationFormat>{}</PresentationFormat><Slides>{}</Slides>",
        format, slide_count
    )?;
    xml.push_str("</Properties>");
    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_rels_order() {
        let rels = presentation_rels(3);
        assert_eq!(rels.len(), 8);
        assert_eq!(rels[0].id, "rId1");
        assert_eq!(rels[0].rel_type, rt::SLIDE_MASTER);
        assert_eq!(rels[1].target, "slides/slide1.xml");
        assert_eq!(rels[3].id, "rId4");
        assert_eq!(rels[3].target, "slides/slide3.xml");
        assert_eq!(rels[6].target, "theme/theme1.xml");
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let xml = presentation_xml(2, SlideSize::STANDARD_4_3).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"cx="9144000" cy="6858000" type="screen4x3""#));

        let wide = presentation_xml(1, SlideSize::WIDESCREEN_16_9).unwrap();
        assert!(wide.contains(r#"<p:sldSz cx="12192000" cy="6858000"/>"#));
    }

    #[test]
    fn test_content_types_cover_every_slide() {
        let xml = content_types_xml(13).unwrap();
        assert!(xml.contains("/ppt/slides/slide1.xml"));
        assert!(xml.contains("/ppt/slides/slide13.xml"));
        assert!(!xml.contains("/ppt/slides/slide14.xml"));
        assert!(xml.contains("/ppt/slideLayouts/slideLayout3.xml"));
        assert_eq!(xml.matches("<Override ").count(), 2 + 3 + 13 + 6);
    }

    #[test]
    fn test_master_references_all_layouts() {
        let xml = slide_master_xml(SlideSize::STANDARD_4_3).unwrap();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483651" r:id="rId3"/>"#));
        assert_eq!(master_rels().last().unwrap().id, "rId4");
    }

    #[test]
    fn test_layout_geometry_scales_with_width() {
        let narrow = Regions::for_size(SlideSize::STANDARD_4_3);
        let wide = Regions::for_size(SlideSize::WIDESCREEN_16_9);
        assert_eq!(narrow.title.x, 457_200);
        assert!(wide.body.cx > narrow.body.cx);
        assert_eq!(wide.body.y, narrow.body.y);
    }

    #[test]
    fn test_blank_layout_has_no_placeholders() {
        let xml = slide_layout_xml(Layout::Blank, SlideSize::default()).unwrap();
        assert!(xml.contains(r#"type="blank""#));
        assert!(!xml.contains("<p:ph"));

        let xml = slide_layout_xml(Layout::Title, SlideSize::default()).unwrap();
        assert!(xml.contains(r#"<p:ph type="ctrTitle"/>"#));
        assert!(xml.contains(r#"<p:ph type="subTitle" idx="1"/>"#));
    }

    #[test]
    fn test_theme_uses_palette() {
        let xml = theme_xml(&Theme::CERTIFICATION).unwrap();
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="3B82F6"/></a:accent1>"#));
        assert!(xml.contains(r#"<a:accent4><a:srgbClr val="EF4444"/></a:accent4>"#));
    }

    #[test]
    fn test_core_props_escape_title() {
        let xml = core_props_xml("R&D <Bloc>").unwrap();
        assert!(xml.contains("<dc:title>R&amp;D &lt;Bloc&gt;</dc:title>"));
    }
}
