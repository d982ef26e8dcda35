use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::StandardFont;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::*;
use crate::ReportError;
use pdf_writer::{Filter, Finish, Name, Pdf};

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: StandardFont,
    pub size: Pt,
}

/// A single line of text placed with its baseline at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    pub colour: Colour,
    pub width: Pt,
}

/// A rectangle that is filled, outlined, or both
#[derive(Clone, PartialEq, Debug)]
pub struct ShapeLayout {
    pub rect: Rect,
    pub fill: Option<Colour>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub stroke: Stroke,
}

/// Everything that can be painted on a page, in painting order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Shape(ShapeLayout),
    Line(LineLayout),
}

/// A single page. Pages buffer their contents until the owning
/// [Document](crate::Document) is written, so any page can be revisited
/// (e.g. to stamp a footer) after later pages were started.
///
/// Coordinates are PDF user space: the origin is the bottom-left corner.
#[derive(Debug)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    /// The painted contents
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_else(Margins::empty);
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.contents.push(PageContents::Shape(ShapeLayout {
            rect,
            fill: Some(colour),
            stroke: None,
        }));
    }

    pub fn stroke_rect(&mut self, rect: Rect, stroke: Stroke) {
        self.contents.push(PageContents::Shape(ShapeLayout {
            rect,
            fill: None,
            stroke: Some(stroke),
        }));
    }

    pub fn add_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), stroke: Stroke) {
        self.contents
            .push(PageContents::Line(LineLayout { from, to, stroke }));
    }

    /// Iterate over every text span on the page, in painting order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().flat_map(|c| match c {
            PageContents::Text(spans) => spans.as_slice(),
            _ => &[][..],
        })
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), ReportError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(ReportError::PageMissing)?;
        let parent = refs
            .get(RefType::PageTree)
            .ok_or(ReportError::PageMissing)?;
        let font_refs: Vec<(StandardFont, pdf_writer::Ref)> = StandardFont::ALL
            .iter()
            .filter_map(|&font| refs.get(RefType::Font(font.index())).map(|r| (font, r)))
            .collect();
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font, font_ref) in font_refs.iter() {
            resource_fonts.pair(Name(font.resource_name().as_bytes()), *font_ref);
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents);
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(content_id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);

        Ok(())
    }
}
