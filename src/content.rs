//! Conversion of buffered page contents into PDF content-stream operators.

use crate::colour::Colour;
use crate::font::encode_win_ansi;
use crate::page::{LineLayout, PageContents, ShapeLayout, SpanLayout, Stroke};
use pdf_writer::{Content, Name, Str};

/// Renders page contents to an (uncompressed) PDF content stream.
pub(crate) fn render_contents(contents: &[PageContents]) -> Vec<u8> {
    let mut content = Content::new();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans),
            PageContents::Shape(shape) => render_shape(&mut content, shape),
            PageContents::Line(line) => render_line(&mut content, line),
        }
    }

    content.finish()
}

fn render_text_spans(content: &mut Content, spans: &[SpanLayout]) {
    if spans.is_empty() {
        return;
    }

    content.save_state();
    for span in spans.iter() {
        set_fill(content, span.colour);
        content.begin_text();
        content.set_font(
            Name(span.font.font.resource_name().as_bytes()),
            span.font.size.into(),
        );
        content.next_line(span.coords.0.into(), span.coords.1.into());
        content.show(Str(&encode_win_ansi(&span.text)));
        content.end_text();
    }
    content.restore_state();
}

fn render_shape(content: &mut Content, shape: &ShapeLayout) {
    content.save_state();
    content.rect(
        shape.rect.x1.into(),
        shape.rect.y1.into(),
        shape.rect.width().into(),
        shape.rect.height().into(),
    );
    match (shape.fill, shape.stroke) {
        (Some(fill), Some(stroke)) => {
            set_fill(content, fill);
            set_stroke(content, stroke);
            content.fill_nonzero_and_stroke();
        }
        (Some(fill), None) => {
            set_fill(content, fill);
            content.fill_nonzero();
        }
        (None, Some(stroke)) => {
            set_stroke(content, stroke);
            content.stroke();
        }
        (None, None) => {
            content.end_path();
        }
    }
    content.restore_state();
}

fn render_line(content: &mut Content, line: &LineLayout) {
    content.save_state();
    set_stroke(content, line.stroke);
    content.move_to(line.from.0.into(), line.from.1.into());
    content.line_to(line.to.0.into(), line.to.1.into());
    content.stroke();
    content.restore_state();
}

fn set_fill(content: &mut Content, colour: Colour) {
    match colour {
        Colour::RGB { r, g, b } => content.set_fill_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_fill_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_fill_gray(g),
    };
}

fn set_stroke(content: &mut Content, stroke: Stroke) {
    content.set_line_width(stroke.width.into());
    match stroke.colour {
        Colour::RGB { r, g, b } => content.set_stroke_rgb(r, g, b),
        Colour::CMYK { c, m, y, k } => content.set_stroke_cmyk(c, m, y, k),
        Colour::Grey { g } => content.set_stroke_gray(g),
    };
}
