//! Drawing primitives in top-down report coordinates.

use super::Report;
use crate::colour::Colour;
use crate::font::StandardFont;
use crate::layout::{baseline_from_top, from_top, rect_from_top, width_of_text};
use crate::page::{Page, SpanFont, SpanLayout, Stroke};
use crate::units::Pt;
use crate::ReportError;
use id_arena::Id;

/// Font, size and colour of one run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TextStyle {
    pub font: StandardFont,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn regular(size: Pt, colour: Colour) -> TextStyle {
        TextStyle {
            font: StandardFont::Helvetica,
            size,
            colour,
        }
    }

    pub fn bold(size: Pt, colour: Colour) -> TextStyle {
        TextStyle {
            font: StandardFont::HelveticaBold,
            size,
            colour,
        }
    }

    pub fn oblique(size: Pt, colour: Colour) -> TextStyle {
        TextStyle {
            font: StandardFont::HelveticaOblique,
            size,
            colour,
        }
    }

    pub fn width_of(&self, text: &str) -> Pt {
        width_of_text(text, self.font, self.size)
    }
}

impl Report {
    pub(crate) fn fill(
        &mut self,
        page: Id<Page>,
        (x, y): (Pt, Pt),
        (width, height): (Pt, Pt),
        colour: Colour,
    ) -> Result<(), ReportError> {
        let page_height = self.page_height();
        let rect = rect_from_top(page_height, x, y, width, height);
        self.document.page_mut(page)?.fill_rect(rect, colour);
        Ok(())
    }

    pub(crate) fn border(
        &mut self,
        page: Id<Page>,
        (x, y): (Pt, Pt),
        (width, height): (Pt, Pt),
        colour: Colour,
    ) -> Result<(), ReportError> {
        let page_height = self.page_height();
        let rect = rect_from_top(page_height, x, y, width, height);
        let stroke = Stroke {
            colour,
            width: self.config.metrics.border_width,
        };
        self.document.page_mut(page)?.stroke_rect(rect, stroke);
        Ok(())
    }

    /// Horizontal rule of `width` starting at `(x, y)`
    pub(crate) fn hline(
        &mut self,
        page: Id<Page>,
        (x, y): (Pt, Pt),
        width: Pt,
        stroke: Stroke,
    ) -> Result<(), ReportError> {
        let y = from_top(self.page_height(), y);
        self.document
            .page_mut(page)?
            .add_line((x, y), (x + width, y), stroke);
        Ok(())
    }

    /// Vertical rule of `height` hanging down from `(x, y)`
    pub(crate) fn vline(
        &mut self,
        page: Id<Page>,
        (x, y): (Pt, Pt),
        height: Pt,
        stroke: Stroke,
    ) -> Result<(), ReportError> {
        let page_height = self.page_height();
        let top = from_top(page_height, y);
        let bottom = from_top(page_height, y + height);
        self.document
            .page_mut(page)?
            .add_line((x, top), (x, bottom), stroke);
        Ok(())
    }

    /// Text whose top-left corner sits at `(x, y)`
    pub(crate) fn text(
        &mut self,
        page: Id<Page>,
        text: &str,
        (x, y): (Pt, Pt),
        style: TextStyle,
    ) -> Result<(), ReportError> {
        if text.is_empty() {
            return Ok(());
        }
        let baseline = baseline_from_top(self.page_height(), y, style.font, style.size);
        self.document.page_mut(page)?.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords: (x, baseline),
        });
        Ok(())
    }

    /// Text ending at `right`
    pub(crate) fn text_right(
        &mut self,
        page: Id<Page>,
        text: &str,
        (right, y): (Pt, Pt),
        style: TextStyle,
    ) -> Result<(), ReportError> {
        let x = right - style.width_of(text);
        self.text(page, text, (x, y), style)
    }

    /// Text centred horizontally on `centre`
    pub(crate) fn text_centred(
        &mut self,
        page: Id<Page>,
        text: &str,
        (centre, y): (Pt, Pt),
        style: TextStyle,
    ) -> Result<(), ReportError> {
        let x = centre - style.width_of(text) / 2.0;
        self.text(page, text, (x, y), style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContents;
    use crate::report::{ReportConfig, ReportHeader};

    #[test]
    fn text_is_placed_below_its_top_edge() {
        let mut report = Report::new(ReportConfig::default(), ReportHeader::new("T")).unwrap();
        let page = report.current_page();
        let height = report.page_height();
        let style = TextStyle::regular(Pt(10.0), crate::colour::colours::BLACK);
        report.text(page, "hola", (Pt(50.0), Pt(200.0)), style).unwrap();

        let span = report
            .document()
            .page(page)
            .unwrap()
            .spans()
            .find(|s| s.text == "hola")
            .cloned()
            .unwrap();
        assert_eq!(span.coords.0, Pt(50.0));
        let expected = height - Pt(200.0) - StandardFont::Helvetica.ascent(Pt(10.0));
        assert!((*span.coords.1 - *expected).abs() < 1e-3);
    }

    #[test]
    fn right_aligned_text_ends_at_the_edge() {
        let style = TextStyle::bold(Pt(10.0), crate::colour::colours::BLACK);
        let mut report = Report::new(ReportConfig::default(), ReportHeader::new("T")).unwrap();
        let page = report.current_page();
        report
            .text_right(page, "abcd", (Pt(300.0), Pt(150.0)), style)
            .unwrap();
        let span = report
            .document()
            .page(page)
            .unwrap()
            .spans()
            .find(|s| s.text == "abcd")
            .cloned()
            .unwrap();
        let end = span.coords.0 + style.width_of("abcd");
        assert!((*end - 300.0).abs() < 1e-3);
    }

    #[test]
    fn empty_text_paints_nothing() {
        let mut report = Report::new(ReportConfig::default(), ReportHeader::new("T")).unwrap();
        let page = report.current_page();
        let before = report.document().page(page).unwrap().contents.len();
        let style = TextStyle::oblique(Pt(8.0), crate::colour::colours::BLACK);
        report.text(page, "", (Pt(0.0), Pt(0.0)), style).unwrap();
        let contents = &report.document().page(page).unwrap().contents;
        assert_eq!(contents.len(), before);
        assert!(contents.iter().any(|c| matches!(c, PageContents::Shape(_))));
    }
}
