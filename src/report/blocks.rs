//! Blocks painted between tables: section titles, summaries and the
//! placeholder shown when a query returned nothing.

use super::paint::TextStyle;
use super::{Cursor, HeaderKind, Report};
use crate::font::StandardFont;
use crate::page::Stroke;
use crate::units::Pt;
use crate::ReportError;
use std::fmt::Display;

const SECTION_RULE_GAP: Pt = Pt(4.0);
const SECTION_SPACING: Pt = Pt(8.0);

impl Report {
    /// Paints a bordered panel with a title line and one `label: value` line
    /// per item. An empty `title` falls back to the configured summary label.
    ///
    /// If the panel does not fit above the footer area it moves to a new page
    /// with a continuation header.
    pub fn add_summary<L: Display, V: Display>(
        &mut self,
        title: &str,
        items: &[(L, V)],
        y: Pt,
    ) -> Result<Cursor, ReportError> {
        let theme = self.config.theme.clone();
        let padding = self.config.metrics.panel_padding;
        let line = StandardFont::Helvetica.line_height(theme.summary_size);
        let title_line = StandardFont::HelveticaBold.line_height(theme.summary_size) + Pt(4.0);
        let height = padding * 2.0 + title_line + line * items.len() as f32;

        let y = if self.fits(y, height) {
            y
        } else {
            self.page_break(HeaderKind::Continuation)?
        };

        let page = self.current;
        let left = self.content_left();
        let width = self.content_width();
        self.fill(page, (left, y), (width, height), theme.panel)?;
        self.border(page, (left, y), (width, height), theme.border)?;

        let title = if title.is_empty() {
            self.config.labels.summary.clone()
        } else {
            title.to_string()
        };
        let x = left + padding;
        let mut line_y = y + padding;
        self.text(page, &title, (x, line_y), TextStyle::bold(theme.summary_size, theme.primary))?;
        line_y += title_line;

        let style = TextStyle::regular(theme.summary_size, theme.text);
        for (label, value) in items {
            self.text(page, &format!("{label}: {value}"), (x, line_y), style)?;
            line_y += line;
        }

        Ok(self.cursor(y + height + self.config.metrics.trailing_margin))
    }

    /// Paints a centred placeholder panel instead of a table
    pub fn add_no_data_message(&mut self, message: &str, y: Pt) -> Result<Cursor, ReportError> {
        let theme = self.config.theme.clone();
        let height = self.config.metrics.placeholder_height;

        let y = if self.fits(y, height) {
            y
        } else {
            self.page_break(HeaderKind::Continuation)?
        };

        let page = self.current;
        let left = self.content_left();
        let width = self.content_width();
        self.fill(page, (left, y), (width, height), theme.panel)?;
        self.border(page, (left, y), (width, height), theme.border)?;

        let style = TextStyle::oblique(theme.summary_size, theme.muted);
        let text_y = y + (height - theme.summary_size) / 2.0;
        self.text_centred(page, message, (left + width / 2.0, text_y), style)?;

        log::debug!("no data: painted placeholder on page {}", self.document.page_count());
        Ok(self.cursor(y + height + self.config.metrics.trailing_margin))
    }

    /// Paints a bold heading with an accent rule under it. A heading never
    /// ends a page: if it would not fit together with a header band and one
    /// minimum-height row, it moves to a new page first.
    pub fn add_section_title(&mut self, text: &str, y: Pt) -> Result<Cursor, ReportError> {
        let theme = self.config.theme.clone();
        let metrics = self.config.metrics.clone();
        let font = StandardFont::HelveticaBold;
        let rule_y = font.line_height(theme.section_size) + SECTION_RULE_GAP;
        let height = rule_y + SECTION_SPACING;

        let needed = height + metrics.header_band_height + metrics.min_row_height;
        let y = if self.fits(y, needed) {
            y
        } else {
            self.page_break(HeaderKind::Continuation)?
        };

        let page = self.current;
        let left = self.content_left();
        self.text(page, text, (left, y), TextStyle::bold(theme.section_size, theme.primary))?;
        let rule = Stroke {
            colour: theme.accent,
            width: Pt(1.0),
        };
        self.hline(page, (left, y + rule_y), self.content_width(), rule)?;

        Ok(self.cursor(y + height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, ReportHeader};

    fn report() -> Report {
        Report::new(ReportConfig::default(), ReportHeader::new("Ausencias")).unwrap()
    }

    fn texts_on(report: &Report, page_index: usize) -> Vec<String> {
        let id = report.document().id_of_page_index(page_index).unwrap();
        report
            .document()
            .page(id)
            .unwrap()
            .spans()
            .map(|s| s.text.clone())
            .collect()
    }

    #[test]
    fn summary_lists_every_item() {
        let mut report = report();
        let items = [("Total empleados", 42.to_string()), ("Bajas", "3".to_string())];
        let cursor = report.add_summary("", &items, Pt(200.0)).unwrap();
        assert_eq!(cursor.page_index, 0);
        assert!(cursor.y > Pt(200.0));

        let texts = texts_on(&report, 0);
        assert!(texts.contains(&"Summary".to_string()));
        assert!(texts.contains(&"Total empleados: 42".to_string()));
        assert!(texts.contains(&"Bajas: 3".to_string()));
    }

    #[test]
    fn summary_near_the_bottom_moves_to_a_continuation_page() {
        let mut report = report();
        let y = report.page_limit() - Pt(20.0);
        let cursor = report.add_summary("Totales", &[("Días", 10)], y).unwrap();
        assert_eq!(report.document().page_count(), 2);
        assert_eq!(cursor.page_index, 1);
        let texts = texts_on(&report, 1);
        assert!(texts.contains(&"Ausencias (continued)".to_string()));
        assert!(texts.contains(&"Totales".to_string()));
    }

    #[test]
    fn placeholder_is_centred_and_advances_the_cursor() {
        let mut report = report();
        let cursor = report.add_no_data_message("Sin resultados", Pt(110.0)).unwrap();
        assert_eq!(cursor.y, Pt(110.0 + 60.0 + 20.0));

        let page = report.current_page();
        let span = report
            .document()
            .page(page)
            .unwrap()
            .spans()
            .find(|s| s.text == "Sin resultados")
            .cloned()
            .unwrap();
        let centre = report.content_left() + report.content_width() / 2.0;
        let width = crate::layout::width_of_text("Sin resultados", span.font.font, span.font.size);
        assert!((*(span.coords.0 + width / 2.0) - *centre).abs() < 1e-2);
        assert_eq!(span.font.font, StandardFont::HelveticaOblique);
    }

    #[test]
    fn section_titles_keep_room_for_a_table() {
        let mut report = report();
        let cursor = report.add_section_title("Contratos", Pt(110.0)).unwrap();
        assert_eq!(cursor.page_index, 0);

        // enough room for the heading alone, but not for a band and a row
        let y = report.page_limit() - Pt(40.0);
        let cursor = report.add_section_title("Ausencias", y).unwrap();
        assert_eq!(cursor.page_index, 1);
        assert!(texts_on(&report, 1).contains(&"Ausencias".to_string()));
    }
}
