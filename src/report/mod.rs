//! Paginated tabular reports.
//!
//! A [Report] owns one [Document] and paints top to bottom: a document header
//! on every page, then tables, summaries and placeholder panels, breaking to a
//! new page whenever the next block would run into the footer area. Finishing
//! the report stamps a `Page i of N` footer on every page, which is only
//! possible once the page count is known, so pages stay buffered until then.
//!
//! All painting positions are measured down from the top edge of the page.
//!
//! ```
//! use report_gen::report::{Report, ReportConfig, ReportHeader, TableData};
//!
//! let mut data = TableData::new(&["Nombre Completo", "DNI/NIE", "Email"]);
//! data.push_row(["Pérez Gil, Ana", "12345678Z", "ana.perez@example.com"]);
//!
//! let mut report = Report::new(ReportConfig::default(), ReportHeader::new("Employees"))?;
//! let top = report.content_top();
//! let end = report.add_table(&data, top)?;
//! report.add_summary("Totals", &[("Employees", 1)], end.y)?;
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! report.write(&mut pdf)?;
//! # Ok::<(), report_gen::ReportError>(())
//! ```

mod blocks;
mod cell;
mod columns;
mod config;
mod paint;
mod rows;
mod table;

pub use cell::*;
pub use columns::*;
pub use config::*;
pub use rows::*;
pub use table::TableState;

use crate::document::Document;
use crate::info::Info;
use crate::page::{Page, Stroke};
use crate::units::Pt;
use crate::ReportError;
use chrono::{DateTime, Local};
use id_arena::Id;
use paint::TextStyle;
use std::cmp::Ordering;
use std::io::Write;

/// A paint position: which page (0-based, in document order) and how far down it.
///
/// Cursors order by page first, so a cursor on a later page is always "after"
/// one on an earlier page regardless of `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page_index: usize,
    pub y: Pt,
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.page_index.cmp(&other.page_index) {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ordering => Some(ordering),
        }
    }
}

/// Which document header a new page receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// Title band with subtitle and generation timestamp
    Full,
    /// Slim band reading `"<title> (continued)"`
    Continuation,
}

/// Title block shared by every page of a report
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub title: String,
    pub subtitle: Option<String>,
    pub generated_at: DateTime<Local>,
}

impl ReportHeader {
    /// A header generated now, without a subtitle
    pub fn new<S: ToString>(title: S) -> ReportHeader {
        ReportHeader {
            title: title.to_string(),
            subtitle: None,
            generated_at: Local::now(),
        }
    }

    /// Set the subtitle (typically the applied filters), modifying `self`
    pub fn subtitle<S: ToString>(&mut self, subtitle: S) -> &mut Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Pin the generation timestamp, modifying `self`
    pub fn generated_at(&mut self, generated_at: DateTime<Local>) -> &mut Self {
        self.generated_at = generated_at;
        self
    }
}

/// One report under construction. See the [module documentation](self).
pub struct Report {
    document: Document,
    config: ReportConfig,
    header: ReportHeader,
    current: Id<Page>,
}

impl Report {
    /// Starts a report: creates the first page and paints the full document header on it
    pub fn new(config: ReportConfig, header: ReportHeader) -> Result<Report, ReportError> {
        let mut document = Document::default();
        let current = document.add_page(Page::new(config.page_size, Some(config.margins)));
        let mut report = Report {
            document,
            config,
            header,
            current,
        };
        report.paint_document_header(current, HeaderKind::Full)?;
        log::debug!("started report \"{}\"", report.header.title);
        Ok(report)
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn header(&self) -> &ReportHeader {
        &self.header
    }

    /// The buffered pages painted so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Handle of the page currently being painted
    pub fn current_page(&self) -> Id<Page> {
        self.current
    }

    /// Position of the current page in the document
    pub fn current_page_index(&self) -> usize {
        self.document.page_count().saturating_sub(1)
    }

    /// A cursor at `y` on the current page
    pub fn cursor(&self, y: Pt) -> Cursor {
        Cursor {
            page_index: self.current_page_index(),
            y,
        }
    }

    /// Where content starts below the document header, on every page
    pub fn content_top(&self) -> Pt {
        self.config.metrics.page_top_offset
    }

    pub fn content_left(&self) -> Pt {
        self.config.margins.left
    }

    pub fn content_width(&self) -> Pt {
        self.config.content_width()
    }

    pub fn page_height(&self) -> Pt {
        self.config.page_size.1
    }

    /// Lowest point content may reach before the footer area
    pub fn page_limit(&self) -> Pt {
        self.page_height() - self.config.metrics.bottom_reserve
    }

    /// Whether a block of `height` starting at `y` stays above the footer area
    pub fn fits(&self, y: Pt, height: Pt) -> bool {
        y + height <= self.page_limit()
    }

    pub(crate) fn planner(&self) -> TablePlanner<'_> {
        TablePlanner::new(
            &self.config.columns,
            &self.config.metrics,
            self.config.theme.body_size,
        )
    }

    /// Starts a new page with the requested document header and returns the
    /// cursor position content resumes at
    pub fn page_break(&mut self, kind: HeaderKind) -> Result<Pt, ReportError> {
        let page = Page::new(self.config.page_size, Some(self.config.margins));
        self.current = self.document.add_page(page);
        self.paint_document_header(self.current, kind)?;
        log::debug!(
            "page break: now on page {} ({:?} header)",
            self.document.page_count(),
            kind
        );
        Ok(self.content_top())
    }

    /// Paints the page-level header at the top margin of `page`, returning the
    /// y just below it
    pub fn paint_document_header(&mut self, page: Id<Page>, kind: HeaderKind) -> Result<Pt, ReportError> {
        let theme = self.config.theme.clone();
        let left = self.content_left();
        let width = self.content_width();
        let top = self.config.margins.top;
        let inset = Pt(12.0);

        match kind {
            HeaderKind::Full => {
                let height = self.config.metrics.document_header_height;
                self.fill(page, (left, top), (width, height), theme.primary)?;
                let title = self.header.title.clone();
                let title_style = TextStyle::bold(theme.title_size, theme.on_primary);
                self.text(page, &title, (left + inset, top + Pt(10.0)), title_style)?;

                let details_y = top + height - inset - theme.subtitle_size;
                let details = TextStyle::regular(theme.subtitle_size, theme.on_primary);
                if let Some(subtitle) = self.header.subtitle.clone() {
                    self.text(page, &subtitle, (left + inset, details_y), details)?;
                }
                let generated = format!(
                    "{}: {}",
                    self.config.labels.generated,
                    self.header.generated_at.format(&self.config.labels.date_format)
                );
                self.text_right(page, &generated, (left + width - inset, details_y), details)?;
                Ok(top + height)
            }
            HeaderKind::Continuation => {
                let height = self.config.metrics.continuation_header_height;
                self.fill(page, (left, top), (width, height), theme.primary)?;
                let label = format!("{} {}", self.header.title, self.config.labels.continued);
                let y = top + (height - theme.section_size) / 2.0;
                let style = TextStyle::bold(theme.section_size, theme.on_primary);
                self.text(page, &label, (left + inset, y), style)?;
                Ok(top + height)
            }
        }
    }

    /// Stamps the footer on every page and hands back the finished document.
    ///
    /// Runs in two phases: the ordered page handles are collected first, then
    /// each page is revisited to paint an identical footer with `Page i of N`.
    pub fn finish(mut self) -> Result<Document, ReportError> {
        let pages: Vec<Id<Page>> = self.document.page_order.clone();
        let total = pages.len();
        for (i, page) in pages.into_iter().enumerate() {
            self.paint_footer(page, i + 1, total)?;
        }

        let mut info = Info::new();
        info.title(&self.header.title).created(self.header.generated_at);
        if let Some(subtitle) = &self.header.subtitle {
            info.subject(subtitle);
        }
        if let Some(author) = &self.config.author {
            info.author(author);
        }
        self.document.set_info(info);

        log::info!("finished report \"{}\" with {} pages", self.header.title, total);
        Ok(self.document)
    }

    /// Finishes the report and writes it as PDF to `w`
    pub fn write<W: Write>(self, w: W) -> Result<(), ReportError> {
        self.finish()?.write(w)
    }

    fn paint_footer(&mut self, page: Id<Page>, number: usize, total: usize) -> Result<(), ReportError> {
        let theme = self.config.theme.clone();
        let left = self.content_left();
        let width = self.content_width();
        let rule_y = self.page_height() - self.config.margins.bottom;
        let text_y = rule_y + Pt(6.0);
        let rule = Stroke {
            colour: theme.border,
            width: self.config.metrics.border_width,
        };
        let style = TextStyle::regular(theme.footer_size, theme.muted);

        self.hline(page, (left, rule_y), width, rule)?;
        let title = self.header.title.clone();
        self.text(page, &title, (left, text_y), style)?;
        let page_of = self.config.labels.page_of(number, total);
        self.text_right(page, &page_of, (left + width, text_y), style)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_header() -> ReportHeader {
        ReportHeader::new("Listado de empleados")
            .subtitle("Centro: Madrid")
            .generated_at(Local.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap())
            .clone()
    }

    fn texts(report: &Document, page_index: usize) -> Vec<String> {
        let id = report.id_of_page_index(page_index).unwrap();
        report.page(id).unwrap().spans().map(|s| s.text.clone()).collect()
    }

    #[test]
    fn cursors_order_by_page_then_y() {
        let early = Cursor { page_index: 0, y: Pt(700.0) };
        let late = Cursor { page_index: 1, y: Pt(110.0) };
        assert!(late > early);
        assert!(Cursor { page_index: 1, y: Pt(200.0) } > late);
    }

    #[test]
    fn first_page_gets_the_full_header() {
        let report = Report::new(ReportConfig::default(), fixed_header()).unwrap();
        let texts = texts(report.document(), 0);
        assert!(texts.contains(&"Listado de empleados".to_string()));
        assert!(texts.contains(&"Centro: Madrid".to_string()));
        assert!(texts.contains(&"Generated: 17/05/2024 09:30".to_string()));
    }

    #[test]
    fn page_breaks_add_a_continuation_header() {
        let mut report = Report::new(ReportConfig::default(), fixed_header()).unwrap();
        let y = report.page_break(HeaderKind::Continuation).unwrap();
        assert_eq!(y, report.content_top());
        assert_eq!(report.current_page_index(), 1);
        assert_eq!(
            texts(report.document(), 1),
            vec!["Listado de empleados (continued)".to_string()]
        );
    }

    #[test]
    fn footers_number_every_page() {
        let mut report = Report::new(ReportConfig::default(), fixed_header()).unwrap();
        report.page_break(HeaderKind::Full).unwrap();
        report.page_break(HeaderKind::Continuation).unwrap();
        let document = report.finish().unwrap();
        assert_eq!(document.page_count(), 3);
        for i in 0..3 {
            let expected = format!("Page {} of 3", i + 1);
            assert!(texts(&document, i).contains(&expected), "missing footer on page {i}");
        }
        let info = document.info.as_ref().unwrap();
        assert_eq!(info.title.as_deref(), Some("Listado de empleados"));
        assert_eq!(info.subject.as_deref(), Some("Centro: Madrid"));
    }

    #[test]
    fn footer_template_is_configurable() {
        let mut config = ReportConfig::default();
        config.labels.page_of = "Página {page} de {pages}".into();
        let report = Report::new(config, fixed_header()).unwrap();
        let document = report.finish().unwrap();
        assert!(texts(&document, 0).contains(&"Página 1 de 1".to_string()));
    }
}
