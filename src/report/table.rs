use super::cell::{CellValue, TableData};
use super::paint::TextStyle;
use super::rows::CellDisplay;
use super::{Cursor, HeaderKind, Report};
use crate::colour::Colour;
use crate::page::{Page, Stroke};
use crate::units::Pt;
use crate::ReportError;
use id_arena::Id;

/// Where [Report::create_table] is in painting a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableState {
    /// The header band goes at `y`; rows resume from `next_row`
    PaintingHeader {
        y: Pt,
        next_row: usize,
        fresh_page: bool,
    },
    /// Row `next_row` goes at `y`, if it fits
    PaintingRows {
        y: Pt,
        next_row: usize,
        fresh_page: bool,
    },
    /// Row `next_row` did not fit on the current page
    PageBreak { next_row: usize },
    /// Every row has been painted; the table ends at `y`
    Done { y: Pt },
}

impl Report {
    /// Paints the column header band at `y` and returns the y below it.
    ///
    /// Labels are bold, centred in their columns and never wrapped.
    pub fn paint_header_band<H: AsRef<str>>(
        &mut self,
        page: Id<Page>,
        headers: &[H],
        widths: &[Pt],
        y: Pt,
    ) -> Result<Pt, ReportError> {
        let theme = self.config.theme.clone();
        let height = self.config.metrics.header_band_height;
        let left = self.content_left();
        let table_width: Pt = widths.iter().copied().sum();

        self.fill(page, (left, y), (table_width, height), theme.primary)?;
        self.column_separators(page, widths, y, height, theme.on_primary)?;

        let style = TextStyle::bold(theme.header_size, theme.on_primary);
        let label_y = y + (height - theme.header_size) / 2.0;
        let mut x = left;
        for (header, &width) in headers.iter().zip(widths) {
            self.text_centred(page, header.as_ref(), (x + width / 2.0, label_y), style)?;
            x += width;
        }

        Ok(y + height)
    }

    /// Paints one data row at `y` and returns the y below it.
    ///
    /// The row is as tall as [TablePlanner::row_height](super::TablePlanner::row_height)
    /// says; stripes alternate on `is_even`.
    pub fn paint_data_row<H: AsRef<str>>(
        &mut self,
        page: Id<Page>,
        row: &[CellValue],
        widths: &[Pt],
        headers: &[H],
        y: Pt,
        is_even: bool,
    ) -> Result<Pt, ReportError> {
        let (height, cells) = {
            let planner = self.planner();
            let height = planner.row_height(row, widths, headers);
            let cells: Vec<CellDisplay> = headers
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (header, &width))| {
                    let text = row.get(i).map(ToString::to_string).unwrap_or_default();
                    planner.cell_display(i, header.as_ref(), &text, width)
                })
                .collect();
            (height, cells)
        };

        let theme = self.config.theme.clone();
        let metrics = self.config.metrics.clone();
        let left = self.content_left();
        let table_width: Pt = widths.iter().copied().sum();
        let stripe = if is_even {
            theme.stripe_even
        } else {
            theme.stripe_odd
        };

        self.fill(page, (left, y), (table_width, height), stripe)?;
        self.border(page, (left, y), (table_width, height), theme.border)?;
        self.column_separators(page, widths, y, height, theme.border)?;

        let style = TextStyle::regular(theme.body_size, theme.text);
        let mut x = left;
        for (cell, &width) in cells.iter().zip(widths) {
            let text_x = x + metrics.cell_padding_x;
            let text_y = y + metrics.cell_padding_y;
            match cell {
                CellDisplay::Single(text) => self.text(page, text, (text_x, text_y), style)?,
                CellDisplay::Wrapped(lines) => {
                    let mut line_y = text_y;
                    for line in lines {
                        self.text(page, line, (text_x, line_y), style)?;
                        line_y += metrics.line_height;
                    }
                }
            }
            x += width;
        }

        Ok(y + height)
    }

    /// Paints a whole table starting at `start_y` on the current page, breaking
    /// pages as rows run out of room and repeating the header band on every new
    /// page. Returns the cursor below the table plus the trailing margin.
    ///
    /// A row taller than an entire page is painted on a fresh page regardless
    /// and overflows it.
    pub fn create_table<H: AsRef<str>>(
        &mut self,
        headers: &[H],
        rows: &[Vec<CellValue>],
        start_y: Pt,
    ) -> Result<Cursor, ReportError> {
        let widths = self.planner().column_widths(headers, self.content_width());
        let mut state = TableState::PaintingHeader {
            y: start_y,
            next_row: 0,
            fresh_page: false,
        };

        let end = loop {
            state = match state {
                TableState::PaintingHeader {
                    y,
                    next_row,
                    fresh_page,
                } => {
                    let y = self.paint_header_band(self.current, headers, &widths, y)?;
                    TableState::PaintingRows {
                        y,
                        next_row,
                        fresh_page,
                    }
                }
                TableState::PaintingRows {
                    y,
                    next_row,
                    fresh_page,
                } => match rows.get(next_row) {
                    None => TableState::Done { y },
                    Some(row) => {
                        let height = self.planner().row_height(row, &widths, headers);
                        if !fresh_page && !self.fits(y, height) {
                            TableState::PageBreak { next_row }
                        } else {
                            if row.len() != headers.len() {
                                log::warn!(
                                    "row {} has {} cells for {} columns",
                                    next_row,
                                    row.len(),
                                    headers.len()
                                );
                            }
                            log::trace!("row {} at {} ({} high)", next_row, y, height);
                            let is_even = next_row % 2 == 0;
                            let y = self.paint_data_row(self.current, row, &widths, headers, y, is_even)?;
                            TableState::PaintingRows {
                                y,
                                next_row: next_row + 1,
                                fresh_page: false,
                            }
                        }
                    }
                },
                TableState::PageBreak { next_row } => {
                    let y = self.page_break(HeaderKind::Full)?;
                    TableState::PaintingHeader {
                        y,
                        next_row,
                        fresh_page: true,
                    }
                }
                TableState::Done { y } => break y,
            };
        };

        log::debug!(
            "table of {} rows ends on page {} at {}",
            rows.len(),
            self.document.page_count(),
            end
        );
        Ok(self.cursor(end + self.config.metrics.trailing_margin))
    }

    /// Paints `data` as a table, or the no-data panel when it has no rows
    pub fn add_table(&mut self, data: &TableData, y: Pt) -> Result<Cursor, ReportError> {
        if data.rows.is_empty() {
            let message = self.config.labels.no_data.clone();
            return self.add_no_data_message(&message, y);
        }
        self.create_table(&data.headers, &data.rows, y)
    }

    /// Vertical rules between columns (not at the table edges)
    fn column_separators(
        &mut self,
        page: Id<Page>,
        widths: &[Pt],
        y: Pt,
        height: Pt,
        colour: Colour,
    ) -> Result<(), ReportError> {
        let stroke = Stroke {
            colour,
            width: self.config.metrics.border_width,
        };
        let mut x = self.content_left();
        for &width in widths.iter().take(widths.len().saturating_sub(1)) {
            x += width;
            self.vline(page, (x, y), height, stroke)?;
        }
        Ok(())
    }
}
