//! Row sizing and the display rules applied to cell text.

use super::cell::CellValue;
use super::columns::ColumnCatalog;
use super::config::TableMetrics;
use crate::layout::{chars_per_line, wrap_words};
use crate::units::Pt;

/// First-column text longer than this is compressed when it looks like a person's name
const NAME_COMPRESS_THRESHOLD: usize = 20;
/// E-mail addresses longer than this lose most of their local part
const EMAIL_SHORTEN_THRESHOLD: usize = 18;
const EMAIL_LOCAL_KEEP: usize = 10;
/// Any other text longer than this is cut down to [TRUNCATE_KEEP] characters
const TRUNCATE_THRESHOLD: usize = 15;
const TRUNCATE_KEEP: usize = 12;
const ELLIPSIS: &str = "...";

/// What a cell shows once the display rules have been applied
#[derive(Debug, Clone, PartialEq)]
pub enum CellDisplay {
    /// A single line, possibly shortened
    Single(String),
    /// The full text, one entry per wrapped line
    Wrapped(Vec<String>),
}

/// Pure sizing and formatting decisions for one table. Never paints, so it can
/// be asked about a row before deciding whether that row fits on the page.
pub struct TablePlanner<'a> {
    catalog: &'a ColumnCatalog,
    metrics: &'a TableMetrics,
    body_size: Pt,
}

impl<'a> TablePlanner<'a> {
    pub fn new(catalog: &'a ColumnCatalog, metrics: &'a TableMetrics, body_size: Pt) -> Self {
        TablePlanner {
            catalog,
            metrics,
            body_size,
        }
    }

    pub fn column_widths<H: AsRef<str>>(&self, headers: &[H], total_width: Pt) -> Vec<Pt> {
        self.catalog.column_widths(headers, total_width)
    }

    /// Lines of a wrap-eligible cell of the given column width
    pub fn wrap_cell(&self, text: &str, column_width: Pt) -> Vec<String> {
        let usable = column_width - self.metrics.cell_padding_x * 2.0;
        let max_chars = chars_per_line(usable, self.body_size, self.metrics.char_width_factor);
        wrap_words(text, max_chars)
    }

    /// Height of a row: the minimum row height, grown to fit the tallest
    /// wrap-eligible cell. Columns outside the wrap-eligible set never add height.
    pub fn row_height<H: AsRef<str>>(&self, row: &[CellValue], widths: &[Pt], headers: &[H]) -> Pt {
        let min = self.metrics.min_row_height;
        headers
            .iter()
            .zip(widths)
            .enumerate()
            .filter(|(_, (header, _))| self.catalog.is_wrap_eligible(header.as_ref()))
            .map(|(i, (_, &width))| {
                let text = row.get(i).map(ToString::to_string).unwrap_or_default();
                let lines = self.wrap_cell(&text, width).len();
                let needed = self.metrics.line_height * lines as f32 + self.metrics.wrap_vertical_padding;
                needed.max(min)
            })
            .fold(min, Pt::max)
    }

    /// Applies the display rules for the cell in `column` (0-based) under `header`
    pub fn cell_display(&self, column: usize, header: &str, text: &str, width: Pt) -> CellDisplay {
        if self.catalog.is_wrap_eligible(header) {
            return CellDisplay::Wrapped(self.wrap_cell(text, width));
        }

        let len = text.chars().count();
        if column == 0 && len > NAME_COMPRESS_THRESHOLD {
            if let Some(name) = compress_person_name(text) {
                return CellDisplay::Single(name);
            }
        }
        if len > EMAIL_SHORTEN_THRESHOLD && text.contains('@') {
            return CellDisplay::Single(shorten_email(text));
        }
        if len > TRUNCATE_THRESHOLD {
            return CellDisplay::Single(truncate(text, TRUNCATE_KEEP));
        }
        CellDisplay::Single(text.to_string())
    }
}

/// `"García López Martínez, Juan Carlos"` becomes `"García López, Juan"`: at most
/// two surnames and the first given name. [None] when the text is not shaped
/// `"Surnames, Given names"`.
pub fn compress_person_name(text: &str) -> Option<String> {
    let (surnames, given) = text.split_once(',')?;
    let surnames: Vec<&str> = surnames.split_whitespace().take(2).collect();
    let first_given = given.split_whitespace().next()?;
    if surnames.is_empty() {
        return None;
    }
    Some(format!("{}, {}", surnames.join(" "), first_given))
}

/// Keeps the first ten characters of the local part and the whole domain. The
/// ellipsis only appears when something was actually cut.
pub fn shorten_email(text: &str) -> String {
    match text.split_once('@') {
        Some((local, domain)) if local.chars().count() > EMAIL_LOCAL_KEEP => {
            let kept: String = local.chars().take(EMAIL_LOCAL_KEEP).collect();
            format!("{kept}{ELLIPSIS}@{domain}")
        }
        Some(_) => text.to_string(),
        None => truncate(text, TRUNCATE_KEEP),
    }
}

/// First `keep` characters followed by an ellipsis
pub fn truncate(text: &str, keep: usize) -> String {
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner_parts() -> (ColumnCatalog, TableMetrics) {
        (ColumnCatalog::default(), TableMetrics::default())
    }

    #[test]
    fn short_rows_keep_the_minimum_height() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        let headers = ["Nombre Completo", "CIF", "Email"];
        let widths = [Pt(120.0), Pt(70.0), Pt(140.0)];
        let row: Vec<CellValue> = vec!["Ruiz, Eva".into(), "B12345678".into(), "eva@acme.es".into()];
        assert_eq!(planner.row_height(&row, &widths, &headers), Pt(35.0));
    }

    #[test]
    fn five_wrapped_lines_grow_the_row() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        // 50pt column, 5pt padding each side -> 40pt / 4pt per char = 10 chars per line
        let headers = ["Dirección"];
        let widths = [Pt(50.0)];
        let row: Vec<CellValue> = vec!["Calle Real 12 Portal 3 Escalera B Madrid España".into()];
        let lines = planner.wrap_cell(&row[0].to_string(), widths[0]);
        assert_eq!(lines.len(), 5);
        let height = planner.row_height(&row, &widths, &headers);
        assert_eq!(height, Pt(5.0 * 10.0 + 10.0));
        assert!(height > metrics.min_row_height);
    }

    #[test]
    fn only_wrap_eligible_columns_add_height() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        let long = "palabra ".repeat(40);
        let row: Vec<CellValue> = vec![long.as_str().into()];
        assert_eq!(planner.row_height(&row, &[Pt(50.0)], &["CIF"]), Pt(35.0));
        assert!(planner.row_height(&row, &[Pt(50.0)], &["Puesto"]) > Pt(35.0));
    }

    #[test]
    fn missing_cells_do_not_panic() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        let row: Vec<CellValue> = vec![];
        assert_eq!(
            planner.row_height(&row, &[Pt(100.0), Pt(100.0)], &["Email", "Centro"]),
            Pt(35.0)
        );
    }

    #[test]
    fn height_never_drops_below_minimum() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        let long = lipsum::lipsum(60);
        for text in ["", "a", "una dirección algo más larga que las demás", long.as_str()] {
            let row = vec![CellValue::from(text)];
            for width in [Pt(10.0), Pt(60.0), Pt(300.0)] {
                assert!(planner.row_height(&row, &[width], &["Dirección"]) >= metrics.min_row_height);
            }
        }
    }

    #[test]
    fn wrap_eligible_columns_are_never_truncated() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        let value = "maria.fernandez.gomez@empresa-ejemplo.es";
        assert_eq!(value.chars().count(), 40);

        match planner.cell_display(2, "Email", value, Pt(140.0)) {
            CellDisplay::Wrapped(lines) => assert_eq!(lines.concat(), value),
            other => panic!("expected wrapped e-mail, got {other:?}"),
        }

        let cif = "A".repeat(40);
        assert_eq!(
            planner.cell_display(1, "CIF", &cif, Pt(70.0)),
            CellDisplay::Single(format!("{}...", "A".repeat(12)))
        );
    }

    #[test]
    fn first_column_names_are_compressed() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        assert_eq!(
            planner.cell_display(0, "Nombre Completo", "García López Martínez, Juan Carlos", Pt(120.0)),
            CellDisplay::Single("García López, Juan".into())
        );
        // same text outside the first column is just truncated
        assert_eq!(
            planner.cell_display(1, "Nombre Completo", "García López Martínez, Juan Carlos", Pt(120.0)),
            CellDisplay::Single("García López...".into())
        );
    }

    #[test]
    fn long_first_column_without_a_comma_is_truncated() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        assert_eq!(
            planner.cell_display(0, "Empresa", "Construcciones del Norte Sociedad", Pt(110.0)),
            CellDisplay::Single("Construccion...".into())
        );
    }

    #[test]
    fn e_mails_outside_wrap_columns_are_shortened() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        assert_eq!(
            planner.cell_display(3, "Contacto", "recursos.humanos@acme.es", Pt(80.0)),
            CellDisplay::Single("recursos.h...@acme.es".into())
        );
        assert_eq!(shorten_email("rrhh@consultoria-laboral.es"), "rrhh@consultoria-laboral.es");
    }

    #[test]
    fn short_text_is_left_alone() {
        let (catalog, metrics) = planner_parts();
        let planner = TablePlanner::new(&catalog, &metrics, Pt(8.0));
        assert_eq!(
            planner.cell_display(1, "Estado", "exactly 15 char", Pt(60.0)),
            CellDisplay::Single("exactly 15 char".into())
        );
    }

    #[test]
    fn name_compression_needs_the_surname_comma_shape() {
        assert_eq!(compress_person_name("Pérez, Ana María"), Some("Pérez, Ana".into()));
        assert_eq!(compress_person_name("Ana María Pérez"), None);
        assert_eq!(compress_person_name(", Ana"), None);
        assert_eq!(compress_person_name("Pérez,"), None);
    }
}
