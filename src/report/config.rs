use super::columns::ColumnCatalog;
use crate::colour::{colours, Colour};
use crate::layout::Margins;
use crate::pagesize::{self, PageOrientation, PageSize};
use crate::units::Pt;
use crate::ReportError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that shapes a report apart from its data. All fields have
/// defaults, so a JSON configuration only needs to mention what it changes:
///
/// ```
/// use report_gen::report::ReportConfig;
///
/// let config = ReportConfig::from_json(r##"{ "theme": { "primary": "#1a5276" } }"##).unwrap();
/// assert_eq!(config.theme.primary.to_hex(), "#1a5276");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Page dimensions in points, `[width, height]`
    pub page_size: PageSize,
    pub margins: Margins,
    /// Written to the document information dictionary
    pub author: Option<String>,
    pub theme: Theme,
    pub metrics: TableMetrics,
    pub labels: Labels,
    pub columns: ColumnCatalog,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            page_size: pagesize::A4.landscape(),
            margins: Margins::all(Pt(40.0)),
            author: None,
            theme: Theme::default(),
            metrics: TableMetrics::default(),
            labels: Labels::default(),
            columns: ColumnCatalog::default(),
        }
    }
}

impl ReportConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<ReportConfig, ReportError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Load a configuration from a JSON file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ReportConfig, ReportError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&contents)?;
        log::debug!("loaded report configuration from {}", path.as_ref().display());
        Ok(config)
    }

    /// Width available between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.page_size.0 - self.margins.horizontal()
    }
}

/// Colours and font sizes. Fixed for a whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Document header and table header bands
    pub primary: Colour,
    /// Text painted on top of `primary`
    pub on_primary: Colour,
    /// Section rules
    pub accent: Colour,
    pub text: Colour,
    pub muted: Colour,
    pub stripe_even: Colour,
    pub stripe_odd: Colour,
    pub border: Colour,
    /// Background of summary and placeholder panels
    pub panel: Colour,
    pub title_size: Pt,
    pub subtitle_size: Pt,
    pub section_size: Pt,
    pub header_size: Pt,
    pub body_size: Pt,
    pub summary_size: Pt,
    pub footer_size: Pt,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary: Colour::new_rgb_bytes(0x2c, 0x3e, 0x50),
            on_primary: colours::WHITE,
            accent: Colour::new_rgb_bytes(0x34, 0x98, 0xdb),
            text: Colour::new_rgb_bytes(0x33, 0x33, 0x33),
            muted: Colour::new_rgb_bytes(0x7f, 0x8c, 0x8d),
            stripe_even: Colour::new_rgb_bytes(0xf8, 0xf9, 0xfa),
            stripe_odd: colours::WHITE,
            border: Colour::new_rgb_bytes(0xde, 0xe2, 0xe6),
            panel: Colour::new_rgb_bytes(0xf4, 0xf6, 0xf7),
            title_size: Pt(16.0),
            subtitle_size: Pt(9.0),
            section_size: Pt(12.0),
            header_size: Pt(9.0),
            body_size: Pt(8.0),
            summary_size: Pt(9.0),
            footer_size: Pt(8.0),
        }
    }
}

/// Fixed geometry of the table engine and the page furniture around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableMetrics {
    /// No data row is ever shorter than this
    pub min_row_height: Pt,
    pub header_band_height: Pt,
    /// Horizontal padding on each side of a cell
    pub cell_padding_x: Pt,
    /// Distance from the top of a row to the top of its first line of text
    pub cell_padding_y: Pt,
    /// Advance between wrapped lines inside a cell
    pub line_height: Pt,
    /// Added to the wrapped lines when sizing a row
    pub wrap_vertical_padding: Pt,
    /// Average glyph width as a fraction of the body font size
    pub char_width_factor: f32,
    /// Space kept free at the bottom of every page for the footer
    pub bottom_reserve: Pt,
    /// Where content resumes after the document header, on every page
    pub page_top_offset: Pt,
    pub document_header_height: Pt,
    pub continuation_header_height: Pt,
    /// Added below a finished block before the next one may start
    pub trailing_margin: Pt,
    pub border_width: Pt,
    /// Height of the "no records" panel
    pub placeholder_height: Pt,
    /// Inner padding of summary and placeholder panels
    pub panel_padding: Pt,
}

impl Default for TableMetrics {
    fn default() -> Self {
        TableMetrics {
            min_row_height: Pt(35.0),
            header_band_height: Pt(30.0),
            cell_padding_x: Pt(5.0),
            cell_padding_y: Pt(6.0),
            line_height: Pt(10.0),
            wrap_vertical_padding: Pt(10.0),
            char_width_factor: 0.5,
            bottom_reserve: Pt(60.0),
            page_top_offset: Pt(110.0),
            document_header_height: Pt(55.0),
            continuation_header_height: Pt(28.0),
            trailing_margin: Pt(20.0),
            border_width: Pt(0.5),
            placeholder_height: Pt(60.0),
            panel_padding: Pt(10.0),
        }
    }
}

/// User-facing strings. `page_of` understands the `{page}` and `{pages}`
/// placeholders; `date_format` is a chrono format string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub continued: String,
    pub generated: String,
    pub page_of: String,
    pub no_data: String,
    pub summary: String,
    pub date_format: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            continued: "(continued)".into(),
            generated: "Generated".into(),
            page_of: "Page {page} of {pages}".into(),
            no_data: "No records match the selected criteria".into(),
            summary: "Summary".into(),
            date_format: "%d/%m/%Y %H:%M".into(),
        }
    }
}

impl Labels {
    /// Footer text for page `page` (1-based) of `pages`
    pub fn page_of(&self, page: usize, pages: usize) -> String {
        self.page_of
            .replace("{page}", &page.to_string())
            .replace("{pages}", &pages.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_the_default_config() {
        assert_eq!(ReportConfig::from_json("{}").unwrap(), ReportConfig::default());
    }

    #[test]
    fn partial_sections_keep_their_other_defaults() {
        let config = ReportConfig::from_json(
            r##"{ "metrics": { "min_row_height": 40.0 }, "labels": { "page_of": "Página {page} de {pages}" } }"##,
        )
        .unwrap();
        assert_eq!(config.metrics.min_row_height, Pt(40.0));
        assert_eq!(config.metrics.header_band_height, Pt(30.0));
        assert_eq!(config.labels.page_of(2, 7), "Página 2 de 7");
        assert_eq!(config.labels.summary, "Summary");
    }

    #[test]
    fn bad_colours_are_config_errors() {
        let err = ReportConfig::from_json(r#"{ "theme": { "primary": "blue" } }"#).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn default_content_width_spans_landscape_a4() {
        let config = ReportConfig::default();
        let expected = pagesize::A4.1 - Pt(80.0);
        assert!((*config.content_width() - *expected).abs() < 1e-3);
    }
}
