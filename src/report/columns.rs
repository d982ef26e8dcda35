use crate::units::Pt;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-column knowledge keyed by header label: the preferred width of each known
/// column and which columns wrap their text instead of truncating it.
///
/// The catalogue is plain configuration. The defaults describe the columns of
/// the HR listings (employees, contracts, absences, companies...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnCatalog {
    /// Preferred width per header label
    pub widths: HashMap<String, Pt>,
    /// Headers whose cells wrap over several lines
    pub wrap_eligible: HashSet<String>,
    /// Preferred width of headers missing from `widths`
    pub default_width: Pt,
}

const DEFAULT_WIDTHS: &[(&str, f32)] = &[
    ("Nombre Completo", 120.0),
    ("DNI/NIE", 70.0),
    ("Email", 140.0),
    ("Teléfono", 70.0),
    ("Centro", 100.0),
    ("Puesto", 90.0),
    ("Último Puesto", 100.0),
    ("Departamento", 90.0),
    ("Empresa", 110.0),
    ("CIF", 70.0),
    ("Dirección", 130.0),
    ("Fecha Alta", 65.0),
    ("Fecha Baja", 65.0),
    ("Tipo Contrato", 80.0),
    ("Convenio", 100.0),
    ("Estado", 60.0),
    ("Tipo Ausencia", 80.0),
    ("Fecha Inicio", 65.0),
    ("Fecha Fin", 65.0),
    ("Días", 40.0),
    ("Zona", 80.0),
];

const DEFAULT_WRAP_ELIGIBLE: &[&str] = &["Dirección", "Centro", "Puesto", "Último Puesto", "Email"];

impl Default for ColumnCatalog {
    fn default() -> Self {
        ColumnCatalog {
            widths: DEFAULT_WIDTHS
                .iter()
                .map(|&(name, width)| (name.to_string(), Pt(width)))
                .collect(),
            wrap_eligible: DEFAULT_WRAP_ELIGIBLE.iter().map(|s| s.to_string()).collect(),
            default_width: Pt(80.0),
        }
    }
}

impl ColumnCatalog {
    pub fn preferred_width(&self, header: &str) -> Pt {
        self.widths
            .get(header)
            .copied()
            .unwrap_or(self.default_width)
            .max(Pt(0.0))
    }

    pub fn is_wrap_eligible(&self, header: &str) -> bool {
        self.wrap_eligible.contains(header)
    }

    /// Plans the width of every column so the table spans `total_width`.
    ///
    /// Widths come from the header labels alone, never from cell contents.
    /// When the preferred widths overflow they all shrink by the same factor
    /// (floored); when they fall short every column grows by the same whole
    /// number of points and the division remainder is left unused. Either way
    /// the plan sums to at most `total_width` and to within `headers.len()`
    /// points of it.
    pub fn column_widths<H: AsRef<str>>(&self, headers: &[H], total_width: Pt) -> Vec<Pt> {
        let preferred: Vec<Pt> = headers
            .iter()
            .map(|h| self.preferred_width(h.as_ref()))
            .collect();
        if preferred.is_empty() {
            return preferred;
        }
        if total_width <= Pt(0.0) {
            return vec![Pt(0.0); preferred.len()];
        }

        let preferred_total: Pt = preferred.iter().copied().sum();
        if preferred_total > total_width {
            let factor = total_width / preferred_total;
            preferred.into_iter().map(|w| (w * factor).floor()).collect()
        } else if preferred_total < total_width {
            let extra = ((total_width - preferred_total) / preferred.len() as f32).floor();
            preferred.into_iter().map(|w| w + extra).collect()
        } else {
            preferred
        }
    }
}
