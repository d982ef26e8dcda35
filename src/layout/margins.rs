use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Blank space kept around the printable area of a page. Report painting
/// starts at the top-left margin corner and the footer rule sits on the
/// bottom margin. Pages also export them as their `ArtBox`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    pub fn all(value: Pt) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` above and below, `horizontal` left and right
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    pub fn empty() -> Margins {
        Margins::default()
    }

    /// Combined left and right margins
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Combined top and bottom margins
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_margins_sum_per_axis() {
        let margins = Margins::symmetric(Pt(20.0), Pt(40.0));
        assert_eq!(margins.vertical(), Pt(40.0));
        assert_eq!(margins.horizontal(), Pt(80.0));
    }

    #[test]
    fn missing_sides_deserialise_as_zero() {
        let margins: Margins = serde_json::from_str(r#"{ "left": 30.0 }"#).unwrap();
        assert_eq!(margins.left, Pt(30.0));
        assert_eq!(margins.horizontal(), Pt(30.0));
        assert_eq!(margins.vertical(), Pt(0.0));
    }
}
