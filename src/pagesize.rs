//! Paper formats, as `(width, height)` in points.
//!
//! The constants are portrait; reports usually run in landscape so wide tables
//! fit, which [PageOrientation::landscape] gives:
//!
//! ```
//! use report_gen::pagesize::{A4, PageOrientation};
//!
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! assert_eq!(landscape.portrait(), A4);
//! ```

use crate::units::Pt;

/// Page dimensions as `(width, height)` in points
pub type PageSize = (Pt, Pt);

const POINTS_PER_MM: f32 = 72.0 / 25.4;

pub const LETTER: PageSize = (Pt(612.0), Pt(792.0));
pub const LEGAL: PageSize = (Pt(612.0), Pt(1008.0));
pub const A3: PageSize = (Pt(297.0 * POINTS_PER_MM), Pt(420.0 * POINTS_PER_MM));
pub const A4: PageSize = (Pt(210.0 * POINTS_PER_MM), Pt(297.0 * POINTS_PER_MM));
pub const A5: PageSize = (Pt(148.0 * POINTS_PER_MM), Pt(210.0 * POINTS_PER_MM));

pub trait PageOrientation {
    /// Short edge horizontal
    fn portrait(self) -> Self;
    /// Long edge horizontal
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> PageSize {
        let (w, h) = self;
        (w.min(h), w.max(h))
    }

    fn landscape(self) -> PageSize {
        let (w, h) = self;
        (w.max(h), w.min(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_is_idempotent() {
        for size in [LETTER, LEGAL, A3, A4, A5] {
            assert_eq!(size.portrait(), size);
            assert_eq!(size.landscape().landscape(), size.landscape());
            assert_eq!(size.landscape(), (size.1, size.0));
        }
    }
}
