use crate::{
    refs::{ObjectReferences, RefType},
    Pt,
};
use pdf_writer::{Name, Pdf};
use serde::{Deserialize, Serialize};

/// One of the PDF base-14 Helvetica faces. These are never embedded: every
/// conforming reader ships them, which keeps reports small and lets them be
/// built without any font files on disk.
///
/// Text is encoded with `WinAnsiEncoding`, which covers the Latin-1 range
/// (accents, ñ, ü...). Anything outside it is written as `?`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    /// Every face registered in each page's resources
    pub const ALL: [StandardFont; 3] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            StandardFont::Helvetica => 0,
            StandardFont::HelveticaBold => 1,
            StandardFont::HelveticaOblique => 2,
        }
    }

    /// The PostScript name of the face
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Name under which the face is registered in page resources
    pub(crate) fn resource_name(self) -> String {
        format!("F{}", self.index())
    }

    /// Average glyph advance as a fraction of the font size. Real glyph metrics are
    /// deliberately not consulted; measurements built on this are approximations.
    pub fn char_width_factor(self) -> f32 {
        match self {
            StandardFont::Helvetica | StandardFont::HelveticaOblique => 0.5,
            StandardFont::HelveticaBold => 0.55,
        }
    }

    /// Distance from the baseline to the top of the tallest glyphs
    pub fn ascent(self, size: Pt) -> Pt {
        size * 0.718
    }

    /// Distance from the baseline to the bottom of descenders. Note: this is negative
    pub fn descent(self, size: Pt) -> Pt {
        size * -0.207
    }

    /// How much to vertically offset a second row of text below a first row of text
    pub fn line_height(self, size: Pt) -> Pt {
        size * 1.2
    }

    pub(crate) fn write(self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.index()));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Encode text for a `WinAnsiEncoding` simple font
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20}'..='\u{7e}' => ch as u8,
            '\u{a0}'..='\u{ff}' => ch as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
