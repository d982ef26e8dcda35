use crate::font::StandardFont;
use crate::rect::Rect;
use crate::units::Pt;

/// Calculate the approximate width of a string of text given the font and font size.
///
/// Every character is assumed to advance by the face's average glyph width
/// ([StandardFont::char_width_factor] × size). Good enough to centre labels and
/// decide on wrapping; not a substitute for real glyph metrics.
pub fn width_of_text(text: &str, font: StandardFont, size: Pt) -> Pt {
    size * (font.char_width_factor() * text.chars().count() as f32)
}

/// How many characters fit on one line of `width`, never less than one
pub fn chars_per_line(width: Pt, size: Pt, char_width_factor: f32) -> usize {
    let char_width = *size * char_width_factor;
    if char_width <= 0.0 || *width <= 0.0 {
        return 1;
    }
    ((*width / char_width).floor() as usize).max(1)
}

/// Greedily packs whitespace-delimited words into lines of at most `max_chars`
/// characters. A word that cannot fit on a line by itself (a long e-mail address,
/// say) falls back to character-level breaking, so no line ever exceeds `max_chars`.
///
/// Empty or all-whitespace text yields no lines at all.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if word_len > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(max_chars).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    // the tail stays open so following words can join it
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
        } else if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Converts a distance measured down from the top edge of a page of height
/// `page_height` into a PDF y coordinate (measured up from the bottom edge)
pub fn from_top(page_height: Pt, y: Pt) -> Pt {
    page_height - y
}

/// Builds a PDF rectangle from a top-left corner measured down from the top of the page
pub fn rect_from_top(page_height: Pt, x: Pt, y: Pt, width: Pt, height: Pt) -> Rect {
    Rect {
        x1: x,
        y1: from_top(page_height, y + height),
        x2: x + width,
        y2: from_top(page_height, y),
    }
}

/// Baseline for a line of text whose top edge sits `y` below the top of the page
pub fn baseline_from_top(page_height: Pt, y: Pt, font: StandardFont, size: Pt) -> Pt {
    from_top(page_height, y + font.ascent(size))
}
