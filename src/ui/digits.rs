//! Block font for the big clock display

/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u16 = 5;

/// Blank columns between glyphs
const GAP: u16 = 1;

const FULL: char = '█';

type Glyph = [&'static str; GLYPH_HEIGHT as usize];

fn glyph(c: char) -> Option<Glyph> {
    let rows = match c {
        '0' => ["#####", "#   #", "#   #", "#   #", "#####"],
        '1' => ["  #  ", " ##  ", "  #  ", "  #  ", " ### "],
        '2' => ["#####", "    #", "#####", "#    ", "#####"],
        '3' => ["#####", "    #", " ####", "    #", "#####"],
        '4' => ["#   #", "#   #", "#####", "    #", "    #"],
        '5' => ["#####", "#    ", "#####", "    #", "#####"],
        '6' => ["#####", "#    ", "#####", "#   #", "#####"],
        '7' => ["#####", "    #", "   # ", "  #  ", "  #  "],
        '8' => ["#####", "#   #", "#####", "#   #", "#####"],
        '9' => ["#####", "#   #", "#####", "    #", "#####"],
        ':' => ["   ", " # ", "   ", " # ", "   "],
        _ => return None,
    };
    Some(rows)
}

fn glyph_width(c: char) -> u16 {
    glyph(c).map(|rows| rows[0].len() as u16).unwrap_or(0)
}

/// Unscaled width of `text` in columns, or `None` if it holds a character
/// the font cannot draw
pub fn text_width(text: &str) -> Option<u16> {
    let mut width = 0u16;
    for (i, c) in text.chars().enumerate() {
        glyph(c)?;
        if i > 0 {
            width = width.saturating_add(GAP);
        }
        width = width.saturating_add(glyph_width(c));
    }
    Some(width)
}

/// Largest scale at which `text` fits in `width` x `height` cells, capped at
/// `max_scale`. Zero means it does not fit at all.
pub fn fit_scale(text: &str, width: u16, height: u16, max_scale: u16) -> u16 {
    match text_width(text) {
        Some(w) if w > 0 => (width / w).min(height / GLYPH_HEIGHT).min(max_scale),
        _ => 0,
    }
}

/// Render `text` as rows of block characters, each font pixel drawn as a
/// `scale` x `scale` square of cells
pub fn render(text: &str, scale: u16) -> Vec<String> {
    let scale = usize::from(scale.max(1));
    let height = usize::from(GLYPH_HEIGHT);
    let glyphs: Vec<Glyph> = text.chars().filter_map(glyph).collect();

    let mut lines = Vec::with_capacity(height * scale);
    for row in 0..height {
        let mut line = String::new();
        for (i, g) in glyphs.iter().enumerate() {
            if i > 0 {
                line.extend(std::iter::repeat(' ').take(usize::from(GAP) * scale));
            }
            for px in g[row].chars() {
                let cell = if px == '#' { FULL } else { ' ' };
                line.extend(std::iter::repeat(cell).take(scale));
            }
        }
        for _ in 0..scale {
            lines.push(line.clone());
        }
    }
    lines
}
