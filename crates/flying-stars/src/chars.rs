//! Glyphs used by the terminal renderers.

/// Star glyphs ordered from smallest to largest radius.
pub const STAR_CHARS: &[char] = &['·', '•', '✦', '✧', '✶'];

/// Glyph for the dim glow around large stars.
pub const GLOW_CHAR: char = '·';

/// Dust glyphs for the milky-way band, sparse to dense.
pub const DUST_CHARS: &[char] = &['.', '·', '∙', '░', '▒'];
