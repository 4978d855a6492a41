//! 8x8 bitmap font
//!
//! One glyph per byte value, eight rows each, most significant bit on the
//! left. Only the ASCII half is drawn; the upper half renders blank.

/// Glyph width and height in pixels
pub const GLYPH_SIZE: usize = 8;

/// Glyph rows indexed by raw byte value
pub static FONT_8X8: [[u8; GLYPH_SIZE]; 256] = {
    let mut table = [[0u8; GLYPH_SIZE]; 256];
    let drawn = ASCII_GLYPHS;
    let mut i = 0;
    while i < drawn.len() {
        table[i] = drawn[i];
        i += 1;
    }
    table
};

#[rustfmt::skip]
const ASCII_GLYPHS: [[u8; GLYPH_SIZE]; 128] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x3C, 0x42, 0x99, 0xBD, 0xBD, 0x99, 0x42, 0x3C],
    [0x3C, 0x42, 0x81, 0x81, 0x81, 0x81, 0x42, 0x3C],
    [0xFE, 0x82, 0x8A, 0xD2, 0xA2, 0x82, 0xFE, 0x00],
    [0xFE, 0x82, 0x82, 0x82, 0x82, 0x82, 0xFE, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x38, 0x64, 0x74, 0x7C, 0x38, 0x00, 0x00],
    [0x80, 0xC0, 0xF0, 0xFC, 0xF0, 0xC0, 0x80, 0x00],
    [0x01, 0x03, 0x0F, 0x3F, 0x0F, 0x03, 0x01, 0x00],
    [0x18, 0x3C, 0x7E, 0x18, 0x7E, 0x3C, 0x18, 0x00],
    [0xEE, 0xEE, 0xEE, 0xCC, 0x00, 0xCC, 0xCC, 0x00],
    [0x00, 0x00, 0x30, 0x68, 0x78, 0x30, 0x00, 0x00],
    [0x00, 0x38, 0x64, 0x74, 0x7C, 0x38, 0x00, 0x00],
    [0x3C, 0x66, 0x7A, 0x7A, 0x7E, 0x7E, 0x3C, 0x00],
    [0x0E, 0x3E, 0x3A, 0x22, 0x26, 0x6E, 0xE4, 0x40],
    [0x18, 0x3C, 0x7E, 0x3C, 0x3C, 0x3C, 0x3C, 0x00],
    [0x3C, 0x3C, 0x3C, 0x3C, 0x7E, 0x3C, 0x18, 0x00],
    [0x08, 0x7C, 0x7E, 0x7E, 0x7C, 0x08, 0x00, 0x00],
    [0x10, 0x3E, 0x7E, 0x7E, 0x3E, 0x10, 0x00, 0x00],
    [0x58, 0x2A, 0xDC, 0xC8, 0xDC, 0x2A, 0x58, 0x00],
    [0x24, 0x66, 0xFF, 0xFF, 0x66, 0x24, 0x00, 0x00],
    [0x00, 0x10, 0x10, 0x38, 0x38, 0x7C, 0xFE, 0x00],
    [0xFE, 0x7C, 0x38, 0x38, 0x10, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x1C, 0x1C, 0x1C, 0x18, 0x00, 0x18, 0x18, 0x00], // !
    [0x6C, 0x6C, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // "
    [0x00, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x00, 0x00], // #
    [0x10, 0x38, 0x60, 0x38, 0x0C, 0x78, 0x10, 0x00], // $
    [0x40, 0xA4, 0x48, 0x10, 0x24, 0x4A, 0x04, 0x00], // %
    [0x18, 0x34, 0x18, 0x3A, 0x6C, 0x66, 0x3A, 0x00], // &
    [0x18, 0x18, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00], // '
    [0x30, 0x60, 0x60, 0x60, 0x60, 0x60, 0x30, 0x00], // (
    [0x0C, 0x06, 0x06, 0x06, 0x06, 0x06, 0x0C, 0x00], // )
    [0x10, 0x54, 0x38, 0x7C, 0x38, 0x54, 0x10, 0x00], // *
    [0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00], // +
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30, 0x00], // ,
    [0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00], // -
    [0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00], // .
    [0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00], // /
    [0x38, 0x4C, 0xC6, 0xC6, 0xC6, 0x64, 0x38, 0x00], // 0
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // 1
    [0x7C, 0xC6, 0x0E, 0x3C, 0x78, 0xE0, 0xFE, 0x00], // 2
    [0x7E, 0x0C, 0x18, 0x3C, 0x06, 0xC6, 0x7C, 0x00], // 3
    [0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x0C, 0x00], // 4
    [0xFC, 0xC0, 0xFC, 0x06, 0x06, 0xC6, 0x7C, 0x00], // 5
    [0x3C, 0x60, 0xC0, 0xFC, 0xC6, 0xC6, 0x7C, 0x00], // 6
    [0xFE, 0xC6, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00], // 7
    [0x78, 0xC4, 0xE4, 0x78, 0x86, 0x86, 0x7C, 0x00], // 8
    [0x7C, 0xC6, 0xC6, 0x7E, 0x06, 0x0C, 0x78, 0x00], // 9
    [0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x00, 0x00], // :
    [0x00, 0x00, 0x18, 0x00, 0x00, 0x18, 0x18, 0x30], // ;
    [0x1C, 0x38, 0x70, 0xE0, 0x70, 0x38, 0x1C, 0x00], // <
    [0x00, 0x7C, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00], // =
    [0x70, 0x38, 0x1C, 0x0E, 0x1C, 0x38, 0x70, 0x00], // >
    [0x7C, 0xC6, 0xC6, 0x1C, 0x18, 0x00, 0x18, 0x00], // ?
    [0x3C, 0x42, 0x99, 0xA1, 0xA5, 0x99, 0x42, 0x3C], // @
    [0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x00], // A
    [0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC, 0x00], // B
    [0x3C, 0x66, 0xC0, 0xC0, 0xC0, 0x66, 0x3C, 0x00], // C
    [0xF8, 0xCC, 0xC6, 0xC6, 0xC6, 0xCC, 0xF8, 0x00], // D
    [0xFE, 0xC0, 0xC0, 0xFC, 0xC0, 0xC0, 0xFE, 0x00], // E
    [0xFE, 0xC0, 0xC0, 0xFC, 0xC0, 0xC0, 0xC0, 0x00], // F
    [0x3E, 0x60, 0xC0, 0xCE, 0xC6, 0x66, 0x3E, 0x00], // G
    [0xC6, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0xC6, 0x00], // H
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00], // I
    [0x06, 0x06, 0x06, 0x06, 0xC6, 0xC6, 0x7C, 0x00], // J
    [0xC6, 0xCC, 0xD8, 0xF0, 0xF8, 0xDC, 0xCE, 0x00], // K
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00], // L
    [0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00], // M
    [0xC6, 0xE6, 0xF6, 0xFE, 0xDE, 0xCE, 0xC6, 0x00], // N
    [0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00], // O
    [0xFC, 0xC6, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0x00], // P
    [0x7C, 0xC6, 0xC6, 0xC6, 0xDE, 0xCC, 0x7A, 0x00], // Q
    [0xFC, 0xC6, 0xC6, 0xCE, 0xF8, 0xDC, 0xCE, 0x00], // R
    [0x78, 0xCC, 0xC0, 0x7C, 0x06, 0xC6, 0x7C, 0x00], // S
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // T
    [0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00], // U
    [0xC6, 0xC6, 0xC6, 0xEE, 0x7C, 0x38, 0x10, 0x00], // V
    [0xC6, 0xC6, 0xD6, 0xFE, 0xFE, 0xEE, 0xC6, 0x00], // W
    [0xC6, 0xEE, 0x3C, 0x38, 0x7C, 0xEE, 0xC6, 0x00], // X
    [0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00], // Y
    [0xFE, 0x0E, 0x1C, 0x38, 0x70, 0xE0, 0xFE, 0x00], // Z
    [0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00], // [
    [0x60, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x06, 0x00], // backslash
    [0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00], // ]
    [0x18, 0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00], // ^
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], // _
    [0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00], // `
    [0x00, 0x3C, 0x06, 0x3E, 0x66, 0x66, 0x3C, 0x00], // a
    [0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x00], // b
    [0x00, 0x3C, 0x66, 0x60, 0x60, 0x66, 0x3C, 0x00], // c
    [0x06, 0x3E, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00], // d
    [0x00, 0x3C, 0x66, 0x66, 0x7E, 0x60, 0x3C, 0x00], // e
    [0x1C, 0x30, 0x78, 0x30, 0x30, 0x30, 0x30, 0x00], // f
    [0x00, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x3C], // g
    [0x60, 0x7C, 0x76, 0x66, 0x66, 0x66, 0x66, 0x00], // h
    [0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x00], // i
    [0x0C, 0x00, 0x1C, 0x0C, 0x0C, 0x0C, 0x0C, 0x38], // j
    [0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00], // k
    [0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00], // l
    [0x00, 0xEC, 0xFE, 0xFE, 0xFE, 0xD6, 0xC6, 0x00], // m
    [0x00, 0x7C, 0x76, 0x66, 0x66, 0x66, 0x66, 0x00], // n
    [0x00, 0x3C, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00], // o
    [0x00, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x60, 0x60], // p
    [0x00, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x06], // q
    [0x00, 0x7E, 0x70, 0x60, 0x60, 0x60, 0x60, 0x00], // r
    [0x00, 0x3C, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00], // s
    [0x30, 0x78, 0x30, 0x30, 0x30, 0x30, 0x1C, 0x00], // t
    [0x00, 0x66, 0x66, 0x66, 0x66, 0x6E, 0x3E, 0x00], // u
    [0x00, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00], // v
    [0x00, 0xC6, 0xD6, 0xFE, 0xFE, 0x7C, 0x6C, 0x00], // w
    [0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00], // x
    [0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x3C], // y
    [0x00, 0x7E, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00], // z
    [0x0E, 0x18, 0x0C, 0x38, 0x0C, 0x18, 0x0E, 0x00], // {
    [0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00], // |
    [0x70, 0x18, 0x30, 0x1C, 0x30, 0x18, 0x70, 0x00], // }
    [0x00, 0x00, 0x76, 0xDC, 0x00, 0x00, 0x00, 0x00], // ~
    [0x10, 0x28, 0x10, 0x54, 0xAA, 0x44, 0x00, 0x00],
];

/// Rows of the glyph for `byte`
pub fn glyph(byte: u8) -> &'static [u8; GLYPH_SIZE] {
    &FONT_8X8[byte as usize]
}
