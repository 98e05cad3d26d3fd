//! ZPL document builder
//!
//! Provides a fluent API for building ZPL label documents.

/// Horizontal justification for field blocks (`^FB`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
    Right,
}

impl Justify {
    fn code(self) -> char {
        match self {
            Justify::Left => 'L',
            Justify::Center => 'C',
            Justify::Right => 'R',
        }
    }
}

/// ZPL document builder
///
/// Opens the document with `^XA` and UTF-8 mode (`^CI28`) and fixes the
/// canvas size. Callers are expected to pass pre-sanitized field data; the
/// builder does not strip control characters itself.
pub struct ZplBuilder {
    buf: String,
}

impl ZplBuilder {
    /// Start a new document on a `width` x `height` dot canvas
    pub fn new(width: u32, height: u32) -> Self {
        let mut buf = String::with_capacity(512);
        buf.push_str("^XA");
        // UTF-8 character set, required for Cyrillic product names
        buf.push_str("^CI28");
        buf.push_str(&format!("^PW{}", width));
        buf.push_str(&format!("^LL{}", height));
        Self { buf }
    }

    // === Text Output ===

    /// Single-line text field at `(x, y)` with a square `^A0N` font
    pub fn text(&mut self, x: u32, y: u32, size: u32, data: &str) -> &mut Self {
        self.buf
            .push_str(&format!("^FO{},{}^A0N,{},{}^FD{}^FS", x, y, size, size, data));
        self
    }

    /// Justified text block capped at `max_lines` lines
    pub fn text_block(
        &mut self,
        x: u32,
        y: u32,
        size: u32,
        block_width: u32,
        max_lines: u32,
        justify: Justify,
        data: &str,
    ) -> &mut Self {
        self.buf.push_str(&format!(
            "^FO{},{}^A0N,{},{}^FB{},{},0,{},0^FD{}^FS",
            x,
            y,
            size,
            size,
            block_width,
            max_lines,
            justify.code(),
            data
        ));
        self
    }

    /// Like [`text_block`](Self::text_block) but reversed (`^FR`), for
    /// printing white-on-black over a band
    pub fn text_block_reversed(
        &mut self,
        x: u32,
        y: u32,
        size: u32,
        block_width: u32,
        max_lines: u32,
        justify: Justify,
        data: &str,
    ) -> &mut Self {
        self.buf.push_str(&format!(
            "^FO{},{}^A0N,{},{}^FR^FB{},{},0,{},0^FD{}^FS",
            x,
            y,
            size,
            size,
            block_width,
            max_lines,
            justify.code(),
            data
        ));
        self
    }

    // === Graphics ===

    /// Code 128 barcode
    ///
    /// `module` sets `^BY` module width and ratio, `height` the bar height in
    /// dots. Interpretation line is disabled; callers print their own echo.
    pub fn barcode_128(&mut self, x: u32, y: u32, module: u32, height: u32, data: &str) -> &mut Self {
        self.buf.push_str(&format!(
            "^FO{},{}^BY{},{},{}^BCN,{},N,N,N^FD{}^FS",
            x, y, module, module, height, height, data
        ));
        self
    }

    /// QR code with the `LA,` automatic-mode scheme marker
    pub fn qr(&mut self, x: u32, y: u32, magnification: u32, data: &str) -> &mut Self {
        self.buf.push_str(&format!(
            "^FO{},{}^BQN,2,{}^FDLA,{}^FS",
            x, y, magnification, data
        ));
        self
    }

    /// Solid graphic box
    pub fn band(&mut self, x: u32, y: u32, width: u32, height: u32) -> &mut Self {
        self.buf
            .push_str(&format!("^FO{},{}^GB{},{},{}^FS", x, y, width, height, height));
        self
    }

    // === Output ===

    /// Print quantity (`^PQ` repeat-count directive)
    pub fn copies(&mut self, count: u32) -> &mut Self {
        self.buf.push_str(&format!("^PQ{}", count));
        self
    }

    /// Close the document with `^XZ` and return the ZPL string
    pub fn build(mut self) -> String {
        self.buf.push_str("^XZ");
        self.buf
    }
}
