//! Indented line writer for Go source fragments

/// Accumulates tab-indented lines
#[derive(Debug, Default)]
pub struct GoWriter {
    buf: String,
    depth: usize,
}

impl GoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.buf.push('\t');
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Write a line that opens a brace and indent what follows
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent and write the closing line
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Rendered text without the final newline
    pub fn finish(mut self) -> String {
        if self.buf.ends_with('\n') {
            self.buf.pop();
        }
        self.buf
    }
}

/// Go interpreted string literal
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
