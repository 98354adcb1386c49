//! Indentation-tracking writer shared by every backend.

use std::fmt;

use thiserror::Error;

use super::Indent;

/// Raised when a generator closes more blocks than it opened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("cannot close a block at depth 0 (line '{line}')")]
    UnbalancedClose { line: String },
}

/// Writes lines of code, tracking block depth from the delimiters each
/// line starts and ends with.
///
/// Depth changes only by looking at the first and last character of each
/// emitted unit:
///
/// - a unit starting with the close delimiter dedents before it is written
/// - a unit starting with the open delimiter and not ending with the close
///   delimiter indents after it is written
///
/// Generators therefore emit block delimiters as their own leading or
/// trailing token. Lines that need depth changes without delimiters (markup)
/// use [`indent`](Self::indent) and [`dedent`](Self::dedent) directly.
///
/// # Example
///
/// ```
/// use dataflip_codegen::builder::CodeWriter;
///
/// let mut w = CodeWriter::csharp();
/// w.emit("class A")?;
/// w.emit("{")?;
/// w.emit("int X;")?;
/// w.emit("}")?;
/// assert_eq!(w.build(), "class A\n{\n    int X;\n}\n");
/// # Ok::<(), dataflip_codegen::builder::EmitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodeWriter {
    depth: usize,
    indent: Indent,
    open: char,
    close: char,
    buffer: String,
}

impl CodeWriter {
    /// Create a writer with the given indentation and `{` / `}` delimiters.
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            open: '{',
            close: '}',
            buffer: String::new(),
        }
    }

    /// Create a writer with 4-space indentation.
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Create a writer with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Use different block delimiters.
    pub fn with_delimiters(mut self, open: char, close: char) -> Self {
        self.open = open;
        self.close = close;
        self
    }

    /// Current block depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Emit one logical unit of code.
    ///
    /// Embedded newlines are allowed; every physical line is indented at
    /// the unit's depth.
    pub fn emit(&mut self, text: &str) -> Result<&mut Self, EmitError> {
        let opens = text.starts_with(self.open);
        let closes = text.starts_with(self.close) && !opens;

        if closes {
            self.depth = self
                .depth
                .checked_sub(1)
                .ok_or_else(|| EmitError::UnbalancedClose {
                    line: text.to_string(),
                })?;
        }

        for line in text.split('\n') {
            self.write_line(line);
        }

        if opens && !text.ends_with(self.close) {
            self.depth += 1;
        }
        Ok(self)
    }

    /// Emit pre-formatted arguments, as produced by `format_args!`.
    pub fn emit_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self, EmitError> {
        match args.as_str() {
            Some(text) => self.emit(text),
            None => self.emit(&args.to_string()),
        }
    }

    /// Write an empty line without affecting depth.
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase depth without emitting a delimiter.
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    /// Decrease depth without emitting a delimiter.
    pub fn dedent(&mut self) -> Result<&mut Self, EmitError> {
        self.depth = self
            .depth
            .checked_sub(1)
            .ok_or_else(|| EmitError::UnbalancedClose {
                line: String::new(),
            })?;
        Ok(self)
    }

    /// The text accumulated so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the accumulated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_line(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(self.indent.as_str());
            }
            self.buffer.push_str(line);
        }
        self.buffer.push('\n');
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
