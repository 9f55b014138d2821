//! Renderer trait and shared formatting helpers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ir::SurfaceDecl;

/// Trait for surface renderers.
///
/// Implement this trait to print surfaces in another UI description
/// language. A renderer receives fully assembled surfaces and must not
/// change their structure.
///
/// # Example
///
/// ```rust,ignore
/// use formgen_codegen::render::{RenderConfig, Renderer};
/// use formgen_codegen::ir::SurfaceDecl;
///
/// struct Outline;
///
/// impl Renderer for Outline {
///     fn id(&self) -> &'static str { "outline" }
///     fn name(&self) -> &'static str { "Plain outline" }
///     fn file_extension(&self) -> &'static str { "txt" }
///
///     fn render(&self, decl: &SurfaceDecl, _config: &RenderConfig) -> formgen_codegen::Result<String> {
///         Ok(format!("{} ({} nodes)\n", decl.type_name, decl.body.len()))
///     }
/// }
/// ```
pub trait Renderer: Send + Sync {
    /// Short lowercase identifier, e.g. `swiftui`.
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Extension of generated source files.
    fn file_extension(&self) -> &'static str;

    /// Lines placed once at the top of a file holding rendered surfaces.
    fn preamble(&self, _config: &RenderConfig) -> String {
        String::new()
    }

    /// Render one surface.
    fn render(&self, decl: &SurfaceDecl, config: &RenderConfig) -> Result<String>;
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub indent: IndentStyle,

    pub line_ending: LineEnding,

    /// Emit `///` doc comments
    pub docs: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            line_ending: LineEnding::default(),
            docs: true,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_docs(mut self, docs: bool) -> Self {
        self.docs = docs;
        self
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// 2 spaces
    Spaces2,

    /// 4 spaces, the Xcode default
    #[default]
    Spaces4,

    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

impl FromStr for IndentStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "spaces2" => Ok(IndentStyle::Spaces2),
            "spaces4" => Ok(IndentStyle::Spaces4),
            "tabs" => Ok(IndentStyle::Tabs),
            other => Err(Error::malformed_arguments(format!(
                "unknown indent style `{other}`, expected spaces2, spaces4 or tabs"
            ))),
        }
    }
}

/// Line ending style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,

    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    /// Get the line ending string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            other => Err(Error::malformed_arguments(format!(
                "unknown line ending `{other}`, expected lf or crlf"
            ))),
        }
    }
}

/// Line-oriented text builder with tracked indentation.
#[derive(Debug)]
pub struct SourceWriter<'c> {
    config: &'c RenderConfig,
    depth: usize,
    out: String,
}

impl<'c> SourceWriter<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self {
            config,
            depth: 0,
            out: String::new(),
        }
    }

    /// Write one line at the current depth. Empty lines carry no indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            self.out.push_str(&self.config.indent.indent(self.depth));
            self.out.push_str(text);
        }
        self.out.push_str(self.config.line_ending.as_str());
    }

    pub fn blank(&mut self) {
        self.line("");
    }

    /// Write a line that opens a block.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Close a block and write its closing line.
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    /// Write `///` lines for a possibly multi-line comment.
    pub fn doc(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Escape text for a double-quoted string literal.
pub fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}
