//! Builder-pattern printer for rendering compile errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::CompileError;
use crate::parser::Symbol;

/// Builder for rendering a compile error with various options.
pub struct DiagnosticsPrinter<'e, 's> {
    error: &'e CompileError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticsPrinter<'e, 's> {
    pub fn new(error: &'e CompileError) -> Self {
        Self {
            error,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let (Some(source), Some(position)) = (self.source, self.error.position()) else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = char_range(source, position);
        let label = self.label(source, position);
        let title = self.title(source, position);

        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&label));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.error.is_internal() {
            write!(w, "internal compiler error: {}", self.error)
        } else {
            write!(w, "error: {}", self.error)
        }
    }

    fn title(&self, source: &str, position: usize) -> String {
        match self.error {
            CompileError::UnknownToken { .. } => {
                format!("unknown token {}", found(source, position))
            }
            CompileError::ParseError { got, .. } => {
                format!("unexpected {}", found_symbol(source, position, *got))
            }
            other => other.to_string(),
        }
    }

    fn label(&self, source: &str, position: usize) -> String {
        match self.error {
            CompileError::UnknownToken { .. } => "not a pattern symbol".to_owned(),
            CompileError::ParseError { expected, got, .. } => {
                let typed_end = *got == Symbol::End && position < source.chars().count();
                let mut got = found_symbol(source, position, *got);
                if typed_end {
                    got.push_str(" (the end of the pattern is implicit)");
                }
                if expected.is_empty() {
                    return format!("got {got}");
                }
                let names: Vec<String> = expected.iter().map(Symbol::to_string).collect();
                format!("expected {}; got {got}", names.join(", "))
            }
            _ => String::new(),
        }
    }
}

/// Quoted source character at `position`, or the end marker past the end.
fn found(source: &str, position: usize) -> String {
    match source.chars().nth(position) {
        Some(ch) => format!("'{ch}'"),
        None => Symbol::End.to_string(),
    }
}

fn found_symbol(source: &str, position: usize, got: Symbol) -> String {
    match got {
        Symbol::Lit => found(source, position),
        other => other.to_string(),
    }
}

/// Byte range of the character at `position`, one past the end if missing.
fn char_range(source: &str, position: usize) -> Range<usize> {
    let start = source
        .char_indices()
        .nth(position)
        .map_or(source.len(), |(i, _)| i);
    let end = source[start..]
        .chars()
        .next()
        .map_or(start, |ch| start + ch.len_utf8());
    adjust_range(start..end, source.len())
}

fn adjust_range(range: Range<usize>, limit: usize) -> Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}

impl CompileError {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
