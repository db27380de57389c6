//! Tracing for snapshot reads.
//!
//! `NoopTracer` methods are `#[inline(always)]` and empty, so an untraced
//! snapshot compiles down to the bare read loop. `PrintTracer` collects one
//! line per field (more at higher verbosity) for the CLI's `--trace`.

use minitable_layout::{Colors, FieldView, MiniTable};

use super::error::AccessError;
use super::value::FieldValue;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// One line per read field.
    #[default]
    Default,
    /// Adds skipped fields, offsets and presence checks (-v).
    Verbose,
}

/// Instrumentation points of [`FieldReader::snapshot_with`].
///
/// [`FieldReader::snapshot_with`]: super::FieldReader::snapshot_with
pub trait Tracer {
    /// Called before a descriptor is looked at.
    fn trace_field(&mut self, index: u16, field: &FieldView<'_>);

    /// Called for descriptors that hold no scalar leaf.
    fn trace_skip(&mut self, field: &FieldView<'_>);

    /// Called after the presence test.
    fn trace_presence(&mut self, field: &FieldView<'_>, present: bool);

    /// Called with the value that went into the snapshot.
    fn trace_value(&mut self, field: &FieldView<'_>, value: &FieldValue, present: bool);

    /// Called when a read fails, right before the snapshot gives up.
    fn trace_error(&mut self, field: &FieldView<'_>, error: &AccessError);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_field(&mut self, _index: u16, _field: &FieldView<'_>) {}

    #[inline(always)]
    fn trace_skip(&mut self, _field: &FieldView<'_>) {}

    #[inline(always)]
    fn trace_presence(&mut self, _field: &FieldView<'_>, _present: bool) {}

    #[inline(always)]
    fn trace_value(&mut self, _field: &FieldView<'_>, _value: &FieldValue, _present: bool) {}

    #[inline(always)]
    fn trace_error(&mut self, _field: &FieldView<'_>, _error: &AccessError) {}
}

/// Tracer that collects trace lines.
pub struct PrintTracer {
    verbosity: Verbosity,
    lines: Vec<String>,
    /// Index of the descriptor being traced.
    index: u16,
    index_width: usize,
    colors: Colors,
}

const SUBLINE: &str = "    ";

impl PrintTracer {
    pub fn new(table: &MiniTable<'_>, verbosity: Verbosity, colors: Colors) -> Self {
        let count = table.field_count() as usize;
        let index_width = if count <= 1 {
            1
        } else {
            (count - 1).ilog10() as usize + 1
        };
        Self {
            verbosity,
            lines: Vec::new(),
            index: 0,
            index_width,
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn head(&self, field: &FieldView<'_>) -> String {
        let name = field
            .field_type()
            .map_or_else(|| format!("type({})", field.descriptor_type()), |t| t.name().to_string());
        format!(
            "{:0w$} {} {name}",
            self.index,
            self.colors.number(format!("#{}", field.number())),
            w = self.index_width
        )
    }
}

impl Tracer for PrintTracer {
    fn trace_field(&mut self, index: u16, field: &FieldView<'_>) {
        self.index = index;
        if self.verbosity == Verbosity::Default {
            return;
        }
        let line = format!(
            "{} {}",
            self.head(field),
            self.colors.meta(format!("@{} {}", field.offset(), field.field_mode()))
        );
        self.lines.push(line);
    }

    fn trace_skip(&mut self, _field: &FieldView<'_>) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        self.lines.push(format!("{SUBLINE}skipped"));
    }

    fn trace_presence(&mut self, field: &FieldView<'_>, present: bool) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let state = if present { "set" } else { "clear" };
        self.lines
            .push(format!("{SUBLINE}{}: {state}", field.classify_presence()));
    }

    fn trace_value(&mut self, field: &FieldView<'_>, value: &FieldValue, present: bool) {
        let value = self.colors.value(value);
        let suffix = if present { "" } else { " (default)" };
        let line = match self.verbosity {
            Verbosity::Default => format!("{} = {value}{suffix}", self.head(field)),
            Verbosity::Verbose => format!("{SUBLINE}= {value}{suffix}"),
        };
        self.lines.push(line);
    }

    fn trace_error(&mut self, field: &FieldView<'_>, error: &AccessError) {
        let line = match self.verbosity {
            Verbosity::Default => format!("{} error: {error}", self.head(field)),
            Verbosity::Verbose => format!("{SUBLINE}error: {error}"),
        };
        self.lines.push(line);
    }
}
