//! Line-oriented text buffer for macro blocks.

use hfss_types::Unit;

use crate::config::AttributeStyle;

/// Accumulates the lines of one or more macro blocks before they are
/// committed to a sink.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuffer {
    text: String,
}

impl ScriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, s: impl AsRef<str>) {
        self.text.push_str(s.as_ref());
        self.text.push('\n');
    }

    pub fn blank(&mut self) {
        self.text.push('\n');
    }

    /// A `"Key:=", value, _` entry.
    pub fn entry(&mut self, key: &str, value: impl AsRef<str>) {
        self.line(format!("\"{key}:=\", {}, _", value.as_ref()));
    }

    /// A `"Key:=", value)` entry closing its array, followed by `, _` when
    /// another array follows in the same statement.
    pub fn last_entry(&mut self, key: &str, value: impl AsRef<str>, continued: bool) {
        let tail = if continued { "), _" } else { ")" };
        self.line(format!("\"{key}:=\", {}{tail}", value.as_ref()));
    }

    /// The shared `Array("NAME:Attributes", ...)` tail of every primitive.
    pub fn attributes(&mut self, name: &str, transparency: f64, style: &AttributeStyle) {
        let [r, g, b] = style.color;
        self.line("Array(\"NAME:Attributes\", _");
        self.entry("Name", quoted(name));
        self.entry("Flags", quoted(""));
        self.entry("Color", quoted(&format!("({r} {g} {b})")));
        self.entry("Transparency", transparency.to_string());
        self.entry("PartCoordinateSystem", quoted(&style.coordinate_system));
        self.entry("MaterialName", quoted(&style.material));
        self.last_entry("SolveInside", boolean(style.solve_inside), false);
    }

    pub fn append(&mut self, other: ScriptBuffer) {
        self.text.push_str(&other.text);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// `"<value><unit>"`, the form every geometric quantity takes.
pub fn length(value: f64, unit: &Unit) -> String {
    format!("\"{value}{unit}\"")
}

pub fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

pub fn boolean(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}
