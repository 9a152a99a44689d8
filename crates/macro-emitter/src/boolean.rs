use crate::errors::EmitError;
use crate::script::{boolean, quoted, ScriptBuffer};

/// Render an `oEditor.Subtract` block removing `tool` parts from `blank`
/// parts. Names are joined with `,` in caller order.
///
/// Both lists must be non-empty.
pub fn render_subtract<S: AsRef<str>>(
    blank: &[S],
    tool: &[S],
    keep_originals: bool,
) -> Result<ScriptBuffer, EmitError> {
    if blank.is_empty() {
        return Err(EmitError::invalid("subtract needs at least one blank part"));
    }
    if tool.is_empty() {
        return Err(EmitError::invalid("subtract needs at least one tool part"));
    }

    let mut buf = ScriptBuffer::new();
    buf.blank();
    buf.line("oEditor.Subtract _");
    buf.line("Array(\"NAME:Selections\", _");
    buf.line("\"Blank Parts:=\", _");
    buf.line(format!("{}, _", quoted(&join_names(blank))));
    buf.line("\"Tool Parts:=\", _");
    buf.line(format!("{}), _", quoted(&join_names(tool))));
    buf.line("Array(\"NAME:SubtractParameters\", _");
    buf.last_entry("KeepOriginals", boolean(keep_originals), false);
    Ok(buf)
}

fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
