// SymptomLens - core/export.rs
//
// Plain-text and JSON export of an analysis result.
// Core layer: writes to any Write trait object.

use crate::util::error::ExportError;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Write the rendered result text, newline-terminated.
///
/// Returns the number of lines written.
pub fn export_text<W: Write>(
    text: &str,
    mut writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let io_err = |e: std::io::Error| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    };

    writer.write_all(text.as_bytes()).map_err(io_err)?;
    if !text.ends_with('\n') {
        writer.write_all(b"\n").map_err(io_err)?;
    }
    writer.flush().map_err(io_err)?;

    Ok(text.lines().count())
}

/// Write the raw analysis response as pretty-printed JSON.
pub fn export_json<W: Write>(
    raw: &Value,
    writer: W,
    export_path: &Path,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, raw).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })
}
