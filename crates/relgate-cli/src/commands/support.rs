use std::io::{self, Write};

use anyhow::Result;
use relgate_core::GateError;

pub(super) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Emits the machine-readable error payload on stderr before handing the error to anyhow.
pub(super) fn gate_failure(err: GateError, operation: &str) -> anyhow::Error {
    let payload = err.to_payload(operation);
    tracing::error!(
        code = payload.code.as_str(),
        trace_id = payload.trace_id.as_str(),
        operation,
        "release gate command failed"
    );
    if let Ok(encoded) = serde_json::to_string(&payload) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{encoded}");
    }
    anyhow::Error::new(err)
}
