// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Conditional logging shim: uses `tracing` when enabled, falls back to eprintln!

#[cfg(feature = "tracing")]
use tracing::error;

#[cfg(not(feature = "tracing"))]
macro_rules! error {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
    }};
}

use chunkwise_core::Result;

/// Logs an aborted fallible grouping call before handing the error back.
pub(crate) fn trace_abort(operation: &str, result: Result<()>) -> Result<()> {
    if let Err(ref e) = result {
        error!("{operation} aborted: {e}");
    }
    result
}
