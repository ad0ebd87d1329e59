#![deny(rust_2018_idioms)]

// This module contains the definition of the results tables and searches.
mod db;

// This module contains the definition of `PlotFmt`.
mod fmt;

// This module contains the definition of `F64` and `Histogram`.
pub mod metrics;

// This module contains the matplotlib bindings.
#[cfg(feature = "pyo3")]
mod plot;

// This module contains the report entry points.
#[cfg(feature = "pyo3")]
mod report;

// Re-exports.
pub use db::{
    series_by_protocol, LeafHitRow, LeafHits, ProtocolRules, ResultRow,
    ResultsDB, Search, HIDDEN_PROTOCOL,
};
pub use fmt::PlotFmt;
#[cfg(feature = "pyo3")]
pub use plot::{Axes, Figure, PyPlot, Style};
#[cfg(feature = "pyo3")]
pub use report::{leaf_hits_plot, set_global_style, sweep_plot};

/// Number of bins in every leaf-hits histogram.
pub const LEAF_HITS_BINS: usize = 150;

/// Unwraps a python result, printing the python traceback before bailing.
#[macro_export]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(value) => value,
            Err(error) => {
                // show the python side of the error as well
                error.print($py);
                color_eyre::eyre::bail!("python error: {}", error)
            }
        }
    }};
}

/// Creates the kwargs dict for a matplotlib call.
#[macro_export]
macro_rules! pydict {
    ($py:expr $(, ($key:expr, $value:expr))* $(,)?) => {{
        (|| -> pyo3::PyResult<&pyo3::types::PyDict> {
            let dict = pyo3::types::PyDict::new($py);
            $(
                dict.set_item($key, $value)?;
            )*
            Ok(dict)
        })()
    }};
}
