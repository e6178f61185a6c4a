//! Python bindings for the byteranger Range header parser.

use byteranger_core::{
    error::RangeError as CoreRangeError, merge as core_merge, parse as core_parse,
    range::ByteRange as CoreByteRange,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

// ============================================================================
// ByteRange
// ============================================================================

/// An inclusive `[start, stop]` span of byte offsets.
#[pyclass(frozen, get_all, name = "ByteRange")]
#[derive(Clone)]
pub struct PyByteRange {
    pub start: u64,
    pub stop: u64,
}

#[pymethods]
impl PyByteRange {
    #[new]
    fn new(start: u64, stop: u64) -> PyResult<Self> {
        if start > stop {
            return Err(PyValueError::new_err(format!(
                "start {} exceeds stop {}",
                start, stop
            )));
        }
        Ok(PyByteRange { start, stop })
    }

    fn __repr__(&self) -> String {
        format!("ByteRange({}, {})", self.start, self.stop)
    }

    fn __str__(&self) -> String {
        format!("{}-{}", self.start, self.stop)
    }

    fn __len__(&self) -> usize {
        (self.stop - self.start + 1) as usize
    }

    /// Check whether a byte offset falls inside the range.
    fn contains(&self, offset: u64) -> bool {
        self.start <= offset && offset <= self.stop
    }
}

impl From<CoreByteRange> for PyByteRange {
    fn from(range: CoreByteRange) -> Self {
        PyByteRange {
            start: range.start,
            stop: range.stop,
        }
    }
}

fn to_py_err(err: CoreRangeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

// ============================================================================
// Functions
// ============================================================================

/// Parse one or more Range header values into merged, sorted byte ranges.
///
/// Raises ValueError on malformed numerals or invalid ranges.
#[pyfunction]
#[pyo3(signature = (ranges, max_len, prefix = "bytes="))]
fn parse(ranges: Vec<String>, max_len: u64, prefix: &str) -> PyResult<Vec<PyByteRange>> {
    let parsed = core_parse(&ranges, prefix, max_len).map_err(to_py_err)?;
    Ok(parsed.into_iter().map(PyByteRange::from).collect())
}

/// Merge (start, stop) pairs into a minimal sorted set of disjoint ranges.
#[pyfunction]
fn merge(ranges: Vec<(u64, u64)>) -> PyResult<Vec<PyByteRange>> {
    let mut converted = Vec::with_capacity(ranges.len());
    for (start, stop) in ranges {
        if start > stop {
            return Err(PyValueError::new_err(format!(
                "start {} exceeds stop {}",
                start, stop
            )));
        }
        converted.push(CoreByteRange::new(start, stop));
    }
    Ok(core_merge(converted)
        .into_iter()
        .map(PyByteRange::from)
        .collect())
}

#[pymodule]
fn pybr(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyByteRange>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(merge, m)?)?;
    Ok(())
}
