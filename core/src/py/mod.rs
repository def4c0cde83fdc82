use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::cli::report_json as core_report_json;
use crate::package::read_package;
use crate::training::Training;
use crate::types::Cfg;

// ──────────────────────────────────────────────────────────────────────────────
// Python-API: samme semantikk som Rust-kjernen, feil blir ValueError
// ──────────────────────────────────────────────────────────────────────────────

/// `read_package_message("RUN", [15000, 1, 75]) -> str`
#[pyfunction]
fn read_package_message(code: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(code, &data).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let info = workout
        .show_training_info()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(info.get_message())
}

/// JSON-liste med pakker inn, JSON-rapport ut.
/// `fail_fast=False` gir én feillinje per ugyldig pakke i stedet for exception.
#[pyfunction]
#[pyo3(signature = (json_in, fail_fast = true))]
fn report_json(json_in: &str, fail_fast: bool) -> PyResult<String> {
    let cfg = Cfg { fail_fast: Some(fail_fast), ..Default::default() };
    core_report_json(json_in, &cfg).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn fitness_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_message, m)?)?;
    m.add_function(wrap_pyfunction!(report_json, m)?)?;
    Ok(())
}
