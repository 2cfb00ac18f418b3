use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use std::path::Path;

use crate::canvas::ShapeBuffer;
use crate::secondary;
use crate::smoothing;
use crate::xvg;

/// Python binding for read_xvg
#[pyfunction]
#[pyo3(signature = (xvg))]
fn read_xvg(xvg: &str) -> PyResult<(Vec<f64>, Vec<f64>)> {
    xvg::read_xvg(xvg)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(format!("Failed to read xvg: {}", e)))
}

/// Python binding for moving_average
#[pyfunction]
#[pyo3(signature = (x, w=3))]
fn moving_average(x: Vec<f64>, w: usize) -> Vec<f64> {
    smoothing::moving_average(&x, w)
}

/// Python binding for draw_ss
///
/// Returns the drawn shapes as a list of dicts with keys x, y, width,
/// height, fill (hex color string), in draw order.
#[pyfunction]
#[pyo3(signature = (ss, x, ypos=20.0, height=2.0))]
fn draw_ss(
    py: Python<'_>,
    ss: &str,
    x: Vec<f64>,
    ypos: f64,
    height: f64,
) -> PyResult<PyObject> {
    let mut buffer = ShapeBuffer::new();
    secondary::draw_ss(&mut buffer, ss, &x, ypos, height);

    let py_shapes = PyList::empty_bound(py);
    for rect in buffer.shapes() {
        let py_dict = PyDict::new_bound(py);
        py_dict.set_item("x", rect.x)?;
        py_dict.set_item("y", rect.y)?;
        py_dict.set_item("width", rect.width)?;
        py_dict.set_item("height", rect.height)?;
        py_dict.set_item("fill", rect.fill.to_hex())?;
        py_shapes.append(py_dict)?;
    }

    Ok(py_shapes.into())
}

/// Python binding for drawing bands straight to an SVG file
#[pyfunction]
#[pyo3(signature = (ss, x, output_svg, ypos=20.0, height=2.0))]
fn render_ss_svg(
    ss: &str,
    x: Vec<f64>,
    output_svg: &str,
    ypos: f64,
    height: f64,
) -> PyResult<()> {
    let mut buffer = ShapeBuffer::new();
    secondary::draw_ss(&mut buffer, ss, &x, ypos, height);

    buffer
        .write_svg(Path::new(output_svg))
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(format!("Failed to write SVG: {}", e)))
}

/// Python module definition
#[pymodule]
fn traj_viz_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_xvg, m)?)?;
    m.add_function(wrap_pyfunction!(moving_average, m)?)?;
    m.add_function(wrap_pyfunction!(draw_ss, m)?)?;
    m.add_function(wrap_pyfunction!(render_ss_svg, m)?)?;
    m.add("__doc__", "Secondary-structure trajectory visualization library with Python bindings")?;
    Ok(())
}
