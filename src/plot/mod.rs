mod axes;
mod figure;
mod pyplot;
mod style;

// Re-exports.
pub use axes::Axes;
pub use figure::Figure;
pub use pyplot::PyPlot;
pub use style::Style;

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::prelude::*;
    use pyo3::types::IntoPyDict;

    #[test]
    fn save_pdf_test() {
        let path = ".test.pdf";
        if let Err(e) = save_pdf(path) {
            panic!("error while saving pdf: {:?}", e);
        }

        // check that the file was indeed created
        assert_eq!(std::path::Path::new(path).is_file(), true);
    }

    fn save_pdf(path: &str) -> PyResult<()> {
        Python::with_gil(|py| {
            let plt = PyPlot::new(py)?;
            let (fig, ax) = plt.subplots(None)?;

            let x = vec![8, 16, 32, 64];
            let y = vec![5.0, 10.0, 18.0, 32.0];
            ax.plot(x, y, None)?;
            ax.set_xlabel("Threads")?;
            ax.set_ylabel("Time (ms)")?;

            let kwargs = [("format", "pdf")].into_py_dict(py);
            plt.savefig(path, Some(kwargs))?;
            plt.close(fig)?;
            Ok(())
        })
    }
}
