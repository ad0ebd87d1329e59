use crate::db::{series_by_protocol, LeafHits, ResultsDB, Search};
use crate::metrics::{Histogram, F64};
use crate::plot::{PyPlot, Style};
use crate::{pydict, pytry, PlotFmt, LEAF_HITS_BINS};
use color_eyre::Report;
use pyo3::prelude::*;
use std::collections::BTreeMap;

/// Sets the global matplotlib style. Should be called once per binary.
pub fn set_global_style() -> Result<(), Report> {
    Python::with_gil(|py| {
        let style = pytry!(py, Style::new(py));
        pytry!(py, style.use_("ggplot"));
        Ok(())
    })
}

/// Generates the chart of one sweep combination: `Mixed Time` averaged per
/// `(Threads, Protocol)`, one line per protocol, logarithmic y axis.
///
/// Returns the plotted series, or `None` if no row matched the search, in
/// which case nothing is written.
pub fn sweep_plot(
    search: &Search,
    pages: f64,
    db: &ResultsDB,
    output_dir: Option<&str>,
    output_file: &str,
) -> Result<Option<BTreeMap<String, Vec<(u64, F64)>>>, Report> {
    let rows = db.find(search);
    if rows.is_empty() {
        // nothing matched this combination; skip the chart
        return Ok(None);
    }
    let series = series_by_protocol(&rows);

    Python::with_gil(|py| {
        let plt = pytry!(py, PyPlot::new(py));
        let (fig, ax) = pytry!(py, plt.subplots(None));

        for (index, (protocol, points)) in series.iter().enumerate() {
            let x: Vec<_> =
                points.iter().map(|(threads, _)| *threads).collect();
            let y: Vec<_> =
                points.iter().map(|(_, time)| time.value()).collect();
            let kwargs = pytry!(
                py,
                pydict!(
                    py,
                    ("label", protocol.as_str()),
                    ("color", PlotFmt::color(index)),
                )
            );
            pytry!(py, ax.plot(x, y, Some(kwargs)));
        }

        pytry!(py, ax.set_yscale("log"));
        pytry!(py, ax.set_xlabel("Threads"));
        pytry!(py, ax.set_ylabel("Time (ms)"));
        pytry!(py, ax.set_title(&PlotFmt::sweep_title(search, pages)));

        let kwargs = pytry!(py, pydict!(py, ("title", "Protocol")));
        pytry!(py, ax.legend(Some(kwargs)));

        // save figure
        let path = output_path(output_dir, output_file);
        let kwargs = pytry!(py, pydict!(py, ("format", "pdf")));
        pytry!(py, plt.savefig(&path, Some(kwargs)));
        pytry!(py, plt.close(fig));
        Ok(())
    })?;

    Ok(Some(series))
}

/// Generates the leaf-hits chart of one lambda: the `Low` column binned into
/// `LEAF_HITS_BINS` equal-width bins, weighted by `Count`. Always produces a
/// file.
pub fn leaf_hits_plot(
    lambda: f64,
    hits: &LeafHits,
    output_dir: Option<&str>,
    output_file: &str,
) -> Result<(), Report> {
    let histogram = Histogram::from_weighted(&hits.samples(), LEAF_HITS_BINS)?;

    Python::with_gil(|py| {
        let plt = pytry!(py, PyPlot::new(py));
        let kwargs = pytry!(py, pydict!(py, ("figsize", (10, 6))));
        let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

        let kwargs = pytry!(
            py,
            pydict!(
                py,
                ("width", histogram.bin_width()),
                ("align", "edge"),
                ("color", PlotFmt::color(0)),
            )
        );
        pytry!(
            py,
            ax.bar(histogram.edges(), histogram.weights().to_vec(), Some(kwargs))
        );

        pytry!(py, ax.set_xlabel("Leaf Nodes Key Interval"));
        pytry!(py, ax.set_ylabel("Hits"));
        pytry!(
            py,
            ax.set_title(&PlotFmt::leaf_hits_title(
                lambda,
                hits.leaf_size(),
                hits.total_keys()
            ))
        );

        // rotate the interval labels so they stay readable
        let kwargs = pytry!(py, pydict!(py, ("axis", "x"), ("labelrotation", 45)));
        pytry!(py, ax.tick_params(Some(kwargs)));

        // save figure
        let path = output_path(output_dir, output_file);
        let kwargs = pytry!(py, pydict!(py, ("format", "pdf")));
        pytry!(py, plt.savefig(&path, Some(kwargs)));
        pytry!(py, plt.close(fig));
        Ok(())
    })
}

fn output_path(output_dir: Option<&str>, output_file: &str) -> String {
    match output_dir {
        Some(dir) => format!("{}/{}", dir, output_file),
        None => String::from(output_file),
    }
}
