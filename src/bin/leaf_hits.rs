use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use rayon::prelude::*;
use treebench_plot::{LeafHits, PlotFmt};

// folder where all charts will be stored
const PLOT_DIR: Option<&str> = Some("Hits_All");

// folder where the benchmark harness wrote its leaf-hits files
const RESULTS_DIR: &str = ".";

fn main() -> Result<(), Report> {
    // set global style
    treebench_plot::set_global_style()?;

    // the charts directory must not exist yet
    if let Some(dir) = PLOT_DIR {
        std::fs::create_dir(dir).wrap_err("create plot directory")?;
    }

    let lambdas = vec![
        0.1, 0.2, 0.4, 0.6, 0.8, 1.0, 2.0, 4.0, 6.0, 8.0, 16.0, 32.0, 64.0,
        128.0, 256.0, 512.0, 1024.0,
    ];

    // load every per-lambda file; rendering stays sequential as matplotlib
    // needs the GIL
    let tables: Vec<(f64, LeafHits)> = lambdas
        .par_iter()
        .map(|lambda| {
            let path =
                format!("{}/leaf_hits_lambda_{}.csv", RESULTS_DIR, lambda);
            let hits = LeafHits::load(&path)?;
            Ok((*lambda, hits))
        })
        .collect::<Result<_, Report>>()?;

    for (lambda, hits) in tables.iter() {
        let path = PlotFmt::leaf_hits_file_name(
            *lambda,
            hits.leaf_size(),
            hits.total_keys(),
        );
        treebench_plot::leaf_hits_plot(*lambda, hits, PLOT_DIR, &path)?;
        println!("saved {} | {} leaf buckets", path, hits.samples().len());
    }
    Ok(())
}
