use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use treebench_plot::{PlotFmt, ProtocolRules, ResultsDB, Search};

// folder where all charts will be stored
const PLOT_DIR: Option<&str> = Some("DBS_16");

// results file produced by the benchmark harness
const RESULTS_FILE: &str = "dbs_16.csv";

// maximum number of keys per leaf node in the benchmarked tree
const LEAF_CAPACITY: u64 = 16;

// rows above this thread count are not plotted
const MAX_THREADS: u64 = 64;

fn main() -> Result<(), Report> {
    // set global style
    treebench_plot::set_global_style()?;

    // the charts directory must not exist yet
    if let Some(dir) = PLOT_DIR {
        std::fs::create_dir(dir).wrap_err("create plot directory")?;
    }

    // sweep parameters
    let lambdas = vec![0.1, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0];
    let update_ratios = vec![0.1, 0.3, 0.5, 0.7, 0.9];
    let range_offsets =
        vec![4 * (LEAF_CAPACITY + 1), 64 * (LEAF_CAPACITY + 1)];
    let range_query_ratios = vec![0.0, 0.1, 0.5, 0.9, 1.0];

    // no protocol is hidden or re-badged in the shipped reports; hide rules
    // for protocol families under study go here
    let rules = ProtocolRules::new();

    // load results
    let db = ResultsDB::load(RESULTS_FILE, &rules).wrap_err("load results")?;
    println!("loaded {} rows from {}", db.row_count(), RESULTS_FILE);

    for lambda in lambdas.iter().copied() {
        for update_ratio in update_ratios.iter().copied() {
            for range_offset in range_offsets.iter().copied() {
                for range_query_ratio in range_query_ratios.iter().copied() {
                    let mut search = Search::new(
                        lambda,
                        update_ratio,
                        range_offset,
                        range_query_ratio,
                    );
                    search.max_threads(MAX_THREADS);

                    let pages = PlotFmt::pages(range_offset, LEAF_CAPACITY);
                    let path = PlotFmt::sweep_file_name(&search, pages);
                    let series = treebench_plot::sweep_plot(
                        &search, pages, &db, PLOT_DIR, &path,
                    )?;

                    // combinations with no matching row produce no chart
                    if let Some(series) = series {
                        println!("saved {} | {} protocols", path, series.len());
                    }
                }
            }
        }
    }
    Ok(())
}
