use crate::db::Search;

// categorical palette for protocol lines, in legend order
const COLORS: &[&str] = &[
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a",
    "#d62728", "#ff9896", "#9467bd", "#c5b0d5", "#8c564b", "#c49c94",
    "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7", "#bcbd22", "#dbdb8d",
    "#17becf", "#9edae5",
];

pub struct PlotFmt;

impl PlotFmt {
    /// Number of pages spanned by a range query.
    pub fn pages(range_offset: u64, leaf_capacity: u64) -> f64 {
        range_offset as f64 / (leaf_capacity + 1) as f64
    }

    /// Fraction of read operations, the complement of the update ratio.
    pub fn read_ratio(update_ratio: f64) -> f64 {
        ((1.0 - update_ratio) * 10.0).round() / 10.0
    }

    pub fn sweep_title(search: &Search, pages: f64) -> String {
        format!(
            "Lb={}, U/R/RQ= {}/{}/{}, Pages={}",
            search.lambda,
            search.update_ratio,
            Self::read_ratio(search.update_ratio),
            search.range_query_ratio,
            pages,
        )
    }

    pub fn sweep_file_name(search: &Search, pages: f64) -> String {
        format!(
            "Lb={}, U_R_RQ= {}_{}_{}, Pages={}.pdf",
            search.lambda,
            search.update_ratio,
            Self::read_ratio(search.update_ratio),
            search.range_query_ratio,
            pages,
        )
    }

    pub fn leaf_hits_title(
        lambda: f64,
        leaf_size: u64,
        total_keys: u64,
    ) -> String {
        format!(
            "Lambda = {}, Max Keys per Leaf = {}, N = {}",
            lambda, leaf_size, total_keys,
        )
    }

    pub fn leaf_hits_file_name(
        lambda: f64,
        leaf_size: u64,
        total_keys: u64,
    ) -> String {
        format!(
            "Hits_Lambda={}_Leaf_Size={}_N={}.pdf",
            lambda, leaf_size, total_keys,
        )
    }

    /// Line color of the `index`-th protocol in a chart.
    pub fn color(index: usize) -> &'static str {
        COLORS[index % COLORS.len()]
    }
}
