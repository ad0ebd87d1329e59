use crate::db::{ProtocolRules, Search, HIDDEN_PROTOCOL};
use crate::metrics::F64;
use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use csv::Reader;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};

/// In-memory table of sweep results, one row per benchmark run.
#[derive(Debug)]
pub struct ResultsDB {
    rows: Vec<ResultRow>,
}

// All fields:
// "Threads","Mixed Time","Protocol","U-TH","Lambda","Range Offset","RQ-TH"
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "Threads")]
    pub threads: u64,

    // total time of the mixed workload, in milliseconds
    #[serde(rename = "Mixed Time")]
    pub mixed_time: f64,

    #[serde(rename = "Protocol")]
    pub protocol: String,

    // fraction of operations that are updates
    #[serde(rename = "U-TH")]
    pub update_ratio: f64,

    // access skew of the benchmarked workload
    #[serde(rename = "Lambda")]
    pub lambda: f64,

    // configured span of a range query, in keys
    #[serde(rename = "Range Offset")]
    pub range_offset: u64,

    // fraction of operations that are range queries
    #[serde(rename = "RQ-TH")]
    pub range_query_ratio: f64,
}

impl ResultsDB {
    pub fn load(path: &str, rules: &ProtocolRules) -> Result<Self, Report> {
        let file = File::open(path)
            .wrap_err_with(|| format!("open results file {}", path))?;
        Self::from_reader(BufReader::new(file), rules)
            .wrap_err_with(|| format!("load results file {}", path))
    }

    pub fn from_reader(
        reader: impl Read,
        rules: &ProtocolRules,
    ) -> Result<Self, Report> {
        let mut rows = Vec::new();

        // parse csv
        let mut reader = Reader::from_reader(reader);
        for record in reader.deserialize() {
            // parse csv row
            let mut row: ResultRow = record.wrap_err("decode results row")?;
            row.protocol = rules.apply(&row.protocol);
            rows.push(row);
        }

        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Selects the rows of one sweep combination.
    pub fn find(&self, search: &Search) -> Vec<&ResultRow> {
        self.rows
            .iter()
            .filter(|row| {
                // filter out rows with a different update ratio
                if row.update_ratio != search.update_ratio {
                    return false;
                }

                // filter out rows above the thread cap (if set)
                if let Some(max_threads) = search.max_threads {
                    if row.threads > max_threads {
                        return false;
                    }
                }

                // filter out hidden protocols
                if row.protocol == HIDDEN_PROTOCOL {
                    return false;
                }

                // filter out rows with a different lambda
                if row.lambda != search.lambda {
                    return false;
                }

                // filter out rows with a different range offset
                if row.range_offset != search.range_offset {
                    return false;
                }

                // filter out rows with a different range-query ratio
                if row.range_query_ratio != search.range_query_ratio {
                    return false;
                }

                // if this row was not filtered-out until now, plot it
                true
            })
            .collect()
    }
}

/// Averages `Mixed Time` by `(Threads, Protocol)`: one series per protocol,
/// points sorted by thread count.
pub fn series_by_protocol(
    rows: &[&ResultRow],
) -> BTreeMap<String, Vec<(u64, F64)>> {
    // sum and count per (protocol, threads) pair
    let mut sums: BTreeMap<(String, u64), (f64, usize)> = BTreeMap::new();
    for row in rows {
        let (sum, count) = sums
            .entry((row.protocol.clone(), row.threads))
            .or_insert((0.0, 0));
        *sum += row.mixed_time;
        *count += 1;
    }

    // fold into per-protocol series; the key order makes each series sorted
    // by thread count
    let mut series: BTreeMap<String, Vec<(u64, F64)>> = BTreeMap::new();
    for ((protocol, threads), (sum, count)) in sums {
        let mean = sum / count as f64;
        series
            .entry(protocol)
            .or_insert_with(Vec::new)
            .push((threads, F64::new(mean)));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_CSV: &str = "\
Threads,Mixed Time,Protocol,U-TH,Lambda,Range Offset,RQ-TH
16,5.0,ORWC,0.1,0.1,68,0.0
16,7.0,ORWC,0.1,0.1,68,0.0
32,9.0,ORWC,0.1,0.1,68,0.0
16,11.0,LHL,0.1,0.1,68,0.0
128,99.0,ORWC,0.1,0.1,68,0.0
16,3.0,1,0.1,0.1,68,0.0
16,4.0,ORWC,0.3,0.1,68,0.0
16,6.0,ORWC,0.1,16,68,0.0
16,8.0,ORWC,0.1,0.1,1088,0.0
16,2.0,ORWC,0.1,0.1,68,0.5
";

    fn load() -> ResultsDB {
        ResultsDB::from_reader(RESULTS_CSV.as_bytes(), &ProtocolRules::new())
            .expect("results csv should decode")
    }

    #[test]
    fn decode() {
        let db = load();
        assert_eq!(db.row_count(), 10);

        let rows = db.find(&Search::new(0.1, 0.1, 1088, 0.0));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].threads, 16);
        assert_eq!(rows[0].mixed_time, 8.0);
        assert_eq!(rows[0].protocol, "ORWC");
    }

    #[test]
    fn find_filters_each_predicate() {
        let db = load();
        let mut search = Search::new(0.1, 0.1, 68, 0.0);
        search.max_threads(64);

        // excluded: the hidden protocol, the 128-thread row and the rows with
        // a different update ratio, lambda, range offset or rq ratio
        let rows = db.find(&search);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.threads <= 64));
        assert!(rows.iter().all(|row| row.protocol != HIDDEN_PROTOCOL));
    }

    #[test]
    fn find_without_thread_cap() {
        let db = load();
        let search = Search::new(0.1, 0.1, 68, 0.0);
        assert_eq!(db.find(&search).len(), 5);
    }

    #[test]
    fn find_unmatched_combination_is_empty() {
        let db = load();
        let search = Search::new(512.0, 0.9, 68, 1.0);
        assert!(db.find(&search).is_empty());
    }

    #[test]
    fn series_averages_mixed_time() {
        let db = load();
        let mut search = Search::new(0.1, 0.1, 68, 0.0);
        search.max_threads(64);

        let rows = db.find(&search);
        let series = series_by_protocol(&rows);
        assert_eq!(series.len(), 2);
        // ORWC at 16 threads: (5 + 7) / 2; LHL keeps its single point
        assert_eq!(series["ORWC"], vec![(16, F64::new(6.0)), (32, F64::new(9.0))]);
        assert_eq!(series["LHL"], vec![(16, F64::new(11.0))]);
    }

    #[test]
    fn hidden_protocols_are_not_plotted() {
        let rules = ProtocolRules::new().hide_prefix("LHL");
        let db = ResultsDB::from_reader(RESULTS_CSV.as_bytes(), &rules)
            .expect("results csv should decode");

        let mut search = Search::new(0.1, 0.1, 68, 0.0);
        search.max_threads(64);
        let rows = db.find(&search);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.protocol == "ORWC"));
    }
}
