use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use csv::Reader;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};

/// Leaf access counts for a single lambda, one row per key-interval bucket.
#[derive(Debug)]
pub struct LeafHits {
    leaf_size: u64,
    total_keys: u64,
    rows: Vec<LeafHitRow>,
}

// All fields:
// "Low","Count","Leaf Size","N"
#[derive(Debug, Clone, Deserialize)]
pub struct LeafHitRow {
    // lower bound of the key interval covered by this leaf
    #[serde(rename = "Low")]
    pub low: f64,

    // registered hits on this leaf
    #[serde(rename = "Count")]
    pub count: u64,

    #[serde(rename = "Leaf Size")]
    pub leaf_size: u64,

    #[serde(rename = "N")]
    pub total_keys: u64,
}

impl LeafHits {
    pub fn load(path: &str) -> Result<Self, Report> {
        let file = File::open(path)
            .wrap_err_with(|| format!("open leaf hits file {}", path))?;
        Self::from_reader(BufReader::new(file))
            .wrap_err_with(|| format!("load leaf hits file {}", path))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, Report> {
        let mut rows = Vec::new();

        // parse csv
        let mut reader = Reader::from_reader(reader);
        for record in reader.deserialize() {
            // parse csv row
            let row: LeafHitRow = record.wrap_err("decode leaf hits row")?;
            rows.push(row);
        }

        // the per-file constants live in the first row
        let first = match rows.first() {
            Some(first) => first,
            None => eyre::bail!("leaf hits input has no rows"),
        };

        Ok(Self {
            leaf_size: first.leaf_size,
            total_keys: first.total_keys,
            rows,
        })
    }

    /// Maximum number of keys per leaf node, constant per file.
    pub fn leaf_size(&self) -> u64 {
        self.leaf_size
    }

    /// Total number of keys in the benchmarked tree, constant per file.
    pub fn total_keys(&self) -> u64 {
        self.total_keys
    }

    /// `(Low, Count)` samples, ready for binning.
    pub fn samples(&self) -> Vec<(f64, u64)> {
        self.rows.iter().map(|row| (row.low, row.count)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAF_HITS_CSV: &str = "\
Low,Count,Leaf Size,N
0.0,12,16,100000
17.0,3,16,100000
34.0,7,16,100000
";

    #[test]
    fn decode() {
        let hits = LeafHits::from_reader(LEAF_HITS_CSV.as_bytes())
            .expect("leaf hits csv should decode");
        assert_eq!(hits.leaf_size(), 16);
        assert_eq!(hits.total_keys(), 100000);
        assert_eq!(
            hits.samples(),
            vec![(0.0, 12), (17.0, 3), (34.0, 7)]
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        let result = LeafHits::from_reader("Low,Count,Leaf Size,N\n".as_bytes());
        assert!(result.is_err());
    }
}
