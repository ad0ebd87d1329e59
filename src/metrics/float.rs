use std::cmp::Ordering;
use std::fmt;

/// Totally-ordered `f64`, so that aggregated values can be compared and
/// asserted on directly.
#[derive(Clone, Copy)]
pub struct F64(f64);

impl F64 {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Value rounded to one decimal place, as shown in report summaries.
    pub fn round(&self) -> String {
        format!("{:.1}", self.0)
    }
}

impl PartialEq for F64 {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for F64 {}

impl PartialOrd for F64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for F64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .partial_cmp(&other.0)
            .expect("f64 values should be comparable")
    }
}

impl fmt::Debug for F64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert_eq!(F64::new(6.0), F64::new(6.0));
        assert!(F64::new(0.1) < F64::new(0.3));
        assert!(F64::new(1024.0) > F64::new(512.0));
    }

    #[test]
    fn round() {
        assert_eq!(F64::new(6.0).round(), "6.0");
        assert_eq!(F64::new(6.04).round(), "6.0");
        assert_eq!(F64::new(6.06).round(), "6.1");
    }
}
