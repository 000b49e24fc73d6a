use serde::Serialize;

/// Categorical scale dividing a range into equal, unpadded bands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    step: f64,
}

impl BandScale {
    pub fn new<I, S>(domain: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domain: Vec<String> = domain.into_iter().map(Into::into).collect();
        let step = if domain.is_empty() {
            0.0
        } else {
            (range.1 - range.0) / domain.len() as f64
        };
        Self {
            domain,
            range,
            step,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Height (or width) of every band
    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    /// Start of the band for `value`, `None` for values outside the domain
    pub fn apply(&self, value: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|d| d == value)
            .map(|index| self.position(index))
    }

    /// Start of the band at `index` in domain order
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + self.step * index as f64
    }

    /// `(value, center)` for every band, in domain order
    pub fn band_centers(&self) -> Vec<(&str, f64)> {
        self.domain
            .iter()
            .enumerate()
            .map(|(index, value)| (value.as_str(), self.position(index) + self.step / 2.0))
            .collect()
    }
}
