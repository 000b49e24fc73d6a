use serde::Serialize;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Continuous linear map from a numeric domain to a numeric range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value into the range; a single-value domain maps to the range start
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || span.is_nan() {
            0.0
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Human-friendly tick values covering the domain, roughly `count` of them
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let (start, stop, reverse) = if d1 < d0 {
            (d1, d0, true)
        } else {
            (d0, d1, false)
        };
        let mut ticks = ticks(start, stop, count as f64);
        if reverse {
            ticks.reverse();
        }
        ticks
    }
}

/// Integer bounds and increment for nice ticks over `[start, stop]`.
/// A negative increment means "divide by its magnitude".
fn tick_steps(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inc_pos = 10f64.powf(-power) / factor;
        i1 = (start * inc_pos).round();
        i2 = (stop * inc_pos).round();
        if i1 / inc_pos < start {
            i1 += 1.0;
        }
        if i2 / inc_pos > stop {
            i2 -= 1.0;
        }
        inc = -inc_pos;
    } else {
        let inc_pos = 10f64.powf(power) * factor;
        i1 = (start / inc_pos).round();
        i2 = (stop / inc_pos).round();
        if i1 * inc_pos < start {
            i1 += 1.0;
        }
        if i2 * inc_pos > stop {
            i2 -= 1.0;
        }
        inc = inc_pos;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_steps(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (i1, i2, inc) = tick_steps(start, stop, count);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1 + 1.0) as usize;
    (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_maps_domain_edges_to_range_edges() {
        let scale = LinearScale::new((1753.0, 2015.0), (80.0, 1480.0));
        assert_eq!(scale.apply(1753.0), 80.0);
        assert_eq!(scale.apply(2015.0), 1480.0);
        assert!((scale.apply(1884.0) - 780.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((1753.0, 1753.0), (80.0, 1480.0));
        assert_eq!(scale.apply(1753.0), 80.0);
    }

    #[test]
    fn test_year_ticks() {
        let scale = LinearScale::new((1753.0, 2015.0), (0.0, 1.0));
        let ticks = scale.ticks(10);
        let expected: Vec<f64> = (0..13).map(|i| 1760.0 + 20.0 * i as f64).collect();
        assert_eq!(ticks, expected);
    }

    #[test]
    fn test_fractional_ticks() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        assert_eq!(scale.ticks(5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_reversed_domain_ticks_descend() {
        let scale = LinearScale::new((10.0, 0.0), (0.0, 100.0));
        assert_eq!(scale.ticks(2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_single_value_domain_has_one_tick() {
        let scale = LinearScale::new((1753.0, 1753.0), (0.0, 1.0));
        assert_eq!(scale.ticks(10), vec![1753.0]);
        assert!(scale.ticks(0).is_empty());
    }
}
