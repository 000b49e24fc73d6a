use serde::Serialize;

use crate::scales::{BandScale, LinearScale};
use crate::utils::constants::{TICK_PADDING, TICK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Offset along the axis, in canvas units
    pub position: f64,
    pub label: String,
}

/// A positioned axis: where its group sits, the span of its domain line and its ticks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: AxisOrientation,
    pub translate: (f64, f64),
    pub range: (f64, f64),
    pub tick_size: f64,
    pub tick_padding: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis sampling a linear scale with nice ticks labelled as integers.
    /// Fractional ticks are dropped so every label sits on its own value.
    pub fn bottom(scale: &LinearScale, count: usize, translate: (f64, f64)) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .filter(|value| value.fract() == 0.0)
            .map(|value| Tick {
                position: scale.apply(value),
                label: format!("{}", value as i64),
            })
            .collect();

        Self {
            id: "x-axis",
            orientation: AxisOrientation::Bottom,
            translate,
            range: scale.range(),
            tick_size: TICK_SIZE,
            tick_padding: TICK_PADDING,
            ticks,
        }
    }

    /// Left axis with one tick at the center of every band
    pub fn left(scale: &BandScale, translate: (f64, f64)) -> Self {
        let ticks = scale
            .band_centers()
            .into_iter()
            .map(|(label, position)| Tick {
                position,
                label: label.to_string(),
            })
            .collect();

        Self {
            id: "y-axis",
            orientation: AxisOrientation::Left,
            translate,
            range: scale.range(),
            tick_size: TICK_SIZE,
            tick_padding: TICK_PADDING,
            ticks,
        }
    }
}
