use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PricePoint;

/// A sampled datum mapped into clip space, retaining the raw values it
/// represents so interactivity can report them back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipPoint {
    /// Horizontal clip coordinate in `[-1, 1]`, non-decreasing in input order.
    pub x: f64,
    /// Vertical clip coordinate in `[-1, 1]`.
    pub y: f64,
    pub price: f64,
    pub unix: i64,
}

/// Affine map from a data domain onto clip space `[-1, 1]`.
///
/// A degenerate domain (single sample or flat series) collapses to a constant
/// map onto the center (`0.0`) instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipScale {
    domain_min: f64,
    domain_max: f64,
}

impl ClipScale {
    #[must_use]
    pub fn from_domain(domain_min: f64, domain_max: f64) -> Self {
        let (domain_min, domain_max) = if domain_min <= domain_max {
            (domain_min, domain_max)
        } else {
            (domain_max, domain_min)
        };
        Self {
            domain_min,
            domain_max,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_min == self.domain_max
    }

    /// Maps `domain_min -> -1` and `domain_max -> +1`; monotonic in between.
    #[must_use]
    pub fn to_clip(self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.domain_min) / (self.domain_max - self.domain_min) * 2.0 - 1.0
    }

    /// Evenly spaced representative values spanning the domain, deduplicated.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 || self.is_degenerate() {
            return vec![self.domain_min];
        }

        let mut ticks: SmallVec<[f64; 8]> = SmallVec::new();
        let span = self.domain_max - self.domain_min;
        let denominator = (count - 1) as f64;
        for index in 0..count {
            let ratio = (index as f64) / denominator;
            ticks.push(self.domain_min + span * ratio);
        }
        ticks.dedup();
        ticks.into_vec()
    }
}

/// The domain-to-clip-space mapping pair derived from one sampled series,
/// rebuilt from scratch on every render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphScales {
    price: ClipScale,
    time: ClipScale,
}

impl GraphScales {
    /// Fits both scales to the sampled series. Returns `None` for an empty
    /// sample, in which case the pipeline draws nothing.
    #[must_use]
    pub fn from_sample(sample: &[PricePoint]) -> Option<Self> {
        let first = sample.first()?;

        let mut price_min = first.price;
        let mut price_max = first.price;
        let mut unix_min = first.unix;
        let mut unix_max = first.unix;
        for point in &sample[1..] {
            price_min = price_min.min(point.price);
            price_max = price_max.max(point.price);
            unix_min = unix_min.min(point.unix);
            unix_max = unix_max.max(point.unix);
        }

        Some(Self {
            price: ClipScale::from_domain(price_min, price_max),
            time: ClipScale::from_domain(unix_min as f64, unix_max as f64),
        })
    }

    #[must_use]
    pub fn price_scale(self) -> ClipScale {
        self.price
    }

    #[must_use]
    pub fn time_scale(self) -> ClipScale {
        self.time
    }

    #[must_use]
    pub fn price_to_clip_y(self, price: f64) -> f64 {
        self.price.to_clip(price)
    }

    #[must_use]
    pub fn unix_to_clip_x(self, unix: i64) -> f64 {
        self.time.to_clip(unix as f64)
    }

    /// Applies both maps to every sampled datum, preserving input order.
    #[must_use]
    pub fn clip_points(self, sample: &[PricePoint]) -> Vec<ClipPoint> {
        sample
            .iter()
            .map(|point| ClipPoint {
                x: self.unix_to_clip_x(point.unix),
                y: self.price_to_clip_y(point.price),
                price: point.price,
                unix: point.unix,
            })
            .collect()
    }

    #[must_use]
    pub fn price_ticks(self, count: usize) -> Vec<f64> {
        self.price.ticks(count)
    }

    /// Representative timestamps spanning the sampled domain.
    #[must_use]
    pub fn time_ticks(self, count: usize) -> Vec<i64> {
        let mut ticks: Vec<i64> = self
            .time
            .ticks(count)
            .into_iter()
            .map(|value| value.round() as i64)
            .collect();
        ticks.dedup();
        ticks
    }
}
