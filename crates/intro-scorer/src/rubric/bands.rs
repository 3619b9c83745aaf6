/// One side of a band interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

/// Numeric interval mapped to a discrete rubric score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: Edge,
    pub high: Edge,
    pub score: u8,
    pub label: &'static str,
}

impl Band {
    pub const fn closed(low: f64, high: f64, score: u8, label: &'static str) -> Self {
        Self {
            low: Edge::Inclusive(low),
            high: Edge::Inclusive(high),
            score,
            label,
        }
    }

    pub const fn above(low: f64, score: u8, label: &'static str) -> Self {
        Self {
            low: Edge::Exclusive(low),
            high: Edge::Unbounded,
            score,
            label,
        }
    }

    pub const fn at_least(low: f64, score: u8, label: &'static str) -> Self {
        Self {
            low: Edge::Inclusive(low),
            high: Edge::Unbounded,
            score,
            label,
        }
    }

    /// Catch-all band used as a table fallback.
    pub const fn otherwise(score: u8, label: &'static str) -> Self {
        Self {
            low: Edge::Unbounded,
            high: Edge::Unbounded,
            score,
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_low = match self.low {
            Edge::Unbounded => true,
            Edge::Inclusive(bound) => value >= bound,
            Edge::Exclusive(bound) => value > bound,
        };
        let below_high = match self.high {
            Edge::Unbounded => true,
            Edge::Inclusive(bound) => value <= bound,
            Edge::Exclusive(bound) => value < bound,
        };
        above_low && below_high
    }
}

/// Ordered band table with a fallback for values that land in no band.
///
/// Tables are checked top to bottom; values falling between bands take the fallback.
#[derive(Debug, Clone, Copy)]
pub struct BandTable {
    pub bands: &'static [Band],
    pub fallback: Band,
}

impl BandTable {
    pub fn classify(&self, value: f64) -> &Band {
        self.bands
            .iter()
            .find(|band| band.contains(value))
            .unwrap_or(&self.fallback)
    }
}
