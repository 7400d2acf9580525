//! Colour scales for activity, authorship and blame age

use serde::Serialize;

/// Palette cycled through by author ordinal
pub const AUTHOR_PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
];

/// Commit activity bucket, by fraction of the busiest observed count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl HeatLevel {
    pub fn from_ratio(count: usize, max: usize) -> Self {
        if count == 0 {
            return HeatLevel::None;
        }
        if max == 0 {
            return HeatLevel::Max;
        }

        let ratio = count as f64 / max as f64;
        if ratio > 0.75 {
            HeatLevel::Max
        } else if ratio > 0.5 {
            HeatLevel::High
        } else if ratio > 0.25 {
            HeatLevel::Medium
        } else {
            HeatLevel::Low
        }
    }

    /// Darker for busier buckets; `None` is the neutral background
    pub fn color(&self) -> &'static str {
        match self {
            HeatLevel::None => "#ebedf0",
            HeatLevel::Low => "#9be9a8",
            HeatLevel::Medium => "#40c463",
            HeatLevel::High => "#30a14e",
            HeatLevel::Max => "#216e39",
        }
    }
}

pub fn heat_color(count: usize, max: usize) -> &'static str {
    HeatLevel::from_ratio(count, max).color()
}

pub fn author_color(ordinal: usize) -> &'static str {
    AUTHOR_PALETTE[ordinal % AUTHOR_PALETTE.len()]
}

/// Age bucket of a blamed line relative to the oldest and newest line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlameAge {
    Ancient,
    Old,
    Middle,
    Recent,
    Fresh,
}

impl BlameAge {
    const BUCKETS: [BlameAge; 5] = [
        BlameAge::Ancient,
        BlameAge::Old,
        BlameAge::Middle,
        BlameAge::Recent,
        BlameAge::Fresh,
    ];

    /// Timestamps are seconds since the epoch; when every line has the same
    /// timestamp they are all `Fresh`
    pub fn classify(timestamp: i64, oldest: i64, newest: i64) -> Self {
        if newest <= oldest {
            return BlameAge::Fresh;
        }

        let span = (newest - oldest) as f64;
        let normalized = ((timestamp - oldest) as f64 / span).clamp(0.0, 1.0);
        let bucket = ((normalized * Self::BUCKETS.len() as f64) as usize).min(Self::BUCKETS.len() - 1);

        Self::BUCKETS[bucket]
    }

    pub fn color(&self) -> &'static str {
        match self {
            BlameAge::Ancient => "#1f3a5f",
            BlameAge::Old => "#35608f",
            BlameAge::Middle => "#8c6bb1",
            BlameAge::Recent => "#e5834b",
            BlameAge::Fresh => "#f2c14e",
        }
    }
}
