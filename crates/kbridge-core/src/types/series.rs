//! Market series types
//!
//! A `MarketSeries` is the ordered list of per-period observations for one
//! market. Two series are paired (Korea vs Japan) by position, so they must
//! share length and period indices before any correlation is computed.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category label, used only as a similarity lookup key
pub type CategoryLabel = String;

/// Market a series belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Market {
    Korea,
    Japan,
}

impl Market {
    /// Human readable market name
    pub fn display_name(&self) -> &'static str {
        match self {
            Market::Korea => "Korea",
            Market::Japan => "Japan",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Single observation of one market in one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Time index (e.g. month number)
    pub period: u32,

    /// Sales value (non-negative)
    pub sales: f64,

    /// Popularity rank (1 = most popular)
    pub rank: u32,
}

impl Observation {
    /// Create a new observation
    pub fn new(period: u32, sales: f64, rank: u32) -> Self {
        Self {
            period,
            sales,
            rank,
        }
    }

    /// Check the observation invariants
    pub fn validate(&self) -> Result<()> {
        if !self.sales.is_finite() || self.sales < 0.0 {
            return Err(CoreError::InvalidObservation(format!(
                "period {}: sales must be a non-negative finite number, got {}",
                self.period, self.sales
            )));
        }
        if self.rank == 0 {
            return Err(CoreError::InvalidObservation(format!(
                "period {}: rank must be a positive integer, got 0",
                self.period
            )));
        }
        Ok(())
    }
}

/// Ordered observations for one market
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Observation>", into = "Vec<Observation>")]
pub struct MarketSeries {
    observations: Vec<Observation>,
}

impl MarketSeries {
    /// Create a series, validating each observation and period ordering
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        for obs in &observations {
            obs.validate()?;
        }
        for pair in observations.windows(2) {
            if pair[1].period <= pair[0].period {
                return Err(CoreError::InvalidObservation(format!(
                    "periods must be strictly increasing, got {} after {}",
                    pair[1].period, pair[0].period
                )));
            }
        }
        Ok(Self { observations })
    }

    /// Build a series from parallel sales/rank columns, numbering periods from 1
    pub fn from_columns(sales: &[f64], ranks: &[u32]) -> Result<Self> {
        if sales.len() != ranks.len() {
            return Err(CoreError::InputLengthMismatch {
                stage: "market_series",
                left: sales.len(),
                right: ranks.len(),
            });
        }
        let observations = sales
            .iter()
            .zip(ranks)
            .enumerate()
            .map(|(i, (&sales, &rank))| Observation::new(i as u32 + 1, sales, rank))
            .collect();
        Self::new(observations)
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series has no observations
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Borrow the observations
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Sales column
    pub fn sales(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.sales).collect()
    }

    /// Rank column as reals, ready for rank correlation
    pub fn ranks(&self) -> Vec<f64> {
        self.observations.iter().map(|o| f64::from(o.rank)).collect()
    }

    /// Period column
    pub fn periods(&self) -> Vec<u32> {
        self.observations.iter().map(|o| o.period).collect()
    }

    /// Ensure `other` has the same length and period indices as `self`
    pub fn ensure_aligned(&self, other: &MarketSeries, stage: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(CoreError::InputLengthMismatch {
                stage,
                left: self.len(),
                right: other.len(),
            });
        }
        for (index, (a, b)) in self.observations.iter().zip(&other.observations).enumerate() {
            if a.period != b.period {
                return Err(CoreError::PeriodMismatch {
                    stage,
                    index,
                    left: a.period,
                    right: b.period,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Observation>> for MarketSeries {
    type Error = CoreError;

    fn try_from(observations: Vec<Observation>) -> Result<Self> {
        Self::new(observations)
    }
}

impl From<MarketSeries> for Vec<Observation> {
    fn from(series: MarketSeries) -> Self {
        series.observations
    }
}
