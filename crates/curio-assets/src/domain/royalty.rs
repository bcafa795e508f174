//! Royalty policy domain
//!
//! A policy holds an ordered set of strategies. The proportional strategy
//! takes a basis-point cut of the trade value, rounded **down**: across any
//! number of trades the total collected never exceeds the configured rate.
//! The constant strategy adds a fixed fee per trade. The combined amount a
//! policy owes is always clamped to the payment value, so the conservation
//! invariant (royalty + remainder == value) holds for every input.

use curio_core::{CurioError, CurioResult};
use serde::{Deserialize, Serialize};

/// A rate expressed in basis points, validated to 0..=10000
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// One hundred percent
    pub const MAX: BasisPoints = BasisPoints(10_000);

    /// Create a validated rate
    pub fn new(bps: u16) -> CurioResult<Self> {
        if bps > Self::MAX.0 {
            return Err(CurioError::invalid(format!(
                "royalty rate {bps} bps exceeds 10000"
            )));
        }
        Ok(Self(bps))
    }

    /// The raw basis-point value
    pub fn value(&self) -> u16 {
        self.0
    }
}

/// One royalty collection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoyaltyStrategy {
    /// A proportional cut of the trade value
    Proportional {
        /// The cut, in basis points
        rate: BasisPoints,
    },
    /// A fixed fee per trade
    Constant {
        /// The fee, in the payment's currency units
        fee: u64,
    },
}

impl RoyaltyStrategy {
    /// Royalty owed by this strategy on a trade of `value`
    ///
    /// Proportional cuts round down (`floor`); constant fees clamp to the
    /// trade value so a strategy can never owe more than the payment holds.
    pub fn royalty_owed(&self, value: u64) -> u64 {
        match self {
            RoyaltyStrategy::Proportional { rate } => {
                let owed = u128::from(value) * u128::from(rate.value())
                    / u128::from(BasisPoints::MAX.value());
                // value * rate / 10000 <= value, so the cast back is exact
                owed as u64
            }
            RoyaltyStrategy::Constant { fee } => (*fee).min(value),
        }
    }
}

/// The royalty policy attached once to a collection
///
/// Applied identically to every trade of assets in that collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyPolicy {
    strategies: Vec<RoyaltyStrategy>,
}

impl RoyaltyPolicy {
    /// Create a policy from an ordered strategy list
    pub fn new(strategies: Vec<RoyaltyStrategy>) -> Self {
        Self { strategies }
    }

    /// Create a single proportional policy, validating the rate
    pub fn proportional(rate_bps: u16) -> CurioResult<Self> {
        let rate = BasisPoints::new(rate_bps)?;
        Ok(Self::new(vec![RoyaltyStrategy::Proportional { rate }]))
    }

    /// Create a single constant-fee policy
    pub fn constant(fee: u64) -> Self {
        Self::new(vec![RoyaltyStrategy::Constant { fee }])
    }

    /// The configured strategies, in application order
    pub fn strategies(&self) -> &[RoyaltyStrategy] {
        &self.strategies
    }

    /// Total royalty owed on a trade of `value`, clamped to `value`
    pub fn royalty_owed(&self, value: u64) -> u64 {
        self.strategies
            .iter()
            .fold(0u64, |owed, strategy| {
                owed.saturating_add(strategy.royalty_owed(value))
            })
            .min(value)
    }
}
