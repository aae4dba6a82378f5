//! # Bonus Module
//!
//! Profit-rank bonus schedule.
//!
//! ## Tier Schedule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Evaluated TOP TO BOTTOM, first match wins                              │
//! │                                                                         │
//! │  1. Leader      rank == 0              15% of profit                    │
//! │  2. RunnerUp    rank == 1 or rank == 2 10% of profit                    │
//! │  3. LastPlace   rank == total - 1       0                               │
//! │  4. Standard    anything else           5% of profit                    │
//! │                                                                         │
//! │  total = 1: rank 0 is also last place → Leader wins (15%)               │
//! │  total = 2: rank 1 is also last place → RunnerUp wins (10%)             │
//! │  total = 3: rank 2 is also last place → RunnerUp wins (10%)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// A bonus tier, selected from a seller's 0-based profit rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusTier {
    /// Highest profit.
    Leader,
    /// Second and third place.
    RunnerUp,
    /// The single lowest-profit seller.
    LastPlace,
    /// Everyone in between.
    Standard,
}

impl BonusTier {
    /// Tiers in evaluation order. Order is observable: see module docs.
    pub const SCHEDULE: [BonusTier; 4] = [
        BonusTier::Leader,
        BonusTier::RunnerUp,
        BonusTier::LastPlace,
        BonusTier::Standard,
    ];

    /// Whether this tier's predicate holds for `rank` out of `total_sellers`.
    pub fn matches(self, rank: usize, total_sellers: usize) -> bool {
        match self {
            BonusTier::Leader => rank == 0,
            BonusTier::RunnerUp => rank == 1 || rank == 2,
            BonusTier::LastPlace => rank + 1 == total_sellers,
            BonusTier::Standard => true,
        }
    }

    /// Fraction of profit paid as bonus.
    pub const fn rate(self) -> f64 {
        match self {
            BonusTier::Leader => 0.15,
            BonusTier::RunnerUp => 0.10,
            BonusTier::LastPlace => 0.0,
            BonusTier::Standard => 0.05,
        }
    }

    /// First tier in [`BonusTier::SCHEDULE`] whose predicate matches.
    pub fn for_rank(rank: usize, total_sellers: usize) -> BonusTier {
        Self::SCHEDULE
            .into_iter()
            .find(|tier| tier.matches(rank, total_sellers))
            .unwrap_or(BonusTier::Standard)
    }
}

/// Bonus for the seller at `rank` (0-based, profit descending).
///
/// ## Example
/// ```rust
/// use salesboard_core::bonus::calculate_bonus_by_profit;
///
/// assert_eq!(calculate_bonus_by_profit(0, 5, 100.0), 15.0);
/// assert_eq!(calculate_bonus_by_profit(4, 5, 20.0), 0.0);
/// // A lone seller is the leader, not last place
/// assert_eq!(calculate_bonus_by_profit(0, 1, 100.0), 15.0);
/// ```
pub fn calculate_bonus_by_profit(rank: usize, total_sellers: usize, profit: f64) -> f64 {
    profit * BonusTier::for_rank(rank, total_sellers).rate()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_five_seller_schedule() {
        let profits = [100.0, 80.0, 60.0, 40.0, 20.0];
        let expected = [15.0, 8.0, 6.0, 2.0, 0.0];
        for (rank, (profit, bonus)) in profits.iter().zip(expected).enumerate() {
            let actual = calculate_bonus_by_profit(rank, profits.len(), *profit);
            assert!(
                approx_eq(actual, bonus),
                "rank {rank}: expected {bonus}, got {actual}"
            );
        }
    }

    #[test]
    fn test_single_seller_gets_leader_bonus() {
        assert_eq!(BonusTier::for_rank(0, 1), BonusTier::Leader);
        assert_eq!(calculate_bonus_by_profit(0, 1, 100.0), 15.0);
    }

    #[test]
    fn test_runner_up_beats_last_place() {
        assert_eq!(BonusTier::for_rank(1, 2), BonusTier::RunnerUp);
        assert_eq!(BonusTier::for_rank(2, 3), BonusTier::RunnerUp);
        assert_eq!(BonusTier::for_rank(3, 4), BonusTier::LastPlace);
    }

    #[test]
    fn test_tier_selection_large_field() {
        let total = 10;
        let tiers: Vec<BonusTier> = (0..total).map(|r| BonusTier::for_rank(r, total)).collect();
        assert_eq!(tiers[0], BonusTier::Leader);
        assert_eq!(tiers[1], BonusTier::RunnerUp);
        assert_eq!(tiers[2], BonusTier::RunnerUp);
        assert!(tiers[3..9].iter().all(|t| *t == BonusTier::Standard));
        assert_eq!(tiers[9], BonusTier::LastPlace);
    }

    #[test]
    fn test_negative_profit_bonus() {
        assert!(approx_eq(calculate_bonus_by_profit(3, 5, -40.0), -2.0));
        assert_eq!(calculate_bonus_by_profit(4, 5, -40.0), 0.0);
    }

    #[test]
    fn test_rates() {
        assert_eq!(BonusTier::Leader.rate(), 0.15);
        assert_eq!(BonusTier::RunnerUp.rate(), 0.10);
        assert_eq!(BonusTier::LastPlace.rate(), 0.0);
        assert_eq!(BonusTier::Standard.rate(), 0.05);
    }
}
