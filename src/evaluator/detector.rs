use super::hand_analysis::HandAnalysis;
use super::{Category, Tiebreakers};
use crate::cards::Rank;

/// One hand category: recognises it and builds its tiebreaker signature.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    /// `None` when the hand does not belong to this category.
    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers>;
}

fn values(ranks: &[Rank]) -> Tiebreakers {
    let mut out = [0u8; 5];
    for (slot, r) in out.iter_mut().zip(ranks) {
        *slot = r.value();
    }
    Tiebreakers::from_slice(&out[..ranks.len().min(5)])
}

// ============================================================================
// Detectors, strongest first
// ============================================================================

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        let high = analysis.straight_high.filter(|_| analysis.is_flush())?;
        Some(values(&[high]))
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = analysis.rank_groups.kickers().first().copied()?;
        Some(values(&[quad, kicker]))
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        if !analysis.rank_groups.has_full_house() {
            return None;
        }
        let trips = analysis.rank_groups.trips()?;
        let pair = analysis.rank_groups.pairs().first().copied()?;
        Some(values(&[trips, pair]))
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        analysis.is_flush().then(|| Tiebreakers::from_slice(&analysis.values))
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        analysis.straight_high.map(|high| values(&[high]))
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        let trips = analysis.rank_groups.trips()?;
        match analysis.rank_groups.kickers().as_slice() {
            &[k1, k2] => Some(values(&[trips, k1, k2])),
            _ => None,
        }
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        match (analysis.rank_groups.pairs().as_slice(), analysis.rank_groups.kickers().as_slice()) {
            (&[high, low], &[kicker]) => Some(values(&[high, low, kicker])),
            _ => None,
        }
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        match (analysis.rank_groups.pairs().as_slice(), analysis.rank_groups.kickers().as_slice()) {
            (&[pair], &[k1, k2, k3]) => Some(values(&[pair, k1, k2, k3])),
            _ => None,
        }
    }
}

pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<Tiebreakers> {
        Some(Tiebreakers::from_slice(&analysis.values))
    }
}

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
