use super::rank_groups::RankGroups;
use super::straight_info::straight_high;
use super::{Category, EvaluatedHand, Tiebreakers, HAND_SIZE};
use crate::cards::{Card, Rank, Suit};

/// Pre-computed facts about a 5-card hand, built once and shared by all
/// category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; HAND_SIZE],
    /// Rank values, descending.
    pub values: [u8; HAND_SIZE],
    pub rank_groups: RankGroups,
    pub flush_suit: Option<Suit>,
    pub straight_high: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; HAND_SIZE]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks = sorted_cards.map(Card::rank);
        let values = ranks.map(Rank::value);

        let first_suit = sorted_cards[0].suit();
        let flush_suit = sorted_cards.iter().all(|c| c.suit() == first_suit).then_some(first_suit);

        Self {
            sorted_cards,
            values,
            rank_groups: RankGroups::from_ranks(&ranks),
            flush_suit,
            straight_high: straight_high(&ranks),
        }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }

    pub fn build(&self, category: Category, tiebreakers: Tiebreakers) -> EvaluatedHand {
        EvaluatedHand { category, tiebreakers, cards: self.sorted_cards }
    }

    /// The fallback when nothing stronger matches: all five values, descending.
    pub fn high_card(&self) -> EvaluatedHand {
        self.build(Category::HighCard, Tiebreakers::from_slice(&self.values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let cards = parse_cards(s).unwrap();
        HandAnalysis::new(&[cards[0], cards[1], cards[2], cards[3], cards[4]])
    }

    #[test]
    fn royal_flush_analysis() {
        let a = analyze("Ts Js Qs Ks As");
        assert_eq!(a.flush_suit, Some(Suit::Spades));
        assert_eq!(a.straight_high, Some(Rank::Ace));
        assert_eq!(a.values, [14, 13, 12, 11, 10]);
        assert_eq!(a.rank_groups.quad(), None);
    }

    #[test]
    fn wheel_analysis_sorts_ace_first_but_tops_at_five() {
        let a = analyze("5s 4c 3d 2h As");
        assert_eq!(a.values, [14, 5, 4, 3, 2]);
        assert_eq!(a.straight_high, Some(Rank::Five));
        assert!(!a.is_flush());
    }

    #[test]
    fn full_house_analysis() {
        let a = analyze("Ks Qc Kh Qs Kd");
        assert!(a.rank_groups.has_full_house());
        assert_eq!(a.rank_groups.trips(), Some(Rank::King));
        assert_eq!(a.rank_groups.pairs(), vec![Rank::Queen]);
        assert_eq!(a.straight_high, None);
    }

    #[test]
    fn cards_sorted_descending_with_suit_tiebreak() {
        let a = analyze("3s Ah 5d Kc 3h");
        let ranks: Vec<Rank> = a.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Five, Rank::Three, Rank::Three]);
        assert_eq!(a.sorted_cards[3].suit(), Suit::Spades);
    }

    #[test]
    fn high_card_fallback_uses_all_values() {
        let a = analyze("Ah Kd 7s 5c 2d");
        let h = a.high_card();
        assert_eq!(h.category, Category::HighCard);
        assert_eq!(h.tiebreakers.as_slice(), &[14, 13, 7, 5, 2]);
    }
}
