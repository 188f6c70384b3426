use crate::cards::Rank;

/// Ranks grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&r| {
                let c = counts[r.value() as usize];
                (c > 0).then_some((r, c))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    fn with_count(&self, count: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == count).map(|(r, _)| *r)
    }

    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Unpaired ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.with_count(1).collect()
    }

    pub fn has_full_house(&self) -> bool {
        matches!(self.groups.as_slice(), [(_, 3), (_, 2)])
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Rank::*;

    #[test]
    fn quads_group_first() {
        let g = RankGroups::from_ranks(&[King, Ace, Ace, Ace, Ace]);
        assert_eq!(g.quad(), Some(Ace));
        assert_eq!(g.kickers(), vec![King]);
        assert_eq!(g.groups(), &[(Ace, 4), (King, 1)]);
    }

    #[test]
    fn count_beats_rank_in_group_order() {
        // Low trips sort ahead of higher singletons.
        let g = RankGroups::from_ranks(&[Two, Ace, Two, King, Two]);
        assert_eq!(g.groups(), &[(Two, 3), (Ace, 1), (King, 1)]);
        assert_eq!(g.trips(), Some(Two));
        assert!(!g.has_full_house());
    }

    #[test]
    fn full_house_needs_trips_and_pair() {
        let g = RankGroups::from_ranks(&[Ace, Ace, Ace, King, King]);
        assert!(g.has_full_house());
        assert_eq!(g.pairs(), vec![King]);
    }

    #[test]
    fn two_pair_orders_pairs_descending() {
        let g = RankGroups::from_ranks(&[Ten, King, Ace, King, Ace]);
        assert_eq!(g.pairs(), vec![Ace, King]);
        assert_eq!(g.kickers(), vec![Ten]);
    }

    #[test]
    fn kickers_sorted_descending() {
        let g = RankGroups::from_ranks(&[Five, Eight, Queen, Eight, Ace]);
        assert_eq!(g.pairs(), vec![Eight]);
        assert_eq!(g.kickers(), vec![Ace, Queen, Five]);
    }
}
