use crate::cards::Rank;

/// High card of a straight, if the five ranks form one.
///
/// The ranks must be five distinct, consecutive values. The wheel A-2-3-4-5
/// counts the Ace low and tops out at Five.
pub fn straight_high(ranks: &[Rank; 5]) -> Option<Rank> {
    let mut desc = *ranks;
    desc.sort_unstable_by(|a, b| b.cmp(a));

    // Strict descent by one also rules out duplicates.
    if desc.windows(2).all(|w| w[0].value() == w[1].value() + 1) {
        return Some(desc[0]);
    }

    (desc == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two]).then_some(Rank::Five)
}
