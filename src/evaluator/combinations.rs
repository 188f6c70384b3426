use super::HAND_SIZE;

/// Number of 5-card subsets of `n` cards, C(n, 5).
pub const fn five_card_subsets(n: usize) -> usize {
    if n < HAND_SIZE {
        return 0;
    }
    n * (n - 1) * (n - 2) * (n - 3) * (n - 4) / 120
}

/// Iterator over every 5-element index subset of `0..n`, in lexicographic order.
///
/// Yields fixed-size index arrays, C(7, 5) = 21 of them for a showdown hand.
/// Nothing is yielded when `n < 5`.
pub struct FiveCardCombinations {
    n: usize,
    indices: [usize; HAND_SIZE],
    remaining: usize,
}

impl FiveCardCombinations {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], remaining: five_card_subsets(n) }
    }
}

impl Iterator for FiveCardCombinations {
    type Item = [usize; HAND_SIZE];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let result = self.indices;

        // Advance the rightmost index that still has room, then reset the
        // indices to its right.
        if let Some(i) = (0..HAND_SIZE).rev().find(|&i| self.indices[i] < self.n - (HAND_SIZE - i)) {
            self.indices[i] += 1;
            for j in (i + 1)..HAND_SIZE {
                self.indices[j] = self.indices[j - 1] + 1;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FiveCardCombinations {}
