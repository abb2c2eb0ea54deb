//! [`MoveBatch`]: an unordered multiset of directions.

use std::fmt;
use tesser_core::Direction;

/// A move batch as a count per direction.
///
/// Order is not part of a batch: `[XPlus, YPlus]` and `[YPlus, XPlus]` are
/// the same batch. Repeated occurrences of a direction are
/// indistinguishable, which is exactly the assumption the resolver makes
/// when it tries each *distinct* direction first.
///
/// # Examples
///
/// ```
/// use tesser_core::Direction::*;
/// use tesser_space::MoveBatch;
///
/// let batch: MoveBatch = [XPlus, YPlus, XPlus].into_iter().collect();
/// assert_eq!(batch.len(), 3);
/// assert_eq!(batch.count(XPlus), 2);
/// assert_eq!(batch.distinct().collect::<Vec<_>>(), vec![XPlus, YPlus]);
///
/// let rest = batch.without(XPlus).unwrap();
/// assert_eq!(rest.count(XPlus), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveBatch {
    counts: [u32; 6],
}

impl MoveBatch {
    /// The empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the directions in `moves`.
    pub fn from_moves(moves: &[Direction]) -> Self {
        moves.iter().copied().collect()
    }

    /// Total number of moves.
    pub fn len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Returns `true` if there are no moves.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Occurrences of `dir`.
    pub fn count(&self, dir: Direction) -> u32 {
        self.counts[dir.code() as usize]
    }

    /// Directions present at least once, in code order.
    pub fn distinct(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |d| self.count(*d) > 0)
    }

    /// The sole move of a one-move batch.
    pub fn single(&self) -> Option<Direction> {
        if self.len() == 1 {
            self.distinct().next()
        } else {
            None
        }
    }

    /// The direction and its count, when every move goes the same way.
    pub fn uniform(&self) -> Option<(Direction, u32)> {
        let mut present = self.distinct();
        let dir = present.next()?;
        match present.next() {
            None => Some((dir, self.count(dir))),
            Some(_) => None,
        }
    }

    /// A copy with one more `dir`.
    pub fn with(mut self, dir: Direction) -> Self {
        self.counts[dir.code() as usize] += 1;
        self
    }

    /// A copy with one occurrence of `dir` removed, or `None` if `dir` is
    /// absent.
    pub fn without(mut self, dir: Direction) -> Option<Self> {
        let slot = &mut self.counts[dir.code() as usize];
        *slot = slot.checked_sub(1)?;
        Some(self)
    }

    /// Expand into a move list in code order.
    pub fn to_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .flat_map(|d| std::iter::repeat(d).take(self.count(d) as usize))
            .collect()
    }
}

impl FromIterator<Direction> for MoveBatch {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

impl From<&[Direction]> for MoveBatch {
    fn from(moves: &[Direction]) -> Self {
        Self::from_moves(moves)
    }
}

impl fmt::Display for MoveBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for d in self.distinct() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{d}*{}", self.count(d))?;
        }
        f.write_str("]")
    }
}
