//! Id-indexed arena of strips still awaiting a merge

use crate::model::strip::Strip;
use std::fmt;

/// Stable handle to a piece in a [`WorkingSet`]
///
/// Ids are handed out in increasing order and never reused, so ascending id
/// order is the canonical iteration order of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StripId(usize);

impl StripId {
    /// Wrap a raw arena index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for StripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A strip together with the source strips it was built from, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    /// Pixel data
    pub strip: Strip,
    /// Load-order indices of the source strips, in left-to-right order
    pub sources: Vec<usize>,
}

impl Piece {
    /// A piece consisting of the single source strip loaded at `index`
    pub fn source(index: usize, strip: Strip) -> Self {
        Self {
            strip,
            sources: vec![index],
        }
    }
}

/// Mutable collection of live pieces
///
/// Removal leaves an empty slot behind, so iteration over the remaining
/// pieces is never disturbed by removals or insertions made between rounds.
#[derive(Debug, Clone, Default)]
pub struct WorkingSet {
    slots: Vec<Option<Piece>>,
    live: usize,
}

impl WorkingSet {
    /// Create an empty working set
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            live: 0,
        }
    }

    /// Seed the set with source strips; strip `i` receives id `i`
    pub fn from_strips(strips: Vec<Strip>) -> Self {
        let mut set = Self::new();
        for (index, strip) in strips.into_iter().enumerate() {
            set.insert(Piece::source(index, strip));
        }
        set
    }

    /// Add a piece under a fresh id that sorts after every existing id
    pub fn insert(&mut self, piece: Piece) -> StripId {
        let id = StripId(self.slots.len());
        self.slots.push(Some(piece));
        self.live += 1;
        id
    }

    /// Take the piece with the given id out of the set
    pub fn remove(&mut self, id: StripId) -> Option<Piece> {
        let piece = self.slots.get_mut(id.0).and_then(Option::take);
        if piece.is_some() {
            self.live -= 1;
        }
        piece
    }

    /// Borrow a live piece
    pub fn get(&self, id: StripId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    /// Id of the first live piece in canonical order
    pub fn first(&self) -> Option<StripId> {
        self.iter().next().map(|(id, _)| id)
    }

    /// Live pieces in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (StripId, &Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|piece| (StripId(index), piece)))
    }

    /// Number of live pieces
    pub const fn len(&self) -> usize {
        self.live
    }

    /// Whether no live pieces remain
    pub const fn is_empty(&self) -> bool {
        self.live == 0
    }
}
