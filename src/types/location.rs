//! Inventory locations
//!
//! The system has exactly two locations. Which user-facing word names each one
//! depends on the active [`Lexicon`](crate::lexicon::Lexicon).

/// One of the two inventory locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Bulk inventory: large capacity, no variety limit
    Store,

    /// Limited inventory: small capacity, at most five distinct items
    Shop,
}

impl Location {
    /// The location on the other end of the only permitted route from `self`
    pub fn counterpart(self) -> Location {
        match self {
            Location::Store => Location::Shop,
            Location::Shop => Location::Store,
        }
    }
}
