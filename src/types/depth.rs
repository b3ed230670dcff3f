//! Depth type for search.
//!
//! A type-safe wrapper for remaining search depth in plies.

use std::ops::{Add, Sub};

/// Maximum supported search depth
pub const MAX_DEPTH: i32 = 64;

/// Remaining search depth (in plies).
///
/// Each recursive ply strictly decreases it; the search treats any
/// non-positive depth as a leaf.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Depth(pub i32);

impl Depth {
    pub const ONE: Depth = Depth(1);
    pub const MAX: Depth = Depth(MAX_DEPTH);

    #[inline]
    pub const fn new(d: i32) -> Self {
        Depth(d)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Check whether the search should stop and evaluate statically
    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 <= 0
    }
}

impl Add<i32> for Depth {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i32) -> Self {
        Depth(self.0 + rhs)
    }
}

impl Sub<i32> for Depth {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i32) -> Self {
        Depth(self.0 - rhs)
    }
}

impl From<i32> for Depth {
    #[inline]
    fn from(d: i32) -> Self {
        Depth(d)
    }
}
