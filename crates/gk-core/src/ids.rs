use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a node inside one graph.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
///
/// Ids are assigned densely in insertion order, so `index()` doubles as the
/// position of the node in every per-node buffer an algorithm allocates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// `u32::MAX` saturates onto the id of index `u32::MAX - 1`; no graph
    /// gets that large.
    pub fn from_index(index: u32) -> Self {
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Create an Id from a buffer position.
    ///
    /// Positions past `u32::MAX` saturate like [`Id::from_index`].
    pub fn from_usize(index: usize) -> Self {
        Self::from_index(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// Recover the 0-based index as a buffer position.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific ID alias for clarity (no runtime cost).
pub type NodeId = Id;

/// User-facing node label, as read from instance files.
///
/// Labels are normally unique but nothing enforces it; placeholder nodes use
/// negative labels.
pub type Label = i32;

/// Returned by label lookups that miss.
pub const MISSING_LABEL: Label = Label::MAX;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
            assert_eq!(Id::from_usize(i as usize), id);
        }
    }

    #[test]
    fn oversized_positions_saturate() {
        let top = Id::from_index(u32::MAX);
        assert_eq!(top.index(), u32::MAX - 1);
        assert_eq!(Id::from_usize(u32::MAX as usize), top);
        assert_eq!(Id::from_usize(usize::MAX), top);
    }

    #[test]
    fn option_id_is_small() {
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }

    #[test]
    fn ids_order_by_index() {
        assert!(Id::from_index(3) < Id::from_index(7));
        assert_eq!(format!("{}", Id::from_index(5)), "5");
        assert_eq!(format!("{:?}", Id::from_index(5)), "Id(5)");
    }
}
