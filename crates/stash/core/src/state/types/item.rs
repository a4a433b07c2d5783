//! Item identity inside the equipment aggregate.

/// Reference to an item definition stored outside the core (lookup via
/// [`crate::env::ItemOracle`]).
///
/// An item appears at most once per aggregate, so the handle doubles as the
/// identity of the placed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

impl core::fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}
