/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StashConfig {
    /// Whether a move may drop a blocker that does not fit back into the
    /// vacated source. When `false` such moves are rejected instead.
    pub allow_lost_blockers: bool,
}

impl StashConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of equipment slots per actor (one per `SlotName`).
    pub const MAX_SLOTS: usize = 9;
    /// Maximum number of grid containers per actor (one per `ContainerName`).
    pub const MAX_CONTAINERS: usize = 3;
    /// Maximum number of chained sub-grids inside one container.
    pub const MAX_SUB_GRIDS: usize = 4;
    /// Largest footprint side accepted from the catalog.
    pub const MAX_FOOTPRINT_SIDE: u8 = 4;
    pub const MAX_FOOTPRINT_CELLS: usize =
        (Self::MAX_FOOTPRINT_SIDE as usize) * (Self::MAX_FOOTPRINT_SIDE as usize);
    /// Largest container side accepted by layout validation.
    pub const MAX_CONTAINER_SIDE: u8 = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ALLOW_LOST_BLOCKERS: bool = true;

    pub fn new() -> Self {
        Self {
            allow_lost_blockers: Self::DEFAULT_ALLOW_LOST_BLOCKERS,
        }
    }

    pub fn with_allow_lost_blockers(allow_lost_blockers: bool) -> Self {
        Self {
            allow_lost_blockers,
        }
    }
}

impl Default for StashConfig {
    fn default() -> Self {
        Self::new()
    }
}
