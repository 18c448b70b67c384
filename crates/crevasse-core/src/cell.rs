//! Cell classification supplied by the geometry collaborator.

/// Classification of a grid cell.
///
/// Refines the `{icy, ice-free} × {grounded, floating}` product into the
/// four states the geometry collaborator actually produces. The numeric
/// codes match the conventional ice-sheet mask encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CellType {
    /// Exposed bedrock above sea level.
    IceFreeBedrock = 0,
    /// Ice resting on bedrock.
    GroundedIce = 2,
    /// Ice shelf afloat on the ocean.
    FloatingIce = 3,
    /// Open ocean.
    #[default]
    IceFreeOcean = 4,
}

impl CellType {
    /// Decode a mask code. Returns `None` for codes outside the table.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::IceFreeBedrock),
            2 => Some(Self::GroundedIce),
            3 => Some(Self::FloatingIce),
            4 => Some(Self::IceFreeOcean),
            _ => None,
        }
    }

    /// The mask code for this classification.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Cell contains ice (grounded or floating).
    pub fn icy(self) -> bool {
        matches!(self, Self::GroundedIce | Self::FloatingIce)
    }

    /// Cell contains no ice.
    pub fn ice_free(self) -> bool {
        !self.icy()
    }

    /// Cell sits on bedrock, with or without ice.
    pub fn grounded(self) -> bool {
        matches!(self, Self::IceFreeBedrock | Self::GroundedIce)
    }

    /// Cell is over the ocean, with or without ice.
    pub fn floating(self) -> bool {
        !self.grounded()
    }
}
