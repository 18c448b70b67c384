//! Halo (ghost-layer) behaviour at the edge of the domain.

/// How the halo layer around the domain is populated.
///
/// Controls what a ±1 stencil sees when it reaches past the first or last
/// row or column. Only stencils centred on the outermost ring reach the
/// halo; a cell one step inside reads that ring, which is interior. The
/// fracture model overwrites every outer-ring cell with a neutral value,
/// so the halo never reaches its persisted fields. It does matter to code
/// that reads edge stencils directly.
///
/// # Examples
///
/// ```
/// use crevasse_grid::{Array2D, EdgeBehavior, Grid2D};
///
/// let grid = Grid2D::new(3, 1, 1.0, 1.0).unwrap();
/// let mut a = Array2D::from_interior(&grid, vec![1.0, 2.0, 3.0]).unwrap();
///
/// a.fill_halo(EdgeBehavior::Wrap);
/// assert_eq!(a.get(-1, 0), 3.0);
///
/// a.fill_halo(EdgeBehavior::Clamp);
/// assert_eq!(a.get(-1, 0), 1.0);
///
/// a.fill_halo(EdgeBehavior::Absorb);
/// assert_eq!(a.get(-1, 0), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour copies the nearest edge cell.
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    #[default]
    Wrap,
    /// Out-of-bounds neighbour reads the default value (zero for scalars).
    Absorb,
}

impl EdgeBehavior {
    /// Resolve a single axis position `val` on an axis of length `len`.
    ///
    /// Returns `Some(index)` inside `[0, len)`, or `None` when the halo
    /// cell has no interior source (Absorb).
    pub fn resolve_axis(self, val: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if val >= 0 && val < n {
            return Some(val as usize);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(val.clamp(0, n - 1) as usize),
            Self::Wrap => Some(val.rem_euclid(n) as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(2, 5), Some(2));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(0, 5), Some(0));
    }

    #[test]
    fn resolve_axis_absorb_out_of_bounds() {
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(-1, 5), None);
        assert_eq!(EdgeBehavior::Absorb.resolve_axis(5, 5), None);
    }

    #[test]
    fn resolve_axis_clamp() {
        assert_eq!(EdgeBehavior::Clamp.resolve_axis(-1, 5), Some(0));
        assert_eq!(EdgeBehavior::Clamp.resolve_axis(5, 5), Some(4));
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(-1, 5), Some(4));
        assert_eq!(EdgeBehavior::Wrap.resolve_axis(5, 5), Some(0));
    }

    #[test]
    fn default_is_periodic() {
        assert_eq!(EdgeBehavior::default(), EdgeBehavior::Wrap);
    }
}
