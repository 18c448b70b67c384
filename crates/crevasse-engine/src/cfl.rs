//! Advective CFL checks.

use crevasse_core::Velocity;
use crevasse_grid::{Array2D, Grid2D, Scalar};

/// Share of the grid (percent) above which violations are always flagged.
pub const CFL_REPORT_PERCENT: f64 = 0.1;

/// Number of CFL violations a step of `dt` seconds would make.
///
/// Every cell with ice (`thickness > 0`) contributes one violation per axis
/// where `|u| > dx / dt` or `|v| > dy / dt`. A zero `dt` has none.
pub fn count_cfl_violations(
    grid: &Grid2D,
    velocity: &Array2D<Velocity>,
    thickness: &Scalar,
    dt: f64,
) -> usize {
    if dt == 0.0 {
        return 0;
    }
    let cfl_x = grid.dx() / dt;
    let cfl_y = grid.dy() / dt;
    grid.points()
        .filter(|&(i, j)| thickness.at(i, j) > 0.0)
        .map(|(i, j)| {
            let Velocity { u, v } = velocity.at(i, j);
            usize::from(u.abs() > cfl_x) + usize::from(v.abs() > cfl_y)
        })
        .sum()
}

/// Flag prefix announcing `violations`, or `None` if there are none.
///
/// Small counts (at most [`CFL_REPORT_PERCENT`] of the cells) are only
/// flagged when `verbose` is set.
pub fn cfl_flag(violations: usize, cell_count: usize, verbose: bool) -> Option<String> {
    if violations == 0 || cell_count == 0 {
        return None;
    }
    let percent = 100.0 * violations as f64 / cell_count as f64;
    if percent > CFL_REPORT_PERCENT || verbose {
        Some(format!("  [!CFL#={violations} (={percent:5.2}% of grid)] "))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid() -> Grid2D {
        Grid2D::new(4, 3, 100.0, 50.0).unwrap()
    }

    #[test]
    fn zero_dt_never_violates() {
        let g = grid();
        let vel = Array2D::filled(&g, Velocity::new(1.0e9, 1.0e9));
        let h = Scalar::filled(&g, 10.0);
        assert_eq!(count_cfl_violations(&g, &vel, &h, 0.0), 0);
    }

    #[test]
    fn counts_each_axis_on_icy_cells() {
        let g = grid();
        // dt = 10: limits are 10 m/s in x and 5 m/s in y.
        let mut vel = Array2D::filled(&g, Velocity::new(9.0, 4.0));
        vel.set(0, 0, Velocity::new(11.0, 0.0));
        vel.set(1, 0, Velocity::new(-11.0, -6.0));
        vel.set(2, 0, Velocity::new(0.0, 5.0));
        vel.set(3, 0, Velocity::new(20.0, 20.0));
        let mut h = Scalar::filled(&g, 100.0);
        h.set(3, 0, 0.0);
        assert_eq!(count_cfl_violations(&g, &vel, &h, 10.0), 3);
    }

    #[test]
    fn flag_respects_threshold() {
        assert_eq!(cfl_flag(0, 100, true), None);
        assert_eq!(cfl_flag(1, 10_000, false), None);
        assert_eq!(
            cfl_flag(1, 10_000, true).as_deref(),
            Some("  [!CFL#=1 (= 0.01% of grid)] ")
        );
        assert_eq!(
            cfl_flag(5, 100, false).as_deref(),
            Some("  [!CFL#=5 (= 5.00% of grid)] ")
        );
    }

    proptest! {
        #[test]
        fn shorter_steps_never_add_violations(
            speeds in proptest::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 12),
            dt in 0.1f64..100.0,
        ) {
            let g = grid();
            let vel = Array2D::from_fn(&g, |i, j| {
                let (u, v) = speeds[g.index(i, j)];
                Velocity::new(u, v)
            });
            let h = Scalar::filled(&g, 1.0);
            let long = count_cfl_violations(&g, &vel, &h, dt);
            let short = count_cfl_violations(&g, &vel, &h, 0.5 * dt);
            prop_assert!(short <= long);
            prop_assert!(long <= 2 * g.cell_count());
        }
    }
}
