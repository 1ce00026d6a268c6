//! Discrete heat diffusion.
//!
//! Each step replaces a cell with the weighted mean of its 3x3 block:
//!
//! `new = ((1 + cp) * old + sum(8 neighbours)) / (9 + cp)`
//!
//! The kernel weights sum to one and are symmetric, so on a torus the
//! total heat is conserved and a uniform grid is a fixed point. `cp`
//! slows diffusion by biasing each cell toward its own value; `cp = 0` is
//! the plain box blur.
//!
//! The classic script weights the centre by `cp` alone, i.e.
//! `(cp * old + sum(8 neighbours)) / (9 + cp)`. Those weights sum to
//! `(8 + cp) / (9 + cp) < 1`, so heat drains away and a uniform grid
//! decays. The extra unit of self-weight here restores a normalised
//! kernel; for one hot cell with `cp = 2` the centre keeps `3/11` instead
//! of `2/11` after a step.

use crate::error::RuleError;
use crate::rule::UpdateRule;
use tessel_core::ColorScheme;

/// Value of a hot cell (seed block and pointer clicks).
pub const HOT: f64 = 1.0;
/// Value of a cold cell.
pub const COLD: f64 = 0.0;

/// Heat diffusion with self-weight `cp`.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatDiffusion {
    cp: f64,
}

impl HeatDiffusion {
    /// Create a heat rule with self-weight `cp`.
    ///
    /// Returns `Err(RuleError::InvalidSelfWeight)` if `cp` is negative,
    /// NaN, or infinite.
    pub fn new(cp: f64) -> Result<Self, RuleError> {
        if !cp.is_finite() || cp < 0.0 {
            return Err(RuleError::InvalidSelfWeight { value: cp });
        }
        Ok(Self { cp })
    }

    /// The self-weight `cp`.
    pub fn cp(&self) -> f64 {
        self.cp
    }
}

impl Default for HeatDiffusion {
    fn default() -> Self {
        Self { cp: 0.0 }
    }
}

impl UpdateRule for HeatDiffusion {
    fn name(&self) -> &str {
        "heat_diffusion"
    }

    fn self_weight(&self) -> f64 {
        1.0 + self.cp
    }

    fn apply(&self, _old: f64, aggregate: f64) -> f64 {
        aggregate / (9.0 + self.cp)
    }

    fn active_value(&self) -> f64 {
        HOT
    }

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Spectral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::sweep;
    use proptest::prelude::*;
    use tessel_space::Grid;

    #[test]
    fn rejects_bad_self_weight() {
        assert_eq!(
            HeatDiffusion::new(-0.5),
            Err(RuleError::InvalidSelfWeight { value: -0.5 })
        );
        assert!(HeatDiffusion::new(f64::NAN).is_err());
        assert!(HeatDiffusion::new(f64::INFINITY).is_err());
        assert_eq!(HeatDiffusion::new(2.0).unwrap().cp(), 2.0);
    }

    #[test]
    fn point_source_spreads_evenly() {
        let mut g = Grid::new(5, 5, COLD).unwrap();
        g.set(2, 2, 9.0);
        let next = sweep(&g, &HeatDiffusion::default());
        for r in 1..=3 {
            for c in 1..=3 {
                assert!((next.get(r, c) - 1.0).abs() < 1e-12);
            }
        }
        assert_eq!(next.get(0, 0), 0.0);
    }

    #[test]
    fn self_weight_keeps_more_heat_at_home() {
        let mut g = Grid::new(5, 5, COLD).unwrap();
        g.set(2, 2, 1.0);
        let plain = sweep(&g, &HeatDiffusion::default());
        let sticky = sweep(&g, &HeatDiffusion::new(3.0).unwrap());
        assert!(sticky.get(2, 2) > plain.get(2, 2));
        assert!(sticky.get(2, 3) < plain.get(2, 3));
        // (1 + 3) / (9 + 3)
        assert!((sticky.get(2, 2) - 4.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn centre_weight_is_one_plus_cp() {
        let mut g = Grid::new(5, 5, COLD).unwrap();
        g.set(2, 2, HOT);
        let next = sweep(&g, &HeatDiffusion::new(2.0).unwrap());
        assert!((next.get(2, 2) - 3.0 / 11.0).abs() < 1e-12);
        assert!((next.get(2, 3) - 1.0 / 11.0).abs() < 1e-12);
        assert!((next.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn click_paints_hot() {
        let rule = HeatDiffusion::default();
        assert_eq!(rule.active_value(), HOT);
        assert_eq!(rule.color_scheme(), ColorScheme::Spectral);
        assert!(!rule.is_settled());
    }

    proptest! {
        #[test]
        fn uniform_grid_is_a_fixed_point(
            rows in 1usize..9,
            cols in 1usize..9,
            v in -10.0f64..10.0,
            cp in 0.0f64..5.0,
        ) {
            let g = Grid::new(rows, cols, v).unwrap();
            let next = sweep(&g, &HeatDiffusion::new(cp).unwrap());
            for &x in next.cells() {
                prop_assert!((x - v).abs() < 1e-9);
            }
        }

        #[test]
        fn total_heat_is_conserved(
            rows in 1usize..9,
            cols in 1usize..9,
            cp in 0.0f64..5.0,
            salt in 0u64..1000,
        ) {
            let cells: Vec<f64> = (0..rows * cols)
                .map(|i| (((i as u64) * 31 + salt) % 17) as f64 / 16.0)
                .collect();
            let g = Grid::from_vec(rows, cols, cells).unwrap();
            let next = sweep(&g, &HeatDiffusion::new(cp).unwrap());
            prop_assert!((next.sum() - g.sum()).abs() < 1e-9);
            let (lo, hi) = g.min_max();
            let (nlo, nhi) = next.min_max();
            prop_assert!(nlo >= lo - 1e-12 && nhi <= hi + 1e-12);
        }
    }
}
