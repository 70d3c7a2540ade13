use std::fmt;

use itertools::Itertools;
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Edge length of the map grid
pub const MAP_SIZE: usize = 10;
/// Spread of the synthetic values around the junction temperature [°C]
pub const MAP_STD_DEV_C: f64 = 1.5;

/// Characters used for shading, from coldest to hottest.
const SHADES: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Decorative temperature map.
///
/// Values are random samples scattered around a single temperature. They are not
/// a result of any simulation and must not be used as one.
#[derive(Clone, Debug, PartialEq)]
pub struct ThermalMap {
    cells: DMatrix<f64>,
}

impl ThermalMap {
    /// Generate a `MAP_SIZE` x `MAP_SIZE` map around `mean_c`.
    pub fn synthesize<R: Rng + ?Sized>(mean_c: f64, rng: &mut R) -> anyhow::Result<Self> {
        Self::with_shape(MAP_SIZE, MAP_SIZE, mean_c, MAP_STD_DEV_C, rng)
    }

    pub fn with_shape<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mean_c: f64,
        std_dev_c: f64,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        if rows == 0 || cols == 0 {
            anyhow::bail!("Thermal map must not be empty, got {}x{}", rows, cols)
        }
        if !(std_dev_c >= 0.0 && std_dev_c.is_finite()) {
            anyhow::bail!(
                "Thermal map spread must be a finite non-negative number, got {}",
                std_dev_c
            )
        }
        let distribution = Normal::new(mean_c, std_dev_c)?;
        Ok(ThermalMap {
            cells: DMatrix::from_fn(rows, cols, |_, _| distribution.sample(rng)),
        })
    }

    pub fn cells(&self) -> &DMatrix<f64> {
        &self.cells
    }

    pub fn shape(&self) -> (usize, usize) {
        self.cells.shape()
    }

    pub fn min(&self) -> f64 {
        self.cells.min()
    }

    pub fn max(&self) -> f64 {
        self.cells.max()
    }

    pub fn mean(&self) -> f64 {
        self.cells.mean()
    }

    pub fn to_values(&self) -> ValuesDisplayer<'_> {
        ValuesDisplayer { map: self }
    }
}

/// Shade character of a single value, relative to the map's `min`..`max` range.
fn shade(value: f64, min: f64, max: f64) -> char {
    let span = max - min;
    let position = if span > 0.0 {
        (value - min) / span
    } else {
        0.5
    };
    let index = (position * (SHADES.len() - 1) as f64).round() as usize;
    SHADES[index.min(SHADES.len() - 1)]
}

/// Shaded character grid with a legend, two characters per cell.
impl fmt::Display for ThermalMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (min, max) = (self.min(), self.max());
        for row in self.cells.row_iter() {
            let line: String = row
                .iter()
                .flat_map(|value| {
                    let c = shade(*value, min, max);
                    [c, c]
                })
                .collect();
            writeln!(f, "|{}|", line)?;
        }
        write!(
            f,
            "min {:.2} °C  max {:.2} °C  ('{}' coldest .. '{}' hottest)",
            min,
            max,
            SHADES[0],
            SHADES[SHADES.len() - 1]
        )
    }
}

/// Table of the raw map values, two decimals each.
#[derive(Copy, Clone, Debug)]
pub struct ValuesDisplayer<'a> {
    map: &'a ThermalMap,
}

impl<'a> fmt::Display for ValuesDisplayer<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .map
            .cells
            .row_iter()
            .map(|row| row.iter().map(|value| format!("{:.2}", value)).join(" "));
        write!(f, "{}", rows.format("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};
    use test_case::test_case;
    use test_strategy::proptest;

    #[test]
    fn default_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let map = ThermalMap::synthesize(625025.0, &mut rng).unwrap();
        assert_eq!(map.shape(), (10, 10));
    }

    #[test]
    fn same_seed_same_map() {
        let a = ThermalMap::synthesize(80.0, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = ThermalMap::synthesize(80.0, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_map() {
        let a = ThermalMap::synthesize(80.0, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = ThermalMap::synthesize(80.0, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn samples_center_on_mean() {
        let mut rng = StdRng::seed_from_u64(7);
        let map = ThermalMap::with_shape(200, 200, 100.0, MAP_STD_DEV_C, &mut rng).unwrap();

        // Standard error of the mean is 1.5 / 200, this is a ~13 sigma tolerance
        assert_abs_diff_eq!(map.mean(), 100.0, epsilon = 0.1);

        let variance = map
            .cells()
            .iter()
            .map(|value| (value - map.mean()).powi(2))
            .sum::<f64>()
            / (map.cells().len() - 1) as f64;
        assert_abs_diff_eq!(variance.sqrt(), MAP_STD_DEV_C, epsilon = 0.05);
    }

    #[test]
    fn zero_spread_is_constant() {
        let mut rng = StdRng::seed_from_u64(3);
        let map = ThermalMap::with_shape(3, 4, 25.0, 0.0, &mut rng).unwrap();

        assert!(map.cells().iter().all(|value| *value == 25.0));
        assert_eq!(
            format!("{}", map).lines().next().unwrap(),
            format!("|{}|", "+".repeat(8))
        );
    }

    #[test_case(-1.0; "negative")]
    #[test_case(-1e-9; "slightly negative")]
    #[test_case(f64::NAN; "not a number")]
    #[test_case(f64::INFINITY; "infinite")]
    fn bad_spread_fails(std_dev: f64) {
        let mut rng = StdRng::seed_from_u64(3);
        let message = format!(
            "{}",
            ThermalMap::with_shape(3, 3, 25.0, std_dev, &mut rng).unwrap_err()
        );
        message
            .find("spread")
            .expect("Error message should say that the spread is wrong");
    }

    #[test]
    fn shade_range() {
        assert_eq!(shade(10.0, 10.0, 20.0), ' ');
        assert_eq!(shade(20.0, 10.0, 20.0), '@');
        assert_eq!(shade(15.0, 10.0, 20.0), '+');
        assert_eq!(shade(7.0, 7.0, 7.0), '+');
    }

    #[test]
    fn empty_shape_fails() {
        let mut rng = StdRng::seed_from_u64(3);
        let message = format!(
            "{}",
            ThermalMap::with_shape(0, 3, 25.0, 1.0, &mut rng).unwrap_err()
        );
        message
            .find("0x3")
            .expect("Error message should contain the requested shape");
    }

    #[test]
    fn render_extremes() {
        let map = ThermalMap {
            cells: DMatrix::from_row_slice(2, 2, &[10.0, 20.0, 15.0, 10.0]),
        };

        let rendered = format!("{}", map);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "|  @@|");
        assert_eq!(lines[1], "|++  |");
        assert!(lines[2].starts_with("min 10.00 °C  max 20.00 °C"));
    }

    #[test]
    fn render_values() {
        let map = ThermalMap {
            cells: DMatrix::from_row_slice(2, 2, &[1.0, 2.5, 3.126, 4.0]),
        };

        assert_eq!(
            format!("{}", map.to_values()),
            "1.00 2.50\n3.13 4.00"
        );
    }

    #[proptest]
    fn rendered_line_count(
        #[strategy(1usize..20)] rows: usize,
        #[strategy(1usize..20)] cols: usize,
        seed: u64,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = ThermalMap::with_shape(rows, cols, 50.0, MAP_STD_DEV_C, &mut rng).unwrap();

        let rendered = format!("{}", map);

        assert_eq!(rendered.lines().count(), rows + 1);
        assert!(rendered
            .lines()
            .take(rows)
            .all(|line| line.chars().count() == 2 * cols + 2));
    }
}
