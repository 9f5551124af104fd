//! Grid simulation module - advances the grid by elapsed time
//!
//! Every tick moves all points toward the camera by `z_speed * dt`, then recycles
//! rows that scrolled past `max_depth` from the far end of the ring to the near end
//! with a fresh height profile. Consumers pull the grid after `update` returns and
//! can compare [`GridSimulation::version`] to detect change.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::grid::Grid;
use crate::terrain::sample_height;
use crate::types::{ConfigError, GridConfig, GridPoint};

/// Result of a single [`GridSimulation::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateReport {
    /// False when the tick was ignored (non-positive or non-finite delta).
    pub advanced: bool,
    /// Rows moved from the far end to the near end during this tick.
    pub recycled: usize,
    /// Version after the tick.
    pub version: u64,
}

/// Owns the point grid and its fixed configuration.
///
/// `update` takes `&mut self` and every reader takes `&self`, so a renderer can
/// never observe a half-updated grid. Hosts that share the simulation across
/// threads must keep that exclusivity (e.g. a mutex held for the whole tick).
#[derive(Debug, Clone)]
pub struct GridSimulation<R = StdRng> {
    config: GridConfig,
    grid: Grid,
    rng: R,
    version: u64,
}

impl GridSimulation<StdRng> {
    /// Deterministic simulation for a given seed.
    pub fn from_seed(config: GridConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GridConfig) -> Result<Self, ConfigError> {
        Self::new(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GridSimulation<R> {
    /// Validate `config` and build the initial depth ramp.
    ///
    /// Row `r` starts at `z = -r * depth_spacing`; every point gets a sampled height.
    pub fn new(config: GridConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        // The defaults sit exactly on the focal plane: a frame whose far row lands on
        // z = -focal_length skips its grid pass, which is expected.
        if config.max_depth < -config.focal_length {
            warn!(
                max_depth = config.max_depth,
                focal_length = config.focal_length,
                "max depth lies behind the focal plane; far rows will project inverted"
            );
        } else if config.max_depth == -config.focal_length {
            debug!(
                max_depth = config.max_depth,
                focal_length = config.focal_length,
                "max depth equals the focal plane; frames with a row at it skip the grid"
            );
        }

        let mut grid = Grid::with_capacity(config.rows, config.columns);
        for row_index in 0..config.rows {
            let z = -(row_index as f64) * config.depth_spacing;
            let row: Vec<GridPoint> = (0..config.columns)
                .map(|column| {
                    GridPoint::new(
                        column as f64 * config.spacing,
                        sample_height(&mut rng, column, config.columns),
                        z,
                    )
                })
                .collect();
            grid.push_far(row.into_boxed_slice());
        }

        info!(
            columns = config.columns,
            rows = config.rows,
            z_speed = config.z_speed,
            max_depth = config.max_depth,
            "grid simulation ready"
        );

        Ok(Self {
            config,
            grid,
            rng,
            version: 0,
        })
    }

    /// Advance the grid by `delta_time` seconds.
    ///
    /// Non-positive or non-finite deltas leave the grid untouched. Large deltas may
    /// recycle several rows in one call; each row is recycled at most once per tick.
    pub fn update(&mut self, delta_time: f64) -> UpdateReport {
        if !(delta_time > 0.0 && delta_time.is_finite()) {
            return UpdateReport {
                advanced: false,
                recycled: 0,
                version: self.version,
            };
        }

        self.grid.shift_depth(-self.config.z_speed * delta_time);
        let recycled = self.recycle_rows();

        self.version = self.version.wrapping_add(1);
        UpdateReport {
            advanced: true,
            recycled,
            version: self.version,
        }
    }

    fn recycle_rows(&mut self) -> usize {
        let columns = self.config.columns;
        let max_depth = self.config.max_depth;
        let row_count = self.grid.row_count();
        let rng = &mut self.rng;

        let mut recycled = 0;
        while recycled < row_count && self.grid.far_row_beyond(max_depth) {
            self.grid.recycle_far(|column, point| {
                point.z = 0.0;
                point.y = sample_height(rng, column, columns);
            });
            recycled += 1;
        }

        if recycled > 0 {
            trace!(recycled, "recycled rows");
        }
        recycled
    }
}

impl<R> GridSimulation<R> {
    /// Read-only view of the current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Monotonic counter bumped by every advancing `update`.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Lateral offset that centers the grid before projection.
    pub fn offset(&self) -> f64 {
        self.config.offset()
    }

    pub fn focal_length(&self) -> f64 {
        self.config.focal_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> GridConfig {
        GridConfig {
            columns: 4,
            rows: 3,
            spacing: 10.0,
            depth_spacing: 10.0,
            focal_length: 300.0,
            z_speed: 10.0,
            max_depth: -25.0,
        }
    }

    #[test]
    fn new_builds_depth_ramp() {
        let sim = GridSimulation::from_seed(small(), 1).unwrap();
        let grid = sim.grid();

        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.columns(), 4);
        for (r, row) in grid.rows().enumerate() {
            for (c, p) in row.iter().enumerate() {
                assert_eq!(p.x, c as f64 * 10.0);
                assert_eq!(p.z, -(r as f64) * 10.0);
            }
        }
        assert_eq!(sim.version(), 0);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GridConfig {
            columns: 0,
            ..small()
        };
        assert_eq!(
            GridSimulation::from_seed(config, 1).unwrap_err(),
            ConfigError::InvalidColumns(0)
        );
    }

    #[test]
    fn update_bumps_version_only_when_advancing() {
        let mut sim = GridSimulation::from_seed(small(), 1).unwrap();

        let r = sim.update(0.0);
        assert!(!r.advanced);
        assert_eq!(r.version, 0);

        let r = sim.update(0.1);
        assert!(r.advanced);
        assert_eq!(r.version, 1);
        assert_eq!(sim.version(), 1);
    }

    #[test]
    fn update_ignores_non_finite_delta() {
        let mut sim = GridSimulation::from_seed(small(), 1).unwrap();
        let before = sim.grid().clone();

        assert!(!sim.update(f64::NAN).advanced);
        assert!(!sim.update(f64::INFINITY).advanced);
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn single_row_crossing_recycles_once() {
        // Rows at 0, -10, -20; after 1s at speed 10 -> -10, -20, -30.
        let mut sim = GridSimulation::from_seed(small(), 1).unwrap();
        let report = sim.update(1.0);

        assert_eq!(report.recycled, 1);
        let depths: Vec<f64> = (0..3).map(|i| sim.grid().row_depth(i).unwrap()).collect();
        assert_eq!(depths, vec![0.0, -10.0, -20.0]);
    }

    #[test]
    fn huge_delta_recycles_each_row_once() {
        let mut sim = GridSimulation::from_seed(small(), 1).unwrap();
        let report = sim.update(1.0e6);

        assert_eq!(report.recycled, 3);
        assert!(sim.grid().points().all(|p| p.z == 0.0));
    }

    #[test]
    fn negative_speed_never_recycles() {
        let config = GridConfig {
            z_speed: -50.0,
            ..small()
        };
        let mut sim = GridSimulation::from_seed(config, 1).unwrap();
        for _ in 0..10 {
            assert_eq!(sim.update(1.0).recycled, 0);
        }
        assert_eq!(sim.grid().row_depth(0), Some(500.0));
    }
}
