//! The pillar oracle boundary.
//!
//! An oracle turns a local date/time into the four pillars of that moment.
//! Its calendrical method (solar terms, zone handling) is its own business;
//! the cascade only relies on this trait.

use saju_time::LocalDateTime;
use serde::Serialize;

use crate::attributes::{GanjiAttributes, ganji_attributes};
use crate::error::OracleError;
use crate::pillar::{FourPillars, Pillar, PillarSlot};
use crate::stem::Stem;

/// Pillars computed for one seed moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OraclePillars {
    /// The moment actually computed, after any clamping by the oracle.
    pub local: LocalDateTime,
    pub pillars: FourPillars,
}

impl OraclePillars {
    pub const fn get(&self, slot: PillarSlot) -> Option<Pillar> {
        self.pillars.get(slot)
    }

    /// The day stem of this moment.
    pub fn day_stem(&self) -> Option<Stem> {
        self.pillars.day.map(|p| p.stem)
    }

    /// Attribute bundle for `slot`, relative to `day_master`.
    pub fn attributes(&self, slot: PillarSlot, day_master: Option<Stem>) -> Option<GanjiAttributes> {
        self.get(slot).map(|p| ganji_attributes(p, day_master))
    }
}

/// Computes pillars for a local moment.
///
/// `compute_batch` must return one result per seed, in order. The default
/// calls `compute_pillars` per seed; implementations backed by I/O should
/// override it to batch or cache.
pub trait PillarOracle {
    fn compute_pillars(&self, seed: &LocalDateTime) -> Result<OraclePillars, OracleError>;

    fn compute_batch(&self, seeds: &[LocalDateTime]) -> Vec<Result<OraclePillars, OracleError>> {
        seeds.iter().map(|s| self.compute_pillars(s)).collect()
    }
}

impl<O: PillarOracle + ?Sized> PillarOracle for &O {
    fn compute_pillars(&self, seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        (**self).compute_pillars(seed)
    }

    fn compute_batch(&self, seeds: &[LocalDateTime]) -> Vec<Result<OraclePillars, OracleError>> {
        (**self).compute_batch(seeds)
    }
}

impl<O: PillarOracle + ?Sized> PillarOracle for Box<O> {
    fn compute_pillars(&self, seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        (**self).compute_pillars(seed)
    }

    fn compute_batch(&self, seeds: &[LocalDateTime]) -> Vec<Result<OraclePillars, OracleError>> {
        (**self).compute_batch(seeds)
    }
}

/// Adapts a closure into an oracle.
pub struct FnOracle<F>(pub F);

impl<F> PillarOracle for FnOracle<F>
where
    F: Fn(&LocalDateTime) -> Result<OraclePillars, OracleError>,
{
    fn compute_pillars(&self, seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        (self.0)(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::pillar_from_cycle;

    fn year_only(seed: &LocalDateTime) -> Result<OraclePillars, OracleError> {
        if seed.year < 1 {
            return Err(OracleError::OutOfRange(seed.to_string()));
        }
        Ok(OraclePillars {
            local: *seed,
            pillars: FourPillars {
                year: Some(pillar_from_cycle(seed.year as i64 - 4)),
                ..FourPillars::default()
            },
        })
    }

    #[test]
    fn default_batch_keeps_order_and_errors() {
        let oracle = FnOracle(year_only);
        let seeds = [
            LocalDateTime::noon(2024, 1, 1),
            LocalDateTime::noon(0, 1, 1),
            LocalDateTime::noon(1984, 1, 1),
        ];
        let out = oracle.compute_batch(&seeds);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].as_ref().unwrap().get(PillarSlot::Year), Pillar::parse("甲辰"));
        assert!(out[1].is_err());
        assert_eq!(out[2].as_ref().unwrap().get(PillarSlot::Year), Pillar::parse("甲子"));
    }

    #[test]
    fn reference_and_box_forward() {
        let oracle = FnOracle(year_only);
        let by_ref: &dyn PillarOracle = &oracle;
        let boxed: Box<dyn PillarOracle> = Box::new(FnOracle(year_only));
        let seed = LocalDateTime::noon(2000, 6, 1);
        assert_eq!(
            by_ref.compute_pillars(&seed).unwrap(),
            boxed.compute_pillars(&seed).unwrap()
        );
    }
}
