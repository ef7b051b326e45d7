//! Land-cover catalog: per-type burn parameters
//!
//! Pure lookup table indexed by [`LandType`]. Burnable types carry a burn
//! duration and ignition-probability bounds; inert types (lake) have no
//! entry and never ignite.

use serde::{Deserialize, Serialize};

use super::cell::LandType;

/// Burn parameters for one burnable land type
///
/// One generation is modeled as one hour, so `duration_base` is the
/// expected burn time in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnBehavior {
    /// Expected burn time in generations before forced burnout
    pub duration_base: u32,
    /// Ignition probability at zero neighbour ignition pressure
    pub prob_min: f32,
    /// Ignition probability at maximal neighbour ignition pressure
    pub prob_max: f32,
}

impl BurnBehavior {
    /// Canyon scrubland: ignites easily, burns out within hours
    pub fn scrubland() -> Self {
        BurnBehavior {
            duration_base: 6,
            prob_min: 0.05,
            prob_max: 0.9,
        }
    }

    /// Chaparral: moderate ignition, smoulders for a couple of days
    pub fn chaparral() -> Self {
        BurnBehavior {
            duration_base: 48,
            prob_min: 0.05,
            prob_max: 0.6,
        }
    }

    /// Dense forest: hard to ignite, burns about a week once alight
    pub fn dense_forest() -> Self {
        BurnBehavior {
            duration_base: 168,
            prob_min: 0.01,
            prob_max: 0.3,
        }
    }

    /// Town: built terrain, treated as scrubland-equivalent fuel
    ///
    /// The source data seeds towns as ignitable but defines no parameters
    /// for them; this catalog resolves the gap by reusing the scrubland
    /// constants rather than inferring silently.
    pub fn town() -> Self {
        Self::scrubland()
    }
}

/// Fixed lookup table of burn parameters per land type
///
/// `None` marks an inert type that never ignites regardless of neighbour
/// pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandCoverCatalog {
    behaviors: [Option<BurnBehavior>; LandType::ALL.len()],
}

impl LandCoverCatalog {
    /// The default parameterization: all land types at their stock values
    #[must_use]
    pub fn standard() -> Self {
        let mut behaviors = [None; LandType::ALL.len()];
        behaviors[LandType::Scrubland.index() as usize] = Some(BurnBehavior::scrubland());
        behaviors[LandType::Chaparral.index() as usize] = Some(BurnBehavior::chaparral());
        behaviors[LandType::DenseForest.index() as usize] = Some(BurnBehavior::dense_forest());
        behaviors[LandType::Town.index() as usize] = Some(BurnBehavior::town());
        LandCoverCatalog { behaviors }
    }

    /// Replace one land type's entry; `None` marks the type inert
    ///
    /// Builder-style, used by tests and custom scenarios.
    #[must_use]
    pub fn with_behavior(mut self, land: LandType, behavior: Option<BurnBehavior>) -> Self {
        self.behaviors[land.index() as usize] = behavior;
        self
    }

    /// Burn parameters for a land type, `None` for inert types
    #[must_use]
    pub fn behavior(&self, land: LandType) -> Option<&BurnBehavior> {
        self.behaviors[land.index() as usize].as_ref()
    }

    /// True when the land type can ignite at all
    #[must_use]
    pub fn is_burnable(&self, land: LandType) -> bool {
        self.behaviors[land.index() as usize].is_some()
    }
}

impl Default for LandCoverCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_burnable_flags() {
        let catalog = LandCoverCatalog::standard();
        assert!(catalog.is_burnable(LandType::Scrubland));
        assert!(catalog.is_burnable(LandType::Chaparral));
        assert!(catalog.is_burnable(LandType::DenseForest));
        assert!(catalog.is_burnable(LandType::Town));
        assert!(!catalog.is_burnable(LandType::Lake));
    }

    #[test]
    fn test_town_reuses_scrubland_parameters() {
        assert_eq!(BurnBehavior::town(), BurnBehavior::scrubland());
    }

    #[test]
    fn test_probability_bounds_in_unit_interval() {
        let catalog = LandCoverCatalog::standard();
        for land in LandType::ALL {
            if let Some(b) = catalog.behavior(land) {
                assert!((0.0..=1.0).contains(&b.prob_min), "{land:?} prob_min");
                assert!((0.0..=1.0).contains(&b.prob_max), "{land:?} prob_max");
                assert!(b.prob_min <= b.prob_max, "{land:?} bounds ordered");
                assert!(b.duration_base >= 1, "{land:?} duration");
            }
        }
    }

    #[test]
    fn test_with_behavior_marks_type_inert() {
        let catalog = LandCoverCatalog::standard().with_behavior(LandType::Town, None);
        assert!(!catalog.is_burnable(LandType::Town));
        assert!(catalog.is_burnable(LandType::Scrubland));
    }
}
