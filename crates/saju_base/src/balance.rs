//! Five-element distribution over a set of pillars.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;
use crate::stem::Stem;

/// Fraction of weight per element; the five fields sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementBalance {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl Default for ElementBalance {
    /// Uniform distribution.
    fn default() -> Self {
        Self::from_weights([1.0; 5])
    }
}

impl ElementBalance {
    /// Normalize raw per-element weights (generating order). All-zero weights give a uniform split.
    pub fn from_weights(acc: [f64; 5]) -> Self {
        let sum: f64 = acc.iter().sum();
        if sum <= 0.0 {
            return Self::from_weights([1.0; 5]);
        }
        Self {
            wood: acc[0] / sum,
            fire: acc[1] / sum,
            earth: acc[2] / sum,
            metal: acc[3] / sum,
            water: acc[4] / sum,
        }
    }

    /// Count every present stem and branch with weight 1.
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut acc = [0.0; 5];
        for (_, p) in pillars.present() {
            acc[p.stem.element().index() as usize] += 1.0;
            acc[p.branch.element().index() as usize] += 1.0;
        }
        Self::from_weights(acc)
    }

    pub const fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Strongest element; ties resolve to the earlier element in generating order.
    pub fn dominant(&self) -> Element {
        ALL_ELEMENTS
            .iter()
            .copied()
            .fold(Element::Wood, |best, e| if self.get(e) > self.get(best) { e } else { best })
    }

    /// Weakest element; ties resolve to the earlier element in generating order.
    pub fn weakest(&self) -> Element {
        ALL_ELEMENTS
            .iter()
            .copied()
            .fold(Element::Wood, |best, e| if self.get(e) < self.get(best) { e } else { best })
    }

    /// 0..=100, where 100 is a perfectly even split and 0 is everything in one element.
    pub fn balance_score(&self) -> f64 {
        let diff: f64 = ALL_ELEMENTS.iter().map(|e| (self.get(*e) - 0.2).abs()).sum();
        (1.0 - diff / 1.6).clamp(0.0, 1.0) * 100.0
    }

    /// 0..=100 support for the day master: its own and its resource element
    /// against its output and controlling elements. 50 is neutral.
    pub fn day_master_support(&self, day_master: Stem) -> f64 {
        let dm = day_master.element();
        let resource = ALL_ELEMENTS[((dm.index() + 4) % 5) as usize];
        let output = dm.generates();
        let controller = ALL_ELEMENTS[((dm.index() + 3) % 5) as usize];
        let support = self.get(dm) + self.get(resource);
        let drain = self.get(output) + self.get(controller);
        (0.5 + (support - drain) / 2.0).clamp(0.0, 1.0) * 100.0
    }
}
