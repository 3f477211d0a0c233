use serde::{Deserialize, Serialize};

/// Points awarded to values up to and including `up_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier<T> {
    pub up_to: T,
    pub points: u8,
}

/// Ordered step function: the first tier whose bound covers the value wins, anything past
/// the last bound earns `beyond`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierTable<T> {
    tiers: Vec<Tier<T>>,
    beyond: u8,
}

impl<T: Ord> TierTable<T> {
    pub fn new(mut tiers: Vec<Tier<T>>, beyond: u8) -> Self {
        tiers.sort_by(|left, right| left.up_to.cmp(&right.up_to));
        Self { tiers, beyond }
    }

    pub fn points_for(&self, value: &T) -> u8 {
        self.tiers
            .iter()
            .find(|tier| *value <= tier.up_to)
            .map(|tier| tier.points)
            .unwrap_or(self.beyond)
    }

    pub fn tiers(&self) -> &[Tier<T>] {
        &self.tiers
    }

    pub fn beyond(&self) -> u8 {
        self.beyond
    }
}
