use crate::model::AssetType;

/// Block counts per asset type. Counts are unsigned, so they can never go
/// below zero; `remove` on an empty slot does nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Portfolio {
    counts: [u32; AssetType::ALL.len()],
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, asset: AssetType) {
        self.counts[asset.slot()] += 1;
    }

    /// Returns `false` when there was nothing to remove.
    pub fn remove(&mut self, asset: AssetType) -> bool {
        let slot = &mut self.counts[asset.slot()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.counts = Default::default();
    }

    pub fn count(&self, asset: AssetType) -> u32 {
        self.counts[asset.slot()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of the portfolio held in `asset`, in percent. 0 when empty.
    pub fn percent(&self, asset: AssetType) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.count(asset)) / f64::from(total) * 100.0
    }

    /// Count-weighted mean risk, `None` for an empty portfolio.
    pub fn weighted_risk(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let weighted: u64 = AssetType::ALL
            .iter()
            .map(|a| u64::from(self.count(*a)) * u64::from(a.risk()))
            .sum();
        Some(weighted as f64 / f64::from(total))
    }

    /// Non-zero holdings in enumeration order.
    pub fn holdings(&self) -> impl Iterator<Item = (AssetType, u32)> + '_ {
        AssetType::ALL
            .into_iter()
            .map(|a| (a, self.count(a)))
            .filter(|(_, n)| *n > 0)
    }
}
