//! 反復回数の出現頻度（ヒストグラム）

use std::collections::BTreeMap;

use super::grid::IterationGrid;

/// 反復回数 → 出現回数（キー昇順）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Histogram {
    counts: BTreeMap<u32, u64>,
}

impl Histogram {
    /// グリッド全体を走査して出現回数を集計
    pub fn from_grid(grid: &IterationGrid) -> Self {
        let mut counts = BTreeMap::new();
        for &iter in grid.cells() {
            *counts.entry(iter).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn frequency(&self, iter: u32) -> Option<u64> {
        self.counts.get(&iter).copied()
    }

    /// (反復回数, 出現回数) をキー昇順で返す
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    /// 異なる反復回数の数
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 出現回数の合計（= セル数）
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
