//! スペクトル上の位置
//!
//! 出現頻度の累積和から、各反復回数の色帯がスペクトル軸のどこに来るかを決める。

use std::collections::BTreeMap;

use super::histogram::Histogram;

/// 反復回数 → スペクトル位置 `[1, max_location]`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpectrumMap {
    positions: BTreeMap<u32, u64>,
    max_location: u64,
}

impl SpectrumMap {
    /// ヒストグラムをキー昇順に走査して位置を決める
    ///
    /// 位置 = (この帯より前の累積数) + (帯の幅 / 2) + 1
    pub fn locate(histogram: &Histogram) -> Self {
        let mut positions = BTreeMap::new();
        let mut sum = 0u64;

        for (iter, freq) in histogram.iter() {
            sum += freq;
            positions.insert(iter, sum - freq + freq / 2 + 1);
        }

        Self {
            positions,
            max_location: sum,
        }
    }

    pub fn position(&self, iter: u32) -> Option<u64> {
        self.positions.get(&iter).copied()
    }

    /// スペクトル軸の長さ（= セル数）
    pub fn max_location(&self) -> u64 {
        self.max_location
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.positions.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
