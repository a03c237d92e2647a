//! 反復回数 → RGB の色テーブルと色変換関数
//!
//! スペクトル位置 t (0, 1] に対して三角関数で各チャンネルを決める:
//!   - 赤: sin(t·π/2) で 0 → 255 に増加
//!   - 緑: sin(t·π) で 0 → 255 → 0（中央で最大）
//!   - 青: cos(t·π/2) で 255 → 0 に減少
//! 発散しなかった点（閾値の反復回数）は常に黒。

use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};

use image::Rgb;
use log::{debug, warn};

use super::constants::{CHANNEL_MAX, FALLBACK_COLOR, THRESHOLD_COLOR};
use super::grid::IterationGrid;
use super::histogram::Histogram;
use super::spectrum::SpectrumMap;

/// チャンネル値を切り捨てて 0..=255 に収める
fn to_channel(value: f64) -> u8 {
    value.trunc().clamp(0.0, CHANNEL_MAX) as u8
}

/// スペクトル位置 t から色を計算
pub fn spectrum_color(t: f64) -> Rgb<u8> {
    let r = (t * FRAC_PI_2).sin() * CHANNEL_MAX;
    let g = (t * PI).sin() * CHANNEL_MAX;
    let b = (t * FRAC_PI_2).cos() * CHANNEL_MAX;

    Rgb([to_channel(r), to_channel(g), to_channel(b)])
}

/// u32形式（0xRRGGBB）に変換
pub fn rgb_to_u32(color: Rgb<u8>) -> u32 {
    let Rgb([r, g, b]) = color;
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// 反復回数 → 色 の対応表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    colors: BTreeMap<u32, Rgb<u8>>,
    threshold: u32,
}

impl ColorMap {
    /// グリッドからヒストグラム・スペクトル位置・色の順に構築
    pub fn from_grid(grid: &IterationGrid, threshold: u32) -> Self {
        let histogram = Histogram::from_grid(grid);
        let spectrum = SpectrumMap::locate(&histogram);
        debug!(
            "色テーブル作成: {}x{} セル, {} 種類の反復回数",
            grid.width(),
            grid.height(),
            histogram.len()
        );
        Self::synthesize(&spectrum, threshold)
    }

    /// スペクトル位置から色を決める
    pub fn synthesize(spectrum: &SpectrumMap, threshold: u32) -> Self {
        let max_location = spectrum.max_location() as f64;

        let colors = spectrum
            .iter()
            .map(|(iter, position)| {
                if iter == threshold {
                    (iter, Rgb(THRESHOLD_COLOR))
                } else {
                    (iter, spectrum_color(position as f64 / max_location))
                }
            })
            .collect();

        Self { colors, threshold }
    }

    /// 反復回数に対応する色（テーブルにない場合は黒）
    pub fn get_color(&self, iter: u32) -> Rgb<u8> {
        match self.colors.get(&iter) {
            Some(&color) => color,
            None => {
                warn!("不正な反復回数キー: {}, 黒を使用します", iter);
                Rgb(FALLBACK_COLOR)
            }
        }
    }

    pub fn contains(&self, iter: u32) -> bool {
        self.colors.contains_key(&iter)
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Rgb<u8>)> + '_ {
        self.colors.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
