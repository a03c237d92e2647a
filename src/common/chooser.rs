//! 描画側から見た色選択のインターフェース
//!
//! 描画側は反復回数グリッドを `ColorChooserFactory` に渡して `ColorChooser` を作り、
//! 1ピクセルごとに色を問い合わせる。

use image::Rgb;
use rayon::prelude::*;

use super::colors::{rgb_to_u32, ColorMap};
use super::constants::MAX_ITER;
use super::grid::IterationGrid;

/// 反復回数から色を返す
pub trait ColorChooser {
    fn color(&self, iter: u32) -> Rgb<u8>;

    /// u32形式（0xRRGGBB）で色を返す
    fn color_u32(&self, iter: u32) -> u32 {
        rgb_to_u32(self.color(iter))
    }
}

impl ColorChooser for ColorMap {
    fn color(&self, iter: u32) -> Rgb<u8> {
        self.get_color(iter)
    }
}

/// グリッドごとに `ColorChooser` を作る
pub trait ColorChooserFactory {
    type Chooser: ColorChooser;

    fn create(&self, grid: &IterationGrid) -> Self::Chooser;
}

/// 出現頻度に基づくスペクトル配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumColoring {
    /// 発散しなかった点の反復回数（黒で描画）
    pub threshold: u32,
}

impl Default for SpectrumColoring {
    fn default() -> Self {
        Self {
            threshold: MAX_ITER,
        }
    }
}

impl ColorChooserFactory for SpectrumColoring {
    type Chooser = ColorMap;

    fn create(&self, grid: &IterationGrid) -> ColorMap {
        ColorMap::from_grid(grid, self.threshold)
    }
}

/// グリッド全体を u32 形式のピクセル列に変換（行単位で並列）
pub fn colorize<C>(chooser: &C, grid: &IterationGrid) -> Vec<u32>
where
    C: ColorChooser + Sync,
{
    let width = grid.width();
    if width == 0 {
        return Vec::new();
    }

    grid.cells()
        .par_chunks(width)
        .flat_map_iter(|row| row.iter().map(|&iter| chooser.color_u32(iter)))
        .collect()
}

/// 複数のグリッドから色テーブルを並列に作成（入力と同じ順序）
pub fn build_many(grids: &[IterationGrid], threshold: u32) -> Vec<ColorMap> {
    grids
        .par_iter()
        .map(|grid| ColorMap::from_grid(grid, threshold))
        .collect()
}
