//! マンデルブロ集合の反復回数を色に変換するカラーマッピング
//!
//! 反復回数グリッド → ヒストグラム → スペクトル位置 → 色テーブル
//! の順に一度だけ構築し、描画側は `get_color` で色を引く。

pub mod common;

pub use common::{
    chooser::{build_many, colorize, ColorChooser, ColorChooserFactory, SpectrumColoring},
    colors::{spectrum_color, ColorMap},
    grid::{GridError, IterationGrid},
    histogram::Histogram,
    spectrum::SpectrumMap,
};
