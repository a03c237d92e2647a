//! 共通定数

/// 最大反復回数（発散しなかった点の反復回数。常に黒で描画する）
pub const MAX_ITER: u32 = 256;

/// 色チャンネルの最大値
pub const CHANNEL_MAX: f64 = 255.0;

/// 反復回数テーブルに存在しないキーを引いたときの色
pub const FALLBACK_COLOR: [u8; 3] = [0, 0, 0];

/// 発散しなかった点（閾値の反復回数）の色
pub const THRESHOLD_COLOR: [u8; 3] = [0, 0, 0];
