//! 反復回数グリッド

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("グリッドの大きさが一致しません: {width}x{height} に対して {len} 要素")]
    SizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    #[error("行 {row} の長さが不正です: 期待値 {expected}, 実際 {found}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// 1ピクセルごとの反復回数（行優先: `cells[y * width + x]`）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IterationGrid {
    width: usize,
    height: usize,
    cells: Vec<u32>,
}

impl IterationGrid {
    pub fn new(width: usize, height: usize, cells: Vec<u32>) -> Result<Self, GridError> {
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(GridError::SizeMismatch {
                width,
                height,
                len: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// 行ごとの配列から作成（全行が同じ長さであること）
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());

        // 確保より先に全行の長さを検査する
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|&(_, values)| values.as_ref().len() != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: values.as_ref().len(),
            });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for values in rows {
            cells.extend_from_slice(values.as_ref());
        }

        Self::new(width, rows.len(), cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// セル数（W×H）
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// 行単位のイテレータ
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // 幅0のとき chunks は使えないので空行を height 個返す
        let width = self.width;
        (0..self.height).map(move |y| &self.cells[y * width..(y + 1) * width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_layout() {
        let grid = IterationGrid::from_rows(&[[1u32, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cells(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.get(0, 1), Some(4));
        assert_eq!(grid.get(2, 0), Some(3));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1u32, 1], vec![2], vec![3, 3]];
        assert_eq!(
            IterationGrid::from_rows(&rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn long_first_row_with_many_empty_rows_is_ragged() {
        let mut rows = vec![vec![0u32; 1_000_000]];
        rows.extend(std::iter::repeat_with(Vec::new).take(1_000_000));

        assert_eq!(
            IterationGrid::from_rows(&rows),
            Err(GridError::Ragged {
                row: 1,
                expected: 1_000_000,
                found: 0
            })
        );
    }

    #[test]
    fn size_mismatch_is_rejected() {
        let err = IterationGrid::new(3, 3, vec![0; 8]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                width: 3,
                height: 3,
                len: 8
            }
        );
    }

    #[test]
    fn empty_grids_are_valid() {
        let no_rows: Vec<Vec<u32>> = Vec::new();
        let grid = IterationGrid::from_rows(&no_rows).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);

        let empty_rows = vec![Vec::<u32>::new(), Vec::new()];
        let grid = IterationGrid::from_rows(&empty_rows).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 2);
        assert!(grid.rows().all(|row| row.is_empty()));
    }

    #[test]
    fn rows_round_trip() {
        let grid = IterationGrid::new(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u32]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }
}
