use glam::{IVec2, UVec2};

use crate::error::LoadError;
use crate::map::MapId;

/// Rectangular character grid: the floor plan of one map.
///
/// Row-major, origin (0, 0) at the top-left. Built once per map load and
/// never patched afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse map text, one row per line. A trailing `\r` on each line is
    /// ignored. Rows of differing length are rejected.
    pub fn parse(map: MapId, text: &str) -> Result<Self, LoadError> {
        let rows = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        Self::from_rows(map, rows)
    }

    pub fn from_rows(map: MapId, rows: Vec<Vec<char>>) -> Result<Self, LoadError> {
        let Some(first) = rows.first() else {
            return Err(LoadError::EmptyMap(map));
        };
        let width = first.len();
        if width == 0 {
            return Err(LoadError::EmptyMap(map));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(LoadError::NonRectangular { map, row, expected: width, found: line.len() });
            }
            cells.extend_from_slice(line);
        }

        Ok(Self { cells, width, height: rows.len() })
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    /// Grid dimensions in cells.
    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width as u32, self.height as u32)
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Symbol at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: IVec2) -> Option<char> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.y as usize * self.width + pos.x as usize])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_carriage_returns() {
        let grid = Grid::parse(0, "ab\r\ncd\r\n").unwrap();
        assert_eq!(grid.size(), UVec2::new(2, 2));
        assert_eq!(grid.get(IVec2::new(1, 1)), Some('d'));
    }

    #[test]
    fn rows_round_trip_the_input() {
        let grid = Grid::parse(3, "xyz\nuvw").unwrap();
        let rows: Vec<String> = grid.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["xyz", "uvw"]);
    }

    #[test]
    fn multibyte_symbols_count_as_one_cell() {
        let grid = Grid::parse(0, "é.\n..").unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(IVec2::ZERO), Some('é'));
    }
}
