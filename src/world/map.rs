//! Static tile grid the rays are traced through.
//!
//! * `0` is empty floor, `1..=255` is a wall variant (the variant only picks a colour).
//! * Always square, `size × size`, row-major: `cells[y * size + x]`.
//! * The outer ring is expected to be solid. Nothing here enforces it, see
//!   [`GridMap::is_enclosed`].

use std::{fs, io, path::Path};

use glam::{IVec2, Vec2};
use thiserror::Error;

/// Cell tag stored in the grid.
pub type Tag = u8;

/// Tag of a traversable cell.
pub const EMPTY: Tag = 0;

/// Side length of [`GridMap::builtin`].
const BUILTIN_SIZE: usize = 8;

#[rustfmt::skip]
const BUILTIN: [Tag; BUILTIN_SIZE * BUILTIN_SIZE] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 3, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 2, 0, 4, 4, 0, 1,
    1, 0, 0, 0, 4, 0, 0, 1,
    1, 0, 3, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

/// Errors raised while building or loading a map.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("map has no cells")]
    Empty,

    #[error("map is not square: {rows} rows × {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("bad cell `{token}` at row {row}, column {col} (expected 0..=255)")]
    BadCell {
        row: usize,
        col: usize,
        token: String,
    },

    #[error("start position ({x}, {y}) lies outside the map")]
    StartOutside { x: f32, y: f32 },

    #[error("start position ({x}, {y}) is inside a wall")]
    StartBlocked { x: f32, y: f32 },
}

/// Square grid of cell tags, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    size: usize,
    cells: Vec<Tag>,
}

impl GridMap {
    /*──────────────────────── constructors ──────────────────────────*/

    /// Wrap a flat row-major tag array of side `size`.
    pub fn new(size: usize, cells: Vec<Tag>) -> Result<Self, MapError> {
        if size == 0 || cells.is_empty() {
            return Err(MapError::Empty);
        }
        if cells.len() != size * size {
            return Err(MapError::NotSquare {
                rows: cells.len().div_ceil(size),
                cols: size,
            });
        }
        Ok(Self { size, cells })
    }

    /// Build from explicit rows; every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<Tag>>) -> Result<Self, MapError> {
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MapError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(MapError::RaggedRow {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
        }
        if rows.len() != cols {
            return Err(MapError::NotSquare {
                rows: rows.len(),
                cols,
            });
        }

        let size = cols;
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse the text format: one row per line, cells split on whitespace or
    /// commas. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = rows.len();
            let cells = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|tok| !tok.is_empty())
                .enumerate()
                .map(|(col, tok)| {
                    tok.parse::<Tag>().map_err(|_| MapError::BadCell {
                        row,
                        col,
                        token: tok.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(cells);
        }

        let map = Self::from_rows(rows)?;
        if !map.is_enclosed() {
            log::warn!(
                "{0}×{0} map has an open border; rays leaving it will abort rendering",
                map.size
            );
        }
        Ok(map)
    }

    /// Read and parse a map file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MapError> {
        let text = fs::read_to_string(path.as_ref())?;
        let map = Self::parse(&text)?;
        log::debug!("loaded {}×{} map from {}", map.size, map.size, path.as_ref().display());
        Ok(map)
    }

    /// The compiled-in 8×8 level.
    pub fn builtin() -> Self {
        Self {
            size: BUILTIN_SIZE,
            cells: BUILTIN.to_vec(),
        }
    }

    /*──────────────────────── lookups ───────────────────────────────*/

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tag at `(x, y)`.
    ///
    /// Precondition: `x < size && y < size`. Out-of-range access panics.
    #[inline]
    pub fn cell_at(&self, x: usize, y: usize) -> Tag {
        debug_assert!(x < self.size && y < self.size, "cell ({x}, {y}) out of map");
        self.cells[y * self.size + x]
    }

    /// Checked lookup for a signed grid cell; `None` outside the map.
    #[inline]
    pub fn get(&self, cell: IVec2) -> Option<Tag> {
        self.contains(cell)
            .then(|| self.cell_at(cell.x as usize, cell.y as usize))
    }

    #[inline]
    pub fn contains(&self, cell: IVec2) -> bool {
        let n = self.size as i32;
        (0..n).contains(&cell.x) && (0..n).contains(&cell.y)
    }

    /// True if every cell of the outer ring is a wall.
    pub fn is_enclosed(&self) -> bool {
        let last = self.size - 1;
        (0..self.size).all(|i| {
            self.cell_at(i, 0) != EMPTY
                && self.cell_at(i, last) != EMPTY
                && self.cell_at(0, i) != EMPTY
                && self.cell_at(last, i) != EMPTY
        })
    }

    /// First empty cell in row-major order.
    pub fn first_open_cell(&self) -> Option<IVec2> {
        self.cells
            .iter()
            .position(|&tag| tag == EMPTY)
            .map(|i| IVec2::new((i % self.size) as i32, (i / self.size) as i32))
    }

    /// Verify that a world position is inside the map and on an empty cell.
    pub fn check_start(&self, pos: Vec2) -> Result<(), MapError> {
        match self.get(pos.floor().as_ivec2()) {
            _ if !pos.is_finite() => Err(MapError::StartOutside { x: pos.x, y: pos.y }),
            None => Err(MapError::StartOutside { x: pos.x, y: pos.y }),
            Some(EMPTY) => Ok(()),
            Some(_) => Err(MapError::StartBlocked { x: pos.x, y: pos.y }),
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layout() {
        let map = GridMap::builtin();
        assert_eq!(map.size(), 8);
        assert!(map.is_enclosed());
        assert_eq!(map.cell_at(5, 2), 3);
        assert_eq!(map.cell_at(2, 4), 2);
        assert_eq!(map.cell_at(4, 5), 4);
        assert_eq!(map.cell_at(1, 1), EMPTY);
        assert_eq!(map.first_open_cell(), Some(IVec2::new(1, 1)));
    }

    #[test]
    fn checked_lookup() {
        let map = GridMap::builtin();
        assert_eq!(map.get(IVec2::new(0, 0)), Some(1));
        assert_eq!(map.get(IVec2::new(-1, 3)), None);
        assert_eq!(map.get(IVec2::new(3, 8)), None);
    }

    #[test]
    fn parse_text_with_comments_and_commas() {
        let text = "# tiny room\n1,1,1\n\n1 0 1\n1, 1 ,1\n";
        let map = GridMap::parse(text).unwrap();
        assert_eq!(map.size(), 3);
        assert_eq!(map.cell_at(1, 1), EMPTY);
        assert!(map.is_enclosed());
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(GridMap::parse("# nothing\n\n"), Err(MapError::Empty)));
        assert!(matches!(GridMap::new(0, vec![]), Err(MapError::Empty)));
    }

    #[test]
    fn rejects_non_square() {
        let err = GridMap::parse("1 1 1\n1 0 1\n").unwrap_err();
        assert!(matches!(err, MapError::NotSquare { rows: 2, cols: 3 }));

        let err = GridMap::new(3, vec![1; 6]).unwrap_err();
        assert!(matches!(err, MapError::NotSquare { .. }));
    }

    #[test]
    fn rejects_ragged_row() {
        let err = GridMap::parse("1 1 1\n1 0\n1 1 1\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_bad_cell() {
        let err = GridMap::parse("1 1\n1 x\n").unwrap_err();
        assert!(matches!(err, MapError::BadCell { row: 1, col: 1, .. }));
        let err = GridMap::parse("1 1\n1 256\n").unwrap_err();
        assert!(matches!(err, MapError::BadCell { .. }));
    }

    #[test]
    fn open_border_is_loaded_but_reported() {
        let map = GridMap::parse("1 1 1\n0 0 1\n1 1 1\n").unwrap();
        assert!(!map.is_enclosed());
    }

    #[test]
    fn start_checks() {
        let map = GridMap::builtin();
        assert!(map.check_start(Vec2::new(1.5, 1.5)).is_ok());
        assert!(matches!(
            map.check_start(Vec2::new(0.5, 0.5)),
            Err(MapError::StartBlocked { .. })
        ));
        assert!(matches!(
            map.check_start(Vec2::new(-0.5, 2.0)),
            Err(MapError::StartOutside { .. })
        ));
        assert!(matches!(
            map.check_start(Vec2::new(f32::NAN, 2.0)),
            Err(MapError::StartOutside { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        std::fs::write(tmp.path(), "2 2 2 2\n2 0 0 2\n2 0 0 2\n2 2 2 2\n").unwrap();
        let map = GridMap::from_file(tmp.path()).unwrap();
        assert_eq!(map.size(), 4);
        assert_eq!(map.cell_at(3, 0), 2);
    }

    #[test]
    fn shipped_levels_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("levels/courtyard.txt");
        let map = GridMap::from_file(path).expect("cannot open courtyard.txt");
        assert_eq!(map.size(), 12);
        assert!(map.is_enclosed());
        assert_eq!(map.cell_at(6, 9), 7);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GridMap::from_file(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
