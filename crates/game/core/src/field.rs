//! Terrain classification and the per-turn field snapshot.

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, GameError};
use crate::location::Location;

/// Terrain class of a single cell as reported by the host.
///
/// `Hidden` means "not observed this turn"; every other variant is confirmed
/// terrain. `Custom` carries a host terrain code that no controller model is
/// required to understand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    Wall,
    Empty,
    Hidden,
    Trap,
    Exit,
    PlayerStart,
    Custom(u16),
}

impl CellType {
    /// ASCII glyph used by the field codec.
    ///
    /// Custom codes above 9 have no glyph of their own and render as `*`.
    pub fn glyph(self) -> char {
        match self {
            CellType::Wall => '#',
            CellType::Empty => '.',
            CellType::Hidden => '?',
            CellType::Trap => '^',
            CellType::Exit => 'E',
            CellType::PlayerStart => 'S',
            CellType::Custom(code) => char::from_digit(u32::from(code), 10).unwrap_or('*'),
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        let cell = match glyph {
            '#' => CellType::Wall,
            '.' => CellType::Empty,
            '?' => CellType::Hidden,
            '^' => CellType::Trap,
            'E' => CellType::Exit,
            'S' => CellType::PlayerStart,
            digit => CellType::Custom(digit.to_digit(10)? as u16),
        };
        Some(cell)
    }

    /// Walls and traps; they make neighbouring corridors more dangerous.
    pub const fn is_hazard(self) -> bool {
        matches!(self, CellType::Wall | CellType::Trap)
    }

    /// Confirmed cells the player can stand on.
    pub const fn is_walkable(self) -> bool {
        matches!(self, CellType::Empty | CellType::Exit | CellType::PlayerStart)
    }
}

/// Errors raised while decoding an ASCII field or level.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at {location}")]
    UnknownGlyph { glyph: char, location: Location },

    #[error("level has no player glyph")]
    MissingPlayer,

    #[error("level has a second player glyph at {location}")]
    DuplicatePlayer { location: Location },
}

impl GameError for FieldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "FIELD_EMPTY",
            Self::RaggedRow { .. } => "FIELD_RAGGED_ROW",
            Self::UnknownGlyph { .. } => "FIELD_UNKNOWN_GLYPH",
            Self::MissingPlayer => "LEVEL_MISSING_PLAYER",
            Self::DuplicatePlayer { .. } => "LEVEL_DUPLICATE_PLAYER",
        }
    }
}

/// Classification of every cell of the level for the current turn.
///
/// Unseen areas are reported as [`CellType::Hidden`], so the view always
/// covers the full rectangle. Cells are stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct FieldView {
    width: u32,
    height: u32,
    cells: Vec<CellType>,
}

impl FieldView {
    /// Creates a `width` x `height` field filled with one cell type.
    pub fn filled(width: u32, height: u32, cell: CellType) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    /// Decodes ASCII rows (one glyph per cell, see [`CellType::glyph`]).
    pub fn from_rows<I, S>(rows: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::decode(rows, |glyph, _| CellType::from_glyph(glyph))
    }

    /// Shared row decoder; `classify` maps a glyph at a location to terrain.
    pub(crate) fn decode<I, S, F>(rows: I, mut classify: F) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(char, Location) -> Option<CellType>,
    {
        let mut width = None;
        let mut height = 0u32;
        let mut cells = Vec::new();

        for (y, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(FieldError::RaggedRow {
                    row: y,
                    expected,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let location = Location::new(x as i32, y as i32);
                let cell = classify(glyph, location)
                    .ok_or(FieldError::UnknownGlyph { glyph, location })?;
                cells.push(cell);
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(Self {
                width: width as u32,
                height,
                cells,
            }),
            _ => Err(FieldError::Empty),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, location: Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && location.x < self.width as i32
            && location.y < self.height as i32
    }

    fn index(&self, location: Location) -> Option<usize> {
        self.contains(location)
            .then(|| location.y as usize * self.width as usize + location.x as usize)
    }

    /// Classification of a cell, or `None` outside the field.
    pub fn get(&self, location: Location) -> Option<CellType> {
        self.index(location).map(|index| self.cells[index])
    }

    /// Overwrites one cell. Returns false if the location lies outside the field.
    pub fn set(&mut self, location: Location, cell: CellType) -> bool {
        match self.index(location) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => false,
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, CellType)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(index, &cell)| {
            let location = Location::new((index % width) as i32, (index / width) as i32);
            (location, cell)
        })
    }

    pub fn cells_of_type(&self, cell_type: CellType) -> impl Iterator<Item = Location> + '_ {
        self.cells()
            .filter(move |&(_, cell)| cell == cell_type)
            .map(|(location, _)| location)
    }

    /// Renders the field back into ASCII rows.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| row.iter().map(|cell| cell.glyph()).collect())
            .collect()
    }
}

impl fmt::Display for FieldView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl FromStr for FieldView {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines())
    }
}

impl TryFrom<Vec<String>> for FieldView {
    type Error = FieldError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<FieldView> for Vec<String> {
    fn from(field: FieldView) -> Self {
        field.rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_renders_rows() {
        let field: FieldView = "#####\n#S.E#\n#?^3#\n#####".parse().unwrap();

        assert_eq!(field.width(), 5);
        assert_eq!(field.height(), 4);
        assert_eq!(field.get(Location::new(1, 1)), Some(CellType::PlayerStart));
        assert_eq!(field.get(Location::new(3, 1)), Some(CellType::Exit));
        assert_eq!(field.get(Location::new(1, 2)), Some(CellType::Hidden));
        assert_eq!(field.get(Location::new(2, 2)), Some(CellType::Trap));
        assert_eq!(field.get(Location::new(3, 2)), Some(CellType::Custom(3)));
        assert_eq!(field.get(Location::new(5, 0)), None);
        assert_eq!(field.get(Location::new(-1, 0)), None);

        assert_eq!(field.to_string(), "#####\n#S.E#\n#?^3#\n#####");
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = FieldView::from_rows(["###", "##"]).unwrap_err();
        assert_eq!(
            err,
            FieldError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_unknown_glyphs_and_empty_input() {
        let err = FieldView::from_rows(["#x#"]).unwrap_err();
        assert_eq!(
            err,
            FieldError::UnknownGlyph {
                glyph: 'x',
                location: Location::new(1, 0)
            }
        );
        assert_eq!(FieldView::from_rows(Vec::<String>::new()), Err(FieldError::Empty));
        assert_eq!(FieldView::from_rows([""]), Err(FieldError::Empty));
    }

    #[test]
    fn cells_of_type_walks_row_major() {
        let field = FieldView::from_rows(["?.?", ".?."]).unwrap();
        let hidden: Vec<_> = field.cells_of_type(CellType::Hidden).collect();
        assert_eq!(
            hidden,
            vec![Location::new(0, 0), Location::new(2, 0), Location::new(1, 1)]
        );
    }

    #[test]
    fn set_ignores_out_of_bounds() {
        let mut field = FieldView::filled(2, 2, CellType::Hidden);
        assert!(field.set(Location::new(1, 1), CellType::Empty));
        assert!(!field.set(Location::new(2, 1), CellType::Empty));
        assert_eq!(field.get(Location::new(1, 1)), Some(CellType::Empty));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_ascii_rows() {
        let field = FieldView::from_rows(["#.#", "?E?"]).unwrap();
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r##"["#.#","?E?"]"##);
        let back: FieldView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
