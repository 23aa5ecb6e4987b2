use core::fmt;
use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

/// Discrete grid position expressed in field coordinates.
///
/// Coordinates follow the row-major layout of a field: `x` grows to the right
/// (east), `y` grows downward (south). Ordering is lexicographic on `(x, y)`,
/// which is what path searches use to break ties deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Largest per-axis distance; a diagonal step counts as one.
    pub fn chebyshev_distance(self, other: Location) -> u32 {
        let delta = other - self;
        delta.dx.unsigned_abs().max(delta.dy.unsigned_abs())
    }

    /// Number of orthogonal steps between two locations on an open grid.
    pub fn manhattan_distance(self, other: Location) -> u32 {
        let delta = other - self;
        delta.dx.unsigned_abs() + delta.dy.unsigned_abs()
    }

    /// True when `other` is within `range` in Chebyshev distance.
    pub fn is_in_range(self, other: Location, range: u32) -> bool {
        self.chebyshev_distance(other) <= range
    }

    pub fn neighbours(self, connectivity: Connectivity) -> ArrayVec<Location, 8> {
        connectivity
            .offsets()
            .iter()
            .map(|&offset| self + offset)
            .collect()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Vector between two locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Sub for Location {
    type Output = Offset;

    fn sub(self, rhs: Location) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Offset> for Location {
    type Output = Location;

    fn add(self, rhs: Offset) -> Location {
        Location::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

/// Which cells count as neighbours of a location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Orthogonal neighbours only; the movement graph.
    Four,
    /// Orthogonal and diagonal neighbours; used for hazard density.
    Eight,
}

const FOUR: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

const EIGHT: [Offset; 8] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
    Offset::new(1, 1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
];

impl Connectivity {
    pub fn offsets(self) -> &'static [Offset] {
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}
