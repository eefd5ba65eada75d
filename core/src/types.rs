/// Single coordinate axis, used for the grid side length and for positions.
pub type Coord = u8;

/// Count type used for bomb counts, cell counts and cell ordinals.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major index of `coords` on a square grid of side `size`.
pub const fn index_of((row, col): Coord2, size: Coord) -> CellCount {
    mult(row, size) + col as CellCount
}

/// Inverse of [`index_of`].
pub const fn coords_of(index: CellCount, size: Coord) -> Coord2 {
    let size = size as CellCount;
    ((index / size) as Coord, (index % size) as Coord)
}

/// Whether `coords` stays within `radius` rows and `radius` columns of `origin`.
pub const fn within_radius(origin: Coord2, coords: Coord2, radius: Coord) -> bool {
    origin.0.abs_diff(coords.0) <= radius && origin.1.abs_diff(coords.1) <= radius
}

const ADJACENT: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// In-bounds neighbors of a cell, either the full 8-neighborhood used for labels or the
/// 4 orthogonal neighbors followed by the reveal fill.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    deltas: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    pub fn adjacent(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &ADJACENT)
    }

    pub fn orthogonal(center: Coord2, bounds: Coord2) -> Self {
        Self::new(center, bounds, &ORTHOGONAL)
    }

    fn new(center: Coord2, bounds: Coord2, deltas: &'static [(isize, isize)]) -> Self {
        Self {
            center,
            bounds,
            deltas,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.deltas.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}
