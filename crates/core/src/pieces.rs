//! Pieces module - shape tables and the simple kick rotation
//!
//! Each kind owns an ordered list of rotation states (clockwise). A state is a
//! small binary grid whose top-left corner is the piece origin. Kinds have
//! different numbers of states: O has one, I/S/Z have two, T/J/L have four.
//!
//! Rotation is simpler than SRS: try the new state in place, then
//! a short list of nearby offsets, and keep the first one that fits.

use crate::types::PieceKind;

/// Offset of a cell relative to the piece origin (dx = column, dy = row)
pub type MinoOffset = (i8, i8);

/// One rotation state of a piece kind, as rows of 0/1 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: &'static [&'static [u8]],
}

impl Shape {
    pub const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Width of the bounding box in cells
    pub fn width(&self) -> u8 {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0) as u8
    }

    /// Height of the bounding box in cells
    pub fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.rows
    }

    pub fn is_filled(&self, dx: u8, dy: u8) -> bool {
        self.rows
            .get(dy as usize)
            .and_then(|r| r.get(dx as usize))
            .is_some_and(|&v| v != 0)
    }

    /// Offsets of the filled cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }
}

const I_SHAPES: [Shape; 2] = [
    Shape::new(&[&[1, 1, 1, 1]]),
    Shape::new(&[&[1], &[1], &[1], &[1]]),
];

const O_SHAPES: [Shape; 1] = [Shape::new(&[&[1, 1], &[1, 1]])];

const T_SHAPES: [Shape; 4] = [
    Shape::new(&[&[0, 1, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 1], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 1, 0]]),
    Shape::new(&[&[0, 1], &[1, 1], &[0, 1]]),
];

const S_SHAPES: [Shape; 2] = [
    Shape::new(&[&[0, 1, 1], &[1, 1, 0]]),
    Shape::new(&[&[1, 0], &[1, 1], &[0, 1]]),
];

const Z_SHAPES: [Shape; 2] = [
    Shape::new(&[&[1, 1, 0], &[0, 1, 1]]),
    Shape::new(&[&[0, 1], &[1, 1], &[1, 0]]),
];

const J_SHAPES: [Shape; 4] = [
    Shape::new(&[&[1, 0, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 1], &[1, 0], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 0, 1]]),
    Shape::new(&[&[0, 1], &[0, 1], &[1, 1]]),
];

const L_SHAPES: [Shape; 4] = [
    Shape::new(&[&[0, 0, 1], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 0], &[1, 1]]),
    Shape::new(&[&[1, 1, 1], &[1, 0, 0]]),
    Shape::new(&[&[1, 1], &[0, 1], &[0, 1]]),
];

/// Rotation states of a kind, clockwise, starting at the spawn state
pub fn rotations(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

pub fn rotation_count(kind: PieceKind) -> usize {
    rotations(kind).len()
}

/// Shape for a kind at `rotation` (taken modulo the number of states)
pub fn get_shape(kind: PieceKind, rotation: usize) -> &'static Shape {
    let states = rotations(kind);
    &states[rotation % states.len()]
}

/// Offsets tried, in order, when a rotation does not fit in place
pub fn get_kicks(kind: PieceKind) -> &'static [MinoOffset] {
    match kind {
        PieceKind::I => &I_KICKS,
        _ => &GENERIC_KICKS,
    }
}

/// Kicks for J, L, O, S, T and Z
const GENERIC_KICKS: [MinoOffset; 3] = [(-1, 0), (1, 0), (0, -1)];

/// The I piece spans four cells, so its kicks reach up to three cells
const I_KICKS: [MinoOffset; 8] = [
    (-1, 0),
    (1, 0),
    (-2, 0),
    (2, 0),
    (-3, 0),
    (0, -1),
    (0, -2),
    (0, -3),
];

/// Try to rotate a piece clockwise, falling back to kicks
///
/// `collides(rotation, x, y)` reports whether the kind at that rotation and
/// origin would collide. Returns the new rotation index and the applied
/// offset, or `None` if neither the in-place rotation nor any kick fits.
pub fn try_rotate(
    kind: PieceKind,
    rotation: usize,
    x: i8,
    y: i8,
    collides: impl Fn(usize, i8, i8) -> bool,
) -> Option<(usize, MinoOffset)> {
    let new_rotation = (rotation + 1) % rotation_count(kind);

    std::iter::once(&(0, 0))
        .chain(get_kicks(kind).iter())
        .find(|&&(dx, dy)| !collides(new_rotation, x + dx, y + dy))
        .map(|&offset| (new_rotation, offset))
}

/// Spawn row for every kind (all spawn states are at most two rows tall)
pub const SPAWN_ROW: i8 = 0;

/// Horizontally centered spawn column for a kind on a board `width` wide
pub fn spawn_column(kind: PieceKind, width: u8) -> i8 {
    let shape_width = get_shape(kind, 0).width();
    (width / 2) as i8 - (shape_width / 2) as i8
}
