//! Collision detection for a piece placement
//!
//! Cells above the board (negative rows) are legal: pieces may spawn or kick
//! partly above the visible area. They are still bounded left and right.

use crate::board::Board;
use crate::pieces::get_shape;
use crate::types::PieceKind;

/// Whether `kind` at `rotation` with origin (x, y) collides with the walls,
/// the floor, or a locked cell.
pub fn collides(kind: PieceKind, rotation: usize, x: i8, y: i8, board: &Board) -> bool {
    get_shape(kind, rotation).cells().any(|(dx, dy)| {
        let cx = x + dx;
        let cy = y + dy;
        cx < 0
            || cx >= board.width() as i8
            || cy >= board.height() as i8
            || (cy >= 0 && board.is_occupied(cx, cy))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::rotation_count;

    #[test]
    fn every_rotation_collides_past_either_wall() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            for rotation in 0..rotation_count(kind) {
                let width = get_shape(kind, rotation).width() as i8;
                assert!(collides(kind, rotation, -1, 5, &board), "{:?}/{}", kind, rotation);
                assert!(
                    collides(kind, rotation, 10 - width + 1, 5, &board),
                    "{:?}/{}",
                    kind,
                    rotation
                );
                assert!(!collides(kind, rotation, 0, 5, &board));
                assert!(!collides(kind, rotation, 10 - width, 5, &board));
            }
        }
    }

    #[test]
    fn cells_above_the_top_are_legal() {
        let board = Board::new();
        // Vertical I with three cells above row 0.
        assert!(!collides(PieceKind::I, 1, 0, -3, &board));
        // Still bounded horizontally up there.
        assert!(collides(PieceKind::I, 1, -1, -3, &board));
        assert!(collides(PieceKind::I, 1, 10, -3, &board));
    }

    #[test]
    fn floor_and_stack_collide() {
        let mut board = Board::new();
        assert!(!collides(PieceKind::O, 0, 4, 18, &board));
        assert!(collides(PieceKind::O, 0, 4, 19, &board));

        board.set(5, 18, Some(PieceKind::T));
        assert!(collides(PieceKind::O, 0, 4, 17, &board));
        assert!(!collides(PieceKind::O, 0, 6, 17, &board));
    }

    #[test]
    fn empty_shape_cells_do_not_collide() {
        let mut board = Board::new();
        // T spawn state has an empty cell at its top-left corner.
        board.set(4, 10, Some(PieceKind::J));
        assert!(!collides(PieceKind::T, 0, 4, 10, &board));
        assert!(collides(PieceKind::T, 0, 3, 10, &board));
    }
}
