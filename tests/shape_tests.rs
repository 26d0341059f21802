//! Shape tests - layouts, rotation, anchor movement

use swiftris::core::{block_offsets, Shape, SimpleRng};
use swiftris::types::{BlockColor, Orientation, ShapeKind, PREVIEW_COLUMN, PREVIEW_ROW};

fn cells(shape: &Shape) -> Vec<(i8, i8)> {
    shape.blocks().iter().map(|b| (b.column, b.row)).collect()
}

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for kind in ShapeKind::ALL {
        for orientation in Orientation::ALL {
            let mut offsets = block_offsets(kind, orientation).to_vec();
            offsets.sort();
            offsets.dedup();
            assert_eq!(offsets.len(), 4, "{:?} at {}", kind, orientation);
        }
    }
}

#[test]
fn test_two_state_shapes_repeat_every_half_turn() {
    for kind in [ShapeKind::Line, ShapeKind::S, ShapeKind::Z] {
        assert_eq!(
            block_offsets(kind, Orientation::Zero),
            block_offsets(kind, Orientation::OneEighty)
        );
        assert_eq!(
            block_offsets(kind, Orientation::Ninety),
            block_offsets(kind, Orientation::TwoSeventy)
        );
    }
}

#[test]
fn test_line_rotation_layouts() {
    let mut line = Shape::new(ShapeKind::Line, 4, 0, BlockColor::Teal, Orientation::Zero);
    assert_eq!(cells(&line), vec![(4, 0), (4, 1), (4, 2), (4, 3)]);

    line.rotate_clockwise();
    assert_eq!(line.orientation(), Orientation::Ninety);
    assert_eq!(cells(&line), vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
    assert_eq!(line.bottom_blocks().count(), 4);
}

#[test]
fn test_rotation_keeps_anchor_and_color() {
    let mut shape = Shape::new(ShapeKind::J, 3, 7, BlockColor::Purple, Orientation::Ninety);
    shape.rotate_counterclockwise();
    assert_eq!(shape.orientation(), Orientation::Zero);
    assert_eq!((shape.column(), shape.row()), (3, 7));
    assert!(shape.blocks().iter().all(|b| b.color == BlockColor::Purple));
}

#[test]
fn test_full_turn_restores_shape() {
    for kind in ShapeKind::ALL {
        let start = Shape::new(kind, 4, 5, BlockColor::Blue, Orientation::OneEighty);
        let mut shape = start.clone();
        for _ in 0..4 {
            shape.rotate_clockwise();
        }
        assert_eq!(shape, start);
    }
}

#[test]
fn test_lower_then_raise_is_identity() {
    let start = Shape::new(ShapeKind::S, 4, 0, BlockColor::Red, Orientation::Zero);
    let mut shape = start.clone();
    shape.lower_by_one_row();
    assert_eq!(shape.row(), 1);
    shape.raise_by_one_row();
    assert_eq!(shape, start);
}

#[test]
fn test_random_shape_is_seed_deterministic() {
    let mut a = SimpleRng::new(77);
    let mut b = SimpleRng::new(77);
    for _ in 0..20 {
        let x = Shape::random(&mut a, PREVIEW_COLUMN, PREVIEW_ROW);
        let y = Shape::random(&mut b, PREVIEW_COLUMN, PREVIEW_ROW);
        assert_eq!(x, y);
        assert_eq!((x.column(), x.row()), (PREVIEW_COLUMN, PREVIEW_ROW));
    }
}

#[test]
fn test_shape_display() {
    let square = Shape::new(ShapeKind::Square, 0, 0, BlockColor::Yellow, Orientation::Zero);
    assert_eq!(
        square.to_string(),
        "yellow square facing 0: yellow: [0, 0], yellow: [1, 0], yellow: [0, 1], yellow: [1, 1]"
    );
}
