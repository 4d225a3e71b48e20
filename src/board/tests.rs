use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_mark_symbol() {
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "O");
    assert_eq!(Mark::Empty.to_string(), "");
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(), 5);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_index_roundtrip_covers_board() {
    for idx in 0..TOTAL_CELLS {
        assert_eq!(Pos::from_index(idx).to_index(), idx);
    }
}

#[test]
fn test_try_from_index() {
    assert_eq!(Pos::try_from_index(8), Some(Pos::new(2, 2)));
    assert_eq!(Pos::try_from_index(9), None);
    assert_eq!(Pos::try_from_index(usize::MAX), None);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.mark_count(), 0);
    assert!(!board.is_full());
    assert!(board.cells().iter().all(|&m| m == Mark::Empty));
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    let pos = Pos::new(1, 1);
    board.set(pos, Mark::O);
    assert_eq!(board.get(pos), Mark::O);
    assert!(!board.is_empty(pos));
    assert_eq!(board.mark_count(), 1);
}

#[test]
fn test_full_board() {
    let board = Board::from_cells([Mark::X; TOTAL_CELLS]);
    assert!(board.is_full());
    assert_eq!(board.mark_count(), 9);
}

#[test]
fn test_iter_is_row_major() {
    let mut board = Board::new();
    board.set(Pos::new(0, 2), Mark::X);
    let (pos, mark) = board.iter().nth(2).unwrap();
    assert_eq!(pos, Pos::new(0, 2));
    assert_eq!(mark, Mark::X);
}
