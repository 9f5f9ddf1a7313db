use sudoku_engine::{
    Board, FormatError, GridSize, decode, encode, fill, load_file, progress, remove_custom,
    reveal_hint, save_file,
};

/// A 4x4 game with five removed cells, one of them already
/// hint-revealed (hence the 1/2 counter and Difficulty 5 - 1 = 4).
const SAVED_GAME: &str = "\
Grid Size : 4
Mini Grid Size : 2
Saved grid
1 2 3 4
3 4 1 2
0 1 0 3
0 3 0 1
Editable
1 1 1 1
1 1 1 1
0 1 0 1
0 1 0 1
Answer
1 2 3 4
3 4 1 2
2 1 4 3
4 3 2 1
Hints 1/2
Difficulty : 4";

#[test]
fn decode_restores_every_field() {
    let board = decode(SAVED_GAME).unwrap();

    assert_eq!(board.size(), GridSize::Four);
    assert_eq!(board.get(0, 0), 1);
    assert_eq!(board.get(2, 0), 0);
    assert_eq!(board.answer(2, 0), 2);
    assert_eq!(board.answer(3, 0), 4);
    assert!(!board.is_editable(0, 0));
    assert!(board.is_editable(2, 0));
    assert!(!board.is_editable(2, 1));
    assert_eq!(board.hints().used, 1);
    assert_eq!(board.hints().max, 2);
    // Difficulty stores removed - used, so the count comes back.
    assert_eq!(board.removed_count(), 5);
    assert!(!board.is_revealed());
    assert_eq!(progress(&board), 0.0);
}

#[test]
fn encode_reproduces_the_exact_text() {
    let board = decode(SAVED_GAME).unwrap();
    assert_eq!(encode(&board), SAVED_GAME);
}

#[test]
fn a_generated_game_round_trips() {
    let mut board = Board::new(GridSize::Nine);
    fill(&mut board).unwrap();
    remove_custom(&mut board, 40, 3).unwrap();
    reveal_hint(&mut board);
    let (r, c) = (0..9)
        .flat_map(|r| (0..9).map(move |c| (r, c)))
        .find(|&(r, c)| board.is_empty(r, c))
        .unwrap();
    board.set(r, c, board.answer(r, c)).unwrap();

    let restored = decode(&encode(&board)).unwrap();
    assert_eq!(restored, board);
}

#[test]
fn missing_answer_section_is_named() {
    let text = SAVED_GAME.replace("Answer\n", "");
    assert_eq!(decode(&text), Err(FormatError::MissingSection("Answer")));
}

#[test]
fn short_row_is_rejected() {
    let text = SAVED_GAME.replace("1 2 3 4\n3 4 1 2\n0 1 0 3", "1 2 3\n3 4 1 2\n0 1 0 3");
    assert_eq!(
        decode(&text),
        Err(FormatError::RowLength {
            section: "Saved grid",
            row: 0
        })
    );
}

#[test]
fn non_square_grid_size_is_rejected() {
    let text = SAVED_GAME.replace("Grid Size : 4", "Grid Size : 7");
    assert_eq!(decode(&text), Err(FormatError::UnsupportedGridSize(7)));
}

#[test]
fn mismatched_block_size_is_rejected() {
    let text = SAVED_GAME.replace("Mini Grid Size : 2", "Mini Grid Size : 3");
    assert_eq!(
        decode(&text),
        Err(FormatError::BlockSizeMismatch {
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn non_integer_token_is_rejected() {
    let text = SAVED_GAME.replace("4 3 2 1", "4 3 x 1");
    assert_eq!(
        decode(&text),
        Err(FormatError::BadInteger {
            section: "Answer",
            token: "x".to_string()
        })
    );
}

#[test]
fn out_of_range_cell_is_rejected() {
    let text = SAVED_GAME.replace("1 2 3 4\n3 4 1 2\n0 1 0 3", "1 2 3 5\n3 4 1 2\n0 1 0 3");
    assert_eq!(
        decode(&text),
        Err(FormatError::ValueOutOfRange {
            section: "Saved grid",
            row: 0,
            col: 3
        })
    );
}

#[test]
fn overdrawn_hint_counter_is_rejected() {
    let text = SAVED_GAME.replace("Hints 1/2", "Hints 3/2");
    assert_eq!(decode(&text), Err(FormatError::BadHintCounts { used: 3, max: 2 }));
}

#[test]
fn empty_answer_cell_is_rejected() {
    let text = SAVED_GAME.replace("4 3 2 1", "4 3 0 1");
    assert_eq!(
        decode(&text),
        Err(FormatError::ValueOutOfRange {
            section: "Answer",
            row: 3,
            col: 2
        })
    );
}

#[test]
fn save_and_load_through_a_file() {
    let board = decode(SAVED_GAME).unwrap();
    let path = std::env::temp_dir().join(format!("sudoku-engine-{}.dat", std::process::id()));

    save_file(&board, &path).unwrap();
    let restored = load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored, board);
}
