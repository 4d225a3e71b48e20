//! Board controller: owns the board, the turn and the game status

use tracing::{debug, info, trace};

use crate::board::{Board, Mark, Pos};
use crate::rules::{self, GameStatus};

use super::GameShell;

/// What a click on the board did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game had ended; the click started a new one
    Reset,
    /// A mark was placed
    Moved,
    /// Occupied cell or off the board
    Ignored,
}

/// Two-player Tic-Tac-Toe state machine
#[derive(Debug, Clone)]
pub struct BoardController {
    board: Board,
    turn: Mark,
    status: GameStatus,
    moves_played: usize,
}

impl BoardController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Clear the board. X moves first.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
        self.moves_played = 0;
        debug!("Board reset");
    }

    /// Place the current player's mark at `index` (row * 3 + col).
    ///
    /// Off-board indices, occupied cells and moves after the game ended are
    /// ignored and leave every piece of state untouched. Returns whether the
    /// move was accepted.
    pub fn apply_move(&mut self, index: usize) -> bool {
        let Some(pos) = Pos::try_from_index(index) else {
            debug!(index, "Ignoring move off the board");
            return false;
        };

        if self.status.is_over() {
            debug!(index, "Ignoring move after game end");
            return false;
        }

        if !self.board.is_empty(pos) {
            debug!(index, "Ignoring move on occupied cell");
            return false;
        }

        let mark = self.turn;
        self.board.set(pos, mark);
        self.moves_played += 1;
        self.turn = mark.opponent();
        debug!(index, %mark, moves = self.moves_played, "Move applied");

        match self.evaluate_winner() {
            GameStatus::Won { winner, line } => {
                info!(%winner, cells = ?line.map(Pos::to_index), "Game won");
            }
            GameStatus::Draw => info!(moves = self.moves_played, "Game drawn"),
            GameStatus::InProgress => {}
        }

        true
    }

    /// Re-check the eight lines and store the resulting status
    pub fn evaluate_winner(&mut self) -> GameStatus {
        self.status = rules::evaluate(&self.board);
        trace!(status = ?self.status, "Board evaluated");
        self.status
    }

    /// Handle a click on cell `index`, pushing the visible result to `shell`.
    ///
    /// Once a game is over, the next click only starts a new game.
    pub fn click<S: GameShell + ?Sized>(&mut self, index: usize, shell: &mut S) -> ClickOutcome {
        if self.status.is_over() {
            self.new_game(shell);
            return ClickOutcome::Reset;
        }

        if !self.apply_move(index) {
            return ClickOutcome::Ignored;
        }

        shell.render(&self.board);

        if self.status.is_over() {
            if let GameStatus::Won { line, .. } = &self.status {
                shell.highlight(line);
            }
            shell.show_result(&self.status);
        }

        ClickOutcome::Moved
    }

    /// Reset and repaint the shell
    pub fn new_game<S: GameShell + ?Sized>(&mut self, shell: &mut S) {
        self.reset();
        shell.render(&self.board);
        shell.highlight(&[]);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next
    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves since the last reset
    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    /// Records every shell call in order
    #[derive(Default)]
    struct RecordingShell {
        calls: Vec<ShellCall>,
    }

    #[derive(Debug, PartialEq)]
    enum ShellCall {
        Render(Board),
        Highlight(Vec<usize>),
        ShowResult(GameStatus),
    }

    impl GameShell for RecordingShell {
        fn render(&mut self, board: &Board) {
            self.calls.push(ShellCall::Render(*board));
        }

        fn highlight(&mut self, cells: &[Pos]) {
            self.calls
                .push(ShellCall::Highlight(cells.iter().map(|p| p.to_index()).collect()));
        }

        fn show_result(&mut self, status: &GameStatus) {
            self.calls.push(ShellCall::ShowResult(*status));
        }
    }

    fn play(controller: &mut BoardController, moves: &[usize]) {
        for &idx in moves {
            assert!(controller.apply_move(idx), "move {} rejected", idx);
        }
    }

    #[test]
    fn test_new_controller_state() {
        let controller = BoardController::new();
        assert_eq!(controller.board(), &Board::new());
        assert_eq!(controller.turn(), Mark::X);
        assert_eq!(controller.status(), GameStatus::InProgress);
        assert_eq!(controller.moves_played(), 0);
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut controller = BoardController::new();
        assert!(controller.apply_move(4));
        assert_eq!(controller.board().get(Pos::new(1, 1)), Mark::X);
        assert_eq!(controller.turn(), Mark::O);

        assert!(controller.apply_move(0));
        assert_eq!(controller.board().get(Pos::new(0, 0)), Mark::O);
        assert_eq!(controller.turn(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut controller = BoardController::new();
        play(&mut controller, &[4]);
        let before = controller.clone();

        assert!(!controller.apply_move(4));
        assert_eq!(controller.board(), before.board());
        assert_eq!(controller.turn(), before.turn());
        assert_eq!(controller.moves_played(), 1);
    }

    #[test]
    fn test_off_board_index_is_noop() {
        let mut controller = BoardController::new();
        assert!(!controller.apply_move(9));
        assert!(!controller.apply_move(usize::MAX));
        assert_eq!(controller.board().mark_count(), 0);
        assert_eq!(controller.turn(), Mark::X);
    }

    #[test]
    fn test_move_after_win_is_noop() {
        let mut controller = BoardController::new();
        // X: 0 1 2, O: 3 4
        play(&mut controller, &[0, 3, 1, 4, 2]);
        assert_eq!(controller.status().winner(), Some(Mark::X));

        let board = *controller.board();
        assert!(!controller.apply_move(8));
        assert_eq!(controller.board(), &board);
    }

    #[test]
    fn test_top_row_win_reports_line() {
        let mut controller = BoardController::new();
        play(&mut controller, &[0, 3, 1, 4, 2]);
        assert_eq!(
            controller.status(),
            GameStatus::Won {
                winner: Mark::X,
                line: [Pos::from_index(0), Pos::from_index(1), Pos::from_index(2)],
            }
        );
    }

    #[test]
    fn test_o_can_win() {
        let mut controller = BoardController::new();
        // X: 0 1 8, O: 2 4 6
        play(&mut controller, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(controller.status().winner(), Some(Mark::O));
        assert_eq!(
            controller.status().winning_line(),
            &[Pos::from_index(2), Pos::from_index(4), Pos::from_index(6)]
        );
    }

    #[test]
    fn test_full_board_draw() {
        let mut controller = BoardController::new();
        // X O X
        // X O O
        // O X X
        play(&mut controller, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(controller.status(), GameStatus::Draw);
        assert_eq!(controller.moves_played(), TOTAL_CELLS);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut controller = BoardController::new();
        play(&mut controller, &[0, 3, 1, 4, 2]);
        controller.reset();
        assert_eq!(controller.board(), &Board::new());
        assert_eq!(controller.turn(), Mark::X);
        assert_eq!(controller.status(), GameStatus::InProgress);

        play(&mut controller, &[4]);
        controller.reset();
        assert_eq!(controller.board().mark_count(), 0);
        assert_eq!(controller.moves_played(), 0);
    }

    #[test]
    fn test_evaluate_winner_is_idempotent() {
        let mut controller = BoardController::new();
        play(&mut controller, &[0, 3, 1, 4, 2]);
        let status = controller.status();
        assert_eq!(controller.evaluate_winner(), status);
        assert_eq!(controller.evaluate_winner(), status);
    }

    /// Walks every reachable game, checking the move-sequence properties at each node
    fn walk(controller: &BoardController, visited: &mut usize) {
        *visited += 1;

        let n = controller.moves_played();
        assert_eq!(controller.board().mark_count(), n);
        let expected_turn = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(controller.turn(), expected_turn);

        for idx in 0..TOTAL_CELLS {
            let mut next = controller.clone();
            let accepted = next.apply_move(idx);

            let legal = !controller.status().is_over()
                && controller.board().is_empty(Pos::from_index(idx));
            assert_eq!(accepted, legal);

            if accepted {
                assert_eq!(next.board().get(Pos::from_index(idx)), expected_turn);
                walk(&next, visited);
            } else {
                assert_eq!(next.board(), controller.board());
                assert_eq!(next.turn(), controller.turn());
                assert_eq!(next.status(), controller.status());
            }
        }
    }

    #[test]
    fn test_every_reachable_game_keeps_invariants() {
        let mut visited = 0;
        walk(&BoardController::new(), &mut visited);
        // Known node count of the complete Tic-Tac-Toe game tree
        assert_eq!(visited, 549_946);
    }

    #[test]
    fn test_click_moves_and_renders() {
        let mut controller = BoardController::new();
        let mut shell = RecordingShell::default();

        assert_eq!(controller.click(4, &mut shell), ClickOutcome::Moved);
        assert_eq!(shell.calls, vec![ShellCall::Render(*controller.board())]);
    }

    #[test]
    fn test_click_on_occupied_cell_draws_nothing() {
        let mut controller = BoardController::new();
        let mut shell = RecordingShell::default();
        controller.click(4, &mut shell);
        shell.calls.clear();

        assert_eq!(controller.click(4, &mut shell), ClickOutcome::Ignored);
        assert!(shell.calls.is_empty());
    }

    #[test]
    fn test_winning_click_highlights_then_reports() {
        let mut controller = BoardController::new();
        let mut shell = RecordingShell::default();
        for idx in [0, 3, 1, 4] {
            controller.click(idx, &mut shell);
        }
        shell.calls.clear();

        assert_eq!(controller.click(2, &mut shell), ClickOutcome::Moved);
        assert_eq!(
            shell.calls,
            vec![
                ShellCall::Render(*controller.board()),
                ShellCall::Highlight(vec![0, 1, 2]),
                ShellCall::ShowResult(controller.status()),
            ]
        );
    }

    #[test]
    fn test_draw_click_reports_without_highlight() {
        let mut controller = BoardController::new();
        let mut shell = RecordingShell::default();
        for idx in [0, 1, 2, 4, 3, 5, 7, 6] {
            controller.click(idx, &mut shell);
        }
        shell.calls.clear();

        controller.click(8, &mut shell);
        assert_eq!(
            shell.calls,
            vec![
                ShellCall::Render(*controller.board()),
                ShellCall::ShowResult(GameStatus::Draw),
            ]
        );
    }

    #[test]
    fn test_click_after_game_end_resets() {
        let mut controller = BoardController::new();
        let mut shell = RecordingShell::default();
        for idx in [0, 3, 1, 4, 2] {
            controller.click(idx, &mut shell);
        }
        shell.calls.clear();

        // The click resets; it does not also place a mark at 8.
        assert_eq!(controller.click(8, &mut shell), ClickOutcome::Reset);
        assert_eq!(controller.board(), &Board::new());
        assert_eq!(controller.status(), GameStatus::InProgress);
        assert_eq!(
            shell.calls,
            vec![ShellCall::Render(Board::new()), ShellCall::Highlight(vec![])]
        );
    }
}
