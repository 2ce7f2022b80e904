use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::types::{Color, Outcome, ParseMoveError, Position};

/// Number of consecutive skipped turns that ends the game.
const SKIPS_TO_END: u8 = 2;

/// Why an attempted turn was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Parse(#[from] ParseMoveError),
    #[error("illegal move")]
    Illegal,
    #[error("game is already over")]
    GameOver,
}

/// Turn controller: alternates play between the two colors, tracks
/// consecutive skips and detects the end of the game.
pub struct Game {
    board: Board,
    turn: Color,
    consecutive_skips: u8,
    game_over: bool,
    flipped: Vec<Position>,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Color::Black,
            consecutive_skips: 0,
            game_over: false,
            flipped: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move next.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Discs captured by the most recent successful move. Empty after a
    /// skip and at the start of the game.
    pub fn last_flipped(&self) -> &[Position] {
        &self.flipped
    }

    /// True iff the side to move has at least one legal move.
    pub fn current_player_can_move(&self) -> bool {
        self.board.has_legal_move(self.turn)
    }

    /// Forfeits the current turn and passes it to the opponent. The game
    /// ends once both players skip back to back; returns true when this
    /// skip ended it.
    pub fn skip_turn(&mut self) -> bool {
        self.consecutive_skips += 1;
        self.flipped.clear();
        self.turn = !self.turn;
        if self.consecutive_skips >= SKIPS_TO_END {
            self.game_over = true;
        }
        self.game_over
    }

    /// Plays one turn from raw input text: parses the coordinate, validates
    /// it for the side to move, then applies the flips, resets the skip
    /// counter and passes the turn. On any error the board and turn are
    /// unchanged.
    pub fn play(&mut self, input: &str) -> Result<Position, MoveError> {
        if self.game_over {
            return Err(MoveError::GameOver);
        }

        let pos: Position = input.parse()?;
        if !self.board.is_legal_move(self.turn, pos) {
            return Err(MoveError::Illegal);
        }

        self.flipped = self.board.place(self.turn, pos);
        self.consecutive_skips = 0;
        self.turn = !self.turn;
        Ok(pos)
    }

    /// Final result by disc majority.
    pub fn outcome(&self) -> Outcome {
        let (black, white) = self.board.count();
        if black > white {
            Outcome::BlackWins
        } else if white > black {
            Outcome::WhiteWins
        } else {
            Outcome::Tie
        }
    }

    /// Drives the game to completion over line-based input: renders the
    /// board before every turn, prompts the side to move, skips turns with
    /// no legal move and reports the result after both players skip in a
    /// row.
    ///
    /// Returns `Ok(None)` when the input ends before the game does; nothing
    /// further is printed on that path.
    pub fn run<R: BufRead, W: Write>(mut self, mut input: R, mut out: W) -> io::Result<Option<Outcome>> {
        let mut line = String::new();

        loop {
            writeln!(out, "{}", self.board)?;
            writeln!(out)?;

            if !self.current_player_can_move() {
                writeln!(out, "{} has no valid moves. Skipping turn.", self.turn)?;
                writeln!(out)?;
                if self.skip_turn() {
                    let outcome = self.outcome();
                    writeln!(out, "{outcome}")?;
                    return Ok(Some(outcome));
                }
                continue;
            }

            writeln!(out, "Enter move for {}: ", self.turn)?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match self.play(line.trim_end()) {
                Ok(_) => writeln!(out)?,
                Err(MoveError::Parse(err)) => {
                    writeln!(out, "Invalid move: {err}")?;
                    writeln!(out)?;
                }
                Err(MoveError::Illegal) | Err(MoveError::GameOver) => {
                    writeln!(out, "Invalid move. Try again.")?;
                }
            }
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Color) {
        self.board = board;
        self.turn = turn;
        self.consecutive_skips = 0;
        self.game_over = false;
        self.flipped.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
