//! Authoritative game state.
//!
//! `GameState` owns the board, turn flag, incrementally tracked king squares,
//! castling rights, en-passant target, clocks and the move log used by
//! make/unmake. It is a plain value: every engine operation receives it
//! explicitly, so independent games can coexist in one process.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_game_state;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    // --- Side and state flags ---
    pub side_to_move: Color,
    /// Indexed by `Color::index()`; kept in sync by make/unmake.
    pub king_locations: [Square; 2],
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // --- Clocks / move counters ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // --- Make/unmake stack ---
    pub move_log: Vec<UndoState>,
}

impl GameState {
    /// Board with no pieces, White to move and no rights. King locations
    /// point at the home squares until pieces are placed.
    pub fn new_empty() -> Self {
        Self {
            board: Board::new_empty(),
            side_to_move: Color::White,
            king_locations: [
                Square::at(Color::White.home_row(), KING_HOME_COL),
                Square::at(Color::Black.home_row(), KING_HOME_COL),
            ],
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
        }
    }

    /// Standard initial position: White to move, full castling rights,
    /// no en-passant target, empty log.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_RANK.iter().enumerate() {
                let col = col as u8;
                game_state
                    .board
                    .place(Square::at(home, col), Piece::new(color, *kind));
                game_state
                    .board
                    .place(Square::at(pawns, col), Piece::new(color, PieceKind::Pawn));
            }
        }
        game_state.castling_rights = CASTLE_ALL;
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn has_castle_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last().map(|entry| &entry.mv)
    }

    /// Moves applied so far, oldest first.
    pub fn move_history(&self) -> impl Iterator<Item = &ChessMove> + '_ {
        self.move_log.iter().map(|entry| &entry.mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_game_state(self))
    }
}
