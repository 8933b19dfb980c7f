//! FEN-to-GameState parser.
//!
//! Builds a fully-populated state from a Forsyth-Edwards Notation string:
//! board, side to move, castling rights, en-passant target, clocks, and the
//! king locations derived from the board. The move log starts empty.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let invalid = |msg: &str| ChessErrors::InvalidFENstring(format!("{msg}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state.board).map_err(|msg| invalid(&msg))?;
    game_state.side_to_move = parse_side_to_move(side_part).ok_or_else(|| invalid("bad side to move"))?;
    game_state.castling_rights =
        parse_castling_rights(castling_part).ok_or_else(|| invalid("bad castling rights"))?;
    game_state.en_passant_square =
        parse_en_passant_square(en_passant_part, game_state.side_to_move)
            .ok_or_else(|| invalid("bad en-passant square"))?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid("bad halfmove clock"))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid("bad fullmove number"))?;

    for color in [Color::White, Color::Black] {
        let king = Piece::new(color, PieceKind::King);
        let mut kings = game_state
            .board
            .squares_of(color)
            .filter(|(_, piece)| *piece == king)
            .map(|(sq, _)| sq);
        let location = kings
            .next()
            .ok_or_else(|| invalid(&format!("no {color:?} king")))?;
        if kings.next().is_some() {
            return Err(invalid(&format!("more than one {color:?} king")));
        }
        game_state.king_locations[color.index()] = location;
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| format!("invalid piece character '{ch}'"))?;

            if col >= 8 {
                return Err("board rank has too many files".to_owned());
            }

            board.place(Square::at(row as u8, col as u8), piece);
            col += 1;
        }

        if col != 8 {
            return Err("board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Option<Color> {
    match side_part {
        "w" => Some(Color::White),
        "b" => Some(Color::Black),
        _ => None,
    }
}

fn parse_castling_rights(castling_part: &str) -> Option<CastlingRights> {
    if castling_part == "-" {
        return Some(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return None,
        };
    }

    Some(rights)
}

/// The target must sit directly behind a pawn of the side that just moved:
/// rank 6 when White is to move, rank 3 when Black is.
fn parse_en_passant_square(en_passant_part: &str, side_to_move: Color) -> Option<Option<Square>> {
    if en_passant_part == "-" {
        return Some(None);
    }

    let square = algebraic_to_square(en_passant_part).ok()?;
    let mover = side_to_move.opposite();
    let expected_row = mover.pawn_start_row() as i8 + mover.forward();
    (square.row() as i8 == expected_row).then_some(Some(square))
}
