//! Coordinate (long algebraic) notation: origin square, destination square
//! and an optional lowercase promotion letter, e.g. `"e2e4"` or `"e7e8q"`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.start));
    out.push_str(&square_to_algebraic(mv.end));
    if let Some(promo) = mv.promotion {
        out.push(promo.to_char());
    }
    out
}

/// Splits a coordinate string into `(from, to, promotion)` without consulting
/// any position.
pub fn parse_long_algebraic(
    long_algebraic: &str,
) -> Result<(Square, Square, Option<PieceKind>), ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned());

    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    let promotion = match long_algebraic[4..].chars().next() {
        None => None,
        Some(ch) => match PieceKind::from_char(ch) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(invalid()),
        },
    };

    Ok((from, to, promotion))
}

/// Resolves a coordinate string against the legal moves of `game_state`.
pub fn long_algebraic_to_move(
    game_state: &GameState,
    long_algebraic: &str,
) -> Result<ChessMove, ChessErrors> {
    let (from, to, promotion) = parse_long_algebraic(long_algebraic)?;
    legal_moves(game_state)
        .into_iter()
        .find(|mv| mv.start == from && mv.end == to && mv.promotion == promotion)
        .ok_or_else(|| ChessErrors::IllegalMove(long_algebraic.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let (from, to, promo) = parse_long_algebraic("e2e4").expect("e2e4 parses");
        assert_eq!(square_to_algebraic(from), "e2");
        assert_eq!(square_to_algebraic(to), "e4");
        assert_eq!(promo, None);

        let (_, _, promo) = parse_long_algebraic("a7a8n").expect("a7a8n parses");
        assert_eq!(promo, Some(PieceKind::Knight));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", "e2", "e2e", "e2e4k", "e2e4qq", "z2e4", "e2e9", "é2e4"] {
            assert!(parse_long_algebraic(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn resolves_against_the_legal_set() {
        let game = GameState::new_game();
        let mv = long_algebraic_to_move(&game, "g1f3").expect("Nf3 is legal");
        assert_eq!(mv.piece_moved, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(move_to_long_algebraic(&mv), "g1f3");

        assert_eq!(
            long_algebraic_to_move(&game, "e2e5"),
            Err(ChessErrors::IllegalMove("e2e5".to_owned()))
        );
    }
}
