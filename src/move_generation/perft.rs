//! Perft: exhaustive leaf counting for move-generation regression checks.
//!
//! Counts are accumulated with make/unmake on one scratch copy of the root
//! position. Leaf statistics classify the last move played.

use log::trace;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_unchecked, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::chess_move::ChessMove;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub const KIWIPETE_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
pub const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
pub const POSITION_4_FEN: &str =
    "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";
pub const POSITION_5_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

/// A position with published leaf counts; `nodes[d - 1]` is the count at depth `d`.
#[derive(Debug, Clone, Copy)]
pub struct PerftReference {
    pub name: &'static str,
    pub fen: &'static str,
    pub nodes: &'static [u64],
}

pub const PERFT_REFERENCES: [PerftReference; 5] = [
    PerftReference {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        nodes: &[20, 400, 8902, 197_281],
    },
    PerftReference {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        nodes: &[48, 2039, 97_862],
    },
    PerftReference {
        name: "position_3",
        fen: POSITION_3_FEN,
        nodes: &[14, 191, 2812, 43_238],
    },
    PerftReference {
        name: "position_4",
        fen: POSITION_4_FEN,
        nodes: &[6, 264, 9467],
    },
    PerftReference {
        name: "position_5",
        fen: POSITION_5_FEN,
        nodes: &[44, 1486, 62_379],
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, depth, &mut total);
    total
}

/// Leaf node count only; skips the per-leaf classification of `perft`.
pub fn perft_nodes<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> u64 {
    let mut scratch = game_state.clone();
    count_nodes(generator, &mut scratch, depth)
}

/// Node counts per root move, in generation order, as `(lan, nodes)`.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut scratch = game_state.clone();
    let root_moves = generator.generate_legal_moves(&scratch);
    let mut out = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        apply_move_unchecked(&mut scratch, mv);
        let nodes = count_nodes(generator, &mut scratch, depth - 1);
        unmake_move(&mut scratch);

        let lan = move_to_long_algebraic(&mv);
        trace!("{lan}: {nodes}");
        out.push((lan, nodes));
    }

    out
}

fn count_nodes<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generator.generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        apply_move_unchecked(game_state, mv);
        nodes += count_nodes(generator, game_state, depth - 1);
        unmake_move(game_state);
    }
    nodes
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) {
    let moves = generator.generate_legal_moves(game_state);
    for mv in moves {
        apply_move_unchecked(game_state, mv);
        if depth == 1 {
            counts.merge(classify_leaf(generator, game_state, &mv));
        } else {
            perft_recurse(generator, game_state, depth - 1, counts);
        }
        unmake_move(game_state);
    }
}

fn classify_leaf<G: MoveGenerator>(
    generator: &G,
    game_after_move: &GameState,
    mv: &ChessMove,
) -> PerftCounts {
    let gives_check = is_king_in_check(game_after_move, game_after_move.side_to_move);
    let is_checkmate =
        gives_check && generator.generate_legal_moves(game_after_move).is_empty();

    PerftCounts {
        nodes: 1,
        captures: mv.is_capture() as u64,
        en_passant: mv.is_en_passant as u64,
        castles: mv.is_castle() as u64,
        promotions: mv.promotion.is_some() as u64,
        checks: gives_check as u64,
        checkmates: is_checkmate as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::LegalMoveGenerator;

    /// Restricts a real generator to knight moves.
    struct KnightsOnlyGenerator;

    impl MoveGenerator for KnightsOnlyGenerator {
        fn generate_legal_moves(&self, game_state: &GameState) -> Vec<ChessMove> {
            LegalMoveGenerator
                .generate_legal_moves(game_state)
                .into_iter()
                .filter(|mv| mv.piece_moved.kind == PieceKind::Knight)
                .collect()
        }
    }

    fn nodes(fen: &str, depth: u8) -> u64 {
        let game = GameState::from_fen(fen).expect("perft FEN parses");
        perft_nodes(&LegalMoveGenerator, &game, depth)
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &game, 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_uses_the_supplied_generator() {
        let game = GameState::new_game();
        assert_eq!(perft(&KnightsOnlyGenerator, &game, 1).nodes, 4);
        assert_eq!(perft(&KnightsOnlyGenerator, &game, 2).nodes, 16);
    }

    #[test]
    fn start_position_matches_reference_counts() {
        assert_eq!(nodes(STARTING_POSITION_FEN, 1), 20);
        assert_eq!(nodes(STARTING_POSITION_FEN, 2), 400);

        let game = GameState::new_game();
        let counts = perft(&LegalMoveGenerator, &game, 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("FEN parses");

        let d1 = perft(&LegalMoveGenerator, &game, 1);
        assert_eq!(d1.nodes, 48);
        assert_eq!(d1.captures, 8);
        assert_eq!(d1.castles, 2);

        let d2 = perft(&LegalMoveGenerator, &game, 2);
        assert_eq!(d2.nodes, 2039);
        assert_eq!(d2.captures, 351);
        assert_eq!(d2.en_passant, 1);
        assert_eq!(d2.castles, 91);
        assert_eq!(d2.checks, 3);
    }

    #[test]
    fn endgame_position_matches_reference_counts() {
        assert_eq!(nodes(POSITION_3_FEN, 1), 14);
        assert_eq!(nodes(POSITION_3_FEN, 2), 191);

        let game = GameState::from_fen(POSITION_3_FEN).expect("FEN parses");
        let d3 = perft(&LegalMoveGenerator, &game, 3);
        assert_eq!(d3.nodes, 2812);
        assert_eq!(d3.captures, 209);
        assert_eq!(d3.en_passant, 2);
        assert_eq!(d3.checks, 267);
    }

    #[test]
    fn promotion_heavy_positions_match_reference_counts() {
        assert_eq!(nodes(POSITION_4_FEN, 1), 6);
        let d2 = perft(
            &LegalMoveGenerator,
            &GameState::from_fen(POSITION_4_FEN).expect("FEN parses"),
            2,
        );
        assert_eq!(d2.nodes, 264);
        assert_eq!(d2.promotions, 48);
        assert_eq!(d2.castles, 6);

        assert_eq!(nodes(POSITION_5_FEN, 1), 44);
        assert_eq!(nodes(POSITION_5_FEN, 2), 1486);
    }

    #[test]
    fn reference_table_shallow_depths() {
        for reference in PERFT_REFERENCES {
            for (depth, expected) in reference.nodes.iter().take(2).enumerate() {
                assert_eq!(
                    nodes(reference.fen, depth as u8 + 1),
                    *expected,
                    "{} depth {}",
                    reference.name,
                    depth + 1
                );
            }
        }
    }

    #[test]
    fn divide_sums_to_total() {
        let game = GameState::new_game();
        let divide = perft_divide(&LegalMoveGenerator, &game, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, n)| *n == 20));
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
