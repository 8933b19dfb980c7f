//! Perft runner over a fixed suite of reference positions.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 5 --divide`

use std::time::Instant;

use duel_chess::game_state::chess_types::GameState;
use duel_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use duel_chess::move_generation::perft::{perft, perft_divide, PERFT_REFERENCES};

fn parse_arg_u8(flag: &str, default: u8) -> u8 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u8>() {
                return v.max(1);
            }
        }
    }
    default
}

fn has_flag(flag: &str) -> bool {
    std::env::args().any(|arg| arg == flag)
}

fn run_case(name: &str, fen: &str, depth: u8, expected: Option<u64>, divide: bool) -> Result<(), String> {
    let game = GameState::from_fen(fen).map_err(|e| e.to_string())?;
    let generator = LegalMoveGenerator;

    if divide {
        for (lan, nodes) in perft_divide(&generator, &game, depth) {
            println!("  {lan}: {nodes}");
        }
    }

    let started = Instant::now();
    let counts = perft(&generator, &game, depth);
    let elapsed_ms = started.elapsed().as_millis().max(1);
    let verdict = match expected {
        Some(nodes) if nodes == counts.nodes => "ok",
        Some(_) => "MISMATCH",
        None => "unchecked",
    };
    println!(
        "{name}: depth={depth} nodes={} [{verdict}] captures={} ep={} castles={} promotions={} checks={} mates={} elapsed_ms={elapsed_ms} nps={}",
        counts.nodes,
        counts.captures,
        counts.en_passant,
        counts.castles,
        counts.promotions,
        counts.checks,
        counts.checkmates,
        (counts.nodes as u128 * 1000) / elapsed_ms
    );
    if verdict == "MISMATCH" {
        return Err(format!("{name} depth {depth}: node count mismatch"));
    }
    Ok(())
}

fn main() -> Result<(), String> {
    let depth = parse_arg_u8("--depth", 3);
    let divide = has_flag("--divide");
    println!("perft run: depth={depth}");
    for reference in PERFT_REFERENCES {
        let expected = reference.nodes.get(usize::from(depth) - 1).copied();
        run_case(reference.name, reference.fen, depth, expected, divide)?;
    }
    Ok(())
}
