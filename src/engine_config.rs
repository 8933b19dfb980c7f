//! Runtime configuration for the engine facade.

use log::warn;

use crate::game_state::chess_types::PieceKind;

/// Environment variable read by `EngineConfig::from_env`.
pub const DEFAULT_PROMOTION_ENV: &str = "DUEL_CHESS_DEFAULT_PROMOTION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Piece used when a promoting move is requested without a choice.
    /// `None` makes such requests illegal, forcing callers to pick one of
    /// the four generated promotion moves.
    pub default_promotion: Option<PieceKind>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_promotion: Some(PieceKind::Queen),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `DUEL_CHESS_DEFAULT_PROMOTION` (`q`, `r`, `b`,
    /// `n` or `none`). Unrecognised values keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(DEFAULT_PROMOTION_ENV) {
            match parse_promotion_setting(&value) {
                Some(setting) => config.default_promotion = setting,
                None => warn!("ignoring {DEFAULT_PROMOTION_ENV}={value:?}"),
            }
        }
        config
    }
}

fn parse_promotion_setting(value: &str) -> Option<Option<PieceKind>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "none" | "-" => Some(None),
        "q" | "queen" => Some(Some(PieceKind::Queen)),
        "r" | "rook" => Some(Some(PieceKind::Rook)),
        "b" | "bishop" => Some(Some(PieceKind::Bishop)),
        "n" | "knight" => Some(Some(PieceKind::Knight)),
        _ => None,
    }
}
