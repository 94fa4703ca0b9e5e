//! WASM bindings for boop-core
//!
//! Provides a JavaScript-friendly API for the game logic.

use crate::{GameState, Player, Pos, Tier, BOARD_SIZE};
use wasm_bindgen::prelude::*;

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            inner: GameState::new(),
        }
    }

    /// Start over (the "New Game" button)
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current player (1 or 2)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player() as u8
    }

    /// Winner. Returns 0 (none), 1 (P1), or 2 (P2)
    pub fn winner(&self) -> u8 {
        match self.inner.winner() {
            None => 0,
            Some(Player::One) => 1,
            Some(Player::Two) => 2,
        }
    }

    /// Check if the game is over
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Place a piece for the current player. Tier: 1 = kitten, 2 = cat.
    /// Returns the outcome as a JS value:
    /// "Continue", { Rejected: reason } or { Won: player }.
    /// Returns null for an invalid tier code.
    #[wasm_bindgen(js_name = placePiece)]
    pub fn place_piece(&mut self, row: u8, col: u8, tier: u8) -> JsValue {
        if tier < 1 {
            return JsValue::NULL;
        }
        let tier = match Tier::from_index(tier as usize - 1) {
            Some(t) => t,
            None => return JsValue::NULL,
        };
        let player = self.inner.current_player();
        let outcome = self.inner.place_at(player, tier, row, col);
        serde_wasm_bindgen::to_value(&outcome).unwrap_or(JsValue::NULL)
    }

    /// Get the cell occupant at (row, col) as [player, tier]
    /// (player 1|2, tier 1=kitten|2=cat). Returns empty array for an
    /// empty cell or out-of-range coordinates.
    #[wasm_bindgen(js_name = cellAt)]
    pub fn cell_at(&self, row: u8, col: u8) -> Vec<u8> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return vec![];
        }
        match self.inner.occupant(Pos::from_row_col(row, col)) {
            Some(piece) => vec![piece.owner as u8, piece.tier as u8 + 1],
            None => vec![],
        }
    }

    /// Get pool counts for a player as [kittens, cats]
    pub fn pool(&self, player: u8) -> Vec<u8> {
        match Player::from_bits(player) {
            Some(p) => {
                let pool = self.inner.pool(p);
                vec![pool.kittens(), pool.cats()]
            }
            None => vec![],
        }
    }

    /// Get a player's winning cat line as [row, col, row, col, row, col]
    /// Returns empty array if no such line
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        if let Some(winner) = self.inner.winner() {
            if let Some(line) = self.inner.board().find_line(winner, Tier::Cat) {
                return line.iter().flat_map(|pos| [pos.row(), pos.col()]).collect();
            }
        }
        vec![]
    }

    /// Get game result: "ongoing", "player_one_wins", or "player_two_wins"
    pub fn result(&self) -> String {
        match self.inner.winner() {
            Some(Player::One) => "player_one_wins".to_string(),
            Some(Player::Two) => "player_two_wins".to_string(),
            None => "ongoing".to_string(),
        }
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame { inner: self.inner }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
