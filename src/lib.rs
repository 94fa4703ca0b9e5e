//! Boop game logic with an explicit per-cell board representation.
//!
//! # Board Representation
//!
//! ```text
//! 6x6 grid, row-major. Each cell holds at most one piece:
//!   Option<Piece> where Piece = { owner: Player, tier: Tier }
//!
//! Cell indices (row-major order):
//!   (0,0)=0   (0,1)=1  ... (0,5)=5
//!   (1,0)=6   (1,1)=7  ... (1,5)=11
//!   ...
//!   (5,0)=30  (5,1)=31 ... (5,5)=35
//! ```
//!
//! Each player starts with 8 kittens in hand and no cats. Cats only come
//! into existence through graduation, so a player's combined kitten+cat
//! count across board and pool is always exactly 8.
//!
//! # Turn Pipeline
//!
//! ```text
//! validate -> place -> boop -> graduate -> win check -> advance turn
//! ```
//!
//! Placing a piece "boops" the 8 neighboring pieces one cell further away
//! (cats cannot be booped by kittens). Pieces pushed off the board, or into
//! an occupied cell, return to their owner's pool. Three aligned kittens of
//! one player graduate into three cats in that player's pool. A player wins
//! with three aligned cats or all 8 cats on the board at once.

use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
pub mod wasm;

/// Board edge length.
pub const BOARD_SIZE: u8 = 6;

/// Total pieces per player (initial kitten supply; cats are converted kittens).
pub const PIECES_PER_PLAYER: u8 = 8;

/// Pieces removed (and cats gained) by one graduation.
const GRADUATION_RUN: u8 = 3;

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert from u8 (1 or 2) to Player.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Player> {
        match bits {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Pool/array index for this player (0 or 1).
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

/// Piece tier. Cats are strictly dominant in the boop interaction:
/// any placement boops an adjacent kitten, only a cat boops an adjacent cat.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tier {
    Kitten = 0,
    Cat = 1,
}

impl Tier {
    /// Convert from index (0 or 1) to Tier.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Tier> {
        match idx {
            0 => Some(Tier::Kitten),
            1 => Some(Tier::Cat),
            _ => None,
        }
    }

    /// Get both tiers as an iterator.
    pub fn all() -> impl Iterator<Item = Tier> {
        [Tier::Kitten, Tier::Cat].into_iter()
    }
}

/// A piece on the board: owner and tier as an explicit tagged pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub tier: Tier,
}

/// Position on the 6x6 board (0-35, row-major).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos(pub u8);

impl Pos {
    /// Create a position from row and column (0-5 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Pos {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Pos(row * BOARD_SIZE + col)
    }

    /// Get the row (0-5).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    /// Get the column (0-5).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Check if this is a valid position (0-35).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 < BOARD_SIZE * BOARD_SIZE
    }

    /// Step one cell along a direction vector. Returns None off-board.
    #[inline]
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Pos> {
        let row = self.row() as i8 + drow;
        let col = self.col() as i8 + dcol;
        if row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8 {
            Some(Pos::from_row_col(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 36 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Pos)
    }
}

/// A player's supply of not-yet-placed pieces, by tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Pool {
    kittens: u8,
    cats: u8,
}

impl Pool {
    /// Fresh pool: 8 kittens, no cats.
    #[inline]
    fn new() -> Pool {
        Pool {
            kittens: PIECES_PER_PLAYER,
            cats: 0,
        }
    }

    /// Kittens in hand.
    #[inline]
    pub fn kittens(&self) -> u8 {
        self.kittens
    }

    /// Cats in hand.
    #[inline]
    pub fn cats(&self) -> u8 {
        self.cats
    }

    /// Count in hand for a tier.
    #[inline]
    pub fn count(&self, tier: Tier) -> u8 {
        match tier {
            Tier::Kitten => self.kittens,
            Tier::Cat => self.cats,
        }
    }

    /// Remove one piece of the given tier. Caller must have validated count > 0.
    #[inline]
    fn take(&mut self, tier: Tier) {
        match tier {
            Tier::Kitten => {
                debug_assert!(self.kittens > 0);
                self.kittens -= 1;
            }
            Tier::Cat => {
                debug_assert!(self.cats > 0);
                self.cats -= 1;
            }
        }
    }

    /// Return one piece of the given tier (booped off-board or collision).
    #[inline]
    fn give(&mut self, tier: Tier) {
        match tier {
            Tier::Kitten => self.kittens += 1,
            Tier::Cat => self.cats += 1,
        }
    }
}

/// The 6x6 board. Each cell holds at most one piece; that invariant is
/// structural in the representation (no layered grids to fall out of sync).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// The 8 neighbor direction vectors (boop targets).
    const DIRECTIONS: [(i8, i8); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    /// The 4 line direction families, in scan order: horizontal, vertical,
    /// diagonal-down-right, diagonal-down-left.
    const LINE_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

    /// Create a new empty board.
    #[inline]
    pub fn new() -> Board {
        Board {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Get the piece at a position, if any.
    #[inline]
    pub fn piece(&self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Check if a cell is empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.piece(pos).is_none()
    }

    /// Put a piece on an empty cell.
    /// Does NOT validate - caller must ensure the cell is empty.
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, piece: Piece) {
        debug_assert!(self.is_empty(pos));
        self.cells[pos.row() as usize][pos.col() as usize] = Some(piece);
    }

    /// Remove and return the piece at a position.
    #[inline]
    pub(crate) fn take(&mut self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize].take()
    }

    /// Count pieces of each tier on board for a player.
    /// Returns [kitten_count, cat_count].
    pub fn pieces_on_board(&self, player: Player) -> [u8; 2] {
        let mut counts = [0u8; 2];
        for pos in Pos::all() {
            if let Some(piece) = self.piece(pos) {
                if piece.owner == player {
                    counts[piece.tier as usize] += 1;
                }
            }
        }
        counts
    }

    /// Check for a run of 3 cells equal to `piece` starting at `start` along `dir`.
    fn run_of_three(&self, start: Pos, dir: (i8, i8), piece: Piece) -> Option<[Pos; 3]> {
        let mut line = [start; 3];
        for (i, slot) in line.iter_mut().enumerate() {
            let row = start.row() as i8 + dir.0 * i as i8;
            let col = start.col() as i8 + dir.1 * i as i8;
            if row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8 {
                return None;
            }
            let pos = Pos::from_row_col(row as u8, col as u8);
            if self.piece(pos) != Some(piece) {
                return None;
            }
            *slot = pos;
        }
        Some(line)
    }

    /// Find the first run of 3 same-owner pieces of the given tier.
    ///
    /// Scan is row-major over start cells; per start cell the direction
    /// order is horizontal, vertical, diagonal-down-right, diagonal-down-left.
    /// Used for both graduation (kittens) and win detection (cats).
    pub fn find_line(&self, owner: Player, tier: Tier) -> Option<[Pos; 3]> {
        let piece = Piece { owner, tier };
        for start in Pos::all() {
            for dir in Self::LINE_DIRECTIONS {
                if let Some(line) = self.run_of_three(start, dir, piece) {
                    return Some(line);
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a placement was rejected. Rejections never mutate state; the caller
/// is expected to re-prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Rejection {
    /// The game already has a winner.
    GameOver,
    /// The acting player is not the current player.
    NotYourTurn,
    /// Coordinates outside the 6x6 board.
    OutOfBounds,
    /// The target cell already holds a piece.
    CellOccupied,
    /// The player has no piece of that tier in hand.
    PoolEmpty,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Rejection::GameOver => "game over",
            Rejection::NotYourTurn => "not your turn",
            Rejection::OutOfBounds => "out of bounds",
            Rejection::CellOccupied => "cell occupied",
            Rejection::PoolEmpty => "empty pool",
        };
        f.write_str(msg)
    }
}

/// Result of a placement request.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Outcome {
    /// Placement applied, game continues, turn passed to the opponent.
    Continue,
    /// Placement refused; state is unchanged.
    Rejected(Rejection),
    /// Placement applied and won the game for the placing player.
    Won(Player),
}

/// Full game state: board, pools, current player, winner.
///
/// Owned by the caller and mutated only through [`GameState::place`] (and
/// [`GameState::reset`]). A full turn resolves atomically: validate, place,
/// boop, graduate, win check, advance.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    pools: [Pool; 2],
    current_player: Player,
    winner: Option<Player>,
}

impl GameState {
    /// Fresh initial state: empty board, 8 kittens per player, Player One to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::new(),
            pools: [Pool::new(), Pool::new()],
            current_player: Player::One,
            winner: None,
        }
    }

    /// Re-initialize to the fresh state (the "New Game" action).
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    // ========== Read Accessors ==========

    /// The board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The piece occupying a cell, if any.
    #[inline]
    pub fn occupant(&self, pos: Pos) -> Option<Piece> {
        self.board.piece(pos)
    }

    /// A player's in-hand pool counts.
    #[inline]
    pub fn pool(&self, player: Player) -> Pool {
        self.pools[player.index()]
    }

    /// The player to move.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The winner, once the game is over.
    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Check if the game has ended.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    // ========== Placement ==========

    /// Validate a placement without applying it.
    ///
    /// Checks, in order: game not over, acting player's turn, position in
    /// bounds, cell empty, pool has a piece of that tier. No side effects.
    pub fn validate_placement(
        &self,
        player: Player,
        tier: Tier,
        pos: Pos,
    ) -> Result<(), Rejection> {
        if self.winner.is_some() {
            return Err(Rejection::GameOver);
        }
        if player != self.current_player {
            return Err(Rejection::NotYourTurn);
        }
        if !pos.is_valid() {
            return Err(Rejection::OutOfBounds);
        }
        if !self.board.is_empty(pos) {
            return Err(Rejection::CellOccupied);
        }
        if self.pools[player.index()].count(tier) == 0 {
            return Err(Rejection::PoolEmpty);
        }
        Ok(())
    }

    /// Place a piece for `player` and resolve the full turn.
    ///
    /// On success the boop pass, graduation, and win check run, and either
    /// the turn passes to the opponent (`Continue`) or the game ends
    /// (`Won`). On rejection the state is unchanged.
    pub fn place(&mut self, player: Player, tier: Tier, pos: Pos) -> Outcome {
        if let Err(reason) = self.validate_placement(player, tier, pos) {
            return Outcome::Rejected(reason);
        }

        self.pools[player.index()].take(tier);
        self.board.set(pos, Piece { owner: player, tier });

        self.apply_boop(pos, tier == Tier::Cat);
        self.apply_graduation(player);

        if self.has_won(player) {
            self.winner = Some(player);
            return Outcome::Won(player);
        }

        self.current_player = player.opponent();
        Outcome::Continue
    }

    /// Place by raw row/column coordinates. Out-of-range input rejects
    /// with `OutOfBounds` instead of panicking.
    pub fn place_at(&mut self, player: Player, tier: Tier, row: u8, col: u8) -> Outcome {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Outcome::Rejected(Rejection::OutOfBounds);
        }
        self.place(player, tier, Pos::from_row_col(row, col))
    }

    // ========== Boop (Chain Displacement) ==========

    /// Boop the 8 neighbors of a just-placed piece.
    ///
    /// All directions are evaluated against a snapshot of the board taken
    /// after the placement, so a piece relocated by one boop is never
    /// re-evaluated as newly adjacent within the same pass. Kittens are
    /// booped by any placement; cats only by a cat. A displaced piece moves
    /// one cell further along the placer-to-neighbor vector; pushed
    /// off-board or into an occupied cell it returns to its owner's pool.
    fn apply_boop(&mut self, origin: Pos, placer_is_cat: bool) {
        let snapshot = self.board;

        for (drow, dcol) in Board::DIRECTIONS {
            let neighbor = match origin.offset(drow, dcol) {
                Some(pos) => pos,
                None => continue,
            };
            let piece = match snapshot.piece(neighbor) {
                Some(piece) => piece,
                None => continue,
            };
            if piece.tier == Tier::Cat && !placer_is_cat {
                continue;
            }

            self.board.take(neighbor);
            match neighbor.offset(drow, dcol) {
                // Destinations sit two cells out from the placer, so snapshot
                // occupancy is the occupancy the pre-pass rule asks for.
                Some(dest) if snapshot.is_empty(dest) => self.board.set(dest, piece),
                _ => self.pools[piece.owner.index()].give(piece.tier),
            }
        }
    }

    // ========== Graduation ==========

    /// Graduate the placing player's three-in-a-row kittens.
    ///
    /// Removes exactly the matched cells (whichever direction family
    /// matched) and adds 3 cats to the owner's pool, then re-scans until no
    /// line remains. The kitten pool is untouched; those kittens were
    /// already paid for when placed. Only the mover's kittens are scanned.
    fn apply_graduation(&mut self, player: Player) {
        while let Some(line) = self.board.find_line(player, Tier::Kitten) {
            for pos in line {
                self.board.take(pos);
            }
            self.pools[player.index()].cats += GRADUATION_RUN;
        }
    }

    // ========== Win Detection ==========

    /// Check if the player who just moved has won: three aligned cats, or
    /// all 8 cats on the board at once.
    fn has_won(&self, player: Player) -> bool {
        if self.board.find_line(player, Tier::Cat).is_some() {
            return true;
        }
        self.board.pieces_on_board(player)[Tier::Cat as usize] == PIECES_PER_PLAYER
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
