//! Fixed-capacity Kalah board.
//!
//! Layout for `P` pits per player:
//!
//! ```text
//! index:  0 .. P-1     P          P+1 .. 2P    2P+1
//!         P1 pits      P1 store   P2 pits      P2 store
//! ```
//!
//! Sowing runs in increasing index order and wraps from `2P+1` to `0`.

use std::fmt;
use std::ops::Range;

use crate::error::ConfigError;
use crate::types::Player;

/// Largest supported number of pits on one side.
pub const MAX_PITS_PER_PLAYER: usize = 15;
/// Capacity of the backing array: two sides of pits plus two stores.
pub const MAX_CELLS: usize = 2 * (MAX_PITS_PER_PLAYER + 1);

/// Most stones a board may hold in total. Every pit, store and side sum
/// then fits in both `u32` and `i32`.
pub const MAX_TOTAL_STONES: u64 = i32::MAX as u64;

pub const DEFAULT_PITS_PER_PLAYER: usize = 6;
pub const DEFAULT_STONES_PER_PIT: u32 = 4;

/// Stone counts for every pit and store.
///
/// The board is a small `Copy` value so search can hand every explored node
/// its own board. Cells past `len()` are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u32; MAX_CELLS],
    pits_per_player: usize,
}

impl Board {
    /// Board with `stones_per_pit` in every pit and both stores empty.
    pub fn new(pits_per_player: usize, stones_per_pit: u32) -> Result<Self, ConfigError> {
        check_pit_count(pits_per_player)?;
        check_total(2 * pits_per_player as u64 * u64::from(stones_per_pit))?;
        Ok(Self::filled(pits_per_player, stones_per_pit))
    }

    fn filled(pits_per_player: usize, stones_per_pit: u32) -> Self {
        let mut board = Board {
            cells: [0; MAX_CELLS],
            pits_per_player,
        };
        for player in [Player::One, Player::Two] {
            for idx in board.pit_range(player) {
                board.cells[idx] = stones_per_pit;
            }
        }
        board
    }

    /// Board from raw cell values laid out as described in the module docs.
    pub fn from_cells(cells: &[u32]) -> Result<Self, ConfigError> {
        let len = cells.len();
        if len < 4 || len % 2 != 0 || len > MAX_CELLS {
            return Err(ConfigError::BoardLength(len));
        }
        let pits_per_player = len / 2 - 1;
        check_pit_count(pits_per_player)?;
        check_total(cells.iter().map(|&c| u64::from(c)).sum())?;

        let mut board = Board {
            cells: [0; MAX_CELLS],
            pits_per_player,
        };
        board.cells[..len].copy_from_slice(cells);
        Ok(board)
    }

    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    /// Number of cells in use, `2 * (pits_per_player + 1)`.
    pub fn len(&self) -> usize {
        2 * (self.pits_per_player + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.total_stones() == 0
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells[..self.len()]
    }

    #[inline]
    pub fn get(&self, idx: usize) -> u32 {
        self.cells()[idx]
    }

    #[inline]
    pub fn store_index(&self, player: Player) -> usize {
        match player {
            Player::One => self.pits_per_player,
            Player::Two => 2 * self.pits_per_player + 1,
        }
    }

    /// Board indices of `player`'s pits, nearest-to-start first.
    #[inline]
    pub fn pit_range(&self, player: Player) -> Range<usize> {
        match player {
            Player::One => 0..self.pits_per_player,
            Player::Two => self.pits_per_player + 1..2 * self.pits_per_player + 1,
        }
    }

    /// Board index of the 1-indexed `pit` on `player`'s side.
    ///
    /// The caller checks `1 <= pit <= pits_per_player`.
    #[inline]
    pub fn pit_index(&self, player: Player, pit: usize) -> usize {
        self.pit_range(player).start + pit - 1
    }

    /// The pit facing `idx` across the board.
    ///
    /// Pit `k` counted from the start of one side faces pit `k` counted from
    /// the end of the other side, which on this layout is always `2P - idx`.
    #[inline]
    pub fn opposite(&self, idx: usize) -> usize {
        2 * self.pits_per_player - idx
    }

    /// Which side's pits contain `idx`. Stores belong to no side.
    pub fn pit_owner(&self, idx: usize) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.pit_range(p).contains(&idx))
    }

    #[inline]
    pub fn store(&self, player: Player) -> u32 {
        self.get(self.store_index(player))
    }

    /// Stones still in play on `player`'s side.
    pub fn side_stones(&self, player: Player) -> u32 {
        self.cells[self.pit_range(player)].iter().sum()
    }

    pub fn side_is_empty(&self, player: Player) -> bool {
        self.side_stones(player) == 0
    }

    pub fn total_stones(&self) -> u32 {
        self.cells().iter().sum()
    }

    /// Index after `idx`, wrapping around the end of the board.
    #[inline]
    pub(crate) fn next_index(&self, idx: usize) -> usize {
        if idx + 1 < self.len() {
            idx + 1
        } else {
            0
        }
    }

    #[inline]
    pub(crate) fn add(&mut self, idx: usize, stones: u32) {
        self.cells[idx] += stones;
    }

    /// Empties the cell and returns what it held.
    #[inline]
    pub(crate) fn take(&mut self, idx: usize) -> u32 {
        std::mem::take(&mut self.cells[idx])
    }

    /// Moves every stone left in `player`'s pits into `player`'s store.
    pub(crate) fn sweep_side(&mut self, player: Player) -> u32 {
        let mut swept = 0;
        for idx in self.pit_range(player) {
            swept += self.take(idx);
        }
        let store = self.store_index(player);
        self.add(store, swept);
        swept
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::filled(DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("pits_per_player", &self.pits_per_player)
            .field("cells", &self.cells())
            .finish()
    }
}

fn check_pit_count(pits_per_player: usize) -> Result<(), ConfigError> {
    if pits_per_player == 0 || pits_per_player > MAX_PITS_PER_PLAYER {
        return Err(ConfigError::PitCount {
            got: pits_per_player,
            max: MAX_PITS_PER_PLAYER,
        });
    }
    Ok(())
}

fn check_total(total: u64) -> Result<(), ConfigError> {
    if total > MAX_TOTAL_STONES {
        return Err(ConfigError::TooManyStones {
            total,
            max: MAX_TOTAL_STONES,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
