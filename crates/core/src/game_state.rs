//! Game state module - grid, active piece and the per-frame state machine
//!
//! Every player action and every gravity step is computed as a candidate
//! piece, checked against the grid, and committed only when it fits. The
//! active piece is therefore always in a valid placement while the game is
//! running; a rejected move simply leaves it where it was.
//!
//! States are `Running` and `GameOver`. The only way into `GameOver` is a
//! freshly spawned piece that collides with the grid.

use log::{debug, info};
use rand::Rng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::render::BlockSink;
use crate::rng::PieceSource;
use crate::types::{GameAction, RunState};

/// What a gravity tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing changed (the game is already over)
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The active piece settled, `rows_cleared` rows were removed and the
    /// next piece spawned
    Locked { rows_cleared: usize },
    /// The piece settled and the next one had no room
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = Xoshiro256StarStar> {
    grid: Grid,
    active: ActivePiece,
    run_state: RunState,
    source: PieceSource<R>,
    /// Total rows removed this game
    rows_cleared: u32,
    /// Pieces spawned this game, including the first
    pieces_spawned: u32,
}

impl GameState {
    /// New game on an empty default-sized grid
    pub fn new(seed: u64) -> Self {
        Self::with_grid(Grid::default(), seed)
    }

    /// New game on a prepared grid
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        Self::with_source(grid, PieceSource::new(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// New game drawing its pieces from `source`.
    ///
    /// The first piece is spawned right away; on a grid with no room for it
    /// the game starts (and stays) over.
    pub fn with_source(grid: Grid, mut source: PieceSource<R>) -> Self {
        let (shape, color) = source.next_spawn();
        let active = ActivePiece::spawn(shape, color, grid.width());
        let mut state = Self {
            grid,
            active,
            run_state: RunState::Running,
            source,
            rows_cleared: 0,
            pieces_spawned: 0,
        };
        state.enter_spawned();
        info!(
            "new game on {}x{} grid",
            state.grid.width(),
            state.grid.height()
        );
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Replace the active piece if the new placement fits.
    ///
    /// Returns false (and changes nothing) when it collides or the game is
    /// over.
    pub fn set_active(&mut self, piece: ActivePiece) -> bool {
        self.commit(piece)
    }

    /// Spawn a fresh random piece at the top.
    ///
    /// If it collides immediately the game is over and false is returned.
    pub fn spawn_piece(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        let (shape, color) = self.source.next_spawn();
        self.active = ActivePiece::spawn(shape, color, self.grid.width());
        self.enter_spawned()
    }

    fn enter_spawned(&mut self) -> bool {
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        if self.grid.collides(&self.active) {
            self.run_state = RunState::GameOver;
            info!(
                "game over: no room for {:?} after {} pieces, {} rows cleared",
                self.active.kind(),
                self.pieces_spawned,
                self.rows_cleared
            );
            return false;
        }
        debug!(
            "spawned {:?} ({:?}) at {:?}",
            self.active.kind(),
            self.active.color(),
            self.active.position()
        );
        true
    }

    fn commit(&mut self, candidate: ActivePiece) -> bool {
        if self.is_game_over() || self.grid.collides(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Try to move the active piece; returns whether it moved
    pub fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.active.shifted(dx, dy);
        self.commit(candidate)
    }

    /// Try to rotate the active piece; returns whether it rotated
    pub fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated();
        self.commit(candidate)
    }

    /// Apply a player action. Returns whether the piece changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            GameAction::SoftDrop => self.try_shift(0, 1),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Gravity step: fall one row, or settle the piece where it is.
    ///
    /// Settling merges the piece, clears full rows and spawns the next piece.
    pub fn tick(&mut self) -> TickEvent {
        if self.is_game_over() {
            return TickEvent::Idle;
        }

        if self.try_shift(0, 1) {
            return TickEvent::Fell;
        }

        self.grid.merge(&self.active);
        let rows = self.grid.clear_full_rows();
        self.rows_cleared = self.rows_cleared.wrapping_add(rows as u32);
        debug!(
            "locked {:?} at {:?}, cleared {} rows",
            self.active.kind(),
            self.active.position(),
            rows
        );

        if self.spawn_piece() {
            TickEvent::Locked { rows_cleared: rows }
        } else {
            TickEvent::GameOver
        }
    }

    /// One frame: apply the pending actions in order, then run gravity.
    ///
    /// A finished game ignores the actions and returns [`TickEvent::Idle`].
    pub fn step<I>(&mut self, actions: I) -> TickEvent
    where
        I: IntoIterator<Item = GameAction>,
    {
        if self.is_game_over() {
            return TickEvent::Idle;
        }
        for action in actions {
            self.apply_action(action);
        }
        self.tick()
    }

    /// Draw the grid, then the active piece while the game is running.
    ///
    /// After game over only the settled grid is drawn; the piece that did not
    /// fit is left out.
    pub fn render<S: BlockSink + ?Sized>(&self, sink: &mut S, block_size: u32) {
        self.grid.render(sink, block_size);
        if !self.is_game_over() {
            self.active.render(sink, block_size);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
