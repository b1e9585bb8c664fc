//! Game state tests - movement, gravity, locking and game over

use tetriz::core::{shape_for, ActivePiece, DrawList, GameState, Grid, TickEvent};
use tetriz::types::{
    Cell, Color, GameAction, RunState, ShapeKind, BLOCK_SIZE, GRID_HEIGHT, GRID_WIDTH,
};

fn piece(kind: ShapeKind, x: i32, y: i32) -> ActivePiece {
    ActivePiece::new(shape_for(kind), Color::Red, x, y)
}

fn run_until_locked(state: &mut GameState) -> TickEvent {
    for _ in 0..(GRID_HEIGHT * 2) {
        match state.tick() {
            TickEvent::Fell => continue,
            other => return other,
        }
    }
    panic!("piece never settled");
}

#[test]
fn test_new_game_spawns_first_piece() {
    let state = GameState::new(7);

    assert_eq!(state.run_state(), RunState::Running);
    assert!(!state.is_game_over());
    assert_eq!(state.pieces_spawned(), 1);
    assert_eq!(state.rows_cleared(), 0);
    assert!(state.grid().is_empty());

    let active = state.active();
    assert_eq!(active.y(), 0);
    assert_eq!(active.x(), GRID_WIDTH as i32 / 2 - active.shape().size() / 2);
    assert!(!state.grid().collides(active));
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);

    let script = [GameAction::MoveLeft, GameAction::Rotate, GameAction::SoftDrop];
    for i in 0..300 {
        let action = script[i % script.len()];
        assert_eq!(a.step([action]), b.step([action]));
        assert_eq!(a.active(), b.active());
    }
    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.pieces_spawned(), b.pieces_spawned());
}

#[test]
fn test_blocked_spawn_is_immediate_game_over() {
    let mut grid = Grid::default();
    for y in 0..3 {
        for x in 0..GRID_WIDTH as i32 {
            // leave one hole per row so nothing is cleared
            if x != 0 {
                grid.set(x, y, Cell::Filled(Color::Blue));
            }
        }
    }
    let before = grid.clone();

    let mut state = GameState::with_grid(grid, 1);
    assert!(state.is_game_over());
    assert_eq!(state.run_state(), RunState::GameOver);
    assert_eq!(state.pieces_spawned(), 1);

    // a finished game ignores input and gravity
    assert_eq!(state.step([GameAction::MoveLeft, GameAction::Rotate]), TickEvent::Idle);
    assert_eq!(state.tick(), TickEvent::Idle);
    assert!(!state.try_shift(0, 1));
    assert!(!state.spawn_piece());
    assert_eq!(state.grid(), &before);
}

#[test]
fn test_move_left_from_column_zero_is_rejected() {
    let mut state = GameState::new(1);
    assert!(state.set_active(piece(ShapeKind::O, 0, 5)));

    assert!(!state.try_shift(-1, 0));
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert_eq!(state.active().position(), (0, 5));

    assert!(state.apply_action(GameAction::MoveRight));
    assert_eq!(state.active().position(), (1, 5));
}

#[test]
fn test_move_right_stops_at_wall() {
    let mut state = GameState::new(1);
    assert!(state.set_active(piece(ShapeKind::O, 0, 5)));

    let mut moves = 0;
    while state.apply_action(GameAction::MoveRight) {
        moves += 1;
    }
    assert_eq!(moves, GRID_WIDTH as i32 - 2);
    assert_eq!(state.active().x(), GRID_WIDTH as i32 - 2);
}

#[test]
fn test_rotation_blocked_by_wall_keeps_state() {
    let mut state = GameState::new(1);
    // vertical I flush against the left wall
    let mut vertical = piece(ShapeKind::I, -2, 5);
    vertical.rotate();
    assert!(state.set_active(vertical));

    assert!(!state.try_rotate());
    assert!(!state.apply_action(GameAction::Rotate));
    assert_eq!(state.active(), &vertical);
    assert_eq!(state.active().rotation(), 1);
}

#[test]
fn test_rotation_blocked_by_filled_cell() {
    let mut grid = Grid::default();
    grid.set(6, 13, Cell::Filled(Color::Green));
    let mut state = GameState::with_grid(grid, 1);

    // lies on row 11; standing up it would cover (6, 10..=13)
    assert!(state.set_active(piece(ShapeKind::I, 4, 10)));
    assert!(!state.try_rotate());
    assert_eq!(state.active().rotation(), 0);
}

#[test]
fn test_set_active_rejects_colliding_piece() {
    let mut grid = Grid::default();
    grid.set(10, 10, Cell::Filled(Color::Yellow));
    let mut state = GameState::with_grid(grid, 1);
    let before = *state.active();

    assert!(!state.set_active(piece(ShapeKind::O, 9, 9)));
    assert_eq!(state.active(), &before);
    assert!(!state.set_active(piece(ShapeKind::O, -1, 3)));
}

#[test]
fn test_piece_may_sit_above_top() {
    let mut state = GameState::new(1);
    assert!(state.set_active(piece(ShapeKind::T, 5, -2)));
    assert_eq!(state.tick(), TickEvent::Fell);
    assert_eq!(state.active().position(), (5, -1));
}

#[test]
fn test_tick_falls_one_row() {
    let mut state = GameState::new(3);
    let (x, y) = state.active().position();

    assert_eq!(state.tick(), TickEvent::Fell);
    assert_eq!(state.active().position(), (x, y + 1));
    assert!(state.grid().is_empty());
}

#[test]
fn test_step_applies_actions_before_gravity() {
    let mut state = GameState::new(1);
    assert!(state.set_active(piece(ShapeKind::O, 5, 5)));

    let event = state.step([GameAction::MoveLeft, GameAction::MoveLeft, GameAction::SoftDrop]);
    assert_eq!(event, TickEvent::Fell);
    assert_eq!(state.active().position(), (3, 7));
}

#[test]
fn test_rejected_actions_do_not_stop_the_rest() {
    let mut state = GameState::new(1);
    assert!(state.set_active(piece(ShapeKind::O, 0, 5)));

    state.step([GameAction::MoveLeft, GameAction::MoveRight]);
    assert_eq!(state.active().position(), (1, 6));
}

#[test]
fn test_piece_locks_on_floor_and_next_spawns() {
    let mut state = GameState::new(1);
    let bottom = GRID_HEIGHT as i32 - 2;
    assert!(state.set_active(piece(ShapeKind::O, 0, bottom)));

    assert_eq!(state.tick(), TickEvent::Locked { rows_cleared: 0 });
    assert_eq!(state.grid().filled_count(), 4);
    assert_eq!(state.grid().get(0, bottom), Some(Cell::Filled(Color::Red)));
    assert_eq!(state.grid().get(1, bottom + 1), Some(Cell::Filled(Color::Red)));

    assert_eq!(state.pieces_spawned(), 2);
    assert_eq!(state.active().y(), 0);
}

#[test]
fn test_soft_drop_into_floor_is_rejected_then_locks() {
    let mut state = GameState::new(1);
    let bottom = GRID_HEIGHT as i32 - 2;
    assert!(state.set_active(piece(ShapeKind::O, 4, bottom)));

    assert!(!state.apply_action(GameAction::SoftDrop));
    assert_eq!(state.step([GameAction::SoftDrop]), TickEvent::Locked { rows_cleared: 0 });
}

#[test]
fn test_vertical_i_clears_single_gap_row() {
    let gap = 13;
    let bottom = GRID_HEIGHT as i32 - 1;
    let mut grid = Grid::default();
    for x in 0..GRID_WIDTH as i32 {
        if x != gap {
            grid.set(x, bottom, Cell::Filled(Color::Yellow));
        }
    }
    let mut state = GameState::with_grid(grid, 5);

    let mut vertical = piece(ShapeKind::I, gap - 2, 10);
    vertical.rotate();
    assert!(state.set_active(vertical));

    assert_eq!(run_until_locked(&mut state), TickEvent::Locked { rows_cleared: 1 });
    assert_eq!(state.rows_cleared(), 1);

    // the bottom row is gone; the rest of the I drops into its place
    assert_eq!(state.grid().filled_count(), 3);
    for y in bottom - 2..=bottom {
        assert_eq!(state.grid().get(gap, y), Some(Cell::Filled(Color::Red)));
    }
    assert_eq!(state.grid().get(0, bottom), Some(Cell::Empty));
}

#[test]
fn test_four_rows_cleared_at_once() {
    let gap = 0;
    let bottom = GRID_HEIGHT as i32 - 1;
    let mut grid = Grid::default();
    for y in bottom - 3..=bottom {
        for x in 1..GRID_WIDTH as i32 {
            grid.set(x, y, Cell::Filled(Color::Blue));
        }
    }
    let mut state = GameState::with_grid(grid, 5);

    let mut vertical = piece(ShapeKind::I, gap - 2, 0);
    vertical.rotate();
    assert!(state.set_active(vertical));

    assert_eq!(run_until_locked(&mut state), TickEvent::Locked { rows_cleared: 4 });
    assert_eq!(state.rows_cleared(), 4);
    assert!(state.grid().is_empty());
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut state = GameState::new(11);

    let mut outcome = None;
    for _ in 0..10_000 {
        match state.tick() {
            TickEvent::GameOver => {
                outcome = Some(TickEvent::GameOver);
                break;
            }
            TickEvent::Idle => panic!("running game reported idle"),
            _ => {}
        }
    }
    assert_eq!(outcome, Some(TickEvent::GameOver));
    assert!(state.is_game_over());

    let grid = state.grid().clone();
    let spawned = state.pieces_spawned();
    assert_eq!(state.step([GameAction::SoftDrop]), TickEvent::Idle);
    assert_eq!(state.grid(), &grid);
    assert_eq!(state.pieces_spawned(), spawned);
}

#[test]
fn test_render_draws_grid_and_active_piece() {
    let mut grid = Grid::default();
    grid.set(0, GRID_HEIGHT as i32 - 1, Cell::Filled(Color::Green));
    let mut state = GameState::with_grid(grid, 1);
    assert!(state.set_active(piece(ShapeKind::O, 4, 4)));

    let mut draw = DrawList::new();
    state.render(&mut draw, BLOCK_SIZE);

    assert_eq!(draw.len(), 5);
    let size = BLOCK_SIZE as i32;
    assert!(draw.contains(0, (GRID_HEIGHT as i32 - 1) * size));
    assert!(draw.contains(4 * size, 4 * size));
    assert!(draw.contains(5 * size, 5 * size));
    assert!(draw.blocks().iter().all(|b| b.size == BLOCK_SIZE));
}

#[test]
fn test_render_after_game_over_skips_active_piece() {
    let mut grid = Grid::default();
    for y in 0..2 {
        for x in 1..GRID_WIDTH as i32 {
            grid.set(x, y, Cell::Filled(Color::Red));
        }
    }
    let state = GameState::with_grid(grid, 1);
    assert!(state.is_game_over());

    let mut draw = DrawList::new();
    state.render(&mut draw, BLOCK_SIZE);
    assert_eq!(draw.len(), state.grid().filled_count());
}
