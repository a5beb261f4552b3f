use life_canvas::input::{Action, Simulation};
use life_canvas::life::{Cell, LifeGrid};

fn grid(columns: usize, rows: usize) -> LifeGrid {
    LifeGrid::with_rng(columns, rows, (0xdead_beef_u64, 0x1234_5678_u64).into()).unwrap()
}

fn with_live(columns: usize, rows: usize, live: &[(usize, usize)]) -> LifeGrid {
    let mut grid = grid(columns, rows);
    for &(x, y) in live {
        grid.set(x, y, Cell::Alive).unwrap();
    }
    grid
}

fn live_cells(grid: &LifeGrid) -> Vec<(usize, usize)> {
    let mut live: Vec<_> = grid
        .iter()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(x, y, _)| (x, y))
        .collect();
    live.sort();
    live
}

#[test]
fn block_is_a_still_life() {
    let block = [(3, 3), (3, 4), (4, 3), (4, 4)];
    let mut grid = with_live(8, 8, &block);
    grid.iterate();
    assert_eq!(live_cells(&grid), block.to_vec());
}

#[test]
fn blinker_has_period_two() {
    let horizontal = vec![(2, 3), (3, 3), (4, 3)];
    let vertical = vec![(3, 2), (3, 3), (3, 4)];
    let mut grid = with_live(7, 7, &horizontal);

    grid.iterate();
    assert_eq!(live_cells(&grid), vertical);
    grid.iterate();
    assert_eq!(live_cells(&grid), horizontal);
}

#[test]
fn glider_moves_diagonally() {
    let glider = [(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)];
    let mut grid = with_live(12, 12, &glider);
    for _ in 0..4 {
        grid.iterate();
    }
    let mut moved: Vec<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    moved.sort();
    assert_eq!(live_cells(&grid), moved);
}

#[test]
fn patterns_die_against_the_border() {
    // a blinker whose vertical phase would need row 0
    let mut grid = with_live(5, 5, &[(1, 1), (2, 1), (3, 1)]);
    grid.iterate();
    assert_eq!(live_cells(&grid), vec![(2, 1), (2, 2)]);
    grid.iterate();
    assert!(live_cells(&grid).is_empty());
}

#[test]
fn randomize_is_roughly_half_alive() {
    let mut grid = grid(202, 202);
    let mut alive = 0;
    let trials = 10;
    for _ in 0..trials {
        grid.randomize();
        alive += grid.cells().iter().filter(|c| c.is_alive()).count();
    }
    let interior = (200 * 200 * trials) as f64;
    let ratio = alive as f64 / interior;
    assert!((0.48..0.52).contains(&ratio), "alive ratio {ratio}");
}

#[test]
fn manual_toggle_while_paused() {
    let mut sim = Simulation::new(grid(12, 12), 20, (260, 260));
    sim.handle(Action::TogglePause);
    let click = Action::Pointer { x: 110., y: 105. };

    assert!(sim.handle(click));
    assert_eq!(sim.grid().get(5, 5).unwrap(), Cell::Alive);
    assert_eq!(live_cells(sim.grid()), vec![(5, 5)]);

    assert!(sim.handle(click));
    assert_eq!(sim.grid().get(5, 5).unwrap(), Cell::Dead);
    assert!(live_cells(sim.grid()).is_empty());
    assert_eq!(sim.grid().generation(), 0);
}

#[test]
fn pause_blocks_simulation() {
    let mut sim = Simulation::new(with_live(7, 7, &[(2, 3), (3, 3), (4, 3)]), 20, (160, 160));
    sim.handle(Action::TogglePause);
    for _ in 0..10 {
        sim.tick();
    }
    assert_eq!(live_cells(sim.grid()), vec![(2, 3), (3, 3), (4, 3)]);

    sim.handle(Action::TogglePause);
    sim.tick();
    assert_eq!(live_cells(sim.grid()), vec![(3, 2), (3, 3), (3, 4)]);
}

#[test]
fn clear_is_idempotent() {
    let mut once = grid(9, 9);
    once.randomize();
    once.clear();
    let snapshot = once.cells().to_vec();
    once.clear();
    assert_eq!(once.cells(), &snapshot[..]);
    assert!(snapshot.iter().all(|c| *c == Cell::Dead));
}
