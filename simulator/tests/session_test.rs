use cellfluid_simulator::{CellState, Grid, GridPos, InputEvent, Mode, Session, SimConfig};

fn config(seed: u64) -> SimConfig {
    SimConfig {
        viewport_width: 200,
        viewport_height: 120,
        cell_size: 10,
        seed: Some(seed),
        ..SimConfig::default()
    }
}

/// Paints a floor, a few pillars and a fluid blob.
fn scripted_session(seed: u64) -> anyhow::Result<Session> {
    let mut session = Session::new(config(seed))?;
    for col in 0..20 {
        session.grid_mut().set(11, col, CellState::Solid)?;
    }
    for row in 6..11 {
        session.grid_mut().set(row, 5, CellState::Solid)?;
        session.grid_mut().set(row, 14, CellState::Solid)?;
    }
    session.push_event(InputEvent::AdvanceMode);
    for x in (20..180).step_by(10) {
        session.push_event(InputEvent::PointerDown { x, y: 15 });
        session.push_event(InputEvent::PointerUp);
    }
    Ok(session)
}

#[test]
fn same_seed_gives_identical_runs() -> anyhow::Result<()> {
    let mut a = scripted_session(1234)?;
    let mut b = scripted_session(1234)?;

    for _ in 0..100 {
        a.tick()?;
        b.tick()?;
        assert_eq!(a.grid(), b.grid());
    }
    Ok(())
}

#[test]
fn stepping_conserves_cells_and_never_touches_solid() -> anyhow::Result<()> {
    let mut session = scripted_session(99)?;
    session.tick()?;

    let solids: Vec<GridPos> = session
        .cells()
        .filter(|(_, s)| *s == CellState::Solid)
        .map(|(p, _)| p)
        .collect();
    let before = session.census();

    for _ in 0..200 {
        session.step();
        let census = session.census();
        assert_eq!(census.total(), 20 * 12);
        assert_eq!(census.fluid, before.fluid);
        assert_eq!(census.solid, before.solid);
        for pos in &solids {
            assert_eq!(session.grid().get(pos.row, pos.col)?, CellState::Solid);
        }
    }
    Ok(())
}

#[test]
fn single_drop_falls_through_an_empty_column_in_one_tick() -> anyhow::Result<()> {
    let mut session = Session::new(SimConfig {
        side_move_probability: 0.0,
        ..config(5)
    })?;
    session.grid_mut().set(0, 7, CellState::Fluid)?;

    session.tick()?;

    let h = session.grid().rows();
    assert_eq!(session.grid().get(h - 1, 7)?, CellState::Fluid);
    assert_eq!(session.census().fluid, 1);
    Ok(())
}

#[test]
fn fluid_brush_at_the_corner_wraps_to_the_far_edges() -> anyhow::Result<()> {
    let mut session = Session::new(SimConfig {
        spread_fill_probability: 1.0,
        ..config(5)
    })?;
    session.advance_mode();
    session.handle_event(InputEvent::PointerDown { x: 0, y: 0 })?;

    let cols = session.grid().cols();
    let rows = session.grid().rows();
    let mut fluid: Vec<(usize, usize)> = session
        .cells()
        .filter(|(_, s)| *s == CellState::Fluid)
        .map(|(p, _)| (p.col, p.row))
        .collect();
    fluid.sort();

    let mut expected = vec![(0, 0), (cols - 1, 0), (1, 0), (0, rows - 1), (0, 1)];
    expected.sort();
    assert_eq!(fluid, expected);
    Ok(())
}

#[test]
fn mode_cycles_through_input_events() -> anyhow::Result<()> {
    let mut session = Session::new(config(0))?;
    let mut seen = vec![session.mode()];
    for _ in 0..3 {
        session.push_event(InputEvent::AdvanceMode);
        session.tick()?;
        seen.push(session.mode());
    }
    assert_eq!(seen, vec![Mode::Solid, Mode::Fluid, Mode::Deletion, Mode::Solid]);
    Ok(())
}

#[test]
fn repeated_stamp_and_erase_converge() -> anyhow::Result<()> {
    let mut session = Session::new(config(0))?;
    let press = InputEvent::PointerDown { x: 45, y: 45 };

    session.handle_event(press)?;
    let after_first: Grid = session.grid().clone();
    for _ in 0..5 {
        session.handle_event(press)?;
        session.handle_event(InputEvent::PointerMove { x: 45, y: 45 })?;
    }
    assert_eq!(session.grid(), &after_first);
    assert_eq!(session.grid().get(4, 4)?, CellState::Solid);

    session.advance_mode();
    session.advance_mode();
    for _ in 0..5 {
        session.handle_event(press)?;
    }
    assert_eq!(session.grid().get(4, 4)?, CellState::Empty);
    assert_eq!(session.census().empty, 20 * 12);
    Ok(())
}
