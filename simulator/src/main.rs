// Headless runner: pours fluid onto a shelf and prints the grid as text

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use cellfluid_simulator::{CellState, ConfigArgs, InputEvent, Session};
use clap::Parser;
use log::info;

#[derive(Debug, Parser)]
#[command(name = "cellfluid-simulator")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Number of ticks to run; 0 runs until Ctrl-C
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Print the grid every N ticks (0 prints only the final grid)
    #[arg(long, default_value_t = 0)]
    print_every: u64,

    /// Log progress every N ticks
    #[arg(long, default_value_t = 20)]
    report_every: u64,

    /// Skip the solid shelf and pour onto the floor
    #[arg(long)]
    no_shelf: bool,
}

/// Lays a solid shelf across the middle third of the grid with a one-cell gap.
fn build_shelf(session: &mut Session) -> Result<()> {
    let rows = session.grid().rows();
    let cols = session.grid().cols();
    let shelf_row = rows * 2 / 3;
    let gap = cols / 2 + cols / 6;

    for col in cols / 6..cols - cols / 6 {
        if col == gap {
            continue;
        }
        session
            .grid_mut()
            .set(shelf_row, col, CellState::Solid)
            .context("shelf does not fit the grid")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("💧 cellfluid - headless simulator");
    println!("=================================\n");

    let config = args.config.resolve().context("failed to load configuration")?;
    let mut session = Session::new(config).context("invalid configuration")?;

    if !args.no_shelf {
        build_shelf(&mut session)?;
    }

    // Pour from the top centre through the same input path a window would use.
    let cell = i64::from(session.config().cell_size);
    let source_x = session.grid().cols() as i64 / 2 * cell;
    session.push_event(InputEvent::AdvanceMode);
    session.push_event(InputEvent::PointerDown { x: source_x, y: 0 });

    let running = Arc::new(AtomicBool::new(true));
    {
        let running = running.clone();
        ctrlc::set_handler(move || running.store(false, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;
    }

    println!(
        "▶️  Running {} on a {}x{} grid...\n",
        if args.ticks == 0 {
            "until Ctrl-C".to_string()
        } else {
            format!("{} ticks", args.ticks)
        },
        session.grid().cols(),
        session.grid().rows()
    );

    let mut last_report_time = Instant::now();
    let mut ticks_since_last_report = 0u64;

    while running.load(Ordering::SeqCst) {
        if args.ticks != 0 && session.ticks() >= args.ticks {
            break;
        }

        // Keep the button held and nudge the pointer so the brush fires every tick.
        session.push_event(InputEvent::PointerMove { x: source_x, y: 0 });
        let report = session.tick()?;
        ticks_since_last_report += 1;

        if args.print_every != 0 && report.tick % args.print_every == 0 {
            println!("tick {}\n{}", report.tick, session.grid());
        }

        if args.report_every != 0 && report.tick % args.report_every == 0 {
            let elapsed = last_report_time.elapsed().as_secs_f64().max(1e-9);
            let tps = ticks_since_last_report as f64 / elapsed;
            let census = session.census();
            info!(
                "tick {}: fluid = {}, solid = {}, moves = {}, TPS = {:.1}",
                report.tick,
                census.fluid,
                census.solid,
                report.step.moves(),
                tps
            );
            last_report_time = Instant::now();
            ticks_since_last_report = 0;
        }
    }

    let census = session.census();
    println!("{}", session.grid());
    println!(
        "✅ Stopped after {} ticks: {} fluid, {} solid, {} empty",
        session.ticks(),
        census.fluid,
        census.solid,
        census.empty
    );
    Ok(())
}
