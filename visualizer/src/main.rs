mod clock;
mod input;
mod renderer;
mod scene;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use cellfluid_simulator::{ConfigArgs, InputEvent, Session};
use clap::{Parser, ValueEnum};
use log::{error, info, warn};
use clock::TickClock;
use input::PointerTracker;
use renderer::{Instance, Renderer};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Paint solid and fluid cells and watch the fluid settle
    Fluid,
    /// Static grid of black lines on white
    Gridlines,
}

#[derive(Debug, Parser)]
#[command(name = "cellfluid-visualizer")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,

    /// Which demo to open
    #[arg(long, value_enum, default_value_t = Demo::Fluid)]
    demo: Demo,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.config.resolve().context("failed to load configuration")?;
    let mut session = Session::new(config).context("invalid configuration")?;
    let config = session.config().clone();

    let cell_size = config.cell_size as f32;
    let viewport = [config.viewport_width as f32, config.viewport_height as f32];
    let (rows, cols) = (session.grid().rows(), session.grid().cols());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("cellfluid")
        .with_inner_size(PhysicalSize::new(config.viewport_width, config.viewport_height))
        .with_resizable(false)
        .build(&event_loop)?;
    let window: &'static winit::window::Window = Box::leak(Box::new(window));

    let mut renderer = pollster::block_on(Renderer::new(window, scene::COLOR_WHITE))?;
    info!("opened {:?} demo at {}x{}", args.demo, config.viewport_width, config.viewport_height);

    // The gridlines never change, so they are built once and appended each frame.
    let mut gridlines: Vec<Instance> = Vec::new();
    scene::push_gridlines(&mut gridlines, rows, cols, cell_size, viewport);
    let mut instances: Vec<Instance> = Vec::new();

    let frame_dt = Duration::from_secs_f64(1.0 / config.tick_rate);
    let mut next_frame = Instant::now();
    let start = Instant::now();
    let mut clock = TickClock::new(config.tick_rate);

    let mut pointer = PointerTracker::default();

    let mut fps_window_start = Instant::now();
    let mut fps_frames: u32 = 0;
    let mut fps_last: f64 = 0.0;

    let mut title_last_update = Instant::now();
    let title_update_dt = Duration::from_millis(250);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));

        match event {
            Event::AboutToWait => {
                let now = Instant::now();
                if now >= next_frame {
                    next_frame = now + frame_dt;
                    window.request_redraw();
                }
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    renderer.resize(size.width, size.height);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            repeat: false,
                            ..
                        },
                    ..
                } => match logical_key {
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    Key::Named(NamedKey::Space | NamedKey::Tab) if args.demo == Demo::Fluid => {
                        session.push_event(InputEvent::AdvanceMode);
                    }
                    _ => {}
                },
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x.floor() as i64, position.y.floor() as i64);
                    // Off-grid positions are dropped here rather than rejected by the session.
                    let on_grid = session.cell_at_pixel(x, y).is_ok();
                    if let Some(ev) = pointer.moved(x, y, on_grid) {
                        session.push_event(ev);
                    }
                }
                WindowEvent::CursorLeft { .. } => pointer.left(),
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } if args.demo == Demo::Fluid => {
                    let ev = match state {
                        ElementState::Pressed => {
                            pointer.pressed(|x, y| session.cell_at_pixel(x, y).is_ok())
                        }
                        ElementState::Released => pointer.released(),
                    };
                    if let Some(ev) = ev {
                        session.push_event(ev);
                    }
                }
                WindowEvent::RedrawRequested => {
                    fps_frames = fps_frames.saturating_add(1);
                    let now = Instant::now();
                    let fps_elapsed = now.duration_since(fps_window_start);
                    if fps_elapsed >= Duration::from_secs(1) {
                        let secs = fps_elapsed.as_secs_f64().max(1e-9);
                        fps_last = fps_frames as f64 / secs;
                        fps_frames = 0;
                        fps_window_start = now;
                    }

                    instances.clear();
                    if args.demo == Demo::Fluid {
                        let due = clock.due(start.elapsed().as_secs_f64(), session.ticks());
                        for _ in 0..due {
                            if let Err(e) = session.tick() {
                                warn!("tick {} rejected input: {e}", session.ticks() + 1);
                            }
                        }
                        scene::push_cells(&mut instances, session.grid(), cell_size);
                    }
                    instances.extend_from_slice(&gridlines);
                    if args.demo == Demo::Fluid {
                        scene::push_mode_swatch(&mut instances, session.mode());
                    }

                    if now.duration_since(title_last_update) >= title_update_dt {
                        let title = match args.demo {
                            Demo::Fluid => {
                                let census = session.census();
                                format!(
                                    "cellfluid | mode: {} | fluid: {} | solid: {} | tick: {} | fps: {:.1}",
                                    session.mode_display().label,
                                    census.fluid,
                                    census.solid,
                                    session.ticks(),
                                    fps_last
                                )
                            }
                            Demo::Gridlines => format!("cellfluid | gridlines | fps: {:.1}", fps_last),
                        };
                        window.set_title(&title);
                        title_last_update = now;
                    }

                    if let Err(e) = renderer.render(&instances) {
                        error!("render error: {e:#}");
                    }
                }
                _ => {}
            },
            _ => {}
        }
    })?;

    Ok(())
}
