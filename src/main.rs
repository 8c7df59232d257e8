use anyhow::Context;
use clap::Parser;
use crossterm::event;
use rcube::config::Args;
use rcube::cube::Cube;
use rcube::input::{translate, Command, InputState};
use rcube::moves::parse_sequence;
use rcube::state::{AppState, Flow};
use rcube::terminal::{surface_size, terminal_size, Terminal};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut cube = Cube::new(args.size).context("invalid cube size")?;
    if let Some(notation) = &args.scramble {
        let turns = parse_sequence(notation)?;
        cube.apply_all(turns)
            .with_context(|| format!("cannot apply scramble {notation:?}"))?;
        info!(scramble = %notation, "scramble applied");
    }

    if args.print {
        print!("{cube}");
        return Ok(());
    }
    run(&args, cube)
}

/// Logs go to a file so they never fight the full-screen view
fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "rcube=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(args: &Args, cube: Cube) -> anyhow::Result<()> {
    let controls = args.controls();
    let frame_time = args.frame_time();
    let (cols, rows) = terminal_size().context("cannot read terminal size")?;

    let mut app = AppState::new(cube, controls);
    let (width, height) = surface_size(cols, rows);
    app.apply(Command::Resize { width, height });
    if args.net {
        app.apply(Command::ToggleView);
    }
    info!(dimension = app.cube.dimension(), cols, rows, "starting viewer");

    let mut terminal = Terminal::new().context("cannot set up terminal")?;
    let mut input = InputState::default();
    loop {
        let deadline = Instant::now() + frame_time;
        // Handle input until the next frame is due
        loop {
            let now = Instant::now();
            if now >= deadline || !event::poll(deadline - now)? {
                break;
            }
            let (next, command) = translate(input, &event::read()?, &controls);
            input = next;
            if let Some(command) = command {
                if app.apply(command) == Flow::Quit {
                    info!("quit");
                    return Ok(());
                }
            }
        }

        let status = app.status_line();
        terminal.present(app.render(), &status)?;
    }
}
