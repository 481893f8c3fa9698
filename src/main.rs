use std::io::{Stdout, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tokio::time::sleep_until;

use edtable::app::action::Action;
use edtable::app::allocator::allocate;
use edtable::app::effect::Effect;
use edtable::app::effect_runner::run_effects;
use edtable::app::ports::{HostSurface, TableSource};
use edtable::app::reducer::reduce;
use edtable::app::render_schedule::next_deadline;
use edtable::app::state::TableState;
use edtable::domain::ColumnSizeMap;
use edtable::error;
use edtable::infra::adapters::{TomlTableSource, source_for_path};
use edtable::infra::export::layout_json;
use edtable::infra::logging::{LOG_ENV_VAR, init_logging, resolve_level};
use edtable::ui::adapters::{TerminalHost, TuiRenderer};
use edtable::ui::event::handler::handle_event;
use edtable::ui::tui::TuiRunner;

const DEMO_TABLE: &str = include_str!("../demos/instances.toml");

/// Editable-table column layout, hosted in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table to open (.toml or .csv). Opens a demo table when omitted
    file: Option<PathBuf>,

    /// Print the column widths allocated for a WIDTH-pixel viewport as JSON, then exit
    #[arg(long, value_name = "WIDTH")]
    print_layout: Option<f64>,

    /// off, error, warn, info, debug or trace (overrides EDTABLE_LOG)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Switch the mouse pointer shape over column edges (terminals with OSC 22)
    #[arg(long)]
    pointer_shapes: bool,
}

fn table_source(file: Option<&Path>) -> Box<dyn TableSource> {
    match file {
        Some(path) => source_for_path(path),
        None => Box::new(TomlTableSource::inline("instances", DEMO_TABLE)),
    }
}

type Host = TerminalHost<Stdout>;

/// Reduces one action, applies its effects, and returns the follow-up
/// actions the host reported.
fn dispatch(
    action: Action,
    state: &mut TableState,
    host: &mut Host,
    tui: &mut TuiRunner,
) -> Result<Vec<Action>> {
    let now = Instant::now();
    let mut effects = reduce(state, action, now);

    if state.render_dirty {
        effects.push(Effect::Render);
    }

    let mut renderer = TuiRenderer::new(tui);
    let follow_ups = run_effects(effects, host, &mut renderer, state)?;
    state.clear_dirty();
    Ok(follow_ups)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;

    let args = Args::parse();

    let env_level = std::env::var(LOG_ENV_VAR).ok();
    let level = resolve_level(args.log_level.as_deref(), env_level.as_deref());
    let log_path = init_logging(level)?;

    let source = table_source(args.file.as_deref());
    let spec = source
        .load()
        .wrap_err_with(|| format!("failed to load {}", source.describe()))?;
    log::info!(
        "loaded {} ({} columns, {} rows)",
        source.describe(),
        spec.columns.len(),
        spec.rows.len()
    );

    if let Some(width) = args.print_layout {
        let sizes = allocate(&spec.columns, width, &ColumnSizeMap::new());
        let json = layout_json(&spec.columns, &sizes)?;
        writeln!(stdout().lock(), "{json}")?;
        return Ok(());
    }

    let (action_tx, mut action_rx) = mpsc::channel::<Action>(256);

    let mut state = TableState::new(spec);
    let mut host = TerminalHost::new(stdout()).with_pointer_shapes(args.pointer_shapes);

    let mut tui = TuiRunner::new()?;
    tui.enter()?;

    let initial_size = tui.terminal().size()?;
    let _ = action_tx
        .send(Action::Resize(initial_size.width, initial_size.height))
        .await;

    loop {
        let deadline = next_deadline(&state);

        tokio::select! {
            Some(event) = tui.next_event() => {
                let action = handle_event(event, &state, &host.view());
                if action != Action::None {
                    let _ = action_tx.send(action).await;
                }
            }
            Some(action) = action_rx.recv() => {
                for follow_up in dispatch(action, &mut state, &mut host, &mut tui)? {
                    let _ = action_tx.send(follow_up).await;
                }
            }
            // Scroll throttle trailing edge or cursor watchdog check
            () = async {
                match deadline {
                    Some(d) => sleep_until(d.into()).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                for follow_up in dispatch(Action::Tick, &mut state, &mut host, &mut tui)? {
                    let _ = action_tx.send(follow_up).await;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    reduce(&mut state, Action::Unmount, Instant::now());
    tui.exit()?;
    log::info!("exited; log written to {}", log_path.display());
    Ok(())
}
