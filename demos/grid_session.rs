//! Grid Session
//!
//! An interactive session driven by the state machine: commands typed at
//! the prompt move the machine between `Stopped`, `Started`, `Collecting`
//! and `Processing`, and the transition actions work a small numeric grid
//! (collect fills it with random digits, process scales and transposes it).
//! Unknown commands fall to the default transition, which reports the
//! unmatched pair and sends the machine back to its initial state.
//!
//! Run with: cargo run --example grid_session

use automat::core::State;
use automat::state_enum;
use automat::{action, Action, MachineContext, StateMachine};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::process;

state_enum! {
    enum SessionState {
        Stopped,
        Started,
        Collecting,
        Processing,
    }
}

type Grid = Vec<Vec<i64>>;
type Ctx = MachineContext<SessionState, String, Grid>;

/// Fill the grid with a fresh 3x3 batch of random digits 0..9.
fn collect_data(ctx: &mut Ctx) -> Result<(), automat::ActionError> {
    let mut rng = rand::rng();
    *ctx.data_mut() = (0..3)
        .map(|_| (0..3).map(|_| rng.random_range(0..9)).collect())
        .collect();
    Ok(())
}

/// Scale the grid by 5, transpose it, and print the result.
fn process_data(ctx: &mut Ctx) -> Result<(), automat::ActionError> {
    let grid = ctx.data_mut();
    if grid.is_empty() {
        return Err(automat::ActionError::new("no data collected yet"));
    }

    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell *= 5;
        }
    }

    let rows = grid.len();
    let cols = grid[0].len();
    let transposed: Grid = (0..cols)
        .map(|c| (0..rows).map(|r| grid[r][c]).collect())
        .collect();
    *grid = transposed;

    for row in ctx.data() {
        println!("{row:?}");
    }
    Ok(())
}

/// Discard any collected data when a session opens or closes.
fn clear_data(ctx: &mut Ctx) -> Result<(), automat::ActionError> {
    ctx.data_mut().clear();
    Ok(())
}

/// Default-transition action: report the unmatched pair. The machine
/// itself handles the forced return to the initial state.
fn report_unknown(ctx: &mut Ctx) -> Result<(), automat::ActionError> {
    let input = ctx.input().map(String::as_str).unwrap_or("");
    println!(
        "The pair ({input}, {}) was not found",
        ctx.current_state().name()
    );
    println!("FSM was moved to the initial state");
    Ok(())
}

fn build_machine() -> StateMachine<SessionState, String, Grid> {
    use SessionState::*;

    let mut machine = StateMachine::with_payload(Stopped, Grid::new());
    machine.set_default(Some(action(report_unknown)), None);

    let register = |m: &mut StateMachine<SessionState, String, Grid>,
                    symbol: &str,
                    from: SessionState,
                    run: Action<SessionState, String, Grid>,
                    to: SessionState| {
        m.register(symbol.to_string(), from, Some(run), Some(to));
    };

    register(&mut machine, "start", Stopped, action(clear_data), Started);
    register(&mut machine, "collect", Started, action(collect_data), Collecting);
    register(&mut machine, "collect", Processing, action(collect_data), Collecting);
    register(&mut machine, "process", Collecting, action(process_data), Processing);
    register(&mut machine, "stop", Started, action(clear_data), Stopped);
    register(&mut machine, "stop", Collecting, action(clear_data), Stopped);
    register(&mut machine, "stop", Processing, action(clear_data), Stopped);

    machine
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut machine = build_machine();

    println!("This is a finite state machine session");
    println!("You can change the machine state by sending an input to the system");
    println!("The possible states are: Started, Collecting, Processing and Stopped");
    println!("The possible inputs are: start, collect, process and stop");
    println!("You can also check the current and previous state of the machine");
    println!("The possible inputs for this case are: current and previous");
    println!("The initial state of the machine is Stopped");
    println!("Type 'exit' to quit");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "exit" => break,
            "" => continue,
            "current" => println!("{}", machine.current_state().name()),
            "previous" => println!("{}", machine.previous_state().name()),
            _ => {
                machine.process(input.to_string())?;

                // after processing, immediately collect the next batch
                if input == "process" {
                    machine.process("collect".to_string())?;
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(err) = run() {
        eprintln!("ERROR, UNEXPECTED EXCEPTION");
        eprintln!("{err}");
        process::exit(1);
    }
}
