// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use miette::IntoDiagnostic;
use test_ack_editor::{AckApp, AckEvent, CommonResult, GatewayConfig, HttpGateway,
                      InMemoryGateway, ListChange, PersistenceGateway, mount,
                      paint_to_string};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{CLIArg, DEBUG_HOST_MOD, HostCommand, load_mount_args, parse_host_command,
            ui_str};

/// Whether the loop keeps reading lines after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Exit,
}

/// What woke the loop up.
#[derive(Debug)]
enum HostStep {
    Line(Option<String>),
    Settled(ListChange),
}

/// Loads the inputs, picks the backend, mounts the editor, and runs the prompt until
/// stdin closes or the user quits.
///
/// # Errors
///
/// Returns an error if the inputs can't be loaded, the base URL is invalid, or stdin
/// can't be read.
pub async fn launch(cli_arg: &CLIArg) -> CommonResult<()> {
    let mount_args = load_mount_args(cli_arg).await?;
    let options = cli_arg.editor_options();

    println!("{}", ui_str::backend_msg(cli_arg.base_url.as_deref()));

    match cli_arg.base_url.as_deref() {
        Some(base_url) => {
            let gateway = HttpGateway::try_new(GatewayConfig::new(base_url))?;
            run_prompt(mount(mount_args, Arc::new(gateway), options)).await
        }
        None => {
            let gateway = InMemoryGateway::new(mount_args.existing_acknowledgments.clone());
            run_prompt(mount(mount_args, Arc::new(gateway), options)).await
        }
    }
}

/// Reads commands from stdin while applying settled backend calls as they arrive, so
/// the prompt never blocks on the network.
///
/// # Errors
///
/// Returns an error if stdin can't be read.
pub async fn run_prompt<G: PersistenceGateway>(mut app: AckApp<G>) -> CommonResult<()> {
    print_view(&app);
    print_prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Both futures are cancel safe. The second branch is disabled while nothing
        // is in flight.
        let step = tokio::select! {
            maybe_line = lines.next_line() => HostStep::Line(maybe_line.into_diagnostic()?),
            Some(change) = app.next_signal() => HostStep::Settled(change),
        };

        match step {
            HostStep::Line(None) => break,
            HostStep::Line(Some(line)) => {
                if run_line(&mut app, &line) == Continuation::Exit {
                    break;
                }
                print_prompt();
            }
            HostStep::Settled(change) => {
                println!("{}", ui_str::list_change_msg(&change));
                print_view(&app);
                print_prompt();
            }
        }
    }

    let in_flight_count = app.in_flight_count();
    if in_flight_count > 0 {
        println!("{}", ui_str::in_flight_on_exit_msg(in_flight_count));
        for change in app.settle_all().await {
            println!("{}", ui_str::list_change_msg(&change));
        }
    }

    Ok(())
}

/// Parses one line and applies it to `app`. Parse errors and rejected events are
/// printed, they never end the loop.
pub fn run_line<G: PersistenceGateway>(app: &mut AckApp<G>, line: &str) -> Continuation {
    let command = match parse_host_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Continuation::Continue,
        Err(report) => {
            println!("{report}");
            return Continuation::Continue;
        }
    };

    match command {
        HostCommand::Quit => return Continuation::Exit,
        HostCommand::Help => println!("{}", ui_str::HELP_MSG),
        HostCommand::Show => print_view(app),
        HostCommand::ListControls => {
            for (index, affordance) in app.render().affordances().into_iter().enumerate() {
                println!("{}", ui_str::control_line(index, affordance));
            }
        }
        HostCommand::Tap { index, text } => {
            match event_for_control(app, index, &text) {
                Ok(event) => dispatch_all(app, vec![event]),
                Err(msg) => println!("{msg}"),
            }
            print_view(app);
        }
        HostCommand::Dispatch(events) => {
            dispatch_all(app, events);
            print_view(app);
        }
    }

    Continuation::Continue
}

/// Looks the control up in the tree as it is painted right now.
fn event_for_control<G: PersistenceGateway>(
    app: &AckApp<G>,
    index: usize,
    text: &str,
) -> Result<AckEvent, test_ack_editor::InlineString> {
    let root = app.render();
    let affordances = root.affordances();
    affordances
        .get(index)
        .map(|affordance| affordance.to_event(text))
        .ok_or_else(|| ui_str::no_such_control_msg(index, affordances.len()))
}

fn dispatch_all<G: PersistenceGateway>(app: &mut AckApp<G>, events: Vec<AckEvent>) {
    for event in events {
        // % is Display, ? is Debug.
        DEBUG_HOST_MOD.then(|| {
            tracing::debug!(message = "dispatch", event = ?event);
        });

        if let Err(error) = app.dispatch(event) {
            println!("{}", ui_str::rejected_msg(&error));
            break;
        }
    }
}

fn print_view<G: PersistenceGateway>(app: &AckApp<G>) {
    println!("{}", paint_to_string(&app.render()));
}

fn print_prompt() {
    use std::io::Write as _;
    print!("{}", ui_str::PROMPT);
    drop(std::io::stdout().flush());
}
