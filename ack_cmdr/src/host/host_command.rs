// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_editor::{AckEvent, ChipInputEvent, EntryId};
use test_ack_schema::ScopeDimension;

use crate::{DEBUG_HOST_MOD, ui_str};

/// One line typed at the prompt, after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCommand {
    /// Events to hand to the editor, in order. A rejected event stops the rest.
    Dispatch(Vec<AckEvent>),
    /// Activate the control at this index in the `controls` listing, with optional
    /// text for text fields.
    Tap { index: usize, text: String },
    ListControls,
    Show,
    Help,
    Quit,
}

/// Returns [None] for a blank line.
///
/// # Errors
///
/// Returns an error, with the usage hint as its message, if the verb is unknown or
/// its arguments are missing or malformed.
pub fn parse_host_command(line: &str) -> miette::Result<Option<HostCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => HostCommand::Dispatch(vec![AckEvent::SearchTextChanged(
            rest.to_string(),
        )]),
        "pick" | "p" => HostCommand::Dispatch(vec![AckEvent::SuggestionPicked(
            require_text(verb, rest)?.to_string(),
        )]),
        "add" | "a" => HostCommand::Dispatch(vec![AckEvent::AddFromSearchClicked]),
        "open" | "o" => {
            HostCommand::Dispatch(vec![AckEvent::CardClicked(parse_entry_id(rest)?)])
        }
        "delete" | "rm" => {
            HostCommand::Dispatch(vec![AckEvent::DeleteClicked(parse_entry_id(rest)?)])
        }
        "chip" | "c" => {
            let (dimension, value) = parse_dimension_and_value(verb, rest)?;
            HostCommand::Dispatch(type_chip_events(dimension, value))
        }
        "unchip" | "uc" => {
            let (dimension, value) = parse_dimension_and_value(verb, rest)?;
            HostCommand::Dispatch(vec![AckEvent::ChipRemoveClicked {
                dimension,
                value: value.to_string(),
            }])
        }
        "note" | "n" => HostCommand::Dispatch(vec![AckEvent::NoteChanged(rest.to_string())]),
        "save" => HostCommand::Dispatch(vec![AckEvent::SaveClicked]),
        "close" | "x" => HostCommand::Dispatch(vec![AckEvent::CloseClicked]),
        "dismiss" => HostCommand::Dispatch(vec![AckEvent::NoticesDismissed]),
        "tap" | "t" => {
            let (index, text) = match rest.split_once(char::is_whitespace) {
                Some((index, text)) => (index, text.trim()),
                None => (rest, ""),
            };
            let index = index
                .parse::<usize>()
                .map_err(|_| miette::miette!("{}", ui_str::invalid_index_msg(index)))?;
            HostCommand::Tap {
                index,
                text: text.to_string(),
            }
        }
        "controls" | "ls" => HostCommand::ListControls,
        "show" => HostCommand::Show,
        "help" | "?" => HostCommand::Help,
        "quit" | "exit" | "q" => HostCommand::Quit,
        _ => miette::bail!("{}", ui_str::unknown_command_msg(verb)),
    };

    // % is Display, ? is Debug.
    DEBUG_HOST_MOD.then(|| {
        tracing::debug!(message = "parsed host command", line = %line, command = ?command);
    });

    Ok(Some(command))
}

/// What typing `value` into a chip box and pressing enter looks like to the editor.
fn type_chip_events(dimension: ScopeDimension, value: &str) -> Vec<AckEvent> {
    [
        ChipInputEvent::Focused,
        ChipInputEvent::TextChanged(value.to_string()),
        ChipInputEvent::EnterPressed,
        ChipInputEvent::Blurred,
    ]
    .into_iter()
    .map(|event| AckEvent::ChipInput { dimension, event })
    .collect()
}

fn require_text<'a>(verb: &str, rest: &'a str) -> miette::Result<&'a str> {
    if rest.is_empty() {
        miette::bail!("{}", ui_str::missing_argument_msg(verb));
    }
    Ok(rest)
}

/// Accepts `3` as well as `#3`, which is how entry ids are printed.
fn parse_entry_id(arg: &str) -> miette::Result<EntryId> {
    arg.trim_start_matches('#')
        .parse::<u64>()
        .map(EntryId)
        .map_err(|_| miette::miette!("{}", ui_str::invalid_entry_id_msg(arg)))
}

fn parse_dimension_and_value<'a>(
    verb: &str,
    rest: &'a str,
) -> miette::Result<(ScopeDimension, &'a str)> {
    let Some((dimension, value)) = rest.split_once(char::is_whitespace) else {
        miette::bail!("{}", ui_str::missing_argument_msg(verb));
    };
    let Some(dimension) = parse_dimension(dimension) else {
        miette::bail!("{}", ui_str::unknown_dimension_msg(dimension));
    };
    Ok((dimension, value.trim()))
}

#[must_use]
pub fn parse_dimension(arg: &str) -> Option<ScopeDimension> {
    match arg.to_ascii_lowercase().as_str() {
        "b" | "branch" | "branches" => Some(ScopeDimension::Branches),
        "d" | "device" | "devices" => Some(ScopeDimension::Devices),
        "t" | "case" | "cases" | "testcases" => Some(ScopeDimension::TestCases),
        _ => None,
    }
}
