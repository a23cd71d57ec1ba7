// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_editor::{AckError, Affordance, InlineString, ListChange, inline_string};

pub const PROMPT: &str = "acks> ";

pub const HELP_MSG: &str = "\
Commands:
  search <text>            type into the test name search box
  pick <test name>         pick a suggestion
  add                      add an acknowledgment for the search text
  open <#id>               open a card in the editor
  rm <#id>                 delete a card
  chip <dim> <value>       add a value, <dim> is branches, devices, or cases
  unchip <dim> <value>     remove a value
  note <text>              replace the note
  save | close             modal buttons
  dismiss                  clear failure notices
  controls                 list every control with its index
  tap <index> [text]       activate a control from the list
  show | help | quit";

#[must_use]
pub fn unknown_command_msg(verb: &str) -> InlineString {
    inline_string!("Unknown command `{verb}`, type `help` for the list")
}

#[must_use]
pub fn missing_argument_msg(verb: &str) -> InlineString {
    inline_string!("`{verb}` needs more arguments, type `help` for usage")
}

#[must_use]
pub fn invalid_entry_id_msg(arg: &str) -> InlineString {
    inline_string!("`{arg}` is not an entry id, try `#3`")
}

#[must_use]
pub fn invalid_index_msg(arg: &str) -> InlineString {
    inline_string!("`{arg}` is not a control index, see `controls`")
}

#[must_use]
pub fn unknown_dimension_msg(arg: &str) -> InlineString {
    inline_string!("`{arg}` is not one of: branches, devices, cases")
}

#[must_use]
pub fn no_such_control_msg(index: usize, count: usize) -> InlineString {
    inline_string!("No control at index {index}, there are {count}")
}

#[must_use]
pub fn rejected_msg(error: &AckError) -> InlineString { inline_string!("✋ {error}") }

#[must_use]
pub fn control_line(index: usize, affordance: &Affordance) -> InlineString {
    inline_string!("{index:>3}  {affordance:?}")
}

#[must_use]
pub fn backend_msg(maybe_base_url: Option<&str>) -> InlineString {
    match maybe_base_url {
        Some(base_url) => inline_string!("Backend: {base_url}"),
        None => inline_string!("Backend: in memory"),
    }
}

#[must_use]
pub fn in_flight_on_exit_msg(count: usize) -> InlineString {
    inline_string!("Waiting for {count} call(s) to settle...")
}

#[must_use]
pub fn list_change_msg(change: &ListChange) -> InlineString {
    match change {
        ListChange::Inserted { entry, key, .. } => {
            inline_string!("✅ Saved new acknowledgment {key} as {entry}")
        }
        ListChange::Replaced { old, new, key } => {
            inline_string!("✅ Saved {key}, {old} is now {new}")
        }
        ListChange::Removed { entry, key, .. } => {
            inline_string!("🗑 Deleted {key} ({entry})")
        }
        ListChange::Reverted { entry, reason } => {
            inline_string!("❌ {entry} reverted: {reason}")
        }
        ListChange::Discarded { entry, reason } => {
            inline_string!("❌ Draft {entry} discarded: {reason}")
        }
        ListChange::Ignored { entry } => {
            inline_string!("{entry} was gone before its call settled")
        }
    }
}
