// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::ScopeDimension;

use crate::{Affordance, Icon, NodeKind, ViewNode, ui_str};

/// Interaction with the text box under a chip set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChipInputEvent {
    TextChanged(String),
    Focused,
    Blurred,
    EnterPressed,
    AddClicked,
}

/// The "add" control next to the text box.
///
/// ```text
/// Hidden --focus--> Shown --blur (text is blank)--> Hidden
///                   Shown --add clicked (chip added)--> Hidden
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddControlVisibility {
    #[default]
    Hidden,
    Shown,
}

/// State of the text box used to enter new chips. Committing never validates anything
/// beyond "not blank", that is up to [`crate::ChipSetEditor::add`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChipInput {
    pub text: String,
    pub add_control: AddControlVisibility,
}

/// What the caller has to do after the input handled an event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChipInputOutcome {
    Noop,
    Commit(String),
}

mod chip_input_impl {
    use super::{AddControlVisibility, ChipInput, ChipInputEvent, ChipInputOutcome};

    impl ChipInput {
        #[must_use]
        pub fn is_blank(&self) -> bool { self.text.trim().is_empty() }

        /// Applies `event`. When the event commits non blank text, the text box is
        /// cleared and the text is handed back to be added as a chip.
        pub fn apply_event(&mut self, event: ChipInputEvent) -> ChipInputOutcome {
            match event {
                ChipInputEvent::TextChanged(text) => {
                    self.text = text;
                    ChipInputOutcome::Noop
                }
                ChipInputEvent::Focused => {
                    self.add_control = AddControlVisibility::Shown;
                    ChipInputOutcome::Noop
                }
                ChipInputEvent::Blurred => {
                    if self.is_blank() {
                        self.add_control = AddControlVisibility::Hidden;
                    }
                    ChipInputOutcome::Noop
                }
                ChipInputEvent::EnterPressed => self.take_commit(),
                ChipInputEvent::AddClicked => {
                    let outcome = self.take_commit();
                    if matches!(outcome, ChipInputOutcome::Commit(_)) {
                        self.add_control = AddControlVisibility::Hidden;
                    }
                    outcome
                }
            }
        }

        fn take_commit(&mut self) -> ChipInputOutcome {
            if self.is_blank() {
                ChipInputOutcome::Noop
            } else {
                ChipInputOutcome::Commit(std::mem::take(&mut self.text))
            }
        }
    }
}

impl ChipInput {
    #[must_use]
    pub fn render(&self, dimension: ScopeDimension) -> ViewNode {
        ViewNode::new(NodeKind::Container)
            .class("input-container")
            .child(
                ViewNode::new(NodeKind::TextField)
                    .text(self.text.as_str())
                    .placeholder(ui_str::chip_placeholder(dimension))
                    .affordance(Affordance::ChipField(dimension)),
            )
            .child(
                ViewNode::new(NodeKind::Icon(Icon::Add))
                    .class("add-button")
                    .hidden(self.add_control == AddControlVisibility::Hidden)
                    .affordance(Affordance::AddChip(dimension)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn add_control_visibility_machine() {
        let mut input = ChipInput::default();
        assert_eq2!(input.add_control, AddControlVisibility::Hidden);

        input.apply_event(ChipInputEvent::Focused);
        assert_eq2!(input.add_control, AddControlVisibility::Shown);

        // Blur with blank text hides it again.
        input.apply_event(ChipInputEvent::TextChanged("   ".into()));
        input.apply_event(ChipInputEvent::Blurred);
        assert_eq2!(input.add_control, AddControlVisibility::Hidden);

        // Blur with content keeps it.
        input.apply_event(ChipInputEvent::Focused);
        input.apply_event(ChipInputEvent::TextChanged("main".into()));
        input.apply_event(ChipInputEvent::Blurred);
        assert_eq2!(input.add_control, AddControlVisibility::Shown);

        // A successful add via the control hides it.
        assert_eq2!(
            input.apply_event(ChipInputEvent::AddClicked),
            ChipInputOutcome::Commit("main".into())
        );
        assert_eq2!(input.add_control, AddControlVisibility::Hidden);
        assert_eq2!(input.text, "");
    }

    #[test]
    fn enter_commits_and_keeps_control() {
        let mut input = ChipInput::default();
        input.apply_event(ChipInputEvent::Focused);
        input.apply_event(ChipInputEvent::TextChanged("walleye".into()));
        assert_eq2!(
            input.apply_event(ChipInputEvent::EnterPressed),
            ChipInputOutcome::Commit("walleye".into())
        );
        assert_eq2!(input.add_control, AddControlVisibility::Shown);
    }

    #[test]
    fn blank_text_never_commits() {
        let mut input = ChipInput::default();
        input.apply_event(ChipInputEvent::Focused);
        input.apply_event(ChipInputEvent::TextChanged(" \t".into()));
        assert_eq2!(
            input.apply_event(ChipInputEvent::EnterPressed),
            ChipInputOutcome::Noop
        );
        assert_eq2!(
            input.apply_event(ChipInputEvent::AddClicked),
            ChipInputOutcome::Noop
        );
        assert_eq2!(input.add_control, AddControlVisibility::Shown);
    }

    #[test]
    fn render_hides_add_control_until_focus() {
        let mut input = ChipInput::default();
        let node = input.render(ScopeDimension::Devices);
        let add = node
            .find_by_affordance(&Affordance::AddChip(ScopeDimension::Devices))
            .unwrap();
        assert!(add.is_hidden);
        assert_eq2!(
            node.text_entries()[0].maybe_placeholder,
            Some("Specify a device...")
        );

        input.apply_event(ChipInputEvent::Focused);
        let node = input.render(ScopeDimension::Devices);
        let add = node
            .find_by_affordance(&Affordance::AddChip(ScopeDimension::Devices))
            .unwrap();
        assert!(!add.is_hidden);
    }
}
