// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{AckError, AckEvent, AckListController, AckSignal, Capabilities,
            DEBUG_ACKS_MOD, EditorOptions, Effect, ListChange, MountArgs,
            PersistenceGateway, ViewNode};

/// Mounts the editor: builds the controller from the page inputs and wires it to
/// `gateway`. The returned app must be driven from inside a tokio runtime, since
/// backend calls are spawned as tasks.
pub fn mount<G: PersistenceGateway>(
    args: MountArgs,
    gateway: Arc<G>,
    options: EditorOptions,
) -> AckApp<G> {
    let MountArgs {
        all_test_names,
        existing_acknowledgments,
        read_only,
    } = args;

    let capabilities = Capabilities::from_read_only_flag(read_only);

    // % is Display, ? is Debug.
    DEBUG_ACKS_MOD.then(|| {
        tracing::debug!(
            message = "mount",
            capabilities = ?capabilities,
            test_name_count = all_test_names.len(),
            acknowledgment_count = existing_acknowledgments.len(),
        );
    });

    let controller = AckListController::new(
        all_test_names,
        existing_acknowledgments,
        capabilities,
        options,
    );

    let (signal_sender, signal_receiver) = mpsc::unbounded_channel();

    AckApp {
        controller,
        gateway,
        signal_sender,
        signal_receiver,
        in_flight_count: 0,
    }
}

/// The mounted editor. One owner drives it: [`Self::dispatch`] for user events, and
/// [`Self::next_signal`] or [`Self::process_pending_signals`] for network completions.
/// The UI stays usable while calls are in flight.
#[derive(Debug)]
pub struct AckApp<G: PersistenceGateway> {
    controller: AckListController,
    gateway: Arc<G>,
    signal_sender: mpsc::UnboundedSender<AckSignal>,
    signal_receiver: mpsc::UnboundedReceiver<AckSignal>,
    in_flight_count: usize,
}

impl<G: PersistenceGateway> AckApp<G> {
    #[must_use]
    pub fn controller(&self) -> &AckListController { &self.controller }

    #[must_use]
    pub fn gateway(&self) -> &Arc<G> { &self.gateway }

    #[must_use]
    pub fn render(&self) -> ViewNode { self.controller.render() }

    /// Number of backend calls that have not settled yet.
    #[must_use]
    pub fn in_flight_count(&self) -> usize { self.in_flight_count }

    /// Handles one user event, and starts the backend call it asks for, if any.
    ///
    /// # Errors
    ///
    /// Whatever [`AckListController::handle_event`] rejects the event with. Nothing
    /// changed in that case.
    pub fn dispatch(&mut self, event: AckEvent) -> Result<(), AckError> {
        if let Some(effect) = self.controller.handle_event(event)? {
            self.spawn_effect(effect);
        }
        Ok(())
    }

    fn spawn_effect(&mut self, effect: Effect) {
        self.in_flight_count += 1;
        let gateway = Arc::clone(&self.gateway);
        let signal_sender = self.signal_sender.clone();
        tokio::spawn(async move {
            let signal = effect.run(gateway.as_ref()).await;
            // The receiver is gone only if the app was dropped, nobody is listening.
            drop(signal_sender.send(signal));
        });
    }

    fn apply(&mut self, signal: AckSignal) -> ListChange {
        self.in_flight_count = self.in_flight_count.saturating_sub(1);
        let change = self.controller.apply_signal(signal);

        // % is Display, ? is Debug.
        DEBUG_ACKS_MOD.then(|| {
            tracing::debug!(message = "signal applied", change = ?change);
        });

        change
    }

    /// Waits for the next backend call to settle and applies it. Returns [None] right
    /// away when nothing is in flight.
    pub async fn next_signal(&mut self) -> Option<ListChange> {
        if self.in_flight_count == 0 {
            return None;
        }
        let signal = self.signal_receiver.recv().await?;
        Some(self.apply(signal))
    }

    /// Applies every completion that already arrived, without waiting.
    pub fn process_pending_signals(&mut self) -> Vec<ListChange> {
        let mut acc = vec![];
        while let Ok(signal) = self.signal_receiver.try_recv() {
            acc.push(self.apply(signal));
        }
        acc
    }

    /// Waits until every backend call in flight has settled.
    pub async fn settle_all(&mut self) -> Vec<ListChange> {
        let mut acc = vec![];
        while let Some(change) = self.next_signal().await {
            acc.push(change);
        }
        acc
    }
}
