// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::{AckKey, AcknowledgmentRecord};

use crate::{EntryId, GatewayResult, ModalSession};

/// A backend call settled. These come back over the app's channel, from the task that
/// ran the [`crate::Effect`].
#[derive(Debug)]
pub enum AckSignal {
    SaveSettled {
        entry: EntryId,
        session: ModalSession,
        /// Exactly what was sent.
        record: AcknowledgmentRecord,
        result: GatewayResult<AckKey>,
    },
    DeleteSettled {
        entry: EntryId,
        key: AckKey,
        result: GatewayResult<()>,
    },
}
