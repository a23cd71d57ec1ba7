// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::{AckKey, AcknowledgmentRecord};

use crate::{AckSignal, EntryId, ModalSession, PersistenceGateway, WriteAccess};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveRequest {
    pub access: WriteAccess,
    pub entry: EntryId,
    pub session: ModalSession,
    pub record: AcknowledgmentRecord,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub access: WriteAccess,
    pub entry: EntryId,
    pub key: AckKey,
}

/// A backend call the controller wants made. Both variants carry the [`WriteAccess`]
/// they were authorized with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Save(SaveRequest),
    Delete(DeleteRequest),
}

impl Effect {
    /// Makes the call and turns its outcome into the signal the controller reconciles
    /// with.
    pub async fn run<G: PersistenceGateway>(self, gateway: &G) -> AckSignal {
        match self {
            Effect::Save(SaveRequest {
                access,
                entry,
                session,
                record,
            }) => {
                let result = gateway.save(access, record.clone()).await;
                AckSignal::SaveSettled {
                    entry,
                    session,
                    record,
                    result,
                }
            }
            Effect::Delete(DeleteRequest { access, entry, key }) => {
                let result = gateway.delete(access, key.clone()).await;
                AckSignal::DeleteSettled { entry, key, result }
            }
        }
    }
}
