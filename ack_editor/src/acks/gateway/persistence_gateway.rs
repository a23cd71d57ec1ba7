// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use test_ack_schema::{AckKey, AcknowledgmentRecord};

use crate::{GatewayResult, WriteAccess};

/// The backend the editor persists to. Both calls require a [`WriteAccess`], which a
/// read-only mount never has.
///
/// The futures are spawned on the tokio runtime, hence `Send` and `'static` on the
/// implementor.
pub trait PersistenceGateway: Send + Sync + 'static {
    /// Creates (`record.key` is [None]) or overwrites a record. Resolves to the key the
    /// backend stored it under.
    fn save(
        &self,
        access: WriteAccess,
        record: AcknowledgmentRecord,
    ) -> impl Future<Output = GatewayResult<AckKey>> + Send;

    fn delete(
        &self,
        access: WriteAccess,
        key: AckKey,
    ) -> impl Future<Output = GatewayResult<()>> + Send;
}
