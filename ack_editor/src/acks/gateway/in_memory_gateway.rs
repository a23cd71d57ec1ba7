// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap,
          sync::{Mutex, MutexGuard, PoisonError}};

use test_ack_schema::{AckKey, AcknowledgmentRecord};
use tokio::sync::watch;

use crate::{GatewayError, GatewayResult, PersistenceGateway, WriteAccess};

/// A request as the gateway received it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayRequest {
    Save(AcknowledgmentRecord),
    Delete(AckKey),
}

/// Keeps acknowledgments in memory and behaves like the dashboard backend: it assigns
/// keys on create, overwrites on save, and refuses to delete what it doesn't have.
///
/// Every request is recorded on arrival. On top of that it can be scripted to fail
/// requests, and held so that requests stay pending until released. The `acks` host
/// runs against it when there's no backend URL.
#[derive(Debug)]
pub struct InMemoryGateway {
    state: Mutex<InMemoryState>,
    hold: watch::Sender<bool>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    records: BTreeMap<AckKey, AcknowledgmentRecord>,
    requests: Vec<GatewayRequest>,
    last_key: u64,
    failures_to_script: usize,
    is_offline: bool,
}

impl InMemoryState {
    fn next_key(&mut self) -> AckKey {
        self.last_key += 1;
        AckKey::new(format!("ack-{}", self.last_key))
    }

    /// Records the request and decides, right now, whether it will fail.
    fn admit(&mut self, request: GatewayRequest) -> GatewayResult<()> {
        self.requests.push(request);
        if self.is_offline {
            return Err(GatewayError::Unavailable {
                reason: "offline".into(),
            });
        }
        if self.failures_to_script > 0 {
            self.failures_to_script -= 1;
            return Err(GatewayError::Unavailable {
                reason: "scripted failure".into(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self { Self::new(vec![]) }
}

impl InMemoryGateway {
    /// Starts with `existing` stored. Records that have no key get one.
    #[must_use]
    pub fn new(existing: Vec<AcknowledgmentRecord>) -> Self {
        let mut state = InMemoryState::default();
        for record in existing {
            let key = match record.key.clone() {
                Some(key) => key,
                None => state.next_key(),
            };
            state.records.insert(key.clone(), record.with_key(key));
        }
        Self {
            state: Mutex::new(state),
            hold: watch::channel(false).0,
        }
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The next `count` requests fail.
    pub fn fail_next(&self, count: usize) { self.lock().failures_to_script = count; }

    /// While offline every request fails.
    pub fn set_offline(&self, is_offline: bool) { self.lock().is_offline = is_offline; }

    /// Requests that arrive from now on (and those already waiting) stay pending until
    /// [`Self::release`].
    pub fn hold(&self) { self.hold.send_replace(true); }

    pub fn release(&self) { self.hold.send_replace(false); }

    #[must_use]
    pub fn requests(&self) -> Vec<GatewayRequest> { self.lock().requests.clone() }

    #[must_use]
    pub fn save_count(&self) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|it| matches!(it, GatewayRequest::Save(_)))
            .count()
    }

    #[must_use]
    pub fn delete_count(&self) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|it| matches!(it, GatewayRequest::Delete(_)))
            .count()
    }

    /// Stored records in key order.
    #[must_use]
    pub fn records(&self) -> Vec<AcknowledgmentRecord> {
        self.lock().records.values().cloned().collect()
    }

    async fn wait_while_held(&self) {
        let mut receiver = self.hold.subscribe();
        // The sender lives in `self`, so this can't fail while `self` is borrowed.
        drop(receiver.wait_for(|is_held| !*is_held).await);
    }
}

impl PersistenceGateway for InMemoryGateway {
    async fn save(
        &self,
        _access: WriteAccess,
        record: AcknowledgmentRecord,
    ) -> GatewayResult<AckKey> {
        let admitted = self.lock().admit(GatewayRequest::Save(record.clone()));
        self.wait_while_held().await;
        admitted?;

        let mut state = self.lock();
        let key = match record.key.clone() {
            Some(key) => key,
            None => state.next_key(),
        };
        state
            .records
            .insert(key.clone(), record.into_canonical().with_key(key.clone()));
        Ok(key)
    }

    async fn delete(&self, _access: WriteAccess, key: AckKey) -> GatewayResult<()> {
        let admitted = self.lock().admit(GatewayRequest::Delete(key.clone()));
        self.wait_while_held().await;
        admitted?;

        match self.lock().records.remove(&key) {
            Some(_) => Ok(()),
            None => Err(GatewayError::HttpStatus {
                method: "DELETE",
                url: key.to_string(),
                status: 404,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Capabilities, assert_eq2};

    fn access() -> WriteAccess { Capabilities::writable().write_access().unwrap() }

    #[tokio::test]
    async fn create_assigns_key_and_update_keeps_it() {
        let gateway = InMemoryGateway::default();
        let key = gateway
            .save(access(), AcknowledgmentRecord::new_draft("T"))
            .await
            .unwrap();
        assert_eq2!(key, AckKey::new("ack-1"));

        let updated = AcknowledgmentRecord {
            note: Some("flaky".into()),
            ..AcknowledgmentRecord::new_draft("T").with_key(key.clone())
        };
        assert_eq2!(gateway.save(access(), updated).await.unwrap(), key);
        assert_eq2!(gateway.records().len(), 1);
        assert_eq2!(gateway.records()[0].note.as_deref(), Some("flaky"));
    }

    #[tokio::test]
    async fn delete_unknown_key_fails() {
        let gateway = InMemoryGateway::default();
        let result = gateway.delete(access(), AckKey::new("nope")).await;
        assert!(matches!(
            result,
            Err(GatewayError::HttpStatus { status: 404, .. })
        ));
        assert_eq2!(gateway.delete_count(), 1);
    }

    #[tokio::test]
    async fn scripted_failures_then_recovery() {
        let gateway = InMemoryGateway::new(vec![
            AcknowledgmentRecord::new_draft("A").with_key(AckKey::new("k1")),
        ]);
        gateway.fail_next(1);
        assert!(gateway.delete(access(), AckKey::new("k1")).await.is_err());
        assert_eq2!(gateway.records().len(), 1);
        assert!(gateway.delete(access(), AckKey::new("k1")).await.is_ok());
        assert!(gateway.records().is_empty());

        gateway.set_offline(true);
        assert!(matches!(
            gateway
                .save(access(), AcknowledgmentRecord::new_draft("B"))
                .await,
            Err(GatewayError::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn held_requests_stay_pending_until_released() {
        let gateway = Arc::new(InMemoryGateway::default());
        gateway.hold();

        let task = tokio::spawn({
            let gateway = Arc::clone(&gateway);
            async move {
                gateway
                    .save(access(), AcknowledgmentRecord::new_draft("T"))
                    .await
            }
        });

        // Recorded on arrival, but not applied.
        while gateway.save_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(gateway.records().is_empty());
        assert!(!task.is_finished());

        gateway.release();
        assert_eq2!(task.await.unwrap().unwrap(), AckKey::new("ack-1"));
        assert_eq2!(gateway.records().len(), 1);
    }
}
