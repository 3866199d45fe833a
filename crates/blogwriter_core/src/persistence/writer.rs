//! Background writer that serializes slot saves.
//!
//! # Responsibility
//! - Own the `PersistenceBridge` on a dedicated thread.
//! - Accept fire-and-forget save requests from the store's mutation hook.
//!
//! # Invariants
//! - Saves execute one at a time, in the order they were requested, so the
//!   last requested snapshot is always the last one written.
//! - A failed save is logged and counted; it is never retried.
//! - Dropping the writer drains saves queued so far and stops the thread,
//!   even while `SaveHandle` clones are still alive; later requests are
//!   logged and discarded.

use crate::model::record::Record;
use crate::persistence::bridge::PersistenceBridge;
use crate::persistence::storage::KeyValueStorage;
use crate::store::action::StoreEvent;
use crate::store::record_store::{RecordStore, SubscriptionId};
use log::{debug, warn};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

const WRITER_THREAD_NAME: &str = "blogwriter-persist";

enum WriteCommand {
    Save(Vec<Record>),
    Flush(Sender<()>),
    /// Ends the worker after everything queued ahead of it has run.
    Shutdown,
}

#[derive(Debug, Default)]
struct WriterCounters {
    saved: AtomicUsize,
    failed: AtomicUsize,
}

/// Cloneable, thread-safe handle for queueing saves.
#[derive(Clone)]
pub struct SaveHandle {
    sender: Sender<WriteCommand>,
}

impl SaveHandle {
    /// Queues a snapshot for writing and returns immediately.
    pub fn request_save(&self, records: Vec<Record>) {
        let count = records.len();
        if self.sender.send(WriteCommand::Save(records)).is_err() {
            warn!(
                "event=records_save module=persistence status=error error_code=writer_stopped count={count}"
            );
        }
    }
}

/// Owner of the background persistence thread.
pub struct PersistenceWriter {
    sender: Sender<WriteCommand>,
    worker: Option<JoinHandle<()>>,
    counters: Arc<WriterCounters>,
}

impl PersistenceWriter {
    /// Moves `bridge` onto a new writer thread.
    ///
    /// # Errors
    /// - Returns the OS error when the thread cannot be spawned.
    pub fn spawn<S>(bridge: PersistenceBridge<S>) -> std::io::Result<Self>
    where
        S: KeyValueStorage + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let counters = Arc::new(WriterCounters::default());
        let worker_counters = Arc::clone(&counters);
        let worker = thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || run_writer(bridge, receiver, &worker_counters))?;

        Ok(Self {
            sender,
            worker: Some(worker),
            counters,
        })
    }

    /// Returns a handle that can be moved into store observers.
    pub fn handle(&self) -> SaveHandle {
        SaveHandle {
            sender: self.sender.clone(),
        }
    }

    /// Blocks until every save queued before this call has finished.
    pub fn flush(&self) {
        let (ack_sender, ack_receiver) = mpsc::channel();
        if self.sender.send(WriteCommand::Flush(ack_sender)).is_ok() {
            let _ = ack_receiver.recv();
        }
    }

    /// Number of saves that reached storage successfully.
    pub fn saved_count(&self) -> usize {
        self.counters.saved.load(Ordering::SeqCst)
    }

    /// Number of saves that failed and were dropped.
    pub fn failed_count(&self) -> usize {
        self.counters.failed.load(Ordering::SeqCst)
    }

    /// Drains queued saves and stops the writer thread.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = self.sender.send(WriteCommand::Shutdown);
        if worker.join().is_err() {
            warn!("event=writer_stop module=persistence status=error error_code=writer_panicked");
        }
    }
}

impl Drop for PersistenceWriter {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Registers the on-mutation hook that persists every committed change.
///
/// `StoreEvent::Restored` is skipped so the startup restore never writes the
/// slot it was just read from.
pub fn persist_on_change(store: &mut RecordStore, handle: SaveHandle) -> SubscriptionId {
    store.subscribe(move |event, records| {
        if matches!(event, StoreEvent::Restored) {
            return;
        }
        handle.request_save(records.to_vec());
    })
}

fn run_writer<S: KeyValueStorage>(
    mut bridge: PersistenceBridge<S>,
    receiver: Receiver<WriteCommand>,
    counters: &WriterCounters,
) {
    for command in receiver {
        match command {
            WriteCommand::Save(records) => {
                let started_at = Instant::now();
                match bridge.save(&records) {
                    Ok(()) => {
                        counters.saved.fetch_add(1, Ordering::SeqCst);
                        debug!(
                            "event=records_save module=persistence status=ok key={} count={} duration_ms={}",
                            bridge.key(),
                            records.len(),
                            started_at.elapsed().as_millis()
                        );
                    }
                    Err(err) => {
                        counters.failed.fetch_add(1, Ordering::SeqCst);
                        warn!(
                            "event=records_save module=persistence status=error key={} count={} error={}",
                            bridge.key(),
                            records.len(),
                            err
                        );
                    }
                }
            }
            WriteCommand::Flush(ack) => {
                let _ = ack.send(());
            }
            WriteCommand::Shutdown => break,
        }
    }
    debug!("event=writer_stop module=persistence status=ok key={}", bridge.key());
}
