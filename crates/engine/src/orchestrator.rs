// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polls a submitted job until it reaches a terminal status.
//!
//! One cycle is active at a time. Each cycle is a spawned task that sleeps
//! for the poll interval, issues one status check, applies the result and
//! only then schedules the next check, so checks for a task never overlap.
//! Every cycle carries a generation number; results from a cycle that was
//! cancelled or replaced are dropped without touching the job. Events are
//! delivered without backpressure, so a receiver that is never drained
//! cannot stall polling.

use crate::client::JobClient;
use crate::error::PollError;
use parking_lot::Mutex;
use roster_adapters::SolverApi;
use roster_core::{Event, Job, JobStatusUpdate, TaskId, Tracking, Transition};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

#[derive(Default)]
struct PollState {
    generation: u64,
    job: Option<Job>,
    /// Present while a cycle is running.
    shutdown: Option<oneshot::Sender<()>>,
}

struct Cycle<A: SolverApi> {
    client: JobClient<A>,
    interval: Duration,
    state: Arc<Mutex<PollState>>,
    events: mpsc::Sender<Event>,
    generation: u64,
    task_id: TaskId,
    shutdown_rx: oneshot::Receiver<()>,
}

/// Owns the tracked job and its polling cycle.
///
/// Dropping the orchestrator cancels the active cycle.
pub struct PollingOrchestrator<A: SolverApi> {
    client: JobClient<A>,
    interval: Duration,
    events: mpsc::Sender<Event>,
    state: Arc<Mutex<PollState>>,
}

impl<A: SolverApi> PollingOrchestrator<A> {
    pub fn new(client: JobClient<A>, interval: Duration, events: mpsc::Sender<Event>) -> Self {
        Self {
            client,
            interval,
            events,
            state: Arc::new(Mutex::new(PollState::default())),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Track `job`, cancelling the cycle of any job tracked before.
    ///
    /// Must be called within a tokio runtime.
    pub fn start(&self, job: Job) {
        let task_id = job.task_id.clone();
        let needs_poll = job.needs_poll();
        let finished = job.is_terminal().then_some(job.status);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let (replaced, generation) = {
            let mut state = self.state.lock();
            let replaced = stop_locked(&mut state);
            state.generation += 1;
            state.job = Some(job);
            if needs_poll {
                state.shutdown = Some(shutdown_tx);
            }
            (replaced, state.generation)
        };

        if let Some(old) = replaced {
            self.emit_now(Event::PollCancelled { task_id: old });
        }
        if let Some(status) = finished {
            self.emit_now(Event::JobFinished { task_id, status });
            return;
        }
        if !needs_poll {
            return;
        }

        tracing::info!(
            task_id = %task_id,
            interval_ms = self.interval.as_millis() as u64,
            "polling started"
        );
        tokio::spawn(poll_loop(Cycle {
            client: self.client.clone(),
            interval: self.interval,
            state: Arc::clone(&self.state),
            events: self.events.clone(),
            generation,
            task_id,
            shutdown_rx,
        }));
    }

    /// Stop the active cycle. No further status checks fire for it and an
    /// in-flight check's result is discarded.
    ///
    /// Returns false when nothing was being polled.
    pub fn cancel(&self) -> bool {
        let cancelled = stop_locked(&mut self.state.lock());
        match cancelled {
            Some(task_id) => {
                tracing::info!(task_id = %task_id, "polling cancelled");
                self.emit_now(Event::PollCancelled { task_id });
                true
            }
            None => false,
        }
    }

    /// Snapshot of the tracked job.
    pub fn job(&self) -> Option<Job> {
        self.state.lock().job.clone()
    }

    pub fn is_polling(&self) -> bool {
        self.state.lock().shutdown.is_some()
    }

    fn emit_now(&self, event: Event) {
        if let Err(e) = self.events.try_send(event) {
            tracing::debug!(error = %e, "event dropped");
        }
    }
}

impl<A: SolverApi> Drop for PollingOrchestrator<A> {
    fn drop(&mut self) {
        stop_locked(&mut self.state.lock());
    }
}

/// Signal the running cycle to stop and invalidate its generation.
fn stop_locked(state: &mut PollState) -> Option<TaskId> {
    let shutdown = state.shutdown.take()?;
    let _ = shutdown.send(());
    state.generation += 1;
    let job = state.job.as_mut()?;
    if job.tracking != Tracking::Polling {
        return None;
    }
    job.mark_cancelled();
    Some(job.task_id.clone())
}

async fn poll_loop<A: SolverApi>(cycle: Cycle<A>) {
    let Cycle {
        client,
        interval,
        state,
        events,
        generation,
        task_id,
        mut shutdown_rx,
    } = cycle;

    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = &mut shutdown_rx => break,
        }

        let result = tokio::select! {
            result = client.poll_status(&task_id) => result,
            _ = &mut shutdown_rx => break,
        };

        let (emitted, done) = {
            let mut state = state.lock();
            if state.generation != generation {
                break;
            }
            let Some(job) = state.job.as_mut() else {
                break;
            };
            apply_result(job, result)
        };

        if let Some(event) = emitted {
            tracing::debug!(event = %event.log_summary(), "poll result");
            // Never wait on the receiver; a full buffer drops the event.
            if let Err(e) = events.try_send(event) {
                tracing::debug!(task_id = %task_id, error = %e, "event dropped");
            }
        }
        if done {
            // Only after the final event is queued, so "not polling" implies
            // the event is observable unless the buffer was full.
            let mut state = state.lock();
            if state.generation == generation {
                state.shutdown = None;
            }
            break;
        }
    }
    tracing::debug!(task_id = %task_id, "polling stopped");
}

/// Merge one status-check outcome into the job. Returns the event to emit
/// and whether the cycle is over.
fn apply_result(
    job: &mut Job,
    result: Result<JobStatusUpdate, PollError>,
) -> (Option<Event>, bool) {
    let task_id = job.task_id.clone();
    match result {
        Ok(update) => match job.apply(update) {
            Transition::Advanced { to, .. } if to.is_terminal() => {
                tracing::info!(task_id = %task_id, status = %to, polls = job.polls, "job finished");
                (Some(Event::JobFinished { task_id, status: to }), true)
            }
            Transition::Advanced { to, .. } => {
                (Some(Event::JobUpdated { task_id, status: to }), false)
            }
            Transition::Unchanged => (None, false),
            Transition::Ignored => (None, true),
        },
        Err(PollError::Transient(e)) => {
            tracing::warn!(task_id = %task_id, error = %e, "status check failed, retrying");
            let error = e.to_string();
            (Some(Event::PollRetry { task_id, error }), false)
        }
        Err(PollError::NotFound(_)) => {
            tracing::warn!(task_id = %task_id, "task unknown to solver, polling stopped");
            job.mark_lost();
            (Some(Event::JobLost { task_id }), true)
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
