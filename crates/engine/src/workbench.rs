// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single orchestrating context: one matrix being edited, at most one
//! job being polled, and the history cache.

use crate::client::JobClient;
use crate::error::SubmitError;
use crate::history::HistoryStore;
use crate::orchestrator::PollingOrchestrator;
use roster_adapters::{HistoryApi, SolverApi};
use roster_core::{ConstraintMatrixModel, Event, Job, JobStatus, Quota, TaskId};
use std::time::Duration;
use tokio::sync::mpsc;

const EVENT_BUFFER: usize = 64;

pub struct Workbench<A: SolverApi + HistoryApi> {
    model: ConstraintMatrixModel,
    client: JobClient<A>,
    orchestrator: PollingOrchestrator<A>,
    history: HistoryStore<A>,
    event_tx: mpsc::Sender<Event>,
    event_rx: mpsc::Receiver<Event>,
    quota: Option<Quota>,
}

impl<A: SolverApi + HistoryApi> Workbench<A> {
    pub fn new(api: A, poll_interval: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let client = JobClient::new(api.clone());
        Self {
            model: ConstraintMatrixModel::default(),
            orchestrator: PollingOrchestrator::new(client.clone(), poll_interval, event_tx.clone()),
            client,
            history: HistoryStore::new(api),
            event_tx,
            event_rx,
            quota: None,
        }
    }

    pub fn with_model(mut self, model: ConstraintMatrixModel) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &ConstraintMatrixModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut ConstraintMatrixModel {
        &mut self.model
    }

    /// Last known quota; `None` means unknown.
    pub fn quota(&self) -> Option<&Quota> {
        self.quota.as_ref()
    }

    pub async fn refresh_quota(&mut self) -> Option<&Quota> {
        self.quota = self.client.fetch_quota().await;
        self.quota.as_ref()
    }

    /// Submit the current matrix and start tracking the new job, replacing
    /// any job tracked before.
    pub async fn submit(&mut self) -> Result<Job, SubmitError> {
        let job = self.client.submit_model(&self.model).await?;
        let _ = self.event_tx.try_send(Event::JobSubmitted {
            task_id: job.task_id.clone(),
        });
        self.orchestrator.start(job.clone());
        self.refresh_quota().await;
        Ok(job)
    }

    /// Track an already submitted task.
    pub fn track(&self, task_id: TaskId) {
        self.orchestrator.start(Job::submitted(task_id));
    }

    pub fn job(&self) -> Option<Job> {
        self.orchestrator.job()
    }

    pub fn cancel(&self) -> bool {
        self.orchestrator.cancel()
    }

    pub fn history(&self) -> &HistoryStore<A> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryStore<A> {
        &mut self.history
    }

    /// Receive the next lifecycle event and react to it.
    ///
    /// A completed job refreshes the history and selects its record.
    pub async fn next_event(&mut self) -> Option<Event> {
        let event = self.event_rx.recv().await?;
        self.react(&event).await;
        Some(event)
    }

    /// Drive events until the tracked job stops being polled.
    ///
    /// Returns `None` when no job is tracked.
    pub async fn wait_for_job(&mut self) -> Option<Job> {
        let tracked = self.orchestrator.job()?.task_id;
        loop {
            if !self.orchestrator.is_polling() {
                while let Ok(event) = self.event_rx.try_recv() {
                    self.react(&event).await;
                }
                return self.orchestrator.job();
            }
            match self.next_event().await? {
                Event::JobFinished { task_id, .. }
                | Event::JobLost { task_id }
                | Event::PollCancelled { task_id }
                    if task_id == tracked =>
                {
                    return self.orchestrator.job();
                }
                _ => {}
            }
        }
    }

    async fn react(&mut self, event: &Event) {
        tracing::debug!(event = %event.log_summary(), "workbench event");
        if let Event::JobFinished {
            task_id,
            status: JobStatus::Completed,
        } = event
        {
            self.show_completed(task_id).await;
        }
    }

    async fn show_completed(&mut self, task_id: &TaskId) {
        match self.history.list().await {
            Ok(records) => {
                let count = records.len();
                if !self.history.select_by_task_id(task_id) {
                    tracing::debug!(task_id = %task_id, "completed job not in history yet");
                }
                let _ = self.event_tx.try_send(Event::HistoryRefreshed { count });
            }
            Err(e) => tracing::warn!(task_id = %task_id, error = %e, "history refresh failed"),
        }
    }
}

#[cfg(test)]
#[path = "workbench_tests.rs"]
mod tests;
