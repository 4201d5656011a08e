// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Local cache of the remote history store.
//!
//! The remote store is always written first; the cache is only touched once
//! the remote call succeeded. Renames are mirrored into the cache without a
//! re-fetch. Concurrent mutations are not queued: the last one to complete
//! wins.

use crate::error::HistoryError;
use roster_adapters::HistoryApi;
use roster_core::{HistoryRecord, TaskId};

pub struct HistoryStore<A> {
    api: A,
    /// `None` until the first successful load.
    records: Option<Vec<HistoryRecord>>,
    selected: Option<TaskId>,
}

impl<A: HistoryApi> HistoryStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            records: None,
            selected: None,
        }
    }

    /// Replace the cache with the remote list. On failure the cache is kept.
    ///
    /// A selection whose record disappeared is cleared.
    pub async fn list(&mut self) -> Result<&[HistoryRecord], HistoryError> {
        let records = self.api.list_history().await.map_err(HistoryError::Load)?;
        if let Some(selected) = &self.selected {
            if !records.iter().any(|r| &r.task_id == selected) {
                self.selected = None;
            }
        }
        Ok(self.records.insert(records))
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// Cached records in remote order; empty before the first load.
    pub fn records(&self) -> &[HistoryRecord] {
        self.records.as_deref().unwrap_or(&[])
    }

    pub fn get(&self, task_id: &TaskId) -> Option<&HistoryRecord> {
        self.records().iter().find(|r| &r.task_id == task_id)
    }

    /// Rename a cached record.
    ///
    /// An empty title or the current title is a successful no-op that never
    /// reaches the remote store.
    pub async fn rename(&mut self, task_id: &TaskId, new_title: &str) -> Result<(), HistoryError> {
        if new_title.is_empty() {
            tracing::debug!(task_id = %task_id, "rename skipped, empty title");
            return Ok(());
        }
        let current = self
            .get(task_id)
            .ok_or_else(|| HistoryError::UnknownTask(task_id.clone()))?;
        if current.title() == new_title {
            tracing::debug!(task_id = %task_id, "rename skipped");
            return Ok(());
        }

        self.api
            .rename(task_id, new_title)
            .await
            .map_err(|source| HistoryError::Rename {
                task_id: task_id.clone(),
                source,
            })?;

        if let Some(record) = self.record_mut(task_id) {
            record.title = Some(new_title.to_string());
        }
        Ok(())
    }

    /// Delete a cached record. Confirmation is the caller's concern.
    ///
    /// Deleting the selected record clears the selection.
    pub async fn delete(&mut self, task_id: &TaskId) -> Result<HistoryRecord, HistoryError> {
        if self.get(task_id).is_none() {
            return Err(HistoryError::UnknownTask(task_id.clone()));
        }

        self.api
            .delete(task_id)
            .await
            .map_err(|source| HistoryError::Delete {
                task_id: task_id.clone(),
                source,
            })?;

        if self.selected.as_ref() == Some(task_id) {
            self.selected = None;
        }
        let records = self
            .records
            .as_mut()
            .ok_or_else(|| HistoryError::UnknownTask(task_id.clone()))?;
        let pos = records
            .iter()
            .position(|r| &r.task_id == task_id)
            .ok_or_else(|| HistoryError::UnknownTask(task_id.clone()))?;
        Ok(records.remove(pos))
    }

    /// Select the loaded record for `task_id`. Returns whether one was found;
    /// a miss leaves the selection unchanged.
    pub fn select_by_task_id(&mut self, task_id: &TaskId) -> bool {
        if self.get(task_id).is_none() {
            return false;
        }
        self.selected = Some(task_id.clone());
        true
    }

    pub fn selected(&self) -> Option<&HistoryRecord> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    fn record_mut(&mut self, task_id: &TaskId) -> Option<&mut HistoryRecord> {
        self.records
            .as_mut()?
            .iter_mut()
            .find(|r| &r.task_id == task_id)
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
