//! In-memory driver that records statements and replays canned responses.

use crate::error::{DbError, DbResult};
use crate::row::Row;
use crate::traits::{Connector, Driver};
use async_trait::async_trait;
use sf_core::{Context, DriverConfig};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// One queued reply.
#[derive(Debug)]
pub enum Response {
    Exec(u64),
    Rows(Vec<Row>),
    Error(DbError),
}

#[derive(Debug, Default)]
struct State {
    statements: Vec<String>,
    responses: VecDeque<Response>,
    connected: Option<DriverConfig>,
}

/// Recording driver for tests.
///
/// Every statement is recorded before a reply is taken from the queue.
/// With an empty queue `exec` returns 0 and `query` returns no rows. A reply
/// of the wrong shape (rows for `exec`, a count for `query`) is served as its
/// neutral value. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    state: Arc<Mutex<State>>,
    delay: Option<Duration>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait `delay` after recording each statement, before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_exec(&self, rows_affected: u64) -> &Self {
        self.lock().responses.push_back(Response::Exec(rows_affected));
        self
    }

    pub fn push_rows(&self, rows: Vec<Row>) -> &Self {
        self.lock().responses.push_back(Response::Rows(rows));
        self
    }

    pub fn push_error(&self, error: DbError) -> &Self {
        self.lock().responses.push_back(Response::Error(error));
        self
    }

    /// Statements received so far, in order.
    pub fn statements(&self) -> Vec<String> {
        self.lock().statements.clone()
    }

    pub fn last_statement(&self) -> Option<String> {
        self.lock().statements.last().cloned()
    }

    /// Configuration passed to the last `connect` call.
    pub fn connected_config(&self) -> Option<DriverConfig> {
        self.lock().connected.clone()
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.statements.clear();
        state.responses.clear();
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test must not poison unrelated assertions
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn record(&self, sql: &str) -> Option<Response> {
        let response = {
            let mut state = self.lock();
            state.statements.push(sql.to_string());
            state.responses.pop_front()
        };
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        response
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn exec(&self, _ctx: &Context, sql: &str) -> DbResult<u64> {
        match self.record(sql).await {
            Some(Response::Exec(n)) => Ok(n),
            Some(Response::Error(e)) => Err(e),
            Some(Response::Rows(_)) | None => Ok(0),
        }
    }

    async fn query(&self, _ctx: &Context, sql: &str) -> DbResult<Vec<Row>> {
        match self.record(sql).await {
            Some(Response::Rows(rows)) => Ok(rows),
            Some(Response::Error(e)) => Err(e),
            Some(Response::Exec(_)) | None => Ok(Vec::new()),
        }
    }

    fn db_type(&self) -> &'static str {
        "recording"
    }
}

#[async_trait]
impl Connector for RecordingDriver {
    async fn connect(&self, config: &DriverConfig) -> DbResult<Arc<dyn Driver>> {
        self.lock().connected = Some(config.clone());
        Ok(Arc::new(self.clone()))
    }
}

#[cfg(test)]
#[path = "recording_test.rs"]
mod tests;
