use crate::article::Batch;
use crate::config::Config;
use crate::newsroom;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// The edition currently on the press
#[derive(Debug, Clone)]
pub struct EditionState {
    /// Date the edition is printed for
    pub date: NaiveDate,
    /// `None` until the first fetch completes
    pub batch: Option<Arc<Batch>>,
    pub loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    in_flight: usize,
}

impl EditionState {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            batch: None,
            loading: false,
            last_updated: None,
            in_flight: 0,
        }
    }
}

/// Shared handle to the edition and the means to refresh it
#[derive(Clone)]
pub struct Newsroom {
    config: Arc<Config>,
    client: reqwest::Client,
    state: Arc<RwLock<EditionState>>,
}

impl Newsroom {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            state: Arc::new(RwLock::new(EditionState::empty(Local::now().date_naive()))),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch today's edition and swap it in
    pub async fn refresh(&self) {
        self.refresh_for(Local::now().date_naive()).await
    }

    /// Fetch the edition for `date` and swap it in.
    ///
    /// Concurrent refreshes each run to completion; the last one to finish
    /// provides the visible batch. `loading` stays set while any is running.
    pub async fn refresh_for(&self, date: NaiveDate) {
        {
            let mut state = self.state.write().await;
            state.in_flight += 1;
            state.loading = true;
        }

        let batch = newsroom::fetch_batch(&self.client, &self.config, date).await;
        let count = batch.len();

        let mut state = self.state.write().await;
        state.date = date;
        state.batch = Some(Arc::new(batch));
        state.last_updated = Some(Utc::now());
        state.in_flight = state.in_flight.saturating_sub(1);
        state.loading = state.in_flight > 0;
        info!("Edition for {} now on the press ({} articles)", date, count);
    }

    /// Copy of the current state; the batch itself is shared, not cloned
    pub async fn snapshot(&self) -> EditionState {
        self.state.read().await.clone()
    }
}
