// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    domain::{DashboardData, Job},
    event::{Event, UiData},
    http_client::HttpClient,
    infrastructure::Settings,
    ui::{load_candidates, load_jobs},
};

pub struct App {
    pub should_quit: bool,
    pub event_tx: Option<UnboundedSender<Event>>,

    pub dashboard_data: DashboardData,
    /// Row of the jobs table under the cursor.
    pub job_cursor: usize,

    // Help panel
    pub show_help: bool,

    /// Drives the loading spinner.
    pub ticks: usize,

    pub http_client: Arc<HttpClient>,
}

impl App {
    pub fn new(config: &Settings) -> Result<Self> {
        Ok(Self {
            should_quit: false,
            event_tx: None,
            dashboard_data: DashboardData::new(),
            job_cursor: 0,
            show_help: false,
            ticks: 0,
            http_client: Arc::new(HttpClient::new(config)?),
        })
    }

    pub fn set_event_tx(&mut self, tx: UnboundedSender<Event>) {
        self.event_tx = Some(tx);
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Help panel takes priority
        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') | KeyCode::Char('h') => {
                self.show_help = true;
            }
            KeyCode::Char('r') => self.refresh_jobs(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.job_cursor = self.job_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.job_cursor + 1 < self.dashboard_data.jobs.len() {
                    self.job_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(job) = self.highlighted_job().cloned() {
                    self.select_job(job);
                }
            }
            _ => {}
        }
    }

    pub fn on_data_loaded(&mut self, data: UiData) {
        match data {
            UiData::Jobs { request, result } => {
                self.dashboard_data.finish_jobs_refresh(request, result);
                let last = self.dashboard_data.jobs.len().saturating_sub(1);
                self.job_cursor = self.job_cursor.min(last);
            }
            UiData::Candidates {
                request,
                job_id,
                result,
            } => {
                self.dashboard_data
                    .finish_candidates_load(request, &job_id, result);
            }
        }
    }

    pub fn highlighted_job(&self) -> Option<&Job> {
        self.dashboard_data.jobs.get(self.job_cursor)
    }

    /// Fetches the job list in the background. Ignored while a refresh is
    /// already in flight.
    pub fn refresh_jobs(&mut self) {
        let Some(event_tx) = self.event_tx.clone() else {
            tracing::warn!("Cannot refresh the jobs, event_tx is not set");
            return;
        };
        let Some(request) = self.dashboard_data.begin_jobs_refresh() else {
            tracing::debug!("Jobs refresh already in flight");
            return;
        };

        let http_client = Arc::clone(&self.http_client);
        tokio::spawn(async move {
            if let Err(e) = load_jobs(http_client, event_tx, request).await {
                tracing::warn!("Jobs loaded but not delivered: {e}");
            }
        });
    }

    pub fn select_job(&mut self, job: Job) {
        tracing::debug!("Selected job {} ({})", job.id, job.title);
        let job_id = job.id.clone();
        self.dashboard_data.select_job(job);
        self.load_candidates(job_id);
    }

    /// Fetches the candidates of `job_id` in the background. The response is
    /// only applied if `job_id` is still selected and no newer candidates
    /// request was issued meanwhile.
    pub fn load_candidates(&mut self, job_id: String) {
        let Some(event_tx) = self.event_tx.clone() else {
            tracing::warn!("Cannot load the candidates, event_tx is not set");
            return;
        };
        let request = self.dashboard_data.begin_candidates_load();

        let http_client = Arc::clone(&self.http_client);
        tokio::spawn(async move {
            if let Err(e) = load_candidates(http_client, event_tx, request, job_id).await {
                tracing::warn!("Candidates loaded but not delivered: {e}");
            }
        });
    }
}
