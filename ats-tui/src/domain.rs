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


use serde::{Deserialize, Serialize};

use crate::{TuiResult, error::TuiError};

/// A job posting as returned by `GET /jobs`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub status: String,
    pub employment_type: String,
    /// Kept verbatim, formatted only when rendered.
    pub created_at: String,
}

/// An applicant for a job as returned by `GET /candidates`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    /// Id of the job the application belongs to, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
}

/// Token handed out for every fetch so that superseded responses can be told
/// apart from the one the view is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Busy status of one kind of fetch.
///
/// Only the most recently issued request is awaited; settling any other
/// request is a no-op.
#[derive(Debug, Default)]
pub struct LoadTracker {
    issued: u64,
    pending: Option<RequestId>,
}

impl LoadTracker {
    pub fn begin(&mut self) -> RequestId {
        self.issued += 1;
        let request = RequestId(self.issued);
        self.pending = Some(request);
        request
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns `false` when `request` is not the one being awaited.
    pub fn settle(&mut self, request: RequestId) -> bool {
        if self.pending == Some(request) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Default)]
pub struct DashboardData {
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub selected_job: Option<Job>,
    pub jobs_error: Option<String>,
    pub candidates_error: Option<String>,
    /// Whether the last settled jobs fetch failed to reach the API at all.
    pub api_unreachable: bool,
    jobs_load: LoadTracker,
    candidates_load: LoadTracker,
}

impl DashboardData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading_jobs(&self) -> bool {
        self.jobs_load.is_loading()
    }

    pub fn is_loading_candidates(&self) -> bool {
        self.candidates_load.is_loading()
    }

    /// Starts a jobs refresh, or returns `None` if one is already in flight.
    pub fn begin_jobs_refresh(&mut self) -> Option<RequestId> {
        if self.jobs_load.is_loading() {
            return None;
        }
        Some(self.jobs_load.begin())
    }

    pub fn finish_jobs_refresh(&mut self, request: RequestId, result: TuiResult<Vec<Job>>) {
        if !self.jobs_load.settle(request) {
            tracing::debug!("Discarding superseded jobs response {request:?}");
            return;
        }

        match result {
            Ok(jobs) => {
                tracing::info!("Loaded {} jobs", jobs.len());
                self.jobs = jobs;
                self.jobs_error = None;
                self.api_unreachable = false;
            }
            Err(err) => {
                tracing::error!("Failed to load the jobs: {err:?}");
                self.api_unreachable = matches!(err, TuiError::Transport(_));
                self.jobs_error = Some(err.to_string());
            }
        }
    }

    /// Makes `job` the selected job. The candidates of a previously selected,
    /// different job are dropped right away.
    pub fn select_job(&mut self, job: Job) {
        let same_job = self
            .selected_job
            .as_ref()
            .is_some_and(|selected| selected.id == job.id);

        if !same_job {
            self.candidates.clear();
            self.candidates_error = None;
        }
        self.selected_job = Some(job);
    }

    pub fn begin_candidates_load(&mut self) -> RequestId {
        self.candidates_load.begin()
    }

    pub fn finish_candidates_load(
        &mut self,
        request: RequestId,
        job_id: &str,
        result: TuiResult<Vec<Candidate>>,
    ) {
        let selected = self.selected_job.as_ref().map(|job| job.id.as_str());
        if selected != Some(job_id) {
            tracing::debug!(
                "Discarding candidates of job {job_id}, selection is now {selected:?}"
            );
            self.candidates_load.settle(request);
            return;
        }
        if !self.candidates_load.settle(request) {
            tracing::debug!("Discarding superseded candidates response {request:?}");
            return;
        }

        match result {
            Ok(candidates) => {
                tracing::info!("Loaded {} candidates for job {job_id}", candidates.len());
                self.candidates = candidates;
                self.candidates_error = None;
            }
            Err(err) => {
                tracing::error!("Failed to load the candidates of job {job_id}: {err:?}");
                self.candidates_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{candidate, job};

    fn channel_closed<T>() -> TuiResult<T> {
        Err(TuiError::ChannelClosed)
    }

    #[test]
    fn decodes_the_wire_shapes() {
        let jobs: Vec<Job> = serde_json::from_str(
            r#"[{"id":"1","title":"Engineer","status":"open","employmentType":"full-time","createdAt":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(jobs, vec![job("1", "Engineer")]);

        let candidates: Vec<Candidate> = serde_json::from_str(
            r#"[{"id":"a","name":"Ada","email":"ada@x.com","stage":"interview","stageId":"s1","job":"1"}]"#,
        )
        .unwrap();
        assert_eq!(candidates[0].stage_id.as_deref(), Some("s1"));
        assert_eq!(candidates[0].job.as_deref(), Some("1"));
    }

    #[test]
    fn tracker_only_settles_the_latest_request() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_ne!(first, second);

        assert!(!tracker.settle(first));
        assert!(tracker.is_loading());
        assert!(tracker.settle(second));
        assert!(!tracker.is_loading());
        assert!(!tracker.settle(second));
    }

    #[test]
    fn jobs_refresh_replaces_the_list_in_order() {
        let mut data = DashboardData::new();
        let request = data.begin_jobs_refresh().unwrap();
        assert!(data.is_loading_jobs());

        let jobs = vec![job("2", "Designer"), job("1", "Engineer")];
        data.finish_jobs_refresh(request, Ok(jobs.clone()));

        assert_eq!(data.jobs, jobs);
        assert!(!data.is_loading_jobs());
        assert_eq!(data.jobs_error, None);
    }

    #[test]
    fn refresh_is_ignored_while_one_is_in_flight() {
        let mut data = DashboardData::new();
        assert!(data.begin_jobs_refresh().is_some());
        assert!(data.begin_jobs_refresh().is_none());
    }

    #[test]
    fn failed_refresh_keeps_jobs_and_records_the_error() {
        let mut data = DashboardData::new();
        let request = data.begin_jobs_refresh().unwrap();
        data.finish_jobs_refresh(request, Ok(vec![job("1", "Engineer")]));

        let request = data.begin_jobs_refresh().unwrap();
        data.finish_jobs_refresh(request, channel_closed());

        assert_eq!(data.jobs, vec![job("1", "Engineer")]);
        assert!(!data.is_loading_jobs());
        assert_eq!(
            data.jobs_error.as_deref(),
            Some("the event channel is closed")
        );

        let request = data.begin_jobs_refresh().unwrap();
        data.finish_jobs_refresh(request, Ok(vec![]));
        assert!(data.jobs.is_empty());
        assert_eq!(data.jobs_error, None);
    }

    #[test]
    fn late_candidates_of_a_previous_selection_are_dropped() {
        let mut data = DashboardData::new();

        data.select_job(job("a", "Engineer"));
        let for_a = data.begin_candidates_load();
        data.select_job(job("b", "Designer"));
        let for_b = data.begin_candidates_load();

        data.finish_candidates_load(for_b, "b", Ok(vec![candidate("2", "Grace")]));
        data.finish_candidates_load(for_a, "a", Ok(vec![candidate("1", "Ada")]));

        assert_eq!(data.candidates, vec![candidate("2", "Grace")]);
        assert!(!data.is_loading_candidates());
    }

    #[test]
    fn early_candidates_of_a_previous_selection_are_dropped() {
        let mut data = DashboardData::new();

        data.select_job(job("a", "Engineer"));
        let for_a = data.begin_candidates_load();
        data.select_job(job("b", "Designer"));
        let for_b = data.begin_candidates_load();

        data.finish_candidates_load(for_a, "a", Ok(vec![candidate("1", "Ada")]));
        assert!(data.candidates.is_empty());
        assert!(data.is_loading_candidates());

        data.finish_candidates_load(for_b, "b", Ok(vec![candidate("2", "Grace")]));
        assert_eq!(data.candidates, vec![candidate("2", "Grace")]);
    }

    #[test]
    fn stale_failures_do_not_surface() {
        let mut data = DashboardData::new();

        data.select_job(job("a", "Engineer"));
        let for_a = data.begin_candidates_load();
        data.select_job(job("b", "Designer"));
        let for_b = data.begin_candidates_load();

        data.finish_candidates_load(for_a, "a", channel_closed());
        assert_eq!(data.candidates_error, None);
        data.finish_candidates_load(for_b, "b", Ok(vec![]));
        assert_eq!(data.candidates_error, None);
    }

    #[test]
    fn failed_reload_of_the_selected_job_keeps_its_candidates() {
        let mut data = DashboardData::new();
        data.select_job(job("a", "Engineer"));
        let request = data.begin_candidates_load();
        data.finish_candidates_load(request, "a", Ok(vec![candidate("1", "Ada")]));

        data.select_job(job("a", "Engineer"));
        let request = data.begin_candidates_load();
        assert!(data.is_loading_candidates());
        data.finish_candidates_load(request, "a", channel_closed());

        assert_eq!(data.candidates, vec![candidate("1", "Ada")]);
        assert_eq!(
            data.candidates_error.as_deref(),
            Some("the event channel is closed")
        );
        assert!(!data.is_loading_candidates());

        let request = data.begin_candidates_load();
        data.finish_candidates_load(request, "a", Ok(vec![]));
        assert!(data.candidates.is_empty());
        assert_eq!(data.candidates_error, None);
    }

    #[test]
    fn only_transport_failures_mark_the_api_unreachable() {
        let mut data = DashboardData::new();
        let request = data.begin_jobs_refresh().unwrap();
        let decode = serde_json::from_str::<Vec<Job>>("{}").map_err(TuiError::from);
        data.finish_jobs_refresh(request, decode);

        assert!(data.jobs_error.is_some());
        assert!(!data.api_unreachable);
    }

    #[test]
    fn selecting_another_job_clears_candidates() {
        let mut data = DashboardData::new();
        data.select_job(job("a", "Engineer"));
        let request = data.begin_candidates_load();
        data.finish_candidates_load(request, "a", Ok(vec![candidate("1", "Ada")]));

        data.select_job(job("a", "Engineer"));
        assert_eq!(data.candidates.len(), 1);

        data.select_job(job("b", "Designer"));
        assert!(data.candidates.is_empty());
        assert_eq!(data.selected_job.as_ref().map(|j| j.id.as_str()), Some("b"));
    }

    #[test]
    fn jobs_and_candidates_loads_are_independent() {
        let mut data = DashboardData::new();
        let jobs_request = data.begin_jobs_refresh().unwrap();
        data.select_job(job("a", "Engineer"));
        let candidates_request = data.begin_candidates_load();

        data.finish_jobs_refresh(jobs_request, Ok(vec![job("a", "Engineer")]));
        assert!(!data.is_loading_jobs());
        assert!(data.is_loading_candidates());

        data.finish_candidates_load(candidates_request, "a", Ok(vec![]));
        assert!(!data.is_loading_candidates());
    }
}
