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


//! Fixtures shared by the unit tests: sample records and an in-process API.

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;

use crate::{
    domain::{Candidate, Job},
    infrastructure::{ApiSettings, HttpSettings, LoggingSettings, Settings},
};

pub(crate) fn job(id: &str, title: &str) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        status: "open".to_string(),
        employment_type: "full-time".to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub(crate) fn candidate(id: &str, name: &str) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        stage: "interview".to_string(),
        stage_id: None,
        job: None,
    }
}

pub(crate) fn settings(url: &str) -> Settings {
    Settings {
        api: ApiSettings {
            url: url.to_string(),
        },
        http: HttpSettings {
            timeout: Some(5_000),
        },
        logging: LoggingSettings {
            directory: "logs".into(),
            level: "info".to_string(),
        },
    }
}

#[derive(Clone)]
struct Backend {
    jobs: Arc<Vec<Job>>,
    candidates: Arc<HashMap<String, Vec<Candidate>>>,
}

#[derive(Deserialize)]
struct CandidatesQuery {
    job_id: String,
}

/// Serves `jobs` on `/jobs` and the candidates of each job id on
/// `/candidates?job_id=`. Unknown job ids get an empty list.
pub(crate) fn backend(jobs: Vec<Job>, candidates: Vec<(&str, Vec<Candidate>)>) -> Router {
    let backend = Backend {
        jobs: Arc::new(jobs),
        candidates: Arc::new(
            candidates
                .into_iter()
                .map(|(job_id, list)| (job_id.to_string(), list))
                .collect(),
        ),
    };

    Router::new()
        .route("/jobs", get(list_jobs))
        .route("/candidates", get(list_candidates))
        .with_state(backend)
}

async fn list_jobs(State(backend): State<Backend>) -> Json<Vec<Job>> {
    Json(backend.jobs.as_ref().clone())
}

async fn list_candidates(
    State(backend): State<Backend>,
    Query(query): Query<CandidatesQuery>,
) -> Json<Vec<Candidate>> {
    Json(
        backend
            .candidates
            .get(&query.job_id)
            .cloned()
            .unwrap_or_default(),
    )
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub(crate) async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A local URL nothing listens on.
pub(crate) async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
