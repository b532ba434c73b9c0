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


use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    TuiResult,
    domain::{Candidate, Job},
    error::TuiError,
    infrastructure::Settings,
};

/// Read-only client for the jobs and candidates API.
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    pub fn new(config: &Settings) -> TuiResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http.timeout {
            builder = builder.timeout(Duration::from_millis(timeout));
        }

        Ok(Self {
            base_url: config.api.url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_jobs(&self) -> TuiResult<Vec<Job>> {
        self.json::<Vec<Job>>("jobs", &[]).await
    }

    pub async fn list_candidates(&self, job_id: &str) -> TuiResult<Vec<Candidate>> {
        self.json::<Vec<Candidate>>("candidates", &[("job_id", job_id)])
            .await
    }

    async fn json<R>(&self, path: &str, query: &[(&str, &str)]) -> TuiResult<R>
    where
        R: std::fmt::Debug + DeserializeOwned,
    {
        let response = self
            .get(path, query)
            .await?
            .error_for_status()
            .map_err(TuiError::Transport)
            .inspect_err(|err| tracing::error!("HTTP error status: {err:?}"))?;

        let body = response.bytes().await.map_err(TuiError::Transport)?;

        serde_json::from_slice::<R>(&body)
            .map_err(TuiError::Decode)
            .inspect(|data| tracing::trace!("Loaded: {data:?}"))
            .inspect_err(|err| tracing::error!("Unexpected body from /{path}: {err:?}"))
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> TuiResult<Response> {
        let url = self.url(path);
        tracing::trace!("Going to make a request to {url} {query:?}");
        self.client
            .get(&url)
            .query(query)
            .send()
            .await
            .inspect_err(|err| tracing::error!("The HTTP GET request failed: {err:?}"))
            .map_err(TuiError::Transport)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
