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


use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct ApiSettings {
    /// Base address of the jobs and candidates API.
    pub url: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct HttpSettings {
    /// Request timeout. In millis. The transport default applies when unset.
    pub timeout: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoggingSettings {
    pub directory: PathBuf,
    /// Used when `RUST_LOG` is not set.
    pub level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub http: HttpSettings,
    pub logging: LoggingSettings,
}

const DEFAULT_CONFIG: &str = r#"
api:
  url: http://0.0.0.0:8000

http: {}

logging:
  directory: logs
  level: info
"#;

const ENV_PREFIX: &str = "ATS_TUI";

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let user_config = dirs::config_dir().map(|dir| dir.join("ats-tui").join("config"));
        Self::load(user_config.as_deref(), environment())
    }

    /// Layers the embedded defaults, the optional `user_config` file (any
    /// extension `config` understands) and the `ATS_TUI_*` variables of `env`.
    pub(crate) fn load(
        user_config: Option<&Path>,
        env: Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Yaml));

        if let Some(path) = user_config {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder.add_source(env).build()?.try_deserialize()
    }
}

// E.g. `ATS_TUI_API_URL=http://localhost:9000 ats-tui`
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("_")
        .try_parsing(true)
}
