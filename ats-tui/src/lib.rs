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


//! Terminal dashboard listing job postings and the candidates of the
//! selected job, backed by a read-only HTTP API.

pub mod app;
pub mod domain;
pub mod error;
pub mod event;
pub mod http_client;
pub mod infrastructure;
mod terminal;
#[cfg(test)]
mod test_util;
mod ui;

use std::time::Duration;

use app::App;
use event::{Event, EventHandler};
use infrastructure::Settings;
use terminal::Screen;

use crate::error::TuiError;

pub type TuiResult<OK> = Result<OK, TuiError>;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn tui_main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Settings::new()?;

    infrastructure::init_file_logger("ats-tui", &config.logging)?;
    tracing::info!("Starting the ATS dashboard against {}", config.api.url);

    let mut app = App::new(&config)?;
    let mut events = EventHandler::new(TICK_RATE);
    let mut screen = Screen::enter()?;

    app.set_event_tx(events.sender());
    app.refresh_jobs();

    loop {
        screen.draw(&app)?;

        match events.next().await {
            Some(Event::Key(key)) => app.on_key(key),
            Some(Event::Tick) => app.on_tick(),
            Some(Event::Resize(_, _)) => {}
            Some(Event::DataLoaded { data }) => app.on_data_loaded(data),
            None => break,
        }

        if app.should_quit {
            tracing::info!("Stopping the ATS dashboard");
            break;
        }
    }

    Ok(())
}
