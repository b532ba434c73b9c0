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


mod candidates;
mod jobs;

pub use candidates::load_candidates;
pub use jobs::load_jobs;

use candidates::render_candidates;
use jobs::render_jobs;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Clear,
};

use crate::app::App;

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Clear, area);

    let Some(selected_job) = &app.dashboard_data.selected_job else {
        render_jobs(f, area, app);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Jobs
            Constraint::Percentage(50), // Candidates of the selected job
        ])
        .split(area);

    render_jobs(f, chunks[0], app);
    render_candidates(f, chunks[1], app, selected_job);
}
