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

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    TuiResult,
    app::App,
    domain::{Job, RequestId},
    error::TuiError,
    event::{Event, UiData},
    http_client::HttpClient,
    ui::loading_indicator,
};

pub async fn load_jobs(
    http_client: Arc<HttpClient>,
    event_tx: UnboundedSender<Event>,
    request: RequestId,
) -> TuiResult<()> {
    let result = http_client.list_jobs().await;

    event_tx
        .send(Event::DataLoaded {
            data: UiData::Jobs { request, result },
        })
        .map_err(|_| TuiError::ChannelClosed)
}

pub fn render_jobs(f: &mut Frame, area: Rect, app: &App) {
    let data = &app.dashboard_data;

    let mut title = " Job Posts ".to_string();
    if data.is_loading_jobs() {
        title.push_str(&format!("{} ", loading_indicator(app.ticks)));
    }
    let block = Block::default().borders(Borders::ALL).title(title);

    let table_area = match &data.jobs_error {
        Some(error) => {
            let [table_area, error_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)])
                    .areas(block.inner(area));
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new(format!("Failed to load jobs: {error}")).red(),
                error_area,
            );
            table_area
        }
        None => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            inner
        }
    };

    render_jobs_table(f, table_area, app);
}

fn render_jobs_table(f: &mut Frame, area: Rect, app: &App) {
    let jobs = &app.dashboard_data.jobs;
    let selected_id = app
        .dashboard_data
        .selected_job
        .as_ref()
        .map(|job| job.id.as_str());

    let header = ["Title", "Status", "Job Type", "Created At"]
        .into_iter()
        .map(Cell::from)
        .collect::<Row>()
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let rows: Vec<Row> = if jobs.is_empty() {
        vec![Row::new(vec![Cell::from("No jobs found.")])]
    } else {
        jobs.iter()
            .map(|job| {
                let row = job_row(job);
                if Some(job.id.as_str()) == selected_id {
                    row.style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                } else {
                    row
                }
            })
            .collect()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40), // Title
            Constraint::Percentage(15), // Status
            Constraint::Percentage(20), // Job type
            Constraint::Percentage(25), // Created at
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ")
    .highlight_spacing(HighlightSpacing::Always);

    let mut state = TableState::default();
    if !jobs.is_empty() {
        state.select(Some(app.job_cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}

fn job_row(job: &Job) -> Row<'_> {
    Row::new(vec![
        Cell::from(job.title.as_str()),
        Cell::from(job.status.as_str()),
        Cell::from(job.employment_type.as_str()),
        Cell::from(format_created_at(&job.created_at)),
    ])
}

/// Calendar date (UTC) as `M/D/YYYY`; anything that is not RFC 3339 is shown
/// as received.
pub(crate) fn format_created_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
