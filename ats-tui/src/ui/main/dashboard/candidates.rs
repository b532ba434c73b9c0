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

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    TuiResult,
    app::App,
    domain::{Candidate, Job, RequestId},
    error::TuiError,
    event::{Event, UiData},
    http_client::HttpClient,
    ui::loading_indicator,
};

pub async fn load_candidates(
    http_client: Arc<HttpClient>,
    event_tx: UnboundedSender<Event>,
    request: RequestId,
    job_id: String,
) -> TuiResult<()> {
    let result = http_client.list_candidates(&job_id).await;

    event_tx
        .send(Event::DataLoaded {
            data: UiData::Candidates {
                request,
                job_id,
                result,
            },
        })
        .map_err(|_| TuiError::ChannelClosed)
}

pub fn render_candidates(f: &mut Frame, area: Rect, app: &App, job: &Job) {
    let data = &app.dashboard_data;

    let mut title = format!(" Candidates for {} ", job.title);
    if data.is_loading_candidates() {
        title.push_str(&format!("{} ", loading_indicator(app.ticks)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::new().cyan());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let table_area = match &data.candidates_error {
        Some(error) => {
            let [table_area, error_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
            f.render_widget(
                Paragraph::new(format!("Failed to load candidates: {error}")).red(),
                error_area,
            );
            table_area
        }
        None => inner,
    };

    f.render_widget(candidates_table(&data.candidates), table_area);
}

fn candidates_table(candidates: &[Candidate]) -> Table<'_> {
    let header = ["Name", "Email", "Stage"]
        .into_iter()
        .map(Cell::from)
        .collect::<Row>()
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let rows: Vec<Row> = if candidates.is_empty() {
        vec![Row::new(vec![Cell::from("No candidates found for this job.")])]
    } else {
        candidates
            .iter()
            .map(|candidate| {
                Row::new(vec![
                    Cell::from(candidate.name.as_str()),
                    Cell::from(candidate.email.as_str()),
                    Cell::from(candidate.stage.as_str()),
                ])
            })
            .collect()
    };

    Table::new(
        rows,
        [
            Constraint::Percentage(35), // Name
            Constraint::Percentage(40), // Email
            Constraint::Percentage(25), // Stage
        ],
    )
    .header(header)
}
