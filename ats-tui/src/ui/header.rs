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


use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

const TITLE: &str = "ATS Dashboard";

pub(super) fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // title
            Constraint::Percentage(45), // api url
            Constraint::Min(0),         // refresh
        ])
        .split(area);

    render_title(f, chunks[0]);
    render_api_url(f, chunks[1], app);
    render_refresh(f, chunks[2], app);
}

fn render_title(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(TITLE)
        .style(Style::default().bold())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_api_url(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let data = &app.dashboard_data;
    let block = if data.api_unreachable {
        block
            .title("API URL (unreachable)")
            .border_style(Style::new().red())
    } else if data.jobs_error.is_some() {
        block
            .title("API URL (error)")
            .border_style(Style::new().red())
    } else {
        block.title("API URL")
    };
    let paragraph = Paragraph::new(app.http_client.base_url())
        .block(block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Mirrors a button that is disabled while the jobs are being fetched.
fn render_refresh(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let paragraph = if app.dashboard_data.is_loading_jobs() {
        Paragraph::new("Loading...")
            .style(Style::default().dark_gray())
            .block(block.border_style(Style::default().dark_gray()))
    } else {
        Paragraph::new("[r] Refresh Jobs")
            .style(Style::default().white())
            .block(block.border_style(Style::default().white()))
    };
    f.render_widget(paragraph.alignment(Alignment::Center), area);
}
