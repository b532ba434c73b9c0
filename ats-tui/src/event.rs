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

use crossterm::event::{Event as TerminalEvent, EventStream, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};

use crate::{
    TuiResult,
    domain::{Candidate, Job, RequestId},
};

/// Outcome of a fetch, tagged with what it was issued for.
#[derive(Debug)]
pub enum UiData {
    Jobs {
        request: RequestId,
        result: TuiResult<Vec<Job>>,
    },
    Candidates {
        request: RequestId,
        job_id: String,
        result: TuiResult<Vec<Candidate>>,
    },
}

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    DataLoaded { data: UiData },
}

/// Single queue for terminal input, ticks and finished fetches.
#[derive(Debug)]
pub struct EventHandler {
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
    reader: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let reader = tokio::spawn(read_terminal(tx.clone(), tick_rate));

        Self { tx, rx, reader }
    }

    /// Sender for background tasks reporting [`Event::DataLoaded`].
    pub fn sender(&self) -> UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

async fn read_terminal(tx: UnboundedSender<Event>, tick_rate: Duration) {
    let mut reader = EventStream::new();
    let mut interval = tokio::time::interval(tick_rate);

    loop {
        let tick = interval.tick();
        let terminal_event = reader.next().fuse();

        let event = tokio::select! {
            _ = tick => Event::Tick,
            Some(Ok(evt)) = terminal_event => match evt {
                TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                TerminalEvent::Resize(columns, rows) => Event::Resize(columns, rows),
                _ => continue,
            },
        };

        if tx.send(event).is_err() {
            break;
        }
    }
}
