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


use thiserror::Error;

/// Failures surfaced by the data client and the event plumbing.
#[derive(Debug, Error)]
pub enum TuiError {
    /// The API could not be reached, answered with a non-success status,
    /// or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The body was received but is not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("the event channel is closed")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_keep_the_parser_message() {
        let err: TuiError = serde_json::from_str::<Vec<String>>("{}")
            .expect_err("an object is not an array")
            .into();
        assert!(matches!(err, TuiError::Decode(_)));
        assert!(err.to_string().starts_with("decode error: "));
    }

    #[test]
    fn channel_closed_message() {
        assert_eq!(
            TuiError::ChannelClosed.to_string(),
            "the event channel is closed"
        );
    }
}
