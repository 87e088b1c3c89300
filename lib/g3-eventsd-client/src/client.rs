/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::trace;
use serde_json::{Map, Value};

use crate::{EventsdError, EventsdSink};

/// Client end of the eventsd UDP protocol.
///
/// Each event is one datagram carrying a JSON object with the routing
/// label and the caller supplied payload under `msg`.
pub struct EventsdClient {
    sink: EventsdSink,
    max_datagram_size: usize,
}

impl EventsdClient {
    pub(crate) fn new(sink: EventsdSink, max_datagram_size: usize) -> Self {
        EventsdClient {
            sink,
            max_datagram_size,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_buf(
        datagrams: std::sync::Arc<std::sync::Mutex<Vec<Vec<u8>>>>,
        max_datagram_size: usize,
    ) -> Self {
        use crate::sink::BufEventSink;

        EventsdClient::new(
            EventsdSink::Buf(BufEventSink::new(datagrams)),
            max_datagram_size,
        )
    }

    /// Send a single event with the given routing label.
    ///
    /// Exactly one datagram goes out per successful call. Socket errors are
    /// returned as is, there is no retry.
    pub async fn send_event(&self, route: &str, msg: Value) -> Result<(), EventsdError> {
        let mut envelope = Map::with_capacity(2);
        envelope.insert("route".to_string(), Value::String(route.to_string()));
        envelope.insert("msg".to_string(), msg);

        let buf = serde_json::to_vec(&Value::Object(envelope))?;
        if buf.len() > self.max_datagram_size {
            return Err(EventsdError::MessageTooLarge(
                buf.len(),
                self.max_datagram_size,
            ));
        }

        let nw = self.sink.send_msg(&buf).await?;
        trace!("sent event datagram: route {route}, size {nw}");
        Ok(())
    }
}
