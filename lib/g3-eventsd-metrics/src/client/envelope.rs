/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::{Metadata, MetricError, MetricValue};

use super::MetricClient;

/// One metric message under construction.
///
/// Optional fields are set with the `with_*` methods, `send` validates and
/// hands the message to the transport. Nothing goes out before `send`.
pub struct MetricEnvelope<'a> {
    client: &'a MetricClient,
    name: &'a str,
    value: MetricValue,
    agg_type: &'a str,
    meta: Option<&'a Metadata>,
    time: DateTime<Utc>,
    extra: Metadata,
}

impl<'a> MetricEnvelope<'a> {
    pub(super) fn new(
        client: &'a MetricClient,
        name: &'a str,
        value: MetricValue,
        agg_type: &'a str,
    ) -> Self {
        MetricEnvelope {
            client,
            name,
            value,
            agg_type,
            meta: None,
            time: Utc::now(),
            extra: Metadata::new(),
        }
    }

    /// Attach meta data fields. The map is cloned into the message, the
    /// caller keeps ownership.
    pub fn with_meta(mut self, meta: &'a Metadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Override the message time. Defaults to the instant the envelope was
    /// created.
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    /// Append an extra top level field. Extra fields are merged last and
    /// override message fields on key collision.
    pub fn with_extra<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub async fn send(self) -> Result<(), MetricError> {
        if self.name.is_empty() {
            return Err(MetricError::NameRequired);
        }
        let Some(value) = self.value.as_json_number() else {
            return Err(MetricError::ValueNotANumber(self.value));
        };
        if self.agg_type.is_empty() {
            return Err(MetricError::AggTypeNotSupported(self.agg_type.to_string()));
        }

        let mut msg = Map::with_capacity(6 + self.extra.len());
        msg.insert("name".to_string(), Value::String(self.name.to_string()));
        msg.insert("value".to_string(), Value::Number(value));
        msg.insert(
            "aggType".to_string(),
            Value::String(self.agg_type.to_string()),
        );
        msg.insert(
            "meta".to_string(),
            Value::Object(self.meta.cloned().unwrap_or_default()),
        );
        msg.insert(
            "time".to_string(),
            Value::String(self.time.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        msg.insert("nanoseconds".to_string(), Value::String(unix_nanos()));
        for (k, v) in self.extra {
            msg.insert(k, v);
        }

        self.client
            .events
            .send_event(super::METRIC_EVENT_ROUTE, Value::Object(msg))
            .await?;
        Ok(())
    }
}

fn unix_nanos() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    itoa::Buffer::new().format(nanos).to_string()
}
