/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use g3_eventsd_client::{EventsdClient, EventsdClientConfig};

use crate::{AggType, MetricValue};

mod envelope;
pub use envelope::MetricEnvelope;

const METRIC_EVENT_ROUTE: &str = "metric";

/// Client facade for emitting metric events to an eventsd daemon.
///
/// Owns one transport client for its whole lifetime. Every operation hands
/// out a [`MetricEnvelope`] that is finished with `send().await`.
pub struct MetricClient {
    events: EventsdClient,
}

impl MetricClient {
    /// Build the transport from `config` and wrap it.
    pub async fn new(config: EventsdClientConfig) -> io::Result<Self> {
        let events = config.build().await?;
        Ok(MetricClient { events })
    }

    /// Emit a metric with a free form aggregation type string.
    ///
    /// The aggregation type is only checked to be non empty, membership in
    /// the known set is not enforced here. The typed operations below cover
    /// the known set.
    pub fn metric<'a, V>(&'a self, name: &'a str, value: V, agg_type: &'a str) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        MetricEnvelope::new(self, name, value.into(), agg_type)
    }

    fn metric_with_type<'a>(
        &'a self,
        name: &'a str,
        value: MetricValue,
        agg_type: AggType,
    ) -> MetricEnvelope<'a> {
        MetricEnvelope::new(self, name, value, agg_type.as_str())
    }

    /// Increment a counter
    pub fn increment<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Sum)
    }

    /// Decrement a counter
    pub fn decrement<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        let value = value.into();
        self.increment(name, -value)
    }

    /// Track the minimum value
    pub fn min<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Min)
    }

    /// Track the maximum value
    pub fn max<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Max)
    }

    /// Track the mean value
    pub fn mean<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Mean)
    }

    /// Alias of [`MetricClient::mean`]
    pub fn average<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.mean(name, value)
    }

    /// A gauge is always set to the last value it was set to
    pub fn gauge<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Gauge)
    }

    /// Track the distribution of the values
    pub fn timing<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Timing)
    }

    /// Track the count of unique values
    pub fn unique<'a, V>(&'a self, name: &'a str, value: V) -> MetricEnvelope<'a>
    where
        V: Into<MetricValue>,
    {
        self.metric_with_type(name, value.into(), AggType::Unique)
    }
}
