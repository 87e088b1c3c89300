/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod agg;
pub use agg::AggType;

mod value;
pub use value::MetricValue;

mod error;
pub use error::MetricError;

mod client;
pub use client::{MetricClient, MetricEnvelope};

pub use g3_eventsd_client::{EventsdBackend, EventsdClientConfig, EventsdError};

/// Free form key-value fields attached to a metric message.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
