/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

use g3_eventsd_client::EventsdError;

use crate::MetricValue;

#[derive(Debug, Error)]
pub enum MetricError {
    #[error("name is required")]
    NameRequired,
    #[error("value {0} is not a Number")]
    ValueNotANumber(MetricValue),
    #[error("aggregation type {0} is not supported")]
    AggTypeNotSupported(String),
    #[error(transparent)]
    Transport(#[from] EventsdError),
}
