/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod sink;
use sink::EventsdSink;

mod client;
pub use client::EventsdClient;

mod error;
pub use error::EventsdError;

mod config;
pub use config::{EventsdBackend, EventsdClientConfig};
