/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventsdError {
    #[error("failed to encode event message: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("event message length {0} exceeds max datagram size {1}")]
    MessageTooLarge(usize, usize),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
