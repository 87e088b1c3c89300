/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::{Arc, Mutex};

pub(crate) struct BufEventSink {
    datagrams: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl BufEventSink {
    pub(crate) fn new(datagrams: Arc<Mutex<Vec<Vec<u8>>>>) -> Self {
        BufEventSink { datagrams }
    }

    pub(crate) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        let mut datagrams = self.datagrams.lock().unwrap();
        datagrams.push(msg.to_vec());
        Ok(msg.len())
    }
}
