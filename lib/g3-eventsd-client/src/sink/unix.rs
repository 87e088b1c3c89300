/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::path::PathBuf;

use tokio::net::UnixDatagram;

pub(crate) struct UnixEventSink {
    path: PathBuf,
    socket: UnixDatagram,
}

impl UnixEventSink {
    pub(crate) fn new(path: PathBuf, socket: UnixDatagram) -> Self {
        UnixEventSink { path, socket }
    }

    pub(crate) async fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        self.socket.send_to(msg, &self.path).await
    }
}
