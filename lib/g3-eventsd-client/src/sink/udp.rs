/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::SocketAddr;

use tokio::net::UdpSocket;

pub(crate) struct UdpEventSink {
    addr: SocketAddr,
    socket: UdpSocket,
}

impl UdpEventSink {
    pub(crate) fn new(addr: SocketAddr, socket: UdpSocket) -> Self {
        UdpEventSink { addr, socket }
    }

    pub(crate) async fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        self.socket.send_to(msg, self.addr).await
    }
}
