/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

#[cfg(test)]
mod buf;
#[cfg(test)]
pub(crate) use buf::BufEventSink;

mod udp;
pub(crate) use udp::UdpEventSink;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub(crate) use unix::UnixEventSink;

pub(crate) enum EventsdSink {
    #[cfg(test)]
    Buf(BufEventSink),
    Udp(UdpEventSink),
    #[cfg(unix)]
    Unix(UnixEventSink),
}

impl EventsdSink {
    pub(crate) async fn send_msg(&self, buf: &[u8]) -> io::Result<usize> {
        match self {
            #[cfg(test)]
            EventsdSink::Buf(s) => s.send_msg(buf),
            EventsdSink::Udp(s) => s.send_msg(buf).await,
            #[cfg(unix)]
            EventsdSink::Unix(s) => s.send_msg(buf).await,
        }
    }
}
