/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
#[cfg(unix)]
use std::path::PathBuf;

use tokio::net::UdpSocket;
#[cfg(unix)]
use tokio::net::UnixDatagram;

use crate::sink::UdpEventSink;
#[cfg(unix)]
use crate::sink::UnixEventSink;
use crate::{EventsdClient, EventsdSink};

#[cfg(feature = "yaml")]
mod yaml;

const EVENTSD_DEFAULT_PORT: u16 = 8150;

/// Max payload of a single UDP datagram over IPv4
const DEFAULT_MAX_DATAGRAM_SIZE: usize = 65507;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventsdBackend {
    Udp(SocketAddr, Option<IpAddr>),
    #[cfg(unix)]
    Unix(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventsdClientConfig {
    pub backend: EventsdBackend,
    pub max_datagram_size: usize,
}

impl Default for EventsdClientConfig {
    fn default() -> Self {
        EventsdClientConfig::new(EventsdBackend::Udp(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), EVENTSD_DEFAULT_PORT),
            None,
        ))
    }
}

impl EventsdClientConfig {
    pub fn new(backend: EventsdBackend) -> Self {
        EventsdClientConfig {
            backend,
            max_datagram_size: DEFAULT_MAX_DATAGRAM_SIZE,
        }
    }

    pub fn set_backend(&mut self, backend: EventsdBackend) {
        self.backend = backend;
    }

    pub fn set_max_datagram_size(&mut self, size: usize) {
        self.max_datagram_size = size;
    }

    pub async fn build(&self) -> io::Result<EventsdClient> {
        let sink = match &self.backend {
            EventsdBackend::Udp(addr, bind) => {
                let local = match bind {
                    Some(ip) => SocketAddr::new(*ip, 0),
                    None => match addr {
                        SocketAddr::V4(_) => {
                            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0)
                        }
                        SocketAddr::V6(_) => {
                            SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0)
                        }
                    },
                };
                let socket = UdpSocket::bind(local).await?;
                EventsdSink::Udp(UdpEventSink::new(*addr, socket))
            }
            #[cfg(unix)]
            EventsdBackend::Unix(path) => {
                let socket = UnixDatagram::unbound()?;
                EventsdSink::Unix(UnixEventSink::new(path.clone(), socket))
            }
        };
        Ok(EventsdClient::new(sink, self.max_datagram_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use serde_json::json;
    use tokio::net::UdpSocket;

    #[test]
    fn default_config() {
        let config = EventsdClientConfig::default();
        assert_eq!(
            config.backend,
            EventsdBackend::Udp(SocketAddr::from_str("127.0.0.1:8150").unwrap(), None)
        );
        assert_eq!(config.max_datagram_size, DEFAULT_MAX_DATAGRAM_SIZE);
    }

    #[test]
    fn set_values() {
        let mut config = EventsdClientConfig::default();
        let addr = SocketAddr::from_str("192.168.1.1:9150").unwrap();
        config.set_backend(EventsdBackend::Udp(addr, Some(IpAddr::V4(Ipv4Addr::LOCALHOST))));
        config.set_max_datagram_size(1024);
        assert_eq!(
            config.backend,
            EventsdBackend::Udp(addr, Some(IpAddr::V4(Ipv4Addr::LOCALHOST)))
        );
        assert_eq!(config.max_datagram_size, 1024);
    }

    #[tokio::test]
    async fn build_udp_and_send() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();

        let config = EventsdClientConfig::new(EventsdBackend::Udp(addr, None));
        let client = config.build().await.unwrap();
        client
            .send_event("metric", json!({"name": "test"}))
            .await
            .unwrap();

        let mut buf = [0u8; 1024];
        let (len, _) = server.recv_from(&mut buf).await.unwrap();
        let envelope: serde_json::Value = serde_json::from_slice(&buf[..len]).unwrap();
        assert_eq!(envelope["route"], "metric");
        assert_eq!(envelope["msg"]["name"], "test");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn build_unix_and_send() {
        let dir = std::env::temp_dir().join(format!("eventsd-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("eventsd.sock");
        let _ = std::fs::remove_file(&path);
        let server = UnixDatagram::bind(&path).unwrap();

        let config = EventsdClientConfig::new(EventsdBackend::Unix(path.clone()));
        let client = config.build().await.unwrap();
        client
            .send_event("metric", json!({"name": "test"}))
            .await
            .unwrap();

        let mut buf = [0u8; 1024];
        let (len, _) = server.recv_from(&mut buf).await.unwrap();
        let envelope: serde_json::Value = serde_json::from_slice(&buf[..len]).unwrap();
        assert_eq!(envelope["route"], "metric");

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }
}
