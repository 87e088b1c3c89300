/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::net::{IpAddr, SocketAddr};
#[cfg(unix)]
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, yaml};

use super::{EventsdBackend, EventsdClientConfig};

fn normalize_key(k: &str) -> String {
    k.to_lowercase().replace('-', "_")
}

fn foreach_kv<F>(map: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in map.iter() {
        if let Yaml::String(key) = k {
            f(key, v)?;
        } else {
            return Err(anyhow!("hash key {k:?} is not a string"));
        }
    }
    Ok(())
}

fn as_sockaddr(v: &Yaml) -> anyhow::Result<SocketAddr> {
    if let Yaml::String(s) = v {
        SocketAddr::from_str(s).map_err(|e| anyhow!("invalid SocketAddr string {s}: {e}"))
    } else {
        Err(anyhow!("yaml value type for 'SocketAddr' should be 'string'"))
    }
}

fn as_ipaddr(v: &Yaml) -> anyhow::Result<IpAddr> {
    if let Yaml::String(s) = v {
        IpAddr::from_str(s).map_err(|e| anyhow!("invalid IpAddr string {s}: {e}"))
    } else {
        Err(anyhow!("yaml value type for 'IpAddr' should be 'string'"))
    }
}

#[cfg(unix)]
fn as_absolute_path(v: &Yaml) -> anyhow::Result<PathBuf> {
    if let Yaml::String(s) = v {
        let path = PathBuf::from(s);
        if !path.is_absolute() {
            return Err(anyhow!("path {s} is not absolute"));
        }
        Ok(path)
    } else {
        Err(anyhow!("yaml value type for 'path' should be 'string'"))
    }
}

fn as_usize(v: &Yaml) -> anyhow::Result<usize> {
    match v {
        Yaml::Integer(i) => usize::try_from(*i).map_err(|_| anyhow!("out of range value {i}")),
        Yaml::String(s) => usize::from_str(s).map_err(|e| anyhow!("invalid usize string {s}: {e}")),
        _ => Err(anyhow!("yaml value type for 'usize' should be 'integer'")),
    }
}

impl EventsdBackend {
    pub fn parse_udp_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut addr: Option<SocketAddr> = None;
                let mut bind: Option<IpAddr> = None;

                foreach_kv(map, |k, v| match normalize_key(k).as_str() {
                    "address" | "addr" => {
                        addr = Some(as_sockaddr(v).context(format!(
                            "invalid eventsd udp peer socket address value for key {k}"
                        ))?);
                        Ok(())
                    }
                    "bind_ip" | "bind" => {
                        bind = Some(as_ipaddr(v).context(format!("invalid value for key {k}"))?);
                        Ok(())
                    }
                    _ => Err(anyhow!("invalid key {k}")),
                })?;

                if let Some(addr) = addr.take() {
                    Ok(EventsdBackend::Udp(addr, bind))
                } else {
                    Err(anyhow!("no target address has been set"))
                }
            }
            Yaml::String(_) => {
                let addr = as_sockaddr(v)?;
                Ok(EventsdBackend::Udp(addr, None))
            }
            _ => Err(anyhow!("invalid yaml value for udp eventsd backend")),
        }
    }

    #[cfg(unix)]
    pub fn parse_unix_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut path: Option<PathBuf> = None;

                foreach_kv(map, |k, v| match normalize_key(k).as_str() {
                    "path" => {
                        path =
                            Some(as_absolute_path(v).context(format!("invalid value for key {k}"))?);
                        Ok(())
                    }
                    _ => Err(anyhow!("invalid key {k}")),
                })?;
                if let Some(path) = path.take() {
                    Ok(EventsdBackend::Unix(path))
                } else {
                    Err(anyhow!("no path has been set"))
                }
            }
            Yaml::String(_) => {
                let path = as_absolute_path(v)?;
                Ok(EventsdBackend::Unix(path))
            }
            _ => Err(anyhow!("invalid yaml value for unix eventsd backend")),
        }
    }
}

impl EventsdClientConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = EventsdClientConfig::default();
            foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'eventsd client config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match normalize_key(k).as_str() {
            "target_udp" | "backend_udp" => {
                let target = EventsdBackend::parse_udp_yaml(v)
                    .context(format!("invalid value for key {k}"))?;
                self.set_backend(target);
            }
            #[cfg(unix)]
            "target_unix" | "backend_unix" => {
                let target = EventsdBackend::parse_unix_yaml(v)
                    .context(format!("invalid value for key {k}"))?;
                self.set_backend(target);
            }
            "target" | "backend" => {
                return if let Yaml::Hash(map) = v {
                    foreach_kv(map, |k, v| match normalize_key(k).as_str() {
                        "udp" => {
                            let target = EventsdBackend::parse_udp_yaml(v)
                                .context(format!("invalid value for key {k}"))?;
                            self.set_backend(target);
                            Ok(())
                        }
                        #[cfg(unix)]
                        "unix" => {
                            let target = EventsdBackend::parse_unix_yaml(v)
                                .context(format!("invalid value for key {k}"))?;
                            self.set_backend(target);
                            Ok(())
                        }
                        _ => Err(anyhow!("invalid key {k}")),
                    })
                    .context(format!("invalid value for key {k}"))
                } else {
                    Err(anyhow!("yaml value type for key {k} should be 'map'"))
                };
            }
            "max_datagram_size" => {
                self.max_datagram_size =
                    as_usize(v).context(format!("invalid usize value for key {k}"))?;
            }
            _ => return Err(anyhow!("invalid key {k}")),
        }
        Ok(())
    }
}
