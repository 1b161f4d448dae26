//! In-process resolver doubles so DNS behaviour is deterministic in tests.

use async_trait::async_trait;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use urlrisk_core::checks::dns::HostResolver;

pub const DOC_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::new(203, 0, 113, 10));

/// Every host resolves to [`DOC_ADDR`]. Counts lookups.
#[derive(Default)]
pub struct AlwaysResolves {
    pub calls: AtomicUsize,
}

#[async_trait]
impl HostResolver for AlwaysResolves {
    async fn lookup(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![DOC_ADDR])
    }
}

/// Every lookup fails like NXDOMAIN.
pub struct NeverResolves;

#[async_trait]
impl HostResolver for NeverResolves {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("failed to lookup address information: {host}"),
        ))
    }
}

/// Never answers within any reasonable timeout.
pub struct Hangs;

#[async_trait]
impl HostResolver for Hangs {
    async fn lookup(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
        tokio::time::sleep(Duration::from_secs(300)).await;
        Ok(vec![DOC_ADDR])
    }
}

pub fn always() -> Arc<AlwaysResolves> {
    Arc::new(AlwaysResolves::default())
}
