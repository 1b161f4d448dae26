//! DNS resolution check.
//!
//! The only check that touches the network. A lookup is attempted once, bounded
//! by a timeout; any failure becomes a failing [`CheckResult`] rather than an
//! error, since a host that does not resolve is itself a signal.

use super::{CheckId, CheckResult};
use async_trait::async_trait;
use std::fmt;
use std::io;
use std::net::IpAddr;
use std::time::Duration;

/// Default bound on a single lookup.
pub const DEFAULT_DNS_TIMEOUT: Duration = Duration::from_secs(3);

/// Resolves a hostname to its addresses.
///
/// Implemented by [`SystemResolver`] in production; tests swap in doubles.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolver backed by the operating system (`getaddrinfo` via tokio).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl HostResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = tokio::net::lookup_host((host, 0)).await?;
        Ok(addrs.map(|a| a.ip()).collect())
    }
}

/// Why a lookup did not produce an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The URL has no host to look up (e.g. `file:///`).
    NoHost,
    TimedOut(Duration),
    /// The resolver answered but returned nothing.
    NoAddress,
    Io(String),
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupFailure::NoHost => write!(f, "URL has no hostname"),
            LookupFailure::TimedOut(d) => write!(f, "lookup timed out after {} ms", d.as_millis()),
            LookupFailure::NoAddress => write!(f, "lookup returned no addresses"),
            LookupFailure::Io(e) => write!(f, "{e}"),
        }
    }
}

/// Strips IPv6 brackets so the resolver sees a bare address.
fn lookup_target(hostname: &str) -> &str {
    hostname
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(hostname)
}

/// Looks `hostname` up once, giving up after `timeout`.
pub async fn resolve(
    resolver: &dyn HostResolver,
    hostname: &str,
    timeout: Duration,
) -> Result<IpAddr, LookupFailure> {
    let target = lookup_target(hostname);
    if target.is_empty() {
        return Err(LookupFailure::NoHost);
    }

    match tokio::time::timeout(timeout, resolver.lookup(target)).await {
        Err(_) => Err(LookupFailure::TimedOut(timeout)),
        Ok(Err(e)) => Err(LookupFailure::Io(e.to_string())),
        Ok(Ok(addrs)) => addrs.into_iter().next().ok_or(LookupFailure::NoAddress),
    }
}

/// Turns a lookup outcome into the DNS check result.
pub fn check_result(outcome: &Result<IpAddr, LookupFailure>) -> CheckResult {
    match outcome {
        Ok(addr) => CheckResult::pass(
            CheckId::DnsResolution,
            format!("Hostname resolves to {addr}."),
        ),
        Err(_) => CheckResult::fail(
            CheckId::DnsResolution,
            "Hostname did not resolve; could be transient or malicious.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::sync::Mutex;

    struct Recording {
        seen: Mutex<Vec<String>>,
        answer: Vec<IpAddr>,
    }

    #[async_trait]
    impl HostResolver for Recording {
        async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
            self.seen.lock().unwrap().push(host.to_string());
            Ok(self.answer.clone())
        }
    }

    struct Hanging;

    #[async_trait]
    impl HostResolver for Hanging {
        async fn lookup(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(vec![])
        }
    }

    #[test]
    fn brackets_are_stripped() {
        assert_eq!(lookup_target("[::1]"), "::1");
        assert_eq!(lookup_target("example.com"), "example.com");
    }

    #[tokio::test]
    async fn first_address_wins() {
        let resolver = Recording {
            seen: Mutex::new(Vec::new()),
            answer: vec![
                IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)),
                IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)),
            ],
        };
        let out = resolve(&resolver, "[2001:db8::1]", DEFAULT_DNS_TIMEOUT).await;
        assert_eq!(out, Ok(IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))));
        assert_eq!(*resolver.seen.lock().unwrap(), vec!["2001:db8::1".to_string()]);
    }

    #[tokio::test]
    async fn empty_answer_is_a_failure() {
        let resolver = Recording {
            seen: Mutex::new(Vec::new()),
            answer: vec![],
        };
        let out = resolve(&resolver, "example.com", DEFAULT_DNS_TIMEOUT).await;
        assert_eq!(out, Err(LookupFailure::NoAddress));
    }

    #[tokio::test]
    async fn missing_host_skips_lookup() {
        let resolver = Recording {
            seen: Mutex::new(Vec::new()),
            answer: vec![],
        };
        assert_eq!(
            resolve(&resolver, "", DEFAULT_DNS_TIMEOUT).await,
            Err(LookupFailure::NoHost)
        );
        assert!(resolver.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn slow_lookup_times_out() {
        let timeout = Duration::from_millis(50);
        let out = resolve(&Hanging, "slow.example", timeout).await;
        assert_eq!(out, Err(LookupFailure::TimedOut(timeout)));
        let check = check_result(&out);
        assert!(!check.passed);
        assert_eq!(check.weight, 3);
        assert_eq!(check.title, "DNS resolution failed");
    }

    #[test]
    fn success_carries_zero_weight_and_address() {
        let check = check_result(&Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert!(check.passed);
        assert_eq!(check.weight, 0);
        assert_eq!(check.message, "Hostname resolves to 127.0.0.1.");
    }
}
