use crate::{
    dns::lookup::ResolveHost,
    extract,
};
use kube::api::DynamicObject;
use std::collections::BTreeMap;

/// Hostname to resolved IP. Ordered by hostname, so the report comes out
/// deterministic. A hostname seen more than once keeps its latest resolution.
pub type HostIpTable = BTreeMap<String, String>;

/// Runs extraction and resolution over the listed records, one candidate at a
/// time. A candidate that fails to resolve is dropped and the run continues,
/// only resolved hostnames end up in the table.
pub async fn collect_host_ips<R>(records: &[DynamicObject], resolver: &R) -> HostIpTable
where
    R: ResolveHost,
{
    let mut hosts = HostIpTable::new();

    for record in records {
        for candidate in extract::host_candidates(record) {
            let addrs = match resolver.resolve(&candidate).await {
                Ok(addrs) => addrs,
                Err(err) => {
                    warn!("Could not resolve {candidate:?}: {err}");
                    continue;
                }
            };

            let Some(addr) = addrs.first() else {
                warn!("No addresses returned for {candidate:?}");
                continue;
            };

            hosts.insert(candidate, addr.to_string());
        }
    }

    hosts
}
