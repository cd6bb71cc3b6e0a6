use eyre::Result;
use rsdns::{
    clients::{
        tokio::Client,
        ClientConfig,
    },
    records::{
        data::{
            Aaaa,
            A,
        },
        Class,
    },
};
use std::net::{
    IpAddr,
    SocketAddr,
};

/// Forward lookup of a hostname. The pipeline takes whichever resolver it is
/// handed, tests substitute a canned one.
#[allow(async_fn_in_trait)]
pub trait ResolveHost {
    /// All addresses the name resolves to, in the order the resolution
    /// mechanism returned them. An unresolvable name is an `Err`.
    async fn resolve(&self, name: &str) -> Result<Vec<IpAddr>>;
}

/// Resolves against a single configured nameserver.
pub struct NameserverResolver {
    nameserver: SocketAddr,
}

impl NameserverResolver {
    pub fn new(nameserver: SocketAddr) -> Self {
        Self { nameserver }
    }

    async fn query_a(&self, qname: &str) -> rsdns::Result<Vec<IpAddr>> {
        let config = ClientConfig::with_nameserver(self.nameserver);
        let mut client = Client::new(config).await?;
        let rrset = client.query_rrset::<A>(qname, Class::IN).await?;
        Ok(rrset.rdata.into_iter().map(|a| IpAddr::V4(a.address)).collect())
    }

    async fn query_aaaa(&self, qname: &str) -> rsdns::Result<Vec<IpAddr>> {
        let config = ClientConfig::with_nameserver(self.nameserver);
        let mut client = Client::new(config).await?;
        let rrset = client.query_rrset::<Aaaa>(qname, Class::IN).await?;
        Ok(rrset.rdata.into_iter().map(|aaaa| IpAddr::V6(aaaa.address)).collect())
    }
}

impl ResolveHost for NameserverResolver {
    async fn resolve(&self, name: &str) -> Result<Vec<IpAddr>> {
        debug!(?name, "DNS record lookup...");

        match self.query_a(name).await {
            Ok(addrs) if !addrs.is_empty() => Ok(addrs),
            Ok(_) => Ok(self.query_aaaa(name).await?),
            Err(err) => {
                debug!("A query for {name:?} failed ({err}), trying AAAA");
                Ok(self.query_aaaa(name).await?)
            }
        }
    }
}
