#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::{
    Context as _,
    OptionExt as _,
    Result,
};
use ingressroute_dns_report::{
    dns::lookup::NameserverResolver,
    pipeline,
    report,
    resources,
};
use kube::{
    config::{
        KubeConfigOptions,
        Kubeconfig,
    },
    Client,
    Config,
};
use std::{
    net::SocketAddr,
    path::{
        Path,
        PathBuf,
    },
};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[clap(
        long,
        env = "KUBECONFIG",
        help = "Kubeconfig to use. A relative name is resolved under ~/.kube. If not set, the cluster config is inferred"
    )]
    kubeconfig: Option<PathBuf>,

    #[clap(
        long,
        env = "NAMESPACE",
        help = "Only list IngressRoutes in this namespace. If not set, all namespaces are listed"
    )]
    namespace: Option<String>,

    #[clap(
        long,
        env = "NAMESERVER",
        help = "Nameserver and port to use for DNS lookups",
        default_value = "1.1.1.1:53"
    )]
    nameserver: SocketAddr,

    #[clap(long, short, help = "Report file to write", default_value = "IngressRoutes-DNS-IP.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().expect("color_eyre init");
    tracing_subscriber::fmt::init();

    let Args {
        kubeconfig,
        namespace,
        nameserver,
        output,
    } = Args::parse();

    let client = client_for(kubeconfig.as_deref()).await?;

    let records = resources::list_ingress_routes(client, namespace.as_deref()).await?;
    info!("Listed {} IngressRoutes", records.len());

    let resolver = NameserverResolver::new(nameserver);
    let hosts = pipeline::collect_host_ips(&records, &resolver).await;
    info!("Resolved {} of the embedded hostnames", hosts.len());

    report::write_report_file(&hosts, &output)?;
    info!("Report written to {}", output.display());

    Ok(())
}

async fn client_for(kubeconfig: Option<&Path>) -> Result<Client> {
    let Some(path) = kubeconfig else {
        return Client::try_default().await.context("inferring cluster config");
    };

    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let home = dirs::home_dir().ok_or_eyre("unable to determine home directory")?;
        home.join(".kube").join(path)
    };

    info!("Using kubeconfig: {}", path.display());

    let kubeconfig =
        Kubeconfig::read_from(&path).with_context(|| format!("reading kubeconfig {}", path.display()))?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .context("loading kubeconfig")?;

    Client::try_from(config).context("constructing cluster client")
}
