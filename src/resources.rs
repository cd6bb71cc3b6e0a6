use eyre::{
    Context as _,
    Result,
};
use kube::{
    api::{
        Api,
        ApiResource,
        DynamicObject,
        ListParams,
    },
    Client,
};

pub const INGRESS_ROUTE_GROUP: &str = "traefik.containo.us";
pub const INGRESS_ROUTE_VERSION: &str = "v1alpha1";
pub const INGRESS_ROUTE_PLURAL: &str = "ingressroutes";

/// Identity of the Traefik IngressRoute resource. There is no typed struct
/// for it here, instances are fetched as [`DynamicObject`]s.
pub fn ingress_route_resource() -> ApiResource {
    ApiResource {
        group: INGRESS_ROUTE_GROUP.to_string(),
        version: INGRESS_ROUTE_VERSION.to_string(),
        api_version: format!("{INGRESS_ROUTE_GROUP}/{INGRESS_ROUTE_VERSION}"),
        kind: "IngressRoute".to_string(),
        plural: INGRESS_ROUTE_PLURAL.to_string(),
    }
}

/// Fetch all IngressRoutes in `namespace`, or across the whole cluster when
/// no namespace is given. One list call, no pagination.
pub async fn list_ingress_routes(client: Client, namespace: Option<&str>) -> Result<Vec<DynamicObject>> {
    let resource = ingress_route_resource();

    let api: Api<DynamicObject> = match namespace {
        Some(ns) => Api::namespaced_with(client, ns, &resource),
        None => Api::all_with(client, &resource),
    };

    let list = api
        .list(&ListParams::default())
        .await
        .context("listing IngressRoute resources")?;

    Ok(list.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ingress_route_identity() {
        let resource = ingress_route_resource();
        assert_eq!(resource.group, "traefik.containo.us");
        assert_eq!(resource.version, "v1alpha1");
        assert_eq!(resource.api_version, "traefik.containo.us/v1alpha1");
        assert_eq!(resource.kind, "IngressRoute");
        assert_eq!(resource.plural, "ingressroutes");
    }
}
