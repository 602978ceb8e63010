/// Resources provisioned outside of this repo's ownership
///
/// One read-only entry per account. Stacks reference these by value and never
/// create, modify, or destroy any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingResources {
    /// Private subnets the frontend runs in
    pub subnet_ids: [&'static str; 2],

    /// Security group shared by frontend deployments
    pub security_group_id: &'static str,

    /// Bucket holding built frontend bundles
    pub artifact_bucket: &'static str,

    /// Hosted zone for demo domains
    pub hosted_zone_id: &'static str,

    /// Wildcard certificate covering branch subdomains
    pub certificate_arn: &'static str,

    /// Apex domain branch deployments are served under
    pub domain_name: &'static str,
}

/// Shared igvf-dev account
pub mod igvf_dev {
    use super::ExistingResources;
    use crate::environment::Environment;

    pub const US_WEST_2: Environment = Environment {
        account: "109189702753",
        region: "us-west-2",
    };

    /// Pre-provisioned resources in the igvf-dev account
    pub fn resources() -> ExistingResources {
        ExistingResources {
            subnet_ids: ["subnet-05d078d51e2e9e626", "subnet-08e9b63e3f4c36a71"],
            security_group_id: "sg-05bf38b73335a0c38",
            artifact_bucket: "igvf-dev-frontend-artifacts",
            hosted_zone_id: "Z0341163303ASZWMW1YTS",
            certificate_arn: "arn:aws:acm:us-west-2:109189702753:certificate/6d33b1a4-b0d8-4d54-8e8b-9e13a4f7f3b8",
            domain_name: "demo.igvf.org",
        }
    }
}
