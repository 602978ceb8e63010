use crate::app::{App, NodePath};
use crate::config::Config;
use crate::environment::Environment;
use crate::existing::ExistingResources;
use crate::stack::{CfnResource, Stack};
use serde_json::{json, Value};

/// The frontend as one deployable unit
///
/// A Lambda function serving the UI bundle, published through a function URL,
/// fronted by a CloudFront distribution on a branch subdomain of the existing
/// demo domain. References the existing resources of the target account, owns
/// none of them.
pub struct FrontendStack;

impl FrontendStack {
    pub fn build(
        app: &mut App,
        parent: &NodePath,
        id: &str,
        config: &Config,
        existing: &ExistingResources,
        env: Environment,
    ) -> eyre::Result<Stack> {
        let path = app.register(parent.child(id))?;
        let mut stack = Stack::new(path, id, env);

        for resource in Self::resources(config, existing) {
            stack.add_resource(resource);
        }

        Ok(stack)
    }

    /// Convert a project name to a CamelCase logical id
    fn logical_id(name: &str) -> String {
        name.split(&['-', '_', '.'])
            .map(|s| {
                let mut chars = s.chars();

                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<String>()
    }

    /// Subdomain the branch deployment is served under
    fn branch_domain(config: &Config, existing: &ExistingResources) -> String {
        format!(
            "{branch}.{domain}",
            branch = config.branch,
            domain = existing.domain_name
        )
    }

    /// Policy statements of the frontend function role
    fn policies(existing: &ExistingResources) -> Vec<Value> {
        vec![
            json!({
                "PolicyName": "AppendToLogsPolicy",
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": [
                            "logs:CreateLogGroup",
                            "logs:CreateLogStream",
                            "logs:PutLogEvents"
                        ],
                        "Resource": "*"
                    }]
                }
            }),
            json!({
                "PolicyName": "ReadArtifactsPolicy",
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Action": ["s3:GetObject"],
                        "Resource": format!(
                            "arn:aws:s3:::{bucket}/*",
                            bucket = existing.artifact_bucket
                        )
                    }]
                }
            }),
        ]
    }

    /// CFN resources of the frontend
    fn resources(config: &Config, existing: &ExistingResources) -> Vec<CfnResource> {
        let name = Self::logical_id(&config.name);
        let branch_domain = Self::branch_domain(config, existing);
        let bucket = existing.artifact_bucket;

        let s3key = format!(
            "{project}/{branch}/frontend.zip",
            project = config.name,
            branch = config.branch
        );

        vec![
            CfnResource {
                name: format!("Frontend{name}"),
                resource: json!({
                    "Type": "AWS::Lambda::Function",
                    "Properties": {
                        "FunctionName": format!("{}-{}-frontend", config.name, config.branch),
                        "Handler": "bootstrap",
                        "Runtime": "provided.al2023",
                        "Environment": {
                            "Variables": {
                                "URL_PREFIX": config.url_prefix,
                                "BRANCH": config.branch
                            }
                        },
                        "Role": {
                            "Fn::GetAtt": [
                                format!("FrontendRole{name}"),
                                "Arn"
                            ]
                        },
                        "MemorySize": config.frontend.memory,
                        "Timeout": config.frontend.timeout,
                        "Code": {
                            "S3Bucket": bucket,
                            "S3Key": s3key
                        },
                        "VpcConfig": {
                            "SecurityGroupIds": [existing.security_group_id],
                            "SubnetIds": existing.subnet_ids
                        }
                    }
                }),
            },
            CfnResource {
                name: format!("FrontendRole{name}"),
                resource: json!({
                    "Type": "AWS::IAM::Role",
                    "Properties": {
                        "AssumeRolePolicyDocument": {
                            "Version": "2012-10-17",
                            "Statement": [{
                                "Effect": "Allow",
                                "Principal": {
                                    "Service": ["lambda.amazonaws.com"]
                                },
                                "Action": ["sts:AssumeRole"]
                            }]
                        },
                        "Path": "/",
                        "Policies": Self::policies(existing)
                    }
                }),
            },
            CfnResource {
                name: format!("FrontendUrl{name}"),
                resource: json!({
                    "Type": "AWS::Lambda::Url",
                    "Properties": {
                        "AuthType": "NONE",
                        "TargetFunctionArn": {"Ref": format!("Frontend{name}")}
                    }
                }),
            },
            CfnResource {
                name: format!("FrontendUrlPermission{name}"),
                resource: json!({
                    "Type": "AWS::Lambda::Permission",
                    "Properties": {
                        "Action": "lambda:InvokeFunctionUrl",
                        "FunctionUrlAuthType": "NONE",
                        "FunctionName": {"Ref": format!("Frontend{name}")},
                        "Principal": "*"
                    }
                }),
            },
            CfnResource {
                name: format!("FrontendDistribution{name}"),
                resource: json!({
                    "Type": "AWS::CloudFront::Distribution",
                    "Properties": {
                        "DistributionConfig": {
                            "Aliases": [branch_domain],
                            "Enabled": true,
                            "DefaultCacheBehavior": {
                                "AllowedMethods": [
                                    "DELETE",
                                    "GET",
                                    "HEAD",
                                    "OPTIONS",
                                    "PATCH",
                                    "POST",
                                    "PUT",
                                ],
                                "DefaultTTL": 0,
                                "MaxTTL": 0,
                                "MinTTL": 0,
                                "ForwardedValues": {
                                    "QueryString": true,
                                    "Headers": ["*"],
                                    "Cookies": {"Forward": "all"}
                                },
                                "TargetOriginId": format!("FrontendOrigin{name}"),
                                "ViewerProtocolPolicy": "redirect-to-https",
                                "Compress": true
                            },
                            "Origins": [{
                                "Id": format!("FrontendOrigin{name}"),
                                "DomainName": {
                                    "Fn::Select": [2, {"Fn::Split": ['/', {"Fn::GetAtt": [format!("FrontendUrl{name}"), "FunctionUrl"]}]}]
                                },
                                "CustomOriginConfig": {
                                    "OriginProtocolPolicy": "https-only"
                                }
                            }],
                            "ViewerCertificate": {
                                "AcmCertificateArn": existing.certificate_arn,
                                "SslSupportMethod": "sni-only",
                                "MinimumProtocolVersion": "TLSv1"
                            }
                        }
                    }
                }),
            },
            CfnResource {
                name: format!("FrontendAliasRecord{name}"),
                resource: json!({
                    "Type": "AWS::Route53::RecordSet",
                    "Properties": {
                        "HostedZoneId": existing.hosted_zone_id,
                        "Name": branch_domain,
                        "Type": "A",
                        "AliasTarget": {
                            "HostedZoneId": "Z2FDTNDATAQYW2", // CloudFront Hosted Zone ID
                            "DNSName": {
                                "Fn::GetAtt": [
                                    format!("FrontendDistribution{name}"),
                                    "DomainName"
                                ]
                            }
                        }
                    }
                }),
            },
        ]
    }
}
