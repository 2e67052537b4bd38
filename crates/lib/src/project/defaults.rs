//! The built-in project scaffold.
//!
//! Every load starts from [`build_defaults`]; the project manifest and the
//! discovered modules are merged on top of it.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use uuid::Uuid;

use crate::consts::{DEFAULT_PROJECT_VERSION, NAME_PREFIX, SHORT_ID_LEN, TOOL_VERSION};

use super::types::ProjectDescriptor;

/// Build the default descriptor.
///
/// The name is `serverless` followed by a fresh short id, so two calls return
/// descriptors that differ in `name` and nothing else.
pub fn build_defaults() -> ProjectDescriptor {
  ProjectDescriptor {
    name: format!("{}{}", NAME_PREFIX, generate_short_id(SHORT_ID_LEN)),
    version: DEFAULT_PROJECT_VERSION.to_string(),
    profile: default_profile(),
    location: "https://github.com/...".to_string(),
    author: String::new(),
    description: "A Serverless Project".to_string(),
    custom: Map::new(),
    modules: BTreeMap::new(),
    plugins: Vec::new(),
    infrastructure_template: default_template(),
    extra: Map::new(),
  }
}

/// Profile string derived from this tool's version, e.g. `serverless-v0.1.0`.
pub fn default_profile() -> String {
  format!("{}-v{}", NAME_PREFIX, TOOL_VERSION)
}

/// Generate a lowercase hex id of `len` characters (at most 32).
pub fn generate_short_id(len: usize) -> String {
  let id = Uuid::new_v4().simple().to_string();
  id[..len.min(id.len())].to_string()
}

/// The baseline CloudFormation template: a Lambda execution role and the
/// policy that lets it write logs.
///
/// `${stage}`, `${region}` and `${projectName}` are left in place for the
/// population pass.
pub fn default_template() -> Value {
  json!({
    "AWSTemplateFormatVersion": "2010-09-09",
    "Description": "The AWS CloudFormation template for this Serverless application's resources outside of Lambdas and Api Gateway",
    "Resources": {
      "IamRoleLambda": {
        "Type": "AWS::IAM::Role",
        "Properties": {
          "AssumeRolePolicyDocument": {
            "Version": "2012-10-17",
            "Statement": [
              {
                "Effect": "Allow",
                "Principal": {
                  "Service": ["lambda.amazonaws.com"]
                },
                "Action": ["sts:AssumeRole"]
              }
            ]
          },
          "Path": "/"
        }
      },
      "IamPolicyLambda": {
        "Type": "AWS::IAM::Policy",
        "Properties": {
          "PolicyName": "${stage}-${projectName}-lambda",
          "PolicyDocument": {
            "Version": "2012-10-17",
            "Statement": [
              {
                "Effect": "Allow",
                "Action": [
                  "logs:CreateLogGroup",
                  "logs:CreateLogStream",
                  "logs:PutLogEvents"
                ],
                "Resource": "arn:aws:logs:${region}:*:"
              }
            ]
          },
          "Roles": [{ "Ref": "IamRoleLambda" }],
          "Groups": [{ "Ref": "IamGroupLambda" }]
        }
      }
    },
    "Outputs": {
      "IamRoleArnLambda": {
        "Description": "ARN of the lambda IAM role",
        "Value": {
          "Fn::GetAtt": ["IamRoleLambda", "Arn"]
        }
      }
    }
  })
}
