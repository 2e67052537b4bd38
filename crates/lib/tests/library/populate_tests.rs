use std::fs;

use serde_json::json;

use slsproj_lib::populate::{DeploymentContext, PlaceholderPopulator, PopulateError, Populator};
use slsproj_lib::project::{ProjectStore, build_defaults, load};
use slsproj_lib::util::hash::Hashable;

use super::common::create_project;

#[test]
fn builtin_template_resolves_for_dev() {
  let mut store = ProjectStore::load(None).unwrap();
  let name = store.get().name.clone();

  let populated = store.populate("dev", "us-east-1").unwrap();
  let policy = &populated.infrastructure_template["Resources"]["IamPolicyLambda"]["Properties"];

  assert_eq!(policy["PolicyName"], json!(format!("dev-{name}-lambda")));
  assert_eq!(
    policy["PolicyDocument"]["Statement"][0]["Resource"],
    "arn:aws:logs:us-east-1:*:"
  );
}

#[test]
fn population_twice_changes_nothing() {
  let temp = create_project(
    &json!({
      "name": "shop",
      "custom": {
        "prefix": "${projectName}-${stage}",
        "cost": "$0.20 per ${unit}",
        "nested": { "keep": "${prefix}" }
      }
    }),
    &[(
      "users",
      json!({ "name": "users", "env": { "TABLE": "${prefix}-users", "HOME": "$HOME" } }),
    )],
  );
  let descriptor = load(Some(temp.path())).unwrap();
  let ctx = DeploymentContext::new("dev", "us-east-1");

  let once = PlaceholderPopulator.populate(&descriptor, Some(temp.path()), &ctx).unwrap();
  let twice = PlaceholderPopulator.populate(&once, Some(temp.path()), &ctx).unwrap();

  assert_eq!(once, twice);
  assert_eq!(once.compute_hash().unwrap(), twice.compute_hash().unwrap());
  assert_eq!(
    once.modules["users"].data["env"],
    json!({ "TABLE": "shop-dev-users", "HOME": "$HOME" })
  );
  assert_eq!(once.custom["nested"], json!({ "keep": "shop-dev" }));
  assert_eq!(once.custom["cost"], json!("$0.20 per ${unit}"));
}

#[test]
fn variable_files_feed_population() {
  let temp = create_project(
    &json!({ "name": "shop", "custom": { "memory": 128, "table": "from-custom" } }),
    &[("users", json!({ "name": "users", "memory": "${memory}", "table": "${table}" }))],
  );
  let vars = temp.path().join("_meta").join("variables");
  fs::create_dir_all(&vars).unwrap();
  fs::write(vars.join("s-variables-prod.json"), r#"{"table":"from-stage"}"#).unwrap();
  fs::write(vars.join("s-variables-prod-eu-west-1.json"), r#"{"table":"from-region"}"#).unwrap();

  let mut store = ProjectStore::load(Some(temp.path())).unwrap();
  let populated = store.populate("prod", "eu-west-1").unwrap();

  assert_eq!(populated.modules["users"].data["memory"], json!("128"));
  assert_eq!(populated.modules["users"].data["table"], json!("from-region"));
}

#[test]
fn failed_population_keeps_previous_descriptor() {
  let mut descriptor = build_defaults();
  descriptor.custom.insert("grow".into(), json!("${grow}!"));
  let mut store = ProjectStore::new(descriptor.clone(), None);

  let result = store.populate("dev", "us-east-1");
  assert!(matches!(result, Err(PopulateError::NonConvergent { .. })));
  assert_eq!(store.get(), &descriptor);
  assert!(!store.is_populated());
}

#[test]
fn set_get_round_trip_without_coercion() {
  let mut store = ProjectStore::load(None).unwrap();
  let mut descriptor = build_defaults();
  descriptor.version = "not-semver".into();
  descriptor.extra.insert("anything".into(), json!({ "deep": [null, 1.5] }));

  store.set(descriptor.clone());
  assert_eq!(store.get(), &descriptor);
  assert_eq!(store.snapshot(), descriptor);
}

#[test]
fn extra_entries_never_replace_declared_fields() {
  let mut store = ProjectStore::load(None).unwrap();
  let mut descriptor = build_defaults();
  descriptor.name = "real".into();
  descriptor.extra.insert("name".into(), json!("shadow"));
  descriptor.extra.insert("infrastructureTemplate".into(), json!({ "Owner": "${stage}" }));
  let template = descriptor.infrastructure_template.clone();
  store.set(descriptor);

  let populated = store.populate("dev", "us-east-1").unwrap();

  assert_eq!(populated.name, "real");
  assert_eq!(populated.extra["name"], json!("shadow"));
  assert_eq!(populated.extra["infrastructureTemplate"], json!({ "Owner": "dev" }));
  assert_eq!(
    populated.infrastructure_template["Resources"]["IamRoleLambda"],
    template["Resources"]["IamRoleLambda"]
  );
  assert_eq!(
    populated.infrastructure_template["Resources"]["IamPolicyLambda"]["Properties"]["PolicyName"],
    json!("dev-real-lambda")
  );
}

#[test]
fn stray_opener_in_custom_value_still_resolves_stage() {
  let mut descriptor = build_defaults();
  descriptor.custom.insert("cmd".into(), json!("echo ${ && deploy ${stage}"));
  let mut store = ProjectStore::new(descriptor, None);

  let populated = store.populate("dev", "us-east-1").unwrap();
  assert_eq!(populated.custom["cmd"], json!("echo ${ && deploy dev"));
}
