//! Show command integration tests.

use predicates::prelude::*;
use serde_json::json;

use super::common::TestEnv;

fn shop() -> TestEnv {
  let env = TestEnv::from_fixture("shop-project.json");
  env.add_module("users", "users-module.json");
  env.add_module("orders-svc", "orders-module.json");
  env
}

#[test]
fn show_prints_summary() {
  let env = shop();

  env
    .sls_cmd()
    .arg("show")
    .arg(env.root_path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Project: shop"))
    .stdout(predicate::str::contains("1.4.0"))
    .stderr(predicate::str::contains("not populated"));
}

#[test]
fn show_merges_manifest_over_defaults() {
  let env = shop();
  let root = env.root_path();
  let value = env.json(&["show", root.to_str().unwrap(), "--json"]);

  assert_eq!(value["name"], "shop");
  assert_eq!(value["author"], "Shop Team");
  assert_eq!(value["location"], "https://github.com/...");
  assert_eq!(value["plugins"], json!(["serverless-optimizer-plugin"]));
  assert_eq!(value["custom"]["tablePrefix"], "${projectName}-${stage}");
  assert!(value["cloudFormation"]["Resources"]["IamRoleLambda"].is_object());
}

#[test]
fn show_keys_modules_by_declared_name() {
  let env = shop();
  let root = env.root_path();
  let value = env.json(&["show", root.to_str().unwrap(), "--json"]);

  let modules = value["modules"].as_object().unwrap();
  assert_eq!(modules.keys().collect::<Vec<_>>(), vec!["orders", "users"]);
  assert_eq!(value["modules"]["orders"]["runtime"], "python2.7");
}

#[test]
fn show_populates_whole_tree() {
  let env = shop();
  env.write_file("_meta/variables/s-variables-dev.json", &super::common::fixture_content("dev-variables.json"));
  let root = env.root_path();

  let value = env.json(&[
    "show",
    root.to_str().unwrap(),
    "--stage",
    "dev",
    "--region",
    "us-east-1",
    "--json",
  ]);

  let policy = &value["cloudFormation"]["Resources"]["IamPolicyLambda"]["Properties"];
  assert_eq!(policy["PolicyName"], "dev-shop-lambda");
  assert_eq!(
    policy["PolicyDocument"]["Statement"][0]["Resource"],
    "arn:aws:logs:us-east-1:*:"
  );
  assert_eq!(value["modules"]["users"]["custom"]["table"], "shop-dev-users");
  assert_eq!(value["modules"]["orders"]["custom"]["queue"], "orders-dev-us-east-1");
  assert_eq!(value["modules"]["orders"]["custom"]["topic"], "shop-dev-alerts");
}

#[test]
fn show_leaves_unknown_placeholders() {
  let env = shop();
  let root = env.root_path();

  let value = env.json(&[
    "show",
    root.to_str().unwrap(),
    "--stage",
    "prod",
    "--region",
    "eu-west-1",
    "--json",
  ]);

  assert_eq!(value["modules"]["orders"]["custom"]["topic"], "${alertsTopic}");
}

#[test]
fn show_uses_project_root_env() {
  let env = shop();

  env
    .sls_cmd()
    .arg("show")
    .env("SLS_PROJECT_ROOT", env.root_path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Project: shop"));
}

#[test]
fn show_fails_on_missing_modules_dir() {
  let env = TestEnv::empty();
  env.write_file("s-project.json", "{}");

  env
    .sls_cmd()
    .arg("show")
    .arg(env.root_path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("modules directory not found"));
}

#[test]
fn show_fails_on_bad_manifest() {
  let env = TestEnv::empty();
  env.write_file("s-project.json", "{ not json");
  std::fs::create_dir_all(env.root_path().join("back/modules")).unwrap();

  env
    .sls_cmd()
    .arg("show")
    .arg(env.root_path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to parse project manifest"));
}
