use std::io::Write as _;

use pact_store::{LazyValueStore, Scope};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use super::*;

const SEED: &str = r#"
[global]
feature_signing = true
contract_ttl_days = 30

[sessions."sess-42"]
role = "partyA"
did = "DID:partyAFakeTokenForGetAllRoute"

[sessions.empty]
"#;

#[test]
fn parses_global_and_session_tables() {
	let seed = Seed::<Value>::from_toml(SEED).unwrap();

	assert_eq!(seed.global.get("feature_signing"), Some(&json!(true)));
	assert_eq!(seed.global.get("contract_ttl_days"), Some(&json!(30)));
	assert_eq!(seed.sessions["sess-42"].get("role"), Some(&json!("partyA")));
	assert!(seed.sessions["empty"].is_empty());
}

#[test]
fn missing_tables_default_to_empty() {
	let seed = Seed::<Value>::from_toml("").unwrap();
	assert!(seed.is_empty());

	let seed = Seed::<Value>::from_toml("[global]\nx = 1\n").unwrap();
	assert!(seed.sessions.is_empty());
	assert!(!seed.is_empty());
}

#[test]
fn rejects_unknown_tables() {
	let err = Seed::<Value>::from_toml("[user]\nx = 1\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn rejects_empty_session_ids() {
	let err = Seed::<Value>::from_toml("[sessions.\"\"]\nx = 1\n").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidSession(ref id) if id.is_empty()), "{err}");
}

#[test]
fn whitespace_session_ids_are_seeded() {
	let store = LazyValueStore::<Value>::new();
	Seed::<Value>::from_toml("[sessions.\" \"]\nx = 1\n").unwrap().apply(&store).unwrap();

	assert_eq!(store.get_for_session(" ", "x"), Some(json!(1)));
}

#[test]
fn invalid_seed_leaves_store_untouched() {
	let mut seed = Seed::<Value>::new();
	seed.global.insert("g".to_owned(), json!(1));
	seed.sessions.entry("a".to_owned()).or_default().insert("k".to_owned(), json!(2));
	seed.sessions.entry(String::new()).or_default().insert("k".to_owned(), json!(3));

	let store = LazyValueStore::<Value>::new();
	let err = seed.apply(&store).unwrap_err();

	assert!(matches!(err, ConfigError::InvalidSession(_)), "{err}");
	assert_eq!(store.get_global("g"), None);
	assert!(store.keys(Scope::Global).is_empty());
	assert_eq!(store.session_count(), 0);
}

#[test]
fn typed_values_are_checked_while_parsing() {
	assert!(Seed::<i64>::from_toml("[global]\nttl = 30\n").is_ok());
	assert!(matches!(Seed::<i64>::from_toml("[global]\nttl = \"thirty\"\n"), Err(ConfigError::Toml(_))));
}

#[test]
fn apply_merges_into_store() {
	let store = LazyValueStore::<Value>::new();
	store.add_global(pact_store::Entries::new().constant("existing", json!("kept"))).unwrap();

	let report = Seed::<Value>::from_toml(SEED).unwrap().apply(&store).unwrap();

	assert_eq!(
		report,
		SeedReport {
			global: 2,
			sessions: 1,
			session_entries: 2,
		}
	);
	assert_eq!(store.get_global("feature_signing"), Some(json!(true)));
	assert_eq!(store.get_global("existing"), Some(json!("kept")));
	assert_eq!(store.get_for_session("sess-42", "role"), Some(json!("partyA")));
	assert_eq!(store.get_from_namespace(Scope::Session("sess-42"), "contract_ttl_days"), None);
	assert_eq!(store.session_ids(), vec!["sess-42"]);
}

#[test]
fn apply_empty_seed_is_a_no_op() {
	let store = LazyValueStore::<Value>::new();
	let report = Seed::<Value>::new().apply(&store).unwrap();

	assert_eq!(report, SeedReport::default());
	assert!(store.keys(Scope::Global).is_empty());
	assert_eq!(store.session_count(), 0);
}

#[test]
fn later_seed_overrides_earlier() {
	let mut base = Seed::<Value>::from_toml(SEED).unwrap();
	let overlay = Seed::<Value>::from_toml("[global]\ncontract_ttl_days = 7\n[sessions.\"sess-42\"]\nrole = \"partyB\"\n").unwrap();
	base.merge(overlay);

	assert_eq!(base.global.get("contract_ttl_days"), Some(&json!(7)));
	assert_eq!(base.global.get("feature_signing"), Some(&json!(true)));
	assert_eq!(base.sessions["sess-42"].get("role"), Some(&json!("partyB")));
	assert_eq!(base.sessions["sess-42"].get("did"), Some(&json!("DID:partyAFakeTokenForGetAllRoute")));
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SEED.as_bytes()).unwrap();

	let seed = Seed::<Value>::load(file.path()).unwrap();
	assert_eq!(seed.global.len(), 2);
}

#[test]
fn load_reports_missing_file_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	let err = Seed::<Value>::load(&path).unwrap_err();
	match err {
		ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("expected Io error, got {other}"),
	}
}
