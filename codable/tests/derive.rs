use std::collections::HashMap;

use codable::{Decodable, Encodable};
use serde_json::json;

mod common;
use common::assert_round_trip;

#[derive(Decodable, Encodable, Debug, PartialEq)]
struct User {
	id: String,
	name: String,
	#[coding_key("user_tag")]
	#[coding_default]
	tag: String,
}

#[test]
fn custom_key_with_default() {
	let user: User = codable::from_value(&json!({ "id": "a1", "name": "Ann" })).unwrap();
	assert_eq!(
		user,
		User {
			id: "a1".into(),
			name: "Ann".into(),
			tag: String::new(),
		}
	);
	assert_eq!(
		codable::to_value(&user).unwrap(),
		json!({ "id": "a1", "name": "Ann", "user_tag": "" })
	);

	// Present key overrides default
	let user: User =
		codable::from_value(&json!({ "id": "a1", "name": "Ann", "user_tag": "x" })).unwrap();
	assert_eq!(user.tag, "x");

	// Field name is not the key
	let user: User = codable::from_value(&json!({ "id": "a1", "name": "Ann", "tag": "x" })).unwrap();
	assert_eq!(user.tag, "");
}

#[test]
fn null_uses_default() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Counter {
		#[coding_default(3)]
		count: u32,
		#[coding_default("unnamed".to_string())]
		label: String,
	}

	let counter: Counter = codable::from_value(&json!({ "count": null })).unwrap();
	assert_eq!(
		counter,
		Counter {
			count: 3,
			label: "unnamed".into(),
		}
	);

	let counter: Counter = codable::from_value(&json!({ "count": 7, "label": "x" })).unwrap();
	assert_eq!(counter.count, 7);
	assert_eq!(counter.label, "x");
}

#[test]
fn empty_structs() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Empty {}

	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Unit;

	assert_eq!(codable::to_value(&Empty {}).unwrap(), json!({}));
	assert_eq!(codable::to_value(&Unit).unwrap(), json!({}));

	// No container is acquired, so any input decodes
	assert_eq!(codable::from_value::<Empty>(&json!({ "x": 1 })).unwrap(), Empty {});
	assert_eq!(codable::from_value::<Unit>(&json!(null)).unwrap(), Unit);
}

#[test]
fn every_field_is_encoded() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Ordered {
		zeta: u8,
		alpha: u8,
		mu: u8,
	}

	let json = codable::to_string(&Ordered {
		zeta: 1,
		alpha: 2,
		mu: 3,
	})
	.unwrap();
	let value: serde_json::Value = serde_json::from_str(&json).unwrap();
	assert_eq!(value, json!({ "zeta": 1, "alpha": 2, "mu": 3 }));
}

#[test]
fn raw_identifiers_use_bare_name() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Token {
		r#type: String,
		r#loop: bool,
	}

	let token = Token {
		r#type: "keyword".into(),
		r#loop: true,
	};
	assert_eq!(
		codable::to_value(&token).unwrap(),
		json!({ "type": "keyword", "loop": true })
	);
	assert_round_trip(&token);
}

#[test]
fn generics() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Page<T> {
		items: Vec<T>,
		next: Option<u32>,
	}

	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Item {
		name: String,
	}

	let page: Page<Item> =
		codable::from_str(r#"{"items": [{"name": "a"}, {"name": "b"}], "next": null}"#).unwrap();
	assert_eq!(page.items.len(), 2);
	assert_eq!(page.items[1].name, "b");
	assert_eq!(page.next, None);

	assert_round_trip(&page);
	assert_round_trip(&Page::<u8> {
		items: vec![1, 2],
		next: Some(2),
	});
}

#[test]
fn nested_and_collections() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Team {
		lead: Box<Member>,
		members: Vec<Member>,
		roles: HashMap<String, Vec<String>>,
		extra: serde_json::Value,
	}

	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Member {
		#[coding_key("member_id")]
		id: u32,
		active: bool,
	}

	let input = json!({
		"lead": { "member_id": 1, "active": true },
		"members": [{ "member_id": 2, "active": false }],
		"roles": { "admin": ["a", "b"] },
		"extra": { "anything": [1, "two", null] }
	});
	let team: Team = codable::from_value(&input).unwrap();
	assert_eq!(team.lead.id, 1);
	assert!(!team.members[0].active);
	assert_eq!(team.roles["admin"], ["a", "b"]);
	assert_eq!(codable::to_value(&team).unwrap(), input);
}

#[test]
fn string_round_trip() {
	let user = User {
		id: "id\"1".into(),
		name: "Zoë".into(),
		tag: "t".into(),
	};
	let json = codable::to_string(&user).unwrap();
	assert_eq!(codable::from_str::<User>(&json).unwrap(), user);
}

#[test]
fn struct_named_coding_keys() {
	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct CodingKeys {
		#[coding_key("primary")]
		first: String,
		rest: Vec<String>,
	}

	#[derive(Decodable, Encodable, Debug, PartialEq)]
	struct Schema {
		keys: CodingKeys,
	}

	let schema = Schema {
		keys: CodingKeys {
			first: "id".into(),
			rest: vec!["name".into()],
		},
	};
	let value = codable::to_value(&schema).unwrap();
	assert_eq!(value, json!({ "keys": { "primary": "id", "rest": ["name"] } }));
	assert_eq!(codable::from_value::<Schema>(&value).unwrap(), schema);
}
