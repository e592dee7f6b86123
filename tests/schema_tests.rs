use cdnrule::{
    register_schema, validate_schema, ConfigValue, FieldSchema, ResourceSchema, SchemaError,
    SchemaRegistry, StringSet, Validator,
};
use serde_json::json;

fn origin_schema() -> ResourceSchema {
    ResourceSchema::new()
        .field(
            "host_name",
            FieldSchema::string()
                .required()
                .with_validator(Validator::string_is_not_white_space()),
        )
        .field("https_enabled", FieldSchema::bool().optional().with_default(true))
}

#[test]
fn schema_registry_registers_and_validates() {
    let mut registry = SchemaRegistry::new();
    assert!(registry.register("origin", origin_schema()));
    assert!(!registry.register("origin", origin_schema()));

    assert!(registry
        .validate("origin", &json!({ "host_name": "www.contoso.com" }))
        .is_ok());

    let missing = registry.validate("origin", &json!({ "https_enabled": false }));
    assert!(matches!(missing, Err(SchemaError::Validation { .. })));

    let extra = registry.validate("origin", &json!({ "host_name": "a", "port": 80 }));
    assert!(extra.is_err());

    assert_eq!(
        registry.validate("unknown", &json!({})),
        Err(SchemaError::NotRegistered("unknown".to_string()))
    );
}

#[test]
fn registry_decode_fills_defaults() {
    let mut registry = SchemaRegistry::new();
    registry.register("origin", origin_schema());

    let config = registry
        .decode("origin", &json!({ "host_name": "www.contoso.com" }))
        .expect("valid config");
    assert_eq!(config["https_enabled"], ConfigValue::Bool(true));
    assert_eq!(config["host_name"], ConfigValue::from("www.contoso.com"));
}

#[test]
fn global_registry_helpers_work() {
    register_schema("test.origin", origin_schema().with_name("test.origin"));
    assert!(validate_schema("test.origin", &json!({ "host_name": "ok" })).is_ok());
    assert!(validate_schema("test.origin", &json!({ "host_name": " " })).is_err());
}

#[test]
fn schema_serializes_field_descriptors() {
    let value = serde_json::to_value(origin_schema()).expect("serialize");
    assert_eq!(value["fields"]["host_name"]["type"], json!("string"));
    assert_eq!(value["fields"]["host_name"]["required"], json!(true));
    assert_eq!(
        value["fields"]["host_name"]["validator"],
        json!({ "kind": "string_is_not_white_space" })
    );
    assert_eq!(value["fields"]["https_enabled"]["default"], json!(true));

    let parsed: ResourceSchema = serde_json::from_value(value).expect("deserialize");
    assert_eq!(parsed, origin_schema());
}

#[test]
fn set_default_survives_serde_round_trip() {
    let set: StringSet = ["x", "y"].into_iter().collect();
    let field = FieldSchema::set(FieldSchema::string())
        .optional()
        .with_default(ConfigValue::Set(set));

    let value = serde_json::to_value(&field).expect("serialize");
    let parsed: FieldSchema = serde_json::from_value(value).expect("deserialize");
    assert_eq!(parsed, field);

    let list = FieldSchema::list(FieldSchema::string())
        .optional()
        .with_default(ConfigValue::from(vec!["x".to_string()]));
    let parsed: FieldSchema =
        serde_json::from_value(serde_json::to_value(&list).expect("serialize")).expect("deserialize");
    assert_eq!(parsed, list);
}
