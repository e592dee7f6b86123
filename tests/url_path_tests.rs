use cdnrule::schema::{decode_config, hash_string};
use cdnrule::{
    expand_url_path_condition, expand_url_path_condition_from_value, flatten_url_path_condition,
    url_path, CdnRuleError, ConfigValue, DeliveryRuleUrlPathCondition, MatchConditionName,
    StringSet, Transform, UrlPathConditionConfig, UrlPathOperator,
    URL_PATH_MATCH_CONDITION_ODATA_TYPE,
};
use serde_json::{json, Value};
use strum::IntoEnumIterator;

fn decode(value: Value) -> UrlPathConditionConfig {
    let config = decode_config(&url_path(), &value).expect("valid config");
    UrlPathConditionConfig::from_config(&config).expect("typed config")
}

#[test]
fn schema_declares_four_fields() {
    let schema = url_path();
    assert_eq!(schema.fields.len(), 4);

    let operator = schema.get("operator").expect("operator");
    assert!(operator.required);

    let negate = schema.get("negate_condition").expect("negate_condition");
    assert!(negate.optional);
    assert_eq!(negate.default, Some(ConfigValue::Bool(false)));

    let match_values = schema.get("match_values").expect("match_values");
    assert!(match_values.required);
    assert_eq!(match_values.min_items, Some(1));

    let transforms = schema.get("transforms").expect("transforms");
    assert!(transforms.optional);
    assert_eq!(transforms.default, None);
}

#[test]
fn documented_example_round_trips() {
    let raw = json!({
        "operator": "Contains",
        "negate_condition": true,
        "match_values": ["a", "b"],
        "transforms": ["Lowercase"]
    });
    let decoded = decode_config(&url_path(), &raw).expect("valid config");
    let config = UrlPathConditionConfig::from_config(&decoded).expect("typed config");

    let condition = expand_url_path_condition(&config);
    assert_eq!(condition.name, MatchConditionName::UrlPath);

    let parameters = condition.parameters.as_ref().expect("parameters");
    assert_eq!(parameters.operator, UrlPathOperator::Contains);
    assert_eq!(parameters.negate_condition, Some(true));
    assert_eq!(parameters.transforms, Some(vec![Transform::Lowercase]));
    let mut values = parameters.match_values.clone().expect("match values");
    values.sort();
    assert_eq!(values, vec!["a", "b"]);

    let flattened = flatten_url_path_condition(&condition);
    assert_eq!(flattened, decoded);
}

#[test]
fn omitted_negate_condition_expands_to_false() {
    let config = decode(json!({ "operator": "Equal", "match_values": ["/index.html"] }));
    assert!(!config.negate_condition);

    let parameters = expand_url_path_condition(&config)
        .parameters
        .expect("parameters");
    assert_eq!(parameters.negate_condition, Some(false));
}

#[test]
fn empty_or_absent_transforms_are_absent_after_round_trip() {
    for raw in [
        json!({ "operator": "Any", "match_values": ["/"] }),
        json!({ "operator": "Any", "match_values": ["/"], "transforms": [] }),
    ] {
        let condition = expand_url_path_condition(&decode(raw));
        let parameters = condition.parameters.as_ref().expect("parameters");
        assert_eq!(parameters.transforms, None);

        let flattened = flatten_url_path_condition(&condition);
        assert!(!flattened.contains_key("transforms"));
        assert_eq!(flattened["operator"], ConfigValue::from("Any"));
        assert_eq!(flattened["negate_condition"], ConfigValue::Bool(false));
    }
}

#[test]
fn transforms_keep_their_order() {
    let config = decode(json!({
        "operator": "BeginsWith",
        "match_values": ["/Static"],
        "transforms": ["Uppercase", "Lowercase", "Uppercase"]
    }));
    let condition = expand_url_path_condition(&config);
    let flattened = flatten_url_path_condition(&condition);
    assert_eq!(
        flattened["transforms"],
        ConfigValue::from(vec![
            "Uppercase".to_string(),
            "Lowercase".to_string(),
            "Uppercase".to_string()
        ])
    );
}

#[test]
fn every_expand_carries_fixed_discriminants() {
    for operator in UrlPathOperator::iter() {
        let config = UrlPathConditionConfig::new(operator, ["/x".to_string()]);
        let condition = expand_url_path_condition(&config);
        assert_eq!(condition.name, MatchConditionName::UrlPath);
        assert_eq!(
            condition
                .parameters
                .as_ref()
                .and_then(|parameters| parameters.odata_type.as_deref()),
            Some(URL_PATH_MATCH_CONDITION_ODATA_TYPE)
        );
    }
}

#[test]
fn all_operators_and_transforms_survive_round_trip() {
    for operator in UrlPathOperator::iter() {
        for transform in Transform::iter() {
            let raw = json!({
                "operator": operator.to_string(),
                "match_values": ["/a", "/b", "/c"],
                "transforms": [transform.to_string()]
            });
            let decoded = decode_config(&url_path(), &raw).expect("valid config");
            let config = UrlPathConditionConfig::from_config(&decoded).expect("typed config");
            let flattened = flatten_url_path_condition(&expand_url_path_condition(&config));
            assert_eq!(flattened, decoded, "operator {operator} transform {transform}");
        }
    }
}

#[test]
fn flatten_tolerates_missing_parameters() {
    let condition = DeliveryRuleUrlPathCondition {
        name: MatchConditionName::UrlPath,
        parameters: None,
    };
    let flattened = flatten_url_path_condition(&condition);
    for key in ["operator", "negate_condition", "match_values", "transforms"] {
        assert!(!flattened.contains_key(key));
    }
}

#[test]
fn flatten_rewraps_match_values_as_hashed_set() {
    let wire: DeliveryRuleUrlPathCondition = serde_json::from_value(json!({
        "name": "UrlPath",
        "parameters": {
            "@odata.type": URL_PATH_MATCH_CONDITION_ODATA_TYPE,
            "operator": "EndsWith",
            "negateCondition": false,
            "matchValues": [".png", ".jpg", ".png"]
        }
    }))
    .expect("wire condition");

    let flattened = flatten_url_path_condition(&wire);
    let set = flattened["match_values"].as_set().expect("set");
    assert_eq!(set.len(), 2);

    let expected: StringSet = [".jpg", ".png"].into_iter().collect();
    assert_eq!(set, &expected);

    let codes: Vec<String> = set.iter().map(|value| hash_string(value).to_string()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
}

#[test]
fn out_of_enum_values_are_rejected_by_the_schema() {
    let schema = url_path();
    let cases = [
        json!({ "operator": "Regex", "match_values": ["/"] }),
        json!({ "operator": "contains", "match_values": ["/"] }),
        json!({ "operator": "Any", "match_values": ["/"], "transforms": ["Trim"] }),
        json!({ "operator": "Any", "match_values": [] }),
        json!({ "operator": "Any", "match_values": ["   "] }),
        json!({ "operator": "Any" }),
        json!({ "match_values": ["/"] }),
    ];
    for raw in cases {
        assert!(decode_config(&schema, &raw).is_err(), "{raw} should be rejected");
    }
}

#[test]
fn expand_from_value_surfaces_schema_errors() {
    let err = expand_url_path_condition_from_value(&json!({
        "operator": "Any",
        "match_values": [""]
    }))
    .unwrap_err();
    assert!(matches!(err, CdnRuleError::Schema(_)));
}

#[test]
fn expanded_condition_serializes_to_wire_json() {
    let config = UrlPathConditionConfig::new(UrlPathOperator::Contains, ["/api".to_string()])
        .negated()
        .with_transform(Transform::Uppercase);
    let value = serde_json::to_value(expand_url_path_condition(&config)).expect("serialize");
    assert_eq!(
        value,
        json!({
            "name": "UrlPath",
            "parameters": {
                "@odata.type": URL_PATH_MATCH_CONDITION_ODATA_TYPE,
                "operator": "Contains",
                "negateCondition": true,
                "matchValues": ["/api"],
                "transforms": ["Uppercase"]
            }
        })
    );
}
