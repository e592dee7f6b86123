pub mod cdn;
pub mod cli;
pub mod config;
pub mod deliveryruleconditions;
pub mod error;
pub mod schema;
pub mod utils;

pub use cdn::{
    DeliveryRuleCondition, DeliveryRuleUrlPathCondition, MatchConditionName, Transform,
    UrlPathMatchConditionParameters, UrlPathOperator, URL_PATH_MATCH_CONDITION_ODATA_TYPE,
};
pub use cli::{expand_document, flatten_document, schema_exports, validate_document, SchemaExportEntry};
pub use config::{load_document, DocumentFormat, EnvConfig};
pub use deliveryruleconditions::{
    expand_delivery_rule_conditions, expand_url_path_condition,
    expand_url_path_condition_from_value, flatten_delivery_rule_conditions,
    flatten_url_path_condition, register_builtin_conditions, url_path, ConditionKind,
    UrlPathConditionConfig,
};
pub use error::{CdnRuleError, Result};
pub use schema::{
    decode_config, register_schema, validate_schema, ConfigMap, ConfigValue, FieldSchema,
    FieldType, ResourceSchema, SchemaError, SchemaRegistry, StringSet, Validator,
};
pub use utils::logging;
