use serde::Serialize;
use serde_json::Value;

use crate::cdn::DeliveryRuleCondition;
use crate::deliveryruleconditions::{
    expand_delivery_rule_conditions, flatten_delivery_rule_conditions, register_builtin_conditions,
};
use crate::error::Result;
use crate::schema::{config_to_json, schemas_snapshot, ResourceSchema};

#[derive(Clone, Debug, Serialize)]
pub struct SchemaExportEntry {
    pub name: String,
    pub schema: ResourceSchema,
}

pub fn schema_exports() -> Vec<SchemaExportEntry> {
    register_builtin_conditions();
    schemas_snapshot()
        .into_iter()
        .map(|(name, schema)| SchemaExportEntry { name, schema })
        .collect()
}

/// 条件文档 -> API 线上格式（条件数组）
pub fn expand_document(document: &Value) -> Result<Value> {
    let conditions = expand_delivery_rule_conditions(document)?;
    Ok(serde_json::to_value(conditions)?)
}

/// API 线上格式（条件数组或单个条件） -> 条件文档
pub fn flatten_document(wire: &Value) -> Result<Value> {
    let conditions: Vec<DeliveryRuleCondition> = match wire {
        Value::Array(_) => serde_json::from_value(wire.clone())?,
        _ => vec![serde_json::from_value(wire.clone())?],
    };

    let blocks = flatten_delivery_rule_conditions(&conditions);
    Ok(Value::Object(
        blocks
            .into_iter()
            .map(|(block, configs)| {
                let items = configs.iter().map(config_to_json).collect();
                (block, Value::Array(items))
            })
            .collect(),
    ))
}

/// 校验条件文档，返回条件数量
pub fn validate_document(document: &Value) -> Result<usize> {
    expand_delivery_rule_conditions(document).map(|conditions| conditions.len())
}
