use vf_core::{ArticleInput, PredictionResult};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `verifact schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for(args.type_name), flags.format)
}

fn schema_for(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::PredictionResult => schemars::schema_for!(PredictionResult),
        SchemaType::ArticleInput => schemars::schema_for!(ArticleInput),
        SchemaType::History => schemars::schema_for!(Vec<PredictionResult>),
    }
}

#[cfg(test)]
mod tests {
    use super::schema_for;
    use crate::cli::root_commands::SchemaType;

    #[test]
    fn prediction_result_schema_lists_fields() {
        let schema = serde_json::to_value(schema_for(SchemaType::PredictionResult)).unwrap();
        let properties = schema["properties"].as_object().expect("object schema");
        for field in ["id", "title", "author", "text", "prediction", "confidence", "timestamp"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn history_schema_is_an_array() {
        let schema = serde_json::to_value(schema_for(SchemaType::History)).unwrap();
        assert_eq!(schema["type"], "array");
    }
}
