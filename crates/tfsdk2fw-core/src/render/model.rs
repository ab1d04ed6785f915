//! Renders the model struct body with gofmt-style column alignment

use super::writer::{quote, GoWriter};
use crate::target::ModelStruct;

/// One `GoName GoType `tfsdk:"name"`` line per field
pub fn render(model: &ModelStruct) -> String {
    let name_width = model.fields.iter().map(|f| f.go_name.len()).max().unwrap_or(0);
    let type_width = model.fields.iter().map(|f| f.go_type.len()).max().unwrap_or(0);

    let mut w = GoWriter::new();
    for field in &model.fields {
        w.line(format!(
            "{:<name_width$} {:<type_width$} `tfsdk:{}`",
            field.go_name,
            field.go_type,
            quote(&field.tfsdk_name),
        ));
    }
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::ModelField;

    fn field(go_name: &str, go_type: &str, tfsdk_name: &str) -> ModelField {
        ModelField {
            go_name: go_name.to_string(),
            go_type: go_type.to_string(),
            tfsdk_name: tfsdk_name.to_string(),
        }
    }

    #[test]
    fn test_aligned_fields() {
        let model = ModelStruct {
            fields: vec![
                field("ARN", "fwtypes.ARN", "arn"),
                field("ID", "types.String", "id"),
                field("DelaySeconds", "types.Int64", "delay_seconds"),
            ],
        };

        let expected = "ARN          fwtypes.ARN  `tfsdk:\"arn\"`\n\
                        ID           types.String `tfsdk:\"id\"`\n\
                        DelaySeconds types.Int64  `tfsdk:\"delay_seconds\"`";
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn test_empty_model() {
        assert_eq!(render(&ModelStruct::default()), "");
    }
}
