//! Response types for CLI output
//!
//! All types implement Serialize for consistent JSON output.

use serde::Serialize;

use crate::cli::OutputContext;
use crate::models::{DefinitionAndBoundSpan, DefinitionInfo, TextSpan};

/// Text span, with a 1-indexed position when the file could be read
#[derive(Debug, Clone, Serialize)]
pub struct SpanOutput {
    pub start: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
}

impl SpanOutput {
    pub fn new(span: TextSpan, position: Option<(u32, u32)>) -> Self {
        Self {
            start: span.start,
            length: span.length,
            line: position.map(|(line, _)| line),
            column: position.map(|(_, column)| column),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DefinitionOutput {
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub container_kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub container_name: String,
    pub file: String,
    pub span: SpanOutput,
}

impl DefinitionOutput {
    pub fn from_info(
        info: &DefinitionInfo,
        position: Option<(u32, u32)>,
        ctx: &OutputContext,
    ) -> Self {
        Self {
            kind: info.kind.to_string(),
            name: info.name.clone(),
            container_kind: info.container_kind.to_string(),
            container_name: info.container_name.clone(),
            file: ctx.relative_path(&info.file_name),
            span: SpanOutput::new(info.text_span, position),
        }
    }
}

/// Response for def and symbol commands
#[derive(Debug, Serialize)]
pub struct DefinitionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_span: Option<SpanOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<DefinitionOutput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DefinitionResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            bound_span: None,
            definitions: None,
            message: Some(message.into()),
        }
    }

    /// Build from a resolution result; `position_of` maps a definition to
    /// its line and column in the target file
    pub fn from_result(
        result: &DefinitionAndBoundSpan,
        bound_position: Option<(u32, u32)>,
        ctx: &OutputContext,
        position_of: impl Fn(&DefinitionInfo) -> Option<(u32, u32)>,
    ) -> Self {
        let definitions = result.definitions.as_ref().map(|defs| {
            defs.iter()
                .map(|info| DefinitionOutput::from_info(info, position_of(info), ctx))
                .collect::<Vec<_>>()
        });
        let message = match &definitions {
            None => Some("Symbol has no definition".to_string()),
            Some(defs) if defs.is_empty() => Some("No matching templates".to_string()),
            Some(_) => None,
        };

        Self {
            bound_span: Some(SpanOutput::new(result.text_span, bound_position)),
            definitions,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateOutput {
    pub file: String,
    pub length: usize,
}

/// Response for templates command
#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub count: usize,
    pub templates: Vec<TemplateOutput>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementKind;
    use std::path::PathBuf;

    fn ctx() -> OutputContext {
        OutputContext::new(PathBuf::from("/proj"))
    }

    #[test]
    fn test_definition_response_relative_files() {
        let result = DefinitionAndBoundSpan {
            definitions: Some(vec![DefinitionInfo {
                kind: ElementKind::ExternalModuleName,
                name: "/proj/src/x.html".to_string(),
                container_kind: ElementKind::Unknown,
                container_name: String::new(),
                text_span: TextSpan::new(0, 12),
                file_name: PathBuf::from("/proj/src/x.html"),
            }]),
            text_span: TextSpan::new(30, 10),
        };

        let response = DefinitionResponse::from_result(&result, Some((2, 14)), &ctx(), |_| {
            Some((1, 1))
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["bound_span"]["start"], 30);
        assert_eq!(json["bound_span"]["line"], 2);
        assert_eq!(json["definitions"][0]["file"], "src/x.html");
        assert_eq!(json["definitions"][0]["kind"], "external module name");
        assert!(json["definitions"][0].get("container_kind").is_none());
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_bound_only_response() {
        let result = DefinitionAndBoundSpan::bound_only(TextSpan::new(4, 3));
        let response = DefinitionResponse::from_result(&result, None, &ctx(), |_| None);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["bound_span"]["length"], 3);
        assert!(json["bound_span"].get("line").is_none());
        assert!(json.get("definitions").is_none());
        assert_eq!(json["message"], "Symbol has no definition");
    }

    #[test]
    fn test_empty_definitions_message() {
        let result = DefinitionAndBoundSpan {
            definitions: Some(vec![]),
            text_span: TextSpan::new(0, 1),
        };
        let response = DefinitionResponse::from_result(&result, None, &ctx(), |_| None);
        assert_eq!(response.message.as_deref(), Some("No matching templates"));
        assert_eq!(response.definitions.map(|d| d.len()), Some(0));
    }
}
