//! Turning document source text into an untyped value for validation.

use serde_json::Value;

use crate::documents::errors::DocumentError;
use crate::documents::types::DocumentFormat;

const FENCE: &str = "---";

/// Body of the `---` fenced block at the start of a Markdown file.
pub fn extract_front_matter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix(FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

fn parse_error(format: DocumentFormat, error: impl std::fmt::Display) -> DocumentError {
    DocumentError::ParseError {
        format,
        message: error.to_string(),
    }
}

/// Parse `content` in the given format.
///
/// This only deserializes; it does not validate.
pub fn parse_document_source(content: &str, format: DocumentFormat) -> Result<Value, DocumentError> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(format, e)),
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| parse_error(format, e)),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(format, e)),
        DocumentFormat::Markdown => {
            let front_matter = extract_front_matter(content).ok_or(DocumentError::MissingFrontMatter)?;
            serde_yaml::from_str(front_matter).map_err(|e| parse_error(format, e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_front_matter() {
        let content = "---\ntitle: Hello\nmainCommand: npm start\n---\n\n# Hello\n";
        assert_eq!(
            extract_front_matter(content),
            Some("title: Hello\nmainCommand: npm start\n")
        );
    }

    #[test]
    fn test_extract_front_matter_crlf_and_empty() {
        assert_eq!(
            extract_front_matter("---\r\ntitle: Hi\r\n---\r\nbody"),
            Some("title: Hi\r\n")
        );
        assert_eq!(extract_front_matter("---\n---\n"), Some(""));
    }

    #[test]
    fn test_extract_front_matter_requires_fences() {
        assert_eq!(extract_front_matter("# Just markdown\n"), None);
        assert_eq!(extract_front_matter("---\ntitle: never closed\n"), None);
        assert_eq!(extract_front_matter("----\ntitle: x\n----\n"), None);
    }

    #[test]
    fn test_parse_formats_to_same_value() {
        let expected = json!({ "title": "Hello", "previews": [5173], "terminal": true });

        let from_json = parse_document_source(
            r#"{ "title": "Hello", "previews": [5173], "terminal": true }"#,
            DocumentFormat::Json,
        )
        .unwrap();
        let from_toml = parse_document_source(
            "title = \"Hello\"\npreviews = [5173]\nterminal = true\n",
            DocumentFormat::Toml,
        )
        .unwrap();
        let from_yaml = parse_document_source(
            "title: Hello\npreviews:\n  - 5173\nterminal: true\n",
            DocumentFormat::Yaml,
        )
        .unwrap();
        let from_markdown = parse_document_source(
            "---\ntitle: Hello\npreviews: [5173]\nterminal: true\n---\nBody text\n",
            DocumentFormat::Markdown,
        )
        .unwrap();

        assert_eq!(from_json, expected);
        assert_eq!(from_toml, expected);
        assert_eq!(from_yaml, expected);
        assert_eq!(from_markdown, expected);
    }

    #[test]
    fn test_yaml_panel_pairs() {
        let value = parse_document_source(
            "title: Build\nterminal:\n  panels:\n    - terminal\n    - [output, Build Output]\n",
            DocumentFormat::Yaml,
        )
        .unwrap();
        assert_eq!(
            value["terminal"]["panels"],
            json!(["terminal", ["output", "Build Output"]])
        );
    }

    #[test]
    fn test_parse_errors() {
        let error = parse_document_source("{ not json", DocumentFormat::Json).unwrap_err();
        assert!(matches!(
            error,
            DocumentError::ParseError {
                format: DocumentFormat::Json,
                ..
            }
        ));

        let error = parse_document_source("# no front matter", DocumentFormat::Markdown).unwrap_err();
        assert!(matches!(error, DocumentError::MissingFrontMatter));
    }
}
