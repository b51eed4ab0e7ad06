//! Note parameters embedded in documents.
//!
//! A document can describe the flashcard it wants in two ways.
//!
//! An `AnkiIntegration` fenced block, one `key: value;` per line:
//!
//! ````markdown
//! ```AnkiIntegration
//! deck: "Spanish";
//! model: Basic;
//! tags: "lang::es", "greeting";
//! Front: "Hola; buenos días";
//! Back: Hello;
//! ```
//! ````
//!
//! Or YAML front matter, already parsed by the host into a mapping:
//!
//! ```yaml
//! ---
//! deck: Spanish
//! model: Basic
//! cardTags: [lang::es, greeting]
//! front: Hola
//! back: Hello
//! ---
//! ```
//!
//! Both produce the same [`NoteParameters`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use regex_lite::Regex;
use serde_json::{Map, Value};

/// Language tag of the fenced block holding note parameters.
pub const CODE_BLOCK_LANGUAGE: &str = "AnkiIntegration";

/// Front-matter key holding the tag list.
pub const FRONT_MATTER_TAGS_KEY: &str = "cardTags";

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(\w+):\s*(?:"([^"]+)"|([^;]+));"#).expect("valid line pattern")
});

static QUOTED_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("valid tag pattern"));

/// Deck, template, tags and field values requested by a document.
///
/// Field keys are lower-cased so they can be matched against a template's
/// field names without regard to case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteParameters {
    /// Requested deck name, matched exactly against the catalog.
    pub deck: Option<String>,
    /// Requested template name, matched exactly against the catalog.
    pub template: Option<String>,
    /// Tags, in document order.
    pub tags: Vec<String>,
    /// Field values keyed by lower-cased field name.
    pub fields: BTreeMap<String, String>,
}

impl NoteParameters {
    /// Look up a field value by field name, ignoring case.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Whether nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.deck.is_none()
            && self.template.is_none()
            && self.tags.is_empty()
            && self.fields.is_empty()
    }
}

/// Which parameter a key feeds.
enum Key {
    Deck,
    Template,
    Tags,
    Field(String),
}

impl Key {
    fn classify(raw: &str, tags_key: &str) -> Self {
        let key = raw.to_lowercase();
        match key.as_str() {
            "deck" => Key::Deck,
            "template" | "model" => Key::Template,
            k if k == tags_key => Key::Tags,
            _ => Key::Field(key),
        }
    }
}

/// Extract parameters from the active document's text.
///
/// Returns `None` when there is no active document or it holds no
/// `AnkiIntegration` block, so callers can tell "nothing to prefill" apart
/// from a block that happens to be empty.
pub fn from_document(document: Option<&str>) -> Option<NoteParameters> {
    let block = find_code_block(document?)?;
    Some(parse_code_block(&block))
}

/// Return the body of the first `AnkiIntegration` fenced block.
///
/// Only backtick fences with a closing fence count. Only the first word of
/// the fence's info string is compared, and the comparison is
/// case-sensitive.
pub fn find_code_block(document: &str) -> Option<String> {
    let mut inside = false;
    let mut body = String::new();

    for (event, range) in Parser::new(document).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                if info.split_whitespace().next() == Some(CODE_BLOCK_LANGUAGE)
                    && is_closed_backtick_fence(&document[range.clone()]) =>
            {
                inside = true;
            }
            Event::Text(text) if inside => body.push_str(&text),
            Event::End(TagEnd::CodeBlock) if inside => return Some(body),
            _ => {}
        }
    }

    None
}

/// Whether a fenced block's source opens with backticks and has a closing
/// fence. pulldown-cmark runs an unclosed fence to the end of the document.
fn is_closed_backtick_fence(source: &str) -> bool {
    let mut lines = source.trim_end_matches(['\n', '\r']).lines();
    let opening = lines.next().unwrap_or_default().trim_start();
    let closing = lines.last().map(str::trim).unwrap_or_default();

    opening.starts_with("```")
        && closing.starts_with("```")
        && closing.chars().all(|c| c == '`')
}

/// Parse the body of an `AnkiIntegration` block.
///
/// Each line of the form `key: value;` or `key: "value";` is read in order;
/// other lines are skipped. The quoted form may contain `;`. Keys are
/// matched without regard to case: `deck`, `template` (or `model`) and
/// `tags` are reserved, everything else becomes a field. A later line for
/// the same key wins.
pub fn parse_code_block(body: &str) -> NoteParameters {
    let mut params = NoteParameters::default();

    for line in body.lines() {
        let Some(caps) = LINE_PATTERN.captures(line) else {
            continue;
        };
        let value = match (caps.get(2), caps.get(3)) {
            (Some(quoted), _) => quoted.as_str(),
            (None, Some(bare)) => bare.as_str().trim(),
            (None, None) => continue,
        };

        match Key::classify(&caps[1], "tags") {
            Key::Deck => params.deck = Some(value.to_string()),
            Key::Template => params.template = Some(value.to_string()),
            // The line pattern strips the quotes off a single-tag value.
            Key::Tags => params.tags = quoted_segments(&caps[0]),
            Key::Field(key) => {
                params.fields.insert(key, value.to_string());
            }
        }
    }

    params
}

/// Every `"..."` segment of a tags line, in order.
fn quoted_segments(line: &str) -> Vec<String> {
    QUOTED_SEGMENT
        .captures_iter(line)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Extract parameters from parsed front matter.
///
/// Reserved keys, compared without regard to case, are `deck`, `template`
/// (or `model`) and `cardTags`. Every other key becomes a field if its
/// value is a string, number or boolean. `cardTags` may be a list or a
/// single string. As in a block, when two keys name the same field the
/// later one in the mapping wins.
pub fn from_front_matter(front_matter: &Map<String, Value>) -> NoteParameters {
    let mut params = NoteParameters::default();
    let tags_key = FRONT_MATTER_TAGS_KEY.to_lowercase();

    for (raw_key, value) in front_matter {
        match Key::classify(raw_key, &tags_key) {
            Key::Deck => params.deck = scalar_text(value),
            Key::Template => params.template = scalar_text(value),
            Key::Tags => params.tags = tag_list(value),
            Key::Field(key) => {
                if let Some(text) = scalar_text(value) {
                    params.fields.insert(key, text);
                }
            }
        }
    }

    params
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn tag_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DOCUMENT: &str = r#"# Greetings

Some prose before the card.

```rust
deck: "Wrong";
```

```AnkiIntegration
deck: "Spanish";
model: Basic;
tags: "a::b", "c";
Front: "Hola; buenos días";
Back: Hello ;
this line is ignored
```

```AnkiIntegration
deck: "Second";
```
"#;

    #[test]
    fn test_find_first_matching_block() {
        let block = find_code_block(DOCUMENT).unwrap();
        assert!(block.starts_with("deck: \"Spanish\";"));
        assert!(!block.contains("Second"));
        assert!(!block.contains("Wrong"));
    }

    #[test]
    fn test_find_block_language_is_case_sensitive() {
        let doc = "```ankiintegration\ndeck: X;\n```\n";
        assert_eq!(find_code_block(doc), None);
    }

    #[test]
    fn test_find_block_with_extra_info() {
        let doc = "```AnkiIntegration hidden\ndeck: X;\n```\n";
        assert_eq!(find_code_block(doc).as_deref(), Some("deck: X;\n"));
    }

    #[test]
    fn test_unclosed_block_is_not_found() {
        let doc = "# t\n```AnkiIntegration\ndeck: X;\nfront: a;\n";
        assert_eq!(find_code_block(doc), None);
        assert_eq!(from_document(Some(doc)), None);
    }

    #[test]
    fn test_unclosed_block_after_closed_one() {
        let doc = "```AnkiIntegration\ndeck: A;\n```\n\n```AnkiIntegration\ndeck: B;\n";
        assert_eq!(find_code_block(doc).as_deref(), Some("deck: A;\n"));
    }

    #[test]
    fn test_tilde_fence_is_ignored() {
        let doc = "~~~AnkiIntegration\ndeck: X;\n~~~\n";
        assert_eq!(find_code_block(doc), None);
    }

    #[test]
    fn test_from_document() {
        let params = from_document(Some(DOCUMENT)).unwrap();
        assert_eq!(params.deck.as_deref(), Some("Spanish"));
        assert_eq!(params.template.as_deref(), Some("Basic"));
        assert_eq!(params.tags, vec!["a::b", "c"]);
        assert_eq!(params.field("front"), Some("Hola; buenos días"));
        assert_eq!(params.field("Back"), Some("Hello"));
        assert_eq!(params.fields.len(), 2);
    }

    #[test]
    fn test_no_document_or_no_block() {
        assert_eq!(from_document(None), None);
        assert_eq!(from_document(Some("# Just prose\n")), None);
    }

    #[test]
    fn test_empty_block_is_some() {
        let params = from_document(Some("```AnkiIntegration\n```\n")).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let block = find_code_block(DOCUMENT).unwrap();
        assert_eq!(parse_code_block(&block), parse_code_block(&block));
    }

    #[test]
    fn test_field_keys_are_lower_cased() {
        assert_eq!(parse_code_block("Word: \"Hi\";").fields["word"], "Hi");
        assert_eq!(parse_code_block("WORD: \"Hi\";").fields["word"], "Hi");
    }

    #[test]
    fn test_tags() {
        assert_eq!(parse_code_block("tags: \"a::b\", \"c\";").tags, vec!["a::b", "c"]);
        assert_eq!(parse_code_block("tags: \"solo\";").tags, vec!["solo"]);
        assert!(parse_code_block("tags: ;").tags.is_empty());
        assert!(parse_code_block("front: x;").tags.is_empty());
    }

    #[test]
    fn test_reserved_keys_never_become_fields() {
        let params = parse_code_block(
            "DECK: A;\nTemplate: B;\nMODEL: C;\nTags: \"t\";\nfront: f;",
        );
        assert_eq!(params.deck.as_deref(), Some("A"));
        assert_eq!(params.template.as_deref(), Some("C"));
        assert_eq!(params.tags, vec!["t"]);
        assert_eq!(params.fields.keys().collect::<Vec<_>>(), vec!["front"]);
    }

    #[test]
    fn test_lines_without_terminator_are_ignored() {
        let params = parse_code_block("front: no terminator\nback: ok;");
        assert_eq!(params.field("front"), None);
        assert_eq!(params.field("back"), Some("ok"));
    }

    #[test]
    fn test_front_matter() {
        let meta = json!({
            "deck": "Spanish",
            "model": "Basic",
            "cardTags": ["lang::es", "greeting"],
            "Front": "Hola",
            "back": "Hello",
            "difficulty": 3,
            "aliases": ["x", "y"],
            "empty": null
        });
        let params = from_front_matter(meta.as_object().unwrap());

        assert_eq!(params.deck.as_deref(), Some("Spanish"));
        assert_eq!(params.template.as_deref(), Some("Basic"));
        assert_eq!(params.tags, vec!["lang::es", "greeting"]);
        assert_eq!(params.field("front"), Some("Hola"));
        assert_eq!(params.field("back"), Some("Hello"));
        assert_eq!(params.field("difficulty"), Some("3"));
        assert_eq!(params.field("aliases"), None);
        assert_eq!(params.field("empty"), None);
        assert!(!params.fields.contains_key("deck"));
        assert!(!params.fields.contains_key("cardtags"));
    }

    #[test]
    fn test_front_matter_single_tag_and_template_key() {
        let meta = json!({"template": "Cloze", "cardTags": "solo"});
        let params = from_front_matter(meta.as_object().unwrap());
        assert_eq!(params.template.as_deref(), Some("Cloze"));
        assert_eq!(params.tags, vec!["solo"]);
        assert!(params.fields.is_empty());
    }

    #[test]
    fn test_case_collisions_resolve_the_same_way() {
        let block = parse_code_block("Front: \"A\";\nfront: \"B\";");
        assert_eq!(block.field("front"), Some("B"));

        // "Front" sorts before "front", so "front" comes later.
        let meta = json!({"Front": "A", "front": "B"});
        let matter = from_front_matter(meta.as_object().unwrap());
        assert_eq!(matter.field("front"), Some("B"));
    }

    #[test]
    fn test_empty_front_matter() {
        assert!(from_front_matter(&Map::new()).is_empty());
    }
}
