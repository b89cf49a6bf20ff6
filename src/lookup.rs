//! Dictionary lookups for clickable terms.
//!
//! The crate performs no network I/O: callers implement [`DefinitionSource`]
//! (an HTTP client, a cache, a fixture) and this module turns whatever comes
//! back into at most three short definitions. A missing or unusable answer
//! is the ordinary [`LookupOutcome::NotAvailable`], never an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::debug;

/// Most definitions kept per part of speech.
pub const MAX_PER_MEANING: usize = 2;

/// Most definitions kept overall.
pub const MAX_DEFINITIONS: usize = 3;

pub type Definitions = SmallVec<[Definition; MAX_DEFINITIONS]>;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no definition found for `{key}`")]
    NotFound { key: String },

    #[error("definition source failed: {0}")]
    Transport(String),

    #[error("malformed dictionary response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub part_of_speech: String,
    pub definition: String,
}

/// One dictionary entry as returned by the definition service.
///
/// Every field is optional: a `null` or missing field drops only the part
/// of the response it belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub meanings: Option<Vec<Meaning>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definitions: Option<Vec<Sense>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "definitions", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found(Definitions),
    NotAvailable,
}

impl LookupOutcome {
    fn from_definitions(defs: Definitions) -> Self {
        if defs.is_empty() {
            LookupOutcome::NotAvailable
        } else {
            LookupOutcome::Found(defs)
        }
    }

    pub fn definitions(&self) -> &[Definition] {
        match self {
            LookupOutcome::Found(defs) => defs.as_slice(),
            LookupOutcome::NotAvailable => &[],
        }
    }
}

/// Anything that can answer a lookup for a normalized key with a raw
/// dictionary response body.
pub trait DefinitionSource {
    fn fetch(&self, key: &str) -> Result<String, LookupError>;
}

impl<F> DefinitionSource for F
where
    F: Fn(&str) -> Result<String, LookupError>,
{
    fn fetch(&self, key: &str) -> Result<String, LookupError> {
        self(key)
    }
}

/// Keep the first entry only; from each of its meanings take at most
/// [`MAX_PER_MEANING`] definitions, and at most [`MAX_DEFINITIONS`] overall.
/// Meanings without a part of speech and senses without a definition are
/// skipped.
pub fn shape(entries: &[Entry]) -> Definitions {
    let Some(meanings) = entries.first().and_then(|e| e.meanings.as_deref()) else {
        return Definitions::new();
    };
    meanings
        .iter()
        .filter_map(|meaning| {
            let pos = meaning.part_of_speech.as_deref()?;
            let senses = meaning.definitions.as_deref()?;
            Some((pos, senses))
        })
        .flat_map(|(pos, senses)| {
            senses
                .iter()
                .filter_map(|sense| sense.definition.as_deref())
                .take(MAX_PER_MEANING)
                .map(move |definition| Definition {
                    part_of_speech: pos.to_owned(),
                    definition: definition.to_owned(),
                })
        })
        .take(MAX_DEFINITIONS)
        .collect()
}

/// Parse a raw response body strictly.
pub fn try_parse_response(body: &str) -> Result<Definitions, LookupError> {
    let entries: Vec<Entry> = serde_json::from_str(body)?;
    Ok(shape(&entries))
}

/// Parse a raw response body; anything unusable is `NotAvailable`.
pub fn parse_response(body: &str) -> LookupOutcome {
    match try_parse_response(body) {
        Ok(defs) => LookupOutcome::from_definitions(defs),
        Err(e) => {
            debug!(error = %e, "dictionary response not usable");
            LookupOutcome::NotAvailable
        }
    }
}

/// Look `key` up through `source`.
pub fn define<S: DefinitionSource + ?Sized>(source: &S, key: &str) -> LookupOutcome {
    match source.fetch(key) {
        Ok(body) => parse_response(&body),
        Err(e) => {
            debug!(key, error = %e, "definition lookup failed");
            LookupOutcome::NotAvailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEPATOTOXICITY: &str = r#"[
        {
            "word": "hepatotoxicity",
            "meanings": [
                {
                    "partOfSpeech": "noun",
                    "definitions": [
                        { "definition": "Damage to the liver caused by a drug or chemical." },
                        { "definition": "The capacity of a substance to damage the liver." },
                        { "definition": "A third noun sense that is dropped." }
                    ]
                },
                {
                    "partOfSpeech": "adjective",
                    "definitions": [
                        { "definition": "First adjective sense." },
                        { "definition": "Second adjective sense, over the overall cap." }
                    ]
                }
            ]
        },
        {
            "word": "hepatotoxicity",
            "meanings": [
                { "partOfSpeech": "verb", "definitions": [ { "definition": "Ignored entry." } ] }
            ]
        }
    ]"#;

    #[test]
    fn caps_per_meaning_and_overall() {
        let outcome = parse_response(HEPATOTOXICITY);
        let defs = outcome.definitions();
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[0].part_of_speech, "noun");
        assert_eq!(defs[1].part_of_speech, "noun");
        assert_eq!(defs[2].part_of_speech, "adjective");
        assert_eq!(defs[2].definition, "First adjective sense.");
    }

    #[test]
    fn not_found_body_is_not_available() {
        let body = r#"{"title":"No Definitions Found","message":"Sorry pal","resolution":""}"#;
        assert_eq!(parse_response(body), LookupOutcome::NotAvailable);
        assert!(matches!(
            try_parse_response(body),
            Err(LookupError::Malformed(_))
        ));
    }

    #[test]
    fn empty_results_are_not_available() {
        assert_eq!(parse_response("[]"), LookupOutcome::NotAvailable);
        assert_eq!(parse_response(r#"[{"meanings":[]}]"#), LookupOutcome::NotAvailable);
        assert_eq!(parse_response(r#"[{}]"#), LookupOutcome::NotAvailable);
    }

    #[test]
    fn null_fields_drop_only_their_part() {
        let body = r#"[{"meanings":[
            {"partOfSpeech":null,"definitions":[{"definition":"No part of speech."}]},
            {"partOfSpeech":"noun","definitions":[
                {"synonyms":[]},
                {"definition":null},
                {"definition":"Disease of the kidneys."}
            ]},
            {"partOfSpeech":"verb","definitions":null}
        ]}]"#;
        let outcome = parse_response(body);
        assert_eq!(
            outcome.definitions(),
            &[Definition {
                part_of_speech: "noun".into(),
                definition: "Disease of the kidneys.".into(),
            }]
        );
        assert_eq!(parse_response(r#"[{"meanings":null}]"#), LookupOutcome::NotAvailable);
    }

    #[test]
    fn source_errors_are_not_available() {
        let missing = |key: &str| -> Result<String, LookupError> {
            Err(LookupError::NotFound {
                key: key.to_owned(),
            })
        };
        assert_eq!(define(&missing, "nephropathy"), LookupOutcome::NotAvailable);
    }

    #[test]
    fn source_receives_key() {
        let echo = |key: &str| -> Result<String, LookupError> {
            Ok(format!(
                r#"[{{"meanings":[{{"partOfSpeech":"noun","definitions":[{{"definition":"{key}"}}]}}]}}]"#
            ))
        };
        let outcome = define(&echo, "nephropathy");
        assert_eq!(
            outcome,
            LookupOutcome::Found(smallvec::smallvec![Definition {
                part_of_speech: "noun".into(),
                definition: "nephropathy".into(),
            }])
        );
    }

    #[test]
    fn outcome_serializes_with_status() {
        let json = serde_json::to_string(&LookupOutcome::NotAvailable).unwrap();
        assert_eq!(json, r#"{"status":"not_available"}"#);
        let found = parse_response(HEPATOTOXICITY);
        let json = serde_json::to_value(&found).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["definitions"][0]["partOfSpeech"], "noun");
    }
}
