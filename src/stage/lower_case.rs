use crate::{stage::Stage, testing::stage_contract::StageTestConfig};
use std::borrow::Cow;

/// Full Unicode lower-casing.
///
/// ASCII input takes a byte-scan fast path. Zero-copy when nothing would
/// change.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_uppercase());
        }
        text.chars().any(changes_when_lowercased)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            return Cow::Owned(text.to_ascii_lowercase());
        }
        Cow::Owned(text.to_lowercase())
    }
}

#[inline(always)]
fn changes_when_lowercased(c: char) -> bool {
    let mut lower = c.to_lowercase();
    !(lower.next() == Some(c) && lower.next().is_none())
}

impl StageTestConfig for LowerCase {
    fn samples() -> &'static [&'static str] {
        &["Hepatotoxicity", "NSAID", "already lower", "ÄÖÜ", "ǅ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "hepatotoxicity", "123 !@#", "naïve", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("HEPATOTOXICITY", "hepatotoxicity"),
            ("Ibuprofen", "ibuprofen"),
            ("ÄRZTIN", "ärztin"),
            ("\u{212A}", "k"),
        ]
    }
}
