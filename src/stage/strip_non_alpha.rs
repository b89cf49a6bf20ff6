use crate::{stage::Stage, testing::stage_contract::StageTestConfig};
use std::borrow::Cow;

/// Removes every character outside `a`-`z`.
///
/// Runs after [`LowerCase`](crate::stage::LowerCase), so upper-case ASCII has
/// already been folded by the time this stage sees it; any that remains is
/// dropped like any other non-key character.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripNonAlpha;

impl Stage for StripNonAlpha {
    fn name(&self) -> &'static str {
        "strip_non_alpha"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.bytes().all(|b| b.is_ascii_lowercase())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(text.chars().filter(char::is_ascii_lowercase).collect())
    }
}

impl StageTestConfig for StripNonAlpha {
    fn samples() -> &'static [&'static str] {
        &["anti-inflammatory", "CYP3A4", "it's", "naïve", "hello", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "hepatotoxicity", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("anti-inflammatory", "antiinflammatory"),
            ("cyp3a4", "cypa"),
            ("Hello", "ello"),
            ("  ", ""),
            ("über", "ber"),
        ]
    }
}
