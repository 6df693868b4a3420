use std::sync::LazyLock;

use regex::Regex;

use crate::models::VerseRef;

/// Direct locator inside free text, e.g. "Surah:2 Ayah:255" or "surah 2 ayah 255".
/// Digits are ASCII only; at most three per number. The keywords fold ASCII case
/// only, so look-alikes such as "ſurah" (long s) are not locators.
static LOCATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u:surah)[:\s]*([0-9]{1,3})\s*(?i-u:ayah)[:\s]*([0-9]{1,3})")
        .expect("locator pattern is valid")
});

/// History summary of a direct hit, e.g. "Surah 2 Ayah 255"
static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u:surah)\s+([0-9]+)\s+(?i-u:ayah)\s+([0-9]+)")
        .expect("summary pattern is valid")
});

/// Find the first `surah:N ayah:M` locator anywhere in `query`.
///
/// Returns the raw numbers; range checking against a corpus is the caller's job.
pub fn parse_locator(query: &str) -> Option<VerseRef> {
    captures_to_ref(&LOCATOR_RE, query)
}

/// Parse a history summary produced by [`summary_for`] back into a verse address.
///
/// Numbers that do not fit in a `u32` are treated as no match.
pub fn parse_summary(summary: &str) -> Option<VerseRef> {
    captures_to_ref(&SUMMARY_RE, summary)
}

/// History summary recorded for a direct hit
pub fn summary_for(verse: VerseRef) -> String {
    verse.to_string()
}

fn captures_to_ref(re: &Regex, text: &str) -> Option<VerseRef> {
    let caps = re.captures(text)?;
    let surah = caps.get(1)?.as_str().parse().ok()?;
    let ayah = caps.get(2)?.as_str().parse().ok()?;
    Some(VerseRef::new(surah, ayah))
}
