use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for optional verse/name text.
/// Accepts a string or null; empty strings become `None`.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        _ => Err(Error::custom("text must be a string or null")),
    }
}

/// Parse a corpus map key ("1".."114") into a surah number
pub fn parse_surah_key(key: &str) -> Option<u32> {
    match key.trim().parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Surah;

    #[test]
    fn test_surah_name_en_empty_string_is_none() {
        let json = r#"{
            "number": 1,
            "name_en": "",
            "name_ar": "سُورَةُ ٱلْفَاتِحَةِ",
            "ayahs": [{"numberInSurah": 1, "text_ar": "بِسْمِ ٱللَّهِ"}]
        }"#;

        let surah: Surah = serde_json::from_str(json).unwrap();
        assert!(surah.name_en.is_none());
        assert_eq!(surah.ayahs.len(), 1);
        assert!(surah.ayahs[0].text_en.is_none());
    }

    #[test]
    fn test_surah_missing_optional_fields() {
        let json = r#"{
            "number": 112,
            "name_ar": "سُورَةُ الإِخۡلَاصِ",
            "ayahs": [{"numberInSurah": 1}]
        }"#;

        let surah: Surah = serde_json::from_str(json).unwrap();
        assert!(surah.name_en.is_none());
        assert!(surah.ayahs[0].text_ar.is_none());
    }

    #[test]
    fn test_text_rejects_non_string() {
        let json = r#"{"numberInSurah": 1, "text_en": 42}"#;
        let result = serde_json::from_str::<crate::models::Ayah>(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("text must be a string or null"));
    }

    #[test]
    fn test_parse_surah_key() {
        assert_eq!(parse_surah_key("1"), Some(1));
        assert_eq!(parse_surah_key("114"), Some(114));
        assert_eq!(parse_surah_key("0"), None);
        assert_eq!(parse_surah_key("-3"), None);
        assert_eq!(parse_surah_key("abc"), None);
    }
}
