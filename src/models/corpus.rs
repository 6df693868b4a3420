use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ayah {
    #[serde(rename = "numberInSurah")]
    pub number_in_surah: u32,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub text_ar: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub text_en: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub text_ur: Option<String>,
}

impl Ayah {
    /// All present texts, Arabic first
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        [&self.text_ar, &self.text_en, &self.text_ur].into_iter().filter_map(|t| t.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u32,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_text")]
    pub name_en: Option<String>,
    pub name_ar: String,
    pub ayahs: Vec<Ayah>,
}

impl Surah {
    /// English name when present, Arabic name otherwise
    pub fn display_name(&self) -> &str {
        self.name_en.as_deref().unwrap_or(&self.name_ar)
    }

    /// Look up an ayah by its 1-based number within this surah
    pub fn ayah(&self, number: u32) -> Option<&Ayah> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        self.ayahs.get(idx)
    }

    /// Label used by the surah browser, e.g. `"2 - Al-Baqara"`
    pub fn browse_label(&self) -> String {
        format!("{} - {}", self.number, self.display_name())
    }
}

/// Address of a single verse
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseRef {
    pub surah: u32,
    pub ayah: u32,
}

impl VerseRef {
    pub fn new(surah: u32, ayah: u32) -> Self {
        Self { surah, ayah }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surah {} Ayah {}", self.surah, self.ayah)
    }
}
