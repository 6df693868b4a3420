//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Arabic text of Ayat al-Kursi (2:255), used by the speech tests
pub const AYAT_AL_KURSI_AR: &str = "ٱللَّهُ لَآ إِلَٰهَ إِلَّا هُوَ ٱلْحَىُّ ٱلْقَيُّومُ";

/// A corpus JSON file inside a temp directory that lives as long as this value
pub struct CorpusFixture {
    temp_dir: TempDir,
    path: PathBuf,
}

impl CorpusFixture {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Builder for corpus JSON files in the `quran_data_full.json` format
pub struct CorpusBuilder {
    surahs: Vec<SurahBuilder>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self { surahs: Vec::new() }
    }

    pub fn with_surah(mut self, surah: SurahBuilder) -> Self {
        self.surahs.push(surah);
        self
    }

    /// Al-Faatiha (7), Al-Baqara (286) and Al-Ikhlaas (4).
    ///
    /// "patience" appears in 2:45 and 2:153 (English) and nowhere else.
    pub fn standard() -> Self {
        Self::new()
            .with_surah(SurahBuilder::new(1, "Al-Faatiha", "سُورَةُ ٱلْفَاتِحَةِ").with_ayahs(7))
            .with_surah(
                SurahBuilder::new(2, "Al-Baqara", "سُورَةُ البَقَرَةِ")
                    .with_ayahs(286)
                    .with_english(45, "And seek help through patience and prayer")
                    .with_english(153, "O you who have believed, seek help through patience")
                    .with_arabic(255, AYAT_AL_KURSI_AR)
                    .with_english(255, "Allah - there is no deity except Him, the Ever-Living"),
            )
            .with_surah(
                SurahBuilder::new(112, "Al-Ikhlaas", "سُورَةُ الإِخْلَاصِ")
                    .with_ayahs(4)
                    .with_english(1, "Say, He is Allah, who is One")
                    .with_urdu(1, "کہہ دو کہ وہ اللہ ایک ہے"),
            )
    }

    pub fn to_json(&self) -> Value {
        let map: BTreeMap<String, Value> =
            self.surahs.iter().map(|s| (s.number.to_string(), s.to_json())).collect();
        json!(map)
    }

    /// Write `quran_data_full.json` into a fresh temp directory
    pub fn build(self) -> CorpusFixture {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("quran_data_full.json");
        fs::write(&path, self.to_json().to_string()).expect("Failed to write corpus file");
        CorpusFixture { temp_dir, path }
    }
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct AyahFixture {
    ar: Option<String>,
    en: Option<String>,
    ur: Option<String>,
}

/// Builder for one surah record
pub struct SurahBuilder {
    number: u32,
    name_en: Option<String>,
    name_ar: String,
    ayahs: Vec<AyahFixture>,
}

impl SurahBuilder {
    pub fn new(number: u32, name_en: &str, name_ar: &str) -> Self {
        Self {
            number,
            name_en: Some(name_en.to_string()),
            name_ar: name_ar.to_string(),
            ayahs: Vec::new(),
        }
    }

    pub fn without_english_name(mut self) -> Self {
        self.name_en = None;
        self
    }

    /// Generate `count` ayahs with placeholder Arabic and English text
    pub fn with_ayahs(mut self, count: u32) -> Self {
        let number = self.number;
        self.ayahs = (1..=count)
            .map(|n| AyahFixture {
                ar: Some(format!("آية {} {}", number, n)),
                en: Some(format!("Verse {} of surah {}", n, number)),
                ur: None,
            })
            .collect();
        self
    }

    fn ayah_mut(&mut self, n: u32) -> &mut AyahFixture {
        &mut self.ayahs[n as usize - 1]
    }

    pub fn with_arabic(mut self, n: u32, text: &str) -> Self {
        self.ayah_mut(n).ar = Some(text.to_string());
        self
    }

    /// Empty string is written as-is (loads as "no text")
    pub fn without_arabic(mut self, n: u32) -> Self {
        self.ayah_mut(n).ar = Some(String::new());
        self
    }

    pub fn with_english(mut self, n: u32, text: &str) -> Self {
        self.ayah_mut(n).en = Some(text.to_string());
        self
    }

    pub fn with_urdu(mut self, n: u32, text: &str) -> Self {
        self.ayah_mut(n).ur = Some(text.to_string());
        self
    }

    fn to_json(&self) -> Value {
        let ayahs: Vec<Value> = self
            .ayahs
            .iter()
            .enumerate()
            .map(|(i, a)| {
                json!({
                    "numberInSurah": i + 1,
                    "text_ar": a.ar,
                    "text_en": a.en,
                    "text_ur": a.ur,
                })
            })
            .collect();

        json!({
            "number": self.number,
            "name_en": self.name_en,
            "name_ar": self.name_ar,
            "ayahs": ayahs,
        })
    }
}
