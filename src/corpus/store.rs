use std::collections::BTreeMap;

use crate::error::CorpusError;
use crate::models::{Ayah, Surah, VerseRef};

/// Immutable, in-memory corpus keyed by surah number.
///
/// Surahs iterate in ascending number order; within a surah, `ayahs[i]` is
/// ayah number `i + 1`. Both properties are checked once in [`CorpusStore::new`].
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    surahs: BTreeMap<u32, Surah>,
}

/// Summary counts for the `stats` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorpusStats {
    pub surahs: usize,
    pub ayahs: usize,
    pub with_arabic: usize,
    pub with_english: usize,
    pub with_urdu: usize,
}

impl CorpusStore {
    pub fn new(surahs: BTreeMap<u32, Surah>) -> Result<Self, CorpusError> {
        for (&number, surah) in &surahs {
            if number == 0 {
                return Err(CorpusError::Invalid {
                    message: "surah number must be positive".to_string(),
                });
            }
            if number != surah.number {
                return Err(CorpusError::Invalid {
                    message: format!("surah key {} does not match record number {}", number, surah.number),
                });
            }
            if surah.ayahs.is_empty() {
                return Err(CorpusError::Invalid {
                    message: format!("surah {} has no ayahs", number),
                });
            }
            for (idx, ayah) in surah.ayahs.iter().enumerate() {
                let expected = idx as u32 + 1;
                if ayah.number_in_surah != expected {
                    return Err(CorpusError::Invalid {
                        message: format!(
                            "surah {}: expected ayah {} at position {}, found {}",
                            number, expected, expected, ayah.number_in_surah
                        ),
                    });
                }
            }
        }

        Ok(Self { surahs })
    }

    /// Build a store from a list of surahs (test and bench convenience)
    pub fn from_surahs(surahs: impl IntoIterator<Item = Surah>) -> Result<Self, CorpusError> {
        Self::new(surahs.into_iter().map(|s| (s.number, s)).collect())
    }

    pub fn surah(&self, number: u32) -> Option<&Surah> {
        self.surahs.get(&number)
    }

    /// Surahs in ascending number order
    pub fn surahs(&self) -> impl Iterator<Item = &Surah> {
        self.surahs.values()
    }

    pub fn ayah(&self, verse: VerseRef) -> Option<&Ayah> {
        self.surah(verse.surah)?.ayah(verse.ayah)
    }

    pub fn surah_count(&self) -> usize {
        self.surahs.len()
    }

    pub fn ayah_count(&self) -> usize {
        self.surahs.values().map(|s| s.ayahs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }

    pub fn stats(&self) -> CorpusStats {
        let mut stats = CorpusStats { surahs: self.surahs.len(), ..CorpusStats::default() };
        for ayah in self.surahs.values().flat_map(|s| s.ayahs.iter()) {
            stats.ayahs += 1;
            stats.with_arabic += usize::from(ayah.text_ar.is_some());
            stats.with_english += usize::from(ayah.text_en.is_some());
            stats.with_urdu += usize::from(ayah.text_ur.is_some());
        }
        stats
    }
}
