use super::Verse;
use crate::corpus::CorpusStore;
use crate::models::Ayah;

/// Hard cap on keyword hits. This bounds rendering, not scanning: with fewer
/// matches than the cap the whole corpus is visited.
pub const MAX_KEYWORD_HITS: usize = 6;

/// Case-insensitive substring scan over every ayah's Arabic, English and Urdu text.
///
/// Surahs are visited in ascending order and ayahs in sequence order; the scan stops
/// as soon as `limit` hits have been collected. First-encountered order is kept, no
/// scoring is applied.
pub fn scan<'c>(query: &str, corpus: &'c CorpusStore, limit: usize) -> Vec<Verse<'c>> {
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    if limit == 0 {
        return hits;
    }

    for surah in corpus.surahs() {
        for ayah in &surah.ayahs {
            if ayah_matches(ayah, &needle) {
                hits.push(Verse { surah, ayah });
                if hits.len() >= limit {
                    return hits;
                }
            }
        }
    }

    hits
}

/// `needle` must already be lowercased
fn ayah_matches(ayah: &Ayah, needle: &str) -> bool {
    ayah.texts().any(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Surah, VerseRef};

    /// One inner vec per surah, numbered from 1
    fn corpus(texts: Vec<Vec<&str>>) -> CorpusStore {
        CorpusStore::from_surahs(texts.into_iter().zip(1u32..).map(|(ayahs, number)| Surah {
            number,
            name_en: None,
            name_ar: format!("سورة {}", number),
            ayahs: ayahs
                .iter()
                .enumerate()
                .map(|(i, text)| Ayah {
                    number_in_surah: i as u32 + 1,
                    text_ar: None,
                    text_en: Some(text.to_string()),
                    text_ur: None,
                })
                .collect(),
        }))
        .unwrap()
    }

    fn refs(hits: &[Verse<'_>]) -> Vec<VerseRef> {
        hits.iter().map(Verse::verse_ref).collect()
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let store = corpus(vec![vec!["Be PATIENT", "nothing here"]]);
        let hits = scan("patient", &store, MAX_KEYWORD_HITS);
        assert_eq!(refs(&hits), vec![VerseRef::new(1, 1)]);
    }

    #[test]
    fn test_scan_stops_at_limit_in_order() {
        let store = corpus(vec![
            vec!["mercy", "mercy", "other"],
            vec!["mercy", "mercy", "mercy"],
            vec!["mercy", "mercy"],
        ]);
        let hits = scan("mercy", &store, MAX_KEYWORD_HITS);

        assert_eq!(hits.len(), 6);
        assert_eq!(
            refs(&hits),
            vec![
                VerseRef::new(1, 1),
                VerseRef::new(1, 2),
                VerseRef::new(2, 1),
                VerseRef::new(2, 2),
                VerseRef::new(2, 3),
                VerseRef::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_scan_matches_whole_query_as_substring() {
        let store = corpus(vec![vec!["those who are patient", "patient ones"]]);
        let hits = scan("who are patient", &store, MAX_KEYWORD_HITS);
        assert_eq!(refs(&hits), vec![VerseRef::new(1, 1)]);
    }

    #[test]
    fn test_scan_checks_arabic_and_urdu() {
        let store = CorpusStore::from_surahs(vec![Surah {
            number: 1,
            name_en: None,
            name_ar: "x".into(),
            ayahs: vec![
                Ayah {
                    number_in_surah: 1,
                    text_ar: Some("الرَّحْمَٰنِ الرَّحِيمِ".into()),
                    text_en: None,
                    text_ur: None,
                },
                Ayah {
                    number_in_surah: 2,
                    text_ar: None,
                    text_en: None,
                    text_ur: Some("بڑا مہربان".into()),
                },
            ],
        }])
        .unwrap();

        assert_eq!(refs(&scan("الرَّحِيمِ", &store, 6)), vec![VerseRef::new(1, 1)]);
        assert_eq!(refs(&scan("مہربان", &store, 6)), vec![VerseRef::new(1, 2)]);
    }

    #[test]
    fn test_scan_no_hits() {
        let store = corpus(vec![vec!["a", "b"]]);
        assert!(scan("zzz", &store, MAX_KEYWORD_HITS).is_empty());
    }

    #[test]
    fn test_scan_zero_limit() {
        let store = corpus(vec![vec!["a"]]);
        assert!(scan("a", &store, 0).is_empty());
    }
}
