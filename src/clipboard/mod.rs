//! Copy a verse (reference plus all available texts) to the system clipboard.

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

use crate::resolver::Verse;

/// Clipboard access, mockable in tests
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Plain-text rendering of a verse: reference line, then Arabic, English, Urdu
pub fn format_verse(verse: &Verse<'_>) -> String {
    let mut lines = vec![format!("{} ({})", verse.verse_ref(), verse.surah.display_name())];
    lines.extend(verse.ayah.texts().map(str::to_string));
    lines.join("\n")
}

fn copy_with_provider(verse: &Verse<'_>, provider: &mut dyn ClipboardProvider) -> Result<()> {
    if verse.ayah.texts().next().is_none() {
        bail!("{} has no text to copy", verse.verse_ref());
    }
    provider.set_text(&format_verse(verse))
}

/// Copy a verse to the system clipboard.
///
/// # Errors
/// Returns error if the verse has no text at all, or the system clipboard is
/// unavailable (headless session, denied access, locked by another process).
pub fn copy_verse(verse: &Verse<'_>) -> Result<()> {
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(verse, &mut clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ayah, Surah};

    struct MockClipboard {
        text: Option<String>,
        should_fail: bool,
    }

    impl ClipboardProvider for MockClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.should_fail {
                bail!("Mock clipboard error");
            }
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn surah(ayah: Ayah) -> Surah {
        Surah {
            number: 112,
            name_en: Some("Al-Ikhlaas".into()),
            name_ar: "سُورَةُ الإِخۡلَاصِ".into(),
            ayahs: vec![ayah],
        }
    }

    #[test]
    fn test_format_verse_includes_all_texts() {
        let surah = surah(Ayah {
            number_in_surah: 1,
            text_ar: Some("قُلۡ هُوَ ٱللَّهُ أَحَدٌ".into()),
            text_en: Some("Say, He is Allah, the One".into()),
            text_ur: Some("کہو کہ وہ اللہ ایک ہے".into()),
        });
        let verse = Verse { surah: &surah, ayah: &surah.ayahs[0] };

        assert_eq!(
            format_verse(&verse),
            "Surah 112 Ayah 1 (Al-Ikhlaas)\nقُلۡ هُوَ ٱللَّهُ أَحَدٌ\nSay, He is Allah, the One\nکہو کہ وہ اللہ ایک ہے"
        );
    }

    #[test]
    fn test_copy_with_mock() {
        let surah = surah(Ayah {
            number_in_surah: 1,
            text_ar: None,
            text_en: Some("Say, He is Allah, the One".into()),
            text_ur: None,
        });
        let verse = Verse { surah: &surah, ayah: &surah.ayahs[0] };
        let mut mock = MockClipboard { text: None, should_fail: false };

        copy_with_provider(&verse, &mut mock).unwrap();
        assert_eq!(
            mock.text.as_deref(),
            Some("Surah 112 Ayah 1 (Al-Ikhlaas)\nSay, He is Allah, the One")
        );
    }

    #[test]
    fn test_copy_verse_without_text_fails() {
        let surah =
            surah(Ayah { number_in_surah: 1, text_ar: None, text_en: None, text_ur: None });
        let verse = Verse { surah: &surah, ayah: &surah.ayahs[0] };

        let mut mock = MockClipboard { text: None, should_fail: false };

        let err = copy_with_provider(&verse, &mut mock).unwrap_err();
        assert!(err.to_string().contains("no text to copy"));
        // Rejected before the clipboard is touched
        assert!(mock.text.is_none());
    }

    #[test]
    fn test_clipboard_provider_failure() {
        let surah = surah(Ayah {
            number_in_surah: 1,
            text_ar: Some("نص".into()),
            text_en: None,
            text_ur: None,
        });
        let verse = Verse { surah: &surah, ayah: &surah.ayahs[0] };
        let mut mock = MockClipboard { text: None, should_fail: true };

        let err = copy_with_provider(&verse, &mut mock).unwrap_err();
        assert!(err.to_string().contains("Mock clipboard error"));
    }
}
