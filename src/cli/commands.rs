use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::AppConfig;
use crate::corpus::CorpusStore;
use crate::history::DEFAULT_EXPORT_FILENAME;
use crate::models::{Ayah, Surah};
use crate::parsers::load_corpus;
use crate::resolver::{QueryResult, Verse};
use crate::session::Session;
use crate::speech::{VoiceEngine, list_voices};
use crate::tui::run_interactive;
use crate::utils::sanitize_for_terminal;

const NO_MATCH_HINT: &str = "No exact matches found. You can try simpler keywords like 'patience', 'charity', or do Surah:2 Ayah:255 style lookup.";

fn load(config: &AppConfig) -> Result<CorpusStore> {
    Ok(load_corpus(&config.corpus_path)?)
}

pub fn interactive(config: &AppConfig) -> Result<()> {
    let corpus = load(config)?;
    let speech = VoiceEngine::init(&config.speech);
    run_interactive(&corpus, speech, PathBuf::from(DEFAULT_EXPORT_FILENAME))
}

/// One-shot query in a fresh session
pub fn search(config: &AppConfig, query: &str, recite: bool, export: Option<&Path>) -> Result<()> {
    let corpus = load(config)?;
    let mut session = Session::new();

    match session.submit(&corpus, query)? {
        QueryResult::DirectHit(verse) => print_verse(&verse),
        QueryResult::KeywordHits(verses) => {
            println!("Found related verses (best-effort):");
            for verse in &verses {
                println!();
                print_verse(verse);
            }
        }
        QueryResult::NoMatch => println!("{}", NO_MATCH_HINT),
    }

    if recite {
        let mut speech = VoiceEngine::init(&config.speech);
        let verse = session.recite_last(&corpus, &mut speech)?;
        println!("✓ Recited {}", verse);
    }

    if let Some(path) = export {
        session.export_history(path)?;
        println!("✓ Exported {} entries to {}", session.history().len(), path.display());
    }

    Ok(())
}

pub fn show_surah(config: &AppConfig, number: u32) -> Result<()> {
    let corpus = load(config)?;
    let Some(surah) = corpus.surah(number) else {
        bail!("Surah {} not found (corpus has {} surahs)", number, corpus.surah_count());
    };

    println!("{}", surah_heading(surah));
    for ayah in &surah.ayahs {
        println!();
        print_ayah(ayah);
    }
    Ok(())
}

pub fn list_surahs(config: &AppConfig) -> Result<()> {
    let corpus = load(config)?;
    for surah in corpus.surahs() {
        println!("{}", sanitize_for_terminal(&surah.browse_label()));
    }
    Ok(())
}

pub fn show_stats(config: &AppConfig) -> Result<()> {
    let corpus = load(config)?;
    let stats = corpus.stats();

    println!("Qur'an Corpus Statistics");
    println!("========================");
    println!("Surahs: {}", stats.surahs);
    println!("Ayahs: {}", stats.ayahs);
    println!("  with Arabic text: {}", stats.with_arabic);
    println!("  with English translation: {}", stats.with_english);
    println!("  with Urdu translation: {}", stats.with_urdu);
    println!();
    println!("Corpus file: {}", config.corpus_path.display());
    Ok(())
}

pub fn show_voices(config: &AppConfig) -> Result<()> {
    let program = &config.speech.program;
    let voices = list_voices(program)
        .with_context(|| format!("Could not query voices from '{}'", program))?;
    let engine = VoiceEngine::with_voices(&config.speech, voices);

    println!("Voices reported by {}: {}", program, engine.voices().len());
    for voice in engine.voices() {
        println!("  {:<12} {}", voice.id, voice.name);
    }
    println!();
    match engine.selected_voice() {
        Some(voice) => println!("Selected Arabic voice: {} ({})", voice.name, voice.id),
        None => println!(
            "No Arabic voice found; using the default voice at {} wpm",
            config.speech.fallback_rate
        ),
    }
    Ok(())
}

fn surah_heading(surah: &Surah) -> String {
    format!(
        "Surah {}: {} ({})",
        surah.number,
        sanitize_for_terminal(surah.display_name()),
        sanitize_for_terminal(&surah.name_ar)
    )
}

fn print_verse(verse: &Verse<'_>) {
    println!("{} - {}", verse.verse_ref(), sanitize_for_terminal(verse.surah.display_name()));
    print_ayah(verse.ayah);
}

fn print_ayah(ayah: &Ayah) {
    println!("[{}]", ayah.number_in_surah);
    for (label, text) in
        [("Arabic", &ayah.text_ar), ("English", &ayah.text_en), ("Urdu", &ayah.text_ur)]
    {
        if let Some(text) = text {
            println!("  {}: {}", label, sanitize_for_terminal(text));
        }
    }
}
