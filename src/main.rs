use anyhow::Result;

fn main() -> Result<()> {
    quran_explorer::cli::run()
}
