pub fn run() -> anyhow::Result<()> {
    println!("webanalyst {}", env!("CARGO_PKG_VERSION"));
    println!("Keyword relevance analysis for web pages");
    Ok(())
}
