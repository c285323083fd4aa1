use abaprep::{approx_tokens, Config, Pipeline};
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

/// Prepare ABAP source files for LLM analysis: load, classify, chunk.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the source files.
    #[arg(long)]
    file_path: Option<PathBuf>,

    /// Directory for the chunked JSON output.
    #[arg(long)]
    output_path: Option<PathBuf>,

    /// Ceiling on the per-chunk budget, in tokens.
    #[arg(long)]
    max_chunk: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let start_time = Instant::now();

    let args = Args::parse();
    let config = Config::from_env();
    let input_dir = args.file_path.unwrap_or(config.input_dir);
    let output_dir = args.output_path.unwrap_or(config.output_dir);
    let chunk_ceiling = args.max_chunk.unwrap_or(config.chunk_ceiling);

    println!("=== abaprep: ABAP Source Preparation Pipeline ===\n");

    // Step 1: Load, classify and chunk everything under the input directory
    println!("Step 1: Processing {} ...", input_dir.display());
    let pipeline = Pipeline::new(config.source_extension)?;
    let outcome = pipeline
        .process(&input_dir, chunk_ceiling, approx_tokens)
        .with_context(|| format!("processing {}", input_dir.display()))?;

    if outcome.documents.is_empty() {
        println!("No documents were processed.");
        return Ok(());
    }

    let total_chunks: usize = outcome.documents.values().map(Vec::len).sum();
    println!(
        "✓ {} document(s), {} chunk(s), {} file(s) skipped\n",
        outcome.documents.len(),
        total_chunks,
        outcome.skipped.len()
    );

    // Step 2: Write the chunk map for the downstream prompt generator
    println!("Step 2: Writing chunks ...");
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let output_file = output_dir.join("chunks.json");
    let json = serde_json::to_string_pretty(&outcome.documents)?;
    fs::write(&output_file, json)
        .with_context(|| format!("writing {}", output_file.display()))?;
    println!("✓ Wrote {}\n", output_file.display());

    // Statistics
    println!("=== Pipeline Statistics ===");
    for (identity, chunks) in &outcome.documents {
        let document_type = chunks
            .first()
            .map(|chunk| chunk.metadata.document_type.as_str())
            .unwrap_or("?");
        let category = pipeline.classifier().category_for(document_type);
        println!(
            "  {:<30} {:<28} [{}] - {} chunk(s)",
            identity,
            document_type,
            category,
            chunks.len()
        );
    }
    for skipped in &outcome.skipped {
        println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    println!(
        "\nTotal execution:      {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
