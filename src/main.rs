use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process;

use ydoc_search::{build_index, CorpusFile, SearchSession};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            version,
            json,
        } => run_search(&file, &query, limit, version.as_deref(), json),
        Commands::Inspect { file, version } => run_inspect(&file, version.as_deref()),
    }
}

fn run_search(
    file: &Path,
    query: &str,
    limit: usize,
    version: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let corpus = CorpusFile::load(file)?.select(version)?;

    let session = SearchSession::new();
    session.load(&corpus);
    let results = session.query(query, limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!(
            "{}",
            display::render_results(query, &results, display::use_colors())
        );
    }
    Ok(())
}

fn run_inspect(file: &Path, version: Option<&str>) -> Result<(), Box<dyn Error>> {
    let corpus_file = CorpusFile::load(file)?;
    let versions: Vec<String> = corpus_file
        .versions()
        .iter()
        .map(|v| (*v).to_string())
        .collect();

    let corpus = corpus_file.select(version)?;
    let index = build_index(&corpus);

    let version_refs: Vec<&str> = versions.iter().map(String::as_str).collect();
    print!(
        "{}",
        display::render_inspect(
            &version_refs,
            corpus.categories.len(),
            corpus.page_count(),
            corpus.section_count(),
            &index,
        )
    );
    Ok(())
}
