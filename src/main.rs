use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hirescore::{
    highlight, load_candidates, search_with_config, summarize, tokenize, Candidate, FilterSet,
    ScoredResult, ScorerConfig, SearchMode, SearchQuery, TermVector,
};

mod cli;
use cli::display::{self, BOLD};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            candidates,
            query,
            mode,
            filters,
            limit,
            json,
            config,
        } => {
            let config = ScorerConfig::resolve(config.as_deref()).context("loading scorer config")?;
            let pool = load_candidates(&candidates)?;
            let query = SearchQuery {
                text: query,
                filters: FilterSet::from(filters),
                mode,
                limit,
            };

            if json {
                println!("{}", search_json(&pool, &query, &config)?);
            } else {
                let results = search_with_config(&pool, &query, &config);
                print_results(&query, &results, pool.len());
            }
            Ok(())
        }
        Commands::Inspect {
            candidates,
            top,
            json,
        } => {
            let pool = load_candidates(&candidates)?;
            if json {
                println!("{}", inspect_json(&pool)?);
            } else {
                print_summary(&candidates.display().to_string(), &summarize(&pool), top);
            }
            Ok(())
        }
        Commands::Tokens { text } => {
            print_tokens(&text);
            Ok(())
        }
    }
}

/// Ranked results as the pretty JSON printed by `search --json`.
fn search_json(pool: &[Candidate], query: &SearchQuery, config: &ScorerConfig) -> Result<String> {
    let results = search_with_config(pool, query, config);
    serde_json::to_string_pretty(&results).context("serializing results")
}

/// Dataset summary as the pretty JSON printed by `inspect --json`.
fn inspect_json(pool: &[Candidate]) -> Result<String> {
    serde_json::to_string_pretty(&summarize(pool)).context("serializing summary")
}

// ═══════════════════════════════════════════════════════════════════════════
// OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

fn mode_label(mode: SearchMode) -> String {
    display::themed(display::BLUE, &[BOLD], mode.as_str())
}

fn print_results(query: &SearchQuery, results: &[ScoredResult<'_>], pool_size: usize) {
    let filters = query.filters.normalized();
    display::section_top("SEARCH");
    display::row(&format!(
        " query: {:?}   mode: {}   filters: {}",
        query.text,
        mode_label(query.mode),
        filters.active_count()
    ));
    display::row(&format!(" {} of {} candidates matched", results.len(), pool_size));

    if results.is_empty() {
        if query.text.trim().is_empty() && !filters.is_active() {
            display::row(" (enter a query or a filter to search)");
        }
        display::section_bot();
        return;
    }

    display::section_mid("RESULTS");
    display::row(&format!(
        " {:>3}  {:>6}  {:>6}  {:>6}  {}",
        "#", "score", "kw", "sem", "candidate"
    ));
    for (rank, result) in results.iter().enumerate() {
        let candidate = result.candidate;
        let name = display::pad_right(&display::truncate(&candidate.name, 22), 22);
        let title = display::render_segments(&highlight(
            &display::truncate(&candidate.title, 30),
            &result.matched_terms,
        ));
        display::row(&format!(
            " {:>3}  {}  {:>6.2}  {:>6.3}  {} {}",
            rank + 1,
            display::score_value(result.score),
            result.keyword_score,
            result.semantic_score,
            name,
            title
        ));

        let location = display::truncate(&candidate.location, 24);
        let skills = display::truncate(&candidate.skills.join(", "), 40);
        let details = format!("{} · {}", location, skills);
        display::row(&format!(
            "{}{}",
            " ".repeat(35),
            display::render_segments(&highlight(&details, &result.matched_terms))
        ));
    }
    display::section_bot();
}

fn print_summary(path: &str, summary: &hirescore::DatasetSummary, top: usize) {
    display::section_top("DATASET");
    display::row(&format!(" file:       {}", display::truncate(path, 60)));
    display::row(&format!(" candidates: {}", summary.candidate_count));
    display::row(&format!(
        " missing:    {} skills · {} current company · {} schools · {} contact",
        summary.without_skills,
        summary.without_current_company,
        summary.without_schools,
        summary.without_contact
    ));

    display::section_mid("TOP SKILLS");
    for (skill, count) in summary.skills.iter().take(top) {
        display::row(&format!(" {:>4}  {}", count, display::truncate(skill, 60)));
    }

    display::section_mid("LOCATIONS");
    for (location, count) in summary.locations.iter().take(top) {
        display::row(&format!(" {:>4}  {}", count, display::truncate(location, 60)));
    }
    display::section_bot();
}

fn print_tokens(text: &str) {
    let tokens = tokenize(text);
    let vector = TermVector::from_tokens(&tokens);

    let mut counts: Vec<(&str, u32)> = vector.terms().map(|t| (t, vector.get(t))).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    display::section_top("TOKENS");
    display::row(&format!(" {}", display::truncate(&tokens.join(" "), 76)));
    display::section_mid("TERM COUNTS");
    for (term, count) in counts {
        display::row(&format!(" {:>4}  {}", count, term));
    }
    display::row(&format!(" norm: {:.4}", vector.norm()));
    display::section_bot();
}
