//! Benchmarks for search operations
//!
//! Run with: cargo bench search

use markpane::search::{SearchEngine, SearchOptions};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn document(line_count: usize) -> String {
    "The quick brown fox jumps over the lazy dog.\n".repeat(line_count)
}

// ============================================================================
// Literal search
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn search_literal(line_count: usize) {
    let content = document(line_count);
    let mut engine = SearchEngine::new();
    engine.set_query("brown");
    engine.set_options(SearchOptions {
        case_sensitive: true,
        ..Default::default()
    });
    divan::black_box(engine.search(&content));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn search_case_insensitive(line_count: usize) {
    let content = document(line_count);
    let mut engine = SearchEngine::new();
    engine.set_query("the");
    divan::black_box(engine.search(&content));
}

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn search_whole_word(line_count: usize) {
    let content = document(line_count);
    let mut engine = SearchEngine::new();
    engine.set_query("lazy");
    engine.set_options(SearchOptions {
        whole_word: true,
        ..Default::default()
    });
    divan::black_box(engine.search(&content));
}

// ============================================================================
// Regex search and bulk replace
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn search_regex(line_count: usize) {
    let content = document(line_count);
    let mut engine = SearchEngine::new();
    engine.set_query(r"\b\w{5}\b");
    engine.set_options(SearchOptions {
        use_regex: true,
        ..Default::default()
    });
    divan::black_box(engine.search(&content));
}

#[divan::bench(args = [1_000, 10_000])]
fn replace_all_literal(line_count: usize) {
    let content = document(line_count);
    let mut engine = SearchEngine::new();
    engine.set_query("fox");
    engine.search(&content);
    divan::black_box(engine.replace_all(&content, "wolf"));
}
