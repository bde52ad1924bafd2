//! Shared fixtures for the scenario tests.

use atoll_e2e::tree::Entry;

/// Expected shape of a scaffolded project. The trailing `Summary` is the
/// tree's human-declared totals; the verifier skips it.
pub fn expected_tree(styled: bool) -> Vec<Entry> {
    let mut entries = vec![
        Entry::File("README.md"),
        Entry::File("import_map.json"),
        Entry::File("fresh.gen.ts"),
        Entry::Dir("islands", vec![Entry::File("Counter.tsx")]),
        Entry::File("main.ts"),
        Entry::Dir(
            "routes",
            vec![
                Entry::File("[name].tsx"),
                Entry::Dir("api", vec![Entry::File("joke.ts")]),
                Entry::File("index.tsx"),
            ],
        ),
        Entry::Dir("static", vec![Entry::File("logo.svg")]),
    ];
    if styled {
        entries.push(Entry::Dir("utils", vec![Entry::File("twind.ts")]));
        entries.push(Entry::Summary { dirs: 4, files: 9 });
    } else {
        entries.push(Entry::Summary { dirs: 3, files: 8 });
    }
    entries
}

/// Echo harness logs (each server line included) while a scenario runs.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
