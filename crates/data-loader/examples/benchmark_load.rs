use data_loader::CatalogIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("netflix_titles.csv");

    println!("Loading catalog from {}...\n", path.display());

    let start = Instant::now();
    let index = CatalogIndex::load_from_csv(path).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let (titles, exploded) = index.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Titles (deduplicated): {}", titles);
    println!("Exploded rows: {}", exploded);
    println!("Countries: {}", index.aggregates().countries().len());
    println!(
        "\nPerformance: {:.0} titles/second",
        titles as f64 / elapsed.as_secs_f64()
    );
}
