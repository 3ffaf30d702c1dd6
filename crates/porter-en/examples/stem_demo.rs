//! Small demonstration of the stemming API.
//!
//! Run with: cargo run -p porter-en --example stem_demo

use porter_core::enums::StemMode;
use porter_en::PorterHandle;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let handle = PorterHandle::new();

    println!("=== Full cascade ===");
    for word in [
        "caresses",
        "ponies",
        "motoring",
        "happiness",
        "generalizations",
        "oscillators",
    ] {
        println!("{word} -> {}", handle.stem(word)?);
    }

    println!();
    println!("=== Plurals only ===");
    for word in ["caresses", "cats", "running"] {
        println!("{word} -> {}", handle.stem_with(word, StemMode::PluralsOnly)?);
    }

    println!();
    println!("=== Stopword bypass ===");
    handle.set_stopwords(["whipped"]);
    for word in ["whipped", "whipping"] {
        println!("{word} -> {}", handle.stem(word)?);
    }

    Ok(())
}
