use anyhow::Result;
use mac_extract::MatcherBuilder;
use std::io::stdout;

fn main() -> Result<()> {
    // 1. Configure and build the matcher.
    let matcher = MatcherBuilder::new().build()?;

    // 2. Sample input (e.g., an ARP table dump).
    let input = "gw 00:1B:44:11:3A:B8 eth0\nap bc4f.19c1.7a6e wlan0\nbad 00-1B-44-11-3A-ZZ";

    // 3. Find candidates and their positions.
    println!("Scanning text...\n");
    for range in matcher.find_iter(input) {
        let token = &input[range.clone()];
        match matcher.classify(token) {
            Some(format) => println!("  Valid:   {} at {:?} ({})", token, range, format),
            None => println!("  Invalid: {} at {:?}", token, range),
        }
    }

    // 4. Summarize.
    let extraction = matcher.extract(input);
    println!(
        "\nFound {}, valid {}",
        extraction.found_count(),
        extraction.valid_count()
    );

    println!("\n--- JSON Output ---");
    matcher.tag(input).write_json(&mut stdout())?;
    println!();

    Ok(())
}
