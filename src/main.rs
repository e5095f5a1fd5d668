use dbpf_reader::DbpfReader;
use log::LevelFilter;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-package> [--verbose] [--holes] [--raw-index] [--limit <N>]",
            args[0]
        );
        std::process::exit(1);
    }

    let path = &args[1];
    let verbose = args.iter().any(|arg| arg == "--verbose");
    let show_holes = args.iter().any(|arg| arg == "--holes");
    let raw_index = args.iter().any(|arg| arg == "--raw-index");
    let mut limit = 10usize;
    // Parse --limit argument
    if let Some(limit_idx) = args.iter().position(|arg| arg == "--limit") {
        match args.get(limit_idx + 1).map(|s| s.parse::<usize>()) {
            Some(Ok(n)) => limit = n,
            Some(Err(_)) => {
                eprintln!("ERROR: --limit expects a number.");
                std::process::exit(1);
            }
            None => {
                eprintln!("ERROR: --limit flag requires an argument.");
                std::process::exit(1);
            }
        }
    }

    env_logger::Builder::new()
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    println!("Reading DBPF file: {}", path);
    println!("{}", "=".repeat(60));

    if let Err(e) = run(path, show_holes, raw_index, limit) {
        eprintln!("\nERROR: Failed to read DBPF file");
        eprintln!("  {}", e);
        std::process::exit(1);
    }
}

fn run(path: &str, show_holes: bool, raw_index: bool, limit: usize) -> dbpf_reader::Result<()> {
    let mut reader = DbpfReader::open(path)?;

    println!("\nContainer Information:");
    println!("  Version: {}", reader.version());
    println!("  User version: {}", reader.user_version());
    println!("  Flags: {:#010x}", reader.flags());
    println!("  Created: {}", reader.creation_time());
    println!("  Modified: {}", reader.modification_time());

    let index = reader.index()?;
    println!("\nIndex:");
    println!("  Version: {}", index.version);
    println!("  Entries: {}", index.count);
    println!("  Offset: {:#x}", index.offset);
    println!("  Size: {} bytes", index.size);

    if show_holes {
        println!("\nHoles:");
        for (i, hole) in reader.hole_entries()?.iter().enumerate() {
            println!("  {}. offset={:#x} size={}", i + 1, hole.offset, hole.size);
        }
    }

    if raw_index {
        println!("\nRaw Index Entries (first {}):", limit);
        for (i, raw) in reader.raw_index_entries()?.iter().take(limit).enumerate() {
            let hex: Vec<String> = raw.iter().map(|b| format!("{:02x}", b)).collect();
            println!("  {}. {}", i + 1, hex.join(" "));
        }
        return Ok(());
    }

    println!("\nRecords (first {}):", limit);
    let mut total = 0usize;
    for (i, record) in reader.records()?.enumerate() {
        let record = record?;
        total += 1;
        if i < limit {
            println!(
                "  {}. [{}] offset={:#x} length={} stored={} compression={:?}",
                i + 1,
                record.key,
                record.offset,
                record.length,
                record.stored_size,
                record.compression()
            );
        }
    }
    if total > limit {
        println!("  ... and {} more", total - limit);
    }

    Ok(())
}
