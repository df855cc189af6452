//! Synthetic WhatsApp export generator for benchmarking and stress testing.
//!
//! Usage: cargo run --features gen-sample --bin gen_sample -- [messages] [output] [layout]
//! Example: cargo run --features gen-sample --bin gen_sample -- 100000 big_chat.txt ios

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "❤️", "💀", "🎉", "🍕", "🏳️‍🌈",
    "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol Danvers",
    "Иван",
    "村上",
    "محمد",
    "+1 555 0100",
    "🔥FireUser🔥",
];

const WORDS: &[&str] = &[
    "pizza", "tonight", "meeting", "tomorrow", "coffee", "movie", "weekend", "train", "late",
    "sorry", "haha", "awesome", "project", "deadline", "lunch", "birthday", "party", "call",
    "the", "and", "is", "to", "you", "hai", "kya",
];

const SYSTEM_NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat, including WhatsApp, can read or listen to them. Tap to learn more.",
    "Alice created group \"Weekend plans\"",
    "Bob added Carol Danvers",
    "Иван left",
    "Alice changed the subject to \"Road trip\"",
];

#[derive(Clone, Copy)]
enum Layout {
    Android,
    Ios,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(String::as_str).unwrap_or("sample_chat.txt");
    let layout = match args.get(3).map(String::as_str).unwrap_or("android") {
        "android" => Layout::Android,
        "ios" => Layout::Ios,
        other => {
            eprintln!("Unknown layout: {other}. Use 'android' or 'ios'");
            process::exit(1);
        }
    };

    println!("Sample generator");
    println!("   Messages: {count}");
    println!("   Output:   {output}");

    if let Err(e) = generate(count, output, layout) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn generate(count: usize, output: &str, layout: Layout) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let mut now = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();

    for i in 0..count {
        now += Duration::minutes(rng.gen_range(0..=180));

        let prefix = format_prefix(now, layout);
        let line = if i % 97 == 0 {
            let notice = SYSTEM_NOTICES.choose(&mut rng).copied().unwrap_or_default();
            format!("{prefix}{notice}\n")
        } else {
            let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
            let body = generate_body(&mut rng, i);
            format!("{prefix}{sender}: {body}\n")
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // A row that matches the prefix pattern but names an impossible date
        if i % 5000 == 4999 {
            let bad = match layout {
                Layout::Android => "2/30/23, 10:00 am - Alice: this row is dropped\n",
                Layout::Ios => "[2/30/23, 10:00:00 AM] Alice: this row is dropped\n",
            };
            bytes_written += bad.len();
            writer.write_all(bad.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\nDone");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    Ok(())
}

fn format_prefix(ts: NaiveDateTime, layout: Layout) -> String {
    match layout {
        Layout::Android => format!("{} - ", ts.format("%-m/%-d/%y, %-I:%M %P")),
        Layout::Ios => format!("[{}] ", ts.format("%-m/%-d/%y, %-I:%M:%S %p")),
    }
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        0 => "<Media omitted>".to_string(),
        1 => format!("check this https://example.com/item/{index}"),
        2 => format!("see www.example.org/{index} later"),
        3 => {
            let emojis: String = (0..rng.gen_range(1..6))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("haha {emojis}")
        }
        4 => format!("first line #{index}\nsecond line\nthird line"),
        5 => "This message was deleted".to_string(),
        _ => {
            let n = rng.gen_range(1..15);
            (0..n)
                .filter_map(|_| WORDS.choose(rng).copied())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }
}
