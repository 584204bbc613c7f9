use std::io::{self, BufRead};

use clap::Parser;

use libgroupkey::{
    offline_engine, online_engine, GroupKeyConfig, InputEvent, SessionSnapshot, TypingEngine,
};
use libgroupkey_core::{NextWordOracle, WordOracle};

/// Interactive group-key typing test.
#[derive(Parser, Debug)]
#[command(name = "groupkey", about = "Interactive group-key prediction REPL")]
struct Args {
    /// Layout preset: alphabetic4, frequency4 or frequency6
    #[arg(long, default_value = "frequency4")]
    layout: String,

    /// Prediction endpoint URL; omitted = fully offline
    #[arg(long)]
    endpoint: Option<String>,

    /// Oracle request timeout in milliseconds
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,
}

fn print_snapshot(snap: &SessionSnapshot) {
    let snap = snap.clone().rounded();
    if snap.top_predictions.is_empty() && !snap.button_sequence.is_empty() {
        println!("  → (no candidates found)");
    }
    for (i, word) in snap.top_predictions.iter().enumerate() {
        println!("  {}. {}", i + 1, word);
    }
    if !snap.alternative_words.is_empty() {
        println!("  alternatives: {}", snap.alternative_words.join(", "));
    }
    if !snap.next_word_predictions.is_empty() {
        println!("  next words: {}", snap.next_word_predictions.join(", "));
    }
    println!(
        "  text: \"{}\" | words: {} | {} wpm",
        snap.typed_text, snap.word_count, snap.wpm
    );
    println!();
}

fn run<O: WordOracle + NextWordOracle>(mut engine: TypingEngine<O>) {
    println!("Ready! Commands:");
    println!("  1-9        press a button (digits can be chained: 421)");
    println!("  a [WORD]   accept word (top prediction if omitted)");
    println!("  b          backspace");
    println!("  s          space / accept top");
    println!("  n          new word");
    println!("  c          clear all");
    println!("  q          quit");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let raw = match line {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        };
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }

        let command = input.chars().next().unwrap_or(' ');
        let rest = &input[command.len_utf8()..];
        let events: Vec<InputEvent> = match command {
            'q' => break,
            'b' => vec![InputEvent::Backspace],
            's' => vec![InputEvent::AddSpace],
            'n' => vec![InputEvent::NewWord],
            'c' => vec![InputEvent::ClearAll],
            'a' => {
                let word = rest.trim();
                vec![InputEvent::AcceptWord(
                    (!word.is_empty()).then(|| word.to_uppercase()),
                )]
            }
            _ if input.chars().all(|c| c.is_ascii_digit()) => input
                .chars()
                .map(|c| InputEvent::PressButton(c as u8 - b'0'))
                .collect(),
            _ => {
                println!("  ? unknown command: {}\n", input);
                continue;
            }
        };

        for event in events {
            match engine.process(event) {
                Ok(snap) => print_snapshot(&snap),
                Err(e) => println!("  ! {}\n", e),
            }
        }
    }
}

fn main() {
    let args = Args::parse();

    let config = GroupKeyConfig {
        layout: args.layout.clone(),
        oracle_endpoint: args.endpoint.clone(),
        oracle_timeout_ms: args.timeout_ms,
        oracle_enabled: args.endpoint.is_some(),
        ..Default::default()
    };

    println!("═══════════════════════════════════════════════");
    println!("  groupkey - interactive prediction test");
    println!("  layout: {}", config.layout_preset().name());
    match &config.oracle_endpoint {
        Some(endpoint) => println!("  oracle: {}", endpoint),
        None => println!("  oracle: offline (deterministic fallback only)"),
    }
    println!("═══════════════════════════════════════════════");
    println!();

    if config.oracle_endpoint.is_some() {
        run(online_engine(&config));
    } else {
        run(offline_engine(&config));
    }
}
