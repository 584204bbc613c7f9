//! Accuracy benchmark for the deterministic prediction tiers.
//!
//! Runs a set of (button sequence, expected word) cases against the
//! offline engine and reports top-1 accuracy. Because the oracle is the
//! null implementation, results are reproducible across runs and
//! machines — this measures the dictionary tiers, not the oracle.

use anyhow::{bail, Result};
use clap::Parser;

use libgroupkey::{offline_engine, GroupKeyConfig, LayoutPreset};

#[derive(Parser, Debug)]
#[command(
    name = "bench_predictor",
    about = "Top-1 accuracy benchmark for offline group-key prediction"
)]
struct Args {
    /// Layout preset: alphabetic4, frequency4 or frequency6
    #[arg(long, default_value = "alphabetic4")]
    layout: String,

    /// Extra cases as SEQUENCE=WORD (e.g. 421=THE); repeatable
    #[arg(long = "case")]
    cases: Vec<String>,
}

/// Built-in cases for the alphabetic 4-button layout.
const ALPHABETIC_CASES: &[(&[u8], &str)] = &[
    (&[4, 2, 1], "THE"),
    (&[1, 3, 1], "AND"),
    (&[4, 2, 2, 3], "THIS"),
    (&[2, 1], "HE"),
    (&[2, 3], "IN"),
    (&[4, 2, 1, 3, 1], "THERE"),
    (&[2, 1, 2, 2, 3], "HELLO"),
];

fn parse_case(raw: &str) -> Result<(Vec<u8>, String)> {
    let Some((sequence, word)) = raw.split_once('=') else {
        bail!("case {:?} is not SEQUENCE=WORD", raw);
    };
    let sequence: Vec<u8> = sequence
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| anyhow::anyhow!("case {:?} has a non-digit button", raw))
        })
        .collect::<Result<_>>()?;
    if sequence.is_empty() {
        bail!("case {:?} has an empty sequence", raw);
    }
    Ok((sequence, word.to_uppercase()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let Some(preset) = LayoutPreset::from_name(&args.layout) else {
        bail!("unknown layout preset {:?}", args.layout);
    };
    let config = GroupKeyConfig {
        layout: preset.name().to_string(),
        ..Default::default()
    };

    let mut cases: Vec<(Vec<u8>, String)> = Vec::new();
    if args.cases.is_empty() {
        if preset != LayoutPreset::AlphabeticFour {
            bail!("built-in cases assume alphabetic4; pass --case for other layouts");
        }
        cases.extend(
            ALPHABETIC_CASES
                .iter()
                .map(|(seq, word)| (seq.to_vec(), word.to_string())),
        );
    } else {
        for raw in &args.cases {
            cases.push(parse_case(raw)?);
        }
    }

    let mut engine = offline_engine(&config);
    let total = cases.len();
    let mut hits = 0usize;

    println!("Running benchmark on {} cases ({})", total, preset.name());
    println!("{}", "-".repeat(50));

    for (i, (sequence, expected)) in cases.iter().enumerate() {
        engine.clear_all()?;
        let mut snapshot = engine.state();
        for &button in sequence {
            snapshot = engine.press_button(button)?;
        }
        let predicted = snapshot.top_predictions.first().cloned();
        let hit = predicted.as_deref() == Some(expected.as_str());
        hits += hit as usize;
        println!(
            "{} case {}: {:?} -> expected {}, got {}",
            if hit { "ok " } else { "MISS" },
            i + 1,
            sequence,
            expected,
            predicted.as_deref().unwrap_or("NO_PREDICTION"),
        );
    }

    println!("{}", "-".repeat(50));
    let accuracy = hits as f64 / total.max(1) as f64;
    println!("Top-1 accuracy: {:.3} ({}/{})", accuracy, hits, total);
    Ok(())
}
