//! Prompt construction for the prediction oracle.
//!
//! The prompt carries everything the oracle needs to stay inside the hard
//! constraint: the layout legend, the pressed sequence, the per-position
//! letter requirements, and a couple of worked examples pulled from the
//! fallback table so the expected JSON shape is unambiguous. The retry
//! variant appends an explicit corrective instruction.

use std::fmt::Write;

use crate::layout::Layout;

/// Arrow-joined rendering of a button sequence, e.g. `4 -> 2 -> 1`.
pub fn sequence_display(sequence: &[u8]) -> String {
    sequence
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One legend line per button, in button order.
fn legend(layout: &Layout) -> String {
    let mut out = String::new();
    for (button, letters) in layout.legend() {
        let spaced: Vec<String> = letters.chars().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "- button {}: {}", button, spaced.join(", "));
    }
    out
}

/// The allowed letters at each position of the sequence.
fn position_requirements(layout: &Layout, sequence: &[u8]) -> String {
    let mut out = String::new();
    for (i, button) in sequence.iter().enumerate() {
        let letters = layout.letters(*button).unwrap_or("");
        let spaced: Vec<String> = letters.chars().map(|c| c.to_string()).collect();
        let _ = writeln!(
            out,
            "- position {}: one of {}",
            i + 1,
            spaced.join(", ")
        );
    }
    out
}

/// Build the word-prediction prompt.
///
/// `examples` are (word, sequence) pairs known to be layout-consistent;
/// `corrective` appends the retry instruction used after a first attempt
/// produced no valid candidate.
pub fn word_prompt(
    layout: &Layout,
    sequence: &[u8],
    context: &str,
    examples: &[(&str, &[u8])],
    corrective: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "A reduced keyboard has {} buttons; each button stands for a group of letters:",
        layout.button_count()
    );
    out.push_str(&legend(layout));

    let context = context.trim();
    if !context.is_empty() {
        let _ = writeln!(
            out,
            "\nThe user has already typed: \"{}\"\nPrefer words that continue this text naturally.",
            context
        );
    }

    let _ = writeln!(
        out,
        "\nThe user pressed the buttons: {}\n\nEvery letter of a valid word must come from the group of the button pressed at that position:",
        sequence_display(sequence)
    );
    out.push_str(&position_requirements(layout, sequence));

    if !examples.is_empty() {
        out.push_str("\nWorked examples under this layout:\n");
        for (word, seq) in examples {
            let _ = writeln!(out, "- {} matches \"{}\"", sequence_display(seq), word);
        }
    }

    out.push_str(
        "\nList the 3 most likely matching words first, then up to 5 further alternatives. \
         Include common words and proper names that fit the pattern.\n\
         Respond with JSON in this format:\n\
         {\"top_predictions\": [\"WORD1\", \"WORD2\", \"WORD3\"], \
         \"alternative_words\": [\"WORD4\", \"WORD5\"], \"confidence\": 0.85}\n",
    );

    if corrective {
        out.push_str(
            "\nYour previous answer contained words that do not fit. Only output words whose \
             letters match the button groups exactly, position by position.\n",
        );
    }

    out
}

/// Build the next-word suggestion prompt for a committed text context.
pub fn next_word_prompt(context: &str) -> String {
    format!(
        "Given this text: \"{}\"\n\n\
         Predict the 3 most likely next words that would follow naturally in English, \
         considering grammar and meaning. If the sentence seems complete, suggest words \
         that would start a new sentence.\n\
         Respond with JSON in this format:\n\
         {{\"next_words\": [\"WORD1\", \"WORD2\", \"WORD3\"]}}",
        context.trim()
    )
}
