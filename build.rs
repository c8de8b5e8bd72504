//! Build script to generate embedded word lists
//!
//! Reads one word list file per level length and generates Rust source code
//! with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Word lengths the game ships embedded lists for (level 5 through level 9).
const LEVEL_LENGTHS: [usize; 5] = [5, 6, 7, 8, 9];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("word_lists.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists, one const per level length").unwrap();

    for length in LEVEL_LENGTHS {
        let input_path = format!("data/words_{length}.txt");
        generate_word_list(&mut output, &input_path, length);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, length: usize) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    for word in &words {
        assert!(
            word.len() == length && word.chars().all(|c| c.is_ascii_lowercase()),
            "{input_path}: '{word}' is not a lowercase {length}-letter word"
        );
    }

    writeln!(output).unwrap();
    writeln!(output, "/// Embedded {length}-letter words ({count} words)").unwrap();
    writeln!(output, "pub const WORDS_{length}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS_{length}").unwrap();
    writeln!(output, "pub const WORDS_{length}_COUNT: usize = {count};").unwrap();
}
