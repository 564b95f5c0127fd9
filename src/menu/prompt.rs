//! Regex-validated console input.
//!
//! Invalid input never surfaces as an error: every blocking prompt
//! loops until the response matches its pattern. The validators are
//! pure functions so the patterns stay testable without a console.

use regex::Regex;
use std::io::{self, Write};
use std::sync::OnceLock;

static TOP_CHOICE: OnceLock<Regex> = OnceLock::new();
static SUBMENU_CHOICE: OnceLock<Regex> = OnceLock::new();
static INTEGER: OnceLock<Regex> = OnceLock::new();
static FILE_STEM: OnceLock<Regex> = OnceLock::new();

/// Top-menu choice: one of the digits 1-11.
pub fn validate_top_choice(input: &str) -> Option<u8> {
    let re = TOP_CHOICE.get_or_init(|| Regex::new(r"^(1[01]|[1-9])$").unwrap());
    if re.is_match(input) {
        input.parse().ok()
    } else {
        None
    }
}

/// Sub-menu choice: a single letter A-D, normalized to uppercase.
pub fn validate_submenu_choice(input: &str) -> Option<char> {
    let re = SUBMENU_CHOICE.get_or_init(|| Regex::new(r"^[A-Da-d]$").unwrap());
    if re.is_match(input) {
        input.to_uppercase().chars().next()
    } else {
        None
    }
}

/// An integer within `1..=max`.
pub fn validate_count(input: &str, max: usize) -> Option<usize> {
    let re = INTEGER.get_or_init(|| Regex::new(r"^\d+$").unwrap());
    if !re.is_match(input) {
        return None;
    }
    let n: usize = input.parse().ok()?;
    (1..=max).contains(&n).then_some(n)
}

/// A bare file stem usable for export targets, normalized to lowercase.
pub fn validate_file_stem(input: &str) -> Option<String> {
    let re = FILE_STEM.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
    if re.is_match(input) {
        Some(input.to_lowercase())
    } else {
        None
    }
}

/// A yes/no answer.
pub fn validate_yes_no(input: &str) -> Option<bool> {
    match input.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

fn read_trimmed(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

/// Show the top menu until the user picks one of its options.
pub fn prompt_top_choice(menu: &str) -> u8 {
    loop {
        if let Some(choice) = validate_top_choice(&read_trimmed(menu)) {
            return choice;
        }
        println!("Invalid option");
    }
}

/// Show a sub-menu until the user picks one of A-D.
pub fn prompt_submenu_choice(menu: &str) -> char {
    loop {
        if let Some(choice) = validate_submenu_choice(&read_trimmed(menu)) {
            return choice;
        }
    }
}

/// Ask for a number within `1..=max`, re-prompting with the valid
/// range on bad input.
pub fn prompt_count(message: &str, max: usize) -> usize {
    loop {
        let input = read_trimmed(message);
        match validate_count(&input, max) {
            Some(n) => return n,
            None => println!("Enter a whole number between 1 and {max}."),
        }
    }
}

/// Ask for an export file name until it is a usable stem.
pub fn prompt_file_stem(message: &str) -> String {
    loop {
        if let Some(stem) = validate_file_stem(&read_trimmed(message)) {
            return stem;
        }
        println!("File names may only use letters, digits, '-' and '_'.");
    }
}

/// Ask a yes/no question.
pub fn prompt_yes_no(message: &str) -> bool {
    let mut message = message.to_string();
    loop {
        match validate_yes_no(&read_trimmed(&message)) {
            Some(answer) => return answer,
            None => message = "Invalid answer. Continue? (yes/no) ".to_string(),
        }
    }
}

/// Free-form text, trimmed.
pub fn prompt_line(message: &str) -> String {
    read_trimmed(message)
}
