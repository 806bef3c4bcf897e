// This file is part of Fraza.
//
// Copyright (c) 2025  The Fraza authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::generator::{GenerationConfig, PassphraseResult, entropy_bits};
use anyhow::Result;
use console::{Alignment, Style, Term, measure_text_width, pad_str};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const MIN_SAFE_ENTROPY: f64 = 60.0;
pub const PARANOID_ENTROPY: f64 = 100.0;

const HEADERS: [&str; 3] = ["ID", "Passphrase", "Password"];

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

impl DisplayOptions {
    pub fn detect(quiet: bool) -> Self {
        Self {
            unicode_support: detect_unicode_support(),
            color_support: detect_color_support(),
            quiet,
        }
    }
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn detect_stderr_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn tree_branches(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

/// Aligned ID / Passphrase / Password table, one line per entry.
pub fn render_table(results: &[PassphraseResult], bold_header: bool) -> Vec<String> {
    let rows: Vec<[String; 3]> = results
        .iter()
        .enumerate()
        .map(|(i, r)| [(i + 1).to_string(), r.phrase.clone(), r.password.to_string()])
        .collect();

    let mut widths = HEADERS.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let format_row = |cells: [&str; 3]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad_str(cell, width, Alignment::Left, None).into_owned())
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header_style = if bold_header {
        Style::new().bold()
    } else {
        Style::new()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_style.apply_to(format_row(HEADERS)).to_string());
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row([&row[0], &row[1], &row[2]]));
    }
    lines
}

pub fn display_output(
    results: &[PassphraseResult],
    wordlist_len: usize,
    config: &GenerationConfig,
    options: &DisplayOptions,
) {
    for line in render_table(results, options.color_support) {
        println!("{}", line);
    }

    if !options.quiet {
        println!();
        display_stats(entropy_bits(wordlist_len, config), wordlist_len, config, options);
    }
}

fn display_stats(
    entropy: f64,
    wordlist_len: usize,
    config: &GenerationConfig,
    options: &DisplayOptions,
) {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = tree_branches(options.unicode_support);

    let (status_icon, entropy_style, status_text) = if entropy >= PARANOID_ENTROPY {
        (check_ok, Style::new().green(), "Paranoid")
    } else if entropy >= MIN_SAFE_ENTROPY {
        (check_ok, Style::new().green(), "Strong")
    } else {
        (check_warn, Style::new().yellow(), "Weak")
    };
    let entropy_style = if options.color_support {
        entropy_style
    } else {
        Style::new()
    };

    println!("Stats:");
    println!(
        "  {} Entropy    {} {} bits ({})",
        branch,
        entropy_style.apply_to(format!("[{}]", status_icon)),
        entropy_style.apply_to(format!("{:.1}", entropy)),
        entropy_style.apply_to(status_text)
    );
    println!("  {} Words      {}", branch, shape_summary(config));
    println!(
        "  {} Options    capitalize={}, number={}",
        branch, config.capitalize, config.number
    );
    println!("  {} Wordlist   {} words", last, wordlist_len);
}

fn shape_summary(config: &GenerationConfig) -> String {
    format!(
        "{} word{}, {} letter{} each",
        config.words,
        if config.words == 1 { "" } else { "s" },
        config.letters,
        if config.letters == 1 { "" } else { "s" }
    )
}

fn error_message(err: &anyhow::Error, color_support: bool) -> String {
    let style = if color_support {
        Style::new().red().for_stderr()
    } else {
        Style::new()
    };
    format!("{} {:#}", style.apply_to("Error:"), err)
}

pub fn report_error(err: &anyhow::Error) {
    let term = Term::stderr();
    let message = error_message(err, detect_stderr_color_support());
    if term.write_line(&message).is_err() {
        eprintln!("{}", message);
    }
}

pub fn show_progress<F, T>(unicode_support: bool, message: &str, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let pb = ProgressBar::new_spinner();

    let style = ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let style = if unicode_support {
        style.tick_strings(&[
            "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿",
        ])
    } else {
        style.tick_chars("-\\|/-")
    };
    pb.set_style(style);

    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));

    let result = f();

    pb.finish_and_clear();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use zeroize::Zeroizing;

    fn result(phrase: &str, password: &str) -> PassphraseResult {
        PassphraseResult {
            phrase: phrase.to_string(),
            password: Zeroizing::new(password.to_string()),
        }
    }

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_shape_summary() {
        assert_eq!(
            shape_summary(&GenerationConfig::DEFAULT),
            "4 words, 3 letters each"
        );
        let single = GenerationConfig {
            words: 1,
            letters: 1,
            ..GenerationConfig::DEFAULT
        };
        assert_eq!(shape_summary(&single), "1 word, 1 letter each");
    }

    #[test]
    fn test_error_message_plain() {
        let err = anyhow::anyhow!("cannot pick 5 words from the dictionary (max 4)");
        assert_eq!(
            error_message(&err, false),
            "Error: cannot pick 5 words from the dictionary (max 4)"
        );
    }

    #[test]
    fn test_table_layout() {
        let lines = render_table(
            &[
                result("замок гора река лес", "pfvujhhtrktc"),
                result("лес", "ktc"),
            ],
            false,
        );

        assert_eq!(
            lines,
            vec![
                "ID | Passphrase          | Password    ",
                "---+---------------------+-------------",
                "1  | замок гора река лес | pfvujhhtrktc",
                "2  | лес                 | ktc         ",
            ]
        );
    }

    #[test]
    fn test_table_header_wider_than_data() {
        let lines = render_table(&[result("ёж", "`;")], false);

        assert_eq!(
            lines,
            vec![
                "ID | Passphrase | Password",
                "---+------------+---------",
                "1  | ёж         | `;      ",
            ]
        );
    }

    #[test]
    fn test_table_double_digit_ids() {
        let results: Vec<_> = (0..10).map(|_| result("лес", "ktc")).collect();
        let lines = render_table(&results, false);

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[11], "10 | лес        | ktc     ");
        assert!(
            lines
                .iter()
                .all(|l| measure_text_width(l) == measure_text_width(&lines[0]))
        );
    }

    #[test]
    fn test_empty_table() {
        let lines = render_table(&[], false);
        assert_eq!(
            lines,
            vec!["ID | Passphrase | Password", "---+------------+---------"]
        );
    }
}
