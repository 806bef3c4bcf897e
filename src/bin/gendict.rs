use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use clap::builder::BoolishValueParser;
use fraza::{DEFAULT_ENCODING, build, resolve_encoding, ui};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fraza-gendict",
    version,
    author,
    about = "Builds a fraza dictionary from a plain text word list"
)]
struct Cli {
    /// Text file with one word per line
    source: PathBuf,

    /// Where to write the dictionary
    dest: PathBuf,

    /// Gzip the dictionary (true/false, yes/no, 1/0, on/off)
    #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
    compress: bool,

    /// Text encoding of the source file
    #[arg(short, long, default_value = DEFAULT_ENCODING)]
    encoding: String,
}

fn run(cli: Cli) -> Result<()> {
    let encoding = resolve_encoding(&cli.encoding)?;

    let count = ui::show_progress(ui::detect_unicode_support(), "Building dictionary...", || {
        build(&cli.source, &cli.dest, cli.compress, encoding)
            .with_context(|| format!("Failed to build {}", cli.dest.display()))
    })?;

    println!("[+] Saved {} words to {}", count, cli.dest.display());

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_three_arguments() {
        assert!(Cli::try_parse_from(["fraza-gendict"]).is_err());
        assert!(Cli::try_parse_from(["fraza-gendict", "words.txt", "dict"]).is_err());
        assert!(
            Cli::try_parse_from(["fraza-gendict", "words.txt", "dict", "true", "extra"]).is_err()
        );
    }

    #[test]
    fn test_compress_is_parsed_as_bool() {
        for (raw, expected) in [
            ("true", true),
            ("1", true),
            ("yes", true),
            ("false", false),
            ("0", false),
            ("off", false),
        ] {
            let cli = Cli::try_parse_from(["fraza-gendict", "words.txt", "dict", raw]).unwrap();
            assert_eq!(cli.compress, expected, "Input \"{}\"", raw);
        }

        assert!(Cli::try_parse_from(["fraza-gendict", "words.txt", "dict", "maybe"]).is_err());
    }

    #[test]
    fn test_default_encoding() {
        let cli = Cli::try_parse_from(["fraza-gendict", "words.txt", "dict", "no"]).unwrap();
        assert_eq!(cli.encoding, "windows-1251");
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
