use anyhow::Result;
use clap::Parser;
use clap::builder::TypedValueParser;
use fraza::{GenerationConfig, WordList, generate_batch, ui};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fraza",
    version,
    author,
    about = "Password generator with a memorable passphrase (fraza)"
)]
struct Cli {
    /// Number of words in the passphrase
    #[arg(short, long, default_value_t = GenerationConfig::DEFAULT.words)]
    words: usize,

    /// Path to the dictionary file
    #[arg(short, long, default_value = "dict")]
    file: PathBuf,

    /// Capitalize the first letter taken from each word
    #[arg(short, long)]
    capitalize: bool,

    /// Number of letters taken from each word into the password
    #[arg(
        short,
        long,
        default_value_t = GenerationConfig::DEFAULT.letters,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    letters: usize,

    /// Put a two-digit number in front of the phrase and the password
    #[arg(short, long)]
    number: bool,

    /// How many passphrases to generate
    #[arg(
        short,
        long,
        default_value_t = GenerationConfig::DEFAULT.passwords,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    passwords: usize,

    /// Hard preset: 4 words, 3 letters, capitalized, with number
    #[arg(short = 'H', long)]
    hard: bool,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the table only
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn generation_config(&self) -> GenerationConfig {
        let config = GenerationConfig {
            words: self.words,
            letters: self.letters,
            capitalize: self.capitalize,
            number: self.number,
            passwords: self.passwords,
        };

        if self.hard { config.hardened() } else { config }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.generation_config();
    let wordlist = WordList::load(&cli.file)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let results = generate_batch(&mut rng, &wordlist, &config)?;

    let options = ui::DisplayOptions::detect(cli.quiet);
    ui::display_output(&results, wordlist.len(), &config, &options);

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
