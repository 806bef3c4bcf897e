pub mod builder;
pub mod error;
pub mod generator;
pub mod layout;
pub mod ui;
pub mod wordlist;

pub use builder::{DEFAULT_ENCODING, build, resolve_encoding};
pub use error::FrazaError;
pub use generator::{
    GenerationConfig, PassphraseResult, assemble, generate_batch, generate_passphrase, sample,
};
pub use layout::transform;
pub use wordlist::WordList;
