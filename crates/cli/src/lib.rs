pub mod cli;
pub mod color;
pub mod completions;
pub mod error;
pub mod filter;
pub mod noise;
pub mod output;
pub mod reader;
pub mod trie;

pub use cli::{CheckArgs, Cli, Command, MaskArgs, OutputFormat, ScanArgs, TextArgs};
pub use color::ColorMode;
pub use error::{Error, ExitCode, Result};
pub use filter::WordFilter;
pub use noise::{DEFAULT_NOISE_PATTERN, NoiseError, NoisePattern};
pub use trie::Trie;
