//! Command line parsing and [`EmbedConfig`] construction.

use std::{io, path::PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command, builder::BoolishValueParser, value_parser};

use crate::{
    Embedder,
    asset::{AssetKind, SourceAsset},
    codec::ImageCrateCodec,
    emit::HeaderArtifact,
    error::{EmbedError, ErrorKind},
};

/// The environment variable that enables [`ExitPolicy::Strict`].
pub const STRICT_ENV: &str = "ASSET_EMBEDDER_STRICT";

/// Description of the asset to embed and how the outcome should be reported.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct EmbedConfig {
    /// The asset to embed.
    pub path: PathBuf,
    /// The location of the header, if it should not be placed next to the asset.
    pub output: Option<PathBuf>,
    /// How the outcome maps onto the process exit code.
    pub policy: ExitPolicy,
}

/// How the outcome of an embedding maps onto the process exit code.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum ExitPolicy {
    /// Only an unsupported extension is reported through the exit code (`1`). Failures while
    /// converting a supported asset are printed but still exit with `0`.
    #[default]
    Lenient,
    /// Every failure kind gets its own exit code.
    Strict,
}

impl ExitPolicy {
    /// Exit code for a successful embedding.
    pub const SUCCESS: u8 = 0;
    /// Exit code for a file that is neither a PNG image nor a TrueType font.
    pub const UNSUPPORTED: u8 = 1;
    /// Exit code for an image that could not be decoded or re-encoded, under
    /// [`ExitPolicy::Strict`].
    pub const IMAGE_FAILURE: u8 = 2;
    /// Exit code for a file that could not be read or written, under [`ExitPolicy::Strict`].
    pub const IO_FAILURE: u8 = 3;

    /// Returns the exit code for `result`.
    pub fn exit_code(&self, result: &Result<HeaderArtifact, EmbedError>) -> u8 {
        let Err(error) = result else {
            return Self::SUCCESS;
        };

        match (*self, error.kind()) {
            (_, ErrorKind::UnsupportedExtension) => Self::UNSUPPORTED,
            (Self::Lenient, _) => Self::SUCCESS,
            (Self::Strict, ErrorKind::ImageDecode) => Self::IMAGE_FAILURE,
            (Self::Strict, ErrorKind::Io) => Self::IO_FAILURE,
        }
    }
}

/// Embeds the asset described by `config`, reports the outcome to `out` and returns the exit
/// code.
///
/// Unsupported files are only reported through the exit code.
///
/// # Errors
///
/// Returns any error produced by `out`.
pub fn run<W: io::Write>(config: &EmbedConfig, mut out: W) -> io::Result<u8> {
    let mut embedder = Embedder::new(ImageCrateCodec);
    if let Some(output) = &config.output {
        embedder = embedder.output_path(output);
    }

    let result = embedder.embed(&config.path);
    match &result {
        Ok(artifact) => {
            let asset = SourceAsset::new(&config.path);
            if let (AssetKind::Png, Some(bitmap_path)) = (asset.kind(), asset.bitmap_path()) {
                writeln!(
                    out,
                    "Successfully converted {} to {}",
                    config.path.display(),
                    bitmap_path.display()
                )?;
            }
            writeln!(
                out,
                "Successfully converted {} to {}",
                config.path.display(),
                artifact.path().display()
            )?;
        }
        Err(EmbedError::UnsupportedExtension { .. }) => {}
        Err(error) => writeln!(out, "Error converting image: {error}")?,
    }

    Ok(config.policy.exit_code(&result))
}

/// Parses `asset-embedder`'s arguments to construct an [`EmbedConfig`].
pub fn get_config() -> EmbedConfig {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`EmbedConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> EmbedConfig {
    let path = matches
        .get_one::<PathBuf>("path")
        .cloned()
        .unwrap_or_else(|| unreachable!("`path` is a required argument"));

    let output = matches.get_one::<PathBuf>("output").cloned();

    let policy = if matches.get_flag("strict") {
        ExitPolicy::Strict
    } else {
        ExitPolicy::Lenient
    };

    EmbedConfig {
        path,
        output,
        policy,
    }
}

/// Returns the command parser for `asset-embedder`.
pub fn command_parser() -> Command {
    command_parser_with_strict_env(STRICT_ENV)
}

/// Returns the command parser for `asset-embedder`, reading the `--strict` default from
/// `strict_env`.
fn command_parser_with_strict_env(strict_env: &'static str) -> Command {
    let path = Arg::new("path")
        .help("The PNG image or TrueType font to embed")
        .value_parser(value_parser!(PathBuf))
        .required(true);

    let output = Arg::new("output")
        .short('o')
        .long("output")
        .help("Write the header here instead of next to the asset")
        .value_parser(value_parser!(PathBuf));

    let strict = Arg::new("strict")
        .long("strict")
        .env(strict_env)
        .help("Report conversion failures through distinct exit codes")
        .action(ArgAction::SetTrue)
        .value_parser(BoolishValueParser::new());

    Command::new("asset-embedder")
        .about("Converts PNG images and TrueType fonts into C byte-array headers")
        .arg(path)
        .arg(output)
        .arg(strict)
}
