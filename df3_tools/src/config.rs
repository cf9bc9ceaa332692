use std::path::PathBuf;

use clap::ArgMatches;
use df3_lib::{LayerFormat, SplitOptions};

/// `df3combine` configuration
/// Config is built from args parsed by `clap`
#[derive(Debug)]
pub struct CombineConfig {
    /// Resulting volume file
    pub output: PathBuf,
    /// Input layers are all files starting with this prefix
    pub prefix: String,
    /// No status output
    pub silent: bool,
}

impl CombineConfig {
    pub fn from_args(args: &ArgMatches) -> Result<CombineConfig, String> {
        let output = args
            .value_of_os("df3file")
            .ok_or("Missing DF3 file name")?
            .into();
        let prefix = args.value_of("prefix").unwrap_or("layer").to_owned();
        let silent = args.is_present("silent");

        Ok(CombineConfig {
            output,
            prefix,
            silent,
        })
    }
}

/// `df3split` configuration
#[derive(Debug)]
pub struct SplitConfig {
    /// Volume to split
    pub input: PathBuf,
    /// Output naming and format
    pub options: SplitOptions,
    /// No status output
    pub silent: bool,
}

impl SplitConfig {
    pub fn from_args(args: &ArgMatches) -> Result<SplitConfig, String> {
        let input = args
            .value_of_os("df3file")
            .ok_or("Missing DF3 file name")?
            .into();
        let format: LayerFormat = args.value_of("format").unwrap_or("tga").parse()?;
        let prefix = args.value_of("prefix").unwrap_or("layer").to_owned();
        let silent = args.is_present("silent");

        Ok(SplitConfig {
            input,
            options: SplitOptions { prefix, format },
            silent,
        })
    }
}
