//! Argument parsing and validation
//! Uses library `clap`

use std::ffi::OsStr;

use clap::{Arg, Command, ValueHint};
use df3_lib::format::FORMAT_NAMES;

pub fn is_not_empty(s: &str) -> Result<(), String> {
    if s.is_empty() {
        Err("Value must not be empty".into())
    } else {
        Ok(())
    }
}

fn df3_file_arg<'a>(help: &'a str) -> Arg<'a> {
    Arg::new("df3file")
        .help(help)
        .required(true)
        .value_name("DF3FILE")
        .allow_invalid_utf8(true)
        .value_hint(ValueHint::FilePath)
        .validator_os(|s: &OsStr| {
            if s.is_empty() {
                Err("File name must not be empty")
            } else {
                Ok(())
            }
        })
}

fn prefix_arg<'a>(help: &'a str) -> Arg<'a> {
    Arg::new("prefix")
        .help(help)
        .long("prefix")
        .short('p')
        .takes_value(true)
        .value_name("PREFIX")
        .default_value("layer")
        .validator(is_not_empty)
}

fn silent_arg<'a>() -> Arg<'a> {
    Arg::new("silent")
        .help("Suppress output")
        .long("silent")
        .short('s')
}

pub fn combine_command<'a>() -> Command<'a> {
    Command::new("df3combine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Combine a series of separate images into POV-Ray density file (DF3)")
        .arg(df3_file_arg("Resulting DF3 filename"))
        .arg(prefix_arg("Input files prefix"))
        .arg(silent_arg())
}

pub fn split_command<'a>() -> Command<'a> {
    Command::new("df3split")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split POV-Ray density file (DF3) to a series of separate images")
        .arg(df3_file_arg("DF3 filename, including path"))
        .arg(
            Arg::new("format")
                .help("Output files format")
                .long("format")
                .short('t')
                .takes_value(true)
                .value_name("FORMAT")
                .default_value("tga")
                .ignore_case(true)
                .possible_values(FORMAT_NAMES),
        )
        .arg(prefix_arg("Output files prefix"))
        .arg(silent_arg())
}
