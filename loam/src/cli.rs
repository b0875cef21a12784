use std::ffi::OsString;

#[derive(Debug, clap::Parser)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    #[clap(about = "Print the offset of the first occurrence of a pattern")]
    Find {
        #[clap(value_name = "pattern")]
        pattern: String,
        #[clap(value_name = "filename")]
        input: OsString,
    },
    #[clap(about = "Print the number of occurrences of a pattern, overlapping ones included")]
    Count {
        #[clap(value_name = "pattern")]
        pattern: String,
        #[clap(value_name = "filename")]
        input: OsString,
    },
    #[clap(about = "Print the offset of every occurrence of a pattern, one per line")]
    Indices {
        #[clap(value_name = "pattern")]
        pattern: String,
        #[clap(value_name = "filename")]
        input: OsString,
    },
    #[clap(about = "Split the input on a separator and print one segment per line")]
    Split {
        #[clap(value_name = "separator")]
        separator: String,
        #[clap(value_name = "filename")]
        input: OsString,
    },
    #[clap(about = "Print arena and file statistics after loading the input")]
    Stats {
        #[clap(value_name = "filename")]
        input: OsString,
    },
    #[clap(about = "Print a hex/ASCII dump of the input")]
    Dump {
        #[clap(value_name = "filename")]
        input: OsString,
    },
}

impl Command {
    pub(crate) fn input(&self) -> &OsString {
        match self {
            Self::Find { input, .. }
            | Self::Count { input, .. }
            | Self::Indices { input, .. }
            | Self::Split { input, .. }
            | Self::Stats { input }
            | Self::Dump { input } => input,
        }
    }
}
