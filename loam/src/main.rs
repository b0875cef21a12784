#![warn(
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_qualifications
)]
#![forbid(unsafe_code)]

use std::fmt::Write as _;
use std::io::{Read as _, Write as _};
use std::path::Path;
use std::process::ExitCode;

use loam_core::buf::Buf;
use loam_front::Session;

mod cli;

#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> ExitCode {
    match main_inner() {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunError::Generic) => ExitCode::from(1),
        Err(RunError::Usage) => ExitCode::from(2),
    }
}

enum RunError {
    Generic,
    Usage,
}

fn main_inner() -> Result<(), RunError> {
    let args = match <cli::Cli as clap::Parser>::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return Err(RunError::Usage);
        }
    };

    let mut session = Session::new();
    session.set_colored_output(std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()));

    let input = args.command.input().clone();
    let data;
    if input == "-" {
        let mut raw = Vec::new();
        match std::io::stdin().read_to_end(&mut raw) {
            Ok(_) => {
                data = session.load_virt_file("<stdin>", &raw);
            }
            Err(e) => {
                eprintln!("failed to read stdin: {e}");
                return Err(RunError::Generic);
            }
        }
    } else {
        let Some(buf) = session.load_real_file(Path::new(&input)) else {
            return Err(RunError::Generic);
        };
        data = buf;
    }

    let output: Vec<u8> = match args.command {
        cli::Command::Find { pattern, .. } => {
            let needle = Buf::new(session.arena_mut(), pattern.as_bytes());
            match data.find(needle, session.arena()) {
                Some(at) => format!("{at}\n").into_bytes(),
                None => {
                    session.print_error("pattern not found");
                    return Err(RunError::Generic);
                }
            }
        }
        cli::Command::Count { pattern, .. } => {
            let needle = Buf::new(session.arena_mut(), pattern.as_bytes());
            format!("{}\n", data.count(needle, session.arena())).into_bytes()
        }
        cli::Command::Indices { pattern, .. } => {
            let needle = Buf::new(session.arena_mut(), pattern.as_bytes());
            let mut out = String::new();
            for at in data.find_all(needle, session.arena()) {
                writeln!(out, "{at}").unwrap();
            }
            out.into_bytes()
        }
        cli::Command::Split { separator, .. } => {
            if separator.is_empty() {
                eprintln!("error: the separator must not be empty");
                return Err(RunError::Usage);
            }
            let separator = Buf::new(session.arena_mut(), separator.as_bytes());
            let mut out = Vec::new();
            for segment in data.split(separator, session.arena()) {
                out.extend_from_slice(segment.as_bytes(session.arena()));
                out.push(b'\n');
            }
            out
        }
        cli::Command::Stats { .. } => {
            let mut out = Vec::new();
            session.dump_stats(&mut out).unwrap();
            out
        }
        cli::Command::Dump { .. } => {
            let mut out = Vec::new();
            session.dump_buffer(data, &mut out).unwrap();
            out
        }
    };

    match std::io::stdout().write_all(&output) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("failed to write to stdout: {e}");
            Err(RunError::Generic)
        }
    }
}
