//! Simple command that prints one or '-n count' UUID strings of version '-v 4|7'

use std::{env, io, io::Write, process::ExitCode};

#[derive(Default)]
struct Options {
    count: Option<usize>,
    version: Option<u8>,
}

fn main() -> io::Result<ExitCode> {
    pretty_env_logger::init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {message}");
                eprintln!(
                    "Usage: {} [-n count] [-v 4|7]",
                    program.as_deref().unwrap_or("guid7")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count.unwrap_or(1) {
        let uuid = match opts.version.unwrap_or(7) {
            4 => guid7::uuid4(),
            _ => match guid7::uuid7() {
                Ok(uuid) => uuid,
                Err(err) => {
                    log::error!("failed to generate UUIDv7: {err}");
                    return Ok(ExitCode::FAILURE);
                }
            },
        };
        writeln!(buf, "{uuid}")?;
    }
    buf.flush()?;

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut opts = Options::default();
    while let Some(arg) = args.next() {
        let name = match arg.as_str() {
            "-n" if opts.count.is_some() => return Err("option 'n' given more than once".into()),
            "-v" if opts.version.is_some() => {
                return Err("option 'v' given more than once".into())
            }
            "-n" => 'n',
            "-v" => 'v',
            _ => return Err(format!("unrecognized argument '{arg}'")),
        };
        let Some(value) = args.next() else {
            return Err(format!("argument to option '{name}' missing"));
        };
        match (name, value.parse::<usize>()) {
            ('n', Ok(c)) => opts.count = Some(c),
            ('v', Ok(v @ (4 | 7))) => opts.version = Some(v as u8),
            _ => return Err(format!("invalid argument to option '{name}': '{value}'")),
        }
    }
    Ok(opts)
}
