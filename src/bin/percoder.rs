// percoder: percent-encode or decode path names and query strings

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::{ArgGroup, Parser};

use percoder::common::io::{read_stdin, strip_line_terminator};
use percoder::common::{io_error_msg, reset_sigpipe};
use percoder::percent::{Mode, Options};

const TOOL_NAME: &str = "percoder";

#[derive(Parser)]
#[command(
    name = "percoder",
    about = "Perform percent encoding on path names or query strings.",
    after_help = "Every printable ASCII character is written as %XX, XX being its\n\
        uppercase hexadecimal code. When -e or -d is given without STRING, read it\n\
        from standard input (one trailing newline is ignored). Use --encode=STRING\n\
        for strings starting with -. --double is ignored when decoding.",
    version
)]
#[command(group(ArgGroup::new("mode").required(true).args(["encode", "decode"])))]
struct Cli {
    /// A url to prefix the encoded or decoded path/params with
    #[arg(short = 'u', long = "url", value_name = "URL", default_value = "")]
    url: String,

    /// A string containing the path/params to encode (stdin if omitted)
    #[arg(short = 'e', long = "encode", value_name = "STRING")]
    encode: Option<Option<String>>,

    /// A string containing the path/params to decode (stdin if omitted)
    #[arg(short = 'd', long = "decode", value_name = "STRING")]
    decode: Option<Option<String>>,

    /// Encode each character twice
    #[arg(short = '2', long = "double")]
    double: bool,
}

impl Cli {
    fn into_options(self) -> Result<Options> {
        let mode = match (self.encode, self.decode) {
            (Some(input), None) => Mode::Encode(resolve_input(input)?),
            (None, Some(input)) => Mode::Decode(resolve_input(input)?),
            // The required "mode" group admits exactly one of the two.
            _ => unreachable!("clap enforces exactly one of --encode or --decode"),
        };
        Ok(Options::new(mode).url(self.url).double(self.double))
    }
}

/// A flag given without a value reads its input from standard input.
fn resolve_input(arg: Option<String>) -> Result<String> {
    if let Some(input) = arg {
        return Ok(input);
    }
    let data = read_stdin().map_err(|e| anyhow!("standard input: {}", io_error_msg(&e)))?;
    let line = strip_line_terminator(&data).to_vec();
    String::from_utf8(line).context("standard input is not valid UTF-8")
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let options = cli.into_options()?;
    let result = options.transform()?;
    writeln!(out, "{}", result)?;
    out.flush()?;
    Ok(())
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(cli, &mut out) {
        if let Some(io_err) = e.downcast_ref::<io::Error>() {
            if io_err.kind() == io::ErrorKind::BrokenPipe {
                process::exit(0);
            }
            eprintln!("{}: write error: {}", TOOL_NAME, io_error_msg(io_err));
        } else {
            eprintln!("{}: {:#}", TOOL_NAME, e);
        }
        process::exit(1);
    }
}
