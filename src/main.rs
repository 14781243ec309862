use std::io::{self, BufRead};

use clap::{ArgAction, Parser};
use duocalc::{
    get_result,
    interpreter::evaluator::core::{Context, Mode},
    util::{
        display::{DISPLAY_LIMIT, truncate_for_display},
        roman::RomanGrammar,
    },
};
use tracing_subscriber::EnvFilter;

/// duocalc evaluates one two-operand expression: quoted strings such as
/// `"ab" * 3`, or numbers from 1 to 10 in Arabic or Roman notation such as
/// `VI / III`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Operand domain. `auto` picks string mode when the expression starts
    /// with a quote.
    #[arg(short, long, value_enum, default_value_t = Mode::Auto)]
    mode: Mode,

    /// How Roman numerals are recognized.
    #[arg(short, long, value_enum, default_value_t = RomanGrammar::Subtractive)]
    roman: RomanGrammar,

    /// Print long string results in full instead of cutting them at 40
    /// characters.
    #[arg(long)]
    full: bool,

    /// Raise the log level (`-v` debug, `-vv` trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = args.expression.unwrap_or_else(|| {
                                   read_expression().unwrap_or_else(|e| {
                                                        eprintln!("Failed to read the expression from standard input: {e}");
                                                        std::process::exit(1);
                                                    })
                               });

    let context = Context::new().with_mode(args.mode)
                                .with_roman_grammar(args.roman);

    match get_result(&input, &context) {
        Ok(result) if args.full => println!("{result}"),
        Ok(result) => println!("{}", truncate_for_display(&result, DISPLAY_LIMIT)),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Prompts on standard error and reads one line from standard input.
fn read_expression() -> io::Result<String> {
    eprintln!("Enter an expression (for example 2+3, VI/III or \"ab\"*3):");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}
