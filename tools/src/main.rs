use clap::Parser;
use descent::{Recognizer, Verdict};
use log::{info, warn};
use std::io::{self, Write};

/// Tells whether each input line is an arithmetic expression made of
/// integers, floats, identifiers, + - * / %, unary minus and parentheses.
#[derive(Parser, Debug)]
#[command(name = "exprcheck", version, about)]
struct Args {
    /// Print the tokens consumed while checking each expression
    #[arg(short = 't', long = "tokens")]
    tokens: bool,

    /// How deep parentheses and unary minus chains may nest, at most 256
    #[arg(long, default_value_t = descent::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Don't load or save ~/.exprcheck_history
    #[arg(long)]
    no_history: bool,

    /// Expressions to check, prompts for them interactively if none given
    exprs: Vec<String>,
}

fn report(out: &mut impl Write, input: &str, verdict: &Verdict, show_tokens: bool) -> io::Result<()> {
    if verdict.is_valid() {
        writeln!(out, "\"{}\" is a valid expression", input)?;
    } else {
        writeln!(out, "\"{}\" is not a valid expression.", input)?;
    }
    if show_tokens {
        writeln!(out, "Tokens: {}", verdict.tokens())?;
    }
    Ok(())
}

fn recognizer(args: &Args) -> Recognizer {
    if args.max_depth > descent::MAX_DEPTH {
        warn!("--max-depth {} lowered to {}", args.max_depth, descent::MAX_DEPTH);
    }
    Recognizer::with_max_depth(args.max_depth)
}

fn check_all(out: &mut impl Write, rec: &Recognizer, args: &Args) -> io::Result<bool> {
    let mut all_valid = true;
    for input in args.exprs.iter() {
        let verdict = rec.evaluate(input);
        report(out, input, &verdict, args.tokens)?;
        all_valid &= verdict.is_valid();
    }
    Ok(all_valid)
}

fn interactive(rec: &Recognizer, args: &Args) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = match args.no_history {
        true => None,
        false => dirs::home_dir().map(|h| h.join(".exprcheck_history")),
    };
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            info!("no history at {}", path.display());
        }
    }
    loop {
        match rl.readline("Enter expression: ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            // an empty line ends the session, blank ones still get checked
            Ok(line) if line.is_empty() => break,
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                report(&mut io::stdout(), &line, &rec.evaluate(&line), args.tokens)
                    .map_err(|e| e.to_string())?;
            }
        }
    }
    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            warn!("couldn't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::init();
    let args = Args::parse();
    let rec = recognizer(&args);

    if !args.exprs.is_empty() {
        let all_valid = check_all(&mut io::stdout(), &rec, &args).map_err(|e| e.to_string())?;
        if !all_valid {
            std::process::exit(1);
        }
        return Ok(());
    }
    interactive(&rec, &args)
}
