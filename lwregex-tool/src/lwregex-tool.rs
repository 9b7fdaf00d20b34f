#![allow(clippy::uninlined_format_args)]

use log::debug;
use lwregex::{Config, Error, Regex, DEFAULT_ATOM_CAPACITY};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lwregex-tool")]
struct Opt {
    /// The regular expression, written as /pattern/g unless --raw is given.
    pattern: String,

    /// Treat the pattern as bare text without /.../g delimiters.
    #[structopt(long, short)]
    raw: bool,

    /// Number of atoms available to the compiler.
    #[structopt(long, default_value = "100")]
    capacity: usize,

    /// Try every offset instead of searching for a first byte.
    #[structopt(long)]
    no_opt: bool,

    /// Dump the compiled atoms to stdout.
    #[structopt(long)]
    dump_atoms: bool,

    /// The input values to match against.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Match against the contents of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark the matches of the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

fn format_match(m: &lwregex::Match, input: &str) -> String {
    let mut result = format!(
        "\"{}\" ({}..{})",
        String::from_utf8_lossy(&input.as_bytes()[m.range()]),
        m.start(),
        m.end()
    );

    if !m.captures.is_empty() {
        result.push_str(", captures: [");
        for (i, cg) in m.captures.iter().enumerate() {
            if i > 0 {
                result.push_str(", ");
            }
            match cg {
                Some(r) => result.push_str(&format!(
                    "\"{}\" ({}..{})",
                    String::from_utf8_lossy(&input.as_bytes()[r.clone()]),
                    r.start,
                    r.end
                )),
                None => result.push_str("None"),
            }
        }
        result.push(']');
    }
    result
}

fn exec_re_on_string(re: &Regex, input: &str) {
    match re.find(input) {
        Some(m) => println!("Match: {}", format_match(&m, input)),
        None => println!("No match"),
    }
}

fn bench_re_on_path(re: &Regex, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return;
        }
    };
    let lines: Vec<&str> = contents.lines().collect();
    // Warmup
    let matched = lines.iter().filter(|line| re.is_match(line)).count();
    let start = Instant::now();
    for _ in 0..25 {
        lines.iter().filter(|line| re.is_match(line)).count();
    }
    let duration = start.elapsed();
    println!("{} of {} lines match", matched, lines.len());
    println!("{} ms", duration.as_millis());
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Opt::from_args();

    let config = Config {
        atom_capacity: args.capacity,
        no_opt: args.no_opt,
        ..Config::default()
    };
    if config.atom_capacity != DEFAULT_ATOM_CAPACITY {
        debug!("using an atom capacity of {}", config.atom_capacity);
    }
    let re = if args.raw {
        Regex::from_stripped(&args.pattern, config)?
    } else {
        Regex::with_config(&args.pattern, config)?
    };

    if args.dump_atoms {
        println!("Atoms:\n{}", re.as_compiled());
    }

    if let Some(ref path) = args.bench {
        bench_re_on_path(&re, path);
    } else if let Some(ref path) = args.file {
        match fs::read_to_string(path) {
            Ok(contents) => exec_re_on_string(&re, contents.as_str()),
            Err(err) => println!("{}: {}", err, path.display()),
        }
    } else {
        for input in &args.inputs {
            exec_re_on_string(&re, input);
        }
    }
    Ok(())
}
