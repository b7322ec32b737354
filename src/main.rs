use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;

use jamo_trie::{CharCodec, DelimitedCodec, GraphemeCodec, HangulCodec, KeyCodec, Trie};

use crate::options::{CodecKind, Options};

mod options;

/// Writes log records to stderr, filtered only by the global max level (see `Options::log_level`).
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(options.log_level()))
        .context("could not install logger")?;
    log::debug!("{options:#?}");

    // The codec determines the unit type, so each choice is a differently typed trie.
    if let Some(delimiter) = &options.split_delimiter {
        run(Trie::with_codec(DelimitedCodec::new(delimiter.clone())), &options)
    } else {
        match options.codec {
            CodecKind::Jamo => run(Trie::with_codec(HangulCodec), &options),
            CodecKind::Chars => run(Trie::with_codec(CharCodec), &options),
            CodecKind::Graphemes => run(Trie::with_codec(GraphemeCodec), &options),
        }
    }
}

fn run<C: KeyCodec>(mut trie: Trie<C>, options: &Options) -> anyhow::Result<()> {
    // Read lines from input and insert into trie.
    let input: Box<dyn io::BufRead> = if let Some(file) = &options.input {
        let file = File::open(file).with_context(|| format!("could not open input file {}", file.display()))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(io::stdin().lock())
    };

    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("input line {}: could not read", i + 1))?;
        let mut line = line.as_str();

        // Optionally trim leading and trailing whitespace.
        if options.trim_input {
            line = line.trim();
        }

        trie.insert(line);
    }
    log::info!("read {} distinct keys", trie.len());

    for key in &options.remove {
        if !trie.remove(key) {
            log::warn!("cannot remove {key:?}: not present");
        }
    }

    // Write results to output.
    let mut output: Box<dyn io::Write> = if let Some(file) = &options.output {
        let file = File::create(file).with_context(|| format!("could not create output file {}", file.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(io::stdout())
    };

    let print_keys = |output: &mut dyn io::Write, mut keys: Vec<String>, indent: &str| -> io::Result<()> {
        if options.sort {
            keys.sort();
        }
        for key in keys {
            writeln!(output, "{indent}{key}")?;
        }
        Ok(())
    };

    // Without any queries, just print all keys.
    if options.complete.is_empty() && options.query.is_empty() {
        print_keys(&mut output, trie.get_all(), "")?;
    }

    for key in &options.query {
        writeln!(output, "has '{key}': {}", trie.has(key))?;
    }

    for prefix in &options.complete {
        let completions = trie.auto_complete(prefix);
        writeln!(output, "complete '{prefix}': {}", completions.len())?;
        print_keys(&mut output, completions, "  ")?;
    }

    output.flush()?;
    Ok(())
}
