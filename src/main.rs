use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use conjugator::config::Format;
use conjugator::{
    adjective, process, ClassMeta, Config, ConjugationTree, Conjugations, Feature, Lexeme, Node,
    Outcome, PartOfSpeech, UNAVAILABLE,
};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// The dictionary form to conjugate, as it is normally written.
    spelling: Option<String>,
    /// The kana reading of the dictionary form. Defaults to the spelling.
    reading: Option<String>,
    /// The part of speech to conjugate the word as, like `v5k`. See
    /// `--list-pos` for available options.
    #[arg(long = "pos", name = "pos")]
    part_of_speech: Option<String>,
    /// Mark the word as ambiguous, which causes it to be skipped.
    #[arg(long)]
    ambiguous: bool,
    /// List available parts of speech options and exit.
    #[arg(long)]
    list_pos: bool,
    /// Print the conjugations of the copula.
    #[arg(long)]
    copula: bool,
    /// Output JSON, overriding the configured format.
    #[arg(long)]
    json: bool,
    /// Path to the configuration file to use.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let mut o = io::stdout().lock();

    if args.list_pos {
        writeln!(o, "Available `--pos` arguments:")?;

        for pos in PartOfSpeech::VALUES {
            let features = ClassMeta::of(*pos).features();

            let features = Feature::VALUES
                .iter()
                .filter(|f| features.contains(**f))
                .map(|f| f.name())
                .collect::<Vec<_>>();

            writeln!(o, "{} - {} / {}", pos.ident(), pos.variant(), pos.help())?;

            if !features.is_empty() {
                writeln!(o, "  {}", features.join(", "))?;
            }
        }

        return Ok(());
    }

    let config = Config::load(args.config.as_deref()).context("Loading configuration")?;

    let format = if args.json { Format::Json } else { config.format };

    let conjugations = if args.copula {
        adjective::copula()
    } else {
        let Some(spelling) = &args.spelling else {
            bail!("Missing word to conjugate");
        };

        let Some(pos) = &args.part_of_speech else {
            bail!("Missing `--pos <pos>` to conjugate `{spelling}` as");
        };

        let reading = args.reading.as_deref().unwrap_or(spelling.as_str());

        let lexeme = Lexeme::new(spelling, reading).with_part_of_speech(pos, args.ambiguous);

        match process(&lexeme).with_context(|| format!("Conjugating {spelling}"))? {
            Outcome::Conjugated(conjugations) => conjugations,
            Outcome::Skipped(skip) => {
                writeln!(o, "Skipped {spelling}: {skip}")?;
                return Ok(());
            }
        }
    };

    let mut conjugations = if config.voices {
        conjugations
    } else {
        conjugations.without_voices()
    };

    conjugations.retain_scripts(&config.scripts);

    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut o, &conjugations)?;
            writeln!(o)?;
        }
        Format::Text => {
            print_text(&mut o, &conjugations)?;
        }
    }

    Ok(())
}

fn print_text<O>(o: &mut O, conjugations: &Conjugations) -> Result<()>
where
    O: ?Sized + Write,
{
    match conjugations.part_of_speech() {
        Some(pos) => writeln!(o, "{} [{}]", conjugations.word(), pos.ident())?,
        None => writeln!(o, "{}", conjugations.word())?,
    }

    for (script, tree) in conjugations.trees() {
        writeln!(o)?;
        writeln!(o, "# {script}")?;
        print_tree(o, tree, 0)?;
    }

    Ok(())
}

fn print_tree<O>(o: &mut O, tree: &ConjugationTree, depth: usize) -> Result<()>
where
    O: ?Sized + Write,
{
    for (category, node) in tree.iter() {
        let indent = depth * 2;
        let title = category.title();

        match node {
            Node::Form(form) => writeln!(o, "{:indent$}{title}: {form}", "")?,
            Node::Unavailable => writeln!(o, "{:indent$}{title}: {UNAVAILABLE}", "")?,
            Node::Branch(tree) => {
                writeln!(o, "{:indent$}{title}:", "")?;
                print_tree(o, tree, depth + 1)?;
            }
        }
    }

    Ok(())
}
