use std::{io, process::ExitCode};

use clap::{Command, Arg, ArgAction, ArgMatches};
use log::{info, debug, error};
use serde::Serialize;
use stemmed_set::{fs_helpers, StemmedSet, Stemmer, PorterStemmer, Lowercase, CachedStemmer};

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Words(Vec<String>),
    Found(bool),
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        },
    }
}

fn cli() -> Command {
    let query_words = || Arg::new("words")
        .required(true)
        .num_args(1..)
        .action(ArgAction::Append);

    Command::new("stemmed-set")
        .about("Membership and intersection tests over words compared by their stems")
        .subcommand_required(true)
        .arg(Arg::new("words-file")
            .short('w')
            .long("words")
            .global(true)
            .action(ArgAction::Append)
            .help("File to read the set's words from"))
        .arg(Arg::new("word")
            .short('W')
            .long("word")
            .global(true)
            .action(ArgAction::Append)
            .help("Word to add to the set"))
        .arg(Arg::new("lowercase")
            .long("lowercase")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Lowercase words before stemming"))
        .arg(Arg::new("cache")
            .long("cache")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Memoize computed stems"))
        .arg(Arg::new("format")
            .short('f')
            .long("format")
            .global(true)
            .value_parser(["yaml", "json", "text"])
            .default_value("yaml"))
        .subcommand(Command::new("list")
            .about("Print the representative word of every stem class"))
        .subcommand(Command::new("contains")
            .about("Check whether a word shares a stem with the set")
            .arg(Arg::new("query").required(true)))
        .subcommand(Command::new("intersect")
            .about("Print the set's words whose stems occur among the given words")
            .arg(query_words()))
        .subcommand(Command::new("reverse-intersect")
            .about("Print the given words whose stems occur in the set")
            .arg(query_words()))
}

fn run(matches: &ArgMatches) -> io::Result<()> {
    let set = build_set(matches);
    info!("set constructed: {} stem classes", set.len());
    debug!("{}", set);

    let output = match matches.subcommand() {
        Some(("list", _)) => Output::Words(set.iter().map(|w| w.to_owned()).collect()),
        Some(("contains", sub)) => {
            let word = required(sub, "query")?;
            Output::Found(set.contains(word))
        },
        Some(("intersect", sub)) => Output::Words(sorted(set.intersect(query_words(sub)))),
        Some(("reverse-intersect", sub)) => Output::Words(sorted(set.reverse_intersect(query_words(sub)))),
        _ => unreachable!("clap rejects a missing or unknown subcommand"),
    };

    let format = matches.get_one::<String>("format").map(String::as_str).unwrap_or("yaml");
    println!("{}", render(&output, format)?);
    Ok(())
}

fn build_set(matches: &ArgMatches) -> StemmedSet<Box<dyn Stemmer>> {
    let mut stemmer: Box<dyn Stemmer> = Box::new(PorterStemmer::new());
    if matches.get_flag("lowercase") {
        stemmer = Box::new(Lowercase(stemmer));
    }
    if matches.get_flag("cache") {
        stemmer = Box::new(CachedStemmer::new(stemmer));
    }

    let mut words = vec![];
    if let Some(files) = matches.get_many::<String>("words-file") {
        info!("Reading words from provided files");
        let files = fs_helpers::existing_files(files);
        info!("{} files found", files.len());
        words.extend(fs_helpers::words_from_files(files));
    }
    if let Some(inline) = matches.get_many::<String>("word") {
        words.extend(inline.cloned());
    }

    StemmedSet::with_stemmer(words, stemmer)
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> io::Result<&'a str> {
    matches.get_one::<String>(id)
        .map(String::as_str)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("`{}` is required", id)))
}

fn query_words(matches: &ArgMatches) -> Vec<String> {
    matches.get_many::<String>("words")
        .map(|words| words.cloned().collect())
        .unwrap_or_default()
}

fn sorted(words: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort();
    words
}

fn render(output: &Output, format: &str) -> io::Result<String> {
    match format {
        "json" => Ok(serde_json::to_string(output)?),
        "yaml" => serde_yaml::to_string(output)
            .map(|s| s.trim_end().to_owned())
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err)),
        _ => Ok(match output {
            Output::Words(words) => words.join("\n"),
            Output::Found(found) => found.to_string(),
        }),
    }
}
