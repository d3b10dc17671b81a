use std::str::FromStr;

use clap::{App, Arg};
use snips_nlu_dataset::{
    load_builtin_entity_examples, Dataset, HashMapBuiltinEntityExamples, Language,
};

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let matches = App::new("snips-nlu-generate-dataset")
        .about("Generates a Snips NLU json dataset from YAML intents and entities files")
        .arg(
            Arg::with_name("LANGUAGE")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("language of the dataset, e.g. 'en'"),
        )
        .arg(
            Arg::with_name("FILES")
                .required(true)
                .multiple(true)
                .index(2)
                .help("YAML files containing intents and entities"),
        )
        .arg(
            Arg::with_name("builtin_examples")
                .short("b")
                .long("--builtin-examples")
                .takes_value(true)
                .help("json file containing examples of builtin entities"),
        )
        .get_matches();

    let language = Language::from_str(matches.value_of("LANGUAGE").unwrap()).unwrap();
    let files: Vec<&str> = matches.values_of("FILES").unwrap().collect();
    let builtin_examples = matches
        .value_of("builtin_examples")
        .map(|path| load_builtin_entity_examples(path).unwrap())
        .unwrap_or_else(HashMapBuiltinEntityExamples::default);

    let dataset = Dataset::from_yaml_files(language, &files, &builtin_examples).unwrap();
    let dataset_json = serde_json::to_string_pretty(&dataset.json()).unwrap();
    println!("{}", dataset_json);
}
