use std::{io::Read, path::PathBuf};
use clap::{Parser, Subcommand};

use asvocab::{Vocab, VocabType, LD};

mod config;

#[derive(Parser)]
/// decode, normalize and inspect ActivityStreams documents
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// decode a document and print it back normalized
	Decode {
		/// json file to read, or - for stdin
		input: String,
	},

	/// decode a document and describe what was recognized in it
	Inspect {
		/// json file to read, or - for stdin
		input: String,
	},
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = config::Config::load(args.config.as_ref());

	let input = match args.command {
		Mode::Config => {
			println!("{}", toml::to_string_pretty(&config).expect("failed serializing config"));
			return;
		},
		Mode::Decode { ref input } | Mode::Inspect { ref input } => input.clone(),
	};

	let registry = config.decoding.registry();
	let document = read_document(&input);
	let vocab = registry.decode(&document).expect("failed decoding document");

	match args.command {
		Mode::Decode { .. } => {
			let mut out = serde_json::Value::Object(vocab.serialize().expect("failed encoding document"));
			if config.output.emit_context {
				out = out.ld_context(&vocab.jsonld_context());
			}
			let out = if config.output.pretty {
				serde_json::to_string_pretty(&out)
			} else {
				serde_json::to_string(&out)
			};
			println!("{}", out.expect("failed serializing json"));
		},
		Mode::Inspect { .. } => inspect(&vocab),
		Mode::Config => unreachable!(),
	}
}

fn read_document(input: &str) -> serde_json::Value {
	let raw = if input == "-" {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.expect("failed reading stdin");
		buf
	} else {
		std::fs::read_to_string(input).expect("failed reading input file")
	};
	serde_json::from_str(&raw).expect("input is not valid json")
}

fn inspect(vocab: &Vocab) {
	let vocab_type = vocab.vocab_type();
	// Object is not a type on its own here, but it's what most types extend
	let mut names : Vec<&str> = VocabType::ALL.iter().map(|x| x.as_ref()).collect();
	names.push("Object");

	let related = |check: fn(&VocabType, &str) -> bool| -> String {
		let out : Vec<&str> = names.iter().copied().filter(|x| check(&vocab_type, x)).collect();
		if out.is_empty() { "-".to_string() } else { out.join(", ") }
	};

	println!("type: {vocab_type}");
	if !vocab.extra_types().is_empty() {
		println!("also typed: {}", vocab.extra_types().join(", "));
	}
	if !vocab.alias().is_empty() {
		println!("alias: {}", vocab.alias());
	}
	println!("extends: {}", related(VocabType::extends));
	println!("extended by: {}", related(VocabType::is_extended_by));
	println!("disjoint with: {}", related(VocabType::is_disjoint_with));

	println!("namespaces:");
	for (namespace, alias) in vocab.jsonld_context() {
		if alias.is_empty() {
			println!("  {namespace}");
		} else {
			println!("  {namespace} as '{alias}'");
		}
	}

	let unknown = vocab.unknown_properties();
	if unknown.is_empty() {
		println!("unknown properties: -");
	} else {
		let keys : Vec<&str> = unknown.keys().map(String::as_str).collect();
		println!("unknown properties: {}", keys.join(", "));
	}
}
