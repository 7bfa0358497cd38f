mod cli;
mod prompt;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::info;

use ngram_core::{Error, Generator, MAX_ORDER, NGramModel, check_text_file, train};

use crate::cli::Cli;
use crate::prompt::{Arguments, Prompt};

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let cli = Cli::parse();

	match run(&cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("{e}");
			println!("Exiting the program.");
			ExitCode::FAILURE
		}
	}
}

/// Collects and confirms the arguments, builds the model and prints the sentences.
fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
	let stdin = io::stdin();
	let mut prompt = Prompt::new(stdin.lock(), io::stdout());

	let arguments = if cli.is_interactive() {
		prompt.ask_arguments()?
	} else {
		Arguments {
			n: cli.n.unwrap_or_default(),
			sentences: cli.sentences.unwrap_or_default(),
			files: cli.files.clone(),
		}
	};

	if !(1..=MAX_ORDER).contains(&arguments.n) {
		return Err(Error::InvalidOrder(arguments.n).into());
	}
	if arguments.files.is_empty() && cli.model.is_none() {
		return Err("At least one text file is required.".into());
	}
	for file in &arguments.files {
		check_text_file(file)?;
	}
	let config = cli.generation_config();
	config.validate()?;

	if !cli.yes && !prompt.confirm(&arguments)? {
		println!("Exiting the program.");
		return Ok(ExitCode::SUCCESS);
	}
	println!("\nGenerating sentences...\n\n");

	let model = build_model(cli, &arguments)?;
	if let Some(path) = &cli.save {
		model.save(path)?;
		info!("Model saved to {}", path.display());
	}

	let mut generator = Generator::new(model, config)?;
	let mut stdout = io::stdout().lock();
	for _ in 0..arguments.sentences {
		writeln!(stdout, "{}\n", generator.generate_sentence())?;
	}

	Ok(ExitCode::SUCCESS)
}

/// Trains on the corpus, or loads `--model` and adds the corpus to it.
fn build_model(cli: &Cli, arguments: &Arguments) -> ngram_core::Result<NGramModel> {
	let Some(path) = &cli.model else {
		return train(&arguments.files, arguments.n);
	};

	let mut model = NGramModel::load(path)?;
	info!("Loaded a {}-gram model from {}", model.order(), path.display());
	if model.order() != arguments.n {
		return Err(Error::OrderMismatch { expected: model.order(), found: arguments.n });
	}
	if !arguments.files.is_empty() {
		model.merge(&train(&arguments.files, arguments.n)?)?;
	}
	Ok(model)
}
