use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::{BANNER, USAGE};

/// Run arguments once collected from the command line or from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
	pub n: usize,
	pub sentences: usize,
	pub files: Vec<PathBuf>,
}

/// Question/answer exchange over any reader and writer.
pub struct Prompt<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	/// Prints `question` and returns the next line, without its line ending.
	///
	/// End of input reads as an empty answer.
	fn ask(&mut self, question: &str) -> io::Result<String> {
		write!(self.output, "{question}")?;
		self.output.flush()?;
		let mut line = String::new();
		self.input.read_line(&mut line)?;
		Ok(line.trim_end_matches(['\r', '\n']).to_owned())
	}

	/// Asks for N, M and the corpus files.
	pub fn ask_arguments(&mut self) -> io::Result<Arguments> {
		writeln!(self.output, "\n{BANNER}\n")?;
		writeln!(self.output, "{USAGE}\n")?;

		let n = self.ask_integer("Please enter an integer for the size of your ngrams: ")?;
		let sentences =
			self.ask_integer("Please enter an integer for how many sentences you would like to generate: ")?;
		let files = self
			.ask("Please enter the text files you would like to use, separated by a space: ")?
			.split_whitespace()
			.map(PathBuf::from)
			.collect();

		Ok(Arguments { n, sentences, files })
	}

	fn ask_integer(&mut self, question: &str) -> io::Result<usize> {
		let answer = self.ask(question)?;
		answer.trim().parse::<usize>().map_err(|_| {
			io::Error::new(io::ErrorKind::InvalidInput, "The first two arguments must be integers.")
		})
	}

	/// Shows the arguments and returns true only if the user answers `y`.
	pub fn confirm(&mut self, arguments: &Arguments) -> io::Result<bool> {
		writeln!(self.output, "\nPlease confirm your entered arguments below:\n")?;
		writeln!(self.output, "Size of ngrams: {}\n", arguments.n)?;
		writeln!(self.output, "Number of sentences to generate: {}\n", arguments.sentences)?;
		writeln!(self.output, "Corpus of text files: {}\n", file_list(&arguments.files))?;

		let answer = self.ask("Please enter 'y' if these arguments are correct. Else, the program will exit.\n")?;
		Ok(answer.trim().eq_ignore_ascii_case("y"))
	}
}

/// Formats paths as `['a.txt', 'b.txt']`.
pub fn file_list<P: AsRef<Path>>(files: &[P]) -> String {
	let quoted: Vec<String> = files
		.iter()
		.map(|f| format!("'{}'", f.as_ref().display()))
		.collect();
	format!("[{}]", quoted.join(", "))
}
