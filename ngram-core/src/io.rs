use std::fs;
use std::path::Path;

use log::warn;

use crate::error::{Error, Result};

/// Checks that a corpus path names an existing `.txt` file.
///
/// The extension is checked first, so `notes.md` is rejected even if it exists.
pub fn check_text_file<P: AsRef<Path>>(path: P) -> Result<()> {
	let path = path.as_ref();
	let is_txt = path
		.to_str()
		.map(|s| s.ends_with(".txt"))
		.unwrap_or(false);
	if !is_txt {
		return Err(Error::NotTextFile(path.to_owned()));
	}
	if !path.is_file() {
		return Err(Error::FileNotFound(path.to_owned()));
	}
	Ok(())
}

/// Reads a whole text file into memory.
///
/// - Invalid UTF-8 sequences are replaced with `U+FFFD` rather than failing
/// - Read failures carry the offending path
pub(crate) fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	let bytes = fs::read(path).map_err(|source| Error::Read { path: path.to_owned(), source })?;
	match String::from_utf8(bytes) {
		Ok(text) => Ok(text),
		Err(e) => {
			warn!("'{}' is not valid UTF-8, decoding lossily", path.display());
			Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
		}
	}
}

/// Reads a file as raw bytes.
pub(crate) fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
	let path = path.as_ref();
	fs::read(path).map_err(|source| Error::Read { path: path.to_owned(), source })
}

/// Writes raw bytes, replacing the file if it exists.
pub(crate) fn write_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
	let path = path.as_ref();
	fs::write(path, bytes).map_err(|source| Error::Write { path: path.to_owned(), source })
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn rejects_wrong_extension_before_existence() {
		let err = check_text_file("missing.md").unwrap_err();
		assert_eq!(err.to_string(), "Error: 'missing.md' is not a valid .txt file.");
	}

	#[test]
	fn rejects_missing_txt() {
		let err = check_text_file("nowhere/missing.txt").unwrap_err();
		assert_eq!(err.to_string(), "Error: 'nowhere/missing.txt' not found.");
	}

	#[test]
	fn rejects_directory_named_txt() {
		let dir = TempDir::new().unwrap();
		let sub = dir.path().join("folder.txt");
		fs::create_dir(&sub).unwrap();
		assert!(matches!(check_text_file(&sub), Err(Error::FileNotFound(_))));
	}

	#[test]
	fn write_failure_names_the_file() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("no_such_dir").join("model.bin");
		let err = write_bytes(&path, b"data").unwrap_err();
		match &err {
			Error::Write { path: failed, .. } => assert_eq!(failed, &path),
			other => panic!("unexpected error: {other:?}"),
		}
		assert!(err.to_string().contains("model.bin"));
	}

	#[test]
	fn reads_invalid_utf8_lossily() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("latin1.txt");
		fs::write(&path, b"caf\xe9 ok.").unwrap();
		check_text_file(&path).unwrap();
		let text = read_text_file(&path).unwrap();
		assert_eq!(text, "caf\u{FFFD} ok.");
	}
}
