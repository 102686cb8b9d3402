use std::{fs, io, path::Path};

use eyre::Context;
use log::trace;

/// Read the bibliography file into a string.
///
/// Returns `Ok(None)` when the file does not exist — the caller reports that
/// to the user and the run produces no output. Every other failure is an
/// error.
pub fn read_bibliography(path: &Path) -> eyre::Result<Option<String>> {
    trace!("Reading bibliography from '{}'", path.display());

    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err)
            .wrap_err_with(|| format!("Failed to read the '{}' file", path.display())),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use assert_fs::{fixture::FileWriteStr, NamedTempFile};
    use std::path::PathBuf;

    #[test]
    fn missing_file_is_none_not_an_error() {
        let res = read_bibliography(&PathBuf::from("file does not exist.bib"));

        assert!(matches!(res, Ok(None)));
    }

    #[test]
    fn existing_file_content_is_read() {
        let file = NamedTempFile::new("temp.bib").expect("Cannot create temp file for test");
        file.write_str("@misc{cite, title = {A title},}")
            .expect("Cannot write temp file for test");

        let content = read_bibliography(NamedTempFile::path(&file))
            .expect("readable file")
            .expect("file exists");
        file.close().unwrap();

        assert_eq!("@misc{cite, title = {A title},}", content);
    }
}
