use std::{fs, io};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub(crate) fn file_to_vec(filename: String) -> io::Result<Vec<String>> {
    let file_in = fs::File::open(filename)?;
    let file_reader = BufReader::new(file_in);
    Ok(file_reader.lines().filter_map(io::Result::ok).collect())
}

/// Non-recursive listing of the first `limit` regular files in `dir`, in
/// directory order.
pub(crate) fn list_files(dir: &Path, limit: usize) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.truncate(limit);
    Ok(files)
}
