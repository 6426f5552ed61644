use crate::libs::error::CplxError;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Opens a table for reading. `stdin` reads standard input, `.gz` files are
/// decompressed on the fly.
///
/// ```
/// use std::io::BufRead;
/// let reader = cplx::reader("tests/cplx/exp.tsv").unwrap();
/// assert_eq!(reader.lines().count(), 6);
///
/// let missing = cplx::reader("tests/cplx/no_such_file.tsv");
/// assert!(missing.is_err());
/// ```
pub fn reader(input: &str) -> Result<Box<dyn BufRead>, CplxError> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        if !path.is_file() {
            return Err(CplxError::NotFound {
                path: input.to_string(),
            });
        }
        let file = std::fs::File::open(path)?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> Result<Box<dyn Write>, CplxError> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output)?))
    };

    Ok(writer)
}

/// Iterates over the data rows of a table, skipping the header line and
/// blank lines. Yields the 1-based line number with the whitespace-split
/// fields.
pub fn data_rows(
    input: &str,
) -> Result<impl Iterator<Item = Result<(usize, Vec<String>), CplxError>>, CplxError> {
    let reader = reader(input)?;
    let path = input.to_string();

    Ok(reader
        .lines()
        .enumerate()
        .skip(1)
        .filter_map(move |(idx, line)| match line {
            Err(e) => Some(Err(CplxError::malformed(&path, idx + 1, e.to_string()))),
            Ok(line) => {
                let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
                if fields.is_empty() {
                    None
                } else {
                    Some(Ok((idx + 1, fields)))
                }
            }
        }))
}

/// Whether two inputs name the same file. Paths are compared after
/// canonicalization, so `a.tsv` and `./a.tsv` match; `stdin` and paths that
/// cannot be resolved are compared as written.
///
/// ```
/// assert!(cplx::same_file("tests/cplx/exp.tsv", "./tests/cplx/exp.tsv"));
/// assert!(!cplx::same_file("tests/cplx/exp.tsv", "tests/cplx/model.tsv"));
/// assert!(cplx::same_file("stdin", "stdin"));
/// ```
pub fn same_file(a: &str, b: &str) -> bool {
    let resolve = |input: &str| {
        if input == "stdin" {
            return std::path::PathBuf::from(input);
        }
        std::fs::canonicalize(input).unwrap_or_else(|_| std::path::PathBuf::from(input))
    };

    resolve(a) == resolve(b)
}
