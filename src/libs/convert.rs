use crate::libs::complex::ComplexSet;
use crate::libs::error::CplxError;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LONG_HEADER: &str = "ProteinID\tComplexMembership";

/// `dir/name.txt` becomes `dir/name_long.txt`
///
/// ```
/// # use cplx::libs::convert::long_file_name;
/// # use std::path::PathBuf;
/// assert_eq!(long_file_name("data/hu2009.txt"), PathBuf::from("data/hu2009_long.txt"));
/// assert_eq!(long_file_name("hu2009"), PathBuf::from("hu2009_long.txt"));
/// ```
pub fn long_file_name(input: &str) -> PathBuf {
    let path = Path::new(input);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    path.with_file_name(format!("{}_long.txt", stem))
}

/// Writes one `member\tlabel` row per membership, after the long header
pub fn write_long(set: &ComplexSet, writer: &mut dyn Write) -> Result<(), CplxError> {
    writeln!(writer, "{}", LONG_HEADER)?;
    for (name, members) in set.iter() {
        for member in members {
            writeln!(writer, "{}\t{}", member, name)?;
        }
    }
    writer.flush()?;

    Ok(())
}

/// Reshapes a short-format table into long format next to the input and
/// returns the new file's path.
pub fn convert_to_long(input: &str) -> Result<PathBuf, CplxError> {
    let set = ComplexSet::from_short_file(input)?;
    let outfile = long_file_name(input);

    let mut writer = crate::writer(&outfile.to_string_lossy())?;
    write_long(&set, &mut writer)?;
    log::info!("Long format file is available: {}", outfile.display());

    Ok(outfile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_long() {
        let set: ComplexSet = vec![("1", "b1234"), ("1", "b1235"), ("2", "b0001")]
            .into_iter()
            .collect();
        let mut buf: Vec<u8> = vec![];
        write_long(&set, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text.lines().next().unwrap(), LONG_HEADER);
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("b1235\t1\n"));
        assert!(text.contains("b0001\t2\n"));
    }

    #[test]
    fn test_round_trip_grouping() {
        let temp = TempDir::new().unwrap();
        let short = temp.path().join("cplx.txt");
        std::fs::copy("tests/cplx/short.tsv", &short).unwrap();

        let long = convert_to_long(&short.to_string_lossy()).unwrap();
        assert_eq!(long, temp.path().join("cplx_long.txt"));

        let original = ComplexSet::from_short_file("tests/cplx/short.tsv").unwrap();
        let reloaded = ComplexSet::from_long_file(&long.to_string_lossy(), "s").unwrap();
        assert_eq!(original.len(), reloaded.len());
        for (name, members) in original.iter() {
            let mut expected = members.clone();
            expected.sort();
            let mut got = reloaded.members(&format!("s_{}", name)).unwrap().clone();
            got.sort();
            assert_eq!(expected, got);
        }
    }

    #[test]
    fn test_label_without_members() {
        let err = convert_to_long("tests/cplx/short_bad.tsv").unwrap_err();
        assert!(matches!(err, CplxError::MalformedInput { line: 3, .. }));
    }
}
