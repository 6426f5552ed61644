use crate::libs::conserve::Comparison;
use crate::libs::error::CplxError;
use crate::libs::ortholog::PresenceMatrix;
use itertools::Itertools;
use std::io::Write;

/// Conservation table with columns `<set>_Complex`, `MaxComplexCon`, `SetCon`
///
/// ```
/// # use cplx::libs::complex::ComplexSet;
/// # use cplx::libs::conserve::compare;
/// # use cplx::libs::report::write_conservation;
/// let exp: ComplexSet = vec![("hu_A", "P1"), ("hu_A", "P2")].into_iter().collect();
/// let model: ComplexSet = vec![("cyc_X", "P1"), ("cyc_X", "P2"), ("cyc_X", "P4")]
///     .into_iter()
///     .collect();
/// let comparison = compare(&exp, &model).unwrap();
///
/// let mut buf: Vec<u8> = vec![];
/// write_conservation(&mut buf, "hu", &comparison).unwrap();
/// assert_eq!(
///     String::from_utf8(buf).unwrap(),
///     "hu_Complex\tMaxComplexCon\tSetCon\nhu_A\t0.6667\t1.0000\n"
/// );
/// ```
pub fn write_conservation(
    writer: &mut dyn Write,
    set_name: &str,
    comparison: &Comparison,
) -> Result<(), CplxError> {
    writeln!(writer, "{}_Complex\tMaxComplexCon\tSetCon", set_name)?;
    for (name, record) in &comparison.records {
        writeln!(
            writer,
            "{}\t{:.4}\t{:.4}",
            name, record.max_complex_overlap, record.set_coverage
        )?;
    }
    writer.flush()?;

    Ok(())
}

/// 0/1 matrix. The header starts with `corner` followed by every column label.
/// Without columns, only the labels are written.
pub fn write_matrix(
    writer: &mut dyn Write,
    corner: &str,
    matrix: &PresenceMatrix,
) -> Result<(), CplxError> {
    let columns = matrix.columns();
    let mut header = vec![corner.to_string()];
    header.extend(columns.iter().cloned());
    writeln!(writer, "{}", header.join("\t"))?;

    for (row, cells) in matrix.rows() {
        let values = columns
            .iter()
            .map(|col| if cells.contains(col) { "1" } else { "0" });
        writeln!(writer, "{}", std::iter::once(row.as_str()).chain(values).join("\t"))?;
    }
    writer.flush()?;

    Ok(())
}

/// One identifier per line
pub fn write_list<'a, I>(writer: &mut dyn Write, items: I) -> Result<(), CplxError>
where
    I: IntoIterator<Item = &'a String>,
{
    for item in items {
        writeln!(writer, "{}", item)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_write_matrix() {
        let columns: BTreeSet<String> = ["562", "9606"].iter().map(|s| s.to_string()).collect();
        let mut matrix = PresenceMatrix::new(columns);
        matrix.extend_row("OG1", ["9606".to_string()].iter());
        matrix.extend_row("OG2", std::iter::empty());

        let mut buf: Vec<u8> = vec![];
        write_matrix(&mut buf, "OG", &matrix).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "OG\t562\t9606\nOG1\t0\t1\nOG2\t0\t0\n"
        );
    }

    #[test]
    fn test_write_matrix_no_columns() {
        let mut matrix = PresenceMatrix::new(BTreeSet::new());
        matrix.extend_row("P1", std::iter::empty());
        matrix.extend_row("P2", std::iter::empty());

        let mut buf: Vec<u8> = vec![];
        write_matrix(&mut buf, "OG", &matrix).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "OG\nP1\nP2\n");
    }

    #[test]
    fn test_write_conservation_skips_invalid() {
        let mut comparison = Comparison::default();
        comparison.invalid.push("hu_E".to_string());

        let mut buf: Vec<u8> = vec![];
        write_conservation(&mut buf, "hu", &comparison).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
