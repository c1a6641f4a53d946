use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::state::Curves;

// ---------------------------------------------------------------------------
// CSV export of the computed curves
// ---------------------------------------------------------------------------

/// Write the curves to `path` as CSV with columns
/// `position_m, single_slit, double_slit`.
pub fn export_csv(path: &Path, curves: &Curves) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_curves(file, curves).context("writing CSV")
}

fn write_curves<W: Write>(writer: W, curves: &Curves) -> Result<()> {
    if curves.single.len() != curves.positions.len() || curves.double.len() != curves.positions.len()
    {
        bail!(
            "curve lengths disagree: {} positions, {} single, {} double",
            curves.positions.len(),
            curves.single.len(),
            curves.double.len()
        );
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["position_m", "single_slit", "double_slit"])?;

    for ((&x, &s), &d) in curves
        .positions
        .iter()
        .zip(curves.single.iter())
        .zip(curves.double.iter())
    {
        csv_writer.write_record([x.to_string(), s.to_string(), d.to_string()])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_one_row_per_sample() {
        let curves = Curves {
            positions: vec![-0.01, 0.0, 0.01],
            single: vec![0.5, 1.0, 0.5],
            double: vec![0.25, 1.0, 0.25],
        };
        let mut buf = Vec::new();
        write_curves(&mut buf, &curves).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "position_m,single_slit,double_slit");
        assert_eq!(lines[2], "0,1,1");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let curves = Curves {
            positions: vec![0.0, 0.01],
            single: vec![1.0],
            double: vec![1.0, 0.5],
        };
        let mut buf = Vec::new();
        assert!(write_curves(&mut buf, &curves).is_err());
    }
}
