use std::fmt;

use clap::ValueEnum;
use num_bigint::BigUint;

use crate::Writer;
use crate::aggregate::Summary;
use crate::config::BoardConfig;
use crate::table::RowTable;

/// How exact counts are written into the CSV report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `="digits"`, so spreadsheets keep every digit instead of rounding to
    /// 15 significant figures.
    #[default]
    Spreadsheet,
    /// Bare digits.
    Plain,
}

struct Ways<'a>(&'a BigUint, ReportFormat);

impl fmt::Display for Ways<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            ReportFormat::Spreadsheet => write!(f, "=\"{}\"", self.0),
            ReportFormat::Plain => write!(f, "{}", self.0),
        }
    }
}

/// One line per fence count followed by the total.
pub fn write_summary(config: &BoardConfig, summary: &Summary, format: ReportFormat, out: &mut Writer) {
    out.println(format_args!(
        "For a {}x{} Quoridor board with up to {} fences.",
        config.columns(),
        config.rows(),
        config.max_fences()
    ));
    out.println("Fences,Ways");
    for (fences, ways) in summary.per_fence().iter().enumerate() {
        out.println(format_args!("{},{}", fences, Ways(ways, format)));
    }
    out.println(format_args!("Total,{}", Ways(summary.total(), format)));
}

/// Every nonzero single-row count.
pub fn write_row_table(rows: &RowTable, out: &mut Writer) {
    out.println("Signature,Fences,Ways");
    for (signature, fences, ways) in rows.iter_nonzero() {
        out.println(format_args!("{signature},{fences},{ways}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Solver;
    use crate::row::enumerate_rows;

    fn render(config: BoardConfig, format: ReportFormat) -> String {
        let table = Solver::new(config).compute_final_table().unwrap();
        let mut out = Writer::new();
        write_summary(&config, &Summary::from_table(&table), format, &mut out);
        out.into_string().unwrap()
    }

    #[test]
    fn test_spreadsheet_report() {
        let report = render(BoardConfig::new(1, 1, 2).unwrap(), ReportFormat::Spreadsheet);
        assert_eq!(
            report,
            "For a 1x1 Quoridor board with up to 2 fences.\n\
             Fences,Ways\n\
             0,=\"1\"\n\
             1,=\"2\"\n\
             2,=\"0\"\n\
             Total,=\"3\"\n"
        );
    }

    #[test]
    fn test_plain_report() {
        let report = render(BoardConfig::new(2, 1, 2).unwrap(), ReportFormat::Plain);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[2..], ["0,1", "1,4", "2,3", "Total,8"]);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = BoardConfig::new(4, 3, 6).unwrap();
        assert_eq!(
            render(config, ReportFormat::Spreadsheet),
            render(config, ReportFormat::Spreadsheet)
        );
    }

    #[test]
    fn test_row_table_listing() {
        let mut out = Writer::new();
        write_row_table(&enumerate_rows(1), &mut out);
        assert_eq!(
            out.into_string().unwrap(),
            "Signature,Fences,Ways\n0,0,1\n0,1,1\n1,1,1\n"
        );
    }
}
