use std::error::Error;
use std::path::Path;

use colored::Colorize;

use taylor::{Series, SeriesError, DEFAULT_TERMS};
use taylor::input::*;

/// Falls back to `default` if the requested field is absent from
/// the input, but not if it is present and malformed.
fn or_default<T>(result: Result<T, InputError>, default: T) -> Result<T, InputError> {
    match result {
        Err(e) if e.kind() == InputErrorKind::Location => Ok(default),
        other => other,
    }
}

/// Every combination of series, expansion point and number of terms
/// requested by the input file.
struct Table {
    functions: Vec<Series>,
    xs: Vec<f64>,
    terms: Vec<i64>,
    reference: bool,
}

/// A single row of the table.
struct Row {
    function: Series,
    x: f64,
    n: i64,
    result: Result<f64, SeriesError>,
}

impl Table {
    fn from_config(input: &Config) -> Result<Self, InputError> {
        let functions: Vec<Series> = input.read("series:function")?;
        let xs: Vec<f64> = input.read_loop("series:x")?;
        let terms: Vec<i64> = or_default(input.read_loop("series:terms"), vec![DEFAULT_TERMS])?;
        let reference: bool = or_default(input.read("output:reference"), true)?;

        Ok(Table { functions, xs, terms, reference })
    }

    /// Evaluates every row, whether or not the ones before it failed.
    fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::with_capacity(self.functions.len() * self.xs.len() * self.terms.len());
        for &function in self.functions.iter() {
            for &x in self.xs.iter() {
                for &n in self.terms.iter() {
                    let result = function.evaluate(x, n);
                    rows.push(Row { function, x, n, result });
                }
            }
        }
        rows
    }
}

impl Row {
    fn print(&self, reference: bool) {
        let sum = match &self.result {
            Ok(sum) => *sum,
            Err(e) => {
                eprintln!("{} {}(x = {:.6e}, n = {}): {}", "Failed".bold().red(), self.function, self.x, self.n, e);
                return;
            }
        };

        if reference {
            let exact = self.function.reference(self.x);
            println!(
                "{:<12} {:>14.6e} {:>5} {:>14.6e} {:>14.6e} {:>11.3e}",
                self.function.to_string(), self.x, self.n, sum, exact, (sum - exact).abs()
            );
        } else {
            println!("{:<12} {:>14.6e} {:>5} {:>14.6e}", self.function.to_string(), self.x, self.n, sum);
        }
    }
}

/// Process exit status given the evaluated rows: non-zero if any failed.
fn exit_code(rows: &[Row]) -> i32 {
    if rows.iter().any(|row| row.result.is_err()) { 1 } else { 0 }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).ok_or(InputError::Usage)?;

    let mut input = Config::from_file(Path::new(path))?;
    input.with_context("constants")?;
    let table = Table::from_config(&input)?;

    println!("{} truncated Taylor series from {}...", "Evaluating".bold().cyan(), path.bold().blue());

    if table.reference {
        println!("{:<12} {:>14} {:>5} {:>14} {:>14} {:>11}", "function", "x", "n", "partial sum", "reference", "abs. error");
    } else {
        println!("{:<12} {:>14} {:>5} {:>14}", "function", "x", "n", "partial sum");
    }

    let rows = table.rows();
    for row in rows.iter() {
        row.print(table.reference);
    }

    let failures = rows.iter().filter(|row| row.result.is_err()).count();
    if failures > 0 {
        eprintln!("{} {} of {} evaluations failed.", "Error:".bold().red(), failures, rows.len());
        std::process::exit(exit_code(&rows));
    }

    println!("{} {} evaluations.", "Completed".bold().bright_green(), rows.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> Result<Table, InputError> {
        let mut input = Config::from_string(text)?;
        input.with_context("constants")?;
        Table::from_config(&input)
    }

    #[test]
    fn default_terms() {
        let text = "---
        series:
          function: sin
          x: 0.5
        ";
        let table = table(text).unwrap();
        assert_eq!(table.terms, vec![DEFAULT_TERMS]);
        assert!(table.reference);

        let rows = table.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].n, 10);
        assert_eq!(rows[0].result, taylor::sine(0.5, 10));
        assert_eq!(exit_code(&rows), 0);
    }

    #[test]
    fn malformed_terms() {
        let text = "---
        series:
          function: sin
          x: 0.5
          terms: ten
        ";
        let err = table(text).err().map(|e| e.kind());
        assert_eq!(err, Some(InputErrorKind::Conversion));

        let text = "---
        series:
          function: sin
          x: 0.5
        output:
          reference: maybe
        ";
        let err = table(text).err().map(|e| e.kind());
        assert_eq!(err, Some(InputErrorKind::Conversion));
    }

    #[test]
    fn failed_rows() {
        let text = "---
        constants:
          theta: pi / 4
        series:
          function: [sine, cosine]
          x: [0.0, theta]
          terms: [-2, 6]
        output:
          reference: false
        ";
        let table = table(text).unwrap();
        assert!(!table.reference);

        let rows = table.rows();
        assert_eq!(rows.len(), 8);

        // a failure does not stop the rows that follow it
        let failed: Vec<i64> = rows.iter().filter(|r| r.result.is_err()).map(|r| r.n).collect();
        assert_eq!(failed, vec![-2; 4]);
        for row in rows.iter().filter(|r| r.n == 6) {
            assert_eq!(row.result, row.function.evaluate(row.x, 6));
        }
        assert_eq!(rows[0].result, Err(SeriesError::InvalidTerms(-2)));
        assert_eq!(rows[7].function, Series::Cosine);
        assert_eq!(rows[7].result, taylor::cosine(std::f64::consts::FRAC_PI_4, 6));

        assert_eq!(exit_code(&rows), 1);
    }
}
