mod contribution;
mod expense;

pub use contribution::*;
pub use expense::*;

/// Byte-order mark prepended to every export so spreadsheet tools pick up
/// the UTF-8 encoding.
pub const BOM: char = '\u{feff}';

trait ToCsv {
    fn header() -> &'static [&'static str];
    fn to_row(&self) -> Vec<String>;
}

pub trait VecToCsv {
    fn to_csv(&self) -> String;
}

impl<T> VecToCsv for Vec<T>
where
    T: ToCsv,
{
    fn to_csv(&self) -> String {
        let header: Vec<String> = T::header().iter().map(|h| h.to_string()).collect();
        let rows = std::iter::once(header).chain(self.iter().map(|item| item.to_row()));
        csv_document(rows)
    }
}

/// Joins rows of cells into a BOM-prefixed CSV document. A field is quoted
/// (with internal quotes doubled) if and only if it contains a comma, a
/// quote, or a newline; rows are joined by `\n`.
pub fn csv_document<I>(rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut csv = BOM.to_string();
    let mut first = true;
    for row in rows {
        if !first {
            csv.push('\n');
        }
        first = false;

        let line: Vec<String> = row.iter().map(|cell| format_csv_value(cell)).collect();
        csv.push_str(&line.join(","));
    }
    csv
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        return format!("\"{}\"", s.replace('"', "\"\""));
    }

    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn quotes_only_where_needed_and_doubles_inner_quotes() {
        let csv = csv_document(vec![row(&["a,b", "c"]), row(&["d\"e", "f"])]);

        assert_eq!(csv, "\u{feff}\"a,b\",c\n\"d\"\"e\",f");
    }

    #[test]
    fn plain_fields_stay_unquoted() {
        let csv = csv_document(vec![row(&["2026-08-01", "12.50", "Groceries"])]);
        assert_eq!(csv, "\u{feff}2026-08-01,12.50,Groceries");
    }

    #[test]
    fn newline_in_field_is_quoted() {
        let csv = csv_document(vec![row(&["line1\nline2"])]);
        assert_eq!(csv, "\u{feff}\"line1\nline2\"");
    }

    #[test]
    fn empty_input_is_just_the_bom() {
        let csv = csv_document(Vec::<Vec<String>>::new());
        assert_eq!(csv, "\u{feff}");
    }
}
