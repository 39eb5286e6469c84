//! Serialization of a timing sequence into an LIRC `RAW_CODES` remote
//! definition. Spacing and row width are contractual: existing consumers
//! parse the output byte for byte.

use crate::ir::types::IrToken;

const MAX_ROW_TOKENS: usize = 5;
const INDENT: &str = "    ";
const ROW_LEAD: &str = "  ";
const TOKEN_SEP: &str = "    ";

/// Accumulates durations into rows of at most [`MAX_ROW_TOKENS`] values,
/// each right-justified to 5 characters. The position counter starts unset
/// and runs continuously across everything pushed.
#[derive(Debug, Default)]
struct RowWriter {
    issued: Option<usize>,
    rows: String,
}

impl RowWriter {
    fn push(&mut self, token: IrToken) {
        match self.issued {
            Some(issued) if issued < MAX_ROW_TOKENS => {
                self.rows.push_str(TOKEN_SEP);
                self.issued = Some(issued + 1);
            }
            issued => {
                if issued.is_some() {
                    self.rows.push('\n');
                }
                self.rows.push_str(INDENT);
                self.rows.push_str(INDENT);
                self.rows.push_str(ROW_LEAD);
                self.issued = Some(1);
            }
        }
        self.rows.push_str(&format!("{:>5}", token.micros()));
    }

    fn into_rows(self) -> String {
        self.rows
    }
}

/// Renders the full remote definition around the wrapped raw-code rows.
pub fn config<T: AsRef<[IrToken]>>(tokens: T) -> String {
    let mut writer = RowWriter::default();
    for token in tokens.as_ref() {
        writer.push(*token);
    }

    format!(
        "begin remote
{i}name  AirCon
{i}flags RAW_CODES
{i}eps 30
{i}aeps 100
{i}gap 0
{i}begin raw_codes
{i}{i}name Control
{rows}
{i}end raw_codes
end remote",
        i = INDENT,
        rows = writer.into_rows()
    )
}
