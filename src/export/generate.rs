use std::fmt;

use crate::companies::CompanyIndex;
use crate::core::ExportError;
use crate::investments::UserHoldings;

/// How field values are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Quoting {
    /// Fields are written verbatim. A comma, quote or newline inside a field corrupts the
    /// line; this is the format the investments service consumes today. (Default)
    #[default]
    Never,
    /// Fields containing a delimiter, quote or newline are quoted and escaped (RFC 4180).
    Necessary,
}

/// What to write when a holding references a company id missing from the index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UnresolvedCompany {
    /// Leave the company field empty. (Default)
    #[default]
    Empty,
    /// Abort generation with [`ExportError::UnresolvedCompany`].
    Fail,
    /// Write the given text instead, e.g. `"UNKNOWN"`.
    Placeholder(String),
}

/// Options for [`generate_holdings_csv_with`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CsvOptions {
    pub quoting: Quoting,
    pub unresolved: UnresolvedCompany,
}

/// One row of the export: `userId,firstName,lastName,date,companyName,value`.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvLine<'a> {
    pub user_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date: &'a str,
    /// The holding's company id, kept for diagnostics. Not written.
    pub company_id: &'a str,
    /// `None` if the id is missing from the index or the company has no name.
    pub company_name: Option<&'a str>,
    /// `investment_total * investment_percentage`.
    pub value: f64,
}

impl fmt::Display for CsvLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.user_id,
            self.first_name,
            self.last_name,
            self.date,
            self.company_name.unwrap_or_default(),
            format_value(self.value)
        )
    }
}

/// Flattens users → holdings into export lines, user order first, then holding order.
pub fn csv_lines<'a>(
    users: &'a [UserHoldings],
    index: &'a CompanyIndex,
) -> impl Iterator<Item = CsvLine<'a>> + 'a {
    users.iter().flat_map(move |user| {
        user.holding_values().map(move |(holding, value)| CsvLine {
            user_id: &user.user_id,
            first_name: &user.first_name,
            last_name: &user.last_name,
            date: &user.date,
            company_id: &holding.id,
            company_name: index.name(&holding.id),
            value,
        })
    })
}

/// Joins `users` against `index` into the export body.
///
/// Lines are separated by `\n` with no trailing newline and no header; no users gives `""`.
/// Unknown company ids produce an empty company field and nothing is quoted.
pub fn generate_holdings_csv(users: &[UserHoldings], index: &CompanyIndex) -> String {
    join_unquoted(csv_lines(users, index))
}

/// [`generate_holdings_csv`] with explicit quoting and unresolved-company handling.
///
/// Under [`Quoting::Never`] the output is written by the same serializer as
/// [`generate_holdings_csv`].
///
/// # Errors
///
/// Returns [`ExportError::UnresolvedCompany`] under [`UnresolvedCompany::Fail`], and
/// [`ExportError::Csv`] if the CSV writer fails.
pub fn generate_holdings_csv_with(
    users: &[UserHoldings],
    index: &CompanyIndex,
    options: &CsvOptions,
) -> Result<String, ExportError> {
    let mut lines = Vec::new();
    for mut line in csv_lines(users, index) {
        // present in the index without a name: not unresolved
        if line.company_name.is_none() && !index.contains(line.company_id) {
            #[cfg(feature = "tracing")]
            tracing::warn!(user_id = line.user_id, company_id = line.company_id, "unresolved company id");

            match &options.unresolved {
                UnresolvedCompany::Empty => {}
                UnresolvedCompany::Placeholder(text) => line.company_name = Some(text.as_str()),
                UnresolvedCompany::Fail => {
                    return Err(ExportError::UnresolvedCompany {
                        user_id: line.user_id.to_string(),
                        company_id: line.company_id.to_string(),
                    });
                }
            }
        }
        lines.push(line);
    }

    match options.quoting {
        Quoting::Never => Ok(join_unquoted(lines)),
        Quoting::Necessary => write_quoted(&lines),
    }
}

fn join_unquoted<'a>(lines: impl IntoIterator<Item = CsvLine<'a>>) -> String {
    let lines: Vec<String> = lines.into_iter().map(|l| l.to_string()).collect();
    lines.join("\n")
}

fn write_quoted(lines: &[CsvLine<'_>]) -> Result<String, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    for line in lines {
        let value = format_value(line.value);
        wtr.write_record([
            line.user_id,
            line.first_name,
            line.last_name,
            line.date,
            line.company_name.unwrap_or_default(),
            value.as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Data(format!("csv flush: {}", e.error())))?;
    let mut out =
        String::from_utf8(bytes).map_err(|e| ExportError::Data(format!("csv output not utf-8: {e}")))?;
    if out.ends_with('\n') {
        out.pop();
    }
    Ok(out)
}

/// Number text as the investments service has always received it: shortest round-trip
/// digits, plain notation for decimal exponents in `-6..21`, otherwise `d.ddde±n`
/// (`1000`, `0.30000000000000004`, `1e+21`, `1.0000000000000001e-7`).
pub(crate) fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "NaN".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    // covers -0
    if v == 0.0 {
        return "0".into();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.2345e-7".
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    // value = 0.digits * 10^n
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", (n - 1).abs())
        }
    };

    if v < 0.0 { format!("-{body}") } else { body }
}
