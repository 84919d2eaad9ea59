use std::fmt;

/// Signed monetary amount: profit when positive, loss when negative.
/// Kept as a float so that totals accumulate exactly the way the input
/// figures are summed, in input order.
pub type Amount = f64;

/// Renders an amount as a currency string for reports.
pub trait CurrencyFormatter {
    fn format(&self, amount: Amount) -> String;
}

/// US-dollar style formatting: `$1,234.56`, `-$1,234.56`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsDollar;

impl CurrencyFormatter for UsDollar {
    fn format(&self, amount: Amount) -> String {
        format_currency(amount)
    }
}

/// Format an amount as US dollars, rounded to the cent.
/// Example: 1234.5 -> "$1,234.50", -867884.0 -> "-$867,884.00"
pub fn format_currency(amount: Amount) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (units, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // Amounts that round to zero never carry a sign
    let rounds_to_zero = fixed.bytes().all(|b| matches!(b, b'0' | b'.'));
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };

    format!("{}${}.{}", sign, group_thousands(units), cents)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Parse a decimal string into an amount.
/// Example: "867884" -> 867884.0, "-1196225.5" -> -1196225.5
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let amount: Amount = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;

    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotFinite,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
