//! Brazilian Real formatting with a fixed pt-BR layout.
//!
//! Output matches the browser's `pt-BR`/`BRL` currency format byte for byte,
//! including the no-break space after the symbol, and never consults the
//! host locale.

pub const CURRENCY_SYMBOL: &str = "R$";

/// Space between symbol and amount (U+00A0), as emitted by pt-BR formatters.
pub const SYMBOL_SPACE: char = '\u{a0}';

/// Formats `value` as `R$ 1.234.567,89`.
pub fn format_brl(value: f64) -> String {
    if value.is_nan() {
        return format!("{CURRENCY_SYMBOL}{SYMBOL_SPACE}NaN");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_SYMBOL}{SYMBOL_SPACE}∞");
    }

    let (whole, fraction) = round_to_cents(&value.abs().to_string());

    // Sign follows the input, so -0.001 renders as "-R$ 0,00" like pt-BR Intl
    let sign = if value.is_sign_negative() { "-" } else { "" };

    format!(
        "{sign}{CURRENCY_SYMBOL}{SYMBOL_SPACE}{},{fraction}",
        group_thousands(&whole)
    )
}

/// Rounds the shortest round-trip decimal form of a non-negative amount to
/// two places, half away from zero. Works on digits so 1.005 becomes 1,01
/// instead of following the binary value down to 1,00.
fn round_to_cents(repr: &str) -> (String, String) {
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (render(&digits[..split]), render(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
