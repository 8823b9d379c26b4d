use std::fmt::Display;

/// Render a number with `,` between groups of three digits.
///
/// Works for anything whose `Display` output is a plain run of ASCII digits,
/// which covers the primitive unsigned integers and `BigUint`.
pub fn group_thousands(value: impl Display) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
