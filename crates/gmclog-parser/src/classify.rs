/// Export-mode markers the device writes into the first value column.
const MODE_MARKERS: [&str; 2] = ["Every Second", "Every Minute"];

/// Resolves which column carries the CPM count for one data row.
///
/// Different firmware export modes put the authoritative count in different
/// columns. The rules are ordered and the first match wins: a mode marker
/// or a decimal number in the first column means the count is in the second
/// column; a plain integer in the first column is the count itself; rows
/// with anything else carry zero counts rather than being rejected.
pub fn classify_cpm(field1: &str, field2: &str) -> i64 {
    let first = field1.trim();
    if MODE_MARKERS.contains(&first) {
        return int_prefix(field2);
    }
    if first.parse::<f64>().is_ok() {
        if first.contains('.') {
            return int_prefix(field2);
        }
        return int_prefix(first);
    }
    0
}

/// Leading optionally-signed digit run of the text, 0 when there is none.
/// Fractional and trailing garbage is truncated, not rejected.
fn int_prefix(value: &str) -> i64 {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let run: String = digits.chars().take_while(char::is_ascii_digit).collect();
    let magnitude = run.parse::<i64>().unwrap_or(0);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}
