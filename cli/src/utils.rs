/// Formats an integer with comma thousands separators: 1234567 -> "1,234,567".
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
