/// Two-decimal scientific notation with a signed exponent, e.g. `1.75e+11`.
///
/// Display only. Filtering compares the raw integer.
pub fn format_parameters(parameters: u64) -> String {
    let formatted = format!("{:.2e}", parameters as f64);
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}
