use rust_decimal::Decimal;

/// Render a total the way the shop's clients read it
///
/// Whole amounts keep one fractional digit (`405.0`), other amounts print
/// without trailing zeros (`25.5`).
pub fn format_price(total: &Decimal) -> String {
    let total = total.normalize();
    if total.scale() == 0 {
        format!("{}.0", total)
    } else {
        total.to_string()
    }
}
