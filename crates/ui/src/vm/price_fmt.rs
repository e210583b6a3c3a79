/// Price in minor units as a display label; zero is "Free".
#[must_use]
pub fn format_price(minor: u64, currency: &str) -> String {
    if minor == 0 {
        return "Free".to_string();
    }
    let symbol = match currency {
        "INR" => "₹",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };
    let major = minor / 100;
    let cents = minor % 100;
    if symbol.is_empty() {
        format!("{major}.{cents:02} {currency}")
    } else {
        format!("{symbol}{major}.{cents:02}")
    }
}
