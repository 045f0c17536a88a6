pub(super) fn parse_non_negative_f64(raw: &str) -> std::result::Result<f64, String> {
    let value = raw
        .parse::<f64>()
        .map_err(|_| format!("invalid float value '{raw}'"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("value must be finite and >= 0, got {value}"));
    }
    Ok(value)
}
