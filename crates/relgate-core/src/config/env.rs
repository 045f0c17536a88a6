#[must_use]
pub(super) fn read_non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[must_use]
pub(super) fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_ignores_blank_and_garbage() {
        assert_eq!(parse_f64(Some(" 92.5 ")), Some(92.5));
        assert_eq!(parse_f64(Some("")), None);
        assert_eq!(parse_f64(Some("ninety")), None);
        assert_eq!(parse_f64(None), None);
    }
}
