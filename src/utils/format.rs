/// Format a count with thousands separator (e.g., 1,234,567)
pub fn format_count_with_separator(count: u32) -> String {
    let digits = count.to_string();
    let mut result = String::new();

    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Stat line shown on project cards, e.g. "124 likes"
pub fn format_stat(count: u32, noun: &str) -> String {
    format!("{} {}", format_count_with_separator(count), noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(format_count_with_separator(0), "0");
        assert_eq!(format_count_with_separator(999), "999");
        assert_eq!(format_count_with_separator(1000), "1,000");
        assert_eq!(format_count_with_separator(1234567), "1,234,567");
    }

    #[test]
    fn test_stat() {
        assert_eq!(format_stat(124, "likes"), "124 likes");
        assert_eq!(format_stat(18, "comments"), "18 comments");
        assert_eq!(format_stat(1, "likes"), "1 likes");
    }
}
