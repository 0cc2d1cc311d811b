// Formatting utilities

use poise::serenity_prelude as serenity;

/// Format a number with pt-BR thousands separators (1.234.567)
pub fn format_number(n: u32) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(*c);
    }

    result
}

/// Text progress bar, e.g. `▰▰▰▱▱▱▱▱▱▱ 30%`
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!(
        "{}{} {}%",
        "▰".repeat(filled),
        "▱".repeat(width - filled),
        percent
    )
}

/// Truncate string to max chars with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape user-provided text before it goes into embed markdown
pub fn escape_markdown(s: &str) -> String {
    serenity::MessageBuilder::new().push_safe(s).build()
}

/// Medal for the top three ranks
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1000000), "1.000.000");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(0), "0");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "▱▱▱▱▱▱▱▱▱▱ 0%");
        assert_eq!(progress_bar(50, 10), "▰▰▰▰▰▱▱▱▱▱ 50%");
        assert_eq!(progress_bar(100, 10), "▰▰▰▰▰▰▰▰▰▰ 100%");
        assert_eq!(progress_bar(250, 4), "▰▰▰▰ 100%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("Célula Betel", 9), "Célula...");
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("Maria Souza"), "Maria Souza");
        assert_eq!(escape_markdown("**x**"), "\\*\\*x\\*\\*");
        assert_eq!(escape_markdown("_x_"), "\\_x\\_");
        assert!(!escape_markdown("@everyone").contains("@everyone"));
    }

    #[test]
    fn test_rank_label() {
        assert_eq!(rank_label(1), "🥇");
        assert_eq!(rank_label(4), "#4");
    }
}
