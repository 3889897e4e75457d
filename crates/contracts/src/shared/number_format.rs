//! Утилиты форматирования чисел для счётчиков статистики

/// Форматирует целое число, вставляя `separator` между группами из трёх цифр
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_grouped;
/// assert_eq!(format_grouped(1234567, ','), "1,234,567");
/// ```
pub fn format_grouped(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();

    // Вставляем разделитель каждые 3 цифры с конца
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

/// Формат счётчиков на сайте: английская группировка запятыми
pub fn format_count(value: i64) -> String {
    format_grouped(value, ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(-1234), "-1,234");
    }

    #[test]
    fn test_format_grouped_custom_separator() {
        assert_eq!(format_grouped(5000000, ' '), "5 000 000");
        assert_eq!(format_grouped(i64::MIN, ','), "-9,223,372,036,854,775,808");
    }
}
