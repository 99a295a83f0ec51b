pub struct FileSizeUtils;

impl FileSizeUtils {
    /// Base-1024 size with at most two decimals, e.g. `1.5 KB`, `0 Bytes`.
    pub fn format_size(size: u64) -> String {
        const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
        if size == 0 {
            return "0 Bytes".to_string();
        }

        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        let rounded = format!("{:.2}", size);
        let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
        format!("{} {}", trimmed, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::FileSizeUtils;

    #[test]
    fn formats_common_sizes() {
        assert_eq!(FileSizeUtils::format_size(0), "0 Bytes");
        assert_eq!(FileSizeUtils::format_size(1), "1 Bytes");
        assert_eq!(FileSizeUtils::format_size(1000), "1000 Bytes");
        assert_eq!(FileSizeUtils::format_size(1024), "1 KB");
        assert_eq!(FileSizeUtils::format_size(1536), "1.5 KB");
        assert_eq!(FileSizeUtils::format_size(10 * 1024 * 1024), "10 MB");
        assert_eq!(FileSizeUtils::format_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn caps_at_gigabytes() {
        assert_eq!(FileSizeUtils::format_size(1024_u64.pow(4)), "1024 GB");
    }
}
