// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// 导入行级错误文本为固定英文，不经过此模块
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 规范化语言代码
///
/// 大小写与分隔符（`-`/`_`）不敏感，地区可省略:
/// "EN"、"en_US" → "en"；"zh"、"zh_cn"、"ZH-CN" → "zh-CN"
///
/// # 返回
/// 支持的语言返回规范代码，否则 None
pub fn normalize_locale(raw: &str) -> Option<&'static str> {
    let code = raw.trim().replace('_', "-").to_ascii_lowercase();
    let language = code.split('-').next().unwrap_or_default();
    match language {
        "en" => Some("en"),
        "zh" => Some("zh-CN"),
        _ => None,
    }
}

/// 设置语言；不支持的语言代码忽略并返回 false
///
/// # 参数
/// - locale: 语言代码，按 normalize_locale 规范化
pub fn set_locale(locale: &str) -> bool {
    match normalize_locale(locale) {
        Some(code) => {
            rust_i18n::set_locale(code);
            true
        }
        None => {
            tracing::warn!(locale, "不支持的语言代码，保持当前语言");
            false
        }
    }
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use placement_tracker::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use placement_tracker::i18n::t_with_args;
/// let msg = t_with_args("import.file_not_found", &[("path", "/tmp/test.csv")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // locale 为全局状态，测试并行执行时需串行化
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_set_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        assert!(set_locale("zh-CN"));
        assert_eq!(current_locale(), "zh-CN");

        assert!(!set_locale("fr"));
        assert_eq!(current_locale(), "zh-CN");

        assert!(set_locale("en_US"));
        assert_eq!(current_locale(), "en");
    }

    #[test]
    fn test_normalize_locale() {
        assert_eq!(normalize_locale("EN"), Some("en"));
        assert_eq!(normalize_locale(" zh_cn "), Some("zh-CN"));
        assert_eq!(normalize_locale("zh"), Some("zh-CN"));
        assert_eq!(normalize_locale("de-DE"), None);
        assert_eq!(normalize_locale(""), None);
        for code in SUPPORTED_LOCALES {
            assert_eq!(normalize_locale(code), Some(code));
        }
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(t("common.success"), "Operation successful");

        set_locale("zh-CN");
        assert_eq!(t("common.success"), "操作成功");

        set_locale("en");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("import.imported", &[("count", "2")]);
        assert_eq!(msg, "Successfully imported 2 students");

        set_locale("zh-CN");
        let msg = t_with_args("import.file_not_found", &[("path", "/tmp/test.csv")]);
        assert!(msg.contains("/tmp/test.csv"));
        assert!(msg.contains("文件不存在"));

        set_locale("en");
    }
}
