// ==========================================
// 户号 → 楼层 解析规则
// ==========================================
// 规则（顺序执行，命中即返回）:
// 1) 地面层别名 → 0
// 2) 单个数字 → 该数字即楼层（竖向约定, 不是横向户序）
// 3) 前导数字串 n: n >= 100 → n/100, 10 <= n <= 99 → n/10
// 4) 单个字母且不是 H → 0（地面层横向户）
// 5) 数字 + 单个字母（如 1A）→ 数字部分
// 6) 其他 → 无法解析
// ==========================================

use regex::Regex;
use std::sync::LazyLock;

/// 地面层别名（已大写）
pub const GROUND_FLOOR_ALIASES: &[&str] = &[
    "H",
    "BG",
    "GF",
    "00",
    "G",
    "BEGANE GROND",
    "HOOFDVERDIEPING",
];

/// searchKey 末尾数字段: `_<digits>_?$`
static SEARCH_KEY_TRAILING_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_(\d+)_?$").expect("search key pattern is a valid regex")
});

/// 标准化: TRIM + UPPER
pub fn clean_token(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// 将单个户号标识解析为楼层
pub fn identifier_to_floor(raw: &str) -> Option<u32> {
    let token = clean_token(raw);
    if token.is_empty() {
        return None;
    }

    // 规则1: 地面层别名
    if GROUND_FLOOR_ALIASES.contains(&token.as_str()) {
        return Some(0);
    }

    // 规则2: 单个数字
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = c.to_digit(10) {
            return Some(digit);
        }
    }

    // 规则3: 前导数字串 (>= 10)
    let digits = leading_digits(&token);
    if let Ok(n) = digits.parse::<u64>() {
        if n >= 100 {
            return u32::try_from(n / 100).ok();
        }
        if n >= 10 {
            return Some((n / 10) as u32);
        }
    }

    // 规则4: 单个字母（H 已在别名中处理）
    if token.len() == 1 && token.as_bytes()[0].is_ascii_uppercase() {
        return Some(0);
    }

    // 规则5: 数字 + 单个字母
    if let Some(prefix) = token.strip_suffix(|c: char| c.is_ascii_uppercase()) {
        if !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit()) {
            return prefix.parse::<u32>().ok();
        }
    }

    None
}

/// 前导 ASCII 数字串
fn leading_digits(token: &str) -> &str {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    &token[..end]
}

/// searchKey 按 `_` 切分, 去掉空段后的最后一段
pub fn search_key_tail(search_key: &str) -> Option<&str> {
    search_key.split('_').filter(|s| !s.is_empty()).last()
}

/// searchKey 末尾 `_<digits>_?` 中的数字
pub fn search_key_trailing_digits(search_key: &str) -> Option<&str> {
    SEARCH_KEY_TRAILING_DIGITS
        .captures(search_key)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
