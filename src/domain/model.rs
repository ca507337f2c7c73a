use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub number: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub module_number: i64,
    pub title: String,
    pub topics: Vec<Topic>,
}

/// Result of coercing a raw path token into a module number.
///
/// Tokens are cast the way the catalog's document store casts query values
/// against a numeric field: decimal, exponent and `0x`/`0o`/`0b` forms are
/// numeric, and only integral values in range can ever match a stored module.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleKey {
    /// Integral value, compared against `moduleNumber`.
    Exact(i64),
    /// Valid number (or empty token) that no stored module can equal.
    NoMatch,
    /// Not a number at all; the store rejects the query.
    CastFailure(String),
}

impl ModuleKey {
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Self::NoMatch;
        }

        match parse_numeric(trimmed) {
            Some(value) => Self::from_f64(value),
            None => Self::CastFailure(format!(
                "Cast to Number failed for value \"{}\" (type string) at path \"moduleNumber\" for model \"Module\"",
                token
            )),
        }
    }

    fn from_f64(value: f64) -> Self {
        // i64::MAX 無法以 f64 精確表示，上界需用嚴格小於
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value < i64::MAX as f64
        {
            Self::Exact(value as i64)
        } else {
            Self::NoMatch
        }
    }
}

fn parse_numeric(s: &str) -> Option<f64> {
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        // 超出 u128 的值仍是合法數字，只是不可能相等
        return Some(
            u128::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::INFINITY),
        );
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // Rust 的 f64 解析接受 "inf"/"nan"，這裡只允許十進位字元
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}
