//! Namecard text heuristics
//!
//! Turns raw OCR output from a business-card scan into best-effort profile
//! fields. The rules are ordered and line-oriented: each recognized line is
//! consumed by the first rule it satisfies whose target field is still
//! empty. Every field is filled at most once; unmatched fields stay empty
//! and the caller accepts partial results silently.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").expect("email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2,4}-\d{2,4}-\d{4}|\d{10,11}").expect("phone regex"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("url regex"));

/// Corporate-entity suffixes that mark a company line.
const COMPANY_MARKERS: &[&str] = &[
    "株式会社",
    "有限会社",
    "合同会社",
    "Corporation",
    "Inc.",
    "Ltd.",
];

/// Japanese corporate suffixes excluded from the name rule.
const JP_COMPANY_MARKERS: &[&str] = &["株式会社", "有限会社", "合同会社"];

/// Job-title keywords that mark an occupation line.
const TITLE_KEYWORDS: &[&str] = &[
    "部長",
    "課長",
    "主任",
    "代表",
    "社長",
    "取締役",
    "マネージャー",
    "エンジニア",
    "ディレクター",
    "Manager",
    "Director",
    "CEO",
    "CTO",
];

/// Fields extracted from a recognized namecard. Empty string means the
/// heuristics found nothing for that field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamecardFields {
    pub name: String,
    pub company: String,
    pub occupation: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Never filled by the current heuristics; kept for the document shape.
    pub location: String,
}

/// Does the line contain Hiragana, Katakana, or CJK ideographs?
fn contains_japanese(line: &str) -> bool {
    line.chars().any(|c| {
        matches!(c,
            '\u{3040}'..='\u{309F}' // Hiragana
            | '\u{30A0}'..='\u{30FF}' // Katakana
            | '\u{4E00}'..='\u{9FFF}' // CJK ideographs
        )
    })
}

fn contains_any(line: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| line.contains(m))
}

/// Apply the ordered field heuristics to raw OCR text.
pub fn parse_namecard(text: &str) -> NamecardFields {
    let mut fields = NamecardFields::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if fields.email.is_empty() {
            if let Some(m) = EMAIL_RE.find(line) {
                fields.email = m.as_str().to_string();
                continue;
            }
        }

        if fields.phone.is_empty() {
            if let Some(m) = PHONE_RE.find(line) {
                fields.phone = m.as_str().to_string();
                continue;
            }
        }

        if fields.website.is_empty() {
            if let Some(m) = URL_RE.find(line) {
                fields.website = m.as_str().to_string();
                continue;
            }
        }

        if fields.company.is_empty() && contains_any(line, COMPANY_MARKERS) {
            fields.company = line.to_string();
            continue;
        }

        if fields.name.is_empty()
            && contains_japanese(line)
            && !contains_any(line, JP_COMPANY_MARKERS)
        {
            fields.name = line.to_string();
            continue;
        }

        if fields.occupation.is_empty() && contains_any(line, TITLE_KEYWORDS) {
            fields.occupation = line.to_string();
        }
    }

    fields
}

/// Estimated gender, used only to pick a placeholder avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

const MALE_INDICATORS: &[&str] = &[
    "太郎", "一郎", "二郎", "三郎", "四郎", "五郎", "六郎", "七郎", "八郎", "九郎", "十郎",
    "光", "健", "誠", "洋", "博", "雄", "男", "夫", "彦", "介", "助", "朗", "輝", "大", "翔",
];

const FEMALE_INDICATORS: &[&str] = &[
    "子", "美", "恵", "香", "奈", "菜", "花", "華", "愛", "彩", "咲", "千", "沙", "紗", "里",
    "理", "絵", "江", "代", "世", "ちか", "あやか", "由", "佳", "加", "麻",
];

/// Guess a gender from name characters. Male indicators are checked first,
/// mirroring the original heuristics.
pub fn estimate_gender(name: &str) -> Gender {
    if name.is_empty() {
        return Gender::Unknown;
    }
    if MALE_INDICATORS.iter().any(|ind| name.contains(ind)) {
        return Gender::Male;
    }
    if FEMALE_INDICATORS.iter().any(|ind| name.contains(ind)) {
        return Gender::Female;
    }
    Gender::Unknown
}

const PLACEHOLDER_COLORS: &[&str] = &["667eea", "764ba2", "4CAF50", "2196F3", "ff6b6b", "ffa726"];

/// Build a placeholder avatar URL for an imported draft. The color is a
/// stable hash of the name so re-importing the same card yields the same
/// image.
pub fn placeholder_image(name: &str, gender: Gender) -> String {
    let color_index =
        name.bytes().fold(0usize, |acc, b| acc.wrapping_add(b as usize)) % PLACEHOLDER_COLORS.len();
    let color = PLACEHOLDER_COLORS[color_index];

    let icon = match gender {
        Gender::Male => "👨\u{200d}💼",
        Gender::Female => "👩\u{200d}💼",
        Gender::Unknown => "👤",
    };
    let label = if name.is_empty() { "名前不明" } else { name };

    format!(
        "https://via.placeholder.com/300x300/{color}/ffffff?text={}",
        urlencoding::encode(&format!("{icon} {label}"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_goes_to_email_only() {
        let fields = parse_namecard("taro@example.com");
        assert_eq!(fields.email, "taro@example.com");
        assert_eq!(fields.name, "");
        assert_eq!(fields.website, "");
        assert_eq!(fields.company, "");
    }

    #[test]
    fn test_company_filled_exactly_once() {
        let fields = parse_namecard("株式会社Example\n有限会社Later");
        assert_eq!(fields.company, "株式会社Example");
        // The later corporate line is excluded from the name rule too, so it
        // ends up nowhere.
        assert_eq!(fields.name, "");
    }

    #[test]
    fn test_name_skips_corporate_lines() {
        let fields = parse_namecard("株式会社hackjpn\n田村太郎");
        assert_eq!(fields.company, "株式会社hackjpn");
        assert_eq!(fields.name, "田村太郎");
    }

    #[test]
    fn test_full_card() {
        let text = "株式会社hackjpn\n田村太郎\n代表取締役CEO\ntaro@hackjpn.com\n03-1234-5678\nhttps://hackjpn.com";
        let fields = parse_namecard(text);
        assert_eq!(fields.company, "株式会社hackjpn");
        assert_eq!(fields.name, "田村太郎");
        assert_eq!(fields.occupation, "代表取締役CEO");
        assert_eq!(fields.email, "taro@hackjpn.com");
        assert_eq!(fields.phone, "03-1234-5678");
        assert_eq!(fields.website, "https://hackjpn.com");
    }

    #[test]
    fn test_phone_variants() {
        assert_eq!(parse_namecard("TEL 03-1234-5678").phone, "03-1234-5678");
        assert_eq!(parse_namecard("09012345678").phone, "09012345678");
    }

    #[test]
    fn test_first_match_wins() {
        let fields = parse_namecard("a@example.com\nb@example.com");
        assert_eq!(fields.email, "a@example.com");
    }

    #[test]
    fn test_partial_parse_is_silent() {
        let fields = parse_namecard("UNREADABLE NOISE 12");
        assert_eq!(fields, NamecardFields::default());
    }

    #[test]
    fn test_line_consumed_by_first_rule() {
        // A line matching both email and phone is consumed by the email rule.
        let fields = parse_namecard("taro@example.com 03-1234-5678");
        assert_eq!(fields.email, "taro@example.com");
        assert_eq!(fields.phone, "");
    }

    #[test]
    fn test_estimate_gender() {
        assert_eq!(estimate_gender("田村太郎"), Gender::Male);
        assert_eq!(estimate_gender("佐藤花子"), Gender::Female);
        assert_eq!(estimate_gender("Smith"), Gender::Unknown);
        assert_eq!(estimate_gender(""), Gender::Unknown);
    }

    #[test]
    fn test_placeholder_image_is_deterministic() {
        let a = placeholder_image("田村太郎", Gender::Male);
        let b = placeholder_image("田村太郎", Gender::Male);
        assert_eq!(a, b);
        assert!(a.starts_with("https://via.placeholder.com/300x300/"));
    }

    #[test]
    fn test_placeholder_image_unknown_name() {
        let url = placeholder_image("", Gender::Unknown);
        assert!(url.contains(&*urlencoding::encode("名前不明")));
    }
}
