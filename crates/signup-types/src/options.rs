//! Enumerated choices offered by the extended form

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn value(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }
}

/// A prefecture option: submitted slug and display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefecture {
    pub slug: &'static str,
    pub name: &'static str,
}

impl Prefecture {
    pub fn find(slug: &str) -> Option<&'static Prefecture> {
        PREFECTURES.iter().find(|p| p.slug == slug)
    }
}

const fn pref(slug: &'static str, name: &'static str) -> Prefecture {
    Prefecture { slug, name }
}

/// The 47 prefectures of Japan, north to south
pub const PREFECTURES: [Prefecture; 47] = [
    pref("hokkaido", "北海道"),
    pref("aomori", "青森県"),
    pref("iwate", "岩手県"),
    pref("miyagi", "宮城県"),
    pref("akita", "秋田県"),
    pref("yamagata", "山形県"),
    pref("fukushima", "福島県"),
    pref("ibaraki", "茨城県"),
    pref("tochigi", "栃木県"),
    pref("gunma", "群馬県"),
    pref("saitama", "埼玉県"),
    pref("chiba", "千葉県"),
    pref("tokyo", "東京都"),
    pref("kanagawa", "神奈川県"),
    pref("niigata", "新潟県"),
    pref("toyama", "富山県"),
    pref("ishikawa", "石川県"),
    pref("fukui", "福井県"),
    pref("yamanashi", "山梨県"),
    pref("nagano", "長野県"),
    pref("gifu", "岐阜県"),
    pref("shizuoka", "静岡県"),
    pref("aichi", "愛知県"),
    pref("mie", "三重県"),
    pref("shiga", "滋賀県"),
    pref("kyoto", "京都府"),
    pref("osaka", "大阪府"),
    pref("hyogo", "兵庫県"),
    pref("nara", "奈良県"),
    pref("wakayama", "和歌山県"),
    pref("tottori", "鳥取県"),
    pref("shimane", "島根県"),
    pref("okayama", "岡山県"),
    pref("hiroshima", "広島県"),
    pref("yamaguchi", "山口県"),
    pref("tokushima", "徳島県"),
    pref("kagawa", "香川県"),
    pref("ehime", "愛媛県"),
    pref("kochi", "高知県"),
    pref("fukuoka", "福岡県"),
    pref("saga", "佐賀県"),
    pref("nagasaki", "長崎県"),
    pref("kumamoto", "熊本県"),
    pref("oita", "大分県"),
    pref("miyazaki", "宮崎県"),
    pref("kagoshima", "鹿児島県"),
    pref("okinawa", "沖縄県"),
];

/// Hobby tags a user may pick, in display order
pub const HOBBY_TAGS: [&str; 8] = [
    "reading",
    "music",
    "sports",
    "travel",
    "cooking",
    "gaming",
    "photography",
    "art",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn prefecture_slugs_are_unique() {
        let slugs: HashSet<_> = PREFECTURES.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), 47);
    }

    #[test]
    fn finds_prefecture_by_slug() {
        assert_eq!(Prefecture::find("tokyo").map(|p| p.name), Some("東京都"));
        assert!(Prefecture::find("Tokyo").is_none());
        assert!(Prefecture::find("").is_none());
    }

    #[test]
    fn gender_values() {
        assert_eq!(Gender::from_value("female"), Some(Gender::Female));
        assert_eq!(Gender::from_value("unknown"), None);
    }
}
