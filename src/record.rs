//! 参照テーブルのデータ構造

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 参照テーブルの1行（7フィールドの生データ）
///
/// 郵便番号、漢字住所3要素、ローマ字住所3要素の並び。文字コードの
/// 変換は取得層の責務で、ここではデコード済みのテキストのみを扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRow {
    /// 郵便番号（先頭の0が欠けていることがある）
    pub postal_code: String,
    /// 都道府県（漢字）
    pub kanji_prefecture: String,
    /// 市区町村（漢字）
    pub kanji_city: String,
    /// 町域（漢字）
    pub kanji_town: String,
    /// 都道府県（ローマ字）
    pub romaji_prefecture: String,
    /// 市区町村（ローマ字）
    pub romaji_city: String,
    /// 町域（ローマ字）
    pub romaji_town: String,
}

impl RawRow {
    /// 新しい行データを作成する
    pub fn new(
        postal_code: impl Into<String>,
        kanji_prefecture: impl Into<String>,
        kanji_city: impl Into<String>,
        kanji_town: impl Into<String>,
        romaji_prefecture: impl Into<String>,
        romaji_city: impl Into<String>,
        romaji_town: impl Into<String>,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            kanji_prefecture: kanji_prefecture.into(),
            kanji_city: kanji_city.into(),
            kanji_town: kanji_town.into(),
            romaji_prefecture: romaji_prefecture.into(),
            romaji_city: romaji_city.into(),
            romaji_town: romaji_town.into(),
        }
    }
}

/// 正規化済みレコード
///
/// 郵便番号は7桁に0詰めされ、住所は全角スペースの正規化済み。
/// ローマ字住所は行政区分接尾辞（KEN, SHI など）を除去済みのため、
/// トークン数が漢字側と一致しないことがある。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NormalizedRecord {
    /// 7桁の郵便番号
    pub postal_code: String,
    /// 漢字住所（都道府県 市区町村 町域）
    pub kanji_address: String,
    /// ローマ字住所（接尾辞除去済み）
    pub romaji_address: String,
}

impl NormalizedRecord {
    /// 漢字住所を位置付きトークン列に分割する
    pub fn kanji_tokens(&self) -> Vec<&str> {
        self.kanji_address.split_whitespace().collect()
    }

    /// ローマ字住所を位置付きトークン列に分割する
    pub fn romaji_tokens(&self) -> Vec<&str> {
        self.romaji_address.split_whitespace().collect()
    }
}
