//! ローマ字地名の解決

use crate::error::LookupError;
use crate::index::AddressIndex;
use crate::normalizer::pad_postal_code;

/// 郵便番号と漢字地名からローマ字地名を解決する
///
/// 1. 郵便番号を7桁に0詰めし、一致するレコードを行順に走査する
/// 2. 漢字住所のトークンに `kanji_name` を部分文字列として含む最初の
///    レコードでトークン位置を確定し、以降のレコードは見ない
/// 3. 同じ位置のローマ字トークンを小文字化して返す
///
/// 位置対応は漢字側とローマ字側のトークン列が並行していることを
/// 前提とする。接尾辞除去でトークン数が食い違ったレコードでは
/// 位置が信用できないため、[`LookupError::PositionMismatch`] を
/// 返し、ずれた可能性のあるトークンを答えとして返すことはない。
///
/// # 例
///
/// ```rust
/// use jpcr::{find_romanized_name, AddressIndex, RawRow};
///
/// let index = AddressIndex::build(vec![RawRow::new(
///     "800833", "北海道", "帯広市", "基線", "HOKKAIDO", "OBIHIRO SHI", "KISEN",
/// )]);
///
/// assert_eq!(find_romanized_name(&index, "0800833", "基線").unwrap(), "kisen");
/// assert_eq!(find_romanized_name(&index, "800833", "帯広").unwrap(), "obihiro");
/// ```
pub fn find_romanized_name(
    index: &AddressIndex,
    postal_code: &str,
    kanji_name: &str,
) -> Result<String, LookupError> {
    if index.is_empty() {
        return Err(LookupError::EmptyIndex);
    }

    let padded = pad_postal_code(postal_code);

    let mut postal_code_matched = false;
    let mut hit = None;
    for record in index.records_for(&padded) {
        postal_code_matched = true;
        if let Some(position) = record
            .kanji_tokens()
            .iter()
            .position(|token| token.contains(kanji_name))
        {
            hit = Some((record, position));
            break;
        }
    }

    if !postal_code_matched {
        return Err(LookupError::PostalCodeNotFound(padded));
    }
    let Some((record, position)) = hit else {
        return Err(LookupError::SubstringNotFound(kanji_name.to_string()));
    };

    let kanji_count = record.kanji_tokens().len();
    let romaji_tokens = record.romaji_tokens();
    if romaji_tokens.len() != kanji_count {
        return Err(LookupError::PositionMismatch {
            position,
            kanji_count,
            romaji_count: romaji_tokens.len(),
        });
    }

    // トークン数が一致していれば position は必ず範囲内
    Ok(romaji_tokens[position].to_lowercase())
}

/// ローマ字地名の解決器
///
/// 構築済みの [`AddressIndex`] を保持する読み取り専用のフロント。
/// 解決は副作用のない純粋な問い合わせで、何度呼んでも状態は
/// 変わらない。
pub struct CityResolver {
    index: AddressIndex,
}

impl CityResolver {
    /// インデックスを受け取って解決器を作成する
    pub fn new(index: AddressIndex) -> Self {
        Self { index }
    }

    /// 保持しているインデックスへの参照
    pub fn index(&self) -> &AddressIndex {
        &self.index
    }

    /// 郵便番号と漢字地名からローマ字地名を解決する
    ///
    /// 詳細は [`find_romanized_name`] を参照。
    pub fn find_romanized_name(
        &self,
        postal_code: &str,
        kanji_name: &str,
    ) -> Result<String, LookupError> {
        find_romanized_name(&self.index, postal_code, kanji_name)
    }
}
