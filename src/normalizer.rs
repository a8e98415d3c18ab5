//! 生データの正規化

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::record::{NormalizedRecord, RawRow};

/// 郵便番号の桁数
pub const POSTAL_CODE_LEN: usize = 7;

/// ローマ字住所から除去する行政区分接尾辞
///
/// 大文字トークンとの完全一致でのみ除去する。KUSHIRO に含まれる
/// KU のような部分一致は対象外。
static ROMAJI_STOPLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["TO", "FU", "KEN", "SHI", "KU", "CHO", "GUN", "MURA"]
        .into_iter()
        .collect()
});

/// 郵便番号を7桁に0詰めする
///
/// 7桁を超える入力は未検証のままそのまま返す（切り詰めない）。
pub fn pad_postal_code(raw: &str) -> String {
    format!("{raw:0>width$}", width = POSTAL_CODE_LEN)
}

/// 全角スペースを半角スペースに変換する
///
/// 冪等：2回適用しても結果は変わらない。
pub fn normalize_spaces(text: &str) -> String {
    text.replace('\u{3000}', " ")
}

/// 漢字住所を組み立てる
///
/// 都道府県・市区町村・町域を半角スペース区切りで連結し、両端を
/// 取り除いて全角スペースを正規化する。トークンの除去は行わない。
pub fn build_kanji_address(row: &RawRow) -> String {
    let joined = format!(
        "{} {} {}",
        row.kanji_prefecture, row.kanji_city, row.kanji_town
    );
    normalize_spaces(joined.trim())
}

/// ローマ字住所を組み立てる
///
/// 漢字側と同じ連結・正規化のあと、行政区分接尾辞に完全一致する
/// トークンを取り除く。除去によってトークン数が漢字側より少なく
/// なることがある。
pub fn build_romaji_address(row: &RawRow) -> String {
    let joined = format!(
        "{} {} {}",
        row.romaji_prefecture, row.romaji_city, row.romaji_town
    );
    normalize_spaces(joined.trim())
        .split_whitespace()
        .filter(|token| !ROMAJI_STOPLIST.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 1行分の生データを正規化済みレコードに変換する
pub fn normalize(row: &RawRow) -> NormalizedRecord {
    NormalizedRecord {
        postal_code: pad_postal_code(&row.postal_code),
        kanji_address: build_kanji_address(row),
        romaji_address: build_romaji_address(row),
    }
}
