//! エラー型定義

use thiserror::Error;

/// 解決処理のエラー
///
/// いずれも呼び出し側が分岐して扱う回復可能な結果であり、
/// プロセスを中断させる性質のものではない。
#[derive(Debug, Error)]
pub enum LookupError {
    /// インデックスが0行から構築された
    #[error("address index is empty")]
    EmptyIndex,

    /// 郵便番号に一致するレコードがない
    #[error("no record found for postal code: {0}")]
    PostalCodeNotFound(String),

    /// 郵便番号は一致したが、指定の文字列を含む漢字トークンがない
    #[error("no kanji token contains: {0}")]
    SubstringNotFound(String),

    /// 漢字トークンの位置に対応するローマ字トークンがない
    ///
    /// 接尾辞の除去でローマ字側のトークン数が漢字側と食い違うと、
    /// 位置対応が成立しなくなる。
    #[error("no romaji token aligned with kanji position {position}: {kanji_count} kanji tokens vs {romaji_count} romaji tokens")]
    PositionMismatch {
        /// 漢字側で一致したトークン位置
        position: usize,
        /// 漢字住所のトークン数
        kanji_count: usize,
        /// ローマ字住所のトークン数
        romaji_count: usize,
    },
}

/// 参照テーブル取得のエラー
#[derive(Debug, Error)]
pub enum SourceError {
    /// ダウンロードに失敗した
    #[error("network error: {0}")]
    Network(String),

    /// アーカイブの読み出しに失敗した
    #[error("archive error: {0}")]
    Archive(String),

    /// アーカイブ内に CSV エントリがない
    #[error("no CSV entry found in archive")]
    CsvEntryNotFound,

    /// CSV の解析に失敗した
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<zip::result::ZipError> for SourceError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
