//! # JPCR - Japanese Postal Code Romanizer
//!
//! 郵便番号参照テーブル（ローマ字併記）から、漢字地名に対応する
//! ローマ字表記を解決するライブラリ。
//!
//! ## 機能特性
//!
//! - 7フィールドの生データ行を正規化済みレコードへ変換
//!   （郵便番号の0詰め、全角スペース正規化、行政区分接尾辞の除去）
//! - 行順を保存する不変の住所インデックス
//! - 郵便番号＋漢字地名（部分一致）からトークン位置対応でローマ字
//!   地名を解決
//! - 日本郵便 KEN_ALL_ROME.zip の取得・展開・Shift_JIS デコード
//!
//! ## クイックスタート
//!
//! ```rust
//! use jpcr::{AddressIndex, CityResolver, RawRow};
//!
//! let rows = vec![RawRow::new(
//!     "800833",
//!     "北海道", "帯広市", "基線",
//!     "HOKKAIDO", "OBIHIRO SHI", "KISEN",
//! )];
//! let resolver = CityResolver::new(AddressIndex::build(rows));
//!
//! // 町域・市区町村・都道府県のどの位置でも解決できる
//! assert_eq!(resolver.find_romanized_name("0800833", "基線").unwrap(), "kisen");
//! assert_eq!(resolver.find_romanized_name("800833", "帯広").unwrap(), "obihiro");
//! ```
//!
//! 実データで使う場合は [`load_reference_table`] で参照テーブルを
//! 取得する（ネットワークアクセスが発生する）。

mod error;
mod index;
mod normalizer;
mod record;
mod resolver;
mod source;

pub use error::{LookupError, SourceError};
pub use index::AddressIndex;
pub use record::{NormalizedRecord, RawRow};
pub use resolver::{find_romanized_name, CityResolver};
pub use source::{
    download_archive, extract_csv, load_reference_table, parse_rows, KEN_ALL_ROME_URL,
};
