//! 参照テーブルの取得
//!
//! 日本郵便が配布するローマ字併記の郵便番号データ（KEN_ALL_ROME.zip）
//! をダウンロードし、CSV を取り出して Shift_JIS からデコードし、
//! 行データに変換する。コア（正規化・インデックス・解決）はここに
//! 依存せず、デコード済みの行列だけを受け取る。

use std::io::{Cursor, Read};

use encoding_rs::SHIFT_JIS;
use reqwest::header::{HeaderValue, USER_AGENT};

use crate::error::SourceError;
use crate::record::RawRow;

/// 日本郵便のローマ字併記郵便番号データの配布URL
pub const KEN_ALL_ROME_URL: &str =
    "https://www.post.japanpost.jp/zipcode/dl/roman/KEN_ALL_ROME.zip";

/// ダウンロード時の User-Agent
const USER_AGENT_VALUE: &str = concat!("jpcr/", env!("CARGO_PKG_VERSION"));

/// 参照テーブル1行のフィールド数
const ROW_FIELD_COUNT: usize = 7;

/// 参照アーカイブをダウンロードする
///
/// 同期クライアントで1回だけ取得する。リトライはしない。
pub fn download_archive(url: &str) -> Result<Vec<u8>, SourceError> {
    tracing::info!("downloading reference archive from {}", url);

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
        .send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Network(format!(
            "download failed with status {status}"
        )));
    }

    let data = response.bytes()?;
    tracing::info!("downloaded {} bytes", data.len());
    Ok(data.to_vec())
}

/// アーカイブから CSV エントリのバイト列を取り出す
///
/// 拡張子 .csv（大文字小文字不問）の最初のエントリを返す。
pub fn extract_csv(data: &[u8]) -> Result<Vec<u8>, SourceError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data))?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        if !entry.name().to_ascii_lowercase().ends_with(".csv") {
            continue;
        }
        tracing::debug!("extracting {} ({} bytes)", entry.name(), entry.size());
        let mut bytes = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut bytes)?;
        return Ok(bytes);
    }

    Err(SourceError::CsvEntryNotFound)
}

/// CSV バイト列を Shift_JIS としてデコードし、行データに変換する
///
/// 参照 CSV はヘッダ行を持たない。フィールド数が7未満の行は警告を
/// 出して読み飛ばす。
pub fn parse_rows(csv_bytes: &[u8]) -> Result<Vec<RawRow>, SourceError> {
    let (decoded, _, had_errors) = SHIFT_JIS.decode(csv_bytes);
    if had_errors {
        tracing::warn!("reference CSV contains byte sequences invalid as Shift_JIS");
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(decoded.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() < ROW_FIELD_COUNT {
            tracing::warn!(fields = record.len(), "skipping malformed row");
            continue;
        }
        rows.push(RawRow::new(
            &record[0], &record[1], &record[2], &record[3], &record[4], &record[5], &record[6],
        ));
    }

    tracing::info!("parsed {} reference rows", rows.len());
    Ok(rows)
}

/// ダウンロードから行データ変換までをまとめて行う
pub fn load_reference_table(url: &str) -> Result<Vec<RawRow>, SourceError> {
    let archive = download_archive(url)?;
    let csv_bytes = extract_csv(&archive)?;
    parse_rows(&csv_bytes)
}
