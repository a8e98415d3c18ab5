//! 住所インデックスの構築

use crate::normalizer;
use crate::record::{NormalizedRecord, RawRow};

/// 正規化済みレコードの順序付き不変コレクション
///
/// 構築後は一切変更されない。郵便番号は一意ではなく、同じ番号を
/// 複数の町域レコードが共有する。
#[derive(Debug, Clone, Default)]
pub struct AddressIndex {
    records: Vec<NormalizedRecord>,
}

impl AddressIndex {
    /// 生データ列からインデックスを構築する
    ///
    /// 各行を順に正規化し、行の順序を保存する。0行からの構築も
    /// 有効で、空のインデックスは [`AddressIndex::is_empty`] で
    /// 判別できる。空のインデックスへの問い合わせは
    /// [`LookupError::EmptyIndex`](crate::LookupError::EmptyIndex)
    /// になる。
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        let records = rows
            .into_iter()
            .map(|row| normalizer::normalize(&row))
            .collect();
        Self { records }
    }

    /// レコード数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// レコードを1件も持たないかどうか
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全レコード（元の行順）
    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    /// 指定の郵便番号（0詰め済み7桁）を持つレコードを行順で返す
    pub fn records_for<'a>(
        &'a self,
        postal_code: &'a str,
    ) -> impl Iterator<Item = &'a NormalizedRecord> {
        self.records
            .iter()
            .filter(move |record| record.postal_code == postal_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<RawRow> {
        vec![
            RawRow::new(
                "800833", "北海道", "帯広市", "基線", "HOKKAIDO", "OBIHIRO SHI", "KISEN",
            ),
            RawRow::new(
                "800833", "北海道", "帯広市", "西一条", "HOKKAIDO", "OBIHIRO SHI", "NISHI1JO",
            ),
            RawRow::new(
                "1000001",
                "東京都",
                "千代田区",
                "千代田",
                "TOKYO TO",
                "CHIYODA KU",
                "CHIYODA",
            ),
        ]
    }

    #[test]
    fn test_build_preserves_order() {
        let index = AddressIndex::build(sample_rows());
        assert_eq!(index.len(), 3);
        assert_eq!(index.records()[0].kanji_address, "北海道 帯広市 基線");
        assert_eq!(index.records()[1].kanji_address, "北海道 帯広市 西一条");
        assert_eq!(index.records()[2].postal_code, "1000001");
    }

    #[test]
    fn test_build_normalizes_rows() {
        let index = AddressIndex::build(sample_rows());
        // 0詰めと接尾辞除去が適用されている
        assert_eq!(index.records()[0].postal_code, "0800833");
        assert_eq!(index.records()[2].romaji_address, "TOKYO CHIYODA CHIYODA");
    }

    #[test]
    fn test_build_empty() {
        let index = AddressIndex::build(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.records_for("0800833").next().is_none());
    }

    #[test]
    fn test_records_for_keeps_source_order() {
        let index = AddressIndex::build(sample_rows());
        let matched: Vec<_> = index.records_for("0800833").collect();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].kanji_address, "北海道 帯広市 基線");
        assert_eq!(matched[1].kanji_address, "北海道 帯広市 西一条");
    }

    #[test]
    fn test_records_for_no_match() {
        let index = AddressIndex::build(sample_rows());
        assert!(index.records_for("9999999").next().is_none());
    }
}
