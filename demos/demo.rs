use jpcr::{AddressIndex, CityResolver, KEN_ALL_ROME_URL};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== JPCR ローマ字地名解決デモ ===\n");

    let rows = match jpcr::load_reference_table(KEN_ALL_ROME_URL) {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("参照テーブルの取得に失敗: {err}");
            std::process::exit(1);
        }
    };

    let index = AddressIndex::build(rows);
    if index.is_empty() {
        eprintln!("参照テーブルが空です");
        std::process::exit(1);
    }
    println!("{} 件のレコードを読み込みました\n", index.len());

    let resolver = CityResolver::new(index);

    let queries = vec![
        // 町域
        ("0800833", "基線"),
        // 0が省略された郵便番号
        ("800833", "帯広"),
        // 都道府県トークン
        ("0800833", "北海道"),
        // 存在しない郵便番号
        ("9999999", "基線"),
        // 一致しない地名
        ("0800833", "存在しない町"),
    ];

    for (postal_code, kanji_name) in queries {
        match resolver.find_romanized_name(postal_code, kanji_name) {
            Ok(romaji) => println!("({postal_code}, {kanji_name}) => \"{romaji}\""),
            Err(err) => println!("({postal_code}, {kanji_name}) => エラー: {err}"),
        }
    }
}
