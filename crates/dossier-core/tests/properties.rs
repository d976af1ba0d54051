use std::sync::Arc;

use dossier_core::{
    AliasTable, Corpus, Field, LevenshteinSimilarity, MatchThresholds, Matcher, Normalizer,
    RawRecord, SearchEngine,
};
use serde_json::{json, Value};

fn raw(value: Value) -> RawRecord {
    value.as_object().cloned().unwrap()
}

#[test]
fn normalize_always_emits_fourteen_fields() {
    let normalizer = Normalizer::default();
    let inputs = [
        json!({}),
        json!({ "nama": "Andi" }),
        json!({ "x": 1, "y": null, "z": [1, 2] }),
        json!({ "nama": "Andi", "nik": "1", "nip": "2", "email": "a@b.c" }),
    ];
    for input in inputs {
        let record = normalizer.normalize(&raw(input), "src.json");
        let fields: Vec<Field> = record.fields().map(|(f, _)| f).collect();
        assert_eq!(fields, Field::ALL.to_vec());
        assert_eq!(record.source(), "src.json");
    }
}

#[test]
fn alias_spelling_does_not_change_result() {
    let normalizer = Normalizer::default();
    let spellings = [
        ("no_hp", "phone", "Nomor_HP"),
        ("tgl_lahir", "birthdate", "Tanggal Lahir"),
        ("nip", "employee_id", "NIP_Pegawai"),
    ];
    for (a, b, c) in spellings {
        let records: Vec<_> = [a, b, c]
            .into_iter()
            .map(|key| {
                let mut map = RawRecord::new();
                map.insert("nama".to_string(), json!("Andi"));
                map.insert(key.to_string(), json!("value-1"));
                normalizer.normalize(&map, "s.json")
            })
            .collect();
        assert_eq!(records[0], records[1], "{} vs {}", a, b);
        assert_eq!(records[1], records[2], "{} vs {}", b, c);
    }
}

#[test]
fn configured_aliases_extend_without_touching_normalizer() {
    let aliases = AliasTable::builtin()
        .with_alias("surel", Field::Email)
        .with_alias("kontak_darurat", Field::FatherPhone);
    let normalizer = Normalizer::new(aliases);
    let record = normalizer.normalize(
        &raw(json!({ "nama": "Andi", "surel": "andi@example.com", "kontak_darurat": "0812" })),
        "s.json",
    );
    assert_eq!(record.get(Field::Email), "andi@example.com");
    assert_eq!(record.get(Field::FatherPhone), "0812");
}

#[test]
fn search_across_sources_end_to_end() {
    let normalizer = Normalizer::default();
    let sources: Vec<(&str, Vec<Value>)> = vec![
        (
            "pegawai.json",
            vec![
                json!({ "NAMA_PEGAWAI": "Siti Nurhaliza", "NIP": "1987", "JABATAN": "Guru" }),
                json!({ "NAMA_PEGAWAI": "Andi Saputra", "NIP": "1990" }),
            ],
        ),
        (
            "siswa.json",
            vec![
                json!({ "nama_lengkap": "Dewi Lestari", "nisn": "0051" }),
                json!({ "alamat": "no name here" }),
            ],
        ),
        (
            "ktp.json",
            vec![json!({ "name": "siti nurhaliza", "nip": "1987", "ktp": "" })],
        ),
    ];

    let corpus = Corpus::from_records(sources.iter().flat_map(|(source, rows)| {
        let normalizer = &normalizer;
        rows.iter()
            .map(move |row| normalizer.normalize(row.as_object().unwrap(), source))
    }));
    assert_eq!(corpus.len(), 4);

    let engine = SearchEngine::default();

    let hits = engine.search(&corpus, "siti");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].source(), "pegawai.json");
    assert_eq!(hits[0].get(Field::Position), "Guru");

    let hits = engine.search(&corpus, "Dewi Lestari");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].get(Field::StudentId), "0051");

    assert!(engine.search(&corpus, "Dewi Permata").is_empty());
}

#[test]
fn levenshtein_scorer_is_swappable() {
    let engine = SearchEngine::new(Matcher::new(
        Arc::new(LevenshteinSimilarity),
        MatchThresholds::default(),
    ));
    let normalizer = Normalizer::default();
    let corpus = Corpus::from_records(vec![
        normalizer.normalize(&raw(json!({ "nama": "Muhammad Rizky Pratama" })), "a.json"),
        normalizer.normalize(&raw(json!({ "nama": "Budi Santoso" })), "a.json"),
    ]);

    let hits = engine.search(&corpus, "muhammad rizki pratama");
    assert_eq!(hits.len(), 1);
    assert!(engine.search(&corpus, "budi").len() == 1);
}
