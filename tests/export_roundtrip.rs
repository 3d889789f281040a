// tests/export_roundtrip.rs
//
// Exporter contract: empty tables refused, written file reads back unchanged.
//
mod common;

use std::fs;

use common::{config, day_page, season_page, FakeSite};
use lnr_scrape::config::RunOptions;
use lnr_scrape::file::{export_table, out_path, read_table};
use lnr_scrape::scrape::collect_results;
use lnr_scrape::store::ResultTable;
use lnr_scrape::ScrapeError;

fn opts_in(dir: &tempfile::TempDir, name: &str) -> RunOptions {
    RunOptions {
        debug: false,
        out_dir: dir.path().join("data"),
        out_name: name.to_string(),
    }
}

#[test]
fn scraped_table_round_trips_through_the_file() {
    let site = FakeSite::default()
        .page("/s", season_page("2019-2020", &[("/d/1", "1ère"), ("/d/2", "2ème")]))
        .page(
            "/d/1",
            day_page("samedi 24 août 2019", &[("Lyon", "Stade Français Paris", "24 - 17")]),
        )
        .page(
            "/d/2",
            day_page("dimanche 1 septembre 2019", &[("Bordeaux-Bègles", "Toulon", "9 - 6")]),
        );
    let table = collect_results(&config(&["/s"]), &RunOptions::default(), &site, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(&dir, "matchs_results");
    let written = export_table(&table, &opts).unwrap();
    assert_eq!(written, dir.path().join("data").join("matchs_results.csv"));
    assert_eq!(written, out_path(&opts));

    let text = fs::read_to_string(&written).unwrap();
    let header = "saison|journee|date|equipe_dom|equipe_ext|score_dom|score_ext|bonus_dom|bonus_ext";
    assert!(text.starts_with(&format!("{header}\n")));
    assert!(text.contains("2019-2020|2|dimanche 1 septembre 2019|Bordeaux-Bègles|Toulon|9|6||BD"));

    let back = read_table(&written).unwrap();
    assert_eq!(back, table);
}

#[test]
fn cells_with_separator_or_newline_survive() {
    let table = ResultTable {
        headers: vec!["a".into(), "b".into()],
        rows: vec![
            vec!["x|y".into(), "line\nbreak".into()],
            vec!["\"q\"".into(), "".into()],
        ],
    };
    let dir = tempfile::tempdir().unwrap();
    let written = export_table(&table, &opts_in(&dir, "odd")).unwrap();
    assert_eq!(read_table(&written).unwrap(), table);
}

#[test]
fn zero_rows_is_empty_data_error() {
    let table = ResultTable { headers: vec!["a".into()], rows: Vec::new() };
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(&dir, "none");

    assert!(matches!(export_table(&table, &opts), Err(ScrapeError::EmptyData(_))));
    assert!(!out_path(&opts).exists());
}

#[test]
fn zero_columns_is_empty_data_error() {
    let table = ResultTable { headers: Vec::new(), rows: vec![Vec::new()] };
    let dir = tempfile::tempdir().unwrap();
    let result = export_table(&table, &opts_in(&dir, "none"));
    assert!(matches!(result, Err(ScrapeError::EmptyData(_))));
}

#[test]
fn single_column_with_empty_cells_reads_back_every_row() {
    let table = ResultTable {
        headers: vec!["bonus".into()],
        rows: vec![vec!["".into()], vec!["BO".into()], vec!["".into()]],
    };
    let dir = tempfile::tempdir().unwrap();
    let written = export_table(&table, &opts_in(&dir, "bonus")).unwrap();

    let back = read_table(&written).unwrap();
    assert_eq!(back.row_count(), 3);
    assert_eq!(back, table);
}

#[test]
fn export_replaces_the_file_and_leaves_nothing_else_behind() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(&dir, "matchs_results");
    let first = ResultTable { headers: vec!["a".into()], rows: vec![vec!["old".into()]] };
    let second = ResultTable { headers: vec!["a".into()], rows: vec![vec!["new".into()]] };

    export_table(&first, &opts).unwrap();
    let written = export_table(&second, &opts).unwrap();

    assert_eq!(fs::read_to_string(&written).unwrap(), "a\nnew\n");
    let entries: Vec<_> = fs::read_dir(&opts.out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn failed_export_leaves_no_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(&dir, "blocked");
    // The target name is taken by a directory, so the final rename fails.
    fs::create_dir_all(out_path(&opts)).unwrap();
    let table = ResultTable { headers: vec!["a".into()], rows: vec![vec!["1".into()]] };

    assert!(matches!(export_table(&table, &opts), Err(ScrapeError::Io(_))));

    let names: Vec<_> = fs::read_dir(&opts.out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, [std::ffi::OsString::from("blocked.csv")]);
    assert!(out_path(&opts).is_dir());
}

#[test]
fn one_by_one_table_is_written() {
    let table = ResultTable {
        headers: vec!["saison".into()],
        rows: vec![vec!["2019-2020".into()]],
    };
    let dir = tempfile::tempdir().unwrap();
    let written = export_table(&table, &opts_in(&dir, "tiny")).unwrap();
    assert_eq!(fs::read_to_string(written).unwrap(), "saison\n2019-2020\n");
}
