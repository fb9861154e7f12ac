use std::fs;
use std::path::{Path, PathBuf};

use boundcert::core::series::SeriesSchema;
use boundcert::errors::SummaryError;
use boundcert::table::cert::{self, CertParams, CertRow};

const MIN_PATTERN: &str = "lambdaboundmin-23PR--=ALPHA=--v1.csv";
const MAX_PATTERN: &str = "lambdaboundmax-23PR--=ALPHA=--v1.csv";

fn unique_root(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "boundcert_cert_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

fn write_alpha_file(root: &Path, tag: &str, pattern: &str, contents: &str) {
    let dir = root.join(format!("alpha-{tag}"));
    fs::create_dir_all(&dir).expect("create alpha dir");
    let name = pattern.replace("--=ALPHA=--", &format!("-{tag}-"));
    fs::write(dir.join(name), contents).expect("write series file");
}

fn params(l11: f64, l13: f64, tail: usize) -> CertParams {
    CertParams {
        l11_modulus: l11,
        l13_modulus: l13,
        tail_count: tail,
    }
}

#[test]
fn bracket_and_tail_fields_for_one_alpha() {
    let root = unique_root("one_alpha");
    // Moduli 20/40 put the targets at 200 and 800 for alpha = 1.
    write_alpha_file(
        &root,
        "1",
        MIN_PATTERN,
        "n_0,Lambda_min\n100,1.0\n200,2.0\n300,3.0\n",
    );
    write_alpha_file(
        &root,
        "1",
        MAX_PATTERN,
        "n_1,Lambda_max\n150,10.0\n250,20.0\n",
    );

    let rows = cert::build_rows(
        &root,
        MIN_PATTERN,
        MAX_PATTERN,
        &SeriesSchema::LAMBDA_ANY,
        &params(20.0, 40.0, 2),
    )
    .expect("build rows");

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.alpha_tag, "1");
    // Exact match at 200 on the lower series; equidistant tie at 200
    // on the upper series goes to the below sample.
    assert_eq!(row.l11_lo, Some(2.0));
    assert_eq!(row.l11_hi, Some(10.0));
    // Target 800 lies above every sample: no bracket, no value.
    assert_eq!(row.l13_lo, None);
    assert_eq!(row.l13_hi, None);
    assert_eq!(row.lfinal_lo, Some(2.5));
    assert_eq!(row.lfinal_lo_std, Some(0.5));
    assert_eq!(row.lfinal_hi, Some(15.0));
    assert_eq!(row.lfinal_hi_std, Some(5.0));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_or_empty_inputs_emit_blank_rows_in_alpha_order() {
    let root = unique_root("blank_rows");
    // alpha-1: complete pair.
    write_alpha_file(&root, "1", MIN_PATTERN, "n_0,Lambda_min\n10,1.0\n300,2.0\n");
    write_alpha_file(&root, "1", MAX_PATTERN, "n_1,Lambda_max\n10,5.0\n300,6.0\n");
    // alpha-0.5: max file missing.
    write_alpha_file(&root, "0.5", MIN_PATTERN, "n_0,Lambda_min\n10,1.0\n");
    // alpha-0.25: both present, every metric is the undefined sentinel.
    write_alpha_file(
        &root,
        "0.25",
        MIN_PATTERN,
        "n_0,Lambda_min\n10,0.000000\n20,0.000000\n",
    );
    write_alpha_file(&root, "0.25", MAX_PATTERN, "n_1,Lambda_max\n10,0.000000\n");
    // Unparsable tag is skipped entirely.
    fs::create_dir_all(root.join("alpha-notanumber")).expect("create dir");

    let rows = cert::build_rows(
        &root,
        MIN_PATTERN,
        MAX_PATTERN,
        &SeriesSchema::LAMBDA_ANY,
        &params(2.0, 4.0, 1),
    )
    .expect("build rows");

    let tags: Vec<&str> = rows.iter().map(|r| r.alpha_tag.as_str()).collect();
    assert_eq!(tags, vec!["0.25", "0.5", "1"]);
    assert_eq!(rows[0], CertRow::blank("0.25".to_string()));
    assert_eq!(rows[1], CertRow::blank("0.5".to_string()));
    assert!(rows[2].has_values());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn run_writes_five_decimal_csv() {
    let root = unique_root("csv");
    write_alpha_file(
        &root,
        "1",
        MIN_PATTERN,
        "n_0,Lambda_min\n100,1.0\n200,2.0\n300,3.0\n",
    );
    write_alpha_file(
        &root,
        "1",
        MAX_PATTERN,
        "n_1,Lambda_max\n150,10.0\n250,20.0\n",
    );

    let out_file = unique_root("csv_out").with_extension("csv");
    cert::run(
        &root,
        MIN_PATTERN,
        MAX_PATTERN,
        &out_file,
        &SeriesSchema::LAMBDA_ANY,
        &params(20.0, 40.0, 2),
    )
    .expect("cert run");

    let text = fs::read_to_string(&out_file).expect("read cert output");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("alpha,L11_lo,L11_hi,L13_lo,L13_hi,Lfinal_lo,Lfinal_lo_std,Lfinal_hi,Lfinal_hi_std")
    );
    assert_eq!(
        lines.next(),
        Some("1,2.00000,10.00000,,,2.50000,0.50000,15.00000,5.00000")
    );
    assert_eq!(lines.next(), None);

    let _ = fs::remove_file(&out_file);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn all_blank_table_is_a_failure_and_writes_nothing() {
    let root = unique_root("all_blank");
    write_alpha_file(&root, "0.5", MIN_PATTERN, "n_0,Lambda_min\n10,1.0\n");

    let out_file = unique_root("all_blank_out").with_extension("csv");
    let err = cert::run(
        &root,
        MIN_PATTERN,
        MAX_PATTERN,
        &out_file,
        &SeriesSchema::LAMBDA_ANY,
        &params(2.0, 4.0, 1),
    )
    .expect_err("all rows blank");
    assert!(matches!(err, SummaryError::NoResults));
    assert!(!out_file.exists());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn patterns_must_carry_the_placeholder() {
    let root = unique_root("placeholder");
    fs::create_dir_all(&root).expect("create root");

    let err = cert::build_rows(
        &root,
        "lambdaboundmin-1.csv",
        MAX_PATTERN,
        &SeriesSchema::LAMBDA_ANY,
        &params(2.0, 4.0, 1),
    )
    .expect_err("pattern without placeholder");
    assert!(matches!(err, SummaryError::MissingPlaceholder(_)));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn discovered_non_canonical_alphas_join_the_grid() {
    let root = unique_root("non_canonical");
    write_alpha_file(&root, "0.3", MIN_PATTERN, "n_0,Lambda_min\n10,1.0\n20,2.0\n");
    write_alpha_file(&root, "0.3", MAX_PATTERN, "n_1,Lambda_max\n10,3.0\n20,4.0\n");

    let rows = cert::build_rows(
        &root,
        MIN_PATTERN,
        MAX_PATTERN,
        &SeriesSchema::LAMBDA_ANY,
        &params(3.0, 100.0, 2),
    )
    .expect("build rows");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].alpha_tag, "0.3");
    // Target 9 / 0.6 = 15 sits between the two samples.
    assert_eq!(rows[0].l11_lo, Some(1.0));

    let _ = fs::remove_dir_all(&root);
}
