use BinomialStatistics::dataio::*;
use BinomialStatistics::errors::DataError;
use std::fs;
use std::path::PathBuf;

/// Writes `content` to a unique file in the target temp dir and returns
/// its path.
fn write_fixture(name: &str, content: &str) -> PathBuf {
    let mut path: PathBuf = std::env::temp_dir();
    path.push(format!("BinomialStatistics_test_{name}"));
    fs::write(&path, content).expect("The temp dir should be writable. ");
    return path;
}

#[test]
fn reads_one_count_per_line() {
    let path: PathBuf = write_fixture("counts.txt", "3\n7\n\n  5\n0\n");

    let counts: Vec<u64> = read_counts_file(&path).unwrap();
    assert_eq!(counts, vec![3, 7, 5, 0]);

    let _ = fs::remove_file(path);
}

#[test]
fn parse_failures_report_the_line() {
    let path: PathBuf = write_fixture("bad_counts.txt", "3\nseven\n5\n");

    match read_counts_file(&path) {
        Err(DataError::Parse { line, content }) => {
            assert_eq!(line, 2);
            assert_eq!(content, "seven");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }

    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_is_an_io_error() {
    let result = read_counts_file("/definitely/not/a/real/path.txt");
    assert!(matches!(result, Err(DataError::Io(_))));
}

#[test]
fn reads_the_select_code_column() {
    let path: PathBuf = write_fixture(
        "select_code.csv",
        "condition,selection,selectCode\na,x,1\na,y,0\nb,z,1\n",
    );

    let values: Vec<u64> = read_select_code_csv(&path, None).unwrap();
    assert_eq!(values, vec![1, 0, 1]);

    // explicit column name
    let values: Vec<u64> = read_select_code_csv(&path, Some("selectCode")).unwrap();
    assert_eq!(values, vec![1, 0, 1]);

    let _ = fs::remove_file(path);
}

#[test]
fn missing_column_and_ragged_rows_fail() {
    let path: PathBuf = write_fixture("no_column.csv", "a,b\n1,2\n");
    assert!(matches!(
        read_select_code_csv(&path, None),
        Err(DataError::MissingColumn(_))
    ));
    let _ = fs::remove_file(path);

    let path: PathBuf = write_fixture("ragged.csv", "a,selectCode\n1,2\n1\n");
    assert!(matches!(
        read_select_code_csv(&path, None),
        Err(DataError::RaggedRow(3))
    ));
    let _ = fs::remove_file(path);
}
