// src/tests/linereader_tests.rs

#![allow(non_snake_case)]

use crate::common::{Count, FPath};
use crate::debug::helpers::{create_temp_file_bytes, ntf_fpath};
use crate::readers::linereader::{LineReader, ResultS3LineFind, SummaryLineReader};
use crate::tests::common::{NTF_SIM_BASIC_path, NTF_SIM_EMPTY_path, SIM_BASIC_LINES};

use std::io::ErrorKind;

use ::test_case::test_case;

/// read all lines of `data`
fn read_lines(data: &[u8]) -> (Vec<String>, SummaryLineReader) {
    let mut lr = LineReader::new(data, FPath::from("test"));
    let mut lines: Vec<String> = Vec::new();
    loop {
        match lr.next_line() {
            ResultS3LineFind::Found(line_number) => {
                lines.push(lr.line().to_string());
                assert_eq!(line_number, lines.len() as Count);
                assert_eq!(lr.line_number(), line_number);
            }
            ResultS3LineFind::Done => break,
            ResultS3LineFind::Err(err) => panic!("next_line() returned Err {}", err),
        }
    }
    assert!(lr.is_eof());

    (lines, lr.summary())
}

#[test_case(b"", &[]; "empty")]
#[test_case(b"\n", &[""]; "one newline")]
#[test_case(b"\n\n", &["", ""]; "two newlines")]
#[test_case(b"TB", &["TB"]; "no line ending")]
#[test_case(b"TB\n", &["TB"]; "LF")]
#[test_case(b"TB\r\n", &["TB"]; "CRLF")]
#[test_case(b"SE\nID 1 1\r\nEN", &["SE", "ID 1 1", "EN"]; "mixed endings")]
#[test_case(b"a\rb\n", &["a\rb"]; "lone CR kept")]
fn test_LineReader_lines(
    data: &[u8],
    expect: &[&str],
) {
    let (lines, summary) = read_lines(data);
    assert_eq!(lines, expect);
    assert_eq!(summary.LineReader_lines, expect.len() as Count);
    assert_eq!(summary.LineReader_bytes, data.len() as Count);
    assert_eq!(summary.LineReader_lines_invalid_utf8, 0);
}

#[test]
fn test_LineReader_invalid_utf8() {
    let (lines, summary) = read_lines(b"PM Cu\xff 3\nEN\n");
    assert_eq!(lines, vec!["PM Cu\u{FFFD} 3", "EN"]);
    assert_eq!(summary.LineReader_lines_invalid_utf8, 1);
}

#[test]
fn test_LineReader_done_repeats() {
    let mut lr = LineReader::new(&b"EN\n"[..], FPath::from("test"));
    let result = lr.next_line();
    assert!(result.is_ok());
    assert_eq!(result.ok(), Some(1));
    assert_eq!(lr.line(), "EN");
    let result = lr.next_line();
    assert!(result.is_ok() && result.is_done());
    assert_eq!(result.ok(), None);
    assert!(lr.next_line().is_done());
    assert_eq!(lr.count_lines_processed(), 1);
    assert_eq!(lr.count_bytes_processed(), 3);
}

#[test]
fn test_LineReader_open() {
    let mut lr = match LineReader::open(&NTF_SIM_BASIC_path) {
        Ok(val) => val,
        Err(err) => panic!("LineReader::open({:?}) returned Err {}", *NTF_SIM_BASIC_path, err),
    };
    assert_eq!(lr.path(), &*NTF_SIM_BASIC_path);
    assert!(lr.next_line().is_found());
    assert_eq!(lr.line(), "Version 1");
    while lr.next_line().is_found() {}
    assert_eq!(lr.count_lines_processed(), SIM_BASIC_LINES);
}

#[test]
fn test_LineReader_open_empty() {
    let mut lr = match LineReader::open(&NTF_SIM_EMPTY_path) {
        Ok(val) => val,
        Err(err) => panic!("LineReader::open({:?}) returned Err {}", *NTF_SIM_EMPTY_path, err),
    };
    assert!(lr.next_line().is_done());
    assert_eq!(lr.line(), "");
    assert_eq!(lr.line_number(), 0);
}

#[test]
fn test_LineReader_open_bytes() {
    let ntf = create_temp_file_bytes(b"TB\r\nEN\r\n");
    let path = ntf_fpath(&ntf);
    let mut lr = match LineReader::open(&path) {
        Ok(val) => val,
        Err(err) => panic!("LineReader::open({:?}) returned Err {}", path, err),
    };
    assert!(lr.next_line().is_found());
    assert_eq!(lr.line(), "TB");
    assert!(lr.next_line().is_found());
    assert_eq!(lr.line(), "EN");
    assert!(lr.next_line().is_done());
    assert_eq!(lr.summary().LineReader_bytes, 8);
}

#[test]
fn test_LineReader_open_not_exist() {
    let path = FPath::from("/this/path/does/not/exist.sim");
    match LineReader::open(&path) {
        Ok(_) => panic!("LineReader::open({:?}) returned Ok", path),
        Err(err) => {
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert!(err.to_string().contains("exist.sim"), "{}", err);
        }
    }
}
