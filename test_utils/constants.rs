#![allow(unused)] // Ignore due to all constants not being utilized across all test files

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static SAMPLE_DOCUMENT_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files", "tekst.txt"));
