#![allow(missing_docs, dead_code)]

use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

pub const CNF: &str = "c generated by hand\r
p cnf 4 3\r
1 -2 0\r
2 3 -4 0\n\
-1 4 0\n";

/// Clauses of [`CNF`].
pub const CLAUSES: [&[i32]; 3] = [&[1, -2], &[2, 3, -4], &[-1, 4]];

/// Writes `bytes` to a fresh file under the system temp directory.
pub fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "streambuffer-{}-{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}
