#![allow(dead_code)]

use infrastructure::Database;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestDb {
    _dir: TempDir, // keep alive for the life of the test
    pub path: String,
    pub database: Database,
}

pub fn setup_db() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    let database = Database::new(&path).expect("pool");
    database.run_migrations().expect("migrations");

    TestDb {
        _dir: dir,
        path,
        database,
    }
}
