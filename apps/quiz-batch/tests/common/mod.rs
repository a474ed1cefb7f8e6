//! Shared fixtures for batch integration tests.
//!
//! Every test gets its own temporary directory; files are written there and
//! a [`Config`] pointing at them is returned.

use std::fs;
use std::path::{Path, PathBuf};

use quiz_batch::config::Config;
use tempfile::TempDir;

/// Answered corpus in MyTestX format.
pub const ANSWERED: &str = "\
// Answered corpus
# Maximum daily dose of lidocaine:
+ 2000 mg
- 1500 mg
- 750 mg

# Symptoms of hypoglycemia
+ tachycardia
- bradycardia
+ sweating

# symptoms of hypoglycemia.
+ Tachycardia
- Bradycardia
+ Sweating

# Symptoms of hypoglycemia in children
+ seizures
- fever
";

/// Placeholders waiting for answers.
pub const UNANSWERED: &str = "\
# maximum daily dose of lidocaine
- 750 mg
- 1500 mg
- 2000 mg

# Unknown question
- a
- b
";

pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `content` to `name` inside the temp dir.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config reading `inputs`, everything else off.
    pub fn config(&self, inputs: Vec<PathBuf>) -> Config {
        Config {
            inputs,
            rust_log: "info".to_string(),
            ..Config::default()
        }
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read output")
}
