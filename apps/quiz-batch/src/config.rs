//! Batch configuration read from the environment.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// What to load and what to do with it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Files to parse (`QUIZ_INPUT`).
    pub inputs: Vec<PathBuf>,
    /// Files to populate with answers from `inputs` (`QUIZ_SOLVE`).
    pub solve: Vec<PathBuf>,
    pub unify: bool,
    pub duplicates: bool,
    pub has_answer: bool,
    pub sort: bool,
    pub print: bool,
    pub to_mytestx: Option<PathBuf>,
    pub to_crib: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var_os(key))
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let inputs = paths(var("QUIZ_INPUT"));
        if inputs.is_empty() {
            return Err(AppError::Config("QUIZ_INPUT must be set".to_string()));
        }

        Ok(Self {
            inputs,
            solve: paths(var("QUIZ_SOLVE")),
            unify: flag("QUIZ_UNIFY", var("QUIZ_UNIFY"))?,
            duplicates: flag("QUIZ_DUPLICATES", var("QUIZ_DUPLICATES"))?,
            has_answer: flag("QUIZ_HAS_ANSWER", var("QUIZ_HAS_ANSWER"))?,
            sort: flag("QUIZ_SORT", var("QUIZ_SORT"))?,
            print: flag("QUIZ_PRINT", var("QUIZ_PRINT"))?,
            to_mytestx: path(var("QUIZ_TO_MYTESTX")),
            to_crib: path(var("QUIZ_TO_CRIB")),
            rust_log: var("RUST_LOG")
                .and_then(|v| v.into_string().ok())
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn paths(value: Option<OsString>) -> Vec<PathBuf> {
    value
        .map(|v| {
            env::split_paths(&v)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn path(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn flag(name: &str, value: Option<OsString>) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.to_string_lossy().trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_requires_input() {
        let result = config(&[("QUIZ_UNIFY", "1")]);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("QUIZ_INPUT", "a.mytestx.txt")]).unwrap();
        assert_eq!(config.inputs, vec![PathBuf::from("a.mytestx.txt")]);
        assert!(config.solve.is_empty());
        assert!(!config.unify && !config.sort && !config.print);
        assert_eq!(config.to_crib, None);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_flags_and_paths() {
        let joined = env::join_paths(["a.mytestx.txt", "b.mytestx.txt"]).unwrap();
        let joined = joined.to_string_lossy().into_owned();
        let config = config(&[
            ("QUIZ_INPUT", joined.as_str()),
            ("QUIZ_UNIFY", "TRUE"),
            ("QUIZ_HAS_ANSWER", "yes"),
            ("QUIZ_SORT", "0"),
            ("QUIZ_TO_CRIB", "crib.txt"),
        ])
        .unwrap();
        assert_eq!(config.inputs.len(), 2);
        assert!(config.unify);
        assert!(config.has_answer);
        assert!(!config.sort);
        assert_eq!(config.to_crib, Some(PathBuf::from("crib.txt")));
    }

    #[test]
    fn test_rejects_bad_flag() {
        let result = config(&[("QUIZ_INPUT", "a"), ("QUIZ_SORT", "maybe")]);
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("QUIZ_SORT")));
    }
}
