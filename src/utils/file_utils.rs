// Copyright (c) 2025 Nicholas D. Crosbie
use crate::error::ConfigError;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use toml::Value;

pub fn read_file_to_string(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

pub fn find_cargo_toml(start_dir: &Path) -> Option<PathBuf> {
    let cargo_path = start_dir.join("Cargo.toml");
    if cargo_path.exists() {
        return Some(cargo_path);
    }

    let parent = start_dir.parent()?;
    find_cargo_toml(parent)
}

pub fn parse_cargo_toml(path: &Path) -> Result<Value, ConfigError> {
    let content = read_file_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    content.parse::<Value>().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Collects `.rs` files below `dir`, skipping hidden directories and any
/// directory named in `exclude_dirs`. Results are sorted.
pub fn find_rust_files(dir: &Path, exclude_dirs: &[String]) -> io::Result<Vec<PathBuf>> {
    let mut rust_files = Vec::new();

    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                if let Some(dir_name) = path.file_name() {
                    let dir_name = dir_name.to_string_lossy();
                    let excluded = exclude_dirs.iter().any(|excluded| *excluded == dir_name);
                    if !dir_name.starts_with('.') && !excluded {
                        let mut subdir_files = find_rust_files(&path, exclude_dirs)?;
                        rust_files.append(&mut subdir_files);
                    }
                }
            } else if let Some(extension) = path.extension() {
                if extension == "rs" {
                    rust_files.push(path);
                }
            }
        }
    }

    rust_files.sort();
    Ok(rust_files)
}

/// Replaces every backslash separator with a forward slash.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
