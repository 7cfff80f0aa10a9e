// Copyright (c) 2025 Nicholas D. Crosbie
use crate::analysis::reflector::{ReflectionTarget, Reflector, DEFAULT_CALL_OPERATOR};
use crate::analysis::visitor::DeclarationVisitor;
use crate::config::Config;
use crate::error::{IndexError, ReflectionError};
use crate::models::{ReflectionInfo, CLOSURE_NAME};
use crate::utils::{find_rust_files, read_file_to_string};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use syn::visit::Visit;
use tracing::{debug, info, warn};

/// A reflector backed by declarations parsed out of Rust source files,
/// plus builtins that have no source at all.
///
/// Names are plain identifiers; the first declaration of a name wins.
/// A type also answers for the methods of the traits it implements, so
/// provided trait methods resolve to their declaration in the trait.
#[derive(Debug, Clone)]
pub struct SourceIndex {
    functions: HashMap<String, ReflectionInfo>,
    types: HashMap<String, HashMap<String, ReflectionInfo>>,
    implemented_traits: HashMap<String, Vec<String>>,
    call_operator: String,
}

impl Default for SourceIndex {
    fn default() -> Self {
        Self {
            functions: HashMap::new(),
            types: HashMap::new(),
            implemented_traits: HashMap::new(),
            call_operator: DEFAULT_CALL_OPERATOR.to_string(),
        }
    }
}

impl SourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty index with the configured builtins and call operator.
    pub fn from_config(config: &Config) -> Self {
        let mut index = Self::new().with_call_operator(&config.call_operator);
        for builtin in &config.builtins {
            index.add_builtin(builtin);
        }
        index
    }

    /// Indexes every Rust file below `project_dir`. Files that fail to parse
    /// are skipped.
    pub fn from_project(project_dir: &Path, config: &Config) -> Result<Self, IndexError> {
        let mut index = Self::from_config(config);
        let files =
            find_rust_files(project_dir, &config.exclude_dirs).map_err(|source| IndexError::Io {
                path: project_dir.to_path_buf(),
                source,
            })?;

        for file in &files {
            match index.index_file(file) {
                Ok(()) => {}
                Err(err @ IndexError::Parse { .. }) => warn!("skipping file: {}", err),
                Err(err) => return Err(err),
            }
        }

        info!(
            files = files.len(),
            functions = index.function_count(),
            methods = index.method_count(),
            "indexed project"
        );
        Ok(index)
    }

    pub fn with_call_operator(mut self, call_operator: &str) -> Self {
        self.call_operator = call_operator.to_string();
        self
    }

    pub fn index_file(&mut self, path: &Path) -> Result<(), IndexError> {
        let content = read_file_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.index_source(path, &content)
    }

    pub fn index_source(&mut self, path: &Path, content: &str) -> Result<(), IndexError> {
        let file = syn::parse_file(content).map_err(|source| IndexError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut visitor = DeclarationVisitor::new(path.display().to_string(), self);
        visitor.visit_file(&file);
        Ok(())
    }

    /// Returns false if a function of that name was already known.
    pub fn add_function(&mut self, info: ReflectionInfo) -> bool {
        match self.functions.entry(info.name.clone()) {
            Entry::Occupied(_) => {
                debug!(name = %info.name, "duplicate function ignored");
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(info);
                true
            }
        }
    }

    /// A function that exists but has no source location.
    pub fn add_builtin(&mut self, name: &str) -> bool {
        self.add_function(ReflectionInfo::native(name))
    }

    pub fn add_type(&mut self, type_name: &str) {
        self.types.entry(type_name.to_string()).or_default();
    }

    /// Returns false if the type already had a method of that name.
    pub fn add_method(&mut self, type_name: &str, method: &str, info: ReflectionInfo) -> bool {
        let methods = self.types.entry(type_name.to_string()).or_default();
        match methods.entry(method.to_string()) {
            Entry::Occupied(_) => {
                debug!(type_name, method, "duplicate method ignored");
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(info);
                true
            }
        }
    }

    /// Records `impl trait_name for type_name`.
    pub fn add_trait_impl(&mut self, type_name: &str, trait_name: &str) {
        let traits = self
            .implemented_traits
            .entry(type_name.to_string())
            .or_default();
        if !traits.iter().any(|known| known == trait_name) {
            traits.push(trait_name.to_string());
        }
    }

    /// The type's own method, else one provided by a trait it implements.
    fn find_method(&self, type_name: &str, method: &str) -> Option<&ReflectionInfo> {
        if let Some(info) = self.types.get(type_name)?.get(method) {
            return Some(info);
        }

        self.implemented_traits
            .get(type_name)?
            .iter()
            .find_map(|trait_name| self.types.get(trait_name)?.get(method))
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn method_count(&self) -> usize {
        self.types.values().map(HashMap::len).sum()
    }
}

impl Reflector for SourceIndex {
    fn function_exists(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    fn method_exists(&self, type_name: &str, method: &str) -> bool {
        self.find_method(type_name, method).is_some()
    }

    fn reflect(&self, target: ReflectionTarget<'_>) -> Result<ReflectionInfo, ReflectionError> {
        match target {
            ReflectionTarget::Function(name) => self
                .functions
                .get(name)
                .cloned()
                .ok_or_else(|| ReflectionError::FunctionNotFound(name.to_string())),
            ReflectionTarget::Method { type_name, method } => {
                if !self.types.contains_key(type_name) {
                    return Err(ReflectionError::TypeNotFound(type_name.to_string()));
                }
                self.find_method(type_name, method)
                    .cloned()
                    .ok_or_else(|| ReflectionError::MethodNotFound {
                        type_name: type_name.to_string(),
                        method: method.to_string(),
                    })
            }
            ReflectionTarget::Closure(closure) => Ok(ReflectionInfo::new(
                CLOSURE_NAME,
                closure.file_path.clone(),
                closure.line_number,
                None,
            )),
        }
    }

    fn call_operator(&self) -> &str {
        &self.call_operator
    }
}
