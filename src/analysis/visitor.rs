// Copyright (c) 2025 Nicholas D. Crosbie
use crate::analysis::source_index::SourceIndex;
use crate::analysis::type_names::type_name;
use crate::models::ReflectionInfo;
use syn::spanned::Spanned;
use syn::visit::{self, Visit};
use syn::{Ident, ImplItem, TraitItem};

/// Records every function, type and method declared in one file.
pub struct DeclarationVisitor<'i> {
    pub file_path: String,
    pub index: &'i mut SourceIndex,
}

impl<'i> DeclarationVisitor<'i> {
    pub fn new(file_path: String, index: &'i mut SourceIndex) -> Self {
        Self { file_path, index }
    }

    // Starts at the name rather than the item so doc comments and
    // attributes above it don't move the line.
    fn declaration(&self, name: String, ident: &Ident, item: &impl Spanned) -> ReflectionInfo {
        ReflectionInfo::new(
            name,
            Some(self.file_path.clone()),
            Some(ident.span().start().line),
            Some(item.span().end().line),
        )
    }
}

impl<'ast> Visit<'ast> for DeclarationVisitor<'_> {
    fn visit_item_fn(&mut self, item_fn: &'ast syn::ItemFn) {
        let name = item_fn.sig.ident.to_string();
        let info = self.declaration(name, &item_fn.sig.ident, item_fn);
        self.index.add_function(info);

        visit::visit_item_fn(self, item_fn);
    }

    fn visit_item_struct(&mut self, item_struct: &'ast syn::ItemStruct) {
        self.index.add_type(&item_struct.ident.to_string());

        visit::visit_item_struct(self, item_struct);
    }

    fn visit_item_enum(&mut self, item_enum: &'ast syn::ItemEnum) {
        self.index.add_type(&item_enum.ident.to_string());

        visit::visit_item_enum(self, item_enum);
    }

    fn visit_item_trait(&mut self, item_trait: &'ast syn::ItemTrait) {
        let trait_name = item_trait.ident.to_string();
        self.index.add_type(&trait_name);

        for item in &item_trait.items {
            if let TraitItem::Fn(method) = item {
                let method_name = method.sig.ident.to_string();
                let info = self.declaration(
                    format!("{}::{}", trait_name, method_name),
                    &method.sig.ident,
                    method,
                );
                self.index.add_method(&trait_name, &method_name, info);
            }
        }

        visit::visit_item_trait(self, item_trait);
    }

    fn visit_item_impl(&mut self, item_impl: &'ast syn::ItemImpl) {
        let self_type = type_name(&item_impl.self_ty);
        self.index.add_type(&self_type);
        if let Some((_, trait_path, _)) = &item_impl.trait_ {
            if let Some(segment) = trait_path.segments.last() {
                self.index
                    .add_trait_impl(&self_type, &segment.ident.to_string());
            }
        }

        for item in &item_impl.items {
            if let ImplItem::Fn(method) = item {
                let method_name = method.sig.ident.to_string();
                let info = self.declaration(
                    format!("{}::{}", self_type, method_name),
                    &method.sig.ident,
                    method,
                );
                self.index.add_method(&self_type, &method_name, info);
            }
        }

        visit::visit_item_impl(self, item_impl);
    }
}
