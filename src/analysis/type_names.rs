// Copyright (c) 2025 Nicholas D. Crosbie
use quote::ToTokens;
use syn::Type;

/// The name a type is looked up by: the last path segment without generic
/// arguments, so `crate::shapes::Circle<T>` becomes `Circle`.
pub fn type_name(ty: &Type) -> String {
    match ty {
        Type::Path(path) => match path.path.segments.last() {
            Some(segment) => segment.ident.to_string(),
            None => ty.to_token_stream().to_string(),
        },
        Type::Reference(ref_type) => type_name(&ref_type.elem),
        Type::Paren(paren) => type_name(&paren.elem),
        Type::Group(group) => type_name(&group.elem),
        // Tuples, slices, trait objects: keep their tokens as the name
        _ => ty.to_token_stream().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn name_of(src: &str) -> String {
        type_name(&syn::parse_str::<Type>(src).unwrap())
    }

    #[test]
    fn uses_last_path_segment() {
        assert_eq!(name_of("Circle"), "Circle");
        assert_eq!(name_of("crate::shapes::Circle<T>"), "Circle");
        assert_eq!(name_of("&'a mut Circle"), "Circle");
    }

    #[test]
    fn falls_back_to_tokens() {
        assert_eq!(name_of("(u8, u16)").replace(' ', ""), "(u8,u16)");
        assert_eq!(name_of("[u8]").replace(' ', ""), "[u8]");
    }
}
