//! Hand-rolled `#[tagwire(...)]` attribute parsing, in the same spirit as
//! `fuel-derive`'s `canonical` attribute: no attribute-parsing crate, just
//! `syn`'s `Attribute::parse_nested_meta`.
use syn::{Attribute, LitInt, LitStr, Type};

/// `#[tagwire(id = N)]` on a field.
pub fn field_id(attrs: &[Attribute]) -> Option<u64> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("tagwire") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                let lit: LitInt = meta.value()?.parse()?;
                found = Some(lit.base10_parse()?);
            }
            Ok(())
        })
        .expect("malformed #[tagwire(...)] attribute");
    }
    found
}

/// `#[tagwire(name = "...")]` on a struct, overriding the table name used
/// to derive the wire hash.
pub fn struct_name_override(attrs: &[Attribute]) -> Option<String> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("tagwire") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                found = Some(lit.value());
            }
            Ok(())
        })
        .expect("malformed #[tagwire(...)] attribute");
    }
    found
}

/// One `#[tagwire(deleted(id = N, ty = SomeType))]` entry on a struct. A
/// struct may carry any number of these.
pub struct DeletedEntry {
    pub id: u64,
    pub ty: Type,
}

pub fn deleted_entries(attrs: &[Attribute]) -> Vec<DeletedEntry> {
    let mut out = Vec::new();
    for attr in attrs {
        if !attr.path().is_ident("tagwire") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("deleted") {
                let content;
                syn::parenthesized!(content in meta.input);
                let mut id = None;
                let mut ty = None;
                loop {
                    let ident: syn::Ident = content.parse()?;
                    content.parse::<syn::Token![=]>()?;
                    if ident == "id" {
                        let lit: LitInt = content.parse()?;
                        id = Some(lit.base10_parse()?);
                    } else if ident == "ty" {
                        ty = Some(content.parse()?);
                    }
                    if content.is_empty() {
                        break;
                    }
                    content.parse::<syn::Token![,]>()?;
                    if content.is_empty() {
                        break;
                    }
                }
                out.push(DeletedEntry {
                    id: id.expect("deleted(...) entry needs an id"),
                    ty: ty.expect("deleted(...) entry needs a ty"),
                });
            }
            Ok(())
        })
        .expect("malformed #[tagwire(...)] attribute");
    }
    out
}
