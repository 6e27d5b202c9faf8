use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::attribute::{deleted_entries, field_id, struct_name_override};

/// The `T` inside a declared `Option<T>` field; `Table` fields must all be
/// `Option<T>` so presence can be tracked per entry.
fn option_inner(ty: &syn::Type) -> &syn::Type {
    if let syn::Type::Path(p) = ty {
        if let Some(seg) = p.path.segments.last() {
            if seg.ident == "Option" {
                if let syn::PathArguments::AngleBracketed(args) = &seg.arguments {
                    if let Some(syn::GenericArgument::Type(inner)) = args.args.first() {
                        return inner;
                    }
                }
            }
        }
    }
    panic!("Table fields must be declared as Option<T>");
}

pub fn derive(s: synstructure::Structure) -> TokenStream2 {
    assert_eq!(
        s.variants().len(),
        1,
        "Table can only be derived for a struct, not an enum"
    );
    let variant = &s.variants()[0];
    let fields: Vec<&syn::Field> = variant.ast().fields.iter().collect();
    assert!(!fields.is_empty(), "Table needs at least one entry");

    let name = struct_name_override(&s.ast().attrs).unwrap_or_else(|| s.ast().ident.to_string());

    let idents: Vec<&syn::Ident> = fields
        .iter()
        .map(|f| f.ident.as_ref().expect("Table fields must be named"))
        .collect();
    let ids: Vec<u64> = fields
        .iter()
        .map(|f| {
            field_id(&f.attrs)
                .unwrap_or_else(|| panic!("every Table field needs #[tagwire(id = N)]"))
        })
        .collect();
    let field_types: Vec<&syn::Type> = fields.iter().map(|f| &f.ty).collect();
    let inner_types: Vec<&syn::Type> = field_types.iter().map(|ty| option_inner(ty)).collect();

    let deleted = deleted_entries(&s.ast().attrs);
    let deleted_ids: Vec<u64> = deleted.iter().map(|d| d.id).collect();
    let deleted_types: Vec<&syn::Type> = deleted.iter().map(|d| &d.ty).collect();

    let present_count_terms = idents
        .iter()
        .map(|id| quote! { (self.#id.is_some() as u64) });
    let present_count = quote! { 0u64 #( + #present_count_terms )* };

    let declared_active_entries = ids.iter().zip(field_types.iter()).map(|(id, ty)| {
        quote! {
            (#id, ::tagwire::EntryKind::Active, <#ty as ::tagwire::WireType>::shape()),
        }
    });
    let declared_deleted_entries = deleted_ids.iter().zip(deleted_types.iter()).map(|(id, ty)| {
        quote! {
            (#id, ::tagwire::EntryKind::Deleted, <::core::option::Option<#ty> as ::tagwire::WireType>::shape()),
        }
    });

    let encode_entries = idents.iter().zip(ids.iter()).map(|(id_field, id)| {
        quote! {
            if let ::core::option::Option::Some(v) = &self.#id_field {
                ::tagwire::table::encode_entry(#id, v, w)?;
            }
        }
    });

    let empty_fields = idents
        .iter()
        .map(|id| quote! { #id: ::core::option::Option::None });

    let decode_entry_arms = idents.iter().zip(ids.iter()).zip(inner_types.iter()).map(
        |((id_field, id), inner_ty)| {
            quote! {
                #id => {
                    self.#id_field = ::core::option::Option::Some(
                        <#inner_ty as ::tagwire::Decode>::decode(r)?,
                    );
                }
            }
        },
    );

    let table_impl = s.gen_impl(quote! {
        gen impl ::tagwire::table::Table for @Self {
            const HASH: u64 = ::tagwire::sip::table_hash(#name);

            fn present_count(&self) -> u64 {
                #present_count
            }

            fn declared_entries() -> ::std::vec::Vec<(u64, ::tagwire::EntryKind, ::tagwire::Shape)> {
                ::std::vec![
                    #(#declared_active_entries)*
                    #(#declared_deleted_entries)*
                ]
            }

            fn encode_entries<W: ::tagwire::Writer + ?::core::marker::Sized>(
                &self,
                w: &mut W,
            ) -> ::tagwire::Result<()> {
                #(#encode_entries)*
                ::core::result::Result::Ok(())
            }

            fn empty() -> Self {
                Self { #(#empty_fields),* }
            }

            fn decode_entry<R: ::tagwire::Reader + ?::core::marker::Sized>(
                &mut self,
                id: u64,
                r: &mut ::tagwire::bounded::BoundedReader<'_, R>,
            ) -> ::tagwire::Result<()> {
                match id {
                    #(#decode_entry_arms)*
                    _ => {}
                }
                ::core::result::Result::Ok(())
            }
        }
    });

    let encode_impl = s.gen_impl(quote! {
        gen impl ::tagwire::Encode for @Self {
            fn encode<W: ::tagwire::Writer + ?::core::marker::Sized>(
                &self,
                w: &mut W,
            ) -> ::tagwire::Result<()> {
                ::tagwire::table::encode_table(self, w)
            }
        }
    });

    let decode_impl = s.gen_impl(quote! {
        gen impl ::tagwire::Decode for @Self {
            fn decode<R: ::tagwire::Reader + ?::core::marker::Sized>(
                r: &mut R,
            ) -> ::tagwire::Result<Self> {
                ::tagwire::table::decode_table(r)
            }
        }
    });

    let wire_type_impl = s.gen_impl(quote! {
        gen impl ::tagwire::WireType for @Self {
            fn shape() -> ::tagwire::Shape {
                ::tagwire::table::table_shape::<Self>()
            }
        }
    });

    quote! {
        #table_impl
        #encode_impl
        #decode_impl
        #wire_type_impl
    }
}
