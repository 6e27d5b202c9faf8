use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

pub fn derive(s: synstructure::Structure) -> TokenStream2 {
    assert_eq!(
        s.variants().len(),
        1,
        "Record can only be derived for a struct, not an enum"
    );
    let variant = &s.variants()[0];
    let fields: Vec<&syn::Field> = variant.ast().fields.iter().collect();
    assert!(
        !fields.is_empty(),
        "Record needs at least one member; a unit struct isn't meaningful on the wire"
    );

    let member_count = fields.len() as u64;
    let is_value_wrapper = fields.len() == 1
        && fields[0]
            .ident
            .as_ref()
            .map(|i| i == "value")
            .unwrap_or(false);

    let idents: Vec<&syn::Ident> = fields
        .iter()
        .map(|f| f.ident.as_ref().expect("Record fields must be named"))
        .collect();
    let types: Vec<&syn::Type> = fields.iter().map(|f| &f.ty).collect();

    let member_shapes = types
        .iter()
        .map(|ty| quote! { <#ty as ::tagwire::WireType>::shape() });
    let encode_members = idents
        .iter()
        .map(|id| quote! { ::tagwire::Encode::encode(&self.#id, w)?; });
    let decode_members = idents.iter().zip(types.iter()).map(|(id, ty)| {
        quote! { #id: <#ty as ::tagwire::Decode>::decode(r)?, }
    });

    let record_impl = s.gen_impl(quote! {
        gen impl ::tagwire::record::Record for @Self {
            const MEMBER_COUNT: u64 = #member_count;
            const IS_VALUE_WRAPPER: bool = #is_value_wrapper;

            fn member_shapes() -> ::std::vec::Vec<::tagwire::Shape> {
                ::std::vec![ #(#member_shapes),* ]
            }

            fn encode_members<W: ::tagwire::Writer + ?::core::marker::Sized>(
                &self,
                w: &mut W,
            ) -> ::tagwire::Result<()> {
                #(#encode_members)*
                ::core::result::Result::Ok(())
            }

            fn decode_members<R: ::tagwire::Reader + ?::core::marker::Sized>(
                r: &mut R,
            ) -> ::tagwire::Result<Self> {
                ::core::result::Result::Ok(Self { #(#decode_members)* })
            }
        }
    });

    let encode_impl = s.gen_impl(quote! {
        gen impl ::tagwire::Encode for @Self {
            fn encode<W: ::tagwire::Writer + ?::core::marker::Sized>(
                &self,
                w: &mut W,
            ) -> ::tagwire::Result<()> {
                ::tagwire::record::encode_record(self, w)
            }
        }
    });

    let decode_impl = s.gen_impl(quote! {
        gen impl ::tagwire::Decode for @Self {
            fn decode<R: ::tagwire::Reader + ?::core::marker::Sized>(
                r: &mut R,
            ) -> ::tagwire::Result<Self> {
                ::tagwire::record::decode_record(r)
            }
        }
    });

    let wire_type_impl = s.gen_impl(quote! {
        gen impl ::tagwire::WireType for @Self {
            fn shape() -> ::tagwire::Shape {
                ::tagwire::record::record_shape::<Self>()
            }
        }
    });

    quote! {
        #record_impl
        #encode_impl
        #decode_impl
        #wire_type_impl
    }
}
