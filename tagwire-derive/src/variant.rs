use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

pub fn derive(s: synstructure::Structure) -> TokenStream2 {
    assert!(
        matches!(s.ast().data, syn::Data::Enum(_)),
        "Variant can only be derived for an enum"
    );

    let variants = s.variants();
    assert!(!variants.is_empty(), "Variant needs at least one alternative");
    for v in variants {
        assert_eq!(
            v.bindings().len(),
            1,
            "each Variant alternative must hold exactly one unnamed field"
        );
    }

    let arity = variants.len();
    let alt_types: Vec<&syn::Type> = variants.iter().map(|v| &v.bindings()[0].ast().ty).collect();

    let alternative_shapes = alt_types
        .iter()
        .map(|ty| quote! { <#ty as ::tagwire::WireType>::shape() });

    let active_index_arms = variants.iter().enumerate().map(|(i, v)| {
        let pat = v.pat();
        let idx = i as i32;
        quote! { #pat => #idx, }
    });

    let encode_active_arms = variants.iter().map(|v| {
        let pat = v.pat();
        let binding = &v.bindings()[0];
        quote! { #pat => ::tagwire::Encode::encode(#binding, w), }
    });

    let decode_at_arms = variants.iter().enumerate().map(|(i, v)| {
        let idx = i as i32;
        let ty = &v.bindings()[0].ast().ty;
        let ctor = v.construct(|_, _| quote! { <#ty as ::tagwire::Decode>::decode(r)? });
        quote! { #idx => ::core::result::Result::Ok(#ctor), }
    });

    s.gen_impl(quote! {
        gen impl ::tagwire::VariantShape for @Self {
            fn arity() -> usize {
                #arity
            }

            fn alternative_shapes() -> ::std::vec::Vec<::tagwire::Shape> {
                ::std::vec![ #(#alternative_shapes),* ]
            }

            fn active_index(&self) -> i32 {
                match self {
                    #(#active_index_arms)*
                }
            }

            fn encode_active<W: ::tagwire::Writer + ?::core::marker::Sized>(
                &self,
                w: &mut W,
            ) -> ::tagwire::Result<()> {
                match self {
                    #(#encode_active_arms)*
                }
            }

            fn decode_at<R: ::tagwire::Reader + ?::core::marker::Sized>(
                index: i32,
                r: &mut R,
            ) -> ::tagwire::Result<Self> {
                match index {
                    #(#decode_at_arms)*
                    _ => ::core::result::Result::Err(::tagwire::Error::UnexpectedVariantType),
                }
            }
        }
    })
}
