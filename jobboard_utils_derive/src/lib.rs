use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Field, Ident, ItemFn};

/// Derives `Patch` for a struct with named fields.
///
/// Generates `<Name>Patch` (owned values) and `<Name>PatchRef<'a>` (borrowed
/// values) with one `PatchValue` per field. Fields marked `#[no_patch]` are
/// never part of a patch.
#[proc_macro_derive(Patch, attributes(no_patch))]
pub fn derive_patch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let vis = input.vis;
    let ident = input.ident;

    let patch_ident = Ident::new(&format!("{ident}Patch"), ident.span());
    let ref_patch_ident = Ident::new(&format!("{ident}PatchRef"), ident.span());

    let syn::Data::Struct(data) = input.data else {
        return quote! { ::core::compile_error!("Patch can only be derived for structs"); }.into();
    };

    let syn::Fields::Named(fields) = data.fields else {
        return quote! { ::core::compile_error!("Patch can only be derived for structs with named fields"); }.into();
    };

    fn is_no_patch(field: &Field) -> bool {
        field
            .attrs
            .iter()
            .any(|x| x.path().get_ident().is_some_and(|x| x == "no_patch"))
    }

    let all_fields = fields.named.iter().collect::<Vec<_>>();
    let patched = all_fields
        .iter()
        .copied()
        .filter(|x| !is_no_patch(x))
        .collect::<Vec<_>>();

    let patch_fields = patched.iter().map(|Field { vis, ident, ty, .. }| {
        quote! { #vis #ident: ::jobboard_utils::patch::PatchValue<#ty> }
    });

    let ref_patch_fields = patched.iter().map(|Field { vis, ident, ty, .. }| {
        quote! { #vis #ident: ::jobboard_utils::patch::PatchValue<&'a #ty> }
    });

    let update_fields = all_fields.iter().map(|field| {
        let ident = &field.ident;
        if is_no_patch(field) {
            quote! { #ident: self.#ident }
        } else {
            quote! { #ident: patch.#ident.update(self.#ident) }
        }
    });

    let as_patch_ref_fields = patched.iter().map(|Field { ident, .. }| {
        quote! { #ident: ::jobboard_utils::patch::PatchValue::Update(&self.#ident) }
    });

    let as_ref_fields = patched.iter().map(|Field { ident, .. }| {
        quote! { #ident: self.#ident.as_ref() }
    });

    let is_update_fields = patched
        .iter()
        .map(|Field { ident, .. }| quote! { || self.#ident.is_update() })
        .collect::<Vec<_>>();

    let builder_methods = patched.iter().filter_map(|Field { ident, ty, .. }| {
        let ident = ident.as_ref()?;
        let update_ident = Ident::new(&format!("update_{ident}"), ident.span());
        Some(quote! {
            #vis fn #update_ident(mut self, #ident: #ty) -> Self {
                self.#ident = ::jobboard_utils::patch::PatchValue::Update(#ident);
                self
            }
        })
    });

    quote! {
        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::default::Default, ::core::cmp::PartialEq, ::core::cmp::Eq)]
        #vis struct #patch_ident {
            #(#patch_fields),*
        }

        #[derive(::core::fmt::Debug, ::core::clone::Clone, ::core::marker::Copy, ::core::default::Default, ::core::cmp::PartialEq, ::core::cmp::Eq)]
        #vis struct #ref_patch_ident <'a> {
            #(#ref_patch_fields),*
        }

        impl ::jobboard_utils::patch::Patch for #ident {
            type Patch = #patch_ident;
            type PatchRef<'a> = #ref_patch_ident <'a>;

            fn update(self, patch: Self::Patch) -> Self {
                Self { #(#update_fields),* }
            }

            fn as_patch_ref(&self) -> Self::PatchRef<'_> {
                #ref_patch_ident { #(#as_patch_ref_fields),* }
            }
        }

        impl #patch_ident {
            #vis fn new() -> Self {
                Self::default()
            }

            #(#builder_methods)*

            #vis fn as_ref(&self) -> #ref_patch_ident<'_> {
                #ref_patch_ident { #(#as_ref_fields),* }
            }

            #vis fn is_update(&self) -> bool {
                false #(#is_update_fields)*
            }

            #vis fn is_unchanged(&self) -> bool {
                !self.is_update()
            }
        }

        impl #ref_patch_ident<'_> {
            #vis fn is_update(&self) -> bool {
                false #(#is_update_fields)*
            }
        }
    }
    .into()
}

/// Wraps a function in a `tracing` span that records its return value at
/// trace level and emits a `call` event on entry.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    quote! {
        #[::tracing::instrument(ret(level = "trace"), #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
