use super::args::{derived_trait_names, expect_name_value, parse_bool_literal, parse_type_path, set_once};
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{Fields, ItemStruct, Meta};

struct PresenterArgs {
    model: syn::Path,
    impl_presenter: bool,
}

/// Expands the `#[presenter]` attribute macro.
///
/// The annotated struct becomes a thin `Arc` wrapper around its model that derefs to it,
/// so every field and method the presenter does not declare itself resolves on the model.
pub fn expand_presenter(args: TokenStream, input: ItemStruct) -> TokenStream {
    let PresenterArgs { model, impl_presenter } = match parse_presenter_args(args) {
        Ok(args) => args,
        Err(err) => return err,
    };
    if let Err(err) = check_shape(&input) {
        return err;
    }

    let ident = &input.ident;
    let vis = &input.vis;
    let attrs = &input.attrs;
    let derive_attr = derive_attr(&input);

    let presenter_impl = if impl_presenter {
        quote! {
            impl ::vitrine_kernel::Presenter for #ident {}
        }
    } else {
        quote! {}
    };

    quote! {
        #(#attrs)*
        #derive_attr
        #vis struct #ident {
            inner: ::std::sync::Arc<#model>,
        }

        #[automatically_derived]
        impl ::std::ops::Deref for #ident {
            type Target = #model;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        #[automatically_derived]
        impl ::std::convert::From<::std::sync::Arc<#model>> for #ident {
            #[inline]
            fn from(inner: ::std::sync::Arc<#model>) -> Self {
                Self { inner }
            }
        }

        #[automatically_derived]
        impl ::std::convert::From<#model> for #ident {
            #[inline]
            fn from(model: #model) -> Self {
                Self { inner: ::std::sync::Arc::new(model) }
            }
        }

        #[automatically_derived]
        impl ::vitrine_kernel::ModelWrapper for #ident {
            type Model = #model;

            #[inline]
            fn from_model(model: ::std::sync::Arc<#model>) -> Self {
                Self { inner: model }
            }

            #[inline]
            fn model(&self) -> &::std::sync::Arc<#model> {
                &self.inner
            }
        }

        #[automatically_derived]
        impl ::vitrine_kernel::serde::Serialize for #ident {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::vitrine_kernel::serde::Serializer,
            {
                let record = <Self as ::vitrine_kernel::Presenter>::to_array(self);
                ::vitrine_kernel::serde::Serialize::serialize(&record, serializer)
            }
        }

        #presenter_impl
    }
}

fn parse_presenter_args(args: TokenStream) -> Result<PresenterArgs, TokenStream> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let metas = parser.parse2(args).map_err(|err| err.to_compile_error())?;

    let mut model = None;
    let mut impl_presenter = None;

    for meta in metas {
        let name_value = expect_name_value(meta, "model = User")?;
        if name_value.path.is_ident("model") {
            let value = parse_type_path(&name_value, "model")?;
            model = Some(set_once(model, &name_value, value)?);
            continue;
        }
        if name_value.path.is_ident("impl_presenter") {
            let value = parse_bool_literal(&name_value, "impl_presenter")?;
            impl_presenter = Some(set_once(impl_presenter, &name_value, value)?);
            continue;
        }
        return Err(syn::Error::new_spanned(
            name_value.path,
            "Unsupported argument; expected model or impl_presenter",
        )
        .to_compile_error());
    }

    let Some(model) = model else {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "presenter requires the wrapped model type: #[presenter(model = User)]",
        )
        .to_compile_error());
    };

    Ok(PresenterArgs { model, impl_presenter: impl_presenter.unwrap_or(true) })
}

fn check_shape(input: &ItemStruct) -> Result<(), TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "presenter structs cannot be generic",
        )
        .to_compile_error());
    }

    let has_fields = match &input.fields {
        Fields::Unit => false,
        Fields::Named(fields) => !fields.named.is_empty(),
        Fields::Unnamed(fields) => !fields.unnamed.is_empty(),
    };
    if has_fields {
        return Err(syn::Error::new_spanned(
            &input.fields,
            "presenter structs cannot declare fields; the wrapped model is their only state",
        )
        .to_compile_error());
    }

    Ok(())
}

fn derive_attr(input: &ItemStruct) -> TokenStream {
    let derives = derived_trait_names(&input.attrs);
    let mut tokens = Vec::new();
    if !derives.contains("Debug") {
        tokens.push(quote! { Debug });
    }
    if !derives.contains("Clone") {
        tokens.push(quote! { Clone });
    }

    if tokens.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#tokens),*)] }
    }
}
