use super::args::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, GenericArgument, Ident, PathArguments, Type};

/// The annotated enum, validated and reduced to what the generated impls need.
struct ErrorEnum {
    input: DeriveInput,
    ext_trait: Ident,
    variants: Vec<ErrorVariant>,
}

struct ErrorVariant {
    ident: Ident,
    /// `(field, type)` of the wrapped upstream error, if any.
    source: Option<(Ident, Type)>,
    has_context: bool,
    cfg: Vec<Attribute>,
}

/// Expands `#[vitrine_error]`.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match ErrorEnum::parse(input) {
        Ok(error) => error.expand(),
        Err(err) => err.to_compile_error(),
    }
}

impl ErrorEnum {
    fn parse(input: DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "vitrine_error can only be applied to enums",
            ));
        };

        let mut variants = Vec::with_capacity(data.variants.len());
        let mut errors: Option<syn::Error> = None;
        for variant in &data.variants {
            match ErrorVariant::parse(variant) {
                Ok(parsed) => variants.push(parsed),
                Err(err) => match &mut errors {
                    Some(all) => all.combine(err),
                    None => errors = Some(err),
                },
            }
        }
        if let Some(errors) = errors {
            return Err(errors);
        }

        let ext_trait = format_ident!("{}Ext", input.ident);
        Ok(Self { input, ext_trait, variants })
    }

    fn expand(&self) -> TokenStream {
        let input = &self.input;
        let name = &input.ident;
        let vis = &input.vis;

        let derives = derived_trait_names(&input.attrs);
        let missing: Vec<TokenStream> =
            [("Debug", quote!(Debug)), ("Error", quote!(::thiserror::Error))]
                .into_iter()
                .filter(|(trait_name, _)| !derives.contains(*trait_name))
                .map(|(_, path)| path)
                .collect();
        let derive_attr = (!missing.is_empty()).then(|| quote! { #[derive(#(#missing),*)] });

        let context_trait = self.context_trait();
        let source_impls = self.variants.iter().filter_map(|v| self.source_impls(v));
        let message_impls = self.message_impls();

        quote! {
            #[allow(non_shorthand_field_patterns)]
            #derive_attr
            #input

            /// Result alias defaulting to this module's error type.
            #vis type Result<T, E = #name> = ::std::result::Result<T, E>;

            #context_trait
            #(#source_impls)*
            #message_impls

            #[allow(dead_code)]
            fn format_context(
                context: &::std::option::Option<::std::borrow::Cow<'static, str>>,
            ) -> ::std::borrow::Cow<'static, str> {
                match context {
                    Some(context) => ::std::borrow::Cow::Owned(format!(" ({context})")),
                    None => ::std::borrow::Cow::Borrowed(""),
                }
            }
        }
    }

    /// `.context(..)` for results already carrying this error.
    fn context_trait(&self) -> TokenStream {
        let name = &self.input.ident;
        let ext = &self.ext_trait;
        let arms = self.variants.iter().filter(|v| v.has_context).map(|v| {
            let ErrorVariant { ident, cfg, .. } = v;
            quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
        });

        quote! {
            /// Attaches a human-readable context to a failed result.
            pub trait #ext<T> {
                /// Records `context` on the error, replacing any previous one.
                ///
                /// # Errors
                /// Returns the original error carrying the new context.
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name>;
            }

            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #name> {
                #[inline]
                fn context(self, context: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                    self.map_err(|mut err| {
                        #[allow(unreachable_patterns)]
                        match &mut err {
                            #(#arms)*
                            _ => {}
                        }
                        err
                    })
                }
            }
        }
    }

    /// `From<Source>` plus `.context(..)` straight off an upstream result.
    fn source_impls(&self, variant: &ErrorVariant) -> Option<TokenStream> {
        if variant.ident == "Internal" {
            return None;
        }
        let (field, ty) = variant.source.as_ref()?;
        let name = &self.input.ident;
        let ext = &self.ext_trait;
        let ErrorVariant { ident, cfg, .. } = variant;

        Some(quote! {
            #(#cfg)*
            #[automatically_derived]
            impl ::std::convert::From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #(#cfg)*
            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    }

    /// Plain strings become the `Internal` variant, when there is one.
    fn message_impls(&self) -> TokenStream {
        let Some(internal) = self.variants.iter().find(|v| v.ident == "Internal") else {
            return TokenStream::new();
        };
        let name = &self.input.ident;
        let cfg = &internal.cfg;

        quote! {
            #(#cfg)*
            impl ::std::convert::From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            impl ::std::convert::From<::std::string::String> for #name {
                #[inline]
                fn from(message: ::std::string::String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    }
}

impl ErrorVariant {
    fn parse(variant: &syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "vitrine_error requires named fields (`message`/`source` plus `context`)",
            ));
        };

        let mut source = None;
        let mut has_context = false;
        for field in &fields.named {
            let Some(ident) = &field.ident else { continue };
            if ident == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if source.is_none() && is_source(ident, field) {
                source = Some((ident.clone(), field.ty.clone()));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "vitrine_error requires `context: Option<Cow<'static, str>>` for variants with a source",
            ));
        }

        Ok(Self {
            ident: variant.ident.clone(),
            source,
            has_context,
            cfg: variant.attrs.iter().filter(|attr| attr.path().is_ident("cfg")).cloned().collect(),
        })
    }
}

fn is_source(ident: &Ident, field: &Field) -> bool {
    ident == "source"
        || field.attrs.iter().any(|attr| attr.path().is_ident("source") || attr.path().is_ident("from"))
}

/// Matches `Option<Cow<'static, str>>`, with or without a path prefix on each segment.
fn is_context_type(ty: &Type) -> bool {
    let Some(option) = generic_args(ty, "Option") else {
        return false;
    };
    let [GenericArgument::Type(cow)] = option.as_slice() else {
        return false;
    };
    let Some(cow) = generic_args(cow, "Cow") else {
        return false;
    };
    let [GenericArgument::Lifetime(lifetime), GenericArgument::Type(Type::Path(target))] =
        cow.as_slice()
    else {
        return false;
    };
    lifetime.ident == "static" && target.path.segments.last().is_some_and(|seg| seg.ident == "str")
}

/// Angle-bracketed arguments of `ty` when its last path segment is `ident`.
fn generic_args<'a>(ty: &'a Type, ident: &str) -> Option<Vec<&'a GenericArgument>> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != ident {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => Some(args.args.iter().collect()),
        _ => None,
    }
}
