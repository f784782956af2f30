use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use syn::{Attribute, Lit, LitStr, Meta, MetaNameValue};

pub fn expect_name_value(meta: Meta, hint: &str) -> Result<MetaNameValue, TokenStream> {
    match meta {
        Meta::NameValue(name_value) => Ok(name_value),
        other => Err(syn::Error::new_spanned(
            other,
            format!("Expected name-value arguments like `{hint}`"),
        )
        .to_compile_error()),
    }
}

pub fn parse_bool_literal(name_value: &MetaNameValue, label: &str) -> Result<bool, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Bool(lit) = &expr_lit.lit
    {
        return Ok(lit.value);
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a boolean literal"))
        .to_compile_error())
}

pub fn parse_string_literal(name_value: &MetaNameValue, label: &str) -> Result<LitStr, TokenStream> {
    if let syn::Expr::Lit(expr_lit) = &name_value.value
        && let Lit::Str(lit) = &expr_lit.lit
    {
        return Ok(lit.clone());
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a string literal"))
        .to_compile_error())
}

pub fn parse_type_path(name_value: &MetaNameValue, label: &str) -> Result<syn::Path, TokenStream> {
    if let syn::Expr::Path(expr_path) = &name_value.value
        && expr_path.qself.is_none()
    {
        return Ok(expr_path.path.clone());
    }
    Err(syn::Error::new_spanned(&name_value.value, format!("{label} must be a type path"))
        .to_compile_error())
}

pub fn set_once<T, S: quote::ToTokens>(
    current: Option<T>,
    token: S,
    value: T,
) -> Result<T, TokenStream> {
    if current.is_some() {
        return Err(syn::Error::new_spanned(token, "Duplicate argument").to_compile_error());
    }
    Ok(value)
}

pub fn derived_trait_names(attrs: &[Attribute]) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in attrs {
        if !attr.path().is_ident("derive") {
            continue;
        }
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.segments.last() {
                traits.insert(ident.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
