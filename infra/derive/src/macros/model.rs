use super::args::{expect_name_value, parse_string_literal, set_once};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr, Meta};

struct FieldMeta<'a> {
    field: &'a Field,
    key: LitStr,
    skip: bool,
}

/// Expands `#[derive(Model)]`.
///
/// Builds `to_array` from the named fields in declaration order; each value goes through
/// `Value::from` on a clone of the field.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return syn::Error::new_spanned(name, "Model can only be derived for structs")
            .to_compile_error();
    };
    let Fields::Named(fields) = &data.fields else {
        return syn::Error::new_spanned(
            name,
            "Model requires named fields so each attribute has a key",
        )
        .to_compile_error();
    };

    let metas: Vec<FieldMeta<'_>> = match fields.named.iter().map(parse_field).collect() {
        Ok(v) => v,
        Err(err) => return err,
    };

    let inserts = metas.iter().filter(|m| !m.skip).map(|m| {
        let key = &m.key;
        let ident = &m.field.ident;
        quote! {
            record.insert(
                ::std::string::String::from(#key),
                ::vitrine_kernel::domain::Value::from(::std::clone::Clone::clone(&self.#ident)),
            );
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics ::vitrine_kernel::domain::Model for #name #ty_generics #where_clause {
            fn to_array(&self) -> ::vitrine_kernel::domain::Record {
                let mut record = ::vitrine_kernel::domain::Record::new();
                #(#inserts)*
                record
            }
        }
    }
}

fn parse_field(field: &Field) -> Result<FieldMeta<'_>, TokenStream> {
    let mut rename = None;
    let mut skip = None;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("model")) {
        let metas = attr
            .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)
            .map_err(|err| err.to_compile_error())?;

        for meta in metas {
            if let Meta::Path(path) = &meta
                && path.is_ident("skip")
            {
                skip = Some(set_once(skip, path, true)?);
                continue;
            }
            let name_value = expect_name_value(meta, "rename = \"key\"")?;
            if name_value.path.is_ident("rename") {
                let value = parse_string_literal(&name_value, "rename")?;
                rename = Some(set_once(rename, &name_value, value)?);
                continue;
            }
            return Err(syn::Error::new_spanned(
                name_value.path,
                "Unsupported argument; expected skip or rename",
            )
            .to_compile_error());
        }
    }

    let key = match (rename, &field.ident) {
        (Some(lit), _) => lit,
        (None, Some(ident)) => {
            let raw = ident.to_string();
            let trimmed = raw.strip_prefix("r#").unwrap_or(&raw);
            LitStr::new(trimmed, ident.span())
        }
        (None, None) => {
            return Err(syn::Error::new_spanned(field, "Model fields must be named")
                .to_compile_error());
        }
    };

    Ok(FieldMeta { field, key, skip: skip.unwrap_or(false) })
}
