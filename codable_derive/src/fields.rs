use std::collections::HashSet;

use proc_macro2::Span;
use syn::{ext::IdentExt, parse_quote, Attribute, Expr, Fields, Ident, LitStr, Meta, Type};

/// A named field taking part in decoding and encoding.
pub struct CodableField {
	pub ident: Ident,
	pub ty: Type,
	/// Custom key from `#[coding_key("...")]`.
	pub key: Option<LitStr>,
	/// Fallback from `#[coding_default]` or `#[coding_default(expr)]`.
	pub default: Option<Expr>,
}

impl CodableField {
	/// Key the field is stored under in encoded data.
	pub fn key_string(&self) -> String {
		match &self.key {
			Some(key) => key.value(),
			None => self.ident.unraw().to_string(),
		}
	}
}

/// Shape of a struct's body.
pub enum StructFields {
	Named(Vec<CodableField>),
	Unit,
}

pub fn get_fields(fields: Fields, derive_name: &str, span: Span) -> syn::Result<StructFields> {
	let named = match fields {
		Fields::Named(fields) => fields.named,
		Fields::Unit => return Ok(StructFields::Unit),
		Fields::Unnamed(_) => {
			return Err(syn::Error::new(
				span,
				format!("`#[derive({})]` does not support tuple structs", derive_name),
			))
		}
	};

	let mut keys = HashSet::new();
	let mut codable_fields = Vec::with_capacity(named.len());
	for field in named {
		let (key, default) = get_options(&field.attrs)?;
		let Some(ident) = field.ident else {
			continue;
		};
		let codable_field = CodableField {
			ident,
			ty: field.ty,
			key,
			default,
		};

		let key_string = codable_field.key_string();
		if !keys.insert(key_string.clone()) {
			let span = match &codable_field.key {
				Some(key) => key.span(),
				None => codable_field.ident.span(),
			};
			return Err(syn::Error::new(
				span,
				format!("Duplicate coding key `{}`", key_string),
			));
		}
		codable_fields.push(codable_field);
	}

	Ok(StructFields::Named(codable_fields))
}

fn get_options(attrs: &[Attribute]) -> syn::Result<(Option<LitStr>, Option<Expr>)> {
	let mut key: Option<LitStr> = None;
	let mut default: Option<Expr> = None;

	for attr in attrs {
		if attr.path().is_ident("coding_key") {
			if key.is_some() {
				return Err(syn::Error::new_spanned(
					attr,
					"Can only have one `#[coding_key]` attribute on a field",
				));
			}
			let lit = attr.parse_args::<LitStr>().map_err(|err| {
				syn::Error::new(
					err.span(),
					"`#[coding_key]` requires a single string literal argument",
				)
			})?;
			key = Some(lit);
		} else if attr.path().is_ident("coding_default") {
			if default.is_some() {
				return Err(syn::Error::new_spanned(
					attr,
					"Can only have one `#[coding_default]` attribute on a field",
				));
			}
			let expr = match &attr.meta {
				Meta::Path(_) => parse_quote!(::core::default::Default::default()),
				Meta::List(_) => attr.parse_args::<Expr>()?,
				Meta::NameValue(name_value) => name_value.value.clone(),
			};
			default = Some(expr);
		}
	}

	Ok((key, default))
}
