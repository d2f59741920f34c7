use proc_macro2::TokenStream;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics, Path};

mod fields;
mod structs;
use structs::{derive_decodable, derive_encodable};

#[proc_macro_derive(Decodable, attributes(coding_key, coding_default))]
pub fn decodable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(input, Capability::Decode).into()
}

#[proc_macro_derive(Encodable, attributes(coding_key, coding_default))]
pub fn encodable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(input, Capability::Encode).into()
}

/// Combined derive. Not supported, always fails pointing at the separate derives.
#[proc_macro_derive(Codable, attributes(coding_key, coding_default))]
pub fn codable(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	syn::Error::new(
		input.ident.span(),
		"`#[derive(Codable)]` is currently unavailable, change to `#[derive(Decodable, Encodable)]`",
	)
	.to_compile_error()
	.into()
}

#[derive(Clone, Copy)]
pub(crate) enum Capability {
	Decode,
	Encode,
}

impl Capability {
	fn derive_name(self) -> &'static str {
		match self {
			Self::Decode => "Decodable",
			Self::Encode => "Encodable",
		}
	}

	fn trait_path(self) -> Path {
		match self {
			Self::Decode => parse_quote!(::codable::Decodable),
			Self::Encode => parse_quote!(::codable::Encodable),
		}
	}
}

fn expand(input: DeriveInput, capability: Capability) -> TokenStream {
	let generics_for_impl = add_trait_bounds(&input.generics, capability);

	let result = match input.data {
		Data::Struct(data) => match capability {
			Capability::Decode => derive_decodable(data, &input.ident, &input.generics, &generics_for_impl),
			Capability::Encode => derive_encodable(data, &input.ident, &input.generics, &generics_for_impl),
		},
		Data::Enum(_) | Data::Union(_) => Err(syn::Error::new(
			input.ident.span(),
			format!(
				"`#[derive({})]` only supports structs at this time",
				capability.derive_name()
			),
		)),
	};

	result.unwrap_or_else(|err| err.to_compile_error())
}

/// Add `Decodable` / `Encodable` bound to every type parameter.
fn add_trait_bounds(generics: &Generics, capability: Capability) -> Generics {
	let trait_path = capability.trait_path();
	let mut generics = generics.clone();
	for param in &mut generics.params {
		if let GenericParam::Type(type_param) = param {
			type_param.bounds.push(parse_quote!(#trait_path));
		}
	}
	generics
}
