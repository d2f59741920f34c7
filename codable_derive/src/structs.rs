use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{spanned::Spanned, DataStruct, Generics, Ident};

use crate::fields::{get_fields, CodableField, StructFields};

pub fn derive_decodable(
	data: DataStruct,
	ident: &Ident,
	generics: &Generics,
	generics_for_impl: &Generics,
) -> syn::Result<TokenStream> {
	let fields = get_fields(data.fields, "Decodable", ident.span())?;

	let construct = match &fields {
		StructFields::Unit => quote! { Self },
		StructFields::Named(fields) => {
			let inits = fields.iter().map(get_field_init);
			quote! { Self { #(#inits),* } }
		}
	};
	let container = get_container_stmt(&fields, quote! {
		let container = decoder.container::<__CodingKeys>()?;
	});
	let coding_keys = get_coding_keys(&fields);

	let (impl_generics, _, _) = generics_for_impl.split_for_impl();
	let (_, type_generics, where_clause) = generics.split_for_impl();

	Ok(quote! {
		const _: () = {
			#coding_keys

			#[automatically_derived]
			impl #impl_generics ::codable::Decodable for #ident #type_generics #where_clause {
				#[allow(unused_variables)]
				fn init_from(
					decoder: &::codable::Decoder<'_>,
				) -> ::core::result::Result<Self, ::codable::DecodingError> {
					#container
					::core::result::Result::Ok(#construct)
				}
			}
		};
	})
}

pub fn derive_encodable(
	data: DataStruct,
	ident: &Ident,
	generics: &Generics,
	generics_for_impl: &Generics,
) -> syn::Result<TokenStream> {
	let fields = get_fields(data.fields, "Encodable", ident.span())?;

	let field_stmts = match &fields {
		StructFields::Unit => vec![],
		StructFields::Named(fields) => fields.iter().map(get_field_encode).collect(),
	};
	let container = get_container_stmt(&fields, quote! {
		let mut container = encoder.container::<__CodingKeys>();
	});
	let coding_keys = get_coding_keys(&fields);

	let (impl_generics, _, _) = generics_for_impl.split_for_impl();
	let (_, type_generics, where_clause) = generics.split_for_impl();

	Ok(quote! {
		const _: () = {
			#coding_keys

			#[automatically_derived]
			impl #impl_generics ::codable::Encodable for #ident #type_generics #where_clause {
				#[allow(unused_variables)]
				fn encode_to(
					&self,
					encoder: &mut ::codable::Encoder,
				) -> ::core::result::Result<(), ::codable::EncodingError> {
					#container
					#(#field_stmts)*
					::core::result::Result::Ok(())
				}
			}
		};
	})
}

/// Container is only acquired when there are fields.
fn get_container_stmt(fields: &StructFields, stmt: TokenStream) -> TokenStream {
	match fields {
		StructFields::Named(fields) if !fields.is_empty() => stmt,
		_ => quote! {},
	}
}

/// `enum __CodingKeys` with one variant per field, and its `CodingKey` impl.
/// Named so it does not shadow a user type called `CodingKeys`.
/// Nothing if there are no fields.
fn get_coding_keys(fields: &StructFields) -> TokenStream {
	let fields = match fields {
		StructFields::Named(fields) if !fields.is_empty() => fields,
		_ => return quote! {},
	};

	let variants = fields.iter().map(|field| &field.ident).collect::<Vec<_>>();
	let keys = fields.iter().map(CodableField::key_string);

	quote! {
		#[allow(non_camel_case_types)]
		#[derive(Clone, Copy)]
		enum __CodingKeys {
			#(#variants),*
		}

		impl ::codable::CodingKey for __CodingKeys {
			fn string_value(&self) -> &'static str {
				match self {
					#(Self::#variants => #keys),*
				}
			}
		}
	}
}

fn get_field_init(field: &CodableField) -> TokenStream {
	let ident = &field.ident;
	let ty = &field.ty;
	match &field.default {
		Some(default) => quote_spanned! {field.ty.span()=>
			#ident: container
				.decode_if_present::<#ty>(__CodingKeys::#ident)?
				.unwrap_or_else(|| #default)
		},
		None => quote_spanned! {field.ty.span()=>
			#ident: container.decode::<#ty>(__CodingKeys::#ident)?
		},
	}
}

fn get_field_encode(field: &CodableField) -> TokenStream {
	let ident = &field.ident;
	quote_spanned! {field.ty.span()=>
		container.encode(&self.#ident, __CodingKeys::#ident)?;
	}
}
