//! Catalog generation
//!
//! This module parses a whole `entry_points!` invocation and generates the
//! catalog enum that lists every declared entry point, next to the code
//! generated for each entry point itself.

use crate::entry_point::EntryDecl;
use proc_macro2::TokenStream;
use quote::quote;
use std::collections::HashMap;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Error, Ident, Token, Visibility};

/// A parsed `entry_points!` invocation
pub struct CatalogInput {
	attrs: Vec<Attribute>,
	vis: Visibility,
	name: Ident,
	entries: Vec<EntryDecl>,
}

impl Parse for CatalogInput {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		let vis: Visibility = input.parse()?;
		input.parse::<Token![enum]>()?;
		let name: Ident = input.parse()?;
		input.parse::<Token![;]>()?;

		let mut entries = Vec::new();
		while !input.is_empty() {
			entries.push(input.parse()?);
		}

		Ok(Self {
			attrs,
			vis,
			name,
			entries,
		})
	}
}

/// Generate the catalog enum and the code for every entry point
pub fn generate_catalog(input: &CatalogInput) -> syn::Result<TokenStream> {
	check_unique(&input.entries)?;

	let CatalogInput { attrs, vis, name, entries } = input;

	let generated = entries.iter().map(EntryDecl::generate);
	let keys: Vec<Ident> = entries.iter().map(EntryDecl::key_ident).collect();
	let names: Vec<String> = entries.iter().map(|entry| entry.name().to_string()).collect();
	let variant_docs = names.iter().map(|entry_name| format!("`{entry_name}`"));

	Ok(quote! {
		#(#generated)*

		#(#attrs)*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		#vis enum #name {
			#(
				#[doc = #variant_docs]
				#keys
			),*
		}

		impl #name {
			/// Every entry point of this catalog, in declaration order
			pub const ALL: &'static [Self] = &[#(Self::#keys),*];

			/// Display name of the entry point
			pub const fn name(self) -> &'static str {
				match self {
					#(Self::#keys => <#keys as ::simulakrum::EntryPoint>::NAME),*
				}
			}

			/// Look up an entry point by its display name
			pub fn from_name(name: &str) -> ::core::option::Option<Self> {
				match name {
					#(#names => ::core::option::Option::Some(Self::#keys),)*
					_ => ::core::option::Option::None,
				}
			}

			/// Current registration state of the entry point
			pub fn stats(self) -> ::simulakrum::EntryPointStats {
				match self {
					#(Self::#keys => ::simulakrum::mock_manager::stats::<#keys>()),*
				}
			}
		}

		impl ::simulakrum::Catalog for #name {
			fn all() -> &'static [Self] {
				Self::ALL
			}

			fn name(self) -> &'static str {
				#name::name(self)
			}

			fn stats(self) -> ::simulakrum::EntryPointStats {
				#name::stats(self)
			}
		}

		impl ::core::fmt::Display for #name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(#name::name(*self))
			}
		}

		impl ::core::str::FromStr for #name {
			type Err = ::simulakrum::MockError;

			fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
				Self::from_name(s).ok_or_else(|| ::simulakrum::MockError::UnknownEntryPoint(s.to_owned()))
			}
		}

		#(
			impl ::core::convert::From<#keys> for #name {
				fn from(_: #keys) -> Self {
					Self::#keys
				}
			}
		)*
	})
}

/// Reject two declarations that would share a display name or a key type
fn check_unique(entries: &[EntryDecl]) -> syn::Result<()> {
	let mut seen: HashMap<String, &Ident> = HashMap::new();

	for entry in entries {
		let key = entry.key_ident().to_string();
		if let Some(previous) = seen.insert(key.clone(), entry.name()) {
			let mut err = Error::new_spanned(
				entry.name(),
				format!("entry point `{}` collides with `{previous}` (both map to `{key}`)", entry.name()),
			);
			err.combine(Error::new_spanned(previous, "first declared here"));
			return Err(err);
		}
	}

	Ok(())
}
