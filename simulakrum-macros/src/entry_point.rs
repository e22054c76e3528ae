//! Code generation for a single entry point
//!
//! This module parses one native signature declaration and expands it into
//! a function key type, its `EntryPoint` impl, typed registration helpers
//! and a forwarding function that keeps the declared signature.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Error, FnArg, Ident, Pat, PatIdent, PatType, Path, ReturnType, Signature, Token, Type, Visibility};

/// One declared entry point
pub struct EntryDecl {
	pub attrs: Vec<Attribute>,
	pub vis: Visibility,
	pub sig: Signature,
	pub default_impl: Option<Path>,
	params: Vec<(Ident, Type)>,
}

impl Parse for EntryDecl {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let attrs = input.call(Attribute::parse_outer)?;
		let vis: Visibility = input.parse()?;
		let sig: Signature = input.parse()?;

		let default_impl = if input.peek(Token![=]) {
			input.parse::<Token![=]>()?;
			Some(input.parse::<Path>()?)
		} else {
			None
		};
		input.parse::<Token![;]>()?;

		let params = validate_signature(&sig)?;

		Ok(Self {
			attrs,
			vis,
			sig,
			default_impl,
			params,
		})
	}
}

impl EntryDecl {
	/// The declared function name, used as the display name
	pub fn name(&self) -> &Ident {
		&self.sig.ident
	}

	/// The identifier of the generated function key type
	pub fn key_ident(&self) -> Ident {
		Ident::new(&fn_name_to_key_name(&self.sig.ident.to_string()), self.sig.ident.span())
	}

	/// Expand the declaration into its key type, trait impl and forwarder
	pub fn generate(&self) -> TokenStream {
		let Self { attrs, vis, sig, .. } = self;

		let name_lit = sig.ident.to_string();
		let key = self.key_ident();
		let key_doc = format!("Function key for `{name_lit}`.");

		let names: Vec<&Ident> = self.params.iter().map(|(name, _)| name).collect();
		let types: Vec<&Type> = self.params.iter().map(|(_, ty)| ty).collect();
		let args_ty = quote!((#(#types,)*));
		let args_pat = quote!((#(#names,)*));

		let fn_output = &sig.output;
		let output = match fn_output {
			ReturnType::Default => quote!(()),
			ReturnType::Type(_, ty) => quote!(#ty),
		};

		let is_unsafe = sig.unsafety.is_some();

		// Locals of the generated helpers must not capture parameter names.
		let implementation = Ident::new("implementation", Span::mixed_site());
		let observer = Ident::new("observer", Span::mixed_site());

		let default_impl = match &self.default_impl {
			Some(path) if is_unsafe => quote! {
				::core::option::Option::Some(|#args_pat: #args_ty| #fn_output { unsafe { #path(#(#names),*) } })
			},
			Some(path) => quote! {
				::core::option::Option::Some(|#args_pat: #args_ty| #fn_output { #path(#(#names),*) })
			},
			None => quote!(::core::option::Option::None),
		};

		// Unsafe entry points pass their caller's obligation through; safe ones
		// only ever reach a safe default or safe override closures.
		let forward = quote! {
			unsafe { ::simulakrum::mock_manager::call::<#key>(#args_pat) }
		};

		quote! {
			#[doc = #key_doc]
			#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
			#vis struct #key;

			impl ::simulakrum::EntryPoint for #key {
				type Args = #args_ty;
				type Output = #output;

				const NAME: &'static str = #name_lit;
				const DEFAULT_IMPL: ::core::option::Option<unsafe fn(Self::Args) -> Self::Output> = #default_impl;

				fn state() -> &'static ::simulakrum::FunctionState<Self> {
					static STATE: ::std::sync::LazyLock<::simulakrum::FunctionState<#key>> =
						::std::sync::LazyLock::new(::simulakrum::FunctionState::new);
					&STATE
				}
			}

			impl #key {
				/// Install a scoped override taking the native parameter list
				#vis fn override_with<__F>(#implementation: __F) -> ::simulakrum::OverrideHandle<Self>
				where
					__F: Fn(#(#types),*) #fn_output + Send + Sync + 'static,
				{
					::simulakrum::mock_manager::override_with::<Self, _>(move |#args_pat: #args_ty| #implementation(#(#names),*))
				}

				/// Install a scoped observer taking the native parameter list
				#vis fn observe<__F>(#observer: __F) -> ::simulakrum::ObserverHandle<Self>
				where
					__F: Fn(#(#types),*) + Send + Sync + 'static,
				{
					::simulakrum::mock_manager::register_observer::<Self, _>(move |#args_pat: #args_ty| #observer(#(#names),*))
				}

				/// Display name of the entry point
				#vis fn name() -> &'static str {
					<Self as ::simulakrum::EntryPoint>::NAME
				}

				/// Number of dispatches through this entry point so far
				#vis fn call_count() -> usize {
					::simulakrum::mock_manager::call_count::<Self>()
				}
			}

			#(#attrs)*
			#[allow(non_snake_case)]
			#vis #sig {
				#forward
			}
		}
	}
}

/// Convert a function name to the name of its key type
///
/// Every `_`-separated part gets its first character upper-cased, so both
/// `vkCreateInstance` and `create_instance` map to `VkCreateInstance` and
/// `CreateInstance` respectively.
pub fn fn_name_to_key_name(name: &str) -> String {
	let mut result = String::with_capacity(name.len());
	for part in name.split('_') {
		let mut chars = part.chars();
		if let Some(first) = chars.next() {
			result.extend(first.to_uppercase());
			result.push_str(chars.as_str());
		}
	}
	result
}

/// Check that a signature can be dispatched and collect its parameters
///
/// An entry point must be a plain free function: no generics, receiver,
/// variadics, `async` or `const`, and every parameter bound to a plain
/// identifier so it can be forwarded by name.
fn validate_signature(sig: &Signature) -> syn::Result<Vec<(Ident, Type)>> {
	if let Some(constness) = &sig.constness {
		return Err(Error::new_spanned(constness, "entry points cannot be `const fn`"));
	}
	if let Some(asyncness) = &sig.asyncness {
		return Err(Error::new_spanned(asyncness, "entry points cannot be `async fn`"));
	}
	if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
		return Err(Error::new_spanned(&sig.generics, "entry points cannot be generic"));
	}
	if let Some(variadic) = &sig.variadic {
		return Err(Error::new_spanned(variadic, "entry points cannot be variadic"));
	}

	let mut params = Vec::with_capacity(sig.inputs.len());
	for input in &sig.inputs {
		match input {
			FnArg::Receiver(receiver) => {
				return Err(Error::new_spanned(receiver, "entry points cannot take `self`"));
			},
			FnArg::Typed(PatType { pat, ty, .. }) => match &**pat {
				Pat::Ident(PatIdent {
					ident,
					by_ref: None,
					mutability: None,
					subpat: None,
					..
				}) => params.push((ident.clone(), (**ty).clone())),
				other => {
					return Err(Error::new_spanned(other, "entry point parameters must be plain identifiers"));
				},
			},
		}
	}

	Ok(params)
}
