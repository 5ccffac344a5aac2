use darling::{ast, FromDeriveInput, FromField, FromMeta};
use proc_macro2::TokenTree;
use quote::{format_ident, quote, ToTokens};
use syn::Meta;

#[derive(Debug, Default, FromMeta)]
struct ModelArgs {
	#[darling(default)]
	create_only: bool,
}

#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named), forward_attrs)]
struct ModelInputReceiver {
	ident: syn::Ident,

	generics: syn::Generics,

	data: ast::Data<(), ModelFieldReceiver>,

	attrs: Vec<syn::Attribute>,
}

#[derive(Debug, FromField)]
#[darling(forward_attrs)]
struct ModelFieldReceiver {
	ident: Option<syn::Ident>,

	ty: syn::Type,
	vis: syn::Visibility,

	attrs: Vec<syn::Attribute>,
}

/// Whether serde never reads this field from input.
fn is_server_assigned(attrs: &[syn::Attribute]) -> bool {
	attrs.iter().any(|attr| {
		let Meta::List(ref list) = attr.meta else {
			return false;
		};

		if !list.path.is_ident("serde") {
			return false;
		}

		list.tokens.to_token_stream().into_iter().any(|token| {
			matches!(token, TokenTree::Ident(ref ident) if ident == "skip_deserializing" || ident == "skip")
		})
	})
}

pub fn from_input(
	args: proc_macro::TokenStream,
	input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
	let args = match ast::NestedMeta::parse_meta_list(args.into()) {
		Ok(x) => x,
		Err(e) => return e.into_compile_error().into(),
	};

	let args = match ModelArgs::from_list(&args) {
		Ok(x) => x,
		Err(e) => return e.write_errors().into(),
	};

	let input = syn::parse_macro_input!(input as syn::DeriveInput);
	let receiver = match ModelInputReceiver::from_derive_input(&input) {
		Ok(x) => x,
		Err(e) => return e.write_errors().into(),
	};

	let ident = &receiver.ident;
	let vis = &input.vis;
	let generics = &receiver.generics;
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
	let create_ident = format_ident!("Create{}Input", ident);
	let update_ident = format_ident!("Update{}Input", ident);

	let attrs = &receiver.attrs;

	let Some(fields) = receiver.data.take_struct() else {
		return syn::Error::new_spanned(ident, "#[model] only supports structs with named fields")
			.into_compile_error()
			.into();
	};

	let mut input_fields = Vec::new();
	let mut id_ty = None;
	let mut assigned_besides_id = false;

	for field in &fields.fields {
		let Some(field_ident) = field.ident.as_ref() else {
			continue;
		};

		if field_ident == "id" {
			id_ty = Some(&field.ty);
		}

		if is_server_assigned(&field.attrs) {
			if field_ident != "id" {
				assigned_besides_id = true;
			}

			continue;
		}

		input_fields.push((&field.attrs, field_ident, &field.ty, &field.vis));
	}

	let names = input_fields
		.iter()
		.map(|(_, ident, _, _)| *ident)
		.collect::<Vec<_>>();

	let declared_fields = input_fields
		.iter()
		.map(|(attrs, ident, ty, vis)| {
			quote! {
				#(#attrs)*
				#vis #ident: #ty,
			}
		})
		.collect::<Vec<_>>();

	let create = quote! {
		#(#attrs)*
		#vis struct #create_ident #generics {
			#(
				#declared_fields
			)*
		}

		impl #impl_generics #create_ident #ty_generics #where_clause {
			/// Converts the input into a model with all server-assigned fields left at their defaults.
			#vis fn into_model(self) -> #ident #ty_generics {
				#ident {
					#(
						#names: self.#names,
					)*
					..::core::default::Default::default()
				}
			}
		}
	};

	if args.create_only {
		return quote! {
			#input

			#create
		}
		.into();
	}

	let Some(id_ty) = id_ty else {
		return syn::Error::new_spanned(ident, "#[model] requires an `id` field to generate an update input")
			.into_compile_error()
			.into();
	};

	let rest = assigned_besides_id.then(|| quote!(..::core::default::Default::default()));

	quote! {
		#input

		#create

		#(#attrs)*
		#vis struct #update_ident #generics {
			/// The identifier of the record to replace.
			#[serde(default)]
			#[validate(range(min = 1))]
			pub id: #id_ty,
			#(
				#declared_fields
			)*
		}

		impl #impl_generics #update_ident #ty_generics #where_clause {
			/// Converts the input into a full replacement for the record with the same `id`.
			#vis fn into_model(self) -> #ident #ty_generics {
				#ident {
					id: self.id,
					#(
						#names: self.#names,
					)*
					#rest
				}
			}
		}
	}
	.into()
}
