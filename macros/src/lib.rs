mod model;
mod route;

use proc_macro::TokenStream;

/// Creates a new documentation function for the route, named after the original function with the suffix `_docs`.
///
/// The first line of the doc comment becomes the summary, the rest becomes the description.
#[proc_macro_attribute]
pub fn route(args: TokenStream, input: TokenStream) -> TokenStream {
	route::from_input(args, input)
}

/// Creates `CreateXInput` and `UpdateXInput` for the model, each with an `into_model` conversion.
///
/// Fields with `#[serde(skip_deserializing)]` or `#[serde(skip)]` are left out of both inputs
/// and filled from `Default` on conversion, so the model must implement `Default`.
/// `UpdateXInput` additionally carries the model's `id` and replaces every other field.
/// Use `#[model(create_only)]` to skip generating the update input.
#[proc_macro_attribute]
pub fn model(args: TokenStream, input: TokenStream) -> TokenStream {
	model::from_input(args, input)
}
