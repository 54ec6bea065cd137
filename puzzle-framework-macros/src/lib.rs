//! Procedural macros for the `puzzle-framework` crate.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parse;
use syn::{Error, Expr, ItemStruct, Type, parse_macro_input};

/// Store a property value, rejecting a second occurrence of the same key.
fn set_once<T: Parse>(
    slot: &mut Option<T>,
    meta: &ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate '{key}' property")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

/// Unwrap a required property or produce a compile error naming it.
fn required<T>(slot: Option<T>, key: &str) -> syn::Result<T> {
    slot.ok_or_else(|| {
        Error::new(
            Span::call_site(),
            format!("missing required property: '{key}'"),
        )
    })
}

/// Implement `SolutionRunner` for the annotated struct.
///
/// The generated runner parses input with the `parsed` type, then solves part one and part two
/// through `puzzle_framework::runner::solve_parsed`.
///
/// # Properties
///
/// All are required.
///
/// - `name`: an expression evaluating to `&str`, printed before the answers.
/// - `parsed`: a type implementing `ParseData`.
/// - `part_one`: a type implementing `Solution<PartOne, Input = parsed>`.
/// - `part_two`: a type implementing `Solution<PartTwo, Input = parsed>`.
///
/// ```ignore
/// #[solution_runner(name = "Puzzle", parsed = PuzzleInput, part_one = Puzzle, part_two = Puzzle)]
/// pub struct Puzzle;
/// ```
///
/// # Errors
///
/// A compile error is emitted for an unknown or repeated property, a missing property, or when
/// the attribute is not placed on a struct.
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let mut name_opt: Option<Expr> = None;
    let mut parsed_opt: Option<Type> = None;
    let mut part_one_opt: Option<Type> = None;
    let mut part_two_opt: Option<Type> = None;

    let properties_parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            set_once(&mut name_opt, &meta, "name")
        } else if meta.path.is_ident("parsed") {
            set_once(&mut parsed_opt, &meta, "parsed")
        } else if meta.path.is_ident("part_one") {
            set_once(&mut part_one_opt, &meta, "part_one")
        } else if meta.path.is_ident("part_two") {
            set_once(&mut part_two_opt, &meta, "part_two")
        } else {
            Err(meta.error("unsupported solution runner property"))
        }
    });
    parse_macro_input!(args with properties_parser);

    let item = parse_macro_input!(input as ItemStruct);

    let properties = required(name_opt, "name").and_then(|name| {
        Ok((
            name,
            required(parsed_opt, "parsed")?,
            required(part_one_opt, "part_one")?,
            required(part_two_opt, "part_two")?,
        ))
    });
    let (name, parsed, part_one, part_two) = match properties {
        Ok(properties) => properties,
        Err(error) => return error.to_compile_error().into(),
    };

    let ident = &item.ident;
    TokenStream::from(quote! {
        #item

        impl puzzle_framework::runner::SolutionRunner for #ident {
            fn run(
                input: &str,
                handler: &mut dyn puzzle_framework::runner::OutputHandler,
                timed: bool,
            ) -> puzzle_framework::DynamicResult<()> {
                puzzle_framework::runner::solve_parsed::<#parsed, #part_one, #part_two>(
                    #name,
                    input,
                    handler,
                    timed,
                )
            }
        }
    })
}
