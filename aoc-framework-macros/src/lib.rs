//! Procedural macros for the `aoc-framework` crate.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Expr, Ident, Item, Token, Type, parse_macro_input};

/// One `key = value` pair of the attribute arguments.
enum Property {
    Name(Expr),
    Parsed(Type),
    PartOne(Type),
    PartTwo(Type),
}

impl Parse for Property {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        match key.to_string().as_str() {
            "name" => Ok(Self::Name(input.parse()?)),
            "parsed" => Ok(Self::Parsed(input.parse()?)),
            "part_one" => Ok(Self::PartOne(input.parse()?)),
            "part_two" => Ok(Self::PartTwo(input.parse()?)),
            _ => Err(Error::new(
                key.span(),
                format!("unsupported solution runner property '{key}'"),
            )),
        }
    }
}

/// The complete, validated attribute arguments.
struct RunnerArgs {
    name: Expr,
    parsed: Type,
    part_one: Type,
    part_two: Type,
}

/// Store a property value, rejecting a second occurrence of the same key.
fn set_once<T>(slot: &mut Option<T>, value: T, key: &str, span: Span) -> syn::Result<()> {
    if slot.replace(value).is_some() {
        return Err(Error::new(span, format!("duplicate '{key}' property")));
    }
    Ok(())
}

impl Parse for RunnerArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut parsed = None;
        let mut part_one = None;
        let mut part_two = None;

        while !input.is_empty() {
            let span = input.span();
            match input.parse::<Property>()? {
                Property::Name(value) => set_once(&mut name, value, "name", span)?,
                Property::Parsed(value) => set_once(&mut parsed, value, "parsed", span)?,
                Property::PartOne(value) => set_once(&mut part_one, value, "part_one", span)?,
                Property::PartTwo(value) => set_once(&mut part_two, value, "part_two", span)?,
            }
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        let missing = |key: &str| {
            Error::new(
                Span::call_site(),
                format!("missing required property: '{key}'"),
            )
        };
        Ok(Self {
            name: name.ok_or_else(|| missing("name"))?,
            parsed: parsed.ok_or_else(|| missing("parsed"))?,
            part_one: part_one.ok_or_else(|| missing("part_one"))?,
            part_two: part_two.ok_or_else(|| missing("part_two"))?,
        })
    }
}

/// Implement `SolutionRunner` for a struct or the self type of an impl block.
///
/// The generated runner parses the input once with the `parsed` type, then solves part one and part
/// two from it.
///
/// # Properties
///
/// All four properties are required, each exactly once:
///
/// - `name`: an expression evaluating to `&str`, shown as the solution's title.
/// - `parsed`: a type implementing `ParseData`.
/// - `part_one`: a type implementing `Solution<PartOne, Input = parsed>`.
/// - `part_two`: a type implementing `Solution<PartTwo, Input = parsed>`.
///
/// # Errors
///
/// Reports a compile error for a missing, duplicated, or unknown property, or when applied to
/// anything other than a struct or impl block.
///
/// # Examples
///
/// ```ignore
/// #[solution_runner(
///     name = "Day 10: Pipe Maze",
///     parsed = PipeMaze,
///     part_one = Day10,
///     part_two = Day10
/// )]
/// impl super::AdventOfCode2023<10> {}
/// ```
#[proc_macro_attribute]
pub fn solution_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    let RunnerArgs {
        name,
        parsed,
        part_one,
        part_two,
    } = parse_macro_input!(args as RunnerArgs);
    let item = parse_macro_input!(input as Item);

    let self_ty: Type = match &item {
        Item::Struct(item_struct) => {
            let ident = &item_struct.ident;
            syn::parse_quote!(#ident)
        }
        Item::Impl(item_impl) => (*item_impl.self_ty).clone(),
        _ => {
            return Error::new(
                Span::call_site(),
                "the #[solution_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    TokenStream::from(quote! {
        #item

        impl aoc_framework::runner::SolutionRunner for #self_ty {
            fn run(
                input: &str,
                handler: &mut dyn aoc_framework::runner::OutputHandler,
                timed: bool,
            ) -> aoc_framework::DynamicResult<()> {
                aoc_framework::runner::run_solution::<#parsed, #part_one, #part_two>(
                    #name,
                    input,
                    handler,
                    timed,
                )
            }
        }
    })
}
