//! `#[interpreter]` attribute macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use std::collections::HashMap;
use syn::{
    FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, LitStr, Token, parse::Parse, parse_macro_input,
};

const READ_PREFIX: &str = "read";
const ROUTING_KEY_ATTR: &str = "routing_key";

/// Arguments for the `#[interpreter]` macro.
pub(crate) struct InterpreterArgs {
    pub name: Option<LitStr>,
}

impl Parse for InterpreterArgs {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut name = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => {
                    let lit: LitStr = input.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "name must not be empty"));
                    }
                    name = Some(lit);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(InterpreterArgs { name })
    }
}

/// A handler method found in the impl block.
struct ReadMethod {
    method: String,
    ident: Ident,
}

/// Implementation of the `#[interpreter]` macro.
pub fn interpreter_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as InterpreterArgs);
    let mut input = parse_macro_input!(item as ItemImpl);

    match expand(args, &mut input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: InterpreterArgs, input: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[interpreter] must be placed on an inherent impl block",
        ));
    }

    let mut methods: Vec<ReadMethod> = Vec::new();
    let mut seen: HashMap<String, Ident> = HashMap::new();
    let mut has_log = false;

    for item in &mut input.items {
        let ImplItem::Fn(func) = item else { continue };

        if func.sig.ident == "log" {
            has_log = true;
            continue;
        }

        let Some(method) = handler_method(func)? else {
            continue;
        };
        check_signature(func)?;

        if let Some(previous) = seen.get(&method) {
            return Err(syn::Error::new_spanned(
                &func.sig.ident,
                format!("`{}` and `{}` both handle `{}`", previous, func.sig.ident, method),
            ));
        }
        seen.insert(method.clone(), func.sig.ident.clone());
        methods.push(ReadMethod {
            method,
            ident: func.sig.ident.clone(),
        });
    }

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let arms = methods.iter().map(|ReadMethod { method, ident }| {
        quote! {
            #method => ::core::option::Option::Some(::warren::ReadHandler::new(
                move |body, ctx| async move {
                    ::warren::IntoOutcome::into_outcome(self.#ident(body, &ctx).await)
                },
            )),
        }
    });

    let log_impl = has_log.then(|| {
        quote! {
            fn log(&self, message: &str, severity: ::warren::Severity) {
                <#self_ty>::log(self, message, severity)
            }
        }
    });

    let registration = args.name.map(|name| {
        quote! {
            ::warren::submit_interpreter!(#name, #self_ty);
        }
    });

    Ok(quote! {
        #input

        impl #impl_generics ::warren::Interpreter for #self_ty #where_clause {
            fn handler(&self, method: &str) -> ::core::option::Option<::warren::ReadHandler<'_>> {
                match method {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }

            #log_impl
        }

        #registration
    })
}

/// The method name a function handles, if it is a handler.
///
/// Strips the `#[routing_key]` attribute from the function.
fn handler_method(func: &mut ImplItemFn) -> syn::Result<Option<String>> {
    let mut routing_key = None;
    let mut error = None;

    func.attrs.retain(|attr| {
        if !attr.path().is_ident(ROUTING_KEY_ATTR) {
            return true;
        }
        match attr.parse_args::<LitStr>() {
            Ok(lit) if routing_key.is_none() => routing_key = Some(lit.value()),
            Ok(lit) => {
                error = Some(syn::Error::new(lit.span(), "duplicate #[routing_key]"));
            }
            Err(err) => error = Some(err),
        }
        false
    });

    if let Some(err) = error {
        return Err(err);
    }
    if let Some(key) = routing_key {
        return Ok(Some(camelize(&key)));
    }

    let name = func.sig.ident.to_string();
    match name.strip_prefix(READ_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('_') => Ok(Some(camelize(rest))),
        _ => Ok(None),
    }
}

fn check_signature(func: &ImplItemFn) -> syn::Result<()> {
    if func.sig.asyncness.is_none() {
        return Err(syn::Error::new_spanned(
            &func.sig.fn_token,
            "Interpreter handler must be async",
        ));
    }

    let mut inputs = func.sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some() && receiver.mutability.is_none() => {}
        _ => {
            return Err(syn::Error::new_spanned(
                &func.sig,
                "Interpreter handler must take `&self`",
            ));
        }
    }

    if inputs.count() != 2 {
        return Err(syn::Error::new_spanned(
            &func.sig.inputs,
            "Interpreter handler must have the signature fn(&self, body: Body, ctx: &DispatchContext)",
        ));
    }

    Ok(())
}

/// `read` followed by every alphanumeric segment with its first character upper-cased.
fn camelize(key: &str) -> String {
    let mut name = String::from(READ_PREFIX);
    for segment in key.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_function_suffix() {
        assert_eq!(camelize("_order_created"), "readOrderCreated");
        assert_eq!(camelize(""), "read");
    }

    #[test]
    fn test_camelize_routing_key() {
        assert_eq!(camelize("order.reCreated"), "readOrderReCreated");
        assert_eq!(camelize("v2.items"), "readV2Items");
    }
}
