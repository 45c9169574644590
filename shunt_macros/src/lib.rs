use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, Type};

fn formatted_arg_error_msg(arg_name: &str, arg_pos: usize, fn_name: &str, ty: &str) -> String {
    format!(
        "Expected argument {} ('{}') of {} to be representable as {}",
        arg_pos, arg_name, fn_name, ty
    )
}

/// Turns a function with typed parameters into an `apply` callback of the
/// shape `fn(&[Number]) -> Result<Number, DomainError>`.
///
/// Supported parameter types are `f64`, `i64`, `Number` and `BigDecimal`.
/// `Number` and `DomainError` must be in scope at the call site.
#[proc_macro_attribute]
pub fn shunt_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;

    let mut arg_extractions = Vec::new();
    let mut arg_names = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        if let FnArg::Typed(PatType { pat, ty, .. }) = arg {
            let arg_name = match **pat {
                syn::Pat::Ident(ref ident) => &ident.ident,
                _ => panic!("Unsupported pattern"),
            };

            let extract_code = match **ty {
                Type::Path(ref type_path) => {
                    let type_ident = &type_path.path.segments.last().unwrap().ident;
                    let type_name = type_ident.to_string();
                    let err_msg = formatted_arg_error_msg(
                        &arg_name.to_string(),
                        i,
                        &fn_name.to_string(),
                        &type_name,
                    );
                    match type_name.as_str() {
                        "f64" => quote! {
                            let #arg_name: f64 = match ::num_traits::ToPrimitive::to_f64(&args[#i]) {
                                Some(n) => n,
                                None => return Err(DomainError::new(#err_msg)),
                            };
                        },
                        "i64" => quote! {
                            let #arg_name: i64 = match ::num_traits::ToPrimitive::to_i64(&args[#i]) {
                                Some(n) => n,
                                None => return Err(DomainError::new(#err_msg)),
                            };
                        },
                        "Number" | "BigDecimal" => quote! {
                            let #arg_name = args[#i].clone();
                        },
                        _ => panic!("Unsupported type {}", type_ident),
                    }
                }
                _ => panic!("Unsupported argument type"),
            };

            arg_extractions.push(extract_code);
            arg_names.push(arg_name.clone());
        }
    }

    let args_len = arg_names.len();
    let expanded = quote! {
        #fn_vis fn #fn_name(args: &[Number]) #fn_output {
            if args.len() != #args_len {
                return Err(DomainError::new(format!(
                    "Expected {} arguments, but got {}",
                    #args_len,
                    args.len()
                )));
            }

            #(#arg_extractions)*

            #fn_body
        }
    };

    TokenStream::from(expanded)
}
