use proc_macro2::TokenStream;
use quote::quote;
use std::env;
use std::fs;
use std::path::Path;

// Note: These types are only used in build.rs for parsing the TOML file
// The actual types used in the crate are generated from this data

#[derive(Debug, serde::Deserialize)]
struct PatternConfig {
    pattern: Vec<PatternDef>,
}

#[derive(Debug, serde::Deserialize)]
struct PatternDef {
    name: String,
    enum_name: String,
    const_name: String,
    regex: String,
    display_name: String,
}

fn main() {
    println!("cargo:rerun-if-changed=config/patterns.toml");

    // 讀取 patterns.toml
    let toml_content = fs::read_to_string("config/patterns.toml")
        .expect("Failed to read config/patterns.toml");

    let config: PatternConfig =
        toml::from_str(&toml_content).expect("Failed to parse config/patterns.toml");

    // 生成正則定義宏
    let patterns_macro = generate_patterns_macro(&config.pattern);

    // 寫入到輸出目錄
    let out_dir = env::var_os("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("patterns_generated.rs");

    fs::write(&dest_path, patterns_macro.to_string())
        .expect("Failed to write generated pattern code");
}

fn generate_patterns_macro(patterns: &[PatternDef]) -> TokenStream {
    // 為每個正則生成 token
    let pattern_entries: Vec<TokenStream> = patterns
        .iter()
        .map(|def| {
            let enum_name = syn::Ident::new(&def.enum_name, proc_macro2::Span::call_site());
            let const_name = syn::Ident::new(&def.const_name, proc_macro2::Span::call_site());
            let name = &def.name;
            let regex = &def.regex;
            let display_name = &def.display_name;

            quote! {
                (#enum_name, #const_name, #name, #regex, #display_name)
            }
        })
        .collect();

    // 生成完整的宏定義
    quote! {
        /// 主正則定義宏 - 包含所有正則的元數據
        /// 這是所有其他宏的數據源
        macro_rules! patterns {
            ($call:ident) => {
                $call! {
                    #(#pattern_entries),*
                }
            };
        }
    }
}
