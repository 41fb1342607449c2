// build.rs
//
// Compiles `locales/<lang>.toml` into a `t!` macro so every user-facing string
// is resolved at compile time. Missing keys are a compile error.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

const FALLBACK_LANG: &str = "en";

fn main() {
    let lang = select_language();
    println!("cargo:rustc-env=SFC_GEN_LANG_EFFECTIVE={}", lang);

    println!("cargo:rerun-if-env-changed=SFC_GEN_LANG");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locales/");

    let translations = load_translations(&lang);
    let macro_code = render_macro(&translations);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is always set by cargo");
    let dest_path = Path::new(&out_dir).join("translations.rs");
    fs::write(&dest_path, macro_code).expect("Failed to write translations.rs");
}

/// Picks the language: a `lang_*` feature wins, then `SFC_GEN_LANG`, then English.
fn select_language() -> String {
    let mut active_langs: Vec<String> = env::vars()
        .filter_map(|(key, _)| {
            key.strip_prefix("CARGO_FEATURE_LANG_")
                .map(str::to_lowercase)
        })
        .collect();
    active_langs.sort();

    match active_langs.first() {
        Some(first) => {
            if active_langs.len() > 1 {
                println!(
                    "cargo:warning=Multiple language features enabled ({:?}). Using '{}'.",
                    active_langs, first
                );
            }
            first.clone()
        }
        None => env::var("SFC_GEN_LANG").unwrap_or_else(|_| FALLBACK_LANG.to_string()),
    }
}

/// Loads the English table and overlays the selected language on top of it.
fn load_translations(lang: &str) -> BTreeMap<String, String> {
    let fallback_path = format!("locales/{}.toml", FALLBACK_LANG);
    let fallback_content = fs::read_to_string(&fallback_path)
        .unwrap_or_else(|_| panic!("Failed to read fallback language file: {}", fallback_path));
    let mut translations: BTreeMap<String, String> = toml::from_str(&fallback_content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", fallback_path, e));

    if lang == FALLBACK_LANG {
        return translations;
    }

    let lang_path = format!("locales/{}.toml", lang);
    match fs::read_to_string(&lang_path) {
        Ok(content) => {
            let specific: BTreeMap<String, String> = toml::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse {}: {}", lang_path, e));
            translations.extend(specific);
        }
        Err(_) => println!(
            "cargo:warning=Language file '{}' not found. Falling back to '{}'.",
            lang_path, FALLBACK_LANG
        ),
    }

    translations
}

/// Emits one `macro_rules!` arm per key plus a compile-time error arm.
fn render_macro(translations: &BTreeMap<String, String>) -> String {
    let mut code = String::from("#[macro_export]\nmacro_rules! t {\n");
    for (key, value) in translations {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        code.push_str(&format!("    (\"{}\") => {{ \"{}\" }};\n", key, escaped));
    }
    code.push_str(
        "    ($key:expr) => {{ compile_error!(concat!(\"Missing translation key: \", $key)) }};\n",
    );
    code.push('}');
    code
}
