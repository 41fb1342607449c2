// src/core/templates/store.rs

use super::{capitalize, js_identifier};

const PINIA_INDEX: &str = r#"import { createPinia } from 'pinia';

export default createPinia();
"#;

const UNSUPPORTED_INDEX: &str = r#"// Pinia requires Vue 3.
// Register your Vuex modules here instead.
console.warn('Pinia requires Vue 3');
"#;

/// Store registry bootstrap.
pub(super) fn pinia_index(_name: &str) -> String {
    PINIA_INDEX.to_string()
}

/// Vue 2 has no Pinia; the generated file only warns at runtime.
pub(super) fn unsupported_index(_name: &str) -> String {
    UNSUPPORTED_INDEX.to_string()
}

/// A Pinia store keyed by the lower-cased name, e.g. `useUserStore` / `'user'`.
pub(super) fn pinia_store(name: &str) -> String {
    let key = name.to_lowercase();
    let accessor = capitalize(&js_identifier(name));
    format!(
        r#"import {{ defineStore }} from 'pinia';

export const use{accessor}Store = defineStore('{key}', {{
  state: () => ({{
    count: 0
  }}),
  actions: {{
    increment() {{
      this.count++;
    }}
  }},
  getters: {{
    double: (state) => state.count * 2
  }}
}});
"#
    )
}

/// A namespaced Vuex module with the same surface as [`pinia_store`].
pub(super) fn vuex_module(name: &str) -> String {
    let ident = js_identifier(&name.to_lowercase());
    format!(
        r#"// Vuex store module: {name}
const {ident} = {{
  namespaced: true,
  state: () => ({{
    count: 0
  }}),
  mutations: {{
    INCREMENT(state) {{
      state.count++;
    }}
  }},
  actions: {{
    increment({{ commit }}) {{
      commit('INCREMENT');
    }}
  }},
  getters: {{
    double: (state) => state.count * 2
  }}
}};

export default {ident};
"#
    )
}
