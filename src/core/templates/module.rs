// src/core/templates/module.rs

use super::js_identifier;

/// `api/<name>.js`
pub(super) fn api(name: &str) -> String {
    let ident = js_identifier(name);
    format!(
        r#"/**
 * {name} API
 */
export const {ident}Api = {{
  // getList: () => axios.get('/api/{name}')
}};
"#
    )
}

/// Any other module, including `index.js` of an unknown directory.
pub(super) fn generic(name: &str) -> String {
    format!(
        r#"/**
 * {name} module
 */
export default {{
  // logic
}};
"#
    )
}
