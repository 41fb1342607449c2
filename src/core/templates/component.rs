// src/core/templates/component.rs

use super::{component_identifier, css_class, route_path};

/// `index.vue` using `<script setup>`.
pub(super) fn index_setup(name: &str) -> String {
    let class = css_class(name);
    format!(
        r#"<template>
  <div class="{class}">
    <!-- {name} component -->
  </div>
</template>

<script setup>
defineOptions({{ name: '{name}' }});
</script>

<style scoped>
.{class} {{
  /* styles */
}}
</style>
"#
    )
}

/// `index.vue` exporting an options object.
pub(super) fn index_options(name: &str) -> String {
    let class = css_class(name);
    format!(
        r#"<template>
  <div class="{class}">
    <!-- {name} component -->
  </div>
</template>

<script>
export default {{
  name: '{name}'
}}
</script>

<style scoped>
.{class} {{
  /* styles */
}}
</style>
"#
    )
}

/// `test.vue` preview page using `<script setup>`.
pub(super) fn test_setup(name: &str) -> String {
    let ident = component_identifier(name);
    format!(
        r#"<template>
  <div class="test-container">
    <h2>{name} test page</h2>
    <{ident} />
  </div>
</template>

<script setup>
import {ident} from './index.vue';
</script>

<style scoped>
.test-container {{
  padding: 20px;
}}
</style>
"#
    )
}

/// `test.vue` preview page registering the component locally.
pub(super) fn test_options(name: &str) -> String {
    let ident = component_identifier(name);
    format!(
        r#"<template>
  <div class="test-container">
    <h2>{name} test page</h2>
    <{ident} />
  </div>
</template>

<script>
import {ident} from './index.vue';

export default {{
  name: 'Test{ident}',
  components: {{ {ident} }}
}}
</script>

<style scoped>
.test-container {{
  padding: 20px;
}}
</style>
"#
    )
}

/// `page.js` route config picked up by the auto-discovering router.
///
/// A deferred import works for both router generations, so there is one body.
pub(super) fn route_config(name: &str) -> String {
    let path = route_path(name);
    format!(
        r#"/**
 * {name} page route config
 *
 * @route {path}
 * @meta.title        Page title (menus, browser tab)
 * @meta.requiresAuth Whether login is required
 * @meta.roles        Roles allowed to visit the page
 * @meta.keepAlive    Whether the component instance is cached
 */

export default {{
  path: '{path}',
  name: '{name}',
  meta: {{
    title: '{name}',
    requiresAuth: true,
    roles: ['admin'],
    keepAlive: false,
    // hidden: false,
    // order: 99
  }},
  component: () => import('./index.vue'),
  // redirect: '{path}/list',
  children: [
    // {{
    //   path: 'list',
    //   name: '{name}List',
    //   component: () => import('./views/List.vue'),
    //   meta: {{ title: '{name} list' }}
    // }}
  ]
}};
"#
    )
}
