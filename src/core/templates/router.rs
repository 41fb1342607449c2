// src/core/templates/router.rs

// Discovery filter: a page module is dropped (with a console.error) when it is
// empty, has no object export, or lacks `path` or `component`. Remaining pages
// are still registered.
const HISTORY_ROUTER: &str = r#"// Routes are discovered from every views/**/page.js
import { createRouter, createWebHistory } from 'vue-router';

const routeModules = import.meta.glob('../views/**/page.js', { eager: true });

const routes = Object.keys(routeModules)
  .map((key) => {
    const module = routeModules[key];

    if (!module) {
      console.error(`[Route] Empty module: ${key}`);
      return null;
    }

    const config = module.default || module;

    if (!config || typeof config !== 'object') {
      console.error(`[Route] Export is not an object: ${key}`, module);
      return null;
    }

    if (!config.path) {
      console.error(`[Route] Missing "path" field: ${key}`, config);
      return null;
    }

    if (!config.component) {
      console.error(`[Route] Missing "component" field: ${key}`, config);
      return null;
    }

    return config;
  })
  .filter(Boolean);

export default createRouter({
  history: createWebHistory(),
  routes
});
"#;

const LEGACY_ROUTER: &str = r#"import Vue from 'vue';
import VueRouter from 'vue-router';

Vue.use(VueRouter);

const routes = [
  // { path: '/', component: () => import('@/views/Home.vue') }
];

export default new VueRouter({
  mode: 'history',
  routes
});
"#;

/// `router/index.js` for Vue Router 4.
pub(super) fn history_router(_name: &str) -> String {
    HISTORY_ROUTER.to_string()
}

/// `router/index.js` for Vue Router 3.
pub(super) fn legacy_router(_name: &str) -> String {
    LEGACY_ROUTER.to_string()
}
