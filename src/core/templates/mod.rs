// src/core/templates/mod.rs

//! # Template Selector
//!
//! Every generated file body comes from a plain `fn(&str) -> String` renderer.
//! [`renderer`] is the lookup table over `ArtifactKind × VersionTag`; it is a flat
//! `match`, so the compiler rejects any combination that has no renderer.

mod component;
mod module;
mod router;
mod store;

use crate::models::{ArtifactKind, VersionTag};

/// A template body renderer. The argument is the artifact name.
pub type Renderer = fn(&str) -> String;

/// Returns the renderer for a kind and version.
pub fn renderer(kind: ArtifactKind, version: VersionTag) -> Renderer {
    use ArtifactKind as K;
    use VersionTag as V;

    match (kind, version) {
        (K::ComponentIndex, V::V3) => component::index_setup,
        (K::ComponentIndex, V::V2) => component::index_options,
        (K::ComponentTest, V::V3) => component::test_setup,
        (K::ComponentTest, V::V2) => component::test_options,
        (K::RouteConfig, _) => component::route_config,
        (K::RouterEntry, V::V3) => router::history_router,
        (K::RouterEntry, V::V2) => router::legacy_router,
        (K::StoreIndex, V::V3) => store::pinia_index,
        (K::StoreIndex, V::V2) => store::unsupported_index,
        (K::StoreEntry, V::V3) => store::pinia_store,
        (K::StoreEntry, V::V2) => store::vuex_module,
        (K::ApiModule, _) => module::api,
        (K::GenericModule, _) => module::generic,
    }
}

/// Renders the body of an artifact.
pub fn render(kind: ArtifactKind, name: &str, version: VersionTag) -> String {
    renderer(kind, version)(name)
}

/// CSS class shared by a component and its styles: `Dashboard` -> `dashboard-container`.
fn css_class(name: &str) -> String {
    format!("{}-container", name.to_lowercase())
}

/// Route path of a page: `Dashboard` -> `/dashboard`.
fn route_path(name: &str) -> String {
    format!("/{}", name.to_lowercase())
}

/// Upper-cases the first character.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a file-safe name into a JavaScript identifier: `user-card` -> `userCard`.
///
/// A leading digit gets an `_` prefix: `2fa` -> `_2fa`.
fn js_identifier(name: &str) -> String {
    let mut parts = name.split('-').filter(|p| !p.is_empty());
    let mut ident = parts.next().unwrap_or_default().to_string();
    for part in parts {
        ident.push_str(&capitalize(part));
    }
    if !ident.starts_with(|c: char| c.is_alphabetic() || c == '_' || c == '$') {
        ident.insert(0, '_');
    }
    ident
}

/// Identifier used when a component is imported: `user-card` -> `UserCard`.
fn component_identifier(name: &str) -> String {
    capitalize(&js_identifier(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSIONS: [VersionTag; 2] = [VersionTag::V2, VersionTag::V3];

    #[test]
    fn test_every_combination_renders_non_empty() {
        for kind in ArtifactKind::ALL {
            for version in VERSIONS {
                let body = render(kind, "Dashboard", version);
                assert!(!body.trim().is_empty(), "{:?}/{:?} is empty", kind, version);
                assert!(body.ends_with('\n'), "{:?}/{:?} lacks a trailing newline", kind, version);
            }
        }
    }

    #[test]
    fn test_component_index_versions() {
        let v3 = render(ArtifactKind::ComponentIndex, "Dashboard", VersionTag::V3);
        assert!(v3.contains("<script setup>"));
        assert!(v3.contains("defineOptions({ name: 'Dashboard' })"));
        assert!(v3.contains("class=\"dashboard-container\""));
        assert!(v3.contains(".dashboard-container {"));

        let v2 = render(ArtifactKind::ComponentIndex, "Dashboard", VersionTag::V2);
        assert!(!v2.contains("<script setup>"));
        assert!(v2.contains("export default {"));
        assert!(v2.contains("name: 'Dashboard'"));
        assert!(v2.contains("class=\"dashboard-container\""));
    }

    #[test]
    fn test_component_test_imports_index() {
        for version in VERSIONS {
            let body = render(ArtifactKind::ComponentTest, "Dashboard", version);
            assert!(body.contains("import Dashboard from './index.vue';"));
            assert!(body.contains("<Dashboard />"));
        }
        let v2 = render(ArtifactKind::ComponentTest, "Dashboard", VersionTag::V2);
        assert!(v2.contains("components: { Dashboard }"));
    }

    #[test]
    fn test_component_test_uses_valid_identifier() {
        let body = render(ArtifactKind::ComponentTest, "user-card", VersionTag::V3);
        assert!(body.contains("import UserCard from './index.vue';"));
        assert!(body.contains("<UserCard />"));
    }

    #[test]
    fn test_route_config_is_version_independent() {
        let v2 = render(ArtifactKind::RouteConfig, "Dashboard", VersionTag::V2);
        let v3 = render(ArtifactKind::RouteConfig, "Dashboard", VersionTag::V3);
        assert_eq!(v2, v3);
        assert!(v3.contains("path: '/dashboard'"));
        assert!(v3.contains("component: () => import('./index.vue')"));
    }

    #[test]
    fn test_router_entry_versions() {
        let v3 = render(ArtifactKind::RouterEntry, "router", VersionTag::V3);
        assert!(v3.contains("createWebHistory"));
        assert!(v3.contains("import.meta.glob('../views/**/page.js', { eager: true })"));
        assert!(v3.contains("!config.path"));
        assert!(v3.contains("!config.component"));
        assert!(v3.contains(".filter(Boolean)"));

        let v2 = render(ArtifactKind::RouterEntry, "router", VersionTag::V2);
        assert!(v2.contains("Vue.use(VueRouter)"));
        assert!(v2.contains("const routes = ["));
        assert!(!v2.contains("import.meta.glob"));
    }

    #[test]
    fn test_store_index_versions() {
        let v3 = render(ArtifactKind::StoreIndex, "stores", VersionTag::V3);
        assert!(v3.contains("createPinia()"));
        let v2 = render(ArtifactKind::StoreIndex, "stores", VersionTag::V2);
        assert!(v2.contains("console.warn"));
        assert!(!v2.contains("createPinia()"));
    }

    #[test]
    fn test_store_entry_versions() {
        let v3 = render(ArtifactKind::StoreEntry, "User", VersionTag::V3);
        assert!(v3.contains("export const useUserStore = defineStore('user'"));

        let v2 = render(ArtifactKind::StoreEntry, "User", VersionTag::V2);
        assert!(v2.contains("namespaced: true"));
        assert!(v2.contains("INCREMENT(state)"));

        for body in [&v2, &v3] {
            assert!(body.contains("count: 0"));
            assert!(body.contains("increment("));
            assert!(body.contains("double"));
        }
    }

    #[test]
    fn test_modules_are_version_independent() {
        for kind in [ArtifactKind::ApiModule, ArtifactKind::GenericModule] {
            assert_eq!(
                render(kind, "product", VersionTag::V2),
                render(kind, "product", VersionTag::V3)
            );
        }
        let api = render(ArtifactKind::ApiModule, "product", VersionTag::V3);
        assert!(api.contains("export const productApi = {"));
    }

    #[test]
    fn test_name_helpers() {
        assert_eq!(css_class("BlogCard"), "blogcard-container");
        assert_eq!(route_path("BlogCard"), "/blogcard");
        assert_eq!(capitalize("user"), "User");
        assert_eq!(capitalize(""), "");
        assert_eq!(js_identifier("user-profile-card"), "userProfileCard");
        assert_eq!(component_identifier("user-card"), "UserCard");
    }

    #[test]
    fn test_leading_digit_names_stay_valid_identifiers() {
        assert_eq!(js_identifier("2fa"), "_2fa");
        assert_eq!(component_identifier("2fa"), "_2fa");

        let api = render(ArtifactKind::ApiModule, "2fa", VersionTag::V3);
        assert!(api.contains("export const _2faApi = {"));
        let vuex = render(ArtifactKind::StoreEntry, "2fa", VersionTag::V2);
        assert!(vuex.contains("const _2fa = {"));
        assert!(vuex.contains("export default _2fa;"));
        let test = render(ArtifactKind::ComponentTest, "2fa", VersionTag::V3);
        assert!(test.contains("import _2fa from './index.vue';"));
    }
}
