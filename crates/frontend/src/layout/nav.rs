//! Top navigation bar

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { path: "/", label: "Tiendas", icon: "store" },
    NavItem { path: "/proveedores", label: "Proveedores", icon: "suppliers" },
    NavItem { path: "/productos", label: "Productos", icon: "products" },
    NavItem { path: "/compras", label: "Compras", icon: "purchases" },
];

/// Whether `pathname` belongs to the section rooted at `path`
fn is_active(path: &str, pathname: &str) -> bool {
    if path == "/" {
        pathname == "/" || pathname.is_empty()
    } else {
        pathname == path || pathname.starts_with(&format!("{}/", path))
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="nav">
            <span class="nav__brand">"Inventario"</span>
            <ul class="nav__list">
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        let active = move || location.pathname.with(|p| is_active(item.path, p));
                        view! {
                            <li class="nav__item" class:nav__item--active=active>
                                <A href=item.path>
                                    <span class="nav__icon">{icon(item.icon)}</span>
                                    <span class="nav__label">{item.label}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_only_matches_itself() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/compras"));
    }

    #[test]
    fn sections_match_nested_paths() {
        assert!(is_active("/compras", "/compras"));
        assert!(is_active("/compras", "/compras/12"));
        assert!(!is_active("/productos", "/productos-viejos"));
    }
}
