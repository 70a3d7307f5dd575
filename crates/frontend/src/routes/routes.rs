use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_store::ui::list::StoreList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_purchase::ui::board::InventoryBoardPage;
use crate::layout::Shell;

#[component]
fn NotFound() -> impl IntoView {
    view! { <div class="empty-state">"Página no encontrada"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=StoreList />
                    <Route path=path!("/proveedores") view=SupplierList />
                    <Route path=path!("/productos") view=ProductList />
                    <Route path=path!("/compras") view=InventoryBoardPage />
                </Routes>
            </Shell>
        </Router>
    }
}
