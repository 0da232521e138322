use crate::domain::a003_presupuesto::draft::BorradorStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotifyService;
use crate::system::auth::context::provide_auth;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Contextos globales de la aplicación: pestañas/layout, avisos (toasts),
    // sesión y borrador del presupuesto en curso (respaldado en localStorage)
    provide_context(AppGlobalContext::new());
    provide_context(NotifyService::new());
    provide_auth();
    provide_context(BorradorStore::new());

    view! {
        <AppRoutes />
    }
}
