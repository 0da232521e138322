pub mod center;
pub mod footer;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use crate::shared::notify::Avisos;
use footer::Footer;
use leptos::prelude::*;
use top_header::TopHeader;

/// Armazón principal de la aplicación.
///
/// ```text
/// +--------------------------------+
/// |           TopHeader            |
/// +--------------------------------+
/// |  Sidebar  |      Content       |
/// |   (Left)  |     (Center)       |
/// +--------------------------------+
/// |            Footer              |
/// +--------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // El panel lateral usa ctx.left_open para su visibilidad
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <Footer />
            <Avisos />
        </div>
    }
}
