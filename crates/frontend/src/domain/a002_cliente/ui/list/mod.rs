use crate::domain::a002_cliente::api::fetch_clientes;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_cliente::aggregate::Cliente;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ClienteList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal::<Vec<Cliente>>(Vec::new());
    let (buscar, set_buscar) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_items = move |texto: String| {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match fetch_clientes(&texto).await {
                Ok(v) => set_items.set(v),
                Err(e) => set_error.set(Some(e)),
            }

            set_loading.set(false);
        });
    };

    // Carga inicial y recarga al cambiar la búsqueda
    Effect::new(move |_| {
        load_items(buscar.get());
    });

    let open_detail = move |id: String, nombre: String| {
        tabs_store.open_tab(
            &format!("a002_cliente_detail_{}", id),
            &detail_tab_label("Cliente", &nombre),
        );
    };

    let open_new = move |_| {
        tabs_store.open_tab("a002_cliente_new", "Nuevo cliente");
    };

    view! {
        <PageFrame page_id="a002_cliente--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Clientes"</h2>
                <div class="page__toolbar">
                    <SearchInput
                        value=buscar
                        on_change=Callback::new(move |texto: String| set_buscar.set(texto))
                        placeholder="Nombre, NIF o ciudad..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=open_new
                    >
                        "Nuevo cliente"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="page__error">{e}</div>
            })}

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                        <TableHeaderCell>"NIF"</TableHeaderCell>
                        <TableHeaderCell>"Ciudad"</TableHeaderCell>
                        <TableHeaderCell>"Teléfono"</TableHeaderCell>
                        <TableHeaderCell>"Email"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get()
                        key=|c| c.to_string_id()
                        children=move |cliente| {
                            let id = cliente.to_string_id();
                            let nombre = cliente.nombre().to_string();
                            let nombre_click = nombre.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                class="page__link"
                                                on:click=move |_| open_detail(id.clone(), nombre_click.clone())
                                            >
                                                {nombre}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{cliente.nif.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{cliente.ciudad.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{cliente.telefono.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{cliente.email.clone()}</TableCellLayout></TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </PageFrame>
    }
}
