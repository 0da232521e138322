/// Utilidades genéricas para listados (búsqueda, ordenación, componentes UI)
use gloo_timers::callback::Timeout;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait para tipos que admiten ordenación por campo
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Ordena la lista por el campo indicado
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Campo de búsqueda con debounce y botón de limpieza
#[component]
pub fn SearchInput(
    /// Valor actual del filtro
    #[prop(into)]
    value: Signal<String>,
    /// Callback al cambiar el filtro (tras el debounce)
    #[prop(into)]
    on_change: Callback<String>,
    /// Texto de placeholder
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    // Estado local del input (antes del debounce)
    let (input_value, set_input_value) = signal(String::new());

    // Timeout no es Send, hay que guardarlo en almacenamiento local
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Timeout anterior se cancela al soltarse
        let timeout = Timeout::new(300, move || {
            on_change.run(new_value.clone());
        });
        debounce.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Limpiar"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Indicador de ordenación para la cabecera de columna
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Crea el manejador de alternancia de ordenación para una columna
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}
