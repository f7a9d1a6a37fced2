use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    expense_form::ExpenseForm,
    expense_table::ExpenseTable,
    layout::{icon_credit_card, page_shell},
    notice::Notifier,
};
use crate::{
    model::Expense, sequence::RequestSequence, settings::AppSettings, storage::StoreHandle, view,
};

/// Blocking browser prompt; anything but an explicit OK declines.
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message("Delete this expense?").ok())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ExpensePageProps {
    pub store: StoreHandle,
    pub notifier: Notifier,
}

#[function_component(ExpensePage)]
pub fn expense_page(props: &ExpensePageProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "$".to_string());

    let expenses = use_state(|| None::<Vec<Expense>>);
    let sequence = use_memo(|_| RequestSequence::new(), ());

    let load = {
        let store = props.store.clone();
        let notifier = props.notifier.clone();
        let expenses = expenses.clone();
        let sequence = (*sequence).clone();
        Callback::from(move |_: ()| {
            let token = sequence.issue();
            expenses.set(None);

            let store = store.clone();
            let notifier = notifier.clone();
            let expenses = expenses.clone();
            let sequence = sequence.clone();
            spawn_local(async move {
                let result = store.list().await;
                if !sequence.is_latest(token) {
                    tracing::debug!(token, "dropping stale expense list");
                    return;
                }
                match result {
                    Ok(list) => expenses.set(Some(list)),
                    Err(err) => {
                        tracing::error!("failed to load expenses: {err}");
                        notifier.error(err.user_message());
                        expenses.set(Some(vec![]));
                    }
                }
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with_deps(
            move |_| {
                load.emit(());
                || ()
            },
            props.store.clone(),
        );
    }

    let on_delete = {
        let store = props.store.clone();
        let notifier = props.notifier.clone();
        let load = load.clone();
        Callback::from(move |id: i64| {
            if !confirm_delete() {
                return;
            }

            let store = store.clone();
            let notifier = notifier.clone();
            let load = load.clone();
            spawn_local(async move {
                match store.remove(id).await {
                    Ok(true) => {
                        tracing::info!(id, backend = store.label(), "expense deleted");
                        notifier.success("Expense deleted successfully!");
                    }
                    Ok(false) => {
                        tracing::warn!(id, "expense to delete was not found");
                        notifier.error("Expense not found");
                    }
                    Err(err) => {
                        tracing::error!(id, "failed to delete expense: {err}");
                        notifier.error(err.user_message());
                        return;
                    }
                }
                load.emit(());
            });
        })
    };

    let table = view::expense_table((*expenses).as_deref(), &currency_symbol);
    let total = table.total.clone();

    html! {
        { page_shell(
            "Expense Tracker",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 lg:grid-cols-12 gap-6 items-stretch">
                        <div class="lg:col-span-4 bg-white p-5 rounded-[10px] shadow-sm border border-white/50 flex flex-col justify-center">
                            <div class="flex items-center gap-2 mb-1">
                                <div class="p-1.5 bg-[#f1f5f9] rounded-lg">{ icon_credit_card() }</div>
                                <span class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest">{"Total Expenses"}</span>
                            </div>
                            <h3 id="totalExpenses" class="text-2xl font-bold text-[#1D617A] tracking-tight">{ total }</h3>
                        </div>

                        <div class="lg:col-span-8">
                            <ExpenseForm
                                store={props.store.clone()}
                                notifier={props.notifier.clone()}
                                currency_symbol={currency_symbol.clone()}
                                on_saved={load.clone()}
                            />
                        </div>
                    </div>
                    <ExpenseTable view={table} on_delete={on_delete} />
                </>
            }
        ) }
    }
}
