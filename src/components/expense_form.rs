use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use super::{layout::icon_plus, notice::Notifier};
use crate::{model::ExpenseDraft, storage::StoreHandle};

pub const CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Bills",
    "Entertainment",
    "Health",
    "Other",
];

pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    pub store: StoreHandle,
    pub notifier: Notifier,
    pub currency_symbol: String,
    /// Fired after an expense was stored.
    pub on_saved: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let form_date = use_state(today_iso);
    let form_category = use_state(|| CATEGORIES[0].to_string());
    let form_description = use_state(|| "".to_string());
    let form_amount = use_state(|| "".to_string());
    let saving = use_state(|| false);

    let on_submit = {
        let store = props.store.clone();
        let notifier = props.notifier.clone();
        let on_saved = props.on_saved.clone();
        let form_date = form_date.clone();
        let form_category = form_category.clone();
        let form_description = form_description.clone();
        let form_amount = form_amount.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let draft = ExpenseDraft {
                date: (*form_date).clone(),
                category: (*form_category).clone(),
                description: (*form_description).clone(),
                amount: (*form_amount).clone(),
            };
            saving.set(true);

            let store = store.clone();
            let notifier = notifier.clone();
            let on_saved = on_saved.clone();
            let form_date = form_date.clone();
            let form_category = form_category.clone();
            let form_description = form_description.clone();
            let form_amount = form_amount.clone();
            let saving = saving.clone();
            spawn_local(async move {
                match store.add(draft).await {
                    Ok(stored) => {
                        tracing::info!(
                            id = ?stored.map(|expense| expense.id),
                            backend = store.label(),
                            "expense added"
                        );
                        notifier.success("Expense added successfully!");
                        form_date.set(today_iso());
                        form_category.set(CATEGORIES[0].to_string());
                        form_description.set("".to_string());
                        form_amount.set("".to_string());
                        on_saved.emit(());
                    }
                    Err(err) => {
                        tracing::error!("failed to add expense: {err}");
                        notifier.error(err.user_message());
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_date = {
        let form_date = form_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form_date.set(input.value());
        })
    };
    let on_category = {
        let form_category = form_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form_category.set(select.value());
        })
    };
    let on_description = {
        let form_description = form_description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form_description.set(input.value());
        })
    };
    let on_amount = {
        let form_amount = form_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form_amount.set(input.value());
        })
    };

    let field_class = "w-full bg-[#f1f4f9] rounded-[10px] px-3 py-2 text-[11px] text-[#173E63] border-none";

    html! {
        <form id="expenseForm" onsubmit={on_submit} class="bg-white p-5 rounded-[10px] shadow-sm border border-white/50">
            <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{"Add New Expense"}</h4>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-3 mb-4">
                <div class="space-y-1">
                    <label for="date" class="text-[12px] font-bold text-muted-foreground">{"Date"}</label>
                    <input id="date" type="date" required={true} value={(*form_date).clone()} oninput={on_date} class={field_class} />
                </div>
                <div class="space-y-1">
                    <label for="category" class="text-[12px] font-bold text-muted-foreground">{"Category"}</label>
                    <select id="category" required={true} onchange={on_category} class={field_class}>
                        { for CATEGORIES.iter().map(|category| html! {
                            <option value={*category} selected={*form_category == *category}>{ *category }</option>
                        }) }
                    </select>
                </div>
                <div class="space-y-1">
                    <label for="description" class="text-[12px] font-bold text-muted-foreground">{"Description"}</label>
                    <input id="description" type="text" required={true} placeholder="Expense description" value={(*form_description).clone()} oninput={on_description} class={field_class} />
                </div>
                <div class="space-y-1">
                    <label for="amount" class="text-[12px] font-bold text-muted-foreground">{ format!("Amount ({})", props.currency_symbol) }</label>
                    <input id="amount" type="number" required={true} min="0" step="0.01" placeholder={format!("{}0.00", props.currency_symbol)} value={(*form_amount).clone()} oninput={on_amount} class={field_class} />
                </div>
            </div>
            <button type="submit" class="w-full bg-[#173E63] text-white py-2 rounded-[10px] text-[10px] font-bold flex items-center justify-center gap-2" disabled={*saving}>
                { icon_plus() }
                { if *saving { "Saving..." } else { "Add Expense" } }
            </button>
        </form>
    }
}
