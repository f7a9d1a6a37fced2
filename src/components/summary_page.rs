use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{layout::page_shell, notice::Notifier};
use crate::{
    model::{CategorySummary, MonthlySummary},
    sequence::RequestSequence,
    settings::AppSettings,
    storage::StoreHandle,
    view::{self, TableBody},
};

#[derive(Properties, PartialEq)]
pub struct SummaryPageProps {
    pub store: StoreHandle,
    pub notifier: Notifier,
}

fn placeholder_row(text: &'static str, columns: &'static str) -> Html {
    html! {
        <tr><td colspan={columns} class="loading px-6 py-6 text-center text-muted-foreground">{ text }</td></tr>
    }
}

#[function_component(SummaryPage)]
pub fn summary_page(props: &SummaryPageProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let currency_symbol = settings
        .as_ref()
        .map(|s| s.currency_symbol.clone())
        .unwrap_or_else(|| "$".to_string());

    let monthly = use_state(|| None::<Vec<MonthlySummary>>);
    let categories = use_state(|| None::<Vec<CategorySummary>>);
    let monthly_sequence = use_memo(|_| RequestSequence::new(), ());
    let category_sequence = use_memo(|_| RequestSequence::new(), ());

    {
        let store = props.store.clone();
        let notifier = props.notifier.clone();
        let monthly = monthly.clone();
        let sequence = (*monthly_sequence).clone();
        use_effect_with_deps(
            move |store: &StoreHandle| {
                let token = sequence.issue();
                monthly.set(None);
                let store = store.clone();
                spawn_local(async move {
                    let result = store.monthly_summary().await;
                    if !sequence.is_latest(token) {
                        tracing::debug!(token, "dropping stale monthly summary");
                        return;
                    }
                    match result {
                        Ok(summary) => monthly.set(Some(summary)),
                        Err(err) => {
                            tracing::error!("failed to load monthly summary: {err}");
                            notifier.error(err.user_message());
                            monthly.set(Some(vec![]));
                        }
                    }
                });
                || ()
            },
            store,
        );
    }

    {
        let store = props.store.clone();
        let notifier = props.notifier.clone();
        let categories = categories.clone();
        let sequence = (*category_sequence).clone();
        use_effect_with_deps(
            move |store: &StoreHandle| {
                let token = sequence.issue();
                categories.set(None);
                let store = store.clone();
                spawn_local(async move {
                    let result = store.category_summary().await;
                    if !sequence.is_latest(token) {
                        tracing::debug!(token, "dropping stale category summary");
                        return;
                    }
                    match result {
                        Ok(summary) => categories.set(Some(summary)),
                        Err(err) => {
                            tracing::error!("failed to load category summary: {err}");
                            notifier.error(err.user_message());
                            categories.set(Some(vec![]));
                        }
                    }
                });
                || ()
            },
            store,
        );
    }

    let monthly_body = view::monthly_summary_view((*monthly).as_deref(), &currency_symbol);
    let category_view = view::category_summary_view((*categories).as_deref(), &currency_symbol);

    html! {
        { page_shell(
            "Summary Report",
            html! {},
            html! {
                <>
                    <div class="bg-card rounded-lg p-6 border border-border">
                        <p class="text-sm text-muted-foreground mb-2">{"Total Expenses"}</p>
                        <h3 class="text-3xl font-bold text-foreground">{ category_view.grand_total.clone() }</h3>
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-lg border border-border overflow-hidden">
                            <div class="px-6 py-4 border-b border-border">
                                <h3 class="text-lg font-bold text-foreground">{"Monthly Summary"}</h3>
                            </div>
                            <table class="w-full text-left border-collapse">
                                <thead class="bg-secondary border-b border-border">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-sm font-semibold text-secondary-foreground">{"Month"}</th>
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Total"}</th>
                                    </tr>
                                </thead>
                                <tbody id="monthlySummary" class="divide-y divide-border">
                                    { match &monthly_body {
                                        TableBody::Placeholder(text) => placeholder_row(*text, "2"),
                                        TableBody::Rows(rows) => html! {
                                            <>
                                                { for rows.iter().map(|row| html! {
                                                    <tr class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-6 py-3 text-foreground">{ row.month.clone() }</td>
                                                        <td class="px-6 py-3 text-right font-semibold text-foreground">{ row.total.clone() }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        },
                                    } }
                                </tbody>
                            </table>
                        </div>

                        <div class="bg-card rounded-lg border border-border overflow-hidden">
                            <div class="px-6 py-4 border-b border-border">
                                <h3 class="text-lg font-bold text-foreground">{"Category Summary"}</h3>
                            </div>
                            <table class="w-full text-left border-collapse">
                                <thead class="bg-secondary border-b border-border">
                                    <tr>
                                        <th class="px-6 py-3 text-left text-sm font-semibold text-secondary-foreground">{"Category"}</th>
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Count"}</th>
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Total"}</th>
                                        <th class="px-6 py-3 text-right text-sm font-semibold text-secondary-foreground">{"Share"}</th>
                                    </tr>
                                </thead>
                                <tbody id="categorySummary" class="divide-y divide-border">
                                    { match &category_view.body {
                                        TableBody::Placeholder(text) => placeholder_row(*text, "4"),
                                        TableBody::Rows(rows) => html! {
                                            <>
                                                { for rows.iter().map(|row| html! {
                                                    <tr class="text-sm hover:bg-muted/30 transition-colors">
                                                        <td class="px-6 py-3 text-foreground">{ row.category.clone() }</td>
                                                        <td class="px-6 py-3 text-right text-muted-foreground">{ row.count.to_string() }</td>
                                                        <td class="px-6 py-3 text-right font-semibold text-foreground">{ row.total.clone() }</td>
                                                        <td class="px-6 py-3 text-right text-foreground">{ row.percentage.clone() }</td>
                                                    </tr>
                                                }) }
                                            </>
                                        },
                                    } }
                                </tbody>
                            </table>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
