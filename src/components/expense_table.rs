use yew::prelude::*;

use super::layout::icon_trash;
use crate::view::{ExpenseTableView, TableBody};

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub view: ExpenseTableView,
    pub on_delete: Callback<i64>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    html! {
        <div class="bg-card rounded-2xl shadow-md border border-border overflow-hidden">
            <div class="p-5 border-b border-border">
                <h3 class="font-bold text-lg text-foreground">{"Expenses History"}</h3>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold">{"Category"}</th>
                            <th class="px-8 py-4 font-bold">{"Description"}</th>
                            <th class="px-8 py-4 font-bold">{"Amount"}</th>
                            <th class="px-8 py-4 font-bold">{"Action"}</th>
                        </tr>
                    </thead>
                    <tbody id="expenseTableBody" class="divide-y divide-border">
                        { match &props.view.body {
                            TableBody::Placeholder(text) => html! {
                                <tr><td colspan="5" class="loading px-8 py-6 text-center text-muted-foreground">{ *text }</td></tr>
                            },
                            TableBody::Rows(rows) => html! {
                                <>
                                    { for rows.iter().map(|row| {
                                        let on_delete = props.on_delete.clone();
                                        let id = row.id;
                                        html! {
                                            <tr key={row.id} class="text-sm hover:bg-muted/40 transition-colors group">
                                                <td class="px-8 py-4 text-muted-foreground">{ row.date.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ row.category.clone() }</span>
                                                </td>
                                                <td class="px-8 py-4 text-foreground">{ row.description.clone() }</td>
                                                <td class="px-8 py-4 font-semibold text-foreground">{ row.amount.clone() }</td>
                                                <td class="px-8 py-4">
                                                    <button type="button" class="btn-delete p-2 rounded-full hover:bg-red-50" aria-label="Delete" onclick={Callback::from(move |_| on_delete.emit(id))}>
                                                        { icon_trash() }
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }) }
                                </>
                            },
                        } }
                    </tbody>
                </table>
            </div>
        </div>
    }
}
