use yew::prelude::*;

use crate::{
    components::{
        expense_page::ExpensePage,
        layout::{Layout, Page},
        notice::{use_notifier, NoticeBanner},
        settings_page::SettingsPage,
        summary_page::SummaryPage,
    },
    settings::{AppSettings, Backend},
    storage::{open_store, BrowserStorage},
};

#[function_component(App)]
pub fn app() -> Html {
    let active_page = use_state(|| Page::Expenses);
    let settings = use_state(|| AppSettings::load(&BrowserStorage));
    let notifier = use_notifier();

    // Rebuilt only when the backend choice changes, so currency edits keep loaded data.
    let store = use_memo(
        |(backend, api_base_url): &(Backend, String)| open_store(*backend, api_base_url),
        (settings.backend, settings.api_base_url.clone()),
    );

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let content = match *active_page {
        Page::Expenses => html! { <ExpensePage store={(*store).clone()} notifier={notifier.clone()} /> },
        Page::Summary => html! { <SummaryPage store={(*store).clone()} notifier={notifier.clone()} /> },
        Page::Settings => html! { <SettingsPage notifier={notifier.clone()} /> },
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <NoticeBanner notifier={notifier.clone()} />
            <Layout active_page={*active_page} on_select={on_select} backend_label={store.label()}>
                { content }
            </Layout>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}
