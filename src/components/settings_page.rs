use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::{layout::page_shell, notice::Notifier};
use crate::{
    settings::{AppSettings, Backend, CURRENCIES},
    storage::BrowserStorage,
};

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    pub notifier: Notifier,
}

/// Persists `next` and publishes it to every consumer of the settings context.
fn apply(settings: &UseStateHandle<AppSettings>, notifier: &Notifier, next: AppSettings) {
    if let Err(err) = next.save(&BrowserStorage) {
        tracing::error!("failed to save settings: {err}");
        notifier.error(err.user_message());
    }
    settings.set(next);
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let Some(settings) = settings else {
        return html! {};
    };

    let on_currency_change = {
        let settings = settings.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            let next = (*settings).clone().with_currency(&input.value());
            apply(&settings, &notifier, next);
        })
    };

    let on_backend_change = {
        let settings = settings.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: Event| {
            let input: HtmlSelectElement = e.target_unchecked_into();
            let next = AppSettings {
                backend: Backend::from_value(&input.value()),
                ..(*settings).clone()
            };
            tracing::info!(backend = ?next.backend, "switching backend");
            apply(&settings, &notifier, next);
        })
    };

    let on_url_change = {
        let settings = settings.clone();
        let notifier = props.notifier.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let url = input.value().trim().to_string();
            if url.is_empty() {
                return;
            }
            let next = AppSettings {
                api_base_url: url,
                ..(*settings).clone()
            };
            apply(&settings, &notifier, next);
        })
    };

    let is_remote = settings.backend == Backend::Remote;

    html! {
        { page_shell(
            "Settings",
            html! {},
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-card rounded-lg p-6 border border-border">
                        <h2 class="text-xl font-bold text-foreground mb-6">{"Preferences"}</h2>
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Currency"}</label>
                                <select onchange={on_currency_change} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary">
                                    { for CURRENCIES.iter().map(|(code, symbol)| html! {
                                        <option value={*code} selected={settings.currency_code == *code}>{ format!("{} ({})", code, symbol) }</option>
                                    }) }
                                </select>
                                <p class="text-xs text-muted-foreground mt-2">{"Currency updates are applied across the tracker and reports."}</p>
                            </div>
                        </div>
                    </div>

                    <div class="bg-card rounded-lg p-6 border border-border">
                        <h2 class="text-xl font-bold text-foreground mb-6">{"Storage"}</h2>
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Backend"}</label>
                                <select onchange={on_backend_change} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary">
                                    <option value={Backend::Local.value()} selected={!is_remote}>{"This browser (demo mode)"}</option>
                                    <option value={Backend::Remote.value()} selected={is_remote}>{"Expense server"}</option>
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Server URL"}</label>
                                <input type="url" value={settings.api_base_url.clone()} disabled={!is_remote} onchange={on_url_change} class="w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary" />
                                <p class="text-xs text-muted-foreground mt-2">{"Used only when the expense server backend is selected."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            }
        ) }
    }
}
