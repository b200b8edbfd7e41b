use super::view_model::ShopFormViewModel;
use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::{parse_time_input, time_input_value};
use crate::shared::icons::icon;
use contracts::domain::a001_shop::{day_label, OpeningInterval};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

#[component]
fn IntervalRow(vm: ShopFormViewModel, index: usize, interval: OpeningInterval) -> impl IntoView {
    view! {
        <div class="interval-row">
            <label>
                "Jour"
                <select on:change=move |ev| {
                    if let Ok(day) = event_target_value(&ev).parse::<u8>() {
                        vm.set_day(index, day);
                    }
                }>
                    {(1u8..=7)
                        .map(|day| {
                            view! {
                                <option value=day.to_string() selected=interval.day == day>
                                    {day_label(day)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label>
                "Ouvre à"
                <input
                    type="time"
                    prop:value=time_input_value(interval.open_at)
                    on:change=move |ev| {
                        if let Some(time) = parse_time_input(&event_target_value(&ev)) {
                            vm.set_open_at(index, time);
                        }
                    }
                />
            </label>
            <label>
                "Ferme à"
                <input
                    type="time"
                    prop:value=time_input_value(interval.close_at)
                    on:change=move |ev| {
                        if let Some(time) = parse_time_input(&event_target_value(&ev)) {
                            vm.set_close_at(index, time);
                        }
                    }
                />
            </label>
            <button
                class="button button--icon button--warning"
                title="Retirer"
                on:click=move |_| vm.remove_interval(index)
            >
                {icon("x")}
            </button>
        </div>
    }
}

#[component]
pub fn ShopForm() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let navigate = use_navigate();

    let vm = ShopFormViewModel::new(ctx);
    vm.load_if_needed(params.with_untracked(|p| p.get("id")));

    let on_saved: Rc<dyn Fn(String)> = Rc::new(move |id: String| {
        navigate(&format!("/shop/{}", id), Default::default());
    });

    view! {
        <div class="page form-page">
            <h2 class="form-page__title">
                {move || if vm.is_edit_mode() { "Modifier la boutique" } else { "Ajouter une boutique" }}
            </h2>

            <fieldset class="form-section">
                <legend>"Informations de la boutique"</legend>
                <div class="form-group">
                    <label for="name">"Nom"</label>
                    <input
                        type="text"
                        id="name"
                        class:invalid=move || vm.field_error("name").is_some()
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                    />
                    {move || vm.field_error("name").map(|e| view! { <span class="field-error">{e}</span> })}
                </div>
                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="in_vacations"
                        prop:checked=move || vm.form.with(|f| f.in_vacations)
                        on:change=move |ev| vm.set_in_vacations(event_target_checked(&ev))
                    />
                    <label for="in_vacations">"En congé"</label>
                </div>
            </fieldset>

            <fieldset class="form-section">
                <legend>"Horaires d'ouverture de la boutique"</legend>
                {move || vm.field_error("openingHours").map(|e| view! { <span class="field-error">{e}</span> })}
                <div class="interval-list">
                    {move || {
                        vm.form
                            .with(|f| f.opening_hours.intervals().to_vec())
                            .into_iter()
                            .enumerate()
                            .map(|(index, interval)| view! { <IntervalRow vm=vm index=index interval=interval /> })
                            .collect_view()
                    }}
                </div>
                <button class="button button--secondary" on:click=move |_| vm.add_interval()>
                    {icon("plus")}
                    "Ajouter des horaires"
                </button>
            </fieldset>

            <div class="form-actions">
                <button
                    class="button button--primary"
                    disabled=move || vm.saving.get()
                    on:click={
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                >
                    {icon("save")}
                    "Valider"
                </button>
            </div>
        </div>
    }
}
