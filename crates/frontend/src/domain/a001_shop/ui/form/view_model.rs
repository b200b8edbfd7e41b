use crate::domain::a001_shop::api;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_shop::{OpeningInterval, ShopDto, ShopValidationError, TimeOfDay};
use contracts::domain::common::FormErrors;
use leptos::prelude::*;
use std::rc::Rc;

/// What a submit attempt is allowed to do with the current draft
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCheck {
    /// Show the messages next to their fields
    Fields(FormErrors),
    /// Refuse the save with a single toast
    Conflict(String),
    Ready,
}

pub fn check_draft(draft: &ShopDto) -> SubmitCheck {
    match draft.check_submittable() {
        Ok(()) => SubmitCheck::Ready,
        Err(ShopValidationError::Fields(errors)) => SubmitCheck::Fields(errors),
        Err(ShopValidationError::OpeningHours(e)) => SubmitCheck::Conflict(e.to_string()),
    }
}

/// ViewModel for the shop form
#[derive(Clone, Copy)]
pub struct ShopFormViewModel {
    pub form: RwSignal<ShopDto>,
    pub errors: RwSignal<FormErrors>,
    pub saving: RwSignal<bool>,
    ctx: AppGlobalContext,
}

impl ShopFormViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            form: RwSignal::new(ShopDto::default()),
            errors: RwSignal::new(FormErrors::new()),
            saving: RwSignal::new(false),
            ctx,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.get(field).map(str::to_string))
    }

    /// Load the shop when editing
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let ctx = self.ctx;
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(&existing_id).await {
                Ok(shop) => form.set(ShopDto::from(shop)),
                Err(e) => {
                    log::error!("Failed to load shop {}: {}", existing_id, e);
                    ctx.error(e);
                }
            }
            ctx.set_loading(false);
        });
    }

    pub fn set_name(&self, name: String) {
        self.form.update(|f| f.name = name);
    }

    pub fn set_in_vacations(&self, value: bool) {
        self.form.update(|f| f.in_vacations = value);
    }

    pub fn add_interval(&self) {
        self.form
            .update(|f| f.opening_hours = f.opening_hours.with_appended());
    }

    pub fn remove_interval(&self, index: usize) {
        self.form
            .update(|f| f.opening_hours = f.opening_hours.without(index));
    }

    fn edit_interval(&self, index: usize, edit: impl FnOnce(&mut OpeningInterval)) {
        self.form.update(|f| {
            if let Some(mut interval) = f.opening_hours.get(index).copied() {
                edit(&mut interval);
                f.opening_hours = f.opening_hours.with_replaced(index, interval);
            }
        });
    }

    pub fn set_day(&self, index: usize, day: u8) {
        self.edit_interval(index, |i| i.day = day);
    }

    pub fn set_open_at(&self, index: usize, time: TimeOfDay) {
        self.edit_interval(index, |i| i.open_at = time);
    }

    pub fn set_close_at(&self, index: usize, time: TimeOfDay) {
        self.edit_interval(index, |i| i.close_at = time);
    }

    /// Checks the draft, then creates or updates the shop.
    /// A conflicting draft never reaches the server.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(String)>) {
        let current = self.form.get_untracked();

        match check_draft(&current) {
            SubmitCheck::Fields(errors) => {
                self.errors.set(errors);
                return;
            }
            SubmitCheck::Conflict(message) => {
                self.errors.set(FormErrors::new());
                self.ctx.error(message);
                return;
            }
            SubmitCheck::Ready => self.errors.set(FormErrors::new()),
        }

        let ctx = self.ctx;
        let saving = self.saving;
        saving.set(true);
        ctx.set_loading(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match current.id.clone() {
                Some(id) => api::update(&id, &current).await.map(|_| id),
                None => api::create(&current).await,
            };
            match result {
                Ok(id) => {
                    ctx.success(if current.is_edit() {
                        "La boutique a bien été modifiée"
                    } else {
                        "La boutique a bien été créée"
                    });
                    on_saved(id);
                }
                Err(e) => {
                    log::error!("Failed to save shop: {}", e);
                    ctx.error(if current.is_edit() {
                        "Une erreur est survenue lors de la modification"
                    } else {
                        "Une erreur est survenue lors de la création"
                    });
                }
            }
            saving.set(false);
            ctx.set_loading(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_shop::OpeningHoursSet;

    fn at(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, 0).unwrap()
    }

    #[test]
    fn test_missing_name_is_a_field_error() {
        match check_draft(&ShopDto::default()) {
            SubmitCheck::Fields(errors) => assert_eq!(errors.get("name"), Some("Ce champ est requis")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_overlap_is_refused_with_one_message() {
        let draft = ShopDto {
            name: "Boulangerie".into(),
            opening_hours: OpeningHoursSet::new(vec![
                OpeningInterval::new(1, at(9, 0), at(12, 0)),
                OpeningInterval::new(1, at(11, 0), at(14, 0)),
            ]),
            ..Default::default()
        };
        assert_eq!(
            check_draft(&draft),
            SubmitCheck::Conflict("Les horaires se chevauchent pour le même jour".into())
        );
    }

    #[test]
    fn test_split_shift_is_ready() {
        let draft = ShopDto {
            name: "Boulangerie".into(),
            opening_hours: OpeningHoursSet::new(vec![
                OpeningInterval::new(1, at(9, 0), at(12, 0)),
                OpeningInterval::new(1, at(12, 0), at(18, 0)),
            ]),
            ..Default::default()
        };
        assert_eq!(check_draft(&draft), SubmitCheck::Ready);
    }
}
